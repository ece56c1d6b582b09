//! Diagnosis result panel

use leptos::prelude::*;
use kisan_common::Diagnosis;

#[component]
pub fn DiagnosisPanel(diagnosis: Diagnosis) -> impl IntoView {
    let title = diagnosis.title_parts();
    let confidence = diagnosis.confidence_label();
    let remedy_heading = if diagnosis.is_healthy() {
        "Fertilizers that can be used"
    } else {
        "Medicines that can be used"
    };
    let remedy_link = diagnosis.remedy_link().map(str::to_string);

    view! {
        <aside class="diagnosis-panel">
            <h1 class="disease">{title.disease}</h1>
            {(!title.crop.is_empty()).then(|| view! {
                <p class="muted">"Usually seen in "{title.crop.clone()}</p>
            })}
            <p class="confidence">"Confidence Level - "{confidence}</p>
            <p class="description">{diagnosis.description.clone()}</p>

            <h2>"How to prevent?"</h2>
            <p class="description">{diagnosis.prevent.clone()}</p>

            <h2>{remedy_heading}</h2>
            <RemedyCard
                name=diagnosis.supplement_name.clone()
                image_url=diagnosis.supplement_image_url.clone()
                link=remedy_link
            />
        </aside>
    }
}

#[component]
fn RemedyCard(name: String, image_url: String, link: Option<String>) -> impl IntoView {
    let image = (!image_url.is_empty()).then(|| {
        view! { <img class="remedy-image" src=image_url alt=name.clone() /> }
    });

    view! {
        <div class="remedy-card">
            {image}
            <p class="remedy-name">{name}</p>
            {link.map(|href| view! {
                <a
                    class="btn btn-buy"
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "🛒 Buy"
                </a>
            })}
        </div>
    }
}
