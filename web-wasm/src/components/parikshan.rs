//! Kisan Parikshan: upload a leaf photo and read the diagnosis

use gloo::console::{error, log};
use gloo::dialogs::alert;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use kisan_common::{Config, Error, UploadState};
use web_sys::File;

use crate::api::diagnosis::submit_image;
use crate::components::diagnosis_panel::DiagnosisPanel;
use crate::components::upload_area::UploadArea;
use crate::preview::BrowserPreview;

const ABOUT: &str = "Kisan Parikshan is an AI-powered plant disease detector that helps farmers and gardeners diagnose plant health issues with ease. By simply uploading an image of the affected leaves, our advanced model analyzes the visual symptoms and provides an accurate diagnosis of what might be wrong with your plant. This tool empowers users to take timely action to protect their crops and ensure healthy growth.";

#[component]
pub fn Parikshan() -> impl IntoView {
    let config = expect_context::<Config>();
    let endpoint = config.diagnosis_endpoint;

    // Local storage: the preview holds browser handles
    let upload = RwSignal::new_local(UploadState::<BrowserPreview>::new());
    let input_ref = NodeRef::<Input>::new();

    let selected_name = Signal::derive(move || {
        upload.with(|s| s.selected().map(|f| f.file_name.clone()))
    });
    let is_uploading = Signal::derive(move || upload.with(|s| s.is_uploading()));
    let preview_url = move || upload.with(|s| s.preview_url().map(str::to_string));
    let has_diagnosis = move || upload.with(|s| s.diagnosis().is_some());

    let on_file = move |file: File| {
        let preview = BrowserPreview::new(file);
        let selection = preview.selection();
        match upload.try_update(|s| s.select(selection, preview)) {
            Some(Err(Error::NotAnImage(name))) => {
                alert(&format!("{} is not an image. Please choose a photo of the leaf.", name));
            }
            Some(Err(e)) => log!(format!("Selection ignored: {}", e)),
            _ => {}
        }
    };

    let on_remove = move |_: ()| {
        upload.update(|s| s.clear());
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let on_upload = move |_: ()| {
        let started = upload.try_update(|s| {
            s.begin_upload()?;
            Ok::<_, Error>(s.preview().map(|p| p.file().clone()))
        });

        let file = match started {
            Some(Ok(Some(file))) => file,
            Some(Err(Error::NoFileSelected)) => {
                alert("Please select a file first!");
                return;
            }
            Some(Err(e)) => {
                log!(format!("Upload ignored: {}", e));
                return;
            }
            _ => return,
        };

        let endpoint = endpoint.clone();
        spawn_local(async move {
            let outcome = submit_image(&endpoint, &file).await;
            match &outcome {
                Ok(diagnosis) => log!("Response from server:", diagnosis.title.clone()),
                Err(e) => error!(format!("Error uploading file: {}", e)),
            }

            if let Some(Err(_)) = upload.try_update(|s| s.finish_upload(outcome)) {
                alert("Error uploading file. Please try again.");
            }
        });
    };

    view! {
        <div class="page parikshan">
            <section class="card" class:shrunk=has_diagnosis>
                <div class="card-main">
                    <h1>"Kisan Parikshan"</h1>
                    <p class="about">{ABOUT}</p>

                    <Show
                        when=has_diagnosis
                        fallback=|| view! { <h2 class="section-title">"Upload Image"</h2> }
                    >
                        <div class="analysed-preview">
                            <img src=preview_url alt="Uploaded image" />
                            <button
                                class="btn btn-danger"
                                on:click=move |_| on_remove(())
                            >
                                "✕ Remove Analysis"
                            </button>
                        </div>
                    </Show>

                    <UploadArea
                        input_ref=input_ref
                        selected_name=selected_name
                        is_uploading=is_uploading
                        on_file=on_file
                        on_upload=on_upload
                        on_remove=on_remove
                    />
                </div>

                <Show when=move || !has_diagnosis()>
                    <div class="card-preview">
                        {move || match preview_url() {
                            Some(url) => view! {
                                <img src=url alt="Uploaded image preview" />
                            }.into_any(),
                            None => view! { <span class="leaf-placeholder">"🍃"</span> }.into_any(),
                        }}
                    </div>
                </Show>
            </section>

            {move || upload.with(|s| s.diagnosis().cloned()).map(|diagnosis| view! {
                <DiagnosisPanel diagnosis=diagnosis />
            })}
        </div>
    }
}
