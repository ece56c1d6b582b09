//! Transcript view with the welcome screen and loading bubble

use leptos::prelude::*;
use kisan_common::{render_markdown, ChatSession, Message, Role, STARTER_PROMPTS};

const STARTER_ICONS: [&str; 3] = ["🍃", "🚜", "🌧"];

#[component]
pub fn ChatContainer<F>(session: RwSignal<ChatSession>, on_starter: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let is_fresh = move || session.with(|s| s.transcript().is_fresh());

    let messages = move || {
        session.with(|s| {
            s.transcript()
                .conversation()
                .cloned()
                .map(|message| view! { <MessageBubble message=message /> })
                .collect_view()
        })
    };

    view! {
        <Show
            when=is_fresh
            fallback=move || view! {
                <div class="chat-log">
                    {messages}
                    <Show when=move || session.with(|s| s.is_loading())>
                        <div class="bubble ai loading">
                            <span class="spin">"🍃"</span>
                        </div>
                    </Show>
                </div>
            }
        >
            <div class="welcome">
                <div class="welcome-logo">"🌾"</div>
                <h1 class="welcome-title">"Kisan Sathi"</h1>
                <main class="starters">
                    {STARTER_PROMPTS
                        .into_iter()
                        .zip(STARTER_ICONS)
                        .map(|(prompt, icon)| {
                            let on_starter = on_starter.clone();
                            view! {
                                <div
                                    class="starter-card"
                                    on:click=move |_| on_starter(prompt.to_string())
                                >
                                    <span class="starter-icon">{icon}</span>
                                    {prompt}
                                </div>
                            }
                        })
                        .collect_view()}
                </main>
            </div>
        </Show>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let html = render_markdown(&message.content);
    match message.role {
        Role::User => view! {
            <div class="row row-user">
                <div class="bubble human" inner_html=html />
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="row row-ai">
                <div class="bubble ai" inner_html=html />
            </div>
        }
        .into_any(),
    }
}
