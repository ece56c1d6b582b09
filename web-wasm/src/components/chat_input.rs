//! Message input bar

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Text to send, or `None` when the input must stay as typed
fn take_message(value: &str, busy: bool) -> Option<String> {
    if busy || value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[component]
pub fn ChatInput<F>(on_send: F, is_loading: Signal<bool>) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let input_ref = NodeRef::<Input>::new();

    let submit = move || {
        if let Some(input) = input_ref.get() {
            if let Some(message) = take_message(&input.value(), is_loading.get_untracked()) {
                input.set_value("");
                on_send(message);
            }
        }
    };

    let on_keydown = {
        let submit = submit.clone();
        move |ev: KeyboardEvent| {
            if ev.key() == "Enter" {
                submit();
            }
        }
    };

    view! {
        <div class="chat-input">
            <section class="chat-input-bar">
                <input
                    type="text"
                    placeholder="Talk to Kisan Sathi"
                    node_ref=input_ref
                    prop:disabled=move || is_loading.get()
                    on:keydown=on_keydown
                />
                <button
                    class="send"
                    prop:disabled=move || is_loading.get()
                    on:click=move |_| submit()
                >
                    "⬆"
                </button>
            </section>
        </div>
    }
}
