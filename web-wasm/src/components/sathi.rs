//! Kisan Sathi: farming assistant chat

use gloo::console::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use kisan_common::{ChatSession, Config, Error};

use crate::api::chat::send_transcript;
use crate::components::chat_container::ChatContainer;
use crate::components::chat_input::ChatInput;

#[component]
pub fn Sathi() -> impl IntoView {
    let config = expect_context::<Config>();
    let endpoint = config.chat_endpoint.clone();
    let session = RwSignal::new(ChatSession::new(config.system_prompt, config.max_history));

    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));

    let send = move |text: String| {
        let request = match session.try_update(|s| s.submit(&text)) {
            Some(Ok(request)) => request,
            Some(Err(Error::EmptyMessage)) | None => return,
            Some(Err(e)) => {
                log!(format!("Message ignored: {}", e));
                return;
            }
        };

        let endpoint = endpoint.clone();
        spawn_local(async move {
            let outcome = send_transcript(&endpoint, &request).await;
            if let Ok(reply) = &outcome {
                log!(reply.text().to_string());
            }

            if let Some(Err(e)) = session.try_update(|s| s.complete(outcome)) {
                error!(format!("Chat request failed: {}", e));
            }
        });
    };

    view! {
        <div class="page sathi">
            <ChatContainer session=session on_starter=send.clone() />
            <ChatInput on_send=send is_loading=is_loading />
        </div>
    }
}
