//! Kisan Sathi chat endpoint

use super::fetch_text;
use kisan_common::{ChatReply, ChatRequest, Result};
use wasm_bindgen::JsValue;
use web_sys::{RequestInit, RequestMode};

/// Post the transcript and parse the assistant reply
pub async fn send_transcript(endpoint: &str, request: &ChatRequest) -> Result<ChatReply> {
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let text = fetch_text(endpoint, &opts).await?;
    ChatReply::from_json(&text)
}

