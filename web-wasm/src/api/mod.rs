//! Browser fetch plumbing for the two endpoints

pub mod chat;
pub mod diagnosis;

use kisan_common::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

fn network_error(value: JsValue) -> Error {
    Error::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// Send the request and return the body of a successful response
async fn fetch_text(url: &str, opts: &RequestInit) -> Result<String> {
    let request = Request::new_with_str_and_init(url, opts).map_err(network_error)?;
    let window = web_sys::window().ok_or_else(|| Error::Network("no window".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(Error::Http { status: resp.status() });
    }

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    text.as_string()
        .ok_or_else(|| Error::Network("response body is not text".into()))
}
