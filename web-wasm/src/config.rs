//! Runtime configuration embedded in the page
//!
//! `index.html` may carry
//! `<script type="application/json" id="kisan-config">{...}</script>`;
//! absent or malformed config falls back to the defaults.

use kisan_common::Config;

pub const CONFIG_ELEMENT_ID: &str = "kisan-config";

pub fn load_config() -> Config {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => match Config::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                gloo::console::error!(format!("Invalid #{}: {}", CONFIG_ELEMENT_ID, e));
                Config::default()
            }
        },
        _ => Config::default(),
    }
}
