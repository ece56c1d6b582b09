//! Main application component

use leptos::prelude::*;
use crate::components::{navbar::NavBar, parikshan::Parikshan, sathi::Sathi};
use crate::config::load_config;

/// The two views, addressed by location hash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Parikshan,
    Sathi,
}

impl Page {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_start_matches('/') {
            "sathi" | "kisansathi" => Page::Sathi,
            _ => Page::Parikshan,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Parikshan => "#/parikshan",
            Page::Sathi => "#/sathi",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Parikshan => "Kisan Parikshan",
            Page::Sathi => "Kisan Sathi",
        }
    }
}

fn current_page() -> Page {
    let hash = window().location().hash().unwrap_or_default();
    Page::from_hash(&hash)
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_config());

    let (page, set_page) = signal(current_page());
    let _hashchange = window_event_listener(leptos::ev::hashchange, move |_| {
        set_page.set(current_page());
    });

    view! {
        <NavBar page=page />
        {move || match page.get() {
            Page::Parikshan => view! { <Parikshan /> }.into_any(),
            Page::Sathi => view! { <Sathi /> }.into_any(),
        }}
    }
}
