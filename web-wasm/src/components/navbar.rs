//! Navigation bar

use leptos::prelude::*;
use crate::app::Page;

const AVATAR_URL: &str = "https://api.dicebear.com/9.x/miniavs/svg?seed=Pumpkin";

#[component]
pub fn NavBar(page: ReadSignal<Page>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <span class="brand">{move || page.get().title()}</span>
            <div class="nav-links">
                <a
                    href=Page::Parikshan.href()
                    class:active=move || page.get() == Page::Parikshan
                >
                    "Parikshan"
                </a>
                <a
                    href=Page::Sathi.href()
                    class:active=move || page.get() == Page::Sathi
                >
                    "Sathi"
                </a>
                <img class="avatar" src=AVATAR_URL alt="User avatar" />
            </div>
        </nav>
    }
}
