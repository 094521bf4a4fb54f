//! Brand header component.

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <span class="logo-mark">"✦"</span>
                <a href="#" class="logo">{APP_NAME}</a>
            </div>
        </header>
    }
}
