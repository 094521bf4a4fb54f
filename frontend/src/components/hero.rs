//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Self-learning Platform."</h1>
            <p class="subtitle">
                "Learn effectively: As a student or professional. "
                "LevelUp for your career development."
            </p>
        </div>
    }
}
