//! Career goal input component.

use leptos::*;

#[component]
pub fn GoalInput(
    goal: ReadSignal<String>,
    set_goal: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="goal-card">
            <div class="card-label">"Description"</div>
            <input
                type="text"
                id="careerGoal"
                class="goal-input"
                placeholder="e.g., Become a Senior Software Engineer at a tech company"
                prop:value=goal
                on:input=move |ev| set_goal.set(event_target_value(&ev))
            />
            <p class="goal-hint">
                "Describe your ideal career destination or professional objective. "
                "The more specific, the better the analysis."
            </p>
        </div>
    }
}
