//! Submit button owning the analysis request lifecycle.
//!
//! One request at a time: while [`RequestState::Loading`] both the click
//! handler and the disabled attribute reject a second submission. The
//! handler always leaves a terminal state behind, so the in-flight flag
//! cannot stick.

use leptos::*;

use crate::config::ANALYZE_URL;
use crate::services::{request_analysis, validate_submission};
use crate::types::{RequestState, UploadedFile};

#[component]
pub fn AnalyzeButton(
    goal: ReadSignal<String>,
    files: ReadSignal<Vec<UploadedFile>>,
    request_state: ReadSignal<RequestState>,
    set_request_state: WriteSignal<RequestState>,
    set_analysis: WriteSignal<String>,
) -> impl IntoView {
    let on_analyze = move |_| {
        if request_state.get_untracked().is_loading() {
            return;
        }

        let staged = files.get_untracked();
        let goal_text = goal.get_untracked();

        if let Err(e) = validate_submission(&staged, &goal_text) {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(e.message());
            }
            return;
        }

        set_request_state.set(RequestState::Loading);
        log::info!(
            "📤 Submitting analysis request (file: {:?})",
            staged.first().map(|file| file.name.clone())
        );

        spawn_local(async move {
            // Only the first staged document travels with the request.
            let payload = staged.first().map(|file| file.payload.clone());

            match request_analysis(payload, &goal_text, ANALYZE_URL).await {
                Ok(markdown) => {
                    log::info!("✅ Analysis received ({} characters)", markdown.len());
                    set_analysis.set(markdown);
                    set_request_state.set(RequestState::Success);
                }
                Err(e) => {
                    log::error!("❌ Analysis failed: {}", e);
                    set_request_state.set(RequestState::Failed(e.message().to_string()));
                }
            }
        });
    };

    let disabled = move || {
        request_state.get().is_loading()
            || (files.get().is_empty() && goal.get().trim().is_empty())
    };

    view! {
        <button class="analyze-button" on:click=on_analyze disabled=disabled>
            {move || if request_state.get().is_loading() {
                "Analyzing..."
            } else {
                "Analyze"
            }}
        </button>
    }
}
