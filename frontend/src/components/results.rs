//! Analysis results panel: rendered Markdown plus the export toolbar.
//!
//! The panel keeps showing the last successful report (or the welcome
//! document) across failed requests; failures only add an inline error
//! line below the content.

use leptos::*;

use crate::components::toast::push_toast;
use crate::config::{APP_NAME, EXPORT_FILE_STEM};
use crate::markdown;
use crate::services::export::{
    copy_text, download_file, export_file_name, html_document, open_print_dialog, DOCX_MIME,
    HTML_MIME, MARKDOWN_MIME,
};
use crate::types::{RequestState, Toast, ToastLevel};

#[component]
pub fn ResultsPanel(
    analysis: ReadSignal<String>,
    request_state: ReadSignal<RequestState>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    // Reference to the scrollable results container
    let results_container = create_node_ref::<html::Div>();

    // Scroll to the bottom when new analysis content arrives
    create_effect(move |_| {
        let _ = analysis.get();

        if let Some(container) = results_container.get() {
            // Wait for the DOM update before measuring
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // The full standalone HTML document used by the .html/.docx/print exports
    let html_snapshot =
        move || html_document(APP_NAME, &markdown::to_html(&analysis.get_untracked()));

    let download = move |extension: &'static str, mime: &'static str, contents: String| {
        let filename = export_file_name(EXPORT_FILE_STEM, extension);
        match download_file(&filename, mime, &contents) {
            Ok(()) => push_toast(
                set_toasts,
                ToastLevel::Success,
                &format!("Downloaded .{}", extension),
            ),
            Err(e) => push_toast(set_toasts, ToastLevel::Error, e.message()),
        }
    };

    let on_copy = move |_| {
        let text = analysis.get_untracked().trim().to_string();
        spawn_local(async move {
            if copy_text(&text).await {
                push_toast(set_toasts, ToastLevel::Success, "Markdown copied");
            } else {
                push_toast(set_toasts, ToastLevel::Error, "Copy failed");
            }
        });
    };

    let on_download_md = move |_| download("md", MARKDOWN_MIME, analysis.get_untracked());
    let on_download_html = move |_| download("html", HTML_MIME, html_snapshot());
    let on_download_docx = move |_| download("docx", DOCX_MIME, html_snapshot());

    let on_print = move |_| {
        let html = html_snapshot();
        spawn_local(async move {
            match open_print_dialog(&html).await {
                Ok(()) => push_toast(
                    set_toasts,
                    ToastLevel::Success,
                    "Print dialog opened — choose Save as PDF",
                ),
                Err(e) => push_toast(set_toasts, ToastLevel::Error, e.message()),
            }
        });
    };

    view! {
        <div class="results-panel">
            <div class="results-header">
                <span class="card-label">"Analysis Results"</span>
                <div class="results-actions">
                    <button class="action-button" title="Copy markdown" on:click=on_copy>"Copy"</button>
                    <button class="action-button" title="Download .md" on:click=on_download_md>".md"</button>
                    <button class="action-button" title="Download .html" on:click=on_download_html>".html"</button>
                    <button class="action-button" title="Download .docx" on:click=on_download_docx>".docx"</button>
                    <button class="action-button" title="Download PDF (opens print dialog)" on:click=on_print>"Print"</button>
                </div>
            </div>

            <div class="results-content" node_ref=results_container>
                <div
                    class="markdown-body"
                    inner_html=move || markdown::to_html(&analysis.get())
                ></div>
            </div>

            <Show
                when=move || request_state.get().error().is_some()
                fallback=|| view! { }
            >
                <p class="results-error">
                    {move || request_state.get().error().unwrap_or_default().to_string()}
                </p>
            </Show>
        </div>
    }
}
