//! Document upload component with drag & drop support.
//!
//! Stages dropped or picked files for analysis. Several documents may be
//! staged at once; the analysis request only carries the first one, so
//! the zone hints at that.

use leptos::*;
use rand::distributions::{Alphanumeric, DistString};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement, MouseEvent};

use crate::config::ACCEPTED_FILE_TYPES;
use crate::types::{format_file_size, remove_file, UploadedFile};

/// Fresh opaque id for a staged file.
fn fresh_file_id() -> String {
    Alphanumeric.sample_string(&mut rand::thread_rng(), 8)
}

/// Turn a browser `FileList` into staged entries, order preserved.
/// No de-duplication: picking the same document twice stages it twice.
fn staged_files_from(list: FileList) -> Vec<UploadedFile> {
    let mut staged = Vec::new();
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            staged.push(UploadedFile {
                id: fresh_file_id(),
                name: file.name(),
                size: file.size() as u64,
                mime: file.type_(),
                payload: file,
            });
        }
    }
    staged
}

#[component]
pub fn UploadSection(
    files: ReadSignal<Vec<UploadedFile>>,
    set_files: WriteSignal<Vec<UploadedFile>>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            set_files.update(|files| files.extend(staged_files_from(list)));
            // Reset so picking the same document again re-fires `change`.
            input.set_value("");
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if let Some(transfer) = ev.data_transfer() {
            if let Some(list) = transfer.files() {
                log::info!("📄 {} file(s) dropped", list.length());
                set_files.update(|files| files.extend(staged_files_from(list)));
            }
        }
    };

    // Clicking anywhere in the zone opens the hidden picker
    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="upload-card">
            <div class="card-label">"Upload Files"</div>
            <div
                class="upload-zone"
                class:dragging=move || is_dragging.get()
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=trigger_file_input
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">
                    {move || if is_dragging.get() {
                        "Drop files here"
                    } else {
                        "Drag & drop files here"
                    }}
                </div>
                <div class="upload-hint">"or click to browse"</div>
                <div class="upload-hint">"The first document in the list is the one analyzed"</div>

                <input
                    type="file"
                    id="fileInput"
                    multiple=true
                    accept=ACCEPTED_FILE_TYPES
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <Show
                when=move || !files.get().is_empty()
                fallback=|| view! { }
            >
                <div class="file-list">
                    <div class="file-list-label">
                        "Uploaded (" {move || files.get().len()} ")"
                    </div>
                    <For
                        each=move || files.get()
                        key=|file| file.id.clone()
                        children=move |file| {
                            let file_id = file.id.clone();
                            let on_remove = move |ev: MouseEvent| {
                                ev.stop_propagation();
                                set_files.update(|files| remove_file(files, &file_id));
                            };

                            view! {
                                <div class="file-entry">
                                    <div class="file-meta">
                                        <span class="file-name">{file.name.clone()}</span>
                                        <span class="file-size">{format_file_size(file.size)}</span>
                                    </div>
                                    <button class="file-remove" title="Remove file" on:click=on_remove>
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
