//! Transient toast notifications.
//!
//! Export actions report success/failure here instead of throwing;
//! entries auto-dismiss after a fixed interval.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_DISMISS_MS;
use crate::types::{Toast, ToastLevel};

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(0);

/// Push a toast and schedule its dismissal.
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, level: ToastLevel, message: &str) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();

    set_toasts.update(|toasts| {
        toasts.push(Toast {
            id,
            level,
            message: message.to_string(),
            timestamp,
        });
    });

    // Log also to the console
    log::info!("{}", message);

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    });
}

/// Fixed overlay rendering the toast queue.
#[component]
pub fn Toaster(toasts: ReadSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=format!("toast {}", toast.level.css_class())>
                            <span class="toast-time">"[" {toast.timestamp.clone()} "] "</span>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
