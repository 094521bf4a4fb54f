//! LevelUp - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for staging a document, describing a career
//! goal, and rendering the Markdown analysis the backend returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand)                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection + GoalInput + AnalyzeButton              │
//! │  └── ResultsPanel (rendered report, exports)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadedFile, RequestState, Toast, etc.)
//! - [`components`] - UI components (Upload, Goal, Results, etc.)
//! - [`services`] - External effects (analysis request, exports)
//! - [`markdown`] - Markdown to HTML rendering

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod markdown;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    format_file_size, remove_file, UploadedFile,
    // Request lifecycle
    RequestState,
    // Toasts
    Toast, ToastLevel,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 LevelUp - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application; this component is the single
    // owner, children receive read/write halves.
    let (goal, set_goal) = create_signal(String::new());
    let (files, set_files) = create_signal(Vec::<UploadedFile>::new());
    let (analysis, set_analysis) = create_signal(WELCOME_MARKDOWN.to_string());
    let (request_state, set_request_state) = create_signal(RequestState::Idle);
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    view! {
        <Toaster toasts=toasts/>
        <Header/>

        <div class="container">
            <Hero/>

            <div class="dashboard-grid">
                <div class="dashboard-column">
                    <UploadSection files=files set_files=set_files/>
                    <GoalInput goal=goal set_goal=set_goal/>
                    <AnalyzeButton
                        goal=goal
                        files=files
                        request_state=request_state
                        set_request_state=set_request_state
                        set_analysis=set_analysis
                    />
                </div>

                <ResultsPanel
                    analysis=analysis
                    request_state=request_state
                    set_toasts=set_toasts
                />
            </div>
        </div>

        <Footer/>
    }
}
