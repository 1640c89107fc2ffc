//! Dropzone - Frontend Rust/Leptos Application
//!
//! A WebAssembly page hosting a single logo upload widget.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  GlobalStyle                                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadFile                                                  │
//! │  ├── header (title, description)                             │
//! │  ├── drop zone + hidden file input                           │
//! │  ├── ProgressRing (meter, placeholder or logo)               │
//! │  └── state label, select / cancel link                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser file wrapper
//! - [`components`] - UI components (UploadFile, ProgressRing, ...)
//! - [`services`] - Browser capabilities (XHR upload, image probe, host)

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::PickedFile;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs logging and mounts the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 Dropzone - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <GlobalStyle/>
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
    view! {
        <UploadFile on_change=|url: String| log::info!("🖼️ Logo available at {}", url)/>
    }
}
