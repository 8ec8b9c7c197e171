//! Mailblast - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard for creating bulk-email campaigns. Recipient
//! parsing, wizard gating and role checks come from `mailblast-core`, so the
//! dashboard and the server agree on every count.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (session, role-filtered navigation)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CampaignPage                                                │
//! │  ├── Hero                                                    │
//! │  ├── CampaignWizard (setup → recipients → content → review)  │
//! │  └── ActivityPanel                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (LogEntry, DraftReport, AppError)
//! - [`components`] - UI components
//! - [`services`] - Browser storage, file reading, backend calls

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use mailblast_core::Session;
use wasm_bindgen::prelude::*;

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
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // API
    DraftReport, FieldProblem,
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
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📧 Mailblast - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    // Restored once; components read it from context instead of storage
    let session = create_rw_signal(load_session());
    provide_context(session);
    provide_meta_context();

    // One log stream for the whole app; pages only read it
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());
    init_sse_logs(set_logs);
    provide_context(ActivityLog { logs, set_logs });

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header session=session/>
            <main>
                <Routes>
                    <Route path="/" view=CampaignPage/>
                    <Route path="/campaigns" view=CampaignPage/>
                    <Route path="/campaigns/new" view=CampaignPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Activity entries shared by every page.
#[derive(Clone, Copy)]
pub struct ActivityLog {
    pub logs: ReadSignal<Vec<LogEntry>>,
    pub set_logs: WriteSignal<Vec<LogEntry>>,
}

/// The session provided by [`App`].
pub fn use_session() -> RwSignal<Option<Session>> {
    expect_context::<RwSignal<Option<Session>>>()
}

#[component]
fn CampaignPage() -> impl IntoView {
    let ActivityLog { logs, set_logs } = expect_context::<ActivityLog>();

    let session = use_session();
    let greeting = move || {
        session.with(|s| match s {
            Some(s) => format!("Signed in as {}", s.user.email),
            None => "Not signed in".to_string(),
        })
    };

    view! {
        <div class="container">
            <Hero/>
            <p class="session-hint">{greeting}</p>
            <CampaignWizard set_logs=set_logs/>
            <ActivityPanel logs=logs set_logs=set_logs/>
        </div>
    }
}
