//! # Mailblast - recipient lists and campaign drafts for the sending platform
//!
//! Backend for the Mailblast campaign wizard: loads recipient files,
//! validates campaign drafts, and serves both over HTTP. The pure parsing and
//! wizard rules live in [`mailblast_core`] and are re-exported here.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TXT / CSV  │────▶│   Loader    │────▶│   Parser    │────▶│  Recipient  │
//! │ (any enc.)  │     │ (auto-enc)  │     │ (split/dedup│     │    Batch    │
//! └─────────────┘     └─────────────┘     │  /validate) │     └─────────────┘
//!                                         └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mailblast::{load_from_file, parse};
//!
//! #[tokio::main]
//! async fn main() {
//!     let text = load_from_file("recipients.csv".as_ref()).await;
//!     let batch = parse(&text);
//!     println!("{} valid of {} lines", batch.valid_count, batch.total_lines);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Server configuration
//! - [`loader`] - File reading with encoding detection
//! - [`validation`] - Campaign draft schema validation
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Loading
pub mod loader;

// Validation
pub mod validation;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Domain
// =============================================================================

pub use mailblast_core::{
    parse,
    parse_list,
    parse_optional,
    extract_email,
    is_valid_email,
    CampaignDraft,
    DraftError,
    RecipientBatch,
    RecipientLine,
    RecipientList,
    RichText,
    Wizard,
    WizardStep,
};

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{LoadError, SchemaError, ServerError};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use loader::{
    decode_bytes,
    decode_content,
    detect_encoding,
    load_from_file,
    load_from_reader,
    try_load_file,
    DecodedText,
    RecipientFileLoader,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    validate,
    validate_campaign_draft,
    validate_draft_schema,
    is_valid_draft_shape,
    DraftReport,
    FieldProblem,
};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use config::ServerConfig;

pub use api::types::{
    BatchStatus,
    ParseRequest,
    RecipientsResponse,
    SourceMetadata,
    error_response,
};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
