//! # Mailblast core - recipient lists and campaign drafts
//!
//! Pure domain logic shared by the `mailblast` backend and the dashboard
//! frontend. Nothing here performs I/O, so the crate builds for both native
//! targets and `wasm32`.
//!
//! ## Recipient processing
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   raw text   │────▶│    split     │────▶│    dedup     │────▶│   validate   │
//! │ (paste/file) │     │  \n , ;      │     │ exact match  │     │ tag:email    │
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use mailblast_core::parse;
//!
//! let batch = parse("192.168.1.1:admin@test.com\nadmin@test.com");
//! assert_eq!(batch.total_lines, 2);
//! assert_eq!(batch.valid_count, 2);
//! assert_eq!(batch.duplicate_count, 0);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - RecipientLine, RecipientBatch, RecipientList
//! - [`parser`] - Text to recipient statistics
//! - [`validation`] - Email syntax rule
//! - [`sequence`] - Last-write-wins file load sequencing
//! - [`campaign`] - Campaign draft and wizard gating
//! - [`session`] - Session context and role policy
//! - [`richtext`] - Rich-text body value

// Core modules
pub mod error;
pub mod models;

// Recipients
pub mod parser;
pub mod validation;
pub mod sequence;

// Campaign wizard
pub mod campaign;
pub mod richtext;

// Identity
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DraftError, DraftResult, SessionError, SessionResult};

pub use models::{RecipientBatch, RecipientLine, RecipientList};

pub use parser::{extract_email, parse, parse_list, parse_optional, split_lines};

pub use validation::{is_valid_email, EMAIL_PATTERN};

pub use sequence::{LoadSequencer, LoadTicket};

pub use campaign::{CampaignDraft, Wizard, WizardStep, DEFAULT_THROTTLE};

pub use richtext::{ContentType, RichText};

pub use session::{Role, Section, Session, SessionUser};
