//! UI Components for the Mailblast dashboard.
//!
//! # Layout Components
//! - [`Header`] - Navigation filtered by role, logout
//! - [`Hero`] - Page title
//! - [`Footer`] - Page footer
//!
//! # Wizard Components
//! - [`CampaignWizard`] - Step shell with Back/Next gating
//! - [`RecipientsStep`] - Textarea + file picker with live statistics
//! - [`ContentStep`] - Subject, body, delivery options
//! - [`ReviewStep`] - Summary and server-side validation
//! - [`ActivityPanel`] - Local activity and backend logs (SSE)

mod header;
mod hero;
mod footer;
pub mod wizard;
pub mod recipients;
pub mod content;
pub mod review;
pub mod logs;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use wizard::*;
pub use recipients::*;
pub use content::*;
pub use review::*;
pub use logs::*;
