//! Browser and backend services.
//!
//! # Services
//!
//! - [`file`] - Reading recipient files picked in the browser
//! - [`session`] - Session restore/logout against `localStorage`
//! - [`campaign`] - Draft validation on the mailblast backend

pub mod file;
pub mod session;
pub mod campaign;

pub use file::*;
pub use session::*;
pub use campaign::*;
