//! Application configuration.
//!
//! Centralized configuration for the Mailblast dashboard.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The mailblast server for draft validation and the log stream.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Application name shown in the header.
pub const APP_NAME: &str = "Mailblast";

/// Largest recipient file read in the browser (in bytes).
///
/// 10 MB limit, same as the server default.
pub const MAX_FILE_SIZE: f64 = 10.0 * 1024.0 * 1024.0;

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Accepted extensions for the recipient file picker.
pub const RECIPIENT_FILE_ACCEPT: &str = ".txt,.csv";

/// Text inserted by the "Load Sample" button.
pub const SAMPLE_RECIPIENTS: &str = "test1@example.com\ntest2@domain.com\n192.168.1.1:admin@test.com";

/// Charsets offered for the outgoing message.
pub const MESSAGE_ENCODINGS: [&str; 5] = ["UTF-8", "ISO-8859-1", "ISO-8859-15", "US-ASCII", "windows-1252"];

/// Content-Transfer-Encoding choices.
pub const TRANSFER_ENCODINGS: [&str; 4] = ["7bit", "8bit", "quoted-printable", "base64"];
