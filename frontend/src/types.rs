//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Log Types** - Activity feed and backend SSE stream
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use mailblast_core::RecipientBatch;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
///
/// Matches the backend's log levels for SSE streaming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }
}

/// A single entry of the activity panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Parse one SSE `data:` payload from `/api/logs`.
    ///
    /// Unknown levels fall back to `Info`; the backend's indent is
    /// rendered as leading spaces.
    pub fn from_sse(json: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(json).ok()?;
        let level = match value.get("level")?.as_str()? {
            "success" => LogLevel::Success,
            "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        };
        let indent = value.get("indent").and_then(|i| i.as_u64()).unwrap_or(0) as usize;
        let message = format!("{}{}", "  ".repeat(indent), value.get("message")?.as_str()?);
        let timestamp = value
            .get("timestamp")
            .and_then(|t| t.as_str())
            .unwrap_or_default()
            .to_string();

        Some(LogEntry { level, message, timestamp })
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// A wizard rule the server says the draft breaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProblem {
    pub field: String,
    pub message: String,
}

/// Response of `POST /api/campaigns/validate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReport {
    #[serde(default)]
    pub schema_errors: Vec<String>,
    #[serde(default)]
    pub problems: Vec<FieldProblem>,
    #[serde(default)]
    pub stats: RecipientBatch,
}

impl DraftReport {
    pub fn is_valid(&self) -> bool {
        self.schema_errors.is_empty() && self.problems.is_empty()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Browser API unavailable or failing.
    Browser(String),
    /// Invalid data format.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_from_sse() {
        let entry = LogEntry::from_sse(
            r#"{"level":"warning","message":"No valid recipients","timestamp":"10:04:05","indent":0}"#,
        )
        .unwrap();
        assert_eq!(entry.level, LogLevel::Warning);
        assert_eq!(entry.message, "No valid recipients");
        assert_eq!(entry.timestamp, "10:04:05");

        let nested = LogEntry::from_sse(r#"{"level":"info","message":"Encoding: UTF-8","indent":1}"#).unwrap();
        assert_eq!(nested.message, "  Encoding: UTF-8");

        assert!(LogEntry::from_sse("not json").is_none());
    }

    #[test]
    fn test_draft_report_from_server() {
        let report: DraftReport = serde_json::from_str(
            r#"{"schemaErrors":[],"problems":[{"field":"subject","message":"Subject is required"}],
                "stats":{"totalLines":1,"validCount":1,"invalidCount":0,"duplicateCount":0}}"#,
        )
        .unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.problems[0].field, "subject");
        assert_eq!(report.stats.valid_count, 1);
    }
}
