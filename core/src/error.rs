//! Error types for the Mailblast domain crate.
//!
//! Recipient parsing itself never fails; these errors belong to the
//! layers built around it:
//!
//! - [`DraftError`] - campaign draft / wizard step validation
//! - [`SessionError`] - restoring a stored session

use thiserror::Error;

// =============================================================================
// Campaign Draft Errors
// =============================================================================

/// A wizard step that cannot be left yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A required text field is blank.
    #[error("{label} is required")]
    MissingField { field: &'static str, label: &'static str },

    /// The recipients textarea is empty.
    #[error("Please enter recipients")]
    NoRecipients,

    /// Recipients were entered but none of them is a valid address.
    #[error("Please add at least one valid recipient")]
    NoValidRecipients,
}

impl DraftError {
    /// Name of the draft field the error refers to (camelCase, as in the payload).
    pub fn field(&self) -> &'static str {
        match self {
            DraftError::MissingField { field, .. } => field,
            DraftError::NoRecipients => "recipientsText",
            DraftError::NoValidRecipients => "recipientStats",
        }
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors while restoring a persisted session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No access token stored.
    #[error("No access token stored")]
    MissingToken,

    /// No user record stored.
    #[error("No user stored")]
    MissingUser,

    /// The stored user record is not valid JSON.
    #[error("Malformed stored user: {0}")]
    MalformedUser(#[from] serde_json::Error),
}

/// Result type for draft operations.
pub type DraftResult<T> = Result<T, DraftError>;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_error_messages() {
        let err = DraftError::MissingField { field: "name", label: "Campaign name" };
        assert_eq!(err.to_string(), "Campaign name is required");
        assert_eq!(err.field(), "name");

        assert_eq!(
            DraftError::NoValidRecipients.to_string(),
            "Please add at least one valid recipient"
        );
        assert_eq!(DraftError::NoRecipients.field(), "recipientsText");
    }
}
