//! Error types for the Mailblast backend.
//!
//! - [`LoadError`] - reading recipient files
//! - [`SchemaError`] - campaign draft schema validation
//! - [`ServerError`] - HTTP server startup and request handling
//!
//! Recipient parsing never fails (see [`mailblast_core::parser`]); a file
//! that cannot be read degrades to empty text at the [`crate::loader`]
//! boundary, so [`LoadError`] only surfaces through the `try_` functions.

use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while reading a recipient file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured size limit.
    #[error("File is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors while validating a campaign draft payload.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The payload does not match the schema.
    #[error("Validation failed: {errors:?}")]
    Invalid { errors: Vec<String> },

    /// The payload is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind or serve.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for file loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for schema validation.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message() {
        let err = LoadError::TooLarge { size: 20, limit: 10 };
        let msg = err.to_string();
        assert!(msg.contains("20 bytes"));
        assert!(msg.contains("limit is 10"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LoadError = io.into();
        assert!(err.to_string().contains("gone"));

        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "busy");
        let err: ServerError = io.into();
        assert!(err.to_string().contains("busy"));
    }
}
