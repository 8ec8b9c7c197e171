//! REST API types for the dashboard.
//!
//! Field names are camelCase on the wire to match what the frontend reads.

use mailblast_core::{RecipientBatch, RecipientList};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::config::MAX_INVALID_SAMPLES;
use crate::loader::DecodedText;

/// Body of `POST /api/recipients/parse`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Raw textarea content; `null` or missing is treated as empty
    #[serde(default)]
    pub text: Option<String>,
}

/// Overall verdict on a recipient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// At least one valid recipient, no invalid lines
    Ready,
    /// At least one valid recipient, some invalid lines
    Warning,
    /// No valid recipient; the wizard cannot advance
    Empty,
}

impl BatchStatus {
    pub fn of(batch: &RecipientBatch) -> Self {
        if !batch.has_valid() {
            BatchStatus::Empty
        } else if batch.invalid_count > 0 {
            BatchStatus::Warning
        } else {
            BatchStatus::Ready
        }
    }
}

/// Where an uploaded list came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetadata {
    pub file_name: Option<String>,
    pub encoding: String,
    pub bytes: usize,
}

impl SourceMetadata {
    pub fn from_decoded(file_name: Option<String>, decoded: &DecodedText) -> Self {
        Self {
            file_name,
            encoding: decoded.encoding.clone(),
            bytes: decoded.bytes,
        }
    }
}

/// Response of the recipient endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientsResponse {
    /// Unique request identifier
    pub request_id: String,

    pub status: BatchStatus,

    pub stats: RecipientBatch,

    /// Whether the wizard may leave the recipients step
    pub can_advance: bool,

    /// Valid addresses (tag stripped), first-seen order
    pub recipients: Vec<String>,

    /// First invalid lines, as entered
    pub invalid_samples: Vec<String>,

    /// Present for file uploads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,

    /// Raw decoded text, for uploads (the dashboard puts it in the textarea)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RecipientsResponse {
    pub fn from_list(list: &RecipientList) -> Self {
        let stats = list.batch();

        Self {
            request_id: Uuid::new_v4().to_string(),
            status: BatchStatus::of(&stats),
            stats,
            can_advance: stats.has_valid(),
            recipients: list.valid_emails().map(str::to_string).collect(),
            invalid_samples: list
                .invalid_lines()
                .take(MAX_INVALID_SAMPLES)
                .map(|line| line.to_line())
                .collect(),
            source: None,
            text: None,
        }
    }

    pub fn with_source(mut self, source: SourceMetadata, text: String) -> Self {
        self.source = Some(source);
        self.text = Some(text);
        self
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "requestId": Uuid::new_v4().to_string(),
        "status": "error",
        "error": error,
        "stats": RecipientBatch::default(),
        "canAdvance": false,
        "recipients": [],
        "invalidSamples": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblast_core::parse_list;

    #[test]
    fn test_status_mapping() {
        let ready = RecipientsResponse::from_list(&parse_list("a@b.com"));
        assert_eq!(ready.status, BatchStatus::Ready);
        assert!(ready.can_advance);

        let warning = RecipientsResponse::from_list(&parse_list("a@b.com,oops"));
        assert_eq!(warning.status, BatchStatus::Warning);
        assert_eq!(warning.invalid_samples, vec!["oops"]);

        let empty = RecipientsResponse::from_list(&parse_list("oops"));
        assert_eq!(empty.status, BatchStatus::Empty);
        assert!(!empty.can_advance);
    }

    #[test]
    fn test_response_wire_format() {
        let response = RecipientsResponse::from_list(&parse_list("192.168.1.1:admin@test.com"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "ready");
        assert_eq!(json["stats"]["totalLines"], 1);
        assert_eq!(json["stats"]["validCount"], 1);
        assert_eq!(json["canAdvance"], true);
        assert_eq!(json["recipients"][0], "admin@test.com");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn test_invalid_samples_are_capped() {
        let raw: Vec<String> = (0..50).map(|i| format!("bad{}", i)).collect();
        let response = RecipientsResponse::from_list(&parse_list(&raw.join("\n")));
        assert_eq!(response.stats.invalid_count, 50);
        assert_eq!(response.invalid_samples.len(), MAX_INVALID_SAMPLES);
    }

    #[test]
    fn test_parse_request_accepts_null() {
        let req: ParseRequest = serde_json::from_str(r#"{ "text": null }"#).unwrap();
        assert!(req.text.is_none());
        let req: ParseRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_none());
    }

    #[test]
    fn test_error_response() {
        let json = error_response("No file provided");
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "No file provided");
        assert_eq!(json["stats"]["validCount"], 0);
    }
}
