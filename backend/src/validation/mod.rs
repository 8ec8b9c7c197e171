//! Campaign draft validation.
//!
//! Two layers are checked before a draft is accepted:
//!
//! 1. **Shape** - JSON Schema Draft 7, embedded at compile time from
//!    `schemas/campaign-draft.json` (types, enums, lengths).
//! 2. **Wizard rules** - the same step checks the dashboard applies
//!    ([`CampaignDraft::problems`]), with recipient statistics recomputed
//!    from `recipientsText` rather than trusted from the payload.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use mailblast::validate_campaign_draft;
//!
//! let report = validate_campaign_draft(&json!({
//!     "name": "Weekly",
//!     "subject": "News",
//!     "recipientsText": "a@b.com",
//!     "body": { "contentType": "plain", "body": "Hi" }
//! }));
//! assert!(report.is_valid());
//! ```

use mailblast_core::{CampaignDraft, DraftError, RecipientBatch};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, SchemaResult};

static DRAFT_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../schemas/campaign-draft.json"))
        .expect("Invalid embedded schema")
});

/// Validate `data` against `schema` (Draft 7).
///
/// Returns every error message, or `Ok(())`.
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check a payload against the embedded draft schema only.
pub fn validate_draft_schema(data: &Value) -> SchemaResult<()> {
    validate(&DRAFT_SCHEMA, data).map_err(|errors| SchemaError::Invalid { errors })
}

/// Quick shape check.
pub fn is_valid_draft_shape(data: &Value) -> bool {
    jsonschema::draft7::is_valid(&DRAFT_SCHEMA, data)
}

/// A wizard rule the draft breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProblem {
    pub field: String,
    pub message: String,
}

impl From<&DraftError> for FieldProblem {
    fn from(err: &DraftError) -> Self {
        Self { field: err.field().to_string(), message: err.to_string() }
    }
}

/// Outcome of [`validate_campaign_draft`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReport {
    pub schema_errors: Vec<String>,
    pub problems: Vec<FieldProblem>,
    /// Statistics recomputed from `recipientsText`
    pub stats: RecipientBatch,
}

impl DraftReport {
    pub fn is_valid(&self) -> bool {
        self.schema_errors.is_empty() && self.problems.is_empty()
    }
}

/// Validate a raw draft payload: schema first, then wizard rules.
///
/// Wizard rules are skipped when the payload cannot be read as a draft.
pub fn validate_campaign_draft(data: &Value) -> DraftReport {
    let mut report = DraftReport::default();

    if let Err(SchemaError::Invalid { errors }) = validate_draft_schema(data) {
        report.schema_errors = errors;
    }

    match serde_json::from_value::<CampaignDraft>(data.clone()) {
        Ok(mut draft) => {
            draft.refresh();
            report.stats = draft.recipient_stats;
            report.problems = draft.problems().iter().map(FieldProblem::from).collect();
        }
        Err(e) => {
            if report.schema_errors.is_empty() {
                report.schema_errors.push(format!("Unreadable draft: {}", e));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "Weekly Newsletter",
            "subject": "This week",
            "senderName": "Ops",
            "encoding": "UTF-8",
            "transferEncoding": "8bit",
            "throttle": 250,
            "body": { "contentType": "html", "body": "<p>Hello</p>" },
            "recipientsText": "a@b.com\n10.0.0.1:c@d.com\na@b.com"
        })
    }

    #[test]
    fn test_valid_draft() {
        let report = validate_campaign_draft(&valid_payload());
        assert!(report.is_valid(), "{:?}", report);
        assert_eq!(report.stats.valid_count, 2);
        assert_eq!(report.stats.duplicate_count, 1);
    }

    #[test]
    fn test_schema_rejects_bad_enum() {
        let mut payload = valid_payload();
        payload["transferEncoding"] = json!("uuencode");
        assert!(!is_valid_draft_shape(&payload));

        let report = validate_campaign_draft(&payload);
        assert!(!report.is_valid());
        assert!(!report.schema_errors.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let err = validate_draft_schema(&json!({ "name": "x" })).unwrap_err();
        match err {
            SchemaError::Invalid { errors } => {
                assert!(errors.iter().any(|e| e.contains("subject")));
                assert!(errors.iter().any(|e| e.contains("recipientsText")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_stats_are_recomputed_not_trusted() {
        let mut payload = valid_payload();
        payload["recipientsText"] = json!("nope\nstill-nope");
        payload["recipientStats"] = json!({ "totalLines": 2, "validCount": 2, "invalidCount": 0, "duplicateCount": 0 });

        let report = validate_campaign_draft(&payload);
        assert_eq!(report.stats.valid_count, 0);
        assert_eq!(report.problems.len(), 1);
        assert_eq!(report.problems[0].field, "recipientStats");
        assert_eq!(report.problems[0].message, "Please add at least one valid recipient");
    }

    #[test]
    fn test_unreadable_payload() {
        let report = validate_campaign_draft(&json!([1, 2, 3]));
        assert!(!report.is_valid());
        assert!(report.problems.is_empty());
    }
}
