//! Campaign draft and wizard step gating.
//!
//! The draft is the form state of the campaign wizard. Its recipient
//! statistics are recomputed in full whenever the recipients text changes,
//! and the wizard refuses to leave a step whose fields do not check out.
//!
//! # Steps
//!
//! ```text
//! Setup ──▶ Recipients ──▶ Content ──▶ Review
//! (name)    (≥1 valid)     (subject,
//!                           body)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DraftError, DraftResult};
use crate::models::{RecipientBatch, RecipientList};
use crate::parser::{parse, parse_list};
use crate::richtext::RichText;

/// Default sending rate, messages per minute.
pub const DEFAULT_THROTTLE: u32 = 100;

// =============================================================================
// Draft
// =============================================================================

/// All fields collected by the campaign wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub sender_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub subject: String,
    /// Character encoding, e.g. `UTF-8`
    pub encoding: String,
    /// Content-Transfer-Encoding, e.g. `8bit`
    pub transfer_encoding: String,
    pub body: RichText,
    pub recipients_text: String,
    pub recipient_stats: RecipientBatch,
    pub throttle: u32,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            sender_name: String::new(),
            from_email: String::new(),
            reply_to: String::new(),
            subject: String::new(),
            encoding: "UTF-8".to_string(),
            transfer_encoding: "8bit".to_string(),
            body: RichText::default(),
            recipients_text: String::new(),
            recipient_stats: RecipientBatch::default(),
            throttle: DEFAULT_THROTTLE,
        }
    }
}

impl CampaignDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recipients text and recompute the statistics.
    pub fn set_recipients_text(&mut self, text: impl Into<String>) {
        self.recipients_text = text.into();
        self.recipient_stats = parse(&self.recipients_text);
    }

    pub fn clear_recipients(&mut self) {
        self.set_recipients_text(String::new());
    }

    /// Unique recipient lines of the current text.
    pub fn recipients(&self) -> RecipientList {
        parse_list(&self.recipients_text)
    }

    /// Recompute derived fields after deserializing a draft from outside.
    pub fn refresh(&mut self) {
        self.recipient_stats = parse(&self.recipients_text);
    }

    /// Check the fields owned by a single step.
    pub fn check_step(&self, step: WizardStep) -> DraftResult<()> {
        match step {
            WizardStep::Setup => require(&self.name, "name", "Campaign name"),
            WizardStep::Recipients => {
                if self.recipients_text.trim().is_empty() {
                    return Err(DraftError::NoRecipients);
                }
                if !self.recipient_stats.has_valid() {
                    return Err(DraftError::NoValidRecipients);
                }
                Ok(())
            }
            WizardStep::Content => {
                require(&self.subject, "subject", "Subject")?;
                if self.body.is_blank() {
                    return Err(DraftError::MissingField { field: "body", label: "Email body" });
                }
                Ok(())
            }
            WizardStep::Review => WizardStep::ALL
                .iter()
                .filter(|s| **s != WizardStep::Review)
                .try_for_each(|s| self.check_step(*s)),
        }
    }

    /// Every problem in the draft, in step order.
    pub fn problems(&self) -> Vec<DraftError> {
        WizardStep::ALL
            .iter()
            .filter(|s| **s != WizardStep::Review)
            .filter_map(|s| self.check_step(*s).err())
            .collect()
    }
}

fn require(value: &str, field: &'static str, label: &'static str) -> DraftResult<()> {
    if value.trim().is_empty() {
        Err(DraftError::MissingField { field, label })
    } else {
        Ok(())
    }
}

// =============================================================================
// Wizard
// =============================================================================

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Setup,
    Recipients,
    Content,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Setup,
        WizardStep::Recipients,
        WizardStep::Content,
        WizardStep::Review,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Setup => 0,
            WizardStep::Recipients => 1,
            WizardStep::Content => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Setup => "Campaign Setup",
            WizardStep::Recipients => "Add Recipients",
            WizardStep::Content => "Email Content",
            WizardStep::Review => "Review & Launch",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| WizardStep::ALL[i])
    }
}

/// A draft plus the step the operator is on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wizard {
    pub step: WizardStep,
    pub draft: CampaignDraft,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move forward if the current step checks out.
    pub fn advance(&mut self) -> DraftResult<WizardStep> {
        self.draft.check_step(self.step)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back; always allowed.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn can_advance(&self) -> bool {
        self.step != WizardStep::Review && self.draft.check_step(self.step).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> CampaignDraft {
        let mut draft = CampaignDraft::new();
        draft.name = "Weekly Newsletter".into();
        draft.subject = "Hello".into();
        draft.body = RichText::plain("Hi there");
        draft.set_recipients_text("a@b.com\nc@d.com");
        draft
    }

    #[test]
    fn test_defaults() {
        let draft = CampaignDraft::new();
        assert_eq!(draft.encoding, "UTF-8");
        assert_eq!(draft.transfer_encoding, "8bit");
        assert_eq!(draft.throttle, DEFAULT_THROTTLE);
        assert!(draft.recipient_stats.is_empty());
    }

    #[test]
    fn test_recipient_stats_follow_text() {
        let mut draft = CampaignDraft::new();
        draft.set_recipients_text("a@b.com,a@b.com;bad");
        assert_eq!(draft.recipient_stats.total_lines, 3);
        assert_eq!(draft.recipient_stats.valid_count, 1);
        assert_eq!(draft.recipient_stats.duplicate_count, 1);

        draft.clear_recipients();
        assert_eq!(draft.recipient_stats, RecipientBatch::default());
    }

    #[test]
    fn test_recipients_step_gating() {
        let mut draft = CampaignDraft::new();
        assert_eq!(draft.check_step(WizardStep::Recipients), Err(DraftError::NoRecipients));

        draft.set_recipients_text("bad\nworse");
        assert_eq!(draft.check_step(WizardStep::Recipients), Err(DraftError::NoValidRecipients));

        draft.set_recipients_text("bad\n10.0.0.1:ok@fine.net");
        assert_eq!(draft.check_step(WizardStep::Recipients), Ok(()));
    }

    #[test]
    fn test_wizard_blocks_then_advances() {
        let mut wizard = Wizard::new();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step, WizardStep::Setup);

        wizard.draft.name = "Launch".into();
        assert_eq!(wizard.advance(), Ok(WizardStep::Recipients));
        assert!(!wizard.can_advance());

        wizard.draft.set_recipients_text("x@y.com");
        assert!(wizard.can_advance());
        assert_eq!(wizard.advance(), Ok(WizardStep::Content));

        assert_eq!(wizard.back(), WizardStep::Recipients);
        assert_eq!(wizard.back(), WizardStep::Setup);
        assert_eq!(wizard.back(), WizardStep::Setup);
    }

    #[test]
    fn test_review_checks_everything() {
        let draft = complete_draft();
        assert!(draft.check_step(WizardStep::Review).is_ok());
        assert!(draft.problems().is_empty());

        let mut missing = draft.clone();
        missing.subject = "   ".into();
        missing.recipients_text.clear();
        missing.refresh();
        let fields: Vec<_> = missing.problems().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["recipientsText", "subject"]);
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(WizardStep::Setup.next(), Some(WizardStep::Recipients));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Setup.previous(), None);
        assert_eq!(WizardStep::Content.previous(), Some(WizardStep::Recipients));
    }

    #[test]
    fn test_draft_deserializes_partial_payload() {
        let draft: CampaignDraft = serde_json::from_str(
            r#"{ "name": "Promo", "recipientsText": "a@b.com", "body": { "contentType": "html", "body": "<p>x</p>" } }"#,
        )
        .unwrap();
        assert_eq!(draft.name, "Promo");
        assert_eq!(draft.encoding, "UTF-8");
        assert_eq!(draft.body.content_type, crate::richtext::ContentType::Html);
    }
}
