//! Domain models for recipient lists.
//!
//! - [`RecipientLine`] - one trimmed input line (bare or `tag:email`)
//! - [`RecipientBatch`] - the statistics shown under the recipients textarea
//! - [`RecipientList`] - deduplicated lines plus the line count they came from

use serde::{Deserialize, Serialize};

use crate::validation::is_valid_email;

// =============================================================================
// RecipientLine
// =============================================================================

/// One non-empty, trimmed line of recipient input.
///
/// Operators paste either bare addresses or `identifier:email` pairs
/// (typically an IP address used for warm-up tracking). The identifier is
/// kept but carries no validated meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecipientLine {
    /// `user@example.com`
    Bare { email: String },
    /// `192.168.1.1:user@example.com`
    Tagged { tag: String, email: String },
}

impl RecipientLine {
    /// Build from an already trimmed line, splitting on the first colon only.
    pub fn from_line(line: &str) -> Self {
        match line.split_once(':') {
            Some((tag, email)) => RecipientLine::Tagged {
                tag: tag.to_string(),
                email: email.to_string(),
            },
            None => RecipientLine::Bare { email: line.to_string() },
        }
    }

    /// Candidate email address (everything after the first colon, if any).
    pub fn email(&self) -> &str {
        match self {
            RecipientLine::Bare { email } | RecipientLine::Tagged { email, .. } => email,
        }
    }

    /// Prefix before the first colon.
    pub fn tag(&self) -> Option<&str> {
        match self {
            RecipientLine::Bare { .. } => None,
            RecipientLine::Tagged { tag, .. } => Some(tag),
        }
    }

    /// Whether the candidate email passes the syntax rule.
    pub fn is_valid(&self) -> bool {
        is_valid_email(self.email())
    }

    /// The line as it was entered (after trimming).
    pub fn to_line(&self) -> String {
        match self {
            RecipientLine::Bare { email } => email.clone(),
            RecipientLine::Tagged { tag, email } => format!("{}:{}", tag, email),
        }
    }
}

// =============================================================================
// RecipientBatch
// =============================================================================

/// Summary statistics for a block of recipient text.
///
/// Always satisfies `total_lines == duplicate_count + valid_count + invalid_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientBatch {
    /// Non-empty lines after splitting and trimming
    pub total_lines: usize,
    /// Unique lines whose email is valid
    pub valid_count: usize,
    /// Unique lines whose email is invalid
    pub invalid_count: usize,
    /// Lines that repeat an earlier line exactly
    pub duplicate_count: usize,
}

impl RecipientBatch {
    /// Number of distinct lines.
    pub fn unique_count(&self) -> usize {
        self.valid_count + self.invalid_count
    }

    /// The wizard may leave the recipients step only with a valid address.
    pub fn has_valid(&self) -> bool {
        self.valid_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.total_lines == 0
    }
}

// =============================================================================
// RecipientList
// =============================================================================

/// Deduplicated recipient lines, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientList {
    /// Line count before deduplication
    pub total_lines: usize,
    /// Unique lines
    pub lines: Vec<RecipientLine>,
}

impl RecipientList {
    /// Derive the statistics for this list.
    pub fn batch(&self) -> RecipientBatch {
        let valid_count = self.lines.iter().filter(|l| l.is_valid()).count();
        let unique = self.lines.len();

        RecipientBatch {
            total_lines: self.total_lines,
            valid_count,
            invalid_count: unique - valid_count,
            duplicate_count: self.total_lines - unique,
        }
    }

    /// Extracted addresses of the valid lines, in order.
    pub fn valid_emails(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter(|l| l.is_valid()).map(|l| l.email())
    }

    /// Lines whose email failed validation.
    pub fn invalid_lines(&self) -> impl Iterator<Item = &RecipientLine> {
        self.lines.iter().filter(|l| !l.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_line() {
        let line = RecipientLine::from_line("a@b.com");
        assert_eq!(line.email(), "a@b.com");
        assert_eq!(line.tag(), None);
        assert!(line.is_valid());
    }

    #[test]
    fn test_tagged_line_splits_on_first_colon() {
        let line = RecipientLine::from_line("10.0.0.1:x:y@z.com");
        assert_eq!(line.tag(), Some("10.0.0.1"));
        assert_eq!(line.email(), "x:y@z.com");
        assert_eq!(line.to_line(), "10.0.0.1:x:y@z.com");
    }

    #[test]
    fn test_batch_from_list() {
        let list = RecipientList {
            total_lines: 4,
            lines: vec![
                RecipientLine::from_line("a@b.com"),
                RecipientLine::from_line("nope"),
                RecipientLine::from_line("1.2.3.4:c@d.org"),
            ],
        };

        let batch = list.batch();
        assert_eq!(batch.valid_count, 2);
        assert_eq!(batch.invalid_count, 1);
        assert_eq!(batch.duplicate_count, 1);
        assert_eq!(batch.unique_count(), 3);
        assert_eq!(list.valid_emails().collect::<Vec<_>>(), vec!["a@b.com", "c@d.org"]);
        assert_eq!(list.invalid_lines().count(), 1);
    }

    #[test]
    fn test_batch_serializes_camel_case() {
        let batch = RecipientBatch {
            total_lines: 2,
            valid_count: 1,
            invalid_count: 0,
            duplicate_count: 1,
        };
        let json = serde_json::to_value(batch).unwrap();
        assert_eq!(json["totalLines"], 2);
        assert_eq!(json["validCount"], 1);
        assert_eq!(json["invalidCount"], 0);
        assert_eq!(json["duplicateCount"], 1);
    }
}
