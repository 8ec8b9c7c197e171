//! Recipient list parser.
//!
//! Turns pasted or uploaded text into a [`RecipientBatch`]. Entries may be
//! separated by newlines, commas or semicolons, mixed freely within the same
//! blob. The parser is total: any input, including `None`, yields a batch.
//!
//! ```
//! use mailblast_core::parse;
//!
//! let batch = parse("x@y.com,z@w.com;bad");
//! assert_eq!(batch.total_lines, 3);
//! assert_eq!(batch.valid_count, 2);
//! assert_eq!(batch.invalid_count, 1);
//! ```

use std::collections::HashSet;

use crate::models::{RecipientBatch, RecipientLine, RecipientList};
use crate::validation::is_valid_email;

/// Separators between entries. Runs of separators count as one.
pub const SEPARATORS: [char; 3] = ['\n', ',', ';'];

/// Split raw text into trimmed, non-empty lines, in input order.
pub fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| SEPARATORS.contains(&c))
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Candidate email of a line: everything after the first colon, or the whole line.
pub fn extract_email(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, email)) => email,
        None => line,
    }
}

/// Parse raw text into deduplicated recipient lines.
pub fn parse_list(raw: &str) -> RecipientList {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut lines = Vec::new();
    let mut total_lines = 0;

    for line in split_lines(raw) {
        total_lines += 1;
        if seen.insert(line) {
            lines.push(RecipientLine::from_line(line));
        }
    }

    RecipientList { total_lines, lines }
}

/// Compute recipient statistics for raw text.
pub fn parse(raw: &str) -> RecipientBatch {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut batch = RecipientBatch::default();

    for line in split_lines(raw) {
        batch.total_lines += 1;

        if !seen.insert(line) {
            batch.duplicate_count += 1;
            continue;
        }

        if is_valid_email(extract_email(line)) {
            batch.valid_count += 1;
        } else {
            batch.invalid_count += 1;
        }
    }

    batch
}

/// [`parse`] for a field that may not be set yet.
pub fn parse_optional(raw: Option<&str>) -> RecipientBatch {
    parse(raw.unwrap_or_default())
}
