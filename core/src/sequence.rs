//! Last-write-wins sequencing for asynchronous file loads.
//!
//! Each file selection takes a [`LoadTicket`]; when its read completes the
//! result is applied only if no newer selection has started meanwhile.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out tickets and remembers the most recent one.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: AtomicU64,
}

/// Identifies one load started through a [`LoadSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier ticket.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recent load.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Pass `value` through if `ticket` is still current, drop it otherwise.
    pub fn complete<T>(&self, ticket: LoadTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_load_applies() {
        let seq = LoadSequencer::new();
        let t = seq.begin();
        assert_eq!(seq.complete(t, "text"), Some("text"));
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let seq = LoadSequencer::new();
        let first = seq.begin();
        let second = seq.begin();

        // Second read finishes first, then the first one arrives late.
        assert_eq!(seq.complete(second, "new"), Some("new"));
        assert_eq!(seq.complete(first, "old"), None);
    }

    #[test]
    fn test_tickets_increase() {
        let seq = LoadSequencer::new();
        let a = seq.begin();
        let b = seq.begin();
        assert!(b > a);
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }
}
