//! Identifier suffix generation.
//!
//! Order ids, transaction ids, and verification tokens are all a fixed
//! prefix followed by an uppercase alphanumeric suffix. The suffix source
//! is a trait so tests can swap the random default for a deterministic one.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of identifier suffixes.
///
/// Implementations return `len` ASCII characters drawn from uppercase
/// letters and digits.
pub trait IdSource: Send + Sync {
    /// Returns the next suffix of exactly `len` characters.
    fn suffix(&self, len: usize) -> String;
}

/// Random suffix source backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl RandomIds {
    /// Creates a new random suffix source.
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIds {
    fn suffix(&self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        while out.len() < len {
            let chunk = Uuid::new_v4().simple().to_string().to_uppercase();
            let take = (len - out.len()).min(chunk.len());
            out.push_str(&chunk[..take]);
        }
        out
    }
}

/// Counting suffix source for deterministic tests.
///
/// Produces zero-padded decimal suffixes ("00000001", "00000002", ...).
/// A counter wider than the requested length keeps its low digits, so
/// the suffix stays at the requested width.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a source that counts up from 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a source that counts up from `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn suffix(&self, len: usize) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        // Keep the low digits when the counter outgrows the width.
        let digits = format!("{n:0len$}");
        digits[digits.len() - len..].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_suffix_has_requested_length() {
        let ids = RandomIds::new();
        assert_eq!(ids.suffix(8).len(), 8);
        assert_eq!(ids.suffix(16).len(), 16);
        assert_eq!(ids.suffix(40).len(), 40);
    }

    #[test]
    fn random_suffix_is_uppercase_alphanumeric() {
        let ids = RandomIds::new();
        let suffix = ids.suffix(16);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn random_suffixes_differ() {
        let ids = RandomIds::new();
        assert_ne!(ids.suffix(8), ids.suffix(8));
    }

    #[test]
    fn sequential_suffixes_count_up() {
        let ids = SequentialIds::new();
        assert_eq!(ids.suffix(8), "00000001");
        assert_eq!(ids.suffix(8), "00000002");
        assert_eq!(ids.suffix(4), "0003");
    }

    #[test]
    fn sequential_starting_at_uses_first_value() {
        let ids = SequentialIds::starting_at(41);
        assert_eq!(ids.suffix(4), "0041");
        assert_eq!(ids.suffix(4), "0042");
    }

    #[test]
    fn sequential_suffix_keeps_width_when_counter_outgrows_it() {
        let ids = SequentialIds::starting_at(9_999);
        assert_eq!(ids.suffix(4), "9999");
        assert_eq!(ids.suffix(4), "0000");
        assert_eq!(ids.suffix(4), "0001");
    }
}
