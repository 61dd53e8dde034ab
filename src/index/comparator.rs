//! Key comparison strategies for the probing table.
//!
//! The linear-probing table compares keys through a [`KeyComparator`] so
//! the comparison strategy can be swapped without touching probe logic.
//! [`ExactComparator`] is the default. [`MatcherComparator`] routes key
//! equality through the Boyer-Moore matcher; it is functionally exact
//! equality at a higher cost.

use crate::matcher::BoyerMoore;

/// Trait for key equality used while probing.
pub trait KeyComparator: Send + Sync {
    /// Decide whether a stored keyword equals the queried word.
    fn keys_equal(&self, candidate: &str, query: &str) -> bool;

    /// Get the name of this comparator (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Direct string equality.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactComparator;

impl KeyComparator for ExactComparator {
    fn keys_equal(&self, candidate: &str, query: &str) -> bool {
        candidate == query
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Equality routed through the Boyer-Moore matcher: two keys are equal
/// when their lengths match and the matcher finds one inside the other.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatcherComparator;

impl KeyComparator for MatcherComparator {
    fn keys_equal(&self, candidate: &str, query: &str) -> bool {
        candidate.len() == query.len() && !BoyerMoore::new(query).find_all(candidate).is_empty()
    }

    fn name(&self) -> &'static str {
        "matcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_comparator() {
        let cmp = ExactComparator;
        assert!(cmp.keys_equal("cat", "cat"));
        assert!(!cmp.keys_equal("cat", "Cat"));
        assert!(cmp.keys_equal("", ""));
    }

    #[test]
    fn test_matcher_comparator_agrees_with_exact() {
        let cmp = MatcherComparator;
        assert!(cmp.keys_equal("cat", "cat"));
        assert!(!cmp.keys_equal("cat", "mat"));
        assert!(!cmp.keys_equal("cat", "cats"));
        // Case matters: the comparator compiles the pattern exactly
        assert!(!cmp.keys_equal("cat", "Cat"));
    }

    #[test]
    fn test_comparator_names() {
        assert_eq!(ExactComparator.name(), "exact");
        assert_eq!(MatcherComparator.name(), "matcher");
    }
}
