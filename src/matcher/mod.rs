//! Boyer-Moore substring matching.
//!
//! This module implements Boyer-Moore with the bad-character rule only:
//! a per-pattern table maps each byte to its rightmost index in the
//! pattern, and alignments are skipped based on the byte that caused a
//! mismatch. There is no good-suffix rule; worst case is O(n*m), typical
//! behavior is sublinear.
//!
//! Two comparison behaviors coexist as configuration and are never
//! unified: exact byte comparison, and ASCII case-insensitive comparison
//! with word-boundary isolation (used by document search).
//!
//! # Examples
//!
//! ```
//! use concord::matcher::{BoyerMoore, MatchOptions};
//!
//! let matcher = BoyerMoore::with_options("mat", MatchOptions::word_search());
//! assert_eq!(matcher.find_all("the cat sat on the mat"), vec![18]);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Comparison options for a Boyer-Moore search.
///
/// `case_insensitive` folds both pattern and text to ASCII lowercase
/// during comparison. `whole_words` rejects matches whose neighboring
/// characters are alphabetic, so substrings inside larger words do not
/// count as occurrences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Fold ASCII case during comparison.
    pub case_insensitive: bool,

    /// Require matches to be isolated at word boundaries.
    pub whole_words: bool,
}

impl MatchOptions {
    /// Exact comparison: case-sensitive, substring matches allowed.
    pub fn exact() -> Self {
        MatchOptions::default()
    }

    /// Document-search comparison: case-insensitive, whole words only.
    pub fn word_search() -> Self {
        MatchOptions {
            case_insensitive: true,
            whole_words: true,
        }
    }
}

/// A compiled Boyer-Moore pattern.
///
/// Compilation builds the bad-character table once; the matcher can then
/// be run against any number of texts.
#[derive(Clone, Debug)]
pub struct BoyerMoore {
    pattern: Vec<u8>,
    bad_char: AHashMap<u8, isize>,
    options: MatchOptions,
}

impl BoyerMoore {
    /// Compile a pattern with exact comparison options.
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, MatchOptions::exact())
    }

    /// Compile a pattern with the given comparison options.
    pub fn with_options(pattern: &str, options: MatchOptions) -> Self {
        let pattern: Vec<u8> = pattern
            .bytes()
            .map(|b| normalize(b, options.case_insensitive))
            .collect();

        // Rightmost index of each pattern byte; absent bytes read as -1.
        let mut bad_char = AHashMap::with_capacity(pattern.len());
        for (i, &b) in pattern.iter().enumerate() {
            bad_char.insert(b, i as isize);
        }

        BoyerMoore {
            pattern,
            bad_char,
            options,
        }
    }

    /// The comparison options this matcher was compiled with.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Length of the compiled pattern in bytes.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Find every occurrence of the pattern in `text`, in ascending order
    /// of match-start offset.
    ///
    /// An empty pattern, or a pattern longer than the text, yields no
    /// matches.
    pub fn find_all(&self, text: &str) -> Vec<usize> {
        let text = text.as_bytes();
        let n = text.len();
        let m = self.pattern.len();

        let mut matches = Vec::new();
        if m == 0 || n < m {
            return matches;
        }

        let mut shift = 0;
        while shift <= n - m {
            // Compare right-to-left against the current alignment
            let mut j = m as isize - 1;
            while j >= 0 && self.pattern[j as usize] == self.normalize(text[shift + j as usize]) {
                j -= 1;
            }

            if j < 0 {
                if !self.options.whole_words || self.is_isolated(text, shift) {
                    matches.push(shift);
                }
                shift += if shift + m < n {
                    (m as isize - self.last_index(self.normalize(text[shift + m]))) as usize
                } else {
                    1
                };
            } else {
                let mismatch = self.normalize(text[shift + j as usize]);
                shift += (j - self.last_index(mismatch)).max(1) as usize;
            }
        }

        matches
    }

    fn normalize(&self, b: u8) -> u8 {
        normalize(b, self.options.case_insensitive)
    }

    fn last_index(&self, b: u8) -> isize {
        self.bad_char.get(&b).copied().unwrap_or(-1)
    }

    /// Whether the match at `shift` is bounded by non-alphabetic bytes
    /// (or the ends of the text) on both sides.
    fn is_isolated(&self, text: &[u8], shift: usize) -> bool {
        let before_ok = shift == 0 || !text[shift - 1].is_ascii_alphabetic();
        let after = shift + self.pattern.len();
        let after_ok = after == text.len() || !text[after].is_ascii_alphabetic();
        before_ok && after_ok
    }
}

fn normalize(b: u8, case_insensitive: bool) -> u8 {
    if case_insensitive { b.to_ascii_lowercase() } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "the cat sat on the mat";

    #[test]
    fn test_degenerate_inputs() {
        let empty = BoyerMoore::new("");
        assert!(empty.find_all(TEXT).is_empty());

        let long = BoyerMoore::new("longer than the text");
        assert!(long.find_all("short").is_empty());

        assert!(BoyerMoore::new("a").find_all("").is_empty());
    }

    #[test]
    fn test_exact_substring_matches() {
        let matcher = BoyerMoore::new("at");
        assert_eq!(matcher.find_all(TEXT), vec![5, 9, 19]);
    }

    #[test]
    fn test_overlapping_matches() {
        let matcher = BoyerMoore::new("aaa");
        assert_eq!(matcher.find_all("aaaaa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_word_boundary_rejects_substrings() {
        let matcher = BoyerMoore::with_options("at", MatchOptions::word_search());
        assert!(matcher.find_all(TEXT).is_empty());

        let matcher = BoyerMoore::with_options("mat", MatchOptions::word_search());
        assert_eq!(matcher.find_all(TEXT), vec![18]);
    }

    #[test]
    fn test_boundary_at_text_edges() {
        let matcher = BoyerMoore::with_options("the", MatchOptions::word_search());
        assert_eq!(matcher.find_all(TEXT), vec![0, 15]);
    }

    #[test]
    fn test_case_insensitive_comparison() {
        let matcher = BoyerMoore::with_options("the", MatchOptions::word_search());
        assert_eq!(matcher.find_all("The cat. THE DOG."), vec![0, 9]);
    }

    #[test]
    fn test_case_sensitive_comparison() {
        let matcher = BoyerMoore::new("the");
        assert!(matcher.find_all("The THE").is_empty());
    }

    #[test]
    fn test_mixed_case_never_overshoots() {
        let matcher = BoyerMoore::with_options(
            "ab",
            MatchOptions {
                case_insensitive: true,
                whole_words: false,
            },
        );
        assert_eq!(matcher.find_all("aAb"), vec![1]);
    }

    #[test]
    fn test_matches_are_real_occurrences() {
        let matcher = BoyerMoore::new("issi");
        let text = "mississippi";
        for k in matcher.find_all(text) {
            assert_eq!(&text[k..k + 4], "issi");
        }
    }

    #[test]
    fn test_non_alphabetic_pattern() {
        let matcher = BoyerMoore::new("42");
        assert_eq!(matcher.find_all("answer: 42!"), vec![8]);
    }
}
