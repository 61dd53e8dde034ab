//! Index construction from a document and a keyword vocabulary.

use ahash::AHashSet;
use log::debug;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
use crate::error::Result;

use super::comparator::MatcherComparator;
use super::{CollisionPolicy, WordIndex};

/// Configuration for index construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexConfig {
    /// Collision-resolution discipline of the built table.
    pub policy: CollisionPolicy,

    /// Route probing key comparison through the Boyer-Moore matcher
    /// instead of direct equality. Only meaningful with
    /// [`CollisionPolicy::LinearProbe`].
    pub matcher_equality: bool,
}

/// Builds a [`WordIndex`] by cross-referencing tokenizer output against a
/// vocabulary.
///
/// The document is tokenized once; every token whose word equals a
/// vocabulary word (exact, case-sensitive) is indexed at its offset.
/// Iteration is vocabulary-major, so each keyword's locations come out in
/// document order. Duplicate vocabulary words are skipped after their
/// first occurrence.
#[derive(Clone, Debug, Default)]
pub struct IndexBuilder {
    tokenizer: AlphabeticTokenizer,
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: IndexConfig) -> Self {
        IndexBuilder {
            tokenizer: AlphabeticTokenizer::new(),
            config,
        }
    }

    /// The configuration this builder constructs tables with.
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Create an empty index matching this builder's configuration.
    pub fn empty_index(&self) -> WordIndex {
        if self.config.policy == CollisionPolicy::LinearProbe && self.config.matcher_equality {
            WordIndex::probing_with_comparator(Box::new(MatcherComparator))
        } else {
            WordIndex::new(self.config.policy)
        }
    }

    /// Build an index of every vocabulary word's occurrences in `text`.
    pub fn build(&self, text: &str, vocabulary: &[String]) -> Result<WordIndex> {
        let mut index = self.empty_index();
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();

        let mut seen = AHashSet::new();
        let mut dropped = 0usize;
        for target in vocabulary {
            if !seen.insert(target.as_str()) {
                continue;
            }
            for token in &tokens {
                if token.text == *target && index.insert(target, token.start_offset).is_table_full()
                {
                    dropped += 1;
                }
            }
        }

        debug!(
            "indexed {} keywords from {} tokens ({} dropped)",
            index.len(),
            tokens.len(),
            dropped
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    const TEXT: &str = "the cat sat on the mat";

    #[test]
    fn test_build_cross_references_vocabulary() {
        let builder = IndexBuilder::new(IndexConfig::default());
        let index = builder.build(TEXT, &vocab(&["cat", "the"])).unwrap();

        assert_eq!(index.lookup("cat"), Some(&[4][..]));
        assert_eq!(index.lookup("the"), Some(&[0, 15][..]));
        assert_eq!(index.lookup("sat"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_duplicate_vocabulary_words_are_harmless() {
        let builder = IndexBuilder::new(IndexConfig::default());
        let index = builder
            .build(TEXT, &vocab(&["the", "cat", "the"]))
            .unwrap();

        assert_eq!(index.lookup("the"), Some(&[0, 15][..]));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_vocabulary_matching_is_case_sensitive() {
        let builder = IndexBuilder::new(IndexConfig::default());
        let index = builder.build(TEXT, &vocab(&["The", "cat"])).unwrap();

        assert_eq!(index.lookup("The"), None);
        assert_eq!(index.lookup("cat"), Some(&[4][..]));
    }

    #[test]
    fn test_empty_text_and_vocabulary() {
        let builder = IndexBuilder::new(IndexConfig::default());
        assert!(builder.build("", &vocab(&["cat"])).unwrap().is_empty());
        assert!(builder.build(TEXT, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_build_with_probing_policy() {
        let config = IndexConfig {
            policy: CollisionPolicy::LinearProbe,
            matcher_equality: true,
        };
        let builder = IndexBuilder::new(config);
        let index = builder.build(TEXT, &vocab(&["mat", "on"])).unwrap();

        assert_eq!(index.policy(), CollisionPolicy::LinearProbe);
        assert_eq!(index.lookup("mat"), Some(&[18][..]));
        assert_eq!(index.lookup("on"), Some(&[12][..]));
    }
}
