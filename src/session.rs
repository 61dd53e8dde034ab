//! An indexing session over one document.
//!
//! A [`Session`] owns the document buffer and the word index built from
//! it, and exposes the operations the interactive adapter drives:
//! search, add, remove, list, and dump. Everything is synchronous and
//! single-threaded; each operation runs to completion before the next.

use std::path::Path;

use log::info;

use crate::document::Document;
use crate::error::Result;
use crate::index::builder::{IndexBuilder, IndexConfig};
use crate::index::{InsertOutcome, WordIndex, dump};
use crate::matcher::{BoyerMoore, MatchOptions};

/// A document plus the index built over it.
#[derive(Debug)]
pub struct Session {
    document: Document,
    index: WordIndex,
    builder: IndexBuilder,
}

impl Session {
    /// Build a session by indexing `text` against `vocabulary`.
    pub fn build(text: String, vocabulary: &[String], config: IndexConfig) -> Result<Session> {
        let builder = IndexBuilder::new(config);
        let document = Document::new(text);
        let index = builder.build(document.as_str(), vocabulary)?;
        Ok(Session {
            document,
            index,
            builder,
        })
    }

    /// The session's document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The session's index.
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Find every whole-word occurrence of `word` in the document text,
    /// case-insensitively.
    ///
    /// This answers "where does this word occur in the document", not
    /// "is this word indexed": the matcher runs over the full text
    /// regardless of index membership. Empty or non-alphabetic queries
    /// simply find nothing.
    pub fn search(&self, word: &str) -> Vec<usize> {
        BoyerMoore::with_options(word, MatchOptions::word_search())
            .find_all(self.document.as_str())
    }

    /// Append `word` to the document and index it at the offset where it
    /// landed. Returns the offset and the insert outcome.
    pub fn add_word(&mut self, word: &str) -> (usize, InsertOutcome) {
        let offset = self.document.append_word(word);
        let outcome = self.index.insert(word, offset);
        info!("added {word:?} at offset {offset}");
        (offset, outcome)
    }

    /// Remove `word` from the index. The document text is untouched.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let removed = self.index.erase(word);
        if removed {
            info!("removed {word:?} from the index");
        }
        removed
    }

    /// The indexed locations of `word`, if live.
    pub fn lookup(&self, word: &str) -> Option<&[usize]> {
        self.index.lookup(word)
    }

    /// Live `(keyword, locations)` pairs in table order.
    pub fn entries(&self) -> Vec<(&str, &[usize])> {
        self.index.entries()
    }

    /// Render the index as dump lines.
    pub fn serialize(&self) -> Vec<String> {
        dump::serialize(&self.index)
    }

    /// Write the index dump to a file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        dump::write_index(&self.index, path)
    }

    /// The configuration the session's index was built with.
    pub fn config(&self) -> IndexConfig {
        self.builder.config()
    }
}
