//! The document buffer.
//!
//! A single owned text buffer, append-only at runtime: new words are
//! appended, existing text is never edited in place. The tokenizer and
//! matcher share it read-only.

use serde::{Deserialize, Serialize};

/// An owned, append-only text document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document from raw text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document { text: text.into() }
    }

    /// The full document text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Document length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a word to the end of the document, separating it with a
    /// single space when the current text does not already end in
    /// whitespace. Returns the offset at which the word was placed.
    pub fn append_word(&mut self, word: &str) -> usize {
        if !self.text.is_empty() && !self.text.ends_with(|c: char| c.is_ascii_whitespace()) {
            self.text.push(' ');
        }
        let offset = self.text.len();
        self.text.push_str(word);
        offset
    }
}
