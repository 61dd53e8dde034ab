//! Token types for text analysis.
//!
//! A token is a single word extracted from the document together with the
//! character offsets of the run it was cut from. Tokens flow from the
//! tokenizer into the index builder.
//!
//! # Examples
//!
//! ```
//! use concord::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.start_offset, 0);
//! assert_eq!(token.end_offset, 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single word cut out of the document text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,
}

impl Token {
    /// Create a new token starting at the given offset.
    ///
    /// The end offset is derived from the text length; tokens are always
    /// contiguous runs of the source text.
    pub fn new<S: Into<String>>(text: S, start_offset: usize) -> Self {
        let text = text.into();
        let end_offset = start_offset + text.len();
        Token {
            text,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream is a lazy sequence of tokens borrowed from the text
/// being analyzed.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;
