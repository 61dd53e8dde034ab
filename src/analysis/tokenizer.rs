//! Tokenizer trait and implementations.
//!
//! Tokenizers split document text into tokens. Concord indexes words, so
//! the stock tokenizer is [`alphabetic::AlphabeticTokenizer`], which emits
//! maximal runs of ASCII alphabetic characters.
//!
//! # Examples
//!
//! ```
//! use concord::analysis::tokenizer::Tokenizer;
//! use concord::analysis::tokenizer::alphabetic::AlphabeticTokenizer;
//!
//! let tokenizer = AlphabeticTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is pure: it never mutates the text and may be re-run on the
/// same buffer to restart the sequence.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod alphabetic;
