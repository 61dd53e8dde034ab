//! Text analysis for Concord.
//!
//! Analysis is the first stage of indexing: raw document text is scanned
//! into tokens, which the index builder cross-references against the
//! keyword vocabulary.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;
pub use tokenizer::alphabetic::AlphabeticTokenizer;
