//! Alphabetic-run tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that emits maximal runs of ASCII alphabetic characters.
///
/// Digits, punctuation, and whitespace separate words and never appear
/// inside a token. Classification is ASCII-only; the document model is a
/// plain byte buffer.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticTokenizer;

impl AlphabeticTokenizer {
    /// Create a new alphabetic tokenizer.
    pub fn new() -> Self {
        AlphabeticTokenizer
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(Box::new(AlphabeticTokens {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

/// Lazy iterator over the alphabetic runs of a text buffer.
struct AlphabeticTokens<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for AlphabeticTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        // Skip separators to the start of the next word
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }

        if self.pos >= self.bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }

        Some(Token::new(&self.text[start..self.pos], start))
    }
}
