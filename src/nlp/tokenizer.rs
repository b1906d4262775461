//! Word tokenization
//!
//! Tokens are maximal runs of Unicode word characters (alphanumerics and
//! underscore), lowercased. Everything else separates tokens and is dropped.

use crate::types::TokenSet;

/// A tokenizer producing the lowercase token set of a sentence
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length (in characters) to consider
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize a sentence into its set of lowercase tokens
    pub fn tokenize(&self, text: &str) -> TokenSet {
        self.words(text)
            .filter(|word| word.chars().count() >= self.min_token_length)
            .map(str::to_lowercase)
            .collect()
    }

    /// Iterate over the raw (case-preserving) word runs of `text`
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(|c: char| !Self::is_word_char(c))
            .filter(|word| !word.is_empty())
    }

    /// Check if a character belongs to a word
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}
