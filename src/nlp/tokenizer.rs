//! Word tokenization
//!
//! Splits text on Unicode word boundaries (UAX #29). Whitespace and
//! punctuation never become tokens.

use super::stopwords::StopwordFilter;
use crate::types::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into word strings, dropping whitespace and punctuation.
pub fn split_words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Tokenizer that marks stopwords and non-content tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
    min_word_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer with English stopwords
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            min_word_length: 3,
        }
    }

    /// Use a custom stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the minimum length (in chars) of a content token
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Tokenize text into a sequence of [`Token`]s
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.unicode_word_indices()
            .enumerate()
            .map(|(idx, (start, word))| {
                let mut token = Token::new(word, start, start + word.len(), idx);
                token.is_stopword = self.stopwords.is_stopword(&token.norm);
                token.is_content = self.is_content_word(word);
                token
            })
            .collect()
    }

    fn is_content_word(&self, word: &str) -> bool {
        word.chars().all(char::is_alphabetic) && word.chars().count() >= self.min_word_length
    }
}
