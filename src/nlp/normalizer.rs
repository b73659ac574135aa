//! Four-pass lemma normalization
//!
//! Every token is lemmatized as a verb, then the result as a noun, then as an
//! adverb, then as an adjective. Each pass runs over the whole sequence
//! before the next one starts. Output length and order always match the
//! input.

use std::borrow::Cow;

use super::lemmatizer::{Lemmatizer, LexiconLemmatizer};
use super::tokenizer::split_words;
use crate::types::WordClass;

/// Applies the verb → noun → adverb → adjective lemma passes.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer<L = LexiconLemmatizer> {
    lemmatizer: L,
}

impl TextNormalizer<LexiconLemmatizer> {
    /// Normalizer over the built-in English lexicon
    pub fn english() -> Self {
        Self::new(LexiconLemmatizer::english())
    }
}

impl<L: Lemmatizer> TextNormalizer<L> {
    pub fn new(lemmatizer: L) -> Self {
        Self { lemmatizer }
    }

    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }

    /// Normalize a sequence of tokens, pass by pass.
    pub fn normalize_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let mut current: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();

        for class in WordClass::PASS_ORDER {
            for token in current.iter_mut() {
                let replacement = match self.lemmatizer.lemmatize(token.as_str(), class) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(lemma) => Some(lemma),
                };
                if let Some(lemma) = replacement {
                    *token = lemma;
                }
            }
        }

        current
    }

    /// Split raw text into words, then normalize them.
    pub fn normalize_text(&self, text: &str) -> Vec<String> {
        self.normalize_tokens(&split_words(text))
    }

    /// Normalize a single word through all four passes.
    pub fn normalize_word(&self, word: &str) -> String {
        let mut current = word.to_string();
        for class in WordClass::PASS_ORDER {
            let next = match self.lemmatizer.lemmatize(&current, class) {
                Cow::Borrowed(_) => None,
                Cow::Owned(lemma) => Some(lemma),
            };
            if let Some(lemma) = next {
                current = lemma;
            }
        }
        current
    }

    /// Normalize a possibly multi-word ranked term word by word.
    ///
    /// Words are re-joined with single spaces.
    pub fn normalize_term(&self, term: &str) -> String {
        term.split_whitespace()
            .map(|word| self.normalize_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
