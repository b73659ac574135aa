//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched through [`Pipeline`](super::runner::Pipeline); boxed
//! trait objects work as well.

use crate::nlp::lemmatizer::{Lemmatizer, LexiconLemmatizer};
use crate::nlp::normalizer::TextNormalizer;
use crate::pipeline::artifacts::{Corpus, LemmatizedText, RankedTerms};
use crate::selection::percentile::{self, Selection, SelectionConfig};
use crate::types::ScoredTerm;

// ============================================================================
// Preprocessor: corpus to lemmatized tokens (stage 0)
// ============================================================================

/// Turns the raw corpus into lemmatized text and normalizes ranked terms the
/// same way.
///
/// # Contract
///
/// - `preprocess` keeps token count and order.
/// - `normalize_term` applied to its own output returns it unchanged.
pub trait Preprocessor {
    /// Tokenize and lemmatize the joined corpus text.
    fn preprocess(&self, corpus: &Corpus) -> LemmatizedText;

    /// Normalize a (possibly multi-word) ranked term.
    fn normalize_term(&self, term: &str) -> String;
}

/// Default preprocessor: Unicode word split plus the four lemma passes.
#[derive(Debug, Clone, Default)]
pub struct LemmaPreprocessor<L = LexiconLemmatizer> {
    normalizer: TextNormalizer<L>,
}

impl LemmaPreprocessor<LexiconLemmatizer> {
    pub fn english() -> Self {
        Self::new(LexiconLemmatizer::english())
    }
}

impl<L: Lemmatizer> LemmaPreprocessor<L> {
    pub fn new(lemmatizer: L) -> Self {
        Self {
            normalizer: TextNormalizer::new(lemmatizer),
        }
    }

    pub fn normalizer(&self) -> &TextNormalizer<L> {
        &self.normalizer
    }
}

impl<L: Lemmatizer> Preprocessor for LemmaPreprocessor<L> {
    fn preprocess(&self, corpus: &Corpus) -> LemmatizedText {
        LemmatizedText::new(self.normalizer.normalize_text(&corpus.text()))
    }

    fn normalize_term(&self, term: &str) -> String {
        self.normalizer.normalize_term(term)
    }
}

// ============================================================================
// KeywordRanker: text to scored terms (stage 1)
// ============================================================================

/// Scores candidate terms of a text.
///
/// Every returned pair carries a score. Terms need not be unique and callers
/// do not rely on their order. Empty text yields no terms.
pub trait KeywordRanker {
    fn rank(&self, text: &str) -> Vec<ScoredTerm>;
}

impl<R: KeywordRanker + ?Sized> KeywordRanker for &R {
    fn rank(&self, text: &str) -> Vec<ScoredTerm> {
        (**self).rank(text)
    }
}

impl<R: KeywordRanker + ?Sized> KeywordRanker for Box<R> {
    fn rank(&self, text: &str) -> Vec<ScoredTerm> {
        (**self).rank(text)
    }
}

/// Ranker returning a fixed term list whatever the input.
///
/// Useful for exercising the selection stage without a real ranker.
#[derive(Debug, Clone, Default)]
pub struct StaticRanker {
    terms: Vec<ScoredTerm>,
}

impl StaticRanker {
    pub fn new<T: Into<ScoredTerm>>(terms: impl IntoIterator<Item = T>) -> Self {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

impl KeywordRanker for StaticRanker {
    fn rank(&self, _text: &str) -> Vec<ScoredTerm> {
        self.terms.clone()
    }
}

// ============================================================================
// KeywordSelector: ranked terms to retained terms (stage 2)
// ============================================================================

/// Picks the terms to keep from the ranked list.
pub trait KeywordSelector {
    fn select(&self, ranked: &RankedTerms, cfg: &SelectionConfig) -> Selection;
}

/// Keeps terms at or above the `(100 - P)`th score percentile.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileSelector;

impl KeywordSelector for PercentileSelector {
    #[inline]
    fn select(&self, ranked: &RankedTerms, cfg: &SelectionConfig) -> Selection {
        percentile::select(&ranked.terms, cfg)
    }
}
