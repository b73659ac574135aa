//! Keyword combination
//!
//! Walks the token sequence and merges maximal runs of adjacent keyword
//! tokens into multi-word terms. A term's score is the mean of its words'
//! scores.

use crate::types::{ScoredTerm, Token};
use rustc_hash::{FxHashMap, FxHashSet};

/// Merges adjacent keywords into multi-word terms
#[derive(Debug, Clone)]
pub struct KeywordCombiner {
    /// Longest term produced; longer runs are split
    max_words: usize,
}

impl Default for KeywordCombiner {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordCombiner {
    /// Create a combiner with the default length cap (5 words)
    pub fn new() -> Self {
        Self { max_words: 5 }
    }

    /// Set the maximum number of words in a combined term
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words.max(1);
        self
    }

    /// Combine keywords into scored terms.
    ///
    /// `keyword_scores` maps a normalized word to its score. Terms are
    /// unique and ordered by descending score; ties keep first-occurrence
    /// order.
    pub fn combine(&self, tokens: &[Token], keyword_scores: &FxHashMap<&str, f64>) -> Vec<ScoredTerm> {
        let mut terms: Vec<ScoredTerm> = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut run: Vec<&str> = Vec::new();

        for token in tokens {
            let is_keyword =
                token.is_graph_candidate() && keyword_scores.contains_key(token.norm.as_str());
            if is_keyword {
                run.push(&token.norm);
                if run.len() == self.max_words {
                    self.flush(&mut run, keyword_scores, &mut terms, &mut seen);
                }
            } else {
                self.flush(&mut run, keyword_scores, &mut terms, &mut seen);
            }
        }
        self.flush(&mut run, keyword_scores, &mut terms, &mut seen);

        // Stable sort keeps first-occurrence order among equal scores
        terms.sort_by(|a, b| b.score.total_cmp(&a.score));
        terms
    }

    fn flush(
        &self,
        run: &mut Vec<&str>,
        keyword_scores: &FxHashMap<&str, f64>,
        terms: &mut Vec<ScoredTerm>,
        seen: &mut FxHashSet<String>,
    ) {
        if run.is_empty() {
            return;
        }

        let total: f64 = run.iter().map(|w| keyword_scores.get(w).copied().unwrap_or(0.0)).sum();
        let score = total / run.len() as f64;
        let term = run.join(" ");
        run.clear();

        if seen.insert(term.clone()) {
            terms.push(ScoredTerm::new(term, score));
        }
    }
}
