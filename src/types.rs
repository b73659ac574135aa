//! Core data types shared across the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical role used when reducing a word to its lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Verb,
    Noun,
    Adverb,
    Adjective,
}

impl WordClass {
    /// Order in which lemma passes are applied. Each pass sees the output of
    /// the previous one.
    pub const PASS_ORDER: [WordClass; 4] = [
        WordClass::Verb,
        WordClass::Noun,
        WordClass::Adverb,
        WordClass::Adjective,
    ];

    /// Dense index for per-class tables.
    pub fn index(self) -> usize {
        match self {
            WordClass::Verb => 0,
            WordClass::Noun => 1,
            WordClass::Adverb => 2,
            WordClass::Adjective => 3,
        }
    }

    /// Single-letter code (`v`, `n`, `r`, `a`).
    pub fn code(self) -> char {
        match self {
            WordClass::Verb => 'v',
            WordClass::Noun => 'n',
            WordClass::Adverb => 'r',
            WordClass::Adjective => 'a',
        }
    }

    /// Parse a class code or name. `s` (adjective satellite) maps to
    /// [`WordClass::Adjective`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "v" | "verb" => Some(WordClass::Verb),
            "n" | "noun" => Some(WordClass::Noun),
            "r" | "adv" | "adverb" => Some(WordClass::Adverb),
            "a" | "s" | "adj" | "adjective" => Some(WordClass::Adjective),
            _ => None,
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A token produced by the word tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text as it appears in the input
    pub text: String,
    /// Lowercased form used as the graph key
    pub norm: String,
    /// Byte offset where the token starts
    pub start: usize,
    /// Byte offset where the token ends
    pub end: usize,
    /// Position within the token sequence
    pub token_idx: usize,
    /// Whether this token is a stopword
    pub is_stopword: bool,
    /// Whether the token is alphabetic and long enough to rank
    pub is_content: bool,
}

impl Token {
    /// Create a new content token
    pub fn new(text: impl Into<String>, start: usize, end: usize, token_idx: usize) -> Self {
        let text = text.into();
        let norm = text.to_lowercase();
        Self {
            text,
            norm,
            start,
            end,
            token_idx,
            is_stopword: false,
            is_content: true,
        }
    }

    /// Check if this token should become a node in the co-occurrence graph
    #[inline]
    pub fn is_graph_candidate(&self) -> bool {
        self.is_content && !self.is_stopword
    }
}

/// A candidate keyword paired with its ranking score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

impl ScoredTerm {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for ScoredTerm {
    fn from((term, score): (S, f64)) -> Self {
        Self::new(term, score)
    }
}

/// Configuration for the TextRank keyword ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Co-occurrence window over the candidate sequence
    pub window_size: usize,
    /// Fraction of graph nodes kept as keywords
    pub ratio: f64,
    /// Absolute keyword cap; overrides `ratio` when set
    pub max_words: Option<usize>,
    /// PageRank damping factor
    pub damping: f64,
    /// Maximum PageRank iterations
    pub max_iterations: usize,
    /// PageRank convergence threshold (L1 delta)
    pub convergence_threshold: f64,
    /// Tokens shorter than this (in chars) are not ranked
    pub min_word_length: usize,
    /// Accumulate co-occurrence counts instead of binary edges
    pub use_edge_weights: bool,
    /// Longest multi-word term produced when merging adjacent keywords
    pub max_phrase_words: usize,
    /// Stopword language code
    pub language: String,
    /// Additional stopwords
    pub extra_stopwords: Vec<String>,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            window_size: 2,
            ratio: 0.2,
            max_words: None,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            min_word_length: 3,
            use_edge_weights: false,
            max_phrase_words: 5,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}
