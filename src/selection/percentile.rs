//! Percentile threshold filter
//!
//! Keeps the terms whose score is at or above the `(100 - P)`th percentile
//! of all scores. The percentile interpolates linearly between the two
//! closest ranks of the ascending-sorted scores, so with scores
//! `[2, 5, 8, 10]` and `P = 50` the threshold is `6.5`.
//!
//! The comparison is inclusive: every term tied with the threshold is kept,
//! which can return more than exactly P percent of the terms.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::errors::{KeywordError, Result};
use crate::types::ScoredTerm;

/// Value at the `q`th percentile (`0..=100`) of `scores`.
///
/// Uses linear interpolation between closest ranks: the rank is
/// `q / 100 * (n - 1)` on the ascending-sorted scores. Returns `None` for an
/// empty slice. `q` outside `0..=100` is clamped.
pub fn percentile(scores: &[f64], q: f64) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = q.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    if frac == 0.0 {
        Some(sorted[lo])
    } else {
        Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
    }
}

// ─── TopPercent ─────────────────────────────────────────────────────────────

/// A validated percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TopPercent(f64);

impl TopPercent {
    /// Keep every term.
    pub const ALL: TopPercent = TopPercent(100.0);

    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(KeywordError::InvalidPercentile {
                value: value.to_string(),
            })
        }
    }

    /// Parse a user-supplied percentage such as `"10"` or `" 12.5 "`.
    pub fn parse(value: &str) -> Result<Self> {
        let parsed: f64 = value
            .trim()
            .parse()
            .map_err(|_| KeywordError::InvalidPercentile {
                value: value.to_string(),
            })?;
        Self::new(parsed).map_err(|_| KeywordError::InvalidPercentile {
            value: value.to_string(),
        })
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Percentile whose score becomes the cut-off.
    pub fn threshold_quantile(self) -> f64 {
        100.0 - self.0
    }
}

impl fmt::Display for TopPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ─── Selection ──────────────────────────────────────────────────────────────

/// Runtime selection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionConfig {
    pub top_percent: TopPercent,
    /// Drop later repeats of an already retained term
    pub dedupe: bool,
}

impl SelectionConfig {
    pub fn new(top_percent: TopPercent) -> Self {
        Self {
            top_percent,
            dedupe: false,
        }
    }

    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }
}

/// Terms retained by the percentile filter, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub terms: Vec<ScoredTerm>,
    /// Cut-off score; `None` when there was nothing to select from
    pub threshold: Option<f64>,
    /// Number of terms considered
    pub candidates: usize,
}

impl Selection {
    /// Retained terms without scores.
    pub fn keywords(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.term.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Keep only the first occurrence of each term.
    pub fn dedupe(mut self) -> Self {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        self.terms.retain(|t| seen.insert(t.term.clone()));
        self
    }
}

/// Keep every term scoring at or above the `(100 - P)`th percentile.
pub fn select_top_percent(terms: &[ScoredTerm], top_percent: TopPercent) -> Selection {
    let scores: Vec<f64> = terms.iter().map(|t| t.score).collect();
    let Some(threshold) = percentile(&scores, top_percent.threshold_quantile()) else {
        return Selection::default();
    };

    Selection {
        terms: terms
            .iter()
            .filter(|t| t.score >= threshold)
            .cloned()
            .collect(),
        threshold: Some(threshold),
        candidates: terms.len(),
    }
}

/// Apply [`select_top_percent`] and the optional dedupe pass.
pub fn select(terms: &[ScoredTerm], config: &SelectionConfig) -> Selection {
    let selection = select_top_percent(terms, config.top_percent);
    if config.dedupe {
        selection.dedupe()
    } else {
        selection
    }
}
