//! Keyword rankers
//!
//! The pipeline treats ranking as a black box behind
//! [`KeywordRanker`](crate::pipeline::traits::KeywordRanker); this module
//! holds the default graph-based implementation.

pub mod textrank;

pub use textrank::TextRankRanker;
