//! Keyword selection
//!
//! Cuts a ranked term list down to the highest-scoring fraction.

pub mod percentile;

pub use percentile::{percentile, select, select_top_percent, Selection, SelectionConfig, TopPercent};
