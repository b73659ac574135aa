//! Phrase construction
//!
//! Merges adjacent ranked words into multi-word keyword terms.

pub mod combiner;
