//! Extraction pipeline
//!
//! Stage traits, the statically-composed [`runner::Pipeline`], observer
//! hooks, and the JSON extraction spec with its validation engine.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
