//! Graph construction and representation
//!
//! This module provides graph building and CSR storage for the word
//! co-occurrence graph.

pub mod builder;
pub mod csr;
