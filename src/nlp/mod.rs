//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering and lemma
//! normalization.

mod lexicon_en;

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
