//! # rapid-keywords
//!
//! Extracts the top P percent of TextRank keywords from one text column of
//! a CSV table.
//!
//! The text cells are joined into one corpus and lemmatized in four passes
//! (verb, noun, adverb, adjective). A [`KeywordRanker`] scores candidate
//! terms, each term is normalized the same way, and every term scoring at or
//! above the `(100 - P)`th percentile is kept.
//!
//! ```no_run
//! use rapid_keywords::pipeline::observer::NoopObserver;
//! use rapid_keywords::table::{read_text_column_from_path, CsvTableOptions};
//! use rapid_keywords::{DefaultPipeline, SelectionConfig, TextRankConfig, TopPercent};
//!
//! # fn main() -> rapid_keywords::Result<()> {
//! let corpus = read_text_column_from_path("reviews.csv", "text", &CsvTableOptions::default())?;
//! let pipeline = DefaultPipeline::textrank(TextRankConfig::default());
//! let cfg = SelectionConfig::new(TopPercent::new(10.0)?);
//!
//! let keywords = pipeline.run(&corpus, &cfg, &mut NoopObserver);
//! println!("{:?}", keywords.keywords);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod extract;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod pipeline;
pub mod ranker;
pub mod selection;
pub mod table;
pub mod types;

pub use errors::{KeywordError, Result};
pub use extract::ExtractionJob;
pub use nlp::lemmatizer::{Lemmatizer, Lexicon, LexiconLemmatizer};
pub use nlp::normalizer::TextNormalizer;
pub use pipeline::artifacts::{Corpus, KeywordList};
pub use pipeline::runner::{DefaultPipeline, Pipeline, PipelineBuilder};
pub use pipeline::spec::ExtractionSpec;
pub use pipeline::traits::{KeywordRanker, StaticRanker};
pub use ranker::TextRankRanker;
pub use selection::{SelectionConfig, TopPercent};
pub use types::{ScoredTerm, TextRankConfig, WordClass};
