//! Extraction specification types.
//!
//! An [`ExtractionSpec`] describes where the text comes from, how the ranker
//! is tuned, how many keywords to keep, and where to write them. These types
//! are the input to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "input": { "path": "reviews.csv", "column": "text", "delimiter": "," },
//!   "ranker": { "window_size": 2, "ratio": 0.2, "language": "en" },
//!   "selection": { "top_percent": 10, "dedupe": false },
//!   "output": { "path": "keywords.csv", "header": "keywords" },
//!   "strict": false
//! }
//! ```
//!
//! Every field is optional at parse time; validation reports what is missing.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::selection::{SelectionConfig, TopPercent};
use crate::table::CsvTableOptions;
use crate::types::TextRankConfig;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

fn default_version() -> u32 {
    SPEC_VERSION
}

/// Top-level extraction specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSpec {
    /// Spec version (currently `1`).
    #[serde(default = "default_version")]
    pub v: u32,

    #[serde(default)]
    pub input: InputSpec,

    #[serde(default)]
    pub ranker: RankerSpec,

    #[serde(default)]
    pub selection: SelectionSpec,

    #[serde(default)]
    pub output: OutputSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for ExtractionSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            input: InputSpec::default(),
            ranker: RankerSpec::default(),
            selection: SelectionSpec::default(),
            output: OutputSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl ExtractionSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading extraction spec");
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Runtime ranker config; unset fields take their defaults.
    pub fn text_rank_config(&self) -> TextRankConfig {
        self.ranker.to_config()
    }

    /// Runtime selection config, or `None` if no valid percentage is set.
    pub fn selection_config(&self) -> Option<SelectionConfig> {
        let top_percent = self.selection.top_percent.as_ref()?.resolve().ok()?;
        Some(SelectionConfig::new(top_percent).with_dedupe(self.selection.dedupe))
    }

    /// CSV parsing options, or `None` if the delimiter is malformed.
    pub fn table_options(&self) -> Option<CsvTableOptions> {
        let options = CsvTableOptions::default();
        match self.input.delimiter.as_deref() {
            None => Some(options),
            Some(raw) => parse_delimiter(raw).map(|d| options.with_delimiter(d)),
        }
    }
}

/// Where the text comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSpec {
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Header name of the text column.
    #[serde(default)]
    pub column: Option<String>,

    /// Single-character field delimiter; `"tab"` and `"\t"` mean a tab.
    #[serde(default)]
    pub delimiter: Option<String>,

    /// Extra lemmatizer lexicon merged over the built-in English one.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Ranker tuning. Unset fields keep the [`TextRankConfig`] defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankerSpec {
    #[serde(default)]
    pub window_size: Option<usize>,

    #[serde(default)]
    pub ratio: Option<f64>,

    #[serde(default)]
    pub max_words: Option<usize>,

    #[serde(default)]
    pub damping: Option<f64>,

    #[serde(default)]
    pub max_iterations: Option<usize>,

    #[serde(default)]
    pub convergence_threshold: Option<f64>,

    #[serde(default)]
    pub min_word_length: Option<usize>,

    #[serde(default)]
    pub use_edge_weights: Option<bool>,

    #[serde(default)]
    pub max_phrase_words: Option<usize>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl RankerSpec {
    pub fn to_config(&self) -> TextRankConfig {
        let defaults = TextRankConfig::default();
        TextRankConfig {
            window_size: self.window_size.unwrap_or(defaults.window_size),
            ratio: self.ratio.unwrap_or(defaults.ratio),
            max_words: self.max_words.or(defaults.max_words),
            damping: self.damping.unwrap_or(defaults.damping),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            convergence_threshold: self
                .convergence_threshold
                .unwrap_or(defaults.convergence_threshold),
            min_word_length: self.min_word_length.unwrap_or(defaults.min_word_length),
            use_edge_weights: self.use_edge_weights.unwrap_or(defaults.use_edge_weights),
            max_phrase_words: self.max_phrase_words.unwrap_or(defaults.max_phrase_words),
            language: self.language.clone().unwrap_or(defaults.language),
            extra_stopwords: self.extra_stopwords.clone(),
        }
    }
}

/// How many keywords to keep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSpec {
    #[serde(default)]
    pub top_percent: Option<PercentValue>,

    #[serde(default)]
    pub dedupe: bool,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// A percentage given either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PercentValue {
    Number(f64),
    Text(String),
}

impl PercentValue {
    pub fn resolve(&self) -> Result<TopPercent> {
        match self {
            Self::Number(n) => TopPercent::new(*n),
            Self::Text(s) => TopPercent::parse(s),
        }
    }
}

impl From<f64> for PercentValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for PercentValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Where and how keywords are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Output CSV path; keywords go to stdout when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Column header; defaults to `keywords`.
    #[serde(default)]
    pub header: Option<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Parse a delimiter given as a single ASCII character, `"tab"` or `"\t"`.
pub fn parse_delimiter(raw: &str) -> Option<u8> {
    match raw {
        "tab" | "\\t" | "\t" => Some(b'\t'),
        _ => {
            let mut bytes = raw.bytes();
            match (bytes.next(), bytes.next()) {
                (Some(b), None) if b.is_ascii() && b != b'"' && b != b'\n' && b != b'\r' => Some(b),
                _ => None,
            }
        }
    }
}
