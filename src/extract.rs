//! End-to-end extraction job
//!
//! Resolves a validated [`ExtractionSpec`] into runtime settings, reads the
//! text column, runs the pipeline, and writes the keyword list.

use std::path::PathBuf;

use crate::errors::{KeywordError, Result};
use crate::nlp::lemmatizer::{Lexicon, LexiconLemmatizer};
use crate::pipeline::artifacts::KeywordList;
use crate::pipeline::observer::{PipelineObserver, StageTimingObserver};
use crate::pipeline::runner::Pipeline;
use crate::pipeline::spec::ExtractionSpec;
use crate::pipeline::traits::{LemmaPreprocessor, PercentileSelector};
use crate::pipeline::validation::ValidationEngine;
use crate::ranker::TextRankRanker;
use crate::selection::SelectionConfig;
use crate::table::{self, CsvTableOptions, DEFAULT_OUTPUT_HEADER};
use crate::types::TextRankConfig;

/// A fully resolved extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    pub input: PathBuf,
    pub column: String,
    pub table: CsvTableOptions,
    pub lexicon: Option<PathBuf>,
    pub ranker: TextRankConfig,
    pub selection: SelectionConfig,
    /// Output CSV; `None` leaves writing to the caller
    pub output: Option<PathBuf>,
    pub header: String,
}

impl ExtractionJob {
    /// Validate `spec` and resolve it into a job.
    ///
    /// Warnings are logged; any error fails with
    /// [`KeywordError::InvalidConfig`] carrying the full report.
    pub fn from_spec(spec: &ExtractionSpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        for warning in report.warnings() {
            tracing::warn!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }
        if report.has_errors() {
            return Err(KeywordError::InvalidConfig(report));
        }

        let (Some(input), Some(column), Some(selection), Some(table)) = (
            spec.input.path.clone(),
            spec.input.column.clone(),
            spec.selection_config(),
            spec.table_options(),
        ) else {
            return Err(KeywordError::InvalidConfig(report));
        };

        Ok(Self {
            input,
            column,
            table,
            lexicon: spec.input.lexicon.clone(),
            ranker: spec.text_rank_config(),
            selection,
            output: spec.output.path.clone(),
            header: spec
                .output
                .header
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTPUT_HEADER.to_string()),
        })
    }

    /// Built-in English lexicon, extended by the configured lexicon file.
    pub fn lemmatizer(&self) -> Result<LexiconLemmatizer> {
        let mut lexicon = Lexicon::english();
        if let Some(path) = &self.lexicon {
            let extra = Lexicon::from_path(path)?;
            tracing::debug!(path = %path.display(), entries = extra.len(), "loaded lexicon");
            lexicon.extend(extra);
        }
        Ok(LexiconLemmatizer::new(lexicon))
    }

    /// Run with per-stage timings logged at `info`.
    pub fn run(&self) -> Result<KeywordList> {
        let mut observer = StageTimingObserver::new();
        let keywords = self.run_with_observer(&mut observer)?;
        for (stage, report) in observer.reports() {
            tracing::info!(
                stage,
                elapsed_ms = report.duration().as_secs_f64() * 1000.0,
                items = ?report.items(),
                "stage finished"
            );
        }
        Ok(keywords)
    }

    pub fn run_with_observer(&self, observer: &mut impl PipelineObserver) -> Result<KeywordList> {
        let corpus = table::read_text_column_from_path(&self.input, &self.column, &self.table)?;

        let pipeline = Pipeline {
            preprocessor: LemmaPreprocessor::new(self.lemmatizer()?),
            ranker: TextRankRanker::with_config(self.ranker.clone()),
            selector: PercentileSelector,
        };
        let keywords = pipeline.run(&corpus, &self.selection, observer);

        if let Some(path) = &self.output {
            table::write_keywords_to_path(path, &self.header, &keywords.keywords)?;
        }

        tracing::info!(
            keywords = keywords.len(),
            candidates = keywords.candidates,
            threshold = ?keywords.threshold,
            "extraction finished"
        );
        Ok(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::spec::PercentValue;
    use std::fs;

    fn spec_for(input: PathBuf, top_percent: f64) -> ExtractionSpec {
        let mut spec = ExtractionSpec::default();
        spec.input.path = Some(input);
        spec.input.column = Some("text".to_string());
        spec.selection.top_percent = Some(PercentValue::Number(top_percent));
        spec
    }

    #[test]
    fn test_from_spec_resolves_defaults() {
        let job = ExtractionJob::from_spec(&spec_for("in.csv".into(), 10.0)).unwrap();

        assert_eq!(job.column, "text");
        assert_eq!(job.header, "keywords");
        assert_eq!(job.table.delimiter, b',');
        assert_eq!(job.selection.top_percent.value(), 10.0);
        assert!(job.output.is_none());
    }

    #[test]
    fn test_from_spec_rejects_invalid() {
        let spec = spec_for("in.csv".into(), 150.0);
        match ExtractionJob::from_spec(&spec) {
            Err(KeywordError::InvalidConfig(report)) => assert_eq!(report.errors().count(), 1),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(
            &input,
            "id,text\n1,Graph ranking finds keywords in text.\n2,\n3,Keyword graphs rank words.\n",
        )
        .unwrap();

        let mut spec = spec_for(input, 100.0);
        spec.output.path = Some(output.clone());
        let keywords = ExtractionJob::from_spec(&spec).unwrap().run().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("keywords"));
        assert_eq!(lines.collect::<Vec<_>>(), keywords.keywords);
        assert!(!keywords.is_empty());
    }

    #[test]
    fn test_missing_column_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "id,body\n1,hello\n").unwrap();

        let mut spec = spec_for(input, 50.0);
        spec.output.path = Some(output.clone());
        let err = ExtractionJob::from_spec(&spec).unwrap().run().unwrap_err();

        assert!(matches!(err, KeywordError::MissingColumn { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_lexicon_extends_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = dir.path().join("lexicon.tsv");
        fs::write(&lexicon, "# extra entries\nn\tzorb\nn\tzorbii\tzorb\n").unwrap();

        let mut job = ExtractionJob::from_spec(&spec_for("in.csv".into(), 10.0)).unwrap();
        job.lexicon = Some(lexicon);
        let lemmatizer = job.lemmatizer().unwrap();

        assert!(lemmatizer.lexicon().contains_base(crate::types::WordClass::Noun, "zorb"));
        assert_eq!(lemmatizer.lexicon().exception(crate::types::WordClass::Noun, "zorbii"), Some("zorb"));
        assert!(lemmatizer.lexicon().contains_base(crate::types::WordClass::Noun, "dog"));
    }
}
