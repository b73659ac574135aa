//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::{Corpus, LemmatizedText, RankedTerms};
use crate::selection::Selection;

// ─── Stage names ────────────────────────────────────────────────────────────

pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_NORMALIZE_TERMS: &str = "normalize_terms";
pub const STAGE_SELECT: &str = "select";

/// All stages in execution order.
pub const STAGES: [&str; 4] = [
    STAGE_PREPROCESS,
    STAGE_RANK,
    STAGE_NORMALIZE_TERMS,
    STAGE_SELECT,
];

// ─── Timing ─────────────────────────────────────────────────────────────────

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Per-stage metrics handed to [`PipelineObserver::on_stage_end`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    duration: Duration,
    items: Option<usize>,
    threshold: Option<f64>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of items the stage produced (tokens, terms, keywords)
    pub fn items(&self) -> Option<usize> {
        self.items
    }

    /// Score cut-off, reported by the select stage
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn threshold(mut self, threshold: Option<f64>) -> Self {
        self.report.threshold = threshold;
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ─── Observer trait ─────────────────────────────────────────────────────────

/// Callbacks fired by [`Pipeline::run`](super::runner::Pipeline::run).
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Input corpus, before preprocessing
    fn on_corpus(&mut self, _corpus: &Corpus) {}

    fn on_lemmatized(&mut self, _text: &LemmatizedText) {}

    /// Ranked terms after re-normalization
    fn on_ranked(&mut self, _ranked: &RankedTerms) {}

    fn on_selection(&mut self, _selection: &Selection) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records a [`StageReport`] for every completed stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in stage completion order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations.
    pub fn total_duration(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .items(7)
            .threshold(Some(0.5))
            .build();

        assert_eq!(report.duration(), Duration::from_millis(3));
        assert_eq!(report.items(), Some(7));
        assert_eq!(report.threshold(), Some(0.5));
    }

    #[test]
    fn test_plain_report_has_no_metrics() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.items().is_none());
        assert!(report.threshold().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        for stage in STAGES {
            obs.on_stage_start(stage);
            obs.on_stage_end(stage, &StageReport::new(Duration::from_millis(1)));
        }

        let names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, STAGES);
        assert_eq!(obs.total_duration(), Duration::from_millis(4));
        assert!(obs.report(STAGE_SELECT).is_some());
        assert!(obs.report("missing").is_none());
    }

    #[test]
    fn test_clock_is_monotonic() {
        let clock = StageClock::start();
        let first = clock.elapsed();
        assert!(clock.elapsed() >= first);
    }
}
