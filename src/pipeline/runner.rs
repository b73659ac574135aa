//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so every combination is
//! monomorphized into its own concrete type. Use [`Pipeline::textrank()`] for
//! the default stages, or [`PipelineBuilder`] to swap individual ones.

use crate::pipeline::artifacts::{Corpus, KeywordList, RankedTerms};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_NORMALIZE_TERMS, STAGE_PREPROCESS,
    STAGE_RANK, STAGE_SELECT,
};
use crate::pipeline::traits::{
    KeywordRanker, KeywordSelector, LemmaPreprocessor, PercentileSelector, Preprocessor,
};
use crate::ranker::TextRankRanker;
use crate::selection::SelectionConfig;
use crate::types::{ScoredTerm, TextRankConfig};

/// Enter a tracing span for a pipeline stage; it closes at end of scope.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Pre` | [`Preprocessor`] | [`LemmaPreprocessor`] |
/// | `Rnk` | [`KeywordRanker`] | [`TextRankRanker`] |
/// | `Sel` | [`KeywordSelector`] | [`PercentileSelector`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Pre, Rnk, Sel> {
    pub preprocessor: Pre,
    pub ranker: Rnk,
    pub selector: Sel,
}

/// The default pipeline: English lemmas, TextRank, percentile cut-off.
pub type DefaultPipeline = Pipeline<LemmaPreprocessor, TextRankRanker, PercentileSelector>;

impl DefaultPipeline {
    /// Default stages with a tuned TextRank ranker.
    pub fn textrank(cfg: TextRankConfig) -> Self {
        Pipeline {
            preprocessor: LemmaPreprocessor::english(),
            ranker: TextRankRanker::with_config(cfg),
            selector: PercentileSelector,
        }
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<Pre, Rnk, Sel> Pipeline<Pre, Rnk, Sel>
where
    Pre: Preprocessor,
    Rnk: KeywordRanker,
    Sel: KeywordSelector,
{
    /// Execute the pipeline, producing a [`KeywordList`].
    ///
    /// Stages run in order:
    /// 1. Preprocess (join cells, tokenize, lemmatize)
    /// 2. Rank the lemmatized text
    /// 3. Re-normalize each ranked term
    /// 4. Select terms at or above the percentile threshold
    pub fn run(
        &self,
        corpus: &Corpus,
        cfg: &SelectionConfig,
        observer: &mut impl PipelineObserver,
    ) -> KeywordList {
        observer.on_corpus(corpus);
        if corpus.is_empty() {
            tracing::warn!("corpus is empty; no keywords will be extracted");
        }

        // Stage 0: Preprocess
        let text = {
            trace_stage!(STAGE_PREPROCESS);
            observer.on_stage_start(STAGE_PREPROCESS);
            let clock = StageClock::start();
            let text = self.preprocessor.preprocess(corpus);
            let report = StageReportBuilder::new(clock.elapsed())
                .items(text.len())
                .build();
            observer.on_stage_end(STAGE_PREPROCESS, &report);
            observer.on_lemmatized(&text);
            tracing::debug!(cells = corpus.len(), tokens = text.len(), "preprocessed corpus");
            text
        };

        // Stage 1: Rank
        let raw = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let raw = self.ranker.rank(&text.text());
            let report = StageReportBuilder::new(clock.elapsed())
                .items(raw.len())
                .build();
            observer.on_stage_end(STAGE_RANK, &report);
            tracing::debug!(terms = raw.len(), "ranked text");
            raw
        };

        // Stage 2: Re-normalize ranked terms
        let ranked = {
            trace_stage!(STAGE_NORMALIZE_TERMS);
            observer.on_stage_start(STAGE_NORMALIZE_TERMS);
            let clock = StageClock::start();
            let ranked = RankedTerms::new(
                raw.into_iter()
                    .map(|t| ScoredTerm::new(self.preprocessor.normalize_term(&t.term), t.score))
                    .collect(),
            );
            let report = StageReportBuilder::new(clock.elapsed())
                .items(ranked.len())
                .build();
            observer.on_stage_end(STAGE_NORMALIZE_TERMS, &report);
            observer.on_ranked(&ranked);
            ranked
        };

        // Stage 3: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = self.selector.select(&ranked, cfg);
        let report = StageReportBuilder::new(clock.elapsed())
            .items(selection.len())
            .threshold(selection.threshold)
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selection);
        tracing::debug!(
            kept = selection.len(),
            candidates = selection.candidates,
            threshold = ?selection.threshold,
            top_percent = cfg.top_percent.value(),
            "selected keywords"
        );

        KeywordList::from(selection)
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the default stages and allows overriding individual ones.
///
/// ```
/// # use rapid_keywords::pipeline::runner::PipelineBuilder;
/// # use rapid_keywords::pipeline::traits::StaticRanker;
/// let pipeline = PipelineBuilder::new()
///     .ranker(StaticRanker::new([("graph", 1.0)]))
///     .build();
/// ```
pub struct PipelineBuilder<
    Pre = LemmaPreprocessor,
    Rnk = TextRankRanker,
    Sel = PercentileSelector,
> {
    preprocessor: Pre,
    ranker: Rnk,
    selector: Sel,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            preprocessor: LemmaPreprocessor::english(),
            ranker: TextRankRanker::new(),
            selector: PercentileSelector,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pre, Rnk, Sel> PipelineBuilder<Pre, Rnk, Sel> {
    /// Override the preprocessor stage.
    pub fn preprocessor<P: Preprocessor>(self, p: P) -> PipelineBuilder<P, Rnk, Sel> {
        PipelineBuilder {
            preprocessor: p,
            ranker: self.ranker,
            selector: self.selector,
        }
    }

    /// Override the ranker stage.
    pub fn ranker<R: KeywordRanker>(self, r: R) -> PipelineBuilder<Pre, R, Sel> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            ranker: r,
            selector: self.selector,
        }
    }

    /// Override the selector stage.
    pub fn selector<S: KeywordSelector>(self, s: S) -> PipelineBuilder<Pre, Rnk, S> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            ranker: self.ranker,
            selector: s,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Pre, Rnk, Sel> {
        Pipeline {
            preprocessor: self.preprocessor,
            ranker: self.ranker,
            selector: self.selector,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::lemmatizer::IdentityLemmatizer;
    use crate::pipeline::artifacts::LemmatizedText;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver, STAGES};
    use crate::pipeline::traits::StaticRanker;
    use crate::selection::{Selection, TopPercent};
    use std::cell::RefCell;

    fn pct(p: f64) -> SelectionConfig {
        SelectionConfig::new(TopPercent::new(p).unwrap())
    }

    fn sample_corpus() -> Corpus {
        ["cats run fast", "dogs run faster"].into_iter().collect()
    }

    fn static_pipeline() -> Pipeline<LemmaPreprocessor, StaticRanker, PercentileSelector> {
        PipelineBuilder::new()
            .ranker(StaticRanker::new([
                ("alpha", 10.0),
                ("beta", 8.0),
                ("gamma", 5.0),
                ("delta", 2.0),
            ]))
            .build()
    }

    /// Ranker that remembers the text it was given.
    struct RecordingRanker {
        seen: RefCell<Vec<String>>,
    }

    impl KeywordRanker for RecordingRanker {
        fn rank(&self, text: &str) -> Vec<ScoredTerm> {
            self.seen.borrow_mut().push(text.to_string());
            vec![ScoredTerm::new("running dogs", 1.0), ScoredTerm::new("cats", 0.5)]
        }
    }

    #[test]
    fn test_textrank_pipeline_constructs() {
        let _pipeline = DefaultPipeline::textrank(TextRankConfig::default());
        let _built = PipelineBuilder::new().build();
    }

    #[test]
    fn test_threshold_example() {
        let result = static_pipeline().run(&sample_corpus(), &pct(50.0), &mut NoopObserver);

        assert_eq!(result.keywords, vec!["alpha", "beta"]);
        assert!((result.threshold.unwrap() - 6.5).abs() < 1e-12);
        assert_eq!(result.candidates, 4);
    }

    #[test]
    fn test_ranker_sees_lemmatized_corpus() {
        let ranker = RecordingRanker {
            seen: RefCell::new(Vec::new()),
        };
        let pipeline = PipelineBuilder::new().ranker(&ranker).build();

        let result = pipeline.run(&sample_corpus(), &pct(100.0), &mut NoopObserver);

        assert_eq!(*ranker.seen.borrow(), vec!["cat run fast dog run fast"]);
        // Ranked terms are normalized the same way as the corpus
        assert_eq!(result.keywords, vec!["run dog", "cat"]);
    }

    #[test]
    fn test_empty_corpus_gives_empty_result() {
        let ranker = RecordingRanker {
            seen: RefCell::new(Vec::new()),
        };
        let pipeline = PipelineBuilder::new()
            .ranker(StaticRanker::default())
            .build();

        let result = pipeline.run(&Corpus::default(), &pct(50.0), &mut NoopObserver);
        assert!(result.is_empty());
        assert_eq!(result.threshold, None);

        // The ranker is still consulted with empty text
        let pipeline = PipelineBuilder::new().ranker(&ranker).build();
        pipeline.run(&Corpus::default(), &pct(50.0), &mut NoopObserver);
        assert_eq!(*ranker.seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_timing_observer_sees_all_stages() {
        let mut obs = StageTimingObserver::new();
        static_pipeline().run(&sample_corpus(), &pct(50.0), &mut obs);

        let names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, STAGES);

        let preprocess = obs.report(STAGE_PREPROCESS).unwrap();
        assert_eq!(preprocess.items(), Some(6));
        let select = obs.report(STAGE_SELECT).unwrap();
        assert_eq!(select.items(), Some(2));
        assert!((select.threshold().unwrap() - 6.5).abs() < 1e-12);
    }

    /// Observer that records which artifact hooks fired.
    #[derive(Default)]
    struct ArtifactObserver {
        saw_corpus: bool,
        lemmatized: Option<LemmatizedText>,
        ranked: usize,
        selected: Option<usize>,
    }

    impl PipelineObserver for ArtifactObserver {
        fn on_corpus(&mut self, _corpus: &Corpus) {
            self.saw_corpus = true;
        }
        fn on_lemmatized(&mut self, text: &LemmatizedText) {
            self.lemmatized = Some(text.clone());
        }
        fn on_ranked(&mut self, ranked: &RankedTerms) {
            self.ranked = ranked.len();
        }
        fn on_selection(&mut self, selection: &Selection) {
            self.selected = Some(selection.len());
        }
    }

    #[test]
    fn test_pipeline_calls_all_artifact_observers() {
        let mut obs = ArtifactObserver::default();
        static_pipeline().run(&sample_corpus(), &pct(50.0), &mut obs);

        assert!(obs.saw_corpus, "on_corpus not called");
        let tokens = obs.lemmatized.map(|t| t.tokens).unwrap_or_default();
        assert_eq!(tokens, ["cat", "run", "fast", "dog", "run", "fast"]);
        assert_eq!(obs.ranked, 4);
        assert_eq!(obs.selected, Some(2));
    }

    #[test]
    fn test_custom_preprocessor() {
        let pipeline = PipelineBuilder::new()
            .preprocessor(LemmaPreprocessor::new(IdentityLemmatizer))
            .ranker(StaticRanker::new([("Running Dogs", 1.0)]))
            .build();

        let result = pipeline.run(&sample_corpus(), &pct(100.0), &mut NoopObserver);
        assert_eq!(result.keywords, vec!["Running Dogs"]);
    }

    #[test]
    fn test_dedupe_through_pipeline() {
        let pipeline = PipelineBuilder::new()
            .ranker(StaticRanker::new([("dogs", 1.0), ("dog", 0.9), ("cat", 0.1)]))
            .build();

        let plain = pipeline.run(&sample_corpus(), &pct(100.0), &mut NoopObserver);
        let deduped = pipeline.run(
            &sample_corpus(),
            &pct(100.0).with_dedupe(true),
            &mut NoopObserver,
        );

        assert_eq!(plain.keywords, vec!["dog", "dog", "cat"]);
        assert_eq!(deduped.keywords, vec!["dog", "cat"]);
    }

    #[test]
    fn test_real_ranker_end_to_end() {
        let corpus: Corpus = [
            "Graph ranking algorithms rank keywords in documents.",
            "Keyword extraction uses graph ranking over word graphs.",
            "Ranking graphs of words finds keywords.",
        ]
        .into_iter()
        .collect();
        let pipeline = DefaultPipeline::textrank(TextRankConfig::default());

        let all = pipeline.run(&corpus, &pct(100.0), &mut NoopObserver);
        let top = pipeline.run(&corpus, &pct(10.0), &mut NoopObserver);

        assert!(!all.is_empty());
        assert!(!top.is_empty());
        assert!(top.len() <= all.len());
        for keyword in &top.keywords {
            assert!(all.keywords.contains(keyword));
        }
    }
}
