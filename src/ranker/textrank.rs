//! TextRank keyword ranker
//!
//! Ranks the words of a text with PageRank over a co-occurrence graph,
//! keeps the top fraction of graph nodes as keywords, and merges adjacent
//! keywords into multi-word terms.

use rustc_hash::FxHashMap;

use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::phrase::combiner::KeywordCombiner;
use crate::pipeline::traits::KeywordRanker;
use crate::types::{ScoredTerm, TextRankConfig, Token};

/// TextRank implementation of [`KeywordRanker`]
#[derive(Debug, Clone)]
pub struct TextRankRanker {
    config: TextRankConfig,
    tokenizer: Tokenizer,
}

impl Default for TextRankRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRankRanker {
    /// Create a new ranker with default config
    pub fn new() -> Self {
        Self::with_config(TextRankConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: TextRankConfig) -> Self {
        let mut stopwords = StopwordFilter::new(&config.language);
        stopwords.add_stopwords(&config.extra_stopwords);
        let tokenizer = Tokenizer::new()
            .with_stopwords(stopwords)
            .with_min_word_length(config.min_word_length);
        Self { config, tokenizer }
    }

    /// Get the ranker config
    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Rank the words of `text` and return scored keyword terms, highest
    /// score first.
    pub fn extract(&self, text: &str) -> Vec<ScoredTerm> {
        let tokens = self.tokenizer.tokenize(text);
        let builder = GraphBuilder::from_tokens(
            &tokens,
            self.config.window_size,
            self.config.use_edge_weights,
        );

        if builder.is_empty() {
            tracing::debug!("no rankable words in text");
            return Vec::new();
        }

        let graph = CsrGraph::from_builder(&builder);
        let pagerank = StandardPageRank::from_config(&self.config).run(&graph);
        if !pagerank.converged {
            tracing::warn!(
                iterations = pagerank.iterations,
                delta = pagerank.delta,
                "pagerank did not converge"
            );
        }

        let keyword_scores = self.select_keywords(&graph, &pagerank);
        tracing::debug!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            keywords = keyword_scores.len(),
            "ranked co-occurrence graph"
        );

        self.combine(&tokens, &keyword_scores)
    }

    /// Number of nodes to keep as keywords (never zero for a non-empty graph)
    fn keyword_count(&self, num_nodes: usize) -> usize {
        let count = match self.config.max_words {
            Some(max_words) => max_words,
            None => (num_nodes as f64 * self.config.ratio) as usize,
        };
        count.max(1).min(num_nodes)
    }

    fn select_keywords<'g>(
        &self,
        graph: &'g CsrGraph,
        pagerank: &PageRankResult,
    ) -> FxHashMap<&'g str, f64> {
        pagerank
            .top_n(self.keyword_count(graph.len()))
            .into_iter()
            .map(|(node, score)| (graph.word(node), score))
            .collect()
    }

    fn combine(&self, tokens: &[Token], keyword_scores: &FxHashMap<&str, f64>) -> Vec<ScoredTerm> {
        KeywordCombiner::new()
            .with_max_words(self.config.max_phrase_words)
            .combine(tokens, keyword_scores)
    }
}

impl KeywordRanker for TextRankRanker {
    fn rank(&self, text: &str) -> Vec<ScoredTerm> {
        self.extract(text)
    }
}
