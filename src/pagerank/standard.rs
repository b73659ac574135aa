//! Weighted PageRank
//!
//! Power iteration over the CSR graph. Each node spreads its score to its
//! neighbours in proportion to edge weight; mass held by dangling nodes is
//! redistributed uniformly.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::TextRankConfig;

/// Power-iteration PageRank
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    pub damping: f64,
    pub max_iterations: usize,
    /// Stop once the L1 delta between iterations drops to this value
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&TextRankConfig::default())
    }
}

impl StandardPageRank {
    /// Take damping, iteration cap and threshold from a ranker config
    pub fn from_config(cfg: &TextRankConfig) -> Self {
        Self {
            damping: cfg.damping,
            max_iterations: cfg.max_iterations,
            threshold: cfg.convergence_threshold,
        }
    }

    /// Rank every node of `graph`. Scores sum to 1.
    ///
    /// Hitting the iteration cap still yields scores, with
    /// `converged = false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.len();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let dangling = graph.dangling_nodes();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;

        while iterations < self.max_iterations && delta > self.threshold {
            self.step(graph, &dangling, &scores, &mut next);
            delta = scores.iter().zip(&next).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
            iterations += 1;
        }

        let total: f64 = scores.iter().sum();
        if total > 0.0 {
            scores.iter_mut().for_each(|s| *s /= total);
        }

        PageRankResult {
            scores,
            iterations,
            delta,
            converged: delta <= self.threshold,
        }
    }

    /// `next = teleport + dangling share + damped flow along edges`
    fn step(&self, graph: &CsrGraph, dangling: &[u32], scores: &[f64], next: &mut [f64]) {
        let n = scores.len() as f64;
        let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
        next.fill((1.0 - self.damping + self.damping * dangling_mass) / n);

        for (node, &score) in (0u32..).zip(scores) {
            let out = graph.out_weight(node);
            if out <= 0.0 {
                continue;
            }
            let share = self.damping * score / out;
            for (neighbor, weight) in graph.neighbors(node) {
                next[neighbor as usize] += share * weight;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn triangle() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let ids: Vec<u32> = ["a", "b", "c"]
            .iter()
            .map(|w| builder.get_or_create_node(w))
            .collect();
        builder.increment_edge(ids[0], ids[1], 1.0);
        builder.increment_edge(ids[1], ids[2], 1.0);
        builder.increment_edge(ids[2], ids[0], 1.0);
        CsrGraph::from_builder(&builder)
    }

    fn star() -> CsrGraph {
        let mut builder = GraphBuilder::new();
        let hub = builder.get_or_create_node("hub");
        for spoke in ["s1", "s2", "s3"] {
            let id = builder.get_or_create_node(spoke);
            builder.increment_edge(hub, id, 1.0);
        }
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_symmetric_graph_scores_evenly() {
        let result = StandardPageRank::default().run(&triangle());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_hub_outranks_spokes() {
        let result = StandardPageRank::default().run(&star());

        assert!(result.converged);
        assert!(result.scores[1..].iter().all(|&s| result.scores[0] > s));
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_heavier_edge_wins() {
        let mut builder = GraphBuilder::new();
        let hub = builder.get_or_create_node("hub");
        let heavy = builder.get_or_create_node("heavy");
        let light = builder.get_or_create_node("light");
        builder.increment_edge(hub, heavy, 3.0);
        builder.increment_edge(hub, light, 1.0);

        let result = StandardPageRank::default().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[heavy as usize] > result.scores[light as usize]);
    }

    #[test]
    fn test_isolated_node_keeps_teleport_mass() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let lonely = builder.get_or_create_node("lonely");
        builder.increment_edge(a, b, 1.0);

        let result = StandardPageRank::default().run(&CsrGraph::from_builder(&builder));

        let lonely = result.scores[lonely as usize];
        assert!(lonely > 0.0);
        assert!(lonely < result.scores[a as usize]);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::default().run(&CsrGraph::default());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_iteration_cap_returns_partial_scores() {
        let pagerank = StandardPageRank {
            max_iterations: 1,
            threshold: 0.0,
            ..StandardPageRank::default()
        };

        let result = pagerank.run(&star());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_higher_damping_favours_hub() {
        let graph = star();
        let run = |damping| StandardPageRank { damping, ..StandardPageRank::default() }.run(&graph);

        let low = run(0.5);
        let high = run(0.95);

        assert!(high.scores[0] - high.scores[1] > low.scores[0] - low.scores[1]);
    }

    #[test]
    fn test_from_config() {
        let cfg = TextRankConfig {
            damping: 0.7,
            max_iterations: 12,
            ..TextRankConfig::default()
        };
        let pagerank = StandardPageRank::from_config(&cfg);

        assert_eq!(pagerank.damping, 0.7);
        assert_eq!(pagerank.max_iterations, 12);
        assert_eq!(pagerank.threshold, cfg.convergence_threshold);
    }
}
