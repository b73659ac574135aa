//! Frozen co-occurrence graph in compressed sparse row layout

use super::builder::GraphBuilder;

/// Read-only adjacency used by power iteration.
///
/// Node `i`'s neighbours are `targets[offsets[i]..offsets[i + 1]]`, sorted
/// by node id.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
    out_weight: Vec<f64>,
    words: Vec<String>,
}

impl CsrGraph {
    /// Freeze a builder; node ids are preserved.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let mut graph = Self {
            offsets: vec![0],
            targets: Vec::new(),
            weights: Vec::new(),
            out_weight: Vec::with_capacity(builder.node_count()),
            words: Vec::with_capacity(builder.node_count()),
        };

        for (_, node) in builder.nodes() {
            let mut edges: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            edges.sort_unstable_by_key(|&(target, _)| target);

            graph.out_weight.push(edges.iter().map(|&(_, w)| w).sum());
            graph.words.push(node.word.clone());
            for (target, weight) in edges {
                graph.targets.push(target);
                graph.weights.push(weight);
            }
            graph.offsets.push(graph.targets.len());
        }

        graph
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Undirected edge count
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Neighbours of `node` with their edge weights
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let span = self.offsets[node as usize]..self.offsets[node as usize + 1];
        self.targets[span.clone()]
            .iter()
            .copied()
            .zip(self.weights[span].iter().copied())
    }

    /// Sum of edge weights leaving `node`
    pub fn out_weight(&self, node: u32) -> f64 {
        self.out_weight[node as usize]
    }

    /// Normalized word behind `node`
    pub fn word(&self, node: u32) -> &str {
        &self.words[node as usize]
    }

    /// Nodes without neighbours; their mass is spread uniformly.
    pub fn dangling_nodes(&self) -> Vec<u32> {
        self.out_weight
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w <= 0.0)
            .map(|(node, _)| node as u32)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::from_builder(&GraphBuilder::new())
    }
}
