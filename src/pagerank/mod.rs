//! PageRank over the co-occurrence graph

pub mod standard;

/// Scores from one power-iteration run, indexed by node id
#[derive(Debug, Clone)]
pub struct PageRankResult {
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// L1 change of the last iteration
    pub delta: f64,
    pub converged: bool,
}

impl PageRankResult {
    /// The `n` best nodes, highest score first. Equal scores keep node order.
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut ranked: Vec<(u32, f64)> = (0u32..).zip(self.scores.iter().copied()).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_orders_and_truncates() {
        let result = PageRankResult {
            scores: vec![0.2, 0.5, 0.2, 0.1],
            iterations: 3,
            delta: 0.0,
            converged: true,
        };

        assert_eq!(result.top_n(3), vec![(1, 0.5), (0, 0.2), (2, 0.2)]);
        assert_eq!(result.top_n(10).len(), 4);
        assert!(result.top_n(0).is_empty());
    }
}
