//! Benchmark parameter types.
//!
//! The `Display` forms become Criterion benchmark ids, so they stay short.

use std::fmt;

/// Parameters for a minimum spanning forest benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for a disjoint-set benchmark run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisjointSetBenchParams {
    /// Number of elements in the structure.
    pub element_count: usize,
}

impl fmt::Display for DisjointSetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.element_count)
    }
}
