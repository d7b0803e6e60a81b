//! Exhaustive oracle for minimum spanning forests of small graphs.
//!
//! Enumerates every edge subset, keeps those that are acyclic and span each
//! input component, and reports the lightest. Exponential, so callers keep
//! the edge count in single digits.

use crate::Edge;

use super::helpers::{component_count, find_root};

/// Result of the exhaustive search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Minimum total weight over all spanning forests.
    pub total_weight: i64,
    /// Number of edges in any spanning forest.
    pub edge_count: usize,
    /// Number of connected components of the input graph.
    pub component_count: usize,
}

/// Finds the minimum spanning forest weight by brute force.
pub(super) fn brute_force_minimum(vertex_count: usize, edges: &[Edge<i64>]) -> OracleResult {
    let components = component_count(vertex_count, edges);
    let edge_count = vertex_count - components;

    let best = (0_u32..1 << edges.len())
        .filter(|mask| mask.count_ones() as usize == edge_count)
        .filter_map(|mask| forest_weight(vertex_count, edges, mask))
        .min()
        .unwrap_or(0);

    OracleResult {
        total_weight: best,
        edge_count,
        component_count: components,
    }
}

/// Returns the subset's weight when it is acyclic, `None` otherwise.
fn forest_weight(vertex_count: usize, edges: &[Edge<i64>], mask: u32) -> Option<i64> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut total = 0;
    for (index, edge) in edges.iter().enumerate() {
        if mask & (1 << index) == 0 {
            continue;
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return None;
        }
        parent[right] = left;
        total += edge.weight();
    }
    Some(total)
}
