//! Shared helpers for Kruskal property-based tests.
//!
//! These deliberately avoid [`crate::DisjointSet`] so the checks do not share
//! code with the implementation under test.

use std::collections::VecDeque;

use crate::Edge;

/// Path-halving find over a bare parent table.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts the connected components induced by `edges` on `vertex_count`
/// vertices.
pub(super) fn component_count(vertex_count: usize, edges: &[Edge<i64>]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Sums edge weights.
pub(super) fn total_weight(edges: &[Edge<i64>]) -> i64 {
    edges.iter().map(Edge::weight).sum()
}

/// Adjacency view of a forest for path queries.
pub(super) struct ForestPaths {
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl ForestPaths {
    pub(super) fn new(vertex_count: usize, edges: &[Edge<i64>]) -> Self {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for edge in edges {
            adjacency[edge.source()].push((edge.target(), edge.weight()));
            adjacency[edge.target()].push((edge.source(), edge.weight()));
        }
        Self { adjacency }
    }

    /// Returns the heaviest weight on the forest path between `from` and
    /// `to`, or `None` when they lie in different trees. The path from a
    /// vertex to itself is empty and reports `i64::MIN`.
    pub(super) fn heaviest_on_path(&self, from: usize, to: usize) -> Option<i64> {
        let mut heaviest: Vec<Option<i64>> = vec![None; self.adjacency.len()];
        heaviest[from] = Some(i64::MIN);
        let mut queue = VecDeque::from([from]);

        while let Some(node) = queue.pop_front() {
            let so_far = heaviest[node]?;
            if node == to {
                return Some(so_far);
            }
            for &(next, weight) in &self.adjacency[node] {
                if heaviest[next].is_none() {
                    heaviest[next] = Some(so_far.max(weight));
                    queue.push_back(next);
                }
            }
        }
        None
    }
}
