//! Deterministic graph generators for benchmarks.
//!
//! Every generator is a pure function of its arguments, so repeated benchmark
//! runs measure the same inputs. Weights are positive `i64` values.

use kruskal_core::Edge;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

/// Configuration for [`random_graph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of edges to draw.
    pub edge_count: usize,
    /// Largest weight drawn; weights fall in `1..=max_weight`.
    pub max_weight: u32,
    /// Seed for the generator.
    pub seed: u64,
}

/// Builds a cycle over `vertex_count` vertices where edge `i` joins `i` and
/// `i + 1` (wrapping) with weight `i + 1`.
///
/// # Examples
/// ```
/// use kruskal_benches::graphs::ring;
///
/// let edges = ring(4);
/// assert_eq!(edges.len(), 4);
/// assert_eq!(edges.last().map(|edge| edge.target()), Some(0));
/// ```
#[must_use]
pub fn ring(vertex_count: usize) -> Vec<Edge<i64>> {
    (0..vertex_count)
        .map(|vertex| {
            let next = if vertex + 1 == vertex_count { 0 } else { vertex + 1 };
            Edge::new(vertex, next, ordinal_weight(vertex))
        })
        .collect()
}

/// Builds a complete graph with weights drawn from `1..=1000`.
#[must_use]
pub fn complete(vertex_count: usize, seed: u64) -> Vec<Edge<i64>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            edges.push(Edge::new(source, target, rng.gen_range(1..=1_000)));
        }
    }
    edges
}

/// Draws `edge_count` edges with independently chosen endpoints.
///
/// The result is a multigraph: self-loops and parallel edges appear with the
/// frequency the uniform draw gives them.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or `max_weight`
/// is zero.
pub fn random_graph(config: &RandomGraphConfig) -> Result<Vec<Edge<i64>>, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "max_weight",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let max_weight = i64::from(config.max_weight);
    Ok((0..config.edge_count)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..config.vertex_count),
                rng.gen_range(0..config.vertex_count),
                rng.gen_range(1..=max_weight),
            )
        })
        .collect())
}

/// Builds `component_count` disjoint rings of `component_size` vertices each,
/// with random chords inside every ring. Returns the vertex count alongside
/// the edges.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when either argument is zero.
pub fn disconnected(
    component_count: usize,
    component_size: usize,
    seed: u64,
) -> Result<(usize, Vec<Edge<i64>>), BenchSetupError> {
    if component_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "component_count",
        });
    }
    if component_size == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "component_size",
        });
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for component in 0..component_count {
        let offset = component.saturating_mul(component_size);
        edges.extend(ring(component_size).into_iter().map(|edge| {
            Edge::new(
                offset + edge.source(),
                offset + edge.target(),
                edge.weight(),
            )
        }));
        for _ in 0..component_size {
            let source = offset + rng.gen_range(0..component_size);
            let target = offset + rng.gen_range(0..component_size);
            edges.push(Edge::new(source, target, rng.gen_range(1..=1_000)));
        }
    }
    Ok((component_count.saturating_mul(component_size), edges))
}

fn ordinal_weight(index: usize) -> i64 {
    i64::try_from(index).map_or(i64::MAX, |value| value.saturating_add(1))
}
