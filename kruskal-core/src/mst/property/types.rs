//! Type definitions for Kruskal property-based tests.
//!
//! Provides the fixture, configuration, and graph shape types used by the
//! graph generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::Edge;

/// Shape of a generated graph.
///
/// Each shape stresses a different part of the builder: unique weights pin
/// down a single optimum, identical weights exercise tie handling, and the
/// disconnected shape forces a forest rather than a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Every edge has a distinct weight.
    #[weight(2)]
    Unique,
    /// Large groups of edges share a handful of weights.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus roughly `0.5n` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Close to a complete graph (edge probability 0.7-0.95).
    #[weight(2)]
    Dense,
    /// Two to five components with no cross-component edges.
    #[weight(2)]
    Disconnected,
    /// Mixed-sign weights with self-loops and parallel edges.
    #[weight(2)]
    NegativeMultigraph,
}

/// Fixture for Kruskal property tests.
///
/// Captures the vertex count, generated edges, and shape used during
/// generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<Edge<i64>>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

impl MstFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, vertices={}, edges={}",
            self.shape,
            self.vertex_count,
            self.edges.len()
        )
    }
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the computation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from the environment.
    ///
    /// `KRUSKAL_PBT_DETERMINISM_REPS` controls the repetition count
    /// (default: 5).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("KRUSKAL_PBT_DETERMINISM_REPS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .filter(|&reps| reps > 0)
            .unwrap_or(5);
        Self { repetitions }
    }
}
