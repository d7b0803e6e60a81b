//! Monotonicity under heavier additions.
//!
//! Appending an edge heavier than every accepted edge leaves the forest
//! unchanged when its endpoints already share a tree, and otherwise extends
//! the forest by exactly that edge. Rejected input edges may be heavier still.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, kruskal};

use super::helpers::ForestPaths;
use super::types::MstFixture;

/// Runs the monotonicity property with endpoints chosen from `seed`.
pub(super) fn run_monotonicity_property(fixture: &MstFixture, seed: u64) -> TestCaseResult {
    let base = kruskal(fixture.vertex_count, &fixture.edges).map_err(|e| {
        TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe()))
    })?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let heavier = base
        .edges()
        .iter()
        .map(Edge::weight)
        .max()
        .map_or(1, |heaviest| heaviest + 1);
    let extra = Edge::new(
        rng.gen_range(0..fixture.vertex_count),
        rng.gen_range(0..fixture.vertex_count),
        heavier,
    );
    let mut extended_input = fixture.edges.clone();
    extended_input.push(extra);
    let extended = kruskal(fixture.vertex_count, &extended_input).map_err(|e| {
        TestCaseError::fail(format!("extended kruskal failed: {e} ({})", fixture.describe()))
    })?;

    let already_joined = ForestPaths::new(fixture.vertex_count, base.edges())
        .heaviest_on_path(extra.source(), extra.target())
        .is_some();

    let (expected_edges, expected_total) = if already_joined {
        (base.edges().to_vec(), base.total_weight())
    } else {
        let mut edges = base.edges().to_vec();
        edges.push(extra);
        (edges, base.total_weight() + heavier)
    };

    if extended.edges() != expected_edges.as_slice() || extended.total_weight() != expected_total
    {
        return Err(TestCaseError::fail(format!(
            "adding {extra:?} (joined: {already_joined}) gave total {} with {} edges, \
             expected {expected_total} with {} edges ({})",
            extended.total_weight(),
            extended.len(),
            expected_edges.len(),
            fixture.describe(),
        )));
    }
    Ok(())
}
