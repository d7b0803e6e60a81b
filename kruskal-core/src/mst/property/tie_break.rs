//! Insensitivity to input order.
//!
//! Shuffling the edge list changes which edges win ties, and therefore
//! possibly which optimal forest is returned, but never its total weight,
//! edge count, or component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::kruskal;

use super::types::MstFixture;

/// Runs the tie-break property, shuffling the edges with `seed`.
pub(super) fn run_tie_break_property(fixture: &MstFixture, seed: u64) -> TestCaseResult {
    let original = kruskal(fixture.vertex_count, &fixture.edges).map_err(|e| {
        TestCaseError::fail(format!("kruskal failed: {e} ({})", fixture.describe()))
    })?;

    let mut shuffled = fixture.edges.clone();
    shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
    let reordered = kruskal(fixture.vertex_count, &shuffled).map_err(|e| {
        TestCaseError::fail(format!("shuffled kruskal failed: {e} ({})", fixture.describe()))
    })?;

    if original.total_weight() != reordered.total_weight()
        || original.len() != reordered.len()
        || original.component_count() != reordered.component_count()
    {
        return Err(TestCaseError::fail(format!(
            "shuffle (seed {seed}) changed the result: total {} -> {}, edges {} -> {}, \
             components {} -> {} ({})",
            original.total_weight(),
            reordered.total_weight(),
            original.len(),
            reordered.len(),
            original.component_count(),
            reordered.component_count(),
            fixture.describe(),
        )));
    }
    Ok(())
}
