//! Determinism across repeated and concurrent runs.
//!
//! Runs the builder on the same input several times, both sequentially and
//! on the rayon pool, and asserts that every run returns the identical
//! forest. Each run owns its disjoint-set state, so concurrent runs on shared
//! input must not interfere.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rayon::prelude::*;

use crate::{Kruskal, MinimumSpanningForest, MstError};

use super::types::{DeterminismConfig, MstFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let builder = Kruskal::new(fixture.vertex_count);

    let baseline = builder.run(&fixture.edges).map_err(|e| {
        TestCaseError::fail(format!("baseline run failed: {e} ({})", fixture.describe()))
    })?;

    for run in 1..config.repetitions {
        let result = builder.run(&fixture.edges).map_err(|e| {
            TestCaseError::fail(format!("run {run} failed: {e} ({})", fixture.describe()))
        })?;
        compare(&baseline, &result, &format!("sequential run {run}"), fixture)?;
    }

    let concurrent = (0..config.repetitions)
        .into_par_iter()
        .map(|_| builder.run(&fixture.edges))
        .collect::<Result<Vec<MinimumSpanningForest<i64>>, MstError>>()
        .map_err(|e| {
            TestCaseError::fail(format!("concurrent run failed: {e} ({})", fixture.describe()))
        })?;
    for (run, result) in concurrent.iter().enumerate() {
        compare(&baseline, result, &format!("concurrent run {run}"), fixture)?;
    }

    Ok(())
}

fn compare(
    baseline: &MinimumSpanningForest<i64>,
    result: &MinimumSpanningForest<i64>,
    label: &str,
    fixture: &MstFixture,
) -> TestCaseResult {
    if result != baseline {
        return Err(TestCaseError::fail(format!(
            "{label}: forest differs from baseline (total {} vs {}, {} vs {} edges, {})",
            result.total_weight(),
            baseline.total_weight(),
            result.len(),
            baseline.len(),
            fixture.describe(),
        )));
    }
    Ok(())
}
