//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::property::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a standard proptest configuration from the shared run profile.
///
/// Keeps every property suite aligned on the same `PROGTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
