//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of panicking inside
//! Criterion closures.

use kruskal_core::MstError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The forest computation rejected a generated graph.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
