//! Benchmark support crate for the Kruskal workspace.
//!
//! Provides deterministic graph generators and parameter types used by the
//! Criterion benchmarks for minimum spanning forest construction and the
//! disjoint-set structure underneath it.

pub mod error;
pub mod graphs;
pub mod params;
