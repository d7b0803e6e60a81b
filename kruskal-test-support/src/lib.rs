//! Shared test utilities used across the kruskal crates.
//!
//! [`tracing`] captures spans and events so instrumentation can be asserted,
//! and [`property`] reads the environment overrides that tune proptest runs.

pub mod property;
pub mod tracing;
