//! Property-based tests for the Kruskal builder.
//!
//! Checks the produced forests against an exhaustive oracle on small graphs
//! and against the cycle optimality condition on larger ones, validates
//! structural invariants (acyclicity, edge count, exact totals), and confirms
//! that results are deterministic, insensitive to tie order, and monotone
//! under heavier additions, across several graph shapes.

mod determinism;
mod helpers;
mod monotonicity;
mod oracle;
mod tie_break;
mod types;
