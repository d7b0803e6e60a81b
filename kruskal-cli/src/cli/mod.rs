//! Command-line interface for computing minimum spanning forests.
//!
//! `sample` runs a built-in four-vertex graph; `run` loads a whitespace
//! separated edge list and computes its forest with integer or float weights.

mod commands;
mod edge_list;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, ForestOutcome, RunCommand, SAMPLE_EDGES,
    SAMPLE_VERTEX_COUNT, WeightKind, render_summary, run_cli,
};
pub use edge_list::{EdgeList, EdgeListError, parse_edge_list};

#[cfg(test)]
mod test_helpers;
