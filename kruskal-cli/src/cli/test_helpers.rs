//! Small helpers shared across CLI tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, ExecutionSummary, RunCommand, WeightKind, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

pub(super) fn run_args(path: PathBuf, vertices: Option<usize>, weights: WeightKind) -> Cli {
    Cli {
        command: Command::Run(RunCommand {
            path,
            vertices,
            weights,
        }),
    }
}

pub(super) fn run_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(summary) => panic!("{panic_msg}: {summary:?}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = super::render_summary(summary, &mut buffer) {
        panic!("rendering into memory failed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("summary was not UTF-8: {err}"),
    }
}
