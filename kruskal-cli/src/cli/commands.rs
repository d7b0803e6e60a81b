//! Command implementations and argument parsing for the `kruskal` binary.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{Edge, EdgeWeight, Kruskal, MinimumSpanningForest, MstError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edge_list::{EdgeListError, parse_edge_list};

/// Vertex count of the built-in sample graph.
pub const SAMPLE_VERTEX_COUNT: usize = 4;

/// Edges of the built-in sample graph. Its minimum spanning tree costs 19.
pub const SAMPLE_EDGES: [Edge<i64>; 5] = [
    Edge::new(0, 1, 10),
    Edge::new(0, 2, 6),
    Edge::new(0, 3, 5),
    Edge::new(1, 3, 15),
    Edge::new(2, 3, 4),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kruskal", about = "Compute minimum spanning forests with Kruskal's algorithm.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the forest of the built-in four-vertex sample graph.
    Sample,
    /// Compute the forest of an edge list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge list with one `source target weight` triple per line.
    pub path: PathBuf,

    /// Number of vertices; defaults to one past the largest endpoint.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: Option<usize>,

    /// Numeric type used to parse weights.
    #[arg(long, value_enum, default_value_t = WeightKind::Integer)]
    pub weights: WeightKind,
}

/// Weight types accepted on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum WeightKind {
    /// Signed 64-bit integers.
    #[default]
    Integer,
    /// 64-bit floating-point values; NaN and infinities are rejected.
    Float,
}

impl WeightKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was malformed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The forest computation rejected the input.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Forest computed by a command, tagged with its weight type.
#[derive(Debug, Clone, PartialEq)]
pub enum ForestOutcome {
    /// Forest over integer weights.
    Integer(MinimumSpanningForest<i64>),
    /// Forest over floating-point weights.
    Float(MinimumSpanningForest<f64>),
}

impl ForestOutcome {
    /// Returns the number of forest edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Integer(forest) => forest.len(),
            Self::Float(forest) => forest.len(),
        }
    }

    /// Returns the number of connected components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        match self {
            Self::Integer(forest) => forest.component_count(),
            Self::Float(forest) => forest.component_count(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Number of vertices the forest was computed over.
    pub vertex_count: usize,
    /// The computed forest.
    pub forest: ForestOutcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// forest computation rejects it.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, RunCommand, WeightKind, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 2\n1 2 3\n0 2 7\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         vertices: None,
///         weights: WeightKind::Integer,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.vertex_count, 3);
/// assert_eq!(summary.forest.edge_count(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Sample => {
            span.record("command", "sample");
            run_sample()
        }
        Command::Run(run) => {
            span.record("command", "run");
            run_command(run)
        }
    }
}

#[instrument(name = "cli.sample", err)]
pub(super) fn run_sample() -> Result<ExecutionSummary, CliError> {
    let forest = Kruskal::new(SAMPLE_VERTEX_COUNT).run(&SAMPLE_EDGES)?;
    info!(
        edges = forest.len(),
        total_weight = forest.total_weight(),
        "sample completed"
    );
    Ok(ExecutionSummary {
        vertex_count: SAMPLE_VERTEX_COUNT,
        forest: ForestOutcome::Integer(forest),
    })
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        weights = command.weights.label(),
        vertex_count = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let (vertex_count, forest) = match command.weights {
        WeightKind::Integer => {
            let (count, forest) = load_and_run::<i64>(&command)?;
            (count, ForestOutcome::Integer(forest))
        }
        WeightKind::Float => {
            let (count, forest) = load_and_run::<f64>(&command)?;
            (count, ForestOutcome::Float(forest))
        }
    };

    info!(
        vertex_count,
        edges = forest.edge_count(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        vertex_count,
        forest,
    })
}

fn load_and_run<W>(command: &RunCommand) -> Result<(usize, MinimumSpanningForest<W>), CliError>
where
    W: EdgeWeight + FromStr,
{
    let list = parse_edge_list::<W>(open_edge_list(&command.path)?)?;
    let vertex_count = command.vertices.unwrap_or(list.implied_vertex_count);
    Span::current().record("vertex_count", vertex_count);
    let forest = Kruskal::new(vertex_count).run(&list.edges)?;
    Ok((vertex_count, forest))
}

#[instrument(name = "cli.open_edge_list", err, fields(path = %path.display()))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` to `writer` as a header followed by one tab-separated
/// `source target weight` line per forest edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, ForestOutcome, render_summary};
/// # use kruskal_core::{Edge, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = kruskal(2, &[Edge::new(0, 1, 3)])?;
/// let summary = ExecutionSummary {
///     vertex_count: 2,
///     forest: ForestOutcome::Integer(forest),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "vertices: 2\nedges: 1\ncomponents: 1\ntotal weight: 3\n0\t1\t3\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    match &summary.forest {
        ForestOutcome::Integer(forest) => write_forest(forest, &mut writer),
        ForestOutcome::Float(forest) => write_forest(forest, &mut writer),
    }
}

fn write_forest<W>(forest: &MinimumSpanningForest<W>, writer: &mut impl Write) -> io::Result<()>
where
    W: EdgeWeight + Display,
{
    writeln!(writer, "edges: {}", forest.len())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    for edge in forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}
