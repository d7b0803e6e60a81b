//! Plain-text edge list parsing.
//!
//! Each meaningful line holds `source target weight`, separated by any
//! whitespace. Text after `#` is a comment and blank lines are skipped.

use std::io::{self, BufRead};
use std::str::FromStr;

use kruskal_core::{Edge, EdgeWeight};
use thiserror::Error;

/// Edges read from a file, plus the vertex count they imply.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeList<W> {
    /// Edges in file order.
    pub edges: Vec<Edge<W>>,
    /// One past the largest endpoint, or zero when there are no edges.
    pub implied_vertex_count: usize,
}

/// Errors raised while reading an edge list.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the failure occurred.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line had fewer than three fields.
    #[error("line {line}: missing {field}")]
    MissingField {
        /// Offending line.
        line: usize,
        /// Name of the first absent field.
        field: &'static str,
    },
    /// A line had more than three fields.
    #[error("line {line}: unexpected trailing field `{found}`")]
    TrailingField {
        /// Offending line.
        line: usize,
        /// First surplus token.
        found: String,
    },
    /// An endpoint was not a non-negative integer.
    #[error("line {line}: invalid vertex `{found}`")]
    InvalidVertex {
        /// Offending line.
        line: usize,
        /// Token that failed to parse.
        found: String,
    },
    /// A weight could not be parsed as the requested type.
    #[error("line {line}: invalid weight `{found}`")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Token that failed to parse.
        found: String,
    },
}

impl EdgeListError {
    /// Returns the 1-based line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Read { line, .. }
            | Self::MissingField { line, .. }
            | Self::TrailingField { line, .. }
            | Self::InvalidVertex { line, .. }
            | Self::InvalidWeight { line, .. } => *line,
        }
    }
}

/// Reads an edge list with weights of type `W`.
///
/// Weights are parsed with [`FromStr`] and are not validated further; the
/// core rejects non-finite floats when the forest is built.
///
/// # Errors
/// Returns [`EdgeListError`] for the first unreadable or malformed line.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::parse_edge_list;
///
/// let text = "# triangle\n0 1 4\n1 2 1\n\n2 0 3  # closing edge\n";
/// let list = parse_edge_list::<i64>(text.as_bytes())?;
/// assert_eq!(list.edges.len(), 3);
/// assert_eq!(list.implied_vertex_count, 3);
/// # Ok::<(), kruskal_cli::cli::EdgeListError>(())
/// ```
pub fn parse_edge_list<W>(reader: impl BufRead) -> Result<EdgeList<W>, EdgeListError>
where
    W: EdgeWeight + FromStr,
{
    let mut edges = Vec::new();
    let mut implied_vertex_count = 0;

    for (index, text) in reader.lines().enumerate() {
        let line = index + 1;
        let text = text.map_err(|source| EdgeListError::Read { line, source })?;
        let Some(edge) = parse_line::<W>(line, &text)? else {
            continue;
        };
        implied_vertex_count = implied_vertex_count
            .max(edge.source().saturating_add(1))
            .max(edge.target().saturating_add(1));
        edges.push(edge);
    }

    Ok(EdgeList {
        edges,
        implied_vertex_count,
    })
}

fn parse_line<W>(line: usize, text: &str) -> Result<Option<Edge<W>>, EdgeListError>
where
    W: EdgeWeight + FromStr,
{
    let content = text.split_once('#').map_or(text, |(before, _)| before);
    let mut tokens = content.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let source = parse_vertex(line, first)?;
    let target = parse_vertex(line, next_field(line, &mut tokens, "target vertex")?)?;
    let raw_weight = next_field(line, &mut tokens, "weight")?;
    let weight = raw_weight
        .parse::<W>()
        .map_err(|_| EdgeListError::InvalidWeight {
            line,
            found: raw_weight.to_owned(),
        })?;

    if let Some(extra) = tokens.next() {
        return Err(EdgeListError::TrailingField {
            line,
            found: extra.to_owned(),
        });
    }
    Ok(Some(Edge::new(source, target, weight)))
}

fn next_field<'a>(
    line: usize,
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<&'a str, EdgeListError> {
    tokens
        .next()
        .ok_or(EdgeListError::MissingField { line, field })
}

fn parse_vertex(line: usize, raw: &str) -> Result<usize, EdgeListError> {
    raw.parse().map_err(|_| EdgeListError::InvalidVertex {
        line,
        found: raw.to_owned(),
    })
}
