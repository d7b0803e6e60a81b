//! Minimum spanning forest construction with Kruskal's algorithm.
//!
//! Edges are validated up front, stably sorted by ascending weight, and
//! scanned once. A [`DisjointSet`] sized to the vertex count rejects every
//! edge whose endpoints already share a tree, so the accepted edges form a
//! minimum spanning forest: one minimum spanning tree per connected component.

use tracing::{debug, instrument};

use crate::{DisjointSet, Edge, EdgeWeight, MstError};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree.
/// Edges appear in the order they were accepted, which is ascending weight
/// with ties kept in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    component_count: usize,
}

impl<W: EdgeWeight> MinimumSpanningForest<W> {
    /// Returns the forest edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the forest edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> W { self.total_weight }

    /// Returns the number of connected components spanned by the forest.
    ///
    /// Isolated vertices count as components of their own.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of forest edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning its edges and total weight.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_weight)
    }
}

/// Kruskal minimum spanning forest builder for a fixed vertex count.
///
/// The builder only remembers the vertex count; every call to
/// [`Kruskal::run`] owns its disjoint-set state, so one builder can serve
/// many edge lists, including from several threads at once.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Kruskal {
    vertex_count: usize,
}

impl Kruskal {
    /// Creates a builder for vertices `0..vertex_count`.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self { vertex_count }
    }

    /// Creates a builder sized to a vertex collection.
    ///
    /// Only the collection's length is used; vertex `i` is the element at
    /// position `i`.
    #[must_use]
    pub const fn for_vertices<V>(vertices: &[V]) -> Self {
        Self::new(vertices.len())
    }

    /// Returns the number of vertices the builder was sized for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Computes the minimum spanning forest of `edges`.
    ///
    /// The edge slice is left untouched; sorting happens on a private copy.
    /// Self-loops are never selected and parallel edges are resolved by
    /// weight. An empty vertex set or an empty edge list yields an empty
    /// forest with a zero total.
    ///
    /// # Errors
    ///
    /// Returns an error before any edge is processed when:
    /// - an edge references a vertex `>= vertex_count`
    ///   ([`MstError::InvalidVertex`])
    /// - an edge weight is NaN or infinite ([`MstError::NonFiniteWeight`])
    ///
    /// Returns [`MstError::AllocationFailed`] when `vertex_count` is too large
    /// for the disjoint-set storage to be reserved.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, Kruskal};
    ///
    /// // Two components: {0, 1, 2} and {3, 4}; vertex 5 is isolated.
    /// let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(3, 4, 3)];
    /// let forest = Kruskal::new(6).run(&edges)?;
    /// assert_eq!(forest.edges(), &edges);
    /// assert_eq!(forest.total_weight(), 6);
    /// assert_eq!(forest.component_count(), 3);
    /// # Ok::<(), kruskal_core::MstError>(())
    /// ```
    #[instrument(
        name = "kruskal.run",
        err,
        skip(self, edges),
        fields(vertex_count = self.vertex_count, edge_count = edges.len()),
    )]
    pub fn run<W: EdgeWeight>(
        &self,
        edges: &[Edge<W>],
    ) -> Result<MinimumSpanningForest<W>, MstError> {
        validate_edges(self.vertex_count, edges)?;

        let sorted = sorted_by_weight(edges);
        let forest = select_edges(self.vertex_count, &sorted)?;

        debug!(
            accepted = forest.len(),
            components = forest.component_count(),
            total_weight = ?forest.total_weight(),
            "minimum spanning forest complete"
        );
        Ok(forest)
    }
}

/// Computes a minimum spanning forest over vertices `0..vertex_count`.
///
/// Shorthand for `Kruskal::new(vertex_count).run(edges)`.
///
/// # Errors
///
/// See [`Kruskal::run`].
pub fn kruskal<W: EdgeWeight>(
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<MinimumSpanningForest<W>, MstError> {
    Kruskal::new(vertex_count).run(edges)
}

fn validate_edges<W: EdgeWeight>(vertex_count: usize, edges: &[Edge<W>]) -> Result<(), MstError> {
    edges
        .iter()
        .try_for_each(|edge| validate_edge(vertex_count, edge))
}

fn validate_edge<W: EdgeWeight>(vertex_count: usize, edge: &Edge<W>) -> Result<(), MstError> {
    for vertex in [edge.source(), edge.target()] {
        if vertex >= vertex_count {
            return Err(MstError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
    }

    if !edge.weight().is_finite() {
        return Err(MstError::NonFiniteWeight {
            left: edge.source(),
            right: edge.target(),
        });
    }

    Ok(())
}

fn sorted_by_weight<W: EdgeWeight>(edges: &[Edge<W>]) -> Vec<Edge<W>> {
    let mut sorted = edges.to_vec();
    // `sort_by` is stable: equal weights keep their input order.
    sorted.sort_by(|left, right| left.weight().weight_cmp(&right.weight()));
    sorted
}

fn select_edges<W: EdgeWeight>(
    vertex_count: usize,
    sorted: &[Edge<W>],
) -> Result<MinimumSpanningForest<W>, MstError> {
    let mut components = DisjointSet::try_new(vertex_count)?;
    let capacity = vertex_count.saturating_sub(1);
    let mut edges = Vec::with_capacity(capacity.min(sorted.len()));
    let mut total_weight = W::ZERO;
    let mut considered = 0_usize;

    for edge in sorted {
        if edges.len() == capacity {
            break;
        }
        considered += 1;
        if components.link(edge.source(), edge.target()) {
            total_weight = total_weight + edge.weight();
            edges.push(*edge);
        }
    }

    record_run(considered, edges.len());
    Ok(MinimumSpanningForest {
        edges,
        total_weight,
        component_count: components.components(),
    })
}

#[cfg(feature = "metrics")]
fn record_run(considered: usize, accepted: usize) {
    metrics::counter!("kruskal_runs").increment(1);
    metrics::counter!("kruskal_edges_considered")
        .increment(u64::try_from(considered).unwrap_or(u64::MAX));
    metrics::counter!("kruskal_edges_accepted")
        .increment(u64::try_from(accepted).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
fn record_run(_considered: usize, _accepted: usize) {}

#[cfg(test)]
mod property;
