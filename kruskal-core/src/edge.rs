//! Weighted undirected edges.

/// An undirected edge between two vertex indices.
///
/// Endpoints are kept exactly as supplied; the builder never reorders them, so
/// the forest reports each accepted edge the way the caller wrote it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge joining `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}

impl<W> From<Edge<W>> for (usize, usize, W) {
    fn from(edge: Edge<W>) -> Self {
        (edge.source, edge.target, edge.weight)
    }
}
