//! Kruskal core library.
//!
//! Computes minimum spanning forests of weighted undirected graphs with
//! Kruskal's algorithm. Vertices are dense indices `0..n`; edges carry any
//! weight implementing [`EdgeWeight`], including negative integers and finite
//! floating-point values.
//!
//! ```
//! use kruskal_core::{Edge, Kruskal};
//!
//! let edges = [
//!     Edge::new(0, 1, 10),
//!     Edge::new(0, 2, 6),
//!     Edge::new(0, 3, 5),
//!     Edge::new(1, 3, 15),
//!     Edge::new(2, 3, 4),
//! ];
//! let forest = Kruskal::new(4).run(&edges)?;
//! assert_eq!(forest.total_weight(), 19);
//! assert_eq!(forest.len(), 3);
//! assert!(forest.is_tree());
//! # Ok::<(), kruskal_core::MstError>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled every run emits:
//!
//! - `kruskal_runs` (counter)
//! - `kruskal_edges_considered` (counter)
//! - `kruskal_edges_accepted` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
mod mst;
mod union_find;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    edge::Edge,
    error::{MstError, MstErrorCode, Result},
    mst::{Kruskal, MinimumSpanningForest, kruskal},
    union_find::DisjointSet,
    weight::EdgeWeight,
};
