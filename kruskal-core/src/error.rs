//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Precondition violations reported by [`crate::DisjointSet`] and
/// [`crate::Kruskal`].
///
/// Every other input (empty graphs, disconnected graphs, negative weights,
/// parallel edges, self-loops) is valid and never produces an error. The one
/// resource failure, [`MstError::AllocationFailed`], is reported instead of
/// aborting when a vertex count is too large to back with memory.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A vertex index fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The first endpoint, as provided.
        left: usize,
        /// The second endpoint, as provided.
        right: usize,
    },
    /// Storage for `vertex_count` disjoint-set entries could not be reserved.
    #[error("cannot allocate disjoint-set storage for {vertex_count} vertices")]
    AllocationFailed {
        /// The requested number of vertices.
        vertex_count: usize,
        /// The allocator's refusal.
        #[source]
        cause: TryReserveError,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A vertex index fell outside `0..vertex_count`.
        InvalidVertex => InvalidVertex { .. } => "INVALID_VERTEX",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "NON_FINITE_WEIGHT",
        /// Disjoint-set storage for the vertex count could not be reserved.
        AllocationFailed => AllocationFailed { .. } => "ALLOCATION_FAILED",
    }
}

/// Convenient result alias for Kruskal operations.
pub type Result<T, E = MstError> = std::result::Result<T, E>;
