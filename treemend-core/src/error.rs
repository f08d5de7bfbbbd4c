//! Error types for the Treemend core library.
//!
//! Every error enum exposes a stable machine-readable code so callers can
//! log and match on failures without depending on display strings.

use std::{fmt, io};

use thiserror::Error;

use crate::{graph::Edge, mst::MstError};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident
                    $( { $($fields:tt)* } )?
                    $( ( $($tuple:tt)* ) )?
                    => $code:expr
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
                    $(
                        Self::$ErrVariant $( { $($fields)* } )? $( ( $($tuple)* ) )?
                            => $CodeTy::$CodeVariant,
                    )+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced by [`crate::UnionFind`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// A node outside `[0, node_count)` was passed to `find` or `union`.
    #[error("node {node} is outside the union-find of {node_count} nodes")]
    OutOfBounds {
        /// The offending node id.
        node: usize,
        /// Number of nodes tracked by the structure.
        node_count: usize,
    },
    /// Storage for the requested number of nodes could not be allocated.
    #[error("cannot allocate a union-find over {node_count} nodes")]
    CapacityExceeded {
        /// Requested number of nodes.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// A node outside the tracked range was requested.
        OutOfBounds => OutOfBounds { .. } => "UNION_FIND_OUT_OF_BOUNDS",
        /// The node storage could not be allocated.
        CapacityExceeded => CapacityExceeded { .. } => "UNION_FIND_CAPACITY_EXCEEDED",
    }
}

/// An error produced while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint does not fit the explicitly requested vertex count.
    #[error("edge {edge} references a vertex outside [0, {vertex_count})")]
    EdgeOutOfRange {
        /// The edge that referenced the missing vertex.
        edge: Edge,
        /// The vertex count the graph was built with.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint lies outside the vertex range.
        EdgeOutOfRange => EdgeOutOfRange { .. } => "GRAPH_EDGE_OUT_OF_RANGE",
    }
}

/// Error type produced while running [`crate::RepairPipeline`].
///
/// A disconnected graph or a forest that cannot be reconnected are reported
/// through [`crate::RepairOutcome`]; only faults in the pipeline itself are
/// errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RepairError {
    /// Component analysis touched a vertex outside the graph.
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
    /// Minimum spanning tree construction failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// The failure policy declined to select an edge.
    #[error("the failure policy did not select an edge to fail")]
    NoFailureSelected,
    /// The failure policy selected a position past the end of the tree.
    #[error("failure policy selected edge {index} but the tree has {forest_len} edges")]
    FailureIndexOutOfRange {
        /// Position returned by the policy.
        index: usize,
        /// Number of edges in the minimum spanning tree.
        forest_len: usize,
    },
    /// Writing the report to the output sink failed.
    #[error("failed to write repair report: {0}")]
    Io(#[from] io::Error),
}

define_error_codes! {
    /// Stable codes describing [`RepairError`] variants.
    enum RepairErrorCode for RepairError {
        /// Component analysis touched a vertex outside the graph.
        UnionFind => UnionFind(..) => "REPAIR_UNION_FIND",
        /// Minimum spanning tree construction failed.
        Mst => Mst(..) => "REPAIR_MST",
        /// The failure policy declined to select an edge.
        NoFailureSelected => NoFailureSelected => "REPAIR_NO_FAILURE_SELECTED",
        /// The failure policy selected a position past the end of the tree.
        FailureIndexOutOfRange => FailureIndexOutOfRange { .. } => "REPAIR_FAILURE_INDEX_OUT_OF_RANGE",
        /// Writing the report failed.
        Io => Io(..) => "REPAIR_IO",
    }
}
