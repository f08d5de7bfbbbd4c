//! Treemend core library.
//!
//! Builds a minimum spanning tree over a weighted undirected graph with
//! Kruskal's algorithm, fails one of its edges, recomputes the connected
//! components of the reduced forest and searches the original edge set for
//! the cheapest edge that reconnects them.
//!
//! # Tie-breaking
//!
//! Edges are ordered by weight and then by their position in the input, so
//! every sort in the pipeline behaves like a stable weight sort and repeated
//! runs over the same input produce identical output.

mod components;
mod error;
mod graph;
mod mst;
mod repair;
mod replacement;
mod union_find;

pub use crate::{
    components::{ComponentPartition, analyze_components},
    error::{
        GraphError, GraphErrorCode, RepairError, RepairErrorCode, UnionFindError,
        UnionFindErrorCode,
    },
    graph::{DeclaredCounts, Edge, Graph, TotalWeight, Vertex, Weight},
    mst::{MstError, MstErrorCode, SpanningForest, kruskal, kruskal_from_edges},
    repair::{
        FailurePolicy, RepairOutcome, RepairPipeline, RepairReport, heaviest_edge,
    },
    replacement::find_replacement,
    union_find::UnionFind,
};
