//! Minimum spanning tree construction.
//!
//! Sequential Kruskal: sort the edges ascending by weight (ties by input
//! position), then accept every edge whose endpoints are still in different
//! sets of a fresh [`UnionFind`]. Construction stops once `V - 1` edges are
//! accepted. A disconnected graph yields a forest with fewer edges.

use tracing::{debug, instrument};

use crate::{
    error::{UnionFindError, define_error_codes},
    graph::{Edge, Graph, TotalWeight},
    union_find::UnionFind,
};

use std::fmt;

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MstError {
    /// An edge referenced a vertex outside the union-find.
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
}

define_error_codes! {
    /// Machine-readable error codes for [`MstError`].
    enum MstErrorCode for MstError {
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => UnionFind(..) => "MST_INVALID_VERTEX",
    }
}

/// An ordered set of edges forming an acyclic forest over `[0, V)`.
///
/// When the graph is connected and the forest holds `V - 1` edges it is a
/// spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges, ascending by weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of vertices the forest is defined over.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the forest holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the sum of the edge weights.
    #[must_use]
    pub fn total_weight(&self) -> TotalWeight {
        self.edges
            .iter()
            .map(|edge| TotalWeight::from(edge.weight()))
            .sum()
    }

    /// Returns `true` when the forest connects every vertex, i.e. it holds
    /// exactly `V - 1` edges and at least one of them.
    ///
    /// An empty forest never counts as spanning, even over a single vertex.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        !self.edges.is_empty() && self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Removes and returns the edge at `index`.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Edge> {
        (index < self.edges.len()).then(|| self.edges.remove(index))
    }

    /// Appends `edge` and restores ascending order.
    pub(crate) fn insert(&mut self, edge: Edge) {
        self.edges.push(edge);
        self.edges.sort_unstable();
    }
}

impl fmt::Display for SpanningForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// # Errors
/// Returns [`MstError::UnionFind`] if an edge endpoint lies outside the graph,
/// which cannot happen for graphs built through [`Graph`]'s constructors.
///
/// # Examples
/// ```
/// use treemend_core::{Graph, kruskal};
///
/// let graph = Graph::from_triples([(0, 1, 1), (1, 2, 2), (2, 0, 3)]);
/// let forest = kruskal(&graph)?;
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_spanning_tree());
/// # Ok::<(), treemend_core::MstError>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<SpanningForest, MstError> {
    kruskal_from_edges(graph.vertex_count(), graph.edges())
}

/// Computes a minimum spanning forest of the edges over `vertex_count`
/// vertices.
///
/// # Errors
/// Returns [`MstError::UnionFind`] if an edge endpoint is not below
/// `vertex_count`.
#[instrument(
    name = "core.kruskal",
    level = "debug",
    err,
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub fn kruskal_from_edges(
    vertex_count: usize,
    edges: &[Edge],
) -> Result<SpanningForest, MstError> {
    let target = vertex_count.saturating_sub(1);
    let mut sorted = edges.to_vec();
    sorted.sort_unstable();

    let mut sets = UnionFind::try_new(vertex_count)?;
    let mut accepted = Vec::with_capacity(target.min(edges.len()));
    for edge in sorted {
        if accepted.len() == target {
            break;
        }
        if sets.union(edge.source(), edge.target())? {
            accepted.push(edge);
        }
    }

    debug!(
        accepted = accepted.len(),
        components = sets.component_count(),
        "kruskal completed"
    );
    Ok(SpanningForest {
        edges: accepted,
        vertex_count,
    })
}


#[cfg(test)]
mod property;
