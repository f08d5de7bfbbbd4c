//! Edge and graph model.
//!
//! A [`Graph`] is an immutable, ordered list of undirected weighted edges.
//! Its vertex count is derived from the edge endpoints (`1 + max(endpoint)`)
//! rather than trusted from any declared header. A declared vertex count that
//! disagrees with the derived one is kept for reporting only.

use std::{cmp::Ordering, fmt};

use tracing::{debug, warn};

use crate::error::GraphError;

/// Vertex identifier in `[0, V)`.
pub type Vertex = usize;

/// Integer edge weight.
pub type Weight = i64;

/// Sum of edge weights. Wide enough that no edge list can overflow it.
pub type TotalWeight = i128;

/// An undirected weighted edge.
///
/// Endpoints are kept exactly as provided: `(u, v, w)` and `(v, u, w)` are the
/// same connection but distinct values. The `sequence` is the edge's position
/// in the input and identifies it among parallel duplicates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: Vertex,
    target: Vertex,
    weight: Weight,
    sequence: u64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use treemend_core::Edge;
    ///
    /// let edge = Edge::new(0, 1, 7, 0);
    /// assert_eq!(edge.weight(), 7);
    /// assert_eq!(edge.to_string(), "(0 - 1, w=7)");
    /// ```
    #[must_use]
    pub const fn new(source: Vertex, target: Vertex, weight: Weight, sequence: u64) -> Self {
        Self {
            source,
            target,
            weight,
            sequence,
        }
    }

    /// Returns the first endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Vertex { self.source }

    /// Returns the second endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> Vertex { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the input position of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the larger of the two endpoints.
    #[must_use]
    pub const fn max_endpoint(&self) -> Vertex {
        if self.source >= self.target {
            self.source
        } else {
            self.target
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {}, w={})", self.source, self.target, self.weight)
    }
}

/// Vertex and edge counts as declared by an input header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeclaredCounts {
    /// Declared number of vertices.
    pub vertices: usize,
    /// Declared number of edges.
    pub edges: usize,
}

/// An immutable weighted undirected graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    edges: Vec<Edge>,
    vertex_count: usize,
    declared: Option<DeclaredCounts>,
}

impl Graph {
    /// Builds a graph from `(u, v, w)` triples, numbering edges by position.
    ///
    /// The vertex count is `1 + max(endpoint)`; an empty edge list yields a
    /// single vertex.
    ///
    /// # Examples
    /// ```
    /// use treemend_core::Graph;
    ///
    /// let graph = Graph::from_triples([(0, 1, 1), (1, 4, 2)]);
    /// assert_eq!(graph.vertex_count(), 5);
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.edges()[1].sequence(), 1);
    /// ```
    #[must_use]
    pub fn from_triples(triples: impl IntoIterator<Item = (Vertex, Vertex, Weight)>) -> Self {
        let edges = number_edges(triples);
        let vertex_count = derive_vertex_count(&edges);
        Self {
            edges,
            vertex_count,
            declared: None,
        }
    }

    /// Builds a graph from triples read under a declared `V`/`E` header.
    ///
    /// The declared vertex count never overrides the derived one. A mismatch
    /// is logged and otherwise ignored.
    #[must_use]
    pub fn with_declared_counts(
        declared: DeclaredCounts,
        triples: impl IntoIterator<Item = (Vertex, Vertex, Weight)>,
    ) -> Self {
        let mut graph = Self::from_triples(triples);
        if declared.vertices < graph.vertex_count {
            warn!(
                declared_vertices = declared.vertices,
                derived_vertices = graph.vertex_count,
                "declared vertex count is smaller than the edge endpoints require; using derived count"
            );
        } else if declared.vertices > graph.vertex_count {
            debug!(
                declared_vertices = declared.vertices,
                derived_vertices = graph.vertex_count,
                "declared vertex count exceeds the edge endpoints; using derived count"
            );
        }
        graph.declared = Some(declared);
        graph
    }

    /// Builds a graph over an explicit vertex count so trailing vertices may be
    /// isolated.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfRange`] when an edge endpoint is not
    /// below `vertex_count`.
    pub fn with_vertex_count(
        vertex_count: usize,
        triples: impl IntoIterator<Item = (Vertex, Vertex, Weight)>,
    ) -> Result<Self, GraphError> {
        let edges = number_edges(triples);
        if let Some(edge) = edges.iter().find(|edge| edge.max_endpoint() >= vertex_count) {
            return Err(GraphError::EdgeOutOfRange {
                edge: *edge,
                vertex_count,
            });
        }
        Ok(Self {
            edges,
            vertex_count,
            declared: None,
        })
    }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the header counts the graph was read with, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn declared(&self) -> Option<DeclaredCounts> { self.declared }
}

fn number_edges(triples: impl IntoIterator<Item = (Vertex, Vertex, Weight)>) -> Vec<Edge> {
    triples
        .into_iter()
        .zip(0_u64..)
        .map(|((source, target, weight), sequence)| Edge::new(source, target, weight, sequence))
        .collect()
}

fn derive_vertex_count(edges: &[Edge]) -> usize {
    edges
        .iter()
        .map(Edge::max_endpoint)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}
