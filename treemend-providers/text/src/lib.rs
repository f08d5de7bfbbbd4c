//! Text provider for whitespace-separated edge lists.
//!
//! The format is a vertex count `V`, an edge count `E`, then `E` triples
//! `u v w`, all separated by arbitrary whitespace. Tokens after the last
//! triple are ignored. The declared `V` is kept for reporting only; the graph
//! derives its vertex count from the edge endpoints.

use std::io::{self, Read};

use thiserror::Error;
use tracing::{debug, instrument};
use treemend_core::{DeclaredCounts, Graph, Vertex, Weight};

/// Largest vertex id an edge list may reference.
///
/// The pipeline allocates per-vertex state for `1 + max(endpoint)` vertices,
/// so endpoints are capped to keep that allocation bounded.
pub const MAX_VERTEX_ID: Vertex = (1 << 24) - 1;

/// Errors raised while parsing an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    /// Reading the underlying source failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),
    /// The input ended before the named value.
    #[error("input ended before {expected}")]
    MissingToken {
        /// Description of the value that was expected next.
        expected: &'static str,
    },
    /// A token could not be parsed as an integer.
    #[error("token `{token}` at position {position} is not an integer")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// Zero-based token position in the input.
        position: usize,
    },
    /// A count or vertex id was negative.
    #[error("value {value} at position {position} must not be negative")]
    Negative {
        /// The offending value.
        value: i64,
        /// Zero-based token position in the input.
        position: usize,
    },
    /// An edge endpoint exceeded [`MAX_VERTEX_ID`].
    #[error("vertex {value} at position {position} exceeds the maximum vertex id {limit}")]
    VertexOutOfRange {
        /// The offending vertex id.
        value: i64,
        /// Zero-based token position in the input.
        position: usize,
        /// The largest accepted vertex id.
        limit: Vertex,
    },
    /// Fewer edge triples were present than the header declared.
    #[error("header declares {declared} edges but only {found} were present")]
    MissingEdges {
        /// Edge count from the header.
        declared: usize,
        /// Complete triples actually read.
        found: usize,
    },
}

/// A graph loaded from a text edge list.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph,
}

impl EdgeListProvider {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`TextProviderError`] when the input cannot be read, a token is
    /// not an integer, a count or vertex is negative, a vertex exceeds
    /// [`MAX_VERTEX_ID`], or fewer triples are present than declared.
    ///
    /// # Examples
    /// ```
    /// use treemend_providers_text::EdgeListProvider;
    ///
    /// let input = "4 5\n0 1 1\n1 2 2\n2 3 3\n3 0 4\n0 2 5\n";
    /// let provider = EdgeListProvider::try_from_reader("demo", input.as_bytes())?;
    /// assert_eq!(provider.name(), "demo");
    /// assert_eq!(provider.graph().vertex_count(), 4);
    /// assert_eq!(provider.graph().edge_count(), 5);
    /// # Ok::<(), treemend_providers_text::TextProviderError>(())
    /// ```
    #[instrument(name = "text.parse", err, skip(name, reader), fields(source = %name.as_ref()))]
    pub fn try_from_reader(
        name: impl AsRef<str>,
        mut reader: impl Read,
    ) -> Result<Self, TextProviderError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let graph = parse_edge_list(&input)?;
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "edge list parsed"
        );
        Ok(Self {
            name: name.as_ref().to_owned(),
            graph,
        })
    }

    /// Returns the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the provider and returns the graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Parses the `V E (u v w)*` format into a [`Graph`].
///
/// # Errors
/// See [`EdgeListProvider::try_from_reader`].
pub fn parse_edge_list(input: &str) -> Result<Graph, TextProviderError> {
    let mut tokens = Tokens::new(input);
    let vertices = tokens.next_count("the vertex count")?;
    let edges = tokens.next_count("the edge count")?;

    let mut triples: Vec<(Vertex, Vertex, Weight)> = Vec::with_capacity(edges.min(1 << 16));
    for found in 0..edges {
        let triple = tokens.next_triple().map_err(|err| match err {
            TextProviderError::MissingToken { .. } => TextProviderError::MissingEdges {
                declared: edges,
                found,
            },
            other => other,
        })?;
        triples.push(triple);
    }

    Ok(Graph::with_declared_counts(
        DeclaredCounts { vertices, edges },
        triples,
    ))
}

struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace().enumerate(),
        }
    }

    fn next_integer(&mut self, expected: &'static str) -> Result<(i64, usize), TextProviderError> {
        let (position, token) = self
            .inner
            .next()
            .ok_or(TextProviderError::MissingToken { expected })?;
        let value = token
            .parse::<i64>()
            .map_err(|_| TextProviderError::InvalidInteger {
                token: token.to_owned(),
                position,
            })?;
        Ok((value, position))
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize, TextProviderError> {
        let (value, position) = self.next_integer(expected)?;
        usize::try_from(value).map_err(|_| TextProviderError::Negative { value, position })
    }

    fn next_vertex(&mut self, expected: &'static str) -> Result<Vertex, TextProviderError> {
        let (value, position) = self.next_integer(expected)?;
        let vertex =
            Vertex::try_from(value).map_err(|_| TextProviderError::Negative { value, position })?;
        if vertex > MAX_VERTEX_ID {
            return Err(TextProviderError::VertexOutOfRange {
                value,
                position,
                limit: MAX_VERTEX_ID,
            });
        }
        Ok(vertex)
    }

    fn next_triple(&mut self) -> Result<(Vertex, Vertex, Weight), TextProviderError> {
        let source = self.next_vertex("an edge source")?;
        let target = self.next_vertex("an edge target")?;
        let (weight, _) = self.next_integer("an edge weight")?;
        Ok((source, target, weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn parses_header_and_triples() {
        let graph = parse_edge_list("3 2\n0 1 5\n2 1 -3\n").expect("input is valid");
        assert_eq!(
            graph.declared(),
            Some(DeclaredCounts {
                vertices: 3,
                edges: 2
            })
        );
        let triples: Vec<_> = graph
            .edges()
            .iter()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
            .collect();
        assert_eq!(triples, vec![(0, 1, 5), (2, 1, -3)]);
    }

    #[test]
    fn accepts_arbitrary_whitespace_and_trailing_tokens() {
        let graph = parse_edge_list("  2\t1 0\n\n 1   7 trailing junk").expect("input is valid");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].weight(), 7);
    }

    #[test]
    fn derived_vertex_count_overrides_declared() {
        let graph = parse_edge_list("2 1 0 5 1").expect("input is valid");
        assert_eq!(graph.vertex_count(), 6);
    }

    #[rstest]
    #[case::empty("", "the vertex count")]
    #[case::no_edge_count("4", "the edge count")]
    fn reports_missing_header(#[case] input: &str, #[case] expected_token: &str) {
        match parse_edge_list(input) {
            Err(TextProviderError::MissingToken { expected }) => {
                assert_eq!(expected, expected_token);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case::no_triples("3 2", 0)]
    #[case::partial_triple("3 2 0 1 4 1", 1)]
    fn reports_truncated_edge_lists(#[case] input: &str, #[case] expected_found: usize) {
        match parse_edge_list(input) {
            Err(TextProviderError::MissingEdges { declared, found }) => {
                assert_eq!(declared, 2);
                assert_eq!(found, expected_found);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_integer_tokens() {
        match parse_edge_list("3 1 0 x 1") {
            Err(TextProviderError::InvalidInteger { token, position }) => {
                assert_eq!(token, "x");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case::negative_vertex("3 1 0 -1 4", -1, 3)]
    #[case::negative_edge_count("3 -2", -2, 1)]
    fn rejects_negative_counts_and_vertices(
        #[case] input: &str,
        #[case] expected_value: i64,
        #[case] expected_position: usize,
    ) {
        match parse_edge_list(input) {
            Err(TextProviderError::Negative { value, position }) => {
                assert_eq!(value, expected_value);
                assert_eq!(position, expected_position);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case::just_past_limit("2 1 0 16777216 1", 16_777_216, 3)]
    #[case::near_i64_max("2 1 0 9223372036854775806 1", 9_223_372_036_854_775_806, 3)]
    #[case::oversized_source("2 1 9223372036854775807 0 1", i64::MAX, 2)]
    fn rejects_vertices_past_the_limit(
        #[case] input: &str,
        #[case] expected_value: i64,
        #[case] expected_position: usize,
    ) {
        match parse_edge_list(input) {
            Err(TextProviderError::VertexOutOfRange {
                value,
                position,
                limit,
            }) => {
                assert_eq!(value, expected_value);
                assert_eq!(position, expected_position);
                assert_eq!(limit, MAX_VERTEX_ID);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn accepts_the_largest_vertex_id() {
        let input = format!("2 1 0 {MAX_VERTEX_ID} 1");
        let graph = parse_edge_list(&input).expect("limit is inclusive");
        assert_eq!(graph.vertex_count(), MAX_VERTEX_ID + 1);
    }
}
