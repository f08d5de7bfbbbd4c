//! Replacement edge search.
//!
//! After an edge fails, the cheapest edge of the original graph whose
//! endpoints lie in different components of the reduced forest restores a
//! spanning tree. By the cut property that edge also keeps the tree minimal.

use tracing::{debug, instrument};

use crate::{components::ComponentPartition, graph::Edge};

/// Returns the minimum-weight edge of `edges` that crosses two components of
/// `partition`, skipping `removed` itself.
///
/// `removed` is excluded by identity (its input position), so a parallel
/// duplicate with the same endpoints and weight stays eligible. Among equally
/// cheap candidates the first in input order wins. Returns `None` when no
/// edge crosses the partition.
///
/// # Examples
/// ```
/// use treemend_core::{Graph, analyze_components, find_replacement};
///
/// let graph = Graph::from_triples([(0, 1, 1), (1, 2, 2), (2, 0, 5)]);
/// let removed = graph.edges()[1];
/// let partition = analyze_components(3, &graph.edges()[..1])?;
/// let replacement = find_replacement(graph.edges(), &removed, &partition);
/// assert_eq!(replacement, Some(graph.edges()[2]));
/// # Ok::<(), treemend_core::UnionFindError>(())
/// ```
#[instrument(
    name = "core.replacement",
    level = "debug",
    skip(edges, partition),
    fields(removed = %removed, components = partition.component_count()),
)]
pub fn find_replacement(
    edges: &[Edge],
    removed: &Edge,
    partition: &ComponentPartition,
) -> Option<Edge> {
    let mut best: Option<Edge> = None;
    for edge in edges {
        if edge.sequence() == removed.sequence() || !partition.crosses(edge) {
            continue;
        }
        if best.is_none_or(|current| edge.weight() < current.weight()) {
            best = Some(*edge);
        }
    }

    debug!(found = best.is_some(), "replacement search completed");
    best
}
