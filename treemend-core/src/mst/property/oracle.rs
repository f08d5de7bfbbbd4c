//! Brute-force spanning tree oracle.
//!
//! Enumerates every subset of `V - 1` edges and keeps the cheapest one that
//! connects all vertices. Only usable on the tiny graphs produced by
//! [`super::strategies::small_graph_strategy`].

use crate::{Edge, Graph, TotalWeight};

const MAX_ORACLE_EDGES: usize = 16;

/// Returns the minimum total weight over all spanning trees of `graph`, or
/// `None` when the graph has no spanning tree.
pub(super) fn minimum_spanning_weight(graph: &Graph) -> Option<TotalWeight> {
    let edges = graph.edges();
    assert!(
        edges.len() <= MAX_ORACLE_EDGES,
        "oracle is exponential in the edge count"
    );
    let vertex_count = graph.vertex_count();
    let tree_size = vertex_count.saturating_sub(1);

    (0_u32..(1 << edges.len()))
        .filter(|mask| mask.count_ones() as usize == tree_size)
        .filter_map(|mask| {
            let subset: Vec<Edge> = edges
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, edge)| *edge)
                .collect();
            spans(vertex_count, &subset).then(|| {
                subset
                    .iter()
                    .map(|edge| TotalWeight::from(edge.weight()))
                    .sum()
            })
        })
        .min()
}

/// Returns `true` when `edges` connect all `vertex_count` vertices.
pub(super) fn spans(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut label: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let (from, to) = (label[edge.target()], label[edge.source()]);
        for entry in &mut label {
            if *entry == from {
                *entry = to;
            }
        }
    }
    label.iter().all(|entry| *entry == label[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_triangle_minimum() {
        let graph = Graph::from_triples([(0, 1, 4), (1, 2, 1), (0, 2, 2)]);
        assert_eq!(minimum_spanning_weight(&graph), Some(3));
    }

    #[test]
    fn reports_disconnected_graphs() {
        let graph = Graph::from_triples([(0, 1, 4), (2, 3, 1)]);
        assert_eq!(minimum_spanning_weight(&graph), None);
    }
}
