use proptest::prelude::*;
use treemend_core::{Edge, Graph, UnionFind};

/// Connected graphs: a random spanning path over `0..n` plus extra edges.
pub fn connected_graph_strategy() -> impl Strategy<Value = Graph> {
    (3_usize..=12).prop_flat_map(|vertex_count| {
        let path = prop::collection::vec(1_i64..50, vertex_count - 1);
        let extra = prop::collection::vec(
            (0..vertex_count, 0..vertex_count, 1_i64..50),
            0..=2 * vertex_count,
        );
        (path, extra).prop_map(|(path, extra)| {
            let spine = path
                .into_iter()
                .enumerate()
                .map(|(index, weight)| (index, index + 1, weight));
            Graph::from_triples(spine.chain(extra))
        })
    })
}

/// Number of connected components formed by `edges` over `vertex_count`.
pub fn component_count(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut sets = UnionFind::new(vertex_count);
    for edge in edges {
        sets.union(edge.source(), edge.target())
            .expect("edges must stay within the graph");
    }
    sets.component_count()
}
