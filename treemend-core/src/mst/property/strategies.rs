//! Strategy builders for MST property tests.
//!
//! Small graphs (`V <= 6`) are drawn directly by proptest so the brute-force
//! oracle stays cheap. Larger graphs come from seeded [`SmallRng`] generators
//! keyed by [`GraphShape`].

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Graph, Vertex, Weight};

use super::types::{GraphShape, MstFixture};

const MIN_NODES: usize = 6;
const MAX_NODES: usize = 48;

/// Small graphs whose spanning trees can be enumerated exhaustively.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = Graph> {
    (2_usize..=6).prop_flat_map(|vertex_count| {
        prop::collection::vec(
            (0..vertex_count, 0..vertex_count, -5_i64..=20),
            1..=10,
        )
        .prop_map(Graph::from_triples)
    })
}

/// Larger graphs of every [`GraphShape`].
pub(super) fn fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    let triples = match shape {
        GraphShape::Sparse => sparse(rng),
        GraphShape::Dense => dense(rng),
        GraphShape::ManyIdentical => many_identical(rng),
        GraphShape::Disconnected => disconnected(rng),
    };
    MstFixture {
        graph: Graph::from_triples(triples),
        shape,
    }
}

fn sparse(rng: &mut SmallRng) -> Vec<(Vertex, Vertex, Weight)> {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut triples: Vec<_> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..1_000)))
        .collect();
    for _ in 0..node_count / 2 {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        triples.push((source, target, rng.gen_range(1..1_000)));
    }
    triples
}

fn dense(rng: &mut SmallRng) -> Vec<(Vertex, Vertex, Weight)> {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES / 2);
    let mut triples = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(0.85) {
                triples.push((source, target, rng.gen_range(1..10_000)));
            }
        }
    }
    // Keep the maximum endpoint present so the derived vertex count matches.
    triples.push((0, node_count - 1, rng.gen_range(1..10_000)));
    triples
}

fn many_identical(rng: &mut SmallRng) -> Vec<(Vertex, Vertex, Weight)> {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool: Vec<Weight> = (0..rng.gen_range(1_usize..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let mut triples = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(0.4) {
                triples.push((source, target, pool[rng.gen_range(0..pool.len())]));
            }
        }
    }
    triples.push((0, node_count - 1, pool[0]));
    triples
}

fn disconnected(rng: &mut SmallRng) -> Vec<(Vertex, Vertex, Weight)> {
    let islands = rng.gen_range(2..=4);
    let mut triples = Vec::new();
    let mut offset = 0;
    for _ in 0..islands {
        let size = rng.gen_range(2..=10);
        for local in 1..size {
            let parent = rng.gen_range(0..local);
            triples.push((offset + parent, offset + local, rng.gen_range(1..100)));
        }
        offset += size;
    }
    triples
}
