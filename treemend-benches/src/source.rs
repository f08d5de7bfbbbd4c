//! Seeded synthetic graphs for benchmarks.
//!
//! Every generated graph is connected: vertex `i > 0` is first joined to a
//! random earlier vertex, then extra random edges are added on top.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use treemend_core::{Graph, Vertex, Weight};

/// Configuration for [`generate_connected`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges added beyond the random spanning backbone.
    pub extra_edges: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// RNG seed.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("a connected benchmark graph needs at least two vertices, got {vertex_count}")]
    TooFewVertices {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// The weight range was empty.
    #[error("max_weight must be positive, got {max_weight}")]
    EmptyWeightRange {
        /// Requested maximum weight.
        max_weight: Weight,
    },
}

/// Generates a connected graph with `vertex_count - 1 + extra_edges` edges.
///
/// # Errors
/// Returns [`SyntheticError`] when fewer than two vertices are requested or
/// `max_weight` is not positive.
///
/// # Examples
/// ```
/// use treemend_benches::source::{SyntheticGraphConfig, generate_connected};
///
/// let graph = generate_connected(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges: 5,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 14);
/// # Ok::<(), treemend_benches::source::SyntheticError>(())
/// ```
pub fn generate_connected(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    if config.vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices {
            vertex_count: config.vertex_count,
        });
    }
    if config.max_weight < 1 {
        return Err(SyntheticError::EmptyWeightRange {
            max_weight: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut triples: Vec<(Vertex, Vertex, Weight)> =
        Vec::with_capacity(config.vertex_count - 1 + config.extra_edges);
    // Joining the last vertex last keeps the derived vertex count exact.
    for vertex in 1..config.vertex_count {
        let anchor = rng.gen_range(0..vertex);
        triples.push((anchor, vertex, rng.gen_range(1..=config.max_weight)));
    }
    for _ in 0..config.extra_edges {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        triples.push((source, target, rng.gen_range(1..=config.max_weight)));
    }
    Ok(Graph::from_triples(triples))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use treemend_core::kruskal;

    fn config(vertex_count: usize, extra_edges: usize) -> SyntheticGraphConfig {
        SyntheticGraphConfig {
            vertex_count,
            extra_edges,
            max_weight: 1_000,
            seed: 42,
        }
    }

    #[rstest]
    #[case(2, 0)]
    #[case(50, 0)]
    #[case(200, 800)]
    fn generated_graphs_are_connected(#[case] vertex_count: usize, #[case] extra_edges: usize) {
        let graph = generate_connected(&config(vertex_count, extra_edges))
            .expect("generation must succeed");
        assert_eq!(graph.vertex_count(), vertex_count);
        assert_eq!(graph.edge_count(), vertex_count - 1 + extra_edges);

        let forest = kruskal(&graph).expect("kruskal must succeed");
        assert!(forest.is_spanning_tree());
    }

    #[rstest]
    fn generation_is_deterministic_per_seed() {
        let first = generate_connected(&config(64, 64)).expect("generation must succeed");
        let second = generate_connected(&config(64, 64)).expect("generation must succeed");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_too_few_vertices(#[case] vertex_count: usize) {
        let err = generate_connected(&config(vertex_count, 3)).expect_err("must reject");
        assert_eq!(err, SyntheticError::TooFewVertices { vertex_count });
    }

    #[rstest]
    fn rejects_empty_weight_range() {
        let mut bad = config(4, 0);
        bad.max_weight = 0;
        let err = generate_connected(&bad).expect_err("must reject");
        assert_eq!(err, SyntheticError::EmptyWeightRange { max_weight: 0 });
    }
}
