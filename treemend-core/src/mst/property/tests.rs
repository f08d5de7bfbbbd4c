//! Property test runners for the Kruskal implementation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use crate::mst::kruskal;
use crate::{Edge, UnionFind};

use super::oracle::{minimum_spanning_weight, spans};
use super::strategies::{fixture_strategy, generate_fixture, small_graph_strategy};
use super::types::{GraphShape, MstFixture};

fn check_structure(fixture: &MstFixture) -> Result<(), TestCaseError> {
    let graph = &fixture.graph;
    let forest = kruskal(graph).map_err(|err| TestCaseError::fail(err.to_string()))?;

    let mut sets = UnionFind::new(graph.vertex_count());
    for edge in forest.edges() {
        let merged = sets
            .union(edge.source(), edge.target())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(merged, "{:?}: edge {} closes a cycle", fixture.shape, edge);
    }
    prop_assert_eq!(
        forest.len(),
        graph.vertex_count() - sets.component_count(),
        "{:?}: forest size must equal V minus components",
        fixture.shape
    );
    prop_assert!(
        forest.edges().windows(2).all(|pair| pair[0] <= pair[1]),
        "forest must be sorted ascending"
    );
    prop_assert!(
        forest
            .edges()
            .iter()
            .all(|edge| graph.edges().contains(edge)),
        "forest must be a subset of the graph"
    );
    if fixture.shape == GraphShape::Disconnected {
        prop_assert!(!forest.is_spanning_tree());
    } else {
        prop_assert_eq!(forest.is_spanning_tree(), sets.component_count() == 1);
    }
    Ok(())
}

proptest! {
    #[test]
    fn matches_brute_force_oracle(graph in small_graph_strategy()) {
        // A lone vertex has an empty tree, which the pipeline treats as absent.
        prop_assume!(graph.vertex_count() > 1);
        let forest = kruskal(&graph).expect("MST must succeed");
        match minimum_spanning_weight(&graph) {
            Some(weight) => {
                prop_assert!(forest.is_spanning_tree());
                prop_assert_eq!(forest.len(), graph.vertex_count() - 1);
                prop_assert!(spans(graph.vertex_count(), forest.edges()));
                prop_assert_eq!(forest.total_weight(), weight);
            }
            None => {
                prop_assert!(!forest.is_spanning_tree());
                prop_assert!(forest.len() < graph.vertex_count() - 1);
            }
        }
    }

    #[test]
    fn preserves_forest_invariants(fixture in fixture_strategy()) {
        check_structure(&fixture)?;
    }

    #[test]
    fn is_deterministic(graph in small_graph_strategy()) {
        let first = kruskal(&graph).expect("MST must succeed");
        let second = kruskal(&graph).expect("MST must succeed");
        prop_assert_eq!(first, second);
    }
}

#[rstest]
#[case::sparse_42(GraphShape::Sparse, 42)]
#[case::sparse_999(GraphShape::Sparse, 999)]
#[case::dense_42(GraphShape::Dense, 42)]
#[case::identical_42(GraphShape::ManyIdentical, 42)]
#[case::identical_7777(GraphShape::ManyIdentical, 7777)]
#[case::disconnected_42(GraphShape::Disconnected, 42)]
#[case::disconnected_999(GraphShape::Disconnected, 999)]
fn seeded_fixtures_preserve_forest_invariants(#[case] shape: GraphShape, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(shape, &mut rng);
    check_structure(&fixture).expect("forest invariants must hold");
}

#[test]
fn sparse_fixtures_are_connected() {
    let mut rng = SmallRng::seed_from_u64(5);
    let fixture = generate_fixture(GraphShape::Sparse, &mut rng);
    let forest = kruskal(&fixture.graph).expect("MST must succeed");
    assert!(forest.is_spanning_tree());
    let edges: Vec<Edge> = forest.edges().to_vec();
    assert!(spans(fixture.graph.vertex_count(), &edges));
}
