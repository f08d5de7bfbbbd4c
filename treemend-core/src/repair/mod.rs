//! Edge failure and repair orchestration.
//!
//! The pipeline builds a minimum spanning tree, fails one of its edges
//! (chosen by a [`FailurePolicy`]), recomputes the components of the reduced
//! forest and reconnects them with the cheapest crossing edge of the original
//! graph. Each phase owns a fresh union-find.

mod report;

use std::io::Write;

use tracing::{info, instrument, warn};

use crate::{
    components::analyze_components,
    error::RepairError,
    graph::{Edge, Graph},
    mst::kruskal,
    replacement::find_replacement,
};

pub use self::report::{RepairOutcome, RepairReport};

/// Selects which edge of the minimum spanning tree fails.
///
/// The policy receives the tree edges in ascending weight order and returns
/// the position of the edge to remove, or `None` to decline.
pub trait FailurePolicy {
    /// Returns the position of the edge to fail.
    fn select(&self, forest: &[Edge]) -> Option<usize>;
}

impl<F> FailurePolicy for F
where
    F: Fn(&[Edge]) -> Option<usize>,
{
    fn select(&self, forest: &[Edge]) -> Option<usize> {
        self(forest)
    }
}

/// Default policy: fail the heaviest tree edge, which is the last one since
/// the tree is kept sorted ascending.
#[must_use]
pub fn heaviest_edge(forest: &[Edge]) -> Option<usize> {
    forest.len().checked_sub(1)
}

/// Runs the build, fail, analyse and repair sequence over a graph.
///
/// # Examples
/// ```
/// use treemend_core::{Graph, RepairOutcome, RepairPipeline};
///
/// let graph = Graph::from_triples([(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5)]);
/// let report = RepairPipeline::new().run(&graph)?;
/// match report.outcome() {
///     RepairOutcome::Repaired { replacement, repaired, .. } => {
///         assert_eq!(replacement.weight(), 4);
///         assert_eq!(repaired.total_weight(), 7);
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// # Ok::<(), treemend_core::RepairError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RepairPipeline<P = fn(&[Edge]) -> Option<usize>> {
    policy: P,
}

impl RepairPipeline {
    /// Creates a pipeline that fails the heaviest tree edge.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: heaviest_edge,
        }
    }
}

impl Default for RepairPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FailurePolicy> RepairPipeline<P> {
    /// Creates a pipeline that fails the edge chosen by `policy`.
    ///
    /// # Examples
    /// ```
    /// use treemend_core::{Edge, Graph, RepairPipeline};
    ///
    /// let lightest = |forest: &[Edge]| -> Option<usize> { (!forest.is_empty()).then_some(0) };
    /// let graph = Graph::from_triples([(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
    /// let report = RepairPipeline::with_failure_policy(lightest).run(&graph)?;
    /// assert_eq!(report.removed().map(|edge| edge.weight()), Some(1));
    /// # Ok::<(), treemend_core::RepairError>(())
    /// ```
    #[must_use]
    pub const fn with_failure_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Runs the pipeline and returns the structured report.
    ///
    /// A disconnected graph stops after the tree is built; a forest that
    /// cannot be reconnected stops after component analysis. Both are
    /// reported through [`RepairOutcome`] rather than as errors.
    ///
    /// # Errors
    /// Returns [`RepairError::NoFailureSelected`] or
    /// [`RepairError::FailureIndexOutOfRange`] when the policy does not pick
    /// a tree edge, and [`RepairError::Mst`] or [`RepairError::UnionFind`]
    /// when an edge references a vertex outside the graph.
    #[instrument(
        name = "core.repair",
        err,
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn run(&self, graph: &Graph) -> Result<RepairReport, RepairError> {
        let tree = kruskal(graph)?;
        info!(
            tree_edges = tree.len(),
            total_weight = tree.total_weight(),
            "minimum spanning tree built"
        );

        if !tree.is_spanning_tree() {
            warn!(
                tree_edges = tree.len(),
                required = graph.vertex_count().saturating_sub(1),
                "graph is not connected; no minimum spanning tree exists"
            );
            return Ok(RepairReport::new(graph.clone(), tree, RepairOutcome::Disconnected));
        }

        let index = self
            .policy
            .select(tree.edges())
            .ok_or(RepairError::NoFailureSelected)?;
        let mut reduced = tree.clone();
        let removed = reduced
            .remove(index)
            .ok_or(RepairError::FailureIndexOutOfRange {
                index,
                forest_len: tree.len(),
            })?;
        info!(%removed, index, "tree edge failed");

        let components = analyze_components(graph.vertex_count(), reduced.edges())?;
        info!(
            components = components.component_count(),
            "components recomputed after failure"
        );

        let Some(replacement) = find_replacement(graph.edges(), &removed, &components) else {
            warn!(%removed, "no replacement edge reconnects the forest");
            return Ok(RepairReport::new(
                graph.clone(),
                tree,
                RepairOutcome::Unrepairable {
                    removed,
                    components,
                    reduced,
                },
            ));
        };

        let mut repaired = reduced;
        repaired.insert(replacement);
        info!(
            %replacement,
            total_weight = repaired.total_weight(),
            "tree repaired"
        );
        Ok(RepairReport::new(
            graph.clone(),
            tree,
            RepairOutcome::Repaired {
                removed,
                components,
                replacement,
                repaired,
            },
        ))
    }

    /// Runs the pipeline and writes the rendered report to `sink`.
    ///
    /// Nothing is written when the pipeline fails.
    ///
    /// # Errors
    /// Returns the errors of [`Self::run`] and [`RepairError::Io`] when
    /// writing to `sink` fails.
    pub fn run_to(&self, graph: &Graph, sink: impl Write) -> Result<RepairReport, RepairError> {
        let report = self.run(graph)?;
        report.render(sink)?;
        Ok(report)
    }
}
