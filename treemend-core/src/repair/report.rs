//! Structured result of a repair run and its text rendering.

use std::io::{self, Write};

use crate::{
    components::ComponentPartition,
    graph::{Edge, Graph},
    mst::SpanningForest,
};

/// How a repair run ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RepairOutcome {
    /// The graph has no spanning tree; nothing was failed.
    Disconnected,
    /// A tree edge failed and no edge of the graph reconnects the forest.
    Unrepairable {
        /// The failed tree edge.
        removed: Edge,
        /// Components of the reduced forest.
        components: ComponentPartition,
        /// The tree without the failed edge.
        reduced: SpanningForest,
    },
    /// A tree edge failed and was replaced.
    Repaired {
        /// The failed tree edge.
        removed: Edge,
        /// Components of the reduced forest.
        components: ComponentPartition,
        /// The edge that reconnected the components.
        replacement: Edge,
        /// The repaired tree, ascending by weight.
        repaired: SpanningForest,
    },
}

impl RepairOutcome {
    /// Returns a stable label for logging.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Unrepairable { .. } => "unrepairable",
            Self::Repaired { .. } => "repaired",
        }
    }
}

/// Everything a repair run computed, in pipeline order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepairReport {
    graph: Graph,
    tree: SpanningForest,
    outcome: RepairOutcome,
}

impl RepairReport {
    pub(super) const fn new(graph: Graph, tree: SpanningForest, outcome: RepairOutcome) -> Self {
        Self {
            graph,
            tree,
            outcome,
        }
    }

    /// Returns the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the minimum spanning tree (or forest) of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn minimum_tree(&self) -> &SpanningForest { &self.tree }

    /// Returns how the run ended.
    #[must_use]
    #[rustfmt::skip]
    pub const fn outcome(&self) -> &RepairOutcome { &self.outcome }

    /// Returns the failed tree edge, if the run got that far.
    #[must_use]
    pub const fn removed(&self) -> Option<&Edge> {
        match &self.outcome {
            RepairOutcome::Disconnected => None,
            RepairOutcome::Unrepairable { removed, .. } | RepairOutcome::Repaired { removed, .. } => {
                Some(removed)
            }
        }
    }

    /// Returns the components of the reduced forest, if computed.
    #[must_use]
    pub const fn components(&self) -> Option<&ComponentPartition> {
        match &self.outcome {
            RepairOutcome::Disconnected => None,
            RepairOutcome::Unrepairable { components, .. }
            | RepairOutcome::Repaired { components, .. } => Some(components),
        }
    }

    /// Returns the replacement edge, if one was found.
    #[must_use]
    pub const fn replacement(&self) -> Option<&Edge> {
        match &self.outcome {
            RepairOutcome::Repaired { replacement, .. } => Some(replacement),
            _ => None,
        }
    }

    /// Returns the repaired tree, if the run succeeded.
    #[must_use]
    pub const fn repaired(&self) -> Option<&SpanningForest> {
        match &self.outcome {
            RepairOutcome::Repaired { repaired, .. } => Some(repaired),
            _ => None,
        }
    }

    /// Writes the human-readable report to `writer`.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing to `writer` fails.
    pub fn render(&self, mut writer: impl Write) -> io::Result<()> {
        let (vertices, edges) = self.graph.declared().map_or(
            (self.graph.vertex_count(), self.graph.edge_count()),
            |declared| (declared.vertices, declared.edges),
        );
        writeln!(writer, "read: {vertices} vertices, {edges} edges.")?;

        writeln!(writer, "\n=== original graph ===")?;
        for edge in self.graph.edges() {
            writeln!(writer, "  {edge}")?;
        }

        writeln!(writer, "\n=== MST ===")?;
        write!(writer, "{}", self.tree)?;
        writeln!(writer, "total MST weight: {}", self.tree.total_weight())?;

        let (removed, components) = match &self.outcome {
            RepairOutcome::Disconnected => {
                writeln!(writer, "the graph is not connected; no MST exists.")?;
                return Ok(());
            }
            RepairOutcome::Unrepairable {
                removed,
                components,
                ..
            }
            | RepairOutcome::Repaired {
                removed,
                components,
                ..
            } => (removed, components),
        };

        writeln!(writer, "\n=== removed edge ===")?;
        writeln!(writer, "removed: {removed}")?;
        writeln!(writer, "\n=== components after removal ===")?;
        write!(writer, "{components}")?;

        match &self.outcome {
            RepairOutcome::Repaired {
                replacement,
                repaired,
                ..
            } => {
                writeln!(writer, "\n=== replacement edge ===")?;
                writeln!(writer, "added: {replacement}")?;
                writeln!(writer, "\n=== new MST ===")?;
                write!(writer, "{repaired}")?;
                writeln!(writer, "new total MST weight: {}", repaired.total_weight())
            }
            _ => writeln!(
                writer,
                "\nno replacement edge was found; the graph cannot be reconnected."
            ),
        }
    }
}
