//! Fixture types for MST property tests.

use test_strategy::Arbitrary;

use crate::Graph;

/// Graph shape produced by the seeded generators.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Random spanning path plus a handful of extra edges.
    Sparse,
    /// Nearly complete graph with distinct-ish weights.
    Dense,
    /// Weights drawn from a pool of one to three values.
    ManyIdentical,
    /// Two to four islands with no edges between them.
    Disconnected,
}

/// A generated graph and the shape it was generated from.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub graph: Graph,
    pub shape: GraphShape,
}
