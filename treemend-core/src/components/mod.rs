//! Connected components of a spanning forest.
//!
//! Component indices are dense and assigned in order of first discovery while
//! walking vertices `0..V` ascending, so the lowest vertex of component `i`
//! is always lower than that of component `i + 1`.

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    error::UnionFindError,
    graph::{Edge, Vertex},
    union_find::UnionFind,
};

/// Partition of `[0, V)` into the connected components of a forest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentPartition {
    component_of: Vec<usize>,
    root_component: Vec<Option<usize>>,
    members: Vec<Vec<Vertex>>,
}

impl ComponentPartition {
    /// Returns the number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.members.len()
    }

    /// Returns the number of partitioned vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.component_of.len()
    }

    /// Returns the component index of `vertex`, or `None` when it lies outside
    /// the partition.
    #[must_use]
    pub fn component_of(&self, vertex: Vertex) -> Option<usize> {
        self.component_of.get(vertex).copied()
    }

    /// Returns the component index assigned to a union-find root.
    ///
    /// Vertices that were not roots after analysis map to `None`.
    #[must_use]
    pub fn component_of_root(&self, root: Vertex) -> Option<usize> {
        self.root_component.get(root).copied().flatten()
    }

    /// Returns the ascending member list of component `index`.
    #[must_use]
    pub fn members(&self, index: usize) -> Option<&[Vertex]> {
        self.members.get(index).map(Vec::as_slice)
    }

    /// Iterates over every component's members in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[Vertex]> {
        self.members.iter().map(Vec::as_slice)
    }

    /// Returns `true` when both endpoints of `edge` fall in different
    /// components.
    #[must_use]
    pub fn crosses(&self, edge: &Edge) -> bool {
        match (
            self.component_of(edge.source()),
            self.component_of(edge.target()),
        ) {
            (Some(left), Some(right)) => left != right,
            _ => false,
        }
    }
}

impl fmt::Display for ComponentPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, members) in self.iter().enumerate() {
            write!(f, "component {index}: {{")?;
            for (position, vertex) in members.iter().enumerate() {
                if position > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{vertex}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

/// Recomputes the connected components of `forest` over `vertex_count`
/// vertices using a fresh [`UnionFind`].
///
/// # Errors
/// Returns [`UnionFindError::OutOfBounds`] when a forest edge references a
/// vertex not below `vertex_count`.
///
/// # Examples
/// ```
/// use treemend_core::{Edge, analyze_components};
///
/// let forest = [Edge::new(0, 1, 1, 0), Edge::new(1, 2, 2, 1)];
/// let partition = analyze_components(4, &forest)?;
/// assert_eq!(partition.component_count(), 2);
/// assert_eq!(partition.members(0), Some(&[0, 1, 2][..]));
/// assert_eq!(partition.component_of(3), Some(1));
/// # Ok::<(), treemend_core::UnionFindError>(())
/// ```
#[instrument(
    name = "core.components",
    level = "debug",
    err,
    skip(forest),
    fields(forest_edges = forest.len()),
)]
pub fn analyze_components(
    vertex_count: usize,
    forest: &[Edge],
) -> Result<ComponentPartition, UnionFindError> {
    let mut sets = UnionFind::try_new(vertex_count)?;
    for edge in forest {
        sets.union(edge.source(), edge.target())?;
    }

    let exceeded = |_| UnionFindError::CapacityExceeded {
        node_count: vertex_count,
    };
    let mut component_of = Vec::new();
    component_of
        .try_reserve_exact(vertex_count)
        .map_err(exceeded)?;
    let mut root_component: Vec<Option<usize>> = Vec::new();
    root_component
        .try_reserve_exact(vertex_count)
        .map_err(exceeded)?;
    root_component.resize(vertex_count, None);

    let mut members: Vec<Vec<Vertex>> = Vec::new();
    for vertex in 0..vertex_count {
        let root = sets.find(vertex)?;
        let slot = root_component
            .get_mut(root)
            .ok_or(UnionFindError::OutOfBounds {
                node: root,
                node_count: vertex_count,
            })?;
        let index = match *slot {
            Some(index) => index,
            None => {
                members.push(Vec::new());
                *slot.insert(members.len() - 1)
            }
        };
        if let Some(component) = members.get_mut(index) {
            component.push(vertex);
        }
        component_of.push(index);
    }

    debug!(components = members.len(), "components recomputed");
    Ok(ComponentPartition {
        component_of,
        root_component,
        members,
    })
}
