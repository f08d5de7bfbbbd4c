//! Union-find (disjoint set union) with path compression and union by rank.
//!
//! Each pipeline phase constructs its own instance; nothing is shared between
//! the MST build and the post-failure component analysis.

use crate::error::UnionFindError;

/// Disjoint-set forest over the nodes `[0, n)`.
///
/// # Examples
/// ```
/// use treemend_core::UnionFind;
///
/// let mut sets = UnionFind::new(3);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.component_count(), 2);
/// # Ok::<(), treemend_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `node_count` singleton sets.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            rank: vec![0; node_count],
            components: node_count,
        }
    }

    /// Creates `node_count` singleton sets, failing instead of aborting when
    /// the storage cannot be allocated.
    ///
    /// # Errors
    /// Returns [`UnionFindError::CapacityExceeded`] when the allocation fails.
    pub fn try_new(node_count: usize) -> Result<Self, UnionFindError> {
        let exceeded = |_| UnionFindError::CapacityExceeded { node_count };
        let mut parent = Vec::new();
        parent.try_reserve_exact(node_count).map_err(exceeded)?;
        parent.extend(0..node_count);
        let mut rank = Vec::new();
        rank.try_reserve_exact(node_count).map_err(exceeded)?;
        rank.resize(node_count, 0);
        Ok(Self {
            parent,
            rank,
            components: node_count,
        })
    }

    /// Returns the number of tracked nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no nodes are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set, repointing every node on
    /// the path directly at the root.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfBounds`] when `node` is not tracked.
    pub fn find(&mut self, mut node: usize) -> Result<usize, UnionFindError> {
        self.check(node)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without mutating anything when both already share a
    /// set. Otherwise the lower-rank root is reparented under the higher-rank
    /// one; on a tie `left`'s root survives and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfBounds`] when either node is not tracked.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(false);
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`UnionFindError::OutOfBounds`] when either node is not tracked.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    const fn check(&self, node: usize) -> Result<(), UnionFindError> {
        let node_count = self.parent.len();
        if node < node_count {
            Ok(())
        } else {
            Err(UnionFindError::OutOfBounds { node, node_count })
        }
    }

    #[cfg(test)]
    fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    #[cfg(test)]
    fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
