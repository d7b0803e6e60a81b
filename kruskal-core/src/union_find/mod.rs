//! Disjoint-set (union-find) over dense vertex indices.
//!
//! The Kruskal builder tracks which vertices already share a tree with this
//! structure. `find` compresses every path it walks and `union` links by
//! rank, so a sequence of operations costs effectively constant amortised time
//! per call.

use crate::error::MstError;

/// Partition of `0..len` into disjoint components.
///
/// Parents and ranks live in flat vectors indexed by element. Following
/// parent links from any element always terminates at a root that is its own
/// parent.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(set.union(2, 3)?);
/// assert!(!set.union(1, 0)?);
/// assert_eq!(set.components(), 2);
/// assert!(set.connected(0, 1)?);
/// assert!(!set.connected(1, 2)?);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components. `len == 0` yields an empty set.
    ///
    /// Aborts like any `Vec` allocation when `len` entries cannot be stored;
    /// use [`DisjointSet::try_new`] for sizes taken from untrusted input.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Creates `len` singleton components, reporting allocation failure
    /// instead of aborting.
    ///
    /// # Errors
    /// Returns [`MstError::AllocationFailed`] when storage for `len` parents
    /// and ranks cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{DisjointSet, MstErrorCode};
    ///
    /// assert_eq!(DisjointSet::try_new(3)?.components(), 3);
    /// let err = DisjointSet::try_new(usize::MAX).expect_err("too large");
    /// assert_eq!(err.code(), MstErrorCode::AllocationFailed);
    /// # Ok::<(), kruskal_core::MstError>(())
    /// ```
    pub fn try_new(len: usize) -> Result<Self, MstError> {
        let allocation_failed = |cause| MstError::AllocationFailed {
            vertex_count: len,
            cause,
        };
        let mut parent = Vec::new();
        parent.try_reserve_exact(len).map_err(allocation_failed)?;
        let mut rank = Vec::new();
        rank.try_reserve_exact(len).map_err(allocation_failed)?;

        parent.extend(0..len);
        rank.resize(len, 0);
        Ok(Self {
            parent,
            rank,
            components: len,
        })
    }

    /// Returns the number of elements tracked by the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the set tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the root of the component containing `element`.
    ///
    /// Every element visited on the way is re-pointed directly at the root.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when `element >= self.len()`.
    pub fn find(&mut self, element: usize) -> Result<usize, MstError> {
        self.check(element)?;
        Ok(self.find_root(element))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The shallower tree is attached under the deeper one. On equal ranks the
    /// root of `right` is attached under the root of `left` and the surviving
    /// rank grows by one. Returns `true` when two components were merged and
    /// `false` when both elements already shared a component.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when either element is out of
    /// range. The set is left untouched in that case.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, MstError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.link(left, right))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when either element is out of
    /// range.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, MstError> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.find_root(left) == self.find_root(right))
    }

    /// Unchecked union for callers that validated both indices up front.
    pub(crate) fn link(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_root(left);
        let right_root = self.find_root(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        if left_rank == right_rank {
            self.rank[parent] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    fn find_root(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn check(&self, element: usize) -> Result<(), MstError> {
        if element < self.len() {
            Ok(())
        } else {
            Err(MstError::InvalidVertex {
                vertex: element,
                vertex_count: self.len(),
            })
        }
    }

    #[cfg(test)]
    fn parent_of(&self, element: usize) -> usize {
        self.parent[element]
    }

    #[cfg(test)]
    fn rank_of(&self, element: usize) -> u8 {
        self.rank[element]
    }
}
