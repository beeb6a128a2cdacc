use super::OSRBTree;
use crate::raw::RawOSRBTree;

impl OSRBTree {
    /// Creates a new, empty tree with room for at least `capacity` keys
    /// before the node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::OSRBTree;
    ///
    /// let tree = OSRBTree::with_capacity(100);
    /// assert!(tree.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: RawOSRBTree::with_capacity(capacity),
        }
    }

    /// Returns the number of keys the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
