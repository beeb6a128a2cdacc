use super::OSRBTree;
use crate::error::OutOfRange;
use crate::rational::Rational;

impl OSRBTree {
    /// Returns the `k`-th smallest key, 1-based, under the component-wise
    /// comparator: `find_kth(1)` is the smallest key and `find_kth(len())`
    /// the largest. Duplicates occupy consecutive ranks.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `k` is outside `1..=len()`. There is no
    /// sentinel key: a stored `0/1` and an invalid rank are never confused.
    ///
    /// # Complexity
    ///
    /// O(log n), read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{OSRBTree, Rational};
    ///
    /// let tree: OSRBTree = [(1, 2), (2, 1), (3, 2)]
    ///     .into_iter()
    ///     .map(|(n, d)| Rational::reduce(n, d).unwrap())
    ///     .collect();
    ///
    /// assert_eq!(tree.find_kth(2).unwrap().to_string(), "2/1");
    /// assert!(tree.find_kth(0).is_err());
    /// assert!(tree.find_kth(4).is_err());
    /// ```
    pub fn find_kth(&self, k: usize) -> Result<&Rational, OutOfRange> {
        self.raw.find_kth(k).ok_or(OutOfRange {
            rank: k,
            len: self.len(),
        })
    }
}
