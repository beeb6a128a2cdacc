use core::fmt;
use core::iter::FusedIterator;

use crate::error::NotFound;
use crate::rational::Rational;
use crate::raw::{self, RawOSRBTree};

mod capacity;
mod order_statistic;

/// An order-statistic multiset of [`Rational`] keys, backed by a red-black
/// tree with subtree-size augmentation.
///
/// Insertion, removal, and [`find_kth`](OSRBTree::find_kth) rank queries all
/// run in O(log n). Equal keys coexist: inserting a key already present adds
/// another occurrence, and [`remove`](OSRBTree::remove) takes out one
/// occurrence at a time.
///
/// Keys are compared **component-wise** (numerator first, then denominator),
/// not by numeric magnitude; see [`Rational`] for the details. Rank queries
/// answer positions in that order.
///
/// # Examples
///
/// ```
/// use rbos_tree::{OSRBTree, Rational};
///
/// let mut tree = OSRBTree::new();
/// for (n, d) in [(3, 2), (1, 2), (5, 2), (2, 1), (7, 3), (4, 1)] {
///     tree.insert(Rational::reduce(n, d).unwrap());
/// }
///
/// assert_eq!(tree.len(), 6);
/// assert_eq!(tree.find_kth(3).unwrap().to_string(), "3/2");
///
/// tree.remove(Rational::reduce(3, 2).unwrap()).unwrap();
/// assert_eq!(tree.find_kth(3).unwrap().to_string(), "4/1");
/// ```
#[derive(Clone)]
pub struct OSRBTree {
    raw: RawOSRBTree,
}

impl OSRBTree {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::OSRBTree;
    ///
    /// let tree = OSRBTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawOSRBTree::new(),
        }
    }

    /// Returns the number of keys in the tree, duplicates counted.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the tree contains no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes all keys from the tree.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Inserts `key`. Always succeeds; duplicates are kept.
    ///
    /// # Complexity
    ///
    /// O(log n), at most two rotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{OSRBTree, Rational};
    ///
    /// let mut tree = OSRBTree::new();
    /// let half = Rational::reduce(1, 2).unwrap();
    /// tree.insert(half);
    /// tree.insert(half);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: Rational) {
        self.raw.insert(key);
    }

    /// Removes one occurrence of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if the key is not present; the tree is left
    /// exactly as it was.
    ///
    /// # Complexity
    ///
    /// O(log n), at most three rotations.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{OSRBTree, Rational};
    ///
    /// let mut tree = OSRBTree::new();
    /// let half = Rational::reduce(1, 2).unwrap();
    /// tree.insert(half);
    ///
    /// assert!(tree.remove(half).is_ok());
    /// assert!(tree.remove(half).is_err());
    /// ```
    pub fn remove(&mut self, key: Rational) -> Result<(), NotFound> {
        match self.raw.remove(&key) {
            Some(_) => Ok(()),
            None => Err(NotFound(key)),
        }
    }

    /// Returns true if the tree contains `key`.
    #[must_use]
    pub fn contains(&self, key: &Rational) -> bool {
        self.raw.contains(key)
    }

    /// Returns an iterator over the keys in sorted (component-wise) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::{OSRBTree, Rational};
    ///
    /// let tree: OSRBTree = [(2, 1), (1, 2)]
    ///     .into_iter()
    ///     .map(|(n, d)| Rational::reduce(n, d).unwrap())
    ///     .collect();
    ///
    /// let keys: Vec<String> = tree.iter().map(Rational::to_string).collect();
    /// assert_eq!(keys, ["1/2", "2/1"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.raw.iter(),
        }
    }
}

impl Default for OSRBTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OSRBTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialEq for OSRBTree {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for OSRBTree {}

impl FromIterator<Rational> for OSRBTree {
    fn from_iter<I: IntoIterator<Item = Rational>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Rational> for OSRBTree {
    fn extend<I: IntoIterator<Item = Rational>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a OSRBTree {
    type Item = &'a Rational;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An in-order iterator over the keys of an [`OSRBTree`].
///
/// This `struct` is created by the [`iter`](OSRBTree::iter) method.
pub struct Iter<'a> {
    inner: raw::Iter<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Rational;

    fn next(&mut self) -> Option<&'a Rational> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
