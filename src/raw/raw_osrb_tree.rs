use alloc::vec::Vec;
use core::cmp::Ordering;
use core::iter::FusedIterator;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};
use super::size::Size;
use crate::rational::Rational;

/// The core augmented red-black tree backing `OSRBTree`.
///
/// Nodes live in an [`Arena`] and link to each other by [`Handle`].
/// `left`/`right` are the structural links; `parent` is a non-owning
/// back-reference that exists only so the fixup loops can walk upward
/// without keeping an explicit descent path.
///
/// Between operations every node `n` satisfies
/// `size(n) == 1 + size(n.left) + size(n.right)` alongside the classic
/// red-black properties (no red child of a red node, uniform black-height,
/// black root). Rank queries lean on the maintained sizes, so both
/// rotations and every splice keep them current.
#[derive(Clone)]
pub(crate) struct RawOSRBTree {
    nodes: Arena<Node>,
    root: Option<Handle>,
    len: usize,
}

impl RawOSRBTree {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` keys.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of keys in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Removes all keys from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    #[inline]
    fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node {
        self.nodes.get_mut(handle)
    }

    /// Color of a possibly-absent child. Absence counts as black.
    #[inline]
    fn color(&self, handle: Option<Handle>) -> Color {
        handle.map_or(Color::Black, |h| self.node(h).color())
    }

    /// Size of a possibly-absent subtree.
    #[inline]
    fn size_of(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.node(h).size().to_usize())
    }

    /// Recomputes a node's size from its children.
    fn update_size(&mut self, handle: Handle) {
        let left = self.size_of(self.node(handle).left());
        let right = self.size_of(self.node(handle).right());
        self.node_mut(handle).set_size(Size::from_usize(1 + left + right));
    }

    /// Adds one to the size of every ancestor of `handle`.
    fn increment_sizes_above(&mut self, handle: Handle) {
        let mut current = self.node(handle).parent();
        while let Some(ancestor) = current {
            let size = self.node(ancestor).size().to_usize();
            self.node_mut(ancestor).set_size(Size::from_usize(size + 1));
            current = self.node(ancestor).parent();
        }
    }

    /// Subtracts one from the size of every ancestor of `handle`.
    fn decrement_sizes_above(&mut self, handle: Handle) {
        let mut current = self.node(handle).parent();
        while let Some(ancestor) = current {
            let size = self.node(ancestor).size().to_usize();
            self.node_mut(ancestor).set_size(Size::from_usize(size - 1));
            current = self.node(ancestor).parent();
        }
    }

    /// Promotes `x`'s right child into `x`'s position.
    ///
    /// Rotation moves whole subtrees between the two nodes, so both sizes
    /// are recomputed afterwards, demoted node first.
    fn rotate_left(&mut self, x: Handle) {
        let y = self.node(x).right().expect("`rotate_left()` - no right child to promote!");

        // y's left subtree crosses over to x's right.
        let middle = self.node(y).left();
        self.node_mut(x).set_right(middle);
        if let Some(middle) = middle {
            self.node_mut(middle).set_parent(Some(x));
        }

        // y takes x's place under x's parent.
        let parent = self.node(x).parent();
        self.node_mut(y).set_parent(parent);
        match parent {
            None => self.root = Some(y),
            Some(parent) => {
                if self.node(parent).left() == Some(x) {
                    self.node_mut(parent).set_left(Some(y));
                } else {
                    self.node_mut(parent).set_right(Some(y));
                }
            }
        }

        self.node_mut(y).set_left(Some(x));
        self.node_mut(x).set_parent(Some(y));

        self.update_size(x);
        self.update_size(y);
    }

    /// Promotes `x`'s left child into `x`'s position. Mirror of
    /// [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, x: Handle) {
        let y = self.node(x).left().expect("`rotate_right()` - no left child to promote!");

        let middle = self.node(y).right();
        self.node_mut(x).set_left(middle);
        if let Some(middle) = middle {
            self.node_mut(middle).set_parent(Some(x));
        }

        let parent = self.node(x).parent();
        self.node_mut(y).set_parent(parent);
        match parent {
            None => self.root = Some(y),
            Some(parent) => {
                if self.node(parent).right() == Some(x) {
                    self.node_mut(parent).set_right(Some(y));
                } else {
                    self.node_mut(parent).set_left(Some(y));
                }
            }
        }

        self.node_mut(y).set_right(Some(x));
        self.node_mut(x).set_parent(Some(y));

        self.update_size(x);
        self.update_size(y);
    }

    /// Inserts `key`, keeping duplicates. Equal keys route right, so a new
    /// duplicate lands to the right of the ones already present.
    pub(crate) fn insert(&mut self, key: Rational) {
        let z = self.nodes.alloc(Node::new(key));

        // Ordered descent to the attachment point.
        let mut parent = None;
        let mut current = self.root;
        while let Some(handle) = current {
            parent = Some(handle);
            current = if key < *self.node(handle).key() {
                self.node(handle).left()
            } else {
                self.node(handle).right()
            };
        }

        self.node_mut(z).set_parent(parent);
        match parent {
            None => self.root = Some(z),
            Some(parent) => {
                if key < *self.node(parent).key() {
                    self.node_mut(parent).set_left(Some(z));
                } else {
                    self.node_mut(parent).set_right(Some(z));
                }
            }
        }

        self.len += 1;
        // Every ancestor's subtree just gained the new leaf; the sizes must
        // be right before fixup rotations recompute from them.
        self.increment_sizes_above(z);
        self.fix_insert(z);
    }

    /// Restores the red-black properties after inserting the red leaf `z`.
    ///
    /// Iterative: a red uncle pushes the violation two levels up; a black
    /// (or absent) uncle is resolved with at most two rotations and ends
    /// the loop.
    fn fix_insert(&mut self, mut z: Handle) {
        while let Some(parent) = self.node(z).parent() {
            if self.node(parent).color() == Color::Black {
                break;
            }
            // The root is black, so a red parent always has a parent.
            let grandparent = self
                .node(parent)
                .parent()
                .expect("`fix_insert()` - red parent has no grandparent!");

            if Some(parent) == self.node(grandparent).left() {
                match self.node(grandparent).right() {
                    Some(uncle) if self.node(uncle).color() == Color::Red => {
                        // Both children red: push the redness up.
                        self.node_mut(parent).set_color(Color::Black);
                        self.node_mut(uncle).set_color(Color::Black);
                        self.node_mut(grandparent).set_color(Color::Red);
                        z = grandparent;
                    }
                    _ => {
                        if Some(z) == self.node(parent).right() {
                            // Inner grandchild: rotate it outward first.
                            z = parent;
                            self.rotate_left(z);
                        }
                        let parent = self.node(z).parent().expect("`fix_insert()` - node lost its parent!");
                        let grandparent = self
                            .node(parent)
                            .parent()
                            .expect("`fix_insert()` - red parent has no grandparent!");
                        self.node_mut(parent).set_color(Color::Black);
                        self.node_mut(grandparent).set_color(Color::Red);
                        self.rotate_right(grandparent);
                    }
                }
            } else {
                match self.node(grandparent).left() {
                    Some(uncle) if self.node(uncle).color() == Color::Red => {
                        self.node_mut(parent).set_color(Color::Black);
                        self.node_mut(uncle).set_color(Color::Black);
                        self.node_mut(grandparent).set_color(Color::Red);
                        z = grandparent;
                    }
                    _ => {
                        if Some(z) == self.node(parent).left() {
                            z = parent;
                            self.rotate_right(z);
                        }
                        let parent = self.node(z).parent().expect("`fix_insert()` - node lost its parent!");
                        let grandparent = self
                            .node(parent)
                            .parent()
                            .expect("`fix_insert()` - red parent has no grandparent!");
                        self.node_mut(parent).set_color(Color::Black);
                        self.node_mut(grandparent).set_color(Color::Red);
                        self.rotate_left(grandparent);
                    }
                }
            }
        }

        if let Some(root) = self.root {
            self.node_mut(root).set_color(Color::Black);
        }
    }

    /// Finds a node holding `key`, if any. With duplicates present this is
    /// whichever equal node the ordered descent reaches first.
    fn search(&self, key: &Rational) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            current = match key.cmp(self.node(handle).key()) {
                Ordering::Less => self.node(handle).left(),
                Ordering::Greater => self.node(handle).right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns true if the tree contains `key`.
    pub(crate) fn contains(&self, key: &Rational) -> bool {
        self.search(key).is_some()
    }

    /// Removes one occurrence of `key`, returning it, or `None` if the key
    /// is absent (in which case the tree is untouched).
    pub(crate) fn remove(&mut self, key: &Rational) -> Option<Rational> {
        let z = self.search(key)?;
        Some(self.remove_node(z))
    }

    /// Splices out the node `z` and rebalances.
    fn remove_node(&mut self, z: Handle) -> Rational {
        // y is the node physically unlinked from its slot; x (possibly an
        // absent child, tracked with its parent) takes over that position
        // and carries the black deficiency if y was black.
        let y_color;
        let x: Option<Handle>;
        let x_parent: Option<Handle>;

        if self.node(z).left().is_none() {
            y_color = self.node(z).color();
            x = self.node(z).right();
            x_parent = self.node(z).parent();
            self.decrement_sizes_above(z);
            self.transplant(z, x);
        } else if self.node(z).right().is_none() {
            y_color = self.node(z).color();
            x = self.node(z).left();
            x_parent = self.node(z).parent();
            self.decrement_sizes_above(z);
            self.transplant(z, x);
        } else {
            // Two children: the in-order successor y is spliced out of its
            // own position and moved into z's, adopting z's color, children
            // and (already decremented) subtree size.
            let right = self.node(z).right().expect("`remove_node()` - right child vanished!");
            let y = self.minimum(right);
            y_color = self.node(y).color();
            x = self.node(y).right();

            // Only y leaves its original slot, so its ancestors (z included)
            // each lose exactly one node.
            self.decrement_sizes_above(y);

            if self.node(y).parent() == Some(z) {
                x_parent = Some(y);
            } else {
                x_parent = self.node(y).parent();
                self.transplant(y, x);
                let z_right = self.node(z).right();
                self.node_mut(y).set_right(z_right);
                if let Some(z_right) = z_right {
                    self.node_mut(z_right).set_parent(Some(y));
                }
            }

            self.transplant(z, Some(y));
            let z_left = self.node(z).left();
            self.node_mut(y).set_left(z_left);
            if let Some(z_left) = z_left {
                self.node_mut(z_left).set_parent(Some(y));
            }
            let z_color = self.node(z).color();
            self.node_mut(y).set_color(z_color);
            let z_size = self.node(z).size();
            self.node_mut(y).set_size(z_size);
        }

        self.len -= 1;
        let removed = self.nodes.take(z);

        if y_color == Color::Black {
            self.fix_remove(x, x_parent);
        }

        removed.into_key()
    }

    /// Restores the red-black properties after a black node was unlinked.
    ///
    /// `x` occupies the vacated position (or is the absent child standing
    /// in for it, hence the explicit `parent`). Iterative: the black
    /// deficiency either moves up or is resolved with at most three
    /// rotations.
    fn fix_remove(&mut self, mut x: Option<Handle>, mut parent: Option<Handle>) {
        while x != self.root && self.color(x) == Color::Black {
            let p = parent.expect("`fix_remove()` - deficient non-root node has no parent!");

            if x == self.node(p).left() {
                let mut w = self
                    .node(p)
                    .right()
                    .expect("`fix_remove()` - black-deficient node has no sibling!");

                if self.node(w).color() == Color::Red {
                    // Red sibling: rotate it up to expose a black one.
                    self.node_mut(w).set_color(Color::Black);
                    self.node_mut(p).set_color(Color::Red);
                    self.rotate_left(p);
                    w = self.node(p).right().expect("`fix_remove()` - sibling vanished after rotation!");
                }

                if self.color(self.node(w).left()) == Color::Black
                    && self.color(self.node(w).right()) == Color::Black
                {
                    // Both nephews black: recolor and push the deficiency up.
                    self.node_mut(w).set_color(Color::Red);
                    x = Some(p);
                    parent = self.node(p).parent();
                } else {
                    if self.color(self.node(w).right()) == Color::Black {
                        // Expose a red far nephew first.
                        if let Some(near) = self.node(w).left() {
                            self.node_mut(near).set_color(Color::Black);
                        }
                        self.node_mut(w).set_color(Color::Red);
                        self.rotate_right(w);
                        w = self.node(p).right().expect("`fix_remove()` - sibling vanished after rotation!");
                    }
                    let p_color = self.node(p).color();
                    self.node_mut(w).set_color(p_color);
                    self.node_mut(p).set_color(Color::Black);
                    if let Some(far) = self.node(w).right() {
                        self.node_mut(far).set_color(Color::Black);
                    }
                    self.rotate_left(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut w = self
                    .node(p)
                    .left()
                    .expect("`fix_remove()` - black-deficient node has no sibling!");

                if self.node(w).color() == Color::Red {
                    self.node_mut(w).set_color(Color::Black);
                    self.node_mut(p).set_color(Color::Red);
                    self.rotate_right(p);
                    w = self.node(p).left().expect("`fix_remove()` - sibling vanished after rotation!");
                }

                if self.color(self.node(w).right()) == Color::Black
                    && self.color(self.node(w).left()) == Color::Black
                {
                    self.node_mut(w).set_color(Color::Red);
                    x = Some(p);
                    parent = self.node(p).parent();
                } else {
                    if self.color(self.node(w).left()) == Color::Black {
                        if let Some(near) = self.node(w).right() {
                            self.node_mut(near).set_color(Color::Black);
                        }
                        self.node_mut(w).set_color(Color::Red);
                        self.rotate_left(w);
                        w = self.node(p).left().expect("`fix_remove()` - sibling vanished after rotation!");
                    }
                    let p_color = self.node(p).color();
                    self.node_mut(w).set_color(p_color);
                    self.node_mut(p).set_color(Color::Black);
                    if let Some(far) = self.node(w).left() {
                        self.node_mut(far).set_color(Color::Black);
                    }
                    self.rotate_right(p);
                    x = self.root;
                    parent = None;
                }
            }
        }

        if let Some(x) = x {
            self.node_mut(x).set_color(Color::Black);
        }
    }

    /// Replaces the subtree rooted at `u` with the one rooted at `v` in
    /// `u`'s parent. Does not touch `u`'s own children.
    fn transplant(&mut self, u: Handle, v: Option<Handle>) {
        let parent = self.node(u).parent();
        match parent {
            None => self.root = v,
            Some(parent) => {
                if self.node(parent).left() == Some(u) {
                    self.node_mut(parent).set_left(v);
                } else {
                    self.node_mut(parent).set_right(v);
                }
            }
        }
        if let Some(v) = v {
            self.node_mut(v).set_parent(parent);
        }
    }

    /// Leftmost node of the subtree rooted at `handle`.
    fn minimum(&self, handle: Handle) -> Handle {
        let mut current = handle;
        while let Some(left) = self.node(current).left() {
            current = left;
        }
        current
    }

    /// Returns the `k`-th smallest key (1-based), or `None` when `k` is
    /// outside `1..=len`.
    ///
    /// Descends by the maintained subtree sizes; presence of a child says
    /// nothing about how many keys hang below it.
    pub(crate) fn find_kth(&self, k: usize) -> Option<&Rational> {
        if k == 0 || k > self.len {
            return None;
        }

        let mut remaining = k;
        let mut current = self.root?;
        loop {
            let left = self.node(current).left();
            let left_size = self.size_of(left);
            if remaining == left_size + 1 {
                return Some(self.node(current).key());
            }
            if remaining <= left_size {
                current = left.expect("`find_kth()` - rank descends into an absent left subtree!");
            } else {
                remaining -= left_size + 1;
                current = self
                    .node(current)
                    .right()
                    .expect("`find_kth()` - rank descends into an absent right subtree!");
            }
        }
    }

    /// Returns an in-order iterator over the keys.
    pub(crate) fn iter(&self) -> Iter<'_> {
        let mut stack = Vec::new();
        let mut current = self.root;
        while let Some(handle) = current {
            stack.push(handle);
            current = self.node(handle).left();
        }
        Iter {
            tree: self,
            stack,
            remaining: self.len,
        }
    }
}

/// In-order iterator over the keys of a [`RawOSRBTree`].
///
/// Holds the left spine of the unvisited part of the tree, so the stack is
/// O(log n) deep.
pub(crate) struct Iter<'a> {
    tree: &'a RawOSRBTree,
    stack: Vec<Handle>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Rational;

    fn next(&mut self) -> Option<&'a Rational> {
        let handle = self.stack.pop()?;
        let node = self.tree.node(handle);

        let mut current = node.right();
        while let Some(child) = current {
            self.stack.push(child);
            current = self.tree.node(child).left();
        }

        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
