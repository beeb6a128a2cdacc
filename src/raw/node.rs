use super::handle::Handle;
use super::size::Size;
use crate::rational::Rational;

/// Node color for red-black balancing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A red-black tree node, augmented with its subtree size.
///
/// `left`/`right` are the structural links; `parent` is a back-reference
/// used only while walking up during rebalancing and owns nothing; the
/// arena owns every node.
#[derive(Clone)]
pub(crate) struct Node {
    key: Rational,
    color: Color,
    // Nodes in the subtree rooted here, this node included.
    size: Size,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl Node {
    /// Creates a detached node: a red leaf of size one, ready to attach.
    pub(crate) const fn new(key: Rational) -> Self {
        Self {
            key,
            color: Color::Red,
            size: Size::ONE,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &Rational {
        &self.key
    }

    pub(crate) fn into_key(self) -> Rational {
        self.key
    }

    #[inline]
    pub(crate) const fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) const fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }
}
