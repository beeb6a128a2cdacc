use super::handle::Handle;

/// The size of a subtree, in nodes.
///
/// Backed by a [`Handle`] so that counts are bounded by the arena capacity
/// and `Option<Size>` stays niche-packed like `Option<Handle>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Size(Handle);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX;
    pub(crate) const ONE: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        Self(Handle::new(size))
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.index()
    }
}
