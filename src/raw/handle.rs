use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// An index into the node arena.
///
/// The index is stored incremented by one inside a `NonZero`, which gives
/// the compiler a zero niche: `Option<Handle>` is exactly as wide as the
/// handle itself, so the three optional links on every node cost nothing
/// extra. Test builds shrink the backing integer so the capacity bound is
/// actually reachable in a test.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// The largest addressable index; one slot is sacrificed to the niche.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// # Panics
    ///
    /// Panics if `index > Handle::MAX`.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn new(index: usize) -> Self {
        assert!(index <= Self::MAX, "arena handle index out of range");
        // The bound check above keeps `index + 1` both nonzero and in range.
        match NonZero::new(index as RawHandle + 1) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
