use thiserror::Error;

use crate::rational::Rational;

/// A would-be key could not be reduced, either because its denominator was
/// zero or because the reduced form is unrepresentable (a component of
/// magnitude `2^63` that would have to be positive).
///
/// Returned by [`Rational::reduce`](crate::Rational::reduce).
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("invalid rational key: zero denominator or unrepresentable reduction")]
pub struct InvalidKey;

/// The key handed to [`OSRBTree::remove`](crate::OSRBTree::remove) is not in
/// the tree. The tree is left untouched.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("key {0} not found")]
pub struct NotFound(pub Rational);

/// A rank query outside the valid domain `1..=len`.
///
/// Returned by [`OSRBTree::find_kth`](crate::OSRBTree::find_kth); an
/// out-of-range rank is always reported explicitly, never mapped to a
/// sentinel key.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("rank {rank} is outside 1..={len}")]
pub struct OutOfRange {
    /// The requested 1-based rank.
    pub rank: usize,
    /// The number of elements in the tree at the time of the query.
    pub len: usize,
}
