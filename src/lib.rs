//! An order-statistic multiset over reduced rational keys.
//!
//! This crate provides [`OSRBTree`], a red-black tree augmented with
//! subtree sizes, and [`Rational`], its canonical reduced key type. On top
//! of the usual multiset operations it answers order-statistic queries in
//! O(log n):
//!
//! - [`insert`](OSRBTree::insert) / [`remove`](OSRBTree::remove) -
//!   logarithmic-time mutation with duplicates allowed
//! - [`find_kth`](OSRBTree::find_kth) - the k-th smallest key (1-based),
//!   with an explicit [`OutOfRange`] error instead of a sentinel value
//!
//! # Example
//!
//! ```
//! use rbos_tree::{OSRBTree, Rational};
//!
//! let mut tree = OSRBTree::new();
//! for (n, d) in [(3, 2), (1, 2), (5, 2), (2, 1), (7, 3), (4, 1)] {
//!     tree.insert(Rational::reduce(n, d).unwrap());
//! }
//!
//! // The third-smallest key under the component-wise ordering.
//! assert_eq!(tree.find_kth(3).unwrap().to_string(), "3/2");
//!
//! tree.remove(Rational::reduce(3, 2).unwrap()).unwrap();
//! assert_eq!(tree.find_kth(3).unwrap().to_string(), "4/1");
//! ```
//!
//! # Ordering
//!
//! Keys are compared component-wise: numerator first, then denominator.
//! That order is total over reduced pairs but is **not** numeric magnitude
//! ordering (`1/2` sorts before `1/3`); rank queries are defined against
//! it. See [`Rational`] for details.
//!
//! # Features
//!
//! - **`no_std` compatible** - only requires `alloc`
//! - **Arena-backed** - nodes live in a slot arena and link by index, so
//!   parent back-references carry no ownership
//! - **O(log n) rank queries** - via subtree size augmentation maintained
//!   through every rotation and splice

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod osrb_tree;
pub mod rational;

pub use error::{InvalidKey, NotFound, OutOfRange};
pub use osrb_tree::OSRBTree;
pub use rational::Rational;
