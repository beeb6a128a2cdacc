use core::fmt;

use crate::error::InvalidKey;

/// A rational number in canonical reduced form.
///
/// Every `Rational` satisfies `gcd(|numerator|, denominator) == 1` and
/// `denominator > 0`; the only way to construct one is [`Rational::reduce`],
/// which establishes both. The sign lives on the numerator.
///
/// # Ordering
///
/// Comparison is **component-wise**: numerators first, then denominators.
/// This is the total order the tree is defined against and it is *not*
/// numeric magnitude ordering: `1/2` sorts before `1/3` because the
/// numerators tie and `2 < 3`. Rank queries on [`OSRBTree`] answer positions
/// in this order.
///
/// [`OSRBTree`]: crate::OSRBTree
///
/// # Examples
///
/// ```
/// use rbos_tree::Rational;
///
/// let half = Rational::reduce(4, 8).unwrap();
/// assert_eq!(half.numerator(), 1);
/// assert_eq!(half.denominator(), 2);
/// assert_eq!(half.to_string(), "1/2");
/// ```
// Field order matters: the derived `Ord` is lexicographic over the fields,
// which is exactly the numerator-major comparator.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Reduces `numerator / denominator` to lowest terms.
    ///
    /// The sign is normalized onto the numerator, so the stored denominator
    /// is always positive. `0/d` reduces to `0/1`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey`] if `denominator` is zero, or if the reduced
    /// key cannot be represented. The latter only happens at the
    /// `i64::MIN` boundary, where a reduced component of magnitude `2^63`
    /// would have to land on the positive side (for example `1 / i64::MIN`,
    /// whose canonical form needs denominator `2^63`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rbos_tree::Rational;
    ///
    /// assert_eq!(Rational::reduce(6, -4).unwrap().to_string(), "-3/2");
    /// assert!(Rational::reduce(1, 0).is_err());
    /// ```
    pub fn reduce(numerator: i64, denominator: i64) -> Result<Self, InvalidKey> {
        if denominator == 0 {
            return Err(InvalidKey);
        }

        // Reduce on unsigned magnitudes and reapply the sign at the end;
        // negating `i64::MIN` up front would overflow.
        let negative = (numerator < 0) != (denominator < 0);
        // gcd(0, d) == d, so 0/d collapses to 0/1.
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        let numerator = numerator.unsigned_abs() / divisor;
        let denominator = denominator.unsigned_abs() / divisor;

        let denominator = i64::try_from(denominator).map_err(|_| InvalidKey)?;
        let numerator = if negative {
            // A magnitude of 2^63 still fits on the negative side.
            0i64.checked_sub_unsigned(numerator).ok_or(InvalidKey)?
        } else {
            i64::try_from(numerator).map_err(|_| InvalidKey)?
        };
        Ok(Self { numerator, denominator })
    }

    /// Returns the (signed) numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Euclid's algorithm on magnitudes.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
