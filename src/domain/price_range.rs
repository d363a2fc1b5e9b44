//! Canonicalized sqrt-price range.

use core::fmt;

use alloy_primitives::U256;

use super::SqrtPriceX96;
use crate::error::EngineError;

/// An ordered, non-empty sqrt-price range.
///
/// This type is the canonicalization step of every range-taking operation:
/// the constructor accepts its two bounds in either order, swaps them so
/// that `lower < upper`, and rejects a zero-width range. Downstream
/// arithmetic can therefore assume `upper - lower > 0` and never reorders
/// bounds again.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{PriceRange, SqrtPriceX96};
///
/// // Bounds given in reverse order are swapped, not rejected.
/// let range = PriceRange::new(SqrtPriceX96::MAX, SqrtPriceX96::MIN).unwrap();
/// assert_eq!(range.lower(), SqrtPriceX96::MIN);
/// assert_eq!(range.upper(), SqrtPriceX96::MAX);
///
/// // A zero-width range is degenerate.
/// assert!(PriceRange::new(SqrtPriceX96::ONE, SqrtPriceX96::ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    lower: SqrtPriceX96,
    upper: SqrtPriceX96,
}

impl PriceRange {
    /// Creates a canonicalized range from two bounds in either order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] if the bounds are equal
    /// (zero-width range, degenerate for every range operation).
    pub fn new(a: SqrtPriceX96, b: SqrtPriceX96) -> crate::error::Result<Self> {
        if a == b {
            return Err(EngineError::InvalidRange(
                "range bounds equal after canonicalization",
            ));
        }
        let (lower, upper) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> SqrtPriceX96 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> SqrtPriceX96 {
        self.upper
    }

    /// Returns the range width `upper - lower` as a raw `U256`.
    ///
    /// Strictly positive by construction.
    #[must_use]
    pub fn width(&self) -> U256 {
        self.upper.get() - self.lower.get()
    }

    /// Returns `true` if `sqrt_price` lies within `[lower, upper)`.
    #[must_use]
    pub fn contains(&self, sqrt_price: SqrtPriceX96) -> bool {
        self.lower <= sqrt_price && sqrt_price < self.upper
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriceRange[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sqrt_price(multiple: u8) -> SqrtPriceX96 {
        let Ok(p) = SqrtPriceX96::new(SqrtPriceX96::SCALE * U256::from(multiple)) else {
            panic!("expected in-window sqrt price");
        };
        p
    }

    // -- Canonicalization ----------------------------------------------------

    #[test]
    fn ordered_bounds_kept() {
        let Ok(r) = PriceRange::new(sqrt_price(1), sqrt_price(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.lower(), sqrt_price(1));
        assert_eq!(r.upper(), sqrt_price(2));
    }

    #[test]
    fn reversed_bounds_swapped() {
        let Ok(r) = PriceRange::new(sqrt_price(2), sqrt_price(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.lower(), sqrt_price(1));
        assert_eq!(r.upper(), sqrt_price(2));
    }

    #[test]
    fn canonicalization_is_symmetric() {
        let (Ok(a), Ok(b)) = (
            PriceRange::new(sqrt_price(3), sqrt_price(5)),
            PriceRange::new(sqrt_price(5), sqrt_price(3)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(a, b);
    }

    #[test]
    fn equal_bounds_rejected() {
        let Err(e) = PriceRange::new(sqrt_price(2), sqrt_price(2)) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            EngineError::InvalidRange("range bounds equal after canonicalization")
        );
    }

    // -- width ---------------------------------------------------------------

    #[test]
    fn width_positive() {
        let Ok(r) = PriceRange::new(sqrt_price(1), sqrt_price(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(r.width(), SqrtPriceX96::SCALE * U256::from(2u8));
    }

    #[test]
    fn width_independent_of_argument_order() {
        let (Ok(a), Ok(b)) = (
            PriceRange::new(sqrt_price(1), sqrt_price(4)),
            PriceRange::new(sqrt_price(4), sqrt_price(1)),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(a.width(), b.width());
    }

    #[test]
    fn full_window_width() {
        let Ok(r) = PriceRange::new(SqrtPriceX96::MIN, SqrtPriceX96::MAX) else {
            panic!("expected Ok");
        };
        assert_eq!(r.width(), SqrtPriceX96::MAX.get() - SqrtPriceX96::MIN.get());
    }

    // -- contains ------------------------------------------------------------

    #[test]
    fn contains_lower_inclusive_upper_exclusive() {
        let Ok(r) = PriceRange::new(sqrt_price(1), sqrt_price(3)) else {
            panic!("expected Ok");
        };
        assert!(r.contains(sqrt_price(1)));
        assert!(r.contains(sqrt_price(2)));
        assert!(!r.contains(sqrt_price(3)));
        assert!(!r.contains(SqrtPriceX96::MIN));
    }

    // -- Display -------------------------------------------------------------

    #[test]
    fn display_shows_bounds() {
        let Ok(r) = PriceRange::new(SqrtPriceX96::MIN, SqrtPriceX96::ONE) else {
            panic!("expected Ok");
        };
        let shown = format!("{r}");
        assert!(shown.starts_with("PriceRange[4295128739, "));
    }
}
