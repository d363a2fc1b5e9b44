//! Trade direction flag.

use core::fmt;

/// The direction of a swap between the two pool tokens.
///
/// Mirrors the conventional `zero_for_one` boolean: selling token0 for
/// token1 pushes the price down, selling token1 for token0 pushes it up.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::SwapDirection;
///
/// let dir = SwapDirection::from_zero_for_one(true);
/// assert_eq!(dir, SwapDirection::ZeroForOne);
/// assert!(dir.lowers_price());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Selling token0 for token1; the sqrt-price never increases.
    ZeroForOne,
    /// Selling token1 for token0; the sqrt-price never decreases.
    OneForZero,
}

impl SwapDirection {
    /// Builds a direction from the conventional `zero_for_one` flag.
    #[must_use]
    pub const fn from_zero_for_one(zero_for_one: bool) -> Self {
        if zero_for_one {
            Self::ZeroForOne
        } else {
            Self::OneForZero
        }
    }

    /// Returns `true` for [`ZeroForOne`](Self::ZeroForOne).
    #[must_use]
    pub const fn is_zero_for_one(&self) -> bool {
        matches!(self, Self::ZeroForOne)
    }

    /// Returns `true` if a swap in this direction moves the price down.
    #[must_use]
    pub const fn lowers_price(&self) -> bool {
        self.is_zero_for_one()
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::ZeroForOne => Self::OneForZero,
            Self::OneForZero => Self::ZeroForOne,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => write!(f, "0->1"),
            Self::OneForZero => write!(f, "1->0"),
        }
    }
}
