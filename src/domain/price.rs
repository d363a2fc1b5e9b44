//! Real-valued exchange rate between the two pool tokens.

use core::fmt;

use crate::error::EngineError;

/// Exchange rate as a dimensionless `token1 / token0` ratio.
///
/// Wraps an `f64` value that must be finite and non-negative. A `Price` is
/// the human-readable reading of a [`SqrtPriceX96`](super::SqrtPriceX96):
/// `price = (sqrt_price / 2^96)^2`. Conversions to tick or sqrt-price
/// additionally reject zero, where the logarithm and the Q64.96 window are
/// undefined.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::Price;
///
/// let price = Price::new(5_000.0);
/// assert!(price.is_ok());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] if the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns the square root of this price.
    ///
    /// Non-negative input guarantees a finite, non-negative root, so the
    /// result is constructed directly.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        Self(self.0.sqrt())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
