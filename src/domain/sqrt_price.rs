//! Q64.96 fixed-point square-root price.

use core::fmt;

use alloy_primitives::U256;

use super::Price;
use crate::error::EngineError;

/// Smallest representable sqrt-price: the converter's output at tick
/// `-887272`.
const MIN_SQRT_PRICE: U256 = U256::from_limbs([4_295_128_739, 0, 0, 0]);

/// Largest representable sqrt-price: the converter's output at tick
/// `887272` (`0xfffd8963efd1fc6a506488495d951d5263988d26`).
const MAX_SQRT_PRICE: U256 = U256::from_limbs([
    0x5d95_1d52_6398_8d26,
    0xefd1_fc6a_5064_8849,
    0xfffd_8963,
    0,
]);

/// The Q64.96 scale factor, `2^96`.
const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// `2^64` as `f64`, for limb-wise float conversion.
const LIMB_BASE: f64 = 18_446_744_073_709_551_616.0;

/// A square-root price in Q64.96 fixed-point encoding.
///
/// Encodes `sqrt(price)` scaled by `2^96` as a wide unsigned integer.
/// Values at the tick extremes need about 160 bits, so the backing type is
/// [`U256`]. The constructor enforces the representable window
/// [`MIN`](Self::MIN)`..=`[`MAX`](Self::MAX) — the converter's output at
/// the minimum and maximum tick — which also makes a zero sqrt-price
/// unrepresentable, so range arithmetic can never divide by a zero bound.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::SqrtPriceX96;
///
/// // Price 1.0 encodes as exactly 2^96.
/// let one = SqrtPriceX96::ONE;
/// assert_eq!(one.get(), SqrtPriceX96::SCALE);
/// assert!((one.to_price().get() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceX96(U256);

impl SqrtPriceX96 {
    /// Smallest representable sqrt-price (at tick `-887272`).
    pub const MIN: Self = Self(MIN_SQRT_PRICE);

    /// Largest representable sqrt-price (at tick `887272`).
    pub const MAX: Self = Self(MAX_SQRT_PRICE);

    /// The encoding of price 1.0: `sqrt(1) * 2^96`.
    pub const ONE: Self = Self(Q96);

    /// The Q64.96 scale factor, `2^96`.
    pub const SCALE: U256 = Q96;

    /// Creates a new `SqrtPriceX96` with window validation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPrice`] if `value` is outside the
    /// representable window `[MIN, MAX]`.
    pub fn new(value: U256) -> crate::error::Result<Self> {
        if value < MIN_SQRT_PRICE || value > MAX_SQRT_PRICE {
            return Err(EngineError::InvalidPrice(
                "sqrt price outside representable Q64.96 window",
            ));
        }
        Ok(Self(value))
    }

    /// Constructs without the window check.
    ///
    /// Callers must guarantee `value` lies inside `[MIN, MAX]`; used by the
    /// tick converter whose ladder output is bounded by construction.
    pub(crate) const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Decodes this sqrt-price into a real-valued [`Price`]:
    /// `(value / 2^96)^2`.
    ///
    /// The conversion goes through `f64` and carries the usual 53-bit
    /// mantissa precision; exact math stays in the Q64.96 domain.
    #[must_use]
    pub fn to_price(&self) -> Price {
        let ratio = u256_to_f64(self.0) / u256_to_f64(Q96);
        // Finite and non-negative for every in-window value.
        Price::new(ratio * ratio).unwrap_or(Price::ZERO)
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Approximate limb-wise conversion of a `U256` to `f64`.
#[allow(clippy::cast_precision_loss)]
fn u256_to_f64(value: U256) -> f64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0.0, |acc, &limb| acc * LIMB_BASE + limb as f64)
}
