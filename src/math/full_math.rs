//! Full-precision multiply-divide over `U256`.
//!
//! Q64.96 arithmetic routinely forms products wider than 256 bits
//! (`liquidity * 2^96 * sqrt_price` needs up to 385 bits), so every
//! multiply-then-divide in the engine goes through [`mul_div`], which
//! widens to 512 bits for the intermediate product. Overflow is only an
//! error when the *final* quotient does not fit the target width.
//!
//! # Convention
//!
//! All division in the engine floors (rounds towards zero); callers that
//! derive amounts or liquidity therefore never report more than the exact
//! real-valued result.

use alloy_primitives::{U256, U512};

use crate::error::EngineError;

/// Computes `floor(a * b / denominator)` with a 512-bit intermediate.
///
/// # Errors
///
/// - [`EngineError::DivisionByZero`] if `denominator` is zero.
/// - [`EngineError::Overflow`] if the quotient exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use clmm_engine::math::mul_div;
///
/// // (2^255 * 6) / 2^255 has a 512-bit intermediate but a tiny result.
/// let big = U256::from(1u8) << 255;
/// assert_eq!(mul_div(big, U256::from(6u8), big), Ok(U256::from(6u8)));
/// ```
pub fn mul_div(a: U256, b: U256, denominator: U256) -> crate::error::Result<U256> {
    if denominator.is_zero() {
        return Err(EngineError::DivisionByZero);
    }
    // A 256-bit by 256-bit product always fits 512 bits.
    let product = widen(a) * widen(b);
    let quotient = product / widen(denominator);
    narrow(quotient).ok_or(EngineError::Overflow("mul_div quotient exceeds 256 bits"))
}

/// Zero-extends a `U256` into a `U512`.
pub(crate) const fn widen(value: U256) -> U512 {
    let limbs = value.as_limbs();
    U512::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3], 0, 0, 0, 0])
}

/// Truncates a `U512` back to `U256`, or `None` if the high limbs are set.
pub(crate) const fn narrow(value: U512) -> Option<U256> {
    let limbs = value.as_limbs();
    if limbs[4] | limbs[5] | limbs[6] | limbs[7] != 0 {
        return None;
    }
    Some(U256::from_limbs([limbs[0], limbs[1], limbs[2], limbs[3]]))
}

/// Converts a `U256` to `u128`.
///
/// # Errors
///
/// Returns [`EngineError::Overflow`] if the value exceeds 128 bits.
pub(crate) fn to_u128(value: U256, context: &'static str) -> crate::error::Result<u128> {
    let limbs = value.as_limbs();
    if limbs[2] | limbs[3] != 0 {
        return Err(EngineError::Overflow(context));
    }
    Ok(u128::from(limbs[0]) | (u128::from(limbs[1]) << 64))
}
