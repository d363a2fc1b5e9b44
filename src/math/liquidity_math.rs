//! Liquidity and token-amount derivations for a bounded position.
//!
//! The two directions of the position arithmetic:
//!
//! - deposits to depth: [`liquidity_from_amount0`],
//!   [`liquidity_from_amount1`], and their combination
//!   [`liquidity_from_amounts`];
//! - depth to deposits: [`amount0_from_liquidity`] and
//!   [`amount1_from_liquidity`].
//!
//! Every function canonicalizes its two sqrt-price bounds through
//! [`PriceRange`] at entry (bounds may arrive in either order; equal
//! bounds are rejected) and floors every division, so derived values
//! never exceed the exact real-valued result.

use alloy_primitives::U256;

use crate::domain::{Amount, Liquidity, PriceRange, SqrtPriceX96};
use crate::error::EngineError;

use super::full_math::{mul_div, to_u128};

/// Derives the liquidity a token0 deposit supports over a price range:
/// `amount0 * (lower * upper / 2^96) / (upper - lower)`.
///
/// # Errors
///
/// - [`EngineError::InvalidRange`] if the bounds are equal.
/// - [`EngineError::Overflow`] if the result exceeds `u128`.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{Amount, SqrtPriceX96};
/// use clmm_engine::math::liquidity_from_amount0;
///
/// let l = liquidity_from_amount0(
///     Amount::new(1_000_000),
///     SqrtPriceX96::ONE,
///     SqrtPriceX96::MAX,
/// );
/// assert!(l.is_ok());
/// ```
pub fn liquidity_from_amount0(
    amount0: Amount,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> crate::error::Result<Liquidity> {
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b)?;
    let geometric_term = mul_div(
        range.lower().get(),
        range.upper().get(),
        SqrtPriceX96::SCALE,
    )?;
    let liquidity = mul_div(U256::from(amount0.get()), geometric_term, range.width())?;
    Ok(Liquidity::new(to_u128(
        liquidity,
        "liquidity from amount0 exceeds u128",
    )?))
}

/// Derives the liquidity a token1 deposit supports over a price range:
/// `amount1 * 2^96 / (upper - lower)`.
///
/// # Errors
///
/// - [`EngineError::InvalidRange`] if the bounds are equal.
/// - [`EngineError::Overflow`] if the result exceeds `u128`.
pub fn liquidity_from_amount1(
    amount1: Amount,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> crate::error::Result<Liquidity> {
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b)?;
    let liquidity = mul_div(
        U256::from(amount1.get()),
        SqrtPriceX96::SCALE,
        range.width(),
    )?;
    Ok(Liquidity::new(to_u128(
        liquidity,
        "liquidity from amount1 exceeds u128",
    )?))
}

/// Derives the pool liquidity a two-token deposit supports at the current
/// price within `[lower, upper]`.
///
/// Computes the token0 constraint over `(current, upper)` and the token1
/// constraint over `(current, lower)`, and returns the smaller: the
/// position can only supply as much liquidity as the scarcer deposit
/// backs. A zero result is returned as-is — the failure surfaces as
/// [`ZeroLiquidity`](EngineError::ZeroLiquidity) from whichever derivation
/// or quote consumes it, never as a silent zero amount.
///
/// # Errors
///
/// - [`EngineError::InvalidRange`] if `current` equals either bound.
/// - [`EngineError::Overflow`] if either constraint exceeds `u128`.
pub fn liquidity_from_amounts(
    amount0: Amount,
    amount1: Amount,
    sqrt_price_current: SqrtPriceX96,
    sqrt_price_lower: SqrtPriceX96,
    sqrt_price_upper: SqrtPriceX96,
) -> crate::error::Result<Liquidity> {
    let liquidity0 = liquidity_from_amount0(amount0, sqrt_price_current, sqrt_price_upper)?;
    let liquidity1 = liquidity_from_amount1(amount1, sqrt_price_current, sqrt_price_lower)?;
    Ok(liquidity0.min(liquidity1))
}

/// Derives the token0 amount a position holds over a price range:
/// `floor(liquidity * 2^96 * (upper - lower) / upper / lower)`.
///
/// # Errors
///
/// - [`EngineError::ZeroLiquidity`] if `liquidity` is zero.
/// - [`EngineError::InvalidRange`] if the bounds are equal.
/// - [`EngineError::Overflow`] if the result exceeds `u128`.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{Liquidity, SqrtPriceX96};
/// use clmm_engine::math::amount0_from_liquidity;
///
/// // Argument order does not matter: bounds are canonicalized.
/// let l = Liquidity::new(1u128 << 100);
/// let a = amount0_from_liquidity(l, SqrtPriceX96::ONE, SqrtPriceX96::MAX);
/// let b = amount0_from_liquidity(l, SqrtPriceX96::MAX, SqrtPriceX96::ONE);
/// assert_eq!(a, b);
/// ```
pub fn amount0_from_liquidity(
    liquidity: Liquidity,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> crate::error::Result<Amount> {
    if liquidity.is_zero() {
        return Err(EngineError::ZeroLiquidity(
            "amount derivation requires positive liquidity",
        ));
    }
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b)?;
    // L << 96 fits 224 bits; dividing by upper first keeps the
    // intermediate inside U256 (width < upper always).
    let numerator = U256::from(liquidity.get()) << 96;
    let scaled = mul_div(numerator, range.width(), range.upper().get())?;
    let amount = scaled / range.lower().get();
    Ok(Amount::new(to_u128(
        amount,
        "amount0 from liquidity exceeds u128",
    )?))
}

/// Derives the token1 amount a position holds over a price range:
/// `floor(liquidity * (upper - lower) / 2^96)`.
///
/// # Errors
///
/// - [`EngineError::ZeroLiquidity`] if `liquidity` is zero.
/// - [`EngineError::InvalidRange`] if the bounds are equal.
/// - [`EngineError::Overflow`] if the result exceeds `u128`.
pub fn amount1_from_liquidity(
    liquidity: Liquidity,
    sqrt_price_a: SqrtPriceX96,
    sqrt_price_b: SqrtPriceX96,
) -> crate::error::Result<Amount> {
    if liquidity.is_zero() {
        return Err(EngineError::ZeroLiquidity(
            "amount derivation requires positive liquidity",
        ));
    }
    let range = PriceRange::new(sqrt_price_a, sqrt_price_b)?;
    let amount = mul_div(
        U256::from(liquidity.get()),
        range.width(),
        SqrtPriceX96::SCALE,
    )?;
    Ok(Amount::new(to_u128(
        amount,
        "amount1 from liquidity exceeds u128",
    )?))
}
