//! Swap quoting against a single in-range liquidity position.
//!
//! Two entry points, each parameterized by a [`SwapDirection`]:
//!
//! - [`quote_exact_input`] — fix the paid amount, solve for the received
//!   amount;
//! - [`quote_exact_output`] — fix the received amount, solve for the paid
//!   amount.
//!
//! Both derive the post-swap sqrt-price from the constant-product relation
//! within one range (`x = L * 2^96 / sqrtP`, `y = L * sqrtP / 2^96`) and
//! read the counter-amount off the price displacement. Selling token0
//! ([`SwapDirection::ZeroForOne`]) never raises the sqrt-price; selling
//! token1 never lowers it — in either quoting mode.
//!
//! The quoter is stateless. Callers modelling a trade sequence thread
//! [`SwapQuote::sqrt_price`] into the next call as the current price. No
//! tick-range traversal is modelled: a quote that would push the price
//! past the representable window fails with a typed error instead of
//! clamping, and quotes inside the window assume the position's liquidity
//! spans them.

use alloy_primitives::U256;

use crate::domain::{Amount, Liquidity, SqrtPriceX96, SwapDirection, SwapQuote};
use crate::error::EngineError;

use super::full_math::{narrow, widen};
use super::liquidity_math::{amount0_from_liquidity, amount1_from_liquidity};
use super::tick_math::tick_at_sqrt_price;

/// Quotes a swap with a fixed input amount.
///
/// Returns the post-swap sqrt-price, price, and tick, with the received
/// counter-amount: token1 for [`ZeroForOne`](SwapDirection::ZeroForOne),
/// token0 otherwise.
///
/// # Errors
///
/// - [`EngineError::ZeroLiquidity`] if `liquidity` is zero.
/// - [`EngineError::InvalidAmount`] if `amount_in` is zero.
/// - [`EngineError::InvalidPrice`] if the trade would push the price out
///   of the representable window.
/// - [`EngineError::InvalidRange`] if the price displacement floors to
///   zero (the trade is too small to move the fixed-point price).
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{Amount, Liquidity, SqrtPriceX96, SwapDirection};
/// use clmm_engine::math::quote_exact_input;
///
/// let quote = quote_exact_input(
///     Amount::new(1_000_000),
///     Liquidity::new(1u128 << 100),
///     SqrtPriceX96::ONE,
///     SwapDirection::ZeroForOne,
/// )
/// .unwrap();
/// assert!(quote.sqrt_price() <= SqrtPriceX96::ONE);
/// ```
pub fn quote_exact_input(
    amount_in: Amount,
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
    direction: SwapDirection,
) -> crate::error::Result<SwapQuote> {
    check_preconditions(amount_in, liquidity)?;
    match direction {
        SwapDirection::ZeroForOne => {
            let next = sqrt_price_after_token0_added(amount_in, liquidity, sqrt_price)?;
            let amount_out = amount1_from_liquidity(liquidity, next, sqrt_price)?;
            Ok(assemble(next, amount_out))
        }
        SwapDirection::OneForZero => {
            let next = sqrt_price_after_token1_added(amount_in, liquidity, sqrt_price)?;
            let amount_out = amount0_from_liquidity(liquidity, next, sqrt_price)?;
            Ok(assemble(next, amount_out))
        }
    }
}

/// Quotes a swap with a fixed output amount.
///
/// Returns the post-swap sqrt-price, price, and tick, with the required
/// input counter-amount: token0 for
/// [`ZeroForOne`](SwapDirection::ZeroForOne) (token1 is withdrawn),
/// token1 otherwise.
///
/// # Errors
///
/// - [`EngineError::ZeroLiquidity`] if `liquidity` is zero.
/// - [`EngineError::InvalidAmount`] if `amount_out` is zero.
/// - [`EngineError::InvalidPrice`] if the requested output exhausts the
///   position's reserve or pushes the price out of the representable
///   window.
/// - [`EngineError::InvalidRange`] if the price displacement floors to
///   zero.
pub fn quote_exact_output(
    amount_out: Amount,
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
    direction: SwapDirection,
) -> crate::error::Result<SwapQuote> {
    check_preconditions(amount_out, liquidity)?;
    match direction {
        SwapDirection::ZeroForOne => {
            let next = sqrt_price_after_token1_removed(amount_out, liquidity, sqrt_price)?;
            let amount_in = amount0_from_liquidity(liquidity, next, sqrt_price)?;
            Ok(assemble(next, amount_in))
        }
        SwapDirection::OneForZero => {
            let next = sqrt_price_after_token0_removed(amount_out, liquidity, sqrt_price)?;
            let amount_in = amount1_from_liquidity(liquidity, next, sqrt_price)?;
            Ok(assemble(next, amount_in))
        }
    }
}

fn check_preconditions(amount: Amount, liquidity: Liquidity) -> crate::error::Result<()> {
    if liquidity.is_zero() {
        return Err(EngineError::ZeroLiquidity(
            "swap quoting requires positive liquidity",
        ));
    }
    if amount.is_zero() {
        return Err(EngineError::InvalidAmount("swap amount must be positive"));
    }
    Ok(())
}

fn assemble(sqrt_price: SqrtPriceX96, counter_amount: Amount) -> SwapQuote {
    SwapQuote::new(
        sqrt_price,
        sqrt_price.to_price(),
        tick_at_sqrt_price(sqrt_price),
        counter_amount,
    )
}

/// `floor(L * 2^96 * sqrtP / (L * 2^96 + amount * sqrtP))` — the price
/// after `amount` of token0 enters the pool. Never exceeds `sqrtP`.
fn sqrt_price_after_token0_added(
    amount: Amount,
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
) -> crate::error::Result<SqrtPriceX96> {
    let liquidity_x96 = widen(U256::from(liquidity.get()) << 96);
    let current = widen(sqrt_price.get());
    // 224-bit by 161-bit products; everything fits U512.
    let numerator = liquidity_x96 * current;
    let denominator = liquidity_x96 + widen(U256::from(amount.get())) * current;
    let next = narrow(numerator / denominator)
        .ok_or(EngineError::Overflow("post-swap sqrt price exceeds 256 bits"))?;
    SqrtPriceX96::new(next)
}

/// `sqrtP + floor(amount * 2^96 / L)` — the price after `amount` of
/// token1 enters the pool.
fn sqrt_price_after_token1_added(
    amount: Amount,
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
) -> crate::error::Result<SqrtPriceX96> {
    let displacement =
        (U256::from(amount.get()) << 96) / U256::from(liquidity.get());
    let next = sqrt_price
        .get()
        .checked_add(displacement)
        .ok_or(EngineError::Overflow("post-swap sqrt price exceeds 256 bits"))?;
    SqrtPriceX96::new(next)
}

/// `sqrtP - floor(amount * 2^96 / L)` — the price after `amount` of
/// token1 leaves the pool.
fn sqrt_price_after_token1_removed(
    amount: Amount,
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
) -> crate::error::Result<SqrtPriceX96> {
    let displacement =
        (U256::from(amount.get()) << 96) / U256::from(liquidity.get());
    let next = sqrt_price
        .get()
        .checked_sub(displacement)
        .ok_or(EngineError::InvalidPrice(
            "requested output exhausts the token1 reserve",
        ))?;
    SqrtPriceX96::new(next)
}

/// `floor(L * 2^96 * sqrtP / (L * 2^96 - amount * sqrtP))` — the price
/// after `amount` of token0 leaves the pool.
fn sqrt_price_after_token0_removed(
    amount: Amount,
    liquidity: Liquidity,
    sqrt_price: SqrtPriceX96,
) -> crate::error::Result<SqrtPriceX96> {
    let liquidity_x96 = widen(U256::from(liquidity.get()) << 96);
    let current = widen(sqrt_price.get());
    let withdrawn = widen(U256::from(amount.get())) * current;
    let denominator = liquidity_x96
        .checked_sub(withdrawn)
        .ok_or(EngineError::InvalidPrice(
            "requested output exhausts the token0 reserve",
        ))?;
    if denominator.is_zero() {
        return Err(EngineError::InvalidPrice(
            "requested output exhausts the token0 reserve",
        ));
    }
    let next = narrow((liquidity_x96 * current) / denominator).ok_or(EngineError::InvalidPrice(
        "sqrt price outside representable Q64.96 window",
    ))?;
    SqrtPriceX96::new(next)
}
