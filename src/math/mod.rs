//! Arithmetic core of the engine.
//!
//! Three components over the domain types, plus the wide-integer
//! primitive they share:
//!
//! | Module | Role |
//! |--------|------|
//! | [`tick_math`] | price ↔ tick ↔ Q64.96 sqrt-price conversions |
//! | [`liquidity_math`] | deposits ↔ liquidity ↔ owed amounts |
//! | [`swap_math`] | exact-input / exact-output swap quoting |
//! | [`mul_div`] | `floor(a * b / d)` with a 512-bit intermediate |

mod full_math;
pub mod liquidity_math;
pub mod swap_math;
pub mod tick_math;

#[cfg(test)]
mod proptest_properties;

pub use full_math::mul_div;
pub use liquidity_math::{
    amount0_from_liquidity, amount1_from_liquidity, liquidity_from_amount0,
    liquidity_from_amount1, liquidity_from_amounts,
};
pub use swap_math::{quote_exact_input, quote_exact_output};
pub use tick_math::{
    price_at_tick, sqrt_price_at_price, sqrt_price_at_tick, tick_at_price, tick_at_sqrt_price,
};
