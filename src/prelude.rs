//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use clmm_engine::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    Amount, Liquidity, Position, Price, PriceRange, SqrtPriceX96, SwapDirection, SwapQuote, Tick,
};

// Re-export error types
pub use crate::error::{EngineError, Result};

// Re-export the math surface
pub use crate::math::{
    amount0_from_liquidity, amount1_from_liquidity, liquidity_from_amount0,
    liquidity_from_amount1, liquidity_from_amounts, mul_div, price_at_tick, quote_exact_input,
    quote_exact_output, sqrt_price_at_price, sqrt_price_at_tick, tick_at_price,
    tick_at_sqrt_price,
};
