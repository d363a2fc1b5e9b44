//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the core value types that model the engine's
//! domain: amounts, prices, ticks, sqrt-prices, ranges, positions, and
//! quotes. All types are newtypes with validated constructors that enforce
//! their invariants at construction time.

mod amount;
mod liquidity;
mod position;
mod price;
mod price_range;
mod sqrt_price;
mod swap_direction;
mod swap_quote;
mod tick;

pub use amount::Amount;
pub use liquidity::Liquidity;
pub use position::Position;
pub use price::Price;
pub use price_range::PriceRange;
pub use sqrt_price::SqrtPriceX96;
pub use swap_direction::SwapDirection;
pub use swap_quote::SwapQuote;
pub use tick::Tick;
