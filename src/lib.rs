//! # CLMM Engine
//!
//! Concentrated-liquidity AMM math engine: convert between price, tick,
//! and Q64.96 square-root price; derive the liquidity a bounded position
//! supplies from deposited token amounts; and quote swap outcomes against
//! that liquidity, exact-input or exact-output, in both directions.
//!
//! The engine is a pure function library. Every operation is a total
//! function of its `Copy` arguments — no stored pool state, no I/O, no
//! shared mutable anything — so any number of calls may run in parallel
//! and a caller modelling a trade sequence owns the "current price" state,
//! threading each quote's result into the next call.
//!
//! # Quick Start
//!
//! ```rust
//! use clmm_engine::domain::{Amount, Price, SwapDirection, Tick};
//! use clmm_engine::math::{
//!     liquidity_from_amounts, quote_exact_input, sqrt_price_at_tick, tick_at_price,
//! };
//!
//! // 1. Anchor the pool at a human-readable price (token1 per token0).
//! let price = Price::new(40_000_000.0).expect("finite price");
//! let current_tick = tick_at_price(price).expect("price in tick window");
//! let current = sqrt_price_at_tick(current_tick);
//!
//! // 2. The position spans the full tick range.
//! let lower = sqrt_price_at_tick(Tick::MIN);
//! let upper = sqrt_price_at_tick(Tick::MAX);
//!
//! // 3. Derive liquidity from a two-token deposit (smallest units).
//! let liquidity = liquidity_from_amounts(
//!     Amount::new(2_000_000_000_000_000_000),              // 2.0 token0
//!     Amount::new(80_000_000_000_000_000_000_000_000),     // 80M token1
//!     current,
//!     lower,
//!     upper,
//! )
//! .expect("deposit backs liquidity");
//!
//! // 4. Quote selling token1 into the position.
//! let quote = quote_exact_input(
//!     Amount::new(10_000_000_000_000_000_000_000),         // 10k token1
//!     liquidity,
//!     current,
//!     SwapDirection::from_zero_for_one(false),
//! )
//! .expect("in-range quote");
//!
//! assert!(quote.sqrt_price() >= current);                  // price moved up
//! assert!(!quote.counter_amount().is_zero());              // token0 received
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Caller     │  owns prices, amounts, and the current-price state
//! └──────┬──────┘
//!        │ domain values in, domain values out
//!        ▼
//! ┌─────────────┐
//! │    Math      │  tick_math, liquidity_math, swap_math (pure functions)
//! └──────┬──────┘
//!        │ mul_div (512-bit intermediate)
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Tick, SqrtPriceX96, PriceRange, Liquidity, SwapQuote, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), [`SwapQuote`](domain::SwapQuote), … |
//! | [`math`] | Conversions, liquidity derivation, swap quoting, and the shared `mul_div` primitive |
//! | [`error`] | [`EngineError`](error::EngineError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |
//!
//! # Precision
//!
//! Tick-to-sqrt-price conversion is fixed point end to end (binary
//! expansion over precomputed ratio constants), so results are
//! deterministic and platform independent across the entire tick window.
//! Intermediate products run through a 512-bit multiply-divide; overflow
//! is a typed error, never a silent wrap. Only conversions that start
//! from a real-valued [`Price`](domain::Price) carry `f64` precision —
//! the precision of their input.

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
