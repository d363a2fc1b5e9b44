//! Unified error types for the CLMM engine.
//!
//! All fallible operations across the crate return [`EngineError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers. Every error is detected at the boundary of the offending
//! operation and surfaced immediately — no operation clamps, retries, or
//! substitutes a default.

use core::fmt;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, EngineError>;

/// Unified error enum for every fallible engine operation.
///
/// Variants carry a static message naming the violated invariant.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::Tick;
/// use clmm_engine::error::EngineError;
///
/// let err = Tick::new(1_000_000).unwrap_err();
/// assert!(matches!(err, EngineError::TickOutOfBounds(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A price was non-positive or non-finite, or a square-root price fell
    /// outside the representable Q64.96 window.
    InvalidPrice(&'static str),
    /// Range bounds were equal after canonicalization (zero-width range).
    InvalidRange(&'static str),
    /// A token amount was zero where the operation has no defined result.
    InvalidAmount(&'static str),
    /// Zero liquidity was supplied to an amount derivation or a quote.
    ZeroLiquidity(&'static str),
    /// A tick index fell outside `[-887272, 887272]`.
    TickOutOfBounds(&'static str),
    /// A final result exceeded the width of its target type.
    Overflow(&'static str),
    /// A zero denominator reached the arithmetic core.
    DivisionByZero,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrice(msg) => write!(f, "invalid price: {msg}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            Self::InvalidAmount(msg) => write!(f, "invalid amount: {msg}"),
            Self::ZeroLiquidity(msg) => write!(f, "zero liquidity: {msg}"),
            Self::TickOutOfBounds(msg) => write!(f, "tick out of bounds: {msg}"),
            Self::Overflow(msg) => write!(f, "overflow: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl core::error::Error for EngineError {}
