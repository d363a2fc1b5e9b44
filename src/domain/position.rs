//! Concentrated liquidity position.

use core::fmt;

use super::{Amount, Liquidity, PriceRange, SqrtPriceX96};
use crate::math::liquidity_math;

/// A caller-owned concentrated liquidity position.
///
/// An immutable `(lower, upper, liquidity)` tuple over canonicalized
/// sqrt-price bounds. The engine never stores positions — it only computes
/// with the values a caller passes in.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{Liquidity, Position, SqrtPriceX96};
///
/// let pos = Position::new(
///     SqrtPriceX96::MIN,
///     SqrtPriceX96::MAX,
///     Liquidity::new(1_000_000),
/// );
/// assert!(pos.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    range: PriceRange,
    liquidity: Liquidity,
}

impl Position {
    /// Creates a new `Position`, canonicalizing the bounds.
    ///
    /// Bounds may be given in either order. Zero liquidity is accepted
    /// here — it surfaces as
    /// [`ZeroLiquidity`](crate::error::EngineError::ZeroLiquidity) from any
    /// later amount derivation, never as a silent zero result.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`](crate::error::EngineError::InvalidRange)
    /// if the bounds are equal.
    pub fn new(
        a: SqrtPriceX96,
        b: SqrtPriceX96,
        liquidity: Liquidity,
    ) -> crate::error::Result<Self> {
        let range = PriceRange::new(a, b)?;
        Ok(Self { range, liquidity })
    }

    /// Returns the canonicalized price range.
    #[must_use]
    pub const fn range(&self) -> PriceRange {
        self.range
    }

    /// Returns the lower sqrt-price bound.
    #[must_use]
    pub const fn lower(&self) -> SqrtPriceX96 {
        self.range.lower()
    }

    /// Returns the upper sqrt-price bound.
    #[must_use]
    pub const fn upper(&self) -> SqrtPriceX96 {
        self.range.upper()
    }

    /// Returns the liquidity in this position.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the token amounts this position holds at the given current
    /// price: token0 over `(current, upper)` and token1 over
    /// `(lower, current)`.
    ///
    /// Expects `current` strictly inside the range, where the position
    /// holds both tokens.
    ///
    /// # Errors
    ///
    /// - [`ZeroLiquidity`](crate::error::EngineError::ZeroLiquidity) if the
    ///   position has no liquidity.
    /// - [`InvalidRange`](crate::error::EngineError::InvalidRange) if
    ///   `current` equals either bound.
    pub fn token_amounts(&self, current: SqrtPriceX96) -> crate::error::Result<(Amount, Amount)> {
        let amount0 = liquidity_math::amount0_from_liquidity(self.liquidity, current, self.upper())?;
        let amount1 = liquidity_math::amount1_from_liquidity(self.liquidity, self.lower(), current)?;
        Ok((amount0, amount1))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position([{}, {}], liquidity={})",
            self.lower(),
            self.upper(),
            self.liquidity
        )
    }
}
