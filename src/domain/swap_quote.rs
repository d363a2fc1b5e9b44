//! Outcome of a swap quote.

use core::fmt;

use super::{Amount, Price, SqrtPriceX96, Tick};

/// The computed outcome of a swap quote.
///
/// Carries the post-swap sqrt-price, its real-valued [`Price`] reading,
/// the corresponding [`Tick`], and the solved counter-amount: the output
/// amount for an exact-input quote, or the required input amount for an
/// exact-output quote.
///
/// A quote is a pure value — nothing is persisted. Callers modelling a
/// trade sequence thread [`sqrt_price`](Self::sqrt_price) into the next
/// quote as the current price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapQuote {
    sqrt_price: SqrtPriceX96,
    price: Price,
    tick: Tick,
    counter_amount: Amount,
}

impl SwapQuote {
    /// Assembles a quote from its computed parts.
    #[must_use]
    pub const fn new(
        sqrt_price: SqrtPriceX96,
        price: Price,
        tick: Tick,
        counter_amount: Amount,
    ) -> Self {
        Self {
            sqrt_price,
            price,
            tick,
            counter_amount,
        }
    }

    /// Returns the post-swap sqrt-price.
    #[must_use]
    pub const fn sqrt_price(&self) -> SqrtPriceX96 {
        self.sqrt_price
    }

    /// Returns the post-swap price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the post-swap tick.
    #[must_use]
    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Returns the solved counter-amount.
    #[must_use]
    pub const fn counter_amount(&self) -> Amount {
        self.counter_amount
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(sqrt_price={}, price={}, tick={}, counter_amount={})",
            self.sqrt_price, self.price, self.tick, self.counter_amount
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn quote() -> SwapQuote {
        let Ok(tick) = Tick::new(42) else {
            panic!("valid tick");
        };
        SwapQuote::new(
            SqrtPriceX96::ONE,
            Price::ONE,
            tick,
            Amount::new(1_000),
        )
    }

    #[test]
    fn accessors_return_parts() {
        let q = quote();
        assert_eq!(q.sqrt_price(), SqrtPriceX96::ONE);
        assert_eq!(q.price(), Price::ONE);
        assert_eq!(q.tick().get(), 42);
        assert_eq!(q.counter_amount(), Amount::new(1_000));
    }

    #[test]
    fn display_contains_parts() {
        let shown = format!("{}", quote());
        assert!(shown.contains("tick=Tick(42)"));
        assert!(shown.contains("counter_amount=1000"));
    }

    #[test]
    fn copy_semantics() {
        let a = quote();
        let b = a;
        assert_eq!(a, b);
    }
}
