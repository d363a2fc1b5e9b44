//! Property-based tests using `proptest` for engine invariant validation.
//!
//! Covers the engine's five core properties:
//!
//! 1. **Round-trip** — tick → sqrt-price → tick is exact on the
//!    fixed-point path and drifts at most one tick on the float path.
//! 2. **Canonicalization symmetry** — amount derivations ignore bound
//!    order.
//! 3. **Liquidity conservation** — amounts re-derived from a deposit's
//!    liquidity never exceed the deposit.
//! 4. **Directional monotonicity** — `ZeroForOne` never raises the
//!    price, `OneForZero` never lowers it, in both quoting modes.
//! 5. **Input/output consistency** — an exact-output quote built from an
//!    exact-input quote's result reproduces the price within rounding
//!    tolerance.

use alloy_primitives::U256;
use proptest::prelude::*;

use crate::domain::{Amount, Liquidity, SwapDirection, Tick};
use crate::math::{
    amount0_from_liquidity, amount1_from_liquidity, liquidity_from_amounts, price_at_tick,
    quote_exact_input, quote_exact_output, sqrt_price_at_tick, tick_at_price, tick_at_sqrt_price,
};

// ---------------------------------------------------------------------------
// Shared helpers and strategies
// ---------------------------------------------------------------------------

fn tick(value: i32) -> Tick {
    let Ok(t) = Tick::new(value) else {
        panic!("strategy produced an out-of-range tick: {value}");
    };
    t
}

/// The full valid tick window.
fn any_tick() -> impl Strategy<Value = i32> {
    -887_272i32..=887_272
}

/// Ticks away from the extremes, where float comparisons stay meaningful.
fn moderate_tick() -> impl Strategy<Value = i32> {
    -500_000i32..=500_000
}

/// Deposit sizes spanning dust to treasury scale.
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=(1u128 << 96)
}

/// Liquidity deep enough that a quote moves the price without leaving
/// the window.
fn liquidity_strategy() -> impl Strategy<Value = u128> {
    (1u128 << 60)..=(1u128 << 110)
}

// ---------------------------------------------------------------------------
// Property 1: Round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_fixed_point_round_trip_exact(raw in any_tick()) {
        let t = tick(raw);
        let encoded = sqrt_price_at_tick(t);
        prop_assert_eq!(tick_at_sqrt_price(encoded), t);
    }

    #[test]
    fn prop_float_round_trip_within_one_tick(raw in any_tick()) {
        let t = tick(raw);
        let Ok(price) = price_at_tick(t) else {
            panic!("price_at_tick failed on valid tick {t}");
        };
        let Ok(round_trip) = tick_at_price(price) else {
            panic!("tick_at_price failed on valid price {price}");
        };
        prop_assert!(
            round_trip.distance(t) <= 1,
            "drift beyond one tick: {} -> {}",
            t,
            round_trip
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Canonicalization symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amount_derivation_ignores_bound_order(
        a in moderate_tick(),
        b in moderate_tick(),
        liquidity in liquidity_strategy(),
    ) {
        prop_assume!(a != b);
        let l = Liquidity::new(liquidity);
        let (pa, pb) = (sqrt_price_at_tick(tick(a)), sqrt_price_at_tick(tick(b)));

        prop_assert_eq!(
            amount0_from_liquidity(l, pa, pb),
            amount0_from_liquidity(l, pb, pa)
        );
        prop_assert_eq!(
            amount1_from_liquidity(l, pa, pb),
            amount1_from_liquidity(l, pb, pa)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_derived_amounts_bounded_by_deposits(
        current in -200_000i32..=200_000,
        half_width in 1_000i32..=400_000,
        amount0 in amount_strategy(),
        amount1 in amount_strategy(),
    ) {
        let lower = sqrt_price_at_tick(tick(current - half_width));
        let upper = sqrt_price_at_tick(tick(current + half_width));
        let middle = sqrt_price_at_tick(tick(current));

        let Ok(liquidity) = liquidity_from_amounts(
            Amount::new(amount0),
            Amount::new(amount1),
            middle,
            lower,
            upper,
        ) else {
            // Extreme combinations overflow the liquidity width; the
            // typed failure is the contract.
            return Ok(());
        };
        if liquidity.is_zero() {
            return Ok(());
        }

        let Ok(got0) = amount0_from_liquidity(liquidity, middle, upper) else {
            return Ok(());
        };
        let Ok(got1) = amount1_from_liquidity(liquidity, lower, middle) else {
            return Ok(());
        };
        prop_assert!(got0.get() <= amount0, "token0 over-allocated");
        prop_assert!(got1.get() <= amount1, "token1 over-allocated");
    }
}

// ---------------------------------------------------------------------------
// Property 4: Directional monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_exact_input_moves_price_with_direction(
        current in moderate_tick(),
        amount in amount_strategy(),
        liquidity in liquidity_strategy(),
        zero_for_one in any::<bool>(),
    ) {
        let sqrt_price = sqrt_price_at_tick(tick(current));
        let direction = SwapDirection::from_zero_for_one(zero_for_one);

        let Ok(quote) = quote_exact_input(
            Amount::new(amount),
            Liquidity::new(liquidity),
            sqrt_price,
            direction,
        ) else {
            // Window exits and dust-sized displacements fail typed.
            return Ok(());
        };

        if direction.lowers_price() {
            prop_assert!(quote.sqrt_price() <= sqrt_price);
        } else {
            prop_assert!(quote.sqrt_price() >= sqrt_price);
        }
    }

    #[test]
    fn prop_exact_output_moves_price_with_direction(
        current in moderate_tick(),
        amount in amount_strategy(),
        liquidity in liquidity_strategy(),
        zero_for_one in any::<bool>(),
    ) {
        let sqrt_price = sqrt_price_at_tick(tick(current));
        let direction = SwapDirection::from_zero_for_one(zero_for_one);

        let Ok(quote) = quote_exact_output(
            Amount::new(amount),
            Liquidity::new(liquidity),
            sqrt_price,
            direction,
        ) else {
            return Ok(());
        };

        if direction.lowers_price() {
            prop_assert!(quote.sqrt_price() <= sqrt_price);
        } else {
            prop_assert!(quote.sqrt_price() >= sqrt_price);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Input/output consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_quote_inverts_input_quote(
        current in -100_000i32..=100_000,
        amount in (1u128 << 40)..=(1u128 << 80),
        liquidity in (1u128 << 80)..=(1u128 << 110),
        zero_for_one in any::<bool>(),
    ) {
        let sqrt_price = sqrt_price_at_tick(tick(current));
        let direction = SwapDirection::from_zero_for_one(zero_for_one);
        let l = Liquidity::new(liquidity);

        let Ok(forward) = quote_exact_input(Amount::new(amount), l, sqrt_price, direction) else {
            return Ok(());
        };
        if forward.counter_amount().is_zero() {
            return Ok(());
        }
        let Ok(reverse) =
            quote_exact_output(forward.counter_amount(), l, sqrt_price, direction)
        else {
            return Ok(());
        };

        let (a, b) = (forward.sqrt_price().get(), reverse.sqrt_price().get());
        let drift = if a > b { a - b } else { b - a };

        // One unit of the counter token corresponds to `granularity`
        // sqrt-price units; flooring can lose at most one counter unit
        // plus a couple of division floors on each leg.
        let q96 = crate::domain::SqrtPriceX96::SCALE;
        let l_wide = U256::from(liquidity);
        let granularity = if direction.lowers_price() {
            q96 / l_wide
        } else {
            let peak = if a > b { a } else { b };
            let Ok(g) = crate::math::mul_div(peak, peak, l_wide * q96) else {
                panic!("granularity bound overflows");
            };
            g
        };
        let tolerance = granularity + U256::from(4u8);
        prop_assert!(
            drift <= tolerance,
            "sqrt price drift {} exceeds tolerance {} at tick {}",
            drift,
            tolerance,
            current
        );
    }
}
