//! Conversions between price, tick, and Q64.96 square-root price.
//!
//! These helpers implement the standard relationship `price = 1.0001^tick`
//! for concentrated liquidity pools, with `sqrt(price)` carried as a
//! [`SqrtPriceX96`] wide integer.
//!
//! # Functions
//!
//! - [`sqrt_price_at_tick`] — fixed-point `floor(1.0001^(tick/2) * 2^96)`.
//! - [`tick_at_sqrt_price`] — greatest tick whose sqrt-price does not
//!   exceed the given one; exact inverse of [`sqrt_price_at_tick`] up to
//!   flooring.
//! - [`tick_at_price`] — `floor(log_1.0001(price))` for real prices.
//! - [`sqrt_price_at_price`] — `floor(sqrt(price) * 2^96)`.
//! - [`price_at_tick`] — `1.0001^tick` in `f64`, the float cross-check of
//!   the fixed-point path.
//!
//! # Precision
//!
//! The tick-to-sqrt-price direction never touches floating point: the
//! tick's binary expansion is folded over precomputed Q128.128 ratio
//! constants (one per bit), giving deterministic, platform-independent
//! results across the entire tick range. Only the conversions that start
//! from a real-valued [`Price`] inherit `f64` precision, which is the
//! precision of their input.

use alloy_primitives::U256;

use crate::domain::{Price, SqrtPriceX96, Tick};
use crate::error::EngineError;

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Tolerance for snapping a floating-point tick value to the nearest
/// integer, so `tick -> price -> tick` round-trips are not broken by
/// IEEE 754 rounding.
const SNAP_EPSILON: f64 = 1e-9;

/// `2^128`, the fixed-point one of the ratio ladder.
const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);

/// Low 32 bits, the part discarded when narrowing Q128.128 to Q64.96.
const X96_REMAINDER_MASK: U256 = U256::from_limbs([0xffff_ffff, 0, 0, 0]);

/// Precomputed `sqrt(1.0001^(-2^i))` for `i = 0..19`, in Q128.128.
///
/// Folding the binary expansion of `|tick|` over these factors computes
/// `sqrt(1.0001^(-|tick|))`; positive ticks take the reciprocal at the
/// end.
const SQRT_RATIOS: [U256; 19] = [
    U256::from_limbs([0xaa2d_162d_1a59_4001, 0xfffc_b933_bd6f_ad37, 0, 0]),
    U256::from_limbs([0x59a4_6990_580e_213a, 0xfff9_7272_373d_4132, 0, 0]),
    U256::from_limbs([0xef12_357c_f3c7_fdcc, 0xfff2_e50f_5f65_6932, 0, 0]),
    U256::from_limbs([0x1c36_24ea_a094_1cd0, 0xffe5_caca_7e10_e4e6, 0, 0]),
    U256::from_limbs([0xc9db_5883_5c92_6644, 0xffcb_9843_d60f_6159, 0, 0]),
    U256::from_limbs([0x472e_6896_dfb2_54c0, 0xff97_3b41_fa98_c081, 0, 0]),
    U256::from_limbs([0x43ec_78b3_26b5_2861, 0xff2e_a164_66c9_6a38, 0, 0]),
    U256::from_limbs([0x11c4_61f1_969c_3053, 0xfe5d_ee04_6a99_a2a8, 0, 0]),
    U256::from_limbs([0xdcff_c83b_479a_a3a4, 0xfcbe_86c7_900a_88ae, 0, 0]),
    U256::from_limbs([0x6f2b_074c_f781_5e54, 0xf987_a725_3ac4_1317, 0, 0]),
    U256::from_limbs([0x940c_7a39_8e4b_70f3, 0xf339_2b08_22b7_0005, 0, 0]),
    U256::from_limbs([0x43b2_9c7f_a6e8_89d9, 0xe715_9475_a2c2_9b74, 0, 0]),
    U256::from_limbs([0x845a_d8f7_92aa_5825, 0xd097_f3bd_fd20_22b8, 0, 0]),
    U256::from_limbs([0x8a65_dc1f_90e0_61e5, 0xa9f7_4646_2d87_0fdf, 0, 0]),
    U256::from_limbs([0x90bb_3df6_2baf_32f7, 0x70d8_69a1_56d2_a1b8, 0, 0]),
    U256::from_limbs([0x8123_1505_542f_cfa6, 0x31be_135f_97d0_8fd9, 0, 0]),
    U256::from_limbs([0xc677_de54_f3e9_9bc9, 0x09aa_508b_5b7a_84e1, 0, 0]),
    U256::from_limbs([0x6699_c329_225e_e604, 0x005d_6af8_dedb_8119, 0, 0]),
    U256::from_limbs([0x1ea9_2604_1bed_fe98, 0x0000_2216_e584_f5fa, 0, 0]),
];

/// Computes `floor(sqrt(1.0001^tick) * 2^96)` without floating point.
///
/// The binary expansion of the tick is folded over [`SQRT_RATIOS`], the
/// reciprocal is taken for positive ticks, and the Q128.128 result is
/// narrowed to Q64.96 rounding up — so converting the output back with
/// [`tick_at_sqrt_price`] always lands on the original tick.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{SqrtPriceX96, Tick};
/// use clmm_engine::math::sqrt_price_at_tick;
///
/// assert_eq!(sqrt_price_at_tick(Tick::ZERO), SqrtPriceX96::ONE);
/// assert_eq!(sqrt_price_at_tick(Tick::MIN), SqrtPriceX96::MIN);
/// assert_eq!(sqrt_price_at_tick(Tick::MAX), SqrtPriceX96::MAX);
/// ```
#[must_use]
pub fn sqrt_price_at_tick(tick: Tick) -> SqrtPriceX96 {
    SqrtPriceX96::from_raw(sqrt_ratio_x96(tick.get()))
}

/// The ladder on a raw (pre-validated) tick index.
fn sqrt_ratio_x96(tick: i32) -> U256 {
    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        SQRT_RATIOS[0]
    } else {
        Q128
    };
    for (i, factor) in SQRT_RATIOS.iter().enumerate().skip(1) {
        if abs_tick & (1 << i) != 0 {
            // ratio <= 2^128 and factor < 2^128, so the product fits U256.
            ratio = (ratio * *factor) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Narrow Q128.128 to Q64.96, rounding up so the inverse conversion of
    // the output is consistent with the tick it came from.
    let truncated = ratio >> 32;
    if (ratio & X96_REMAINDER_MASK).is_zero() {
        truncated
    } else {
        truncated + U256::from(1u8)
    }
}

/// Returns the greatest tick whose sqrt-price does not exceed the given
/// one.
///
/// Binary search over the [`sqrt_price_at_tick`] ladder, so the result is
/// exactly consistent with the fixed-point forward conversion. The input
/// window enforced by [`SqrtPriceX96`] guarantees a result within
/// `[Tick::MIN, Tick::MAX]`.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::{SqrtPriceX96, Tick};
/// use clmm_engine::math::tick_at_sqrt_price;
///
/// assert_eq!(tick_at_sqrt_price(SqrtPriceX96::ONE), Tick::ZERO);
/// assert_eq!(tick_at_sqrt_price(SqrtPriceX96::MAX), Tick::MAX);
/// ```
#[must_use]
pub fn tick_at_sqrt_price(sqrt_price: SqrtPriceX96) -> Tick {
    let target = sqrt_price.get();
    let mut low = Tick::MIN.get();
    let mut high = Tick::MAX.get();

    while low < high {
        // Upper midpoint; arithmetic shift floors correctly for negatives.
        let mid = (low + high + 1) >> 1;
        if sqrt_ratio_x96(mid) <= target {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Tick::from_raw(low)
}

/// Computes `floor(log_1.0001(price))`, the greatest tick whose price is
/// at most the given one.
///
/// Snaps to the nearest integer within a small epsilon before flooring to
/// keep `tick -> price -> tick` round-trips stable under IEEE 754
/// rounding.
///
/// # Errors
///
/// - [`EngineError::InvalidPrice`] if `price` is zero (logarithm
///   undefined).
/// - [`EngineError::TickOutOfBounds`] if the result falls outside the
///   valid tick range.
///
/// # Examples
///
/// ```
/// use clmm_engine::domain::Price;
/// use clmm_engine::math::tick_at_price;
///
/// let tick = tick_at_price(Price::new(5_000.0).unwrap()).unwrap();
/// assert_eq!(tick.get(), 85_176);
/// ```
pub fn tick_at_price(price: Price) -> crate::error::Result<Tick> {
    let p = price.get();
    if p <= 0.0 {
        return Err(EngineError::InvalidPrice(
            "price must be positive for tick conversion",
        ));
    }

    let raw = p.ln() / BASE.ln();
    let rounded = raw.round();
    let tick_f64 = if (raw - rounded).abs() < SNAP_EPSILON {
        rounded
    } else {
        raw.floor()
    };

    // Saturating float-to-int cast; out-of-window values are caught by
    // Tick::new.
    #[allow(clippy::cast_possible_truncation)]
    let tick_i32 = tick_f64 as i32;
    Tick::new(tick_i32)
}

/// Computes `floor(sqrt(price) * 2^96)`.
///
/// The `f64` square root is decomposed bit-exactly into the Q64.96 grid,
/// so no precision is lost beyond the `f64` input itself.
///
/// # Errors
///
/// - [`EngineError::InvalidPrice`] if `price` is zero, or if the encoded
///   value falls outside the representable sqrt-price window.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use clmm_engine::domain::{Price, SqrtPriceX96};
/// use clmm_engine::math::sqrt_price_at_price;
///
/// let encoded = sqrt_price_at_price(Price::new(4.0).unwrap()).unwrap();
/// assert_eq!(encoded.get(), SqrtPriceX96::SCALE * U256::from(2u8));
/// ```
pub fn sqrt_price_at_price(price: Price) -> crate::error::Result<SqrtPriceX96> {
    if price.is_zero() {
        return Err(EngineError::InvalidPrice(
            "price must be positive for sqrt-price conversion",
        ));
    }
    let root = price.sqrt().get();
    let encoded = x96_from_f64(root).ok_or(EngineError::InvalidPrice(
        "price cannot be encoded in the Q64.96 window",
    ))?;
    SqrtPriceX96::new(encoded)
}

/// Computes the price at a given tick: `price = 1.0001^tick`, in `f64`.
///
/// The float cross-check of the fixed-point ladder; all valid ticks
/// produce finite, positive prices.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPrice`] if the computed price is not
/// finite (cannot occur for a valid [`Tick`], guarded regardless).
pub fn price_at_tick(tick: Tick) -> crate::error::Result<Price> {
    let price = BASE.powf(f64::from(tick.get()));
    Price::new(price)
}

/// Exact `floor(value * 2^96)` for a positive finite `f64`, via mantissa
/// and exponent decomposition. `None` if the result cannot lie in the
/// sqrt-price window.
fn x96_from_f64(value: f64) -> Option<U256> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let bits = value.to_bits();
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let raw_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if raw_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), raw_exponent - 1075)
    };

    let shift = exponent + 96;
    if shift >= 0 {
        // The window tops out below 2^161; a larger shift cannot land
        // inside it.
        if shift > 160 {
            return None;
        }
        Some(U256::from(mantissa) << usize::try_from(shift).ok()?)
    } else {
        let right = shift.unsigned_abs() as usize;
        if right >= 64 {
            return Some(U256::ZERO);
        }
        Some(U256::from(mantissa >> right))
    }
}
