//! Rounding to an integral value in a selectable direction.
//!
//! For `|x| >= 1` the mantissa is split at bit `FRACTION_LEN - e`. The kept
//! part is the truncation of `x`; the trimmed part is compared against the
//! exact half threshold to decide whether to step one unit away from the
//! truncation:
//!
//! | Mode                    | trim < half | trim == half          | trim > half |
//! |-------------------------|-------------|-----------------------|-------------|
//! | `TowardZero`            | keep        | keep                  | keep        |
//! | `Downward`              | −1 if neg   | −1 if neg             | −1 if neg   |
//! | `Upward`                | +1 if pos   | +1 if pos             | +1 if pos   |
//! | `ToNearestAwayFromZero` | keep        | ±1                    | ±1          |
//! | `ToNearestEven`         | keep        | ±1 if truncation odd  | ±1          |
//!
//! Values with `|x| < 1` have nothing left after truncation, so the result is
//! picked from `±0` and `±1` directly.

use crate::env::{FpEnv, RoundingMode};
use crate::format::{FloatFormat, FpBits, Sign, Storage};

use super::clear_low_bits;

/// Result for `0 < |x| < 1`, chosen by mode and sign alone.
#[inline]
fn round_below_one<F: FloatFormat>(bits: FpBits<F>, mode: RoundingMode) -> F {
    let sign = bits.sign();
    let is_neg = sign.is_neg();
    let exponent = bits.get_exponent();

    let zero = FpBits::<F>::zero(sign);
    let one = FpBits::<F>::one(sign);

    let result = match mode {
        RoundingMode::Downward => {
            if is_neg {
                one
            } else {
                zero
            }
        }
        RoundingMode::Upward => {
            if is_neg {
                zero
            } else {
                one
            }
        }
        RoundingMode::TowardZero => zero,
        // |x| >= 0.5 exactly when the exponent is -1.
        RoundingMode::ToNearestAwayFromZero => {
            if exponent < -1 {
                zero
            } else {
                one
            }
        }
        // |x| == 0.5 is a tie, and zero is the even neighbour.
        RoundingMode::ToNearestEven => {
            if exponent <= -2 || bits.get_mantissa() == F::Bits::ZERO {
                zero
            } else {
                one
            }
        }
    };
    result.get_val()
}

/// Rounds `x` to an integral value in the direction selected by `mode`.
///
/// Infinities, NaNs and zeros are returned unchanged. No exception is raised.
///
/// # Examples
///
/// ```
/// use fpround_core::env::RoundingMode;
/// use fpround_core::nearest::round_with_mode;
///
/// assert_eq!(round_with_mode(2.5_f64, RoundingMode::ToNearestEven), 2.0);
/// assert_eq!(round_with_mode(3.5_f64, RoundingMode::ToNearestEven), 4.0);
/// assert_eq!(round_with_mode(2.5_f64, RoundingMode::ToNearestAwayFromZero), 3.0);
/// assert_eq!(round_with_mode(-2.1_f32, RoundingMode::Downward), -3.0);
/// assert_eq!(round_with_mode(-2.9_f32, RoundingMode::Upward), -2.0);
/// ```
pub fn round_with_mode<F: FloatFormat>(x: F, mode: RoundingMode) -> F {
    let bits = FpBits::new(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    let is_neg = bits.is_neg();
    let exponent = bits.get_exponent();

    if exponent >= F::FRACTION_LEN as i32 {
        return x;
    }

    if exponent <= -1 {
        return round_below_one(bits, mode);
    }

    let trim_size = F::FRACTION_LEN - exponent as u32;
    let x_u = bits.uintval();
    let trunc_u = clear_low_bits(x_u, trim_size);

    if trunc_u == x_u {
        return x;
    }

    let trunc_bits = FpBits::<F>::from_storage(trunc_u);
    let trunc_value = trunc_bits.get_val();

    let trim_value = bits.get_mantissa() & F::Bits::low_mask(trim_size);
    let half_value = F::Bits::ONE << (trim_size - 1);
    // With exponent 0 the parity bit sits on the implicit one, outside the
    // stored mantissa; that case is resolved separately below.
    let trunc_is_odd =
        trunc_bits.get_mantissa() & (F::Bits::ONE << trim_size) != F::Bits::ZERO;

    let one = FpBits::<F>::one(Sign::Pos).get_val();
    let away_from_zero = || {
        if is_neg {
            trunc_value - one
        } else {
            trunc_value + one
        }
    };

    match mode {
        RoundingMode::Downward => {
            if is_neg {
                trunc_value - one
            } else {
                trunc_value
            }
        }
        RoundingMode::Upward => {
            if is_neg {
                trunc_value
            } else {
                trunc_value + one
            }
        }
        RoundingMode::TowardZero => trunc_value,
        RoundingMode::ToNearestAwayFromZero => {
            if trim_value >= half_value {
                away_from_zero()
            } else {
                trunc_value
            }
        }
        RoundingMode::ToNearestEven => {
            if trim_value > half_value {
                away_from_zero()
            } else if trim_value == half_value {
                if exponent == 0 {
                    // |x| == 1.5: the odd neighbour is 1, so the tie goes to 2.
                    let two = FpBits::<F>::pow2(bits.sign(), 1);
                    return two.get_val();
                }
                if trunc_is_odd {
                    away_from_zero()
                } else {
                    trunc_value
                }
            } else {
                trunc_value
            }
        }
    }
}

/// Rounds `x` with the ambient rounding direction of `env`.
///
/// The four environment directions map onto [`RoundingMode::ToNearestEven`],
/// [`RoundingMode::Downward`], [`RoundingMode::Upward`] and
/// [`RoundingMode::TowardZero`].
#[inline]
pub fn round_with_ambient_mode<F: FloatFormat, E: FpEnv + ?Sized>(x: F, env: &E) -> F {
    round_with_mode(x, RoundingMode::from(env.rounding()))
}
