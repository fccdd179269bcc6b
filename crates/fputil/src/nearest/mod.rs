//! Nearest-integer operations.
//!
//! Every routine here rounds a float to an integral float by editing its
//! encoding directly; no hardware rounding instruction is involved. The
//! fixed-direction primitives are:
//! - [`trunc`]: toward zero.
//! - [`ceil`]: toward +∞.
//! - [`floor`]: toward −∞.
//! - [`round`]: to nearest, ties away from zero.
//!
//! [`directed`] generalizes these to any [`RoundingMode`](crate::env::RoundingMode)
//! and to the ambient mode of an environment.
//!
//! None of these functions signal exceptions. Infinities and NaNs pass through
//! unchanged.

/// Rounding with an explicit or ambient direction.
pub mod directed;

use crate::env::ThreadEnv;
use crate::format::{FloatFormat, FpBits, Sign, Storage};

pub use self::directed::{round_with_ambient_mode, round_with_mode};

/// Clears the low `trim_size` bits of a raw encoding.
#[inline(always)]
pub(crate) fn clear_low_bits<S: Storage>(bits: S, trim_size: u32) -> S {
    (bits >> trim_size) << trim_size
}

/// Rounds toward zero.
///
/// # Examples
///
/// ```
/// use fpround_core::nearest::trunc;
///
/// assert_eq!(trunc(2.7_f64), 2.0);
/// assert_eq!(trunc(-2.7_f32), -2.0);
/// assert!(trunc(-0.3_f64).is_sign_negative());
/// ```
#[inline]
pub fn trunc<F: FloatFormat>(x: F) -> F {
    let mut bits = FpBits::new(x);

    // Zero needs no check of its own: its exponent is below -1.
    if bits.is_inf_or_nan() {
        return x;
    }

    let exponent = bits.get_exponent();

    // Every mantissa bit already weighs at least one.
    if exponent >= F::FRACTION_LEN as i32 {
        return x;
    }

    if exponent <= -1 {
        return FpBits::<F>::zero(bits.sign()).get_val();
    }

    let trim_size = F::FRACTION_LEN - exponent as u32;
    bits.set_mantissa(clear_low_bits(bits.get_mantissa(), trim_size));
    bits.get_val()
}

/// Rounds toward +∞.
///
/// Values in `(-1, 0)` round to `-0.0`, keeping the sign.
#[inline]
pub fn ceil<F: FloatFormat>(x: F) -> F {
    let mut bits = FpBits::new(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    let is_neg = bits.is_neg();
    let exponent = bits.get_exponent();

    if exponent >= F::FRACTION_LEN as i32 {
        return x;
    }

    if exponent <= -1 {
        return if is_neg {
            FpBits::<F>::zero(Sign::Neg).get_val()
        } else {
            FpBits::<F>::one(Sign::Pos).get_val()
        };
    }

    let trim_size = F::FRACTION_LEN - exponent as u32;
    let x_u = bits.uintval();
    let trunc_u = clear_low_bits(x_u, trim_size);

    if trunc_u == x_u {
        return x;
    }

    bits.set_uintval(trunc_u);
    let trunc_value = bits.get_val();

    // Toward zero is already upward for negative inputs.
    if is_neg {
        return trunc_value;
    }

    trunc_value + FpBits::<F>::one(Sign::Pos).get_val()
}

/// Rounds toward −∞.
///
/// Negative inputs go through `-ceil(-x)`, so `floor(-0.0)` stays `-0.0`.
#[inline]
pub fn floor<F: FloatFormat>(x: F) -> F {
    if FpBits::new(x).is_neg() {
        -ceil(-x)
    } else {
        trunc(x)
    }
}

/// Rounds to nearest, ties away from zero.
///
/// # Examples
///
/// ```
/// use fpround_core::nearest::round;
///
/// assert_eq!(round(2.5_f64), 3.0);
/// assert_eq!(round(-2.5_f64), -3.0);
/// assert_eq!(round(0.5_f32), 1.0);
/// assert_eq!(round(2.49_f64), 2.0);
/// ```
#[inline]
pub fn round<F: FloatFormat>(x: F) -> F {
    let mut bits = FpBits::new(x);

    if bits.is_inf_or_nan() || bits.is_zero() {
        return x;
    }

    let exponent = bits.get_exponent();

    if exponent >= F::FRACTION_LEN as i32 {
        return x;
    }

    // 0.5 <= |x| < 1
    if exponent == -1 {
        return FpBits::<F>::one(bits.sign()).get_val();
    }

    // |x| < 0.5
    if exponent <= -2 {
        return FpBits::<F>::zero(bits.sign()).get_val();
    }

    let trim_size = F::FRACTION_LEN - exponent as u32;
    let half_bit_set = bits.get_mantissa() & (F::Bits::ONE << (trim_size - 1)) != F::Bits::ZERO;
    let x_u = bits.uintval();
    let trunc_u = clear_low_bits(x_u, trim_size);

    if trunc_u == x_u {
        return x;
    }

    bits.set_uintval(trunc_u);
    let trunc_value = bits.get_val();

    if !half_bit_set {
        return trunc_value;
    }

    let one = FpBits::<F>::one(Sign::Pos).get_val();
    if bits.is_neg() {
        trunc_value - one
    } else {
        trunc_value + one
    }
}

/// Rounds with the calling thread's ambient rounding direction.
///
/// Shorthand for [`round_with_ambient_mode`] over [`ThreadEnv`].
#[inline]
pub fn rint<F: FloatFormat>(x: F) -> F {
    round_with_ambient_mode(x, &ThreadEnv)
}
