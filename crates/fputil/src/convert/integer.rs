//! Rounding into native signed integers (`lround` / `llround` / `lrint` / `llrint`).
//!
//! The value is first rounded to an integral float, then narrowed. A rounded
//! value with unbiased exponent `e` has magnitude in `[2^e, 2^(e+1))`, so it
//! fits a `W`-bit signed integer iff `e < W - 1`, or `e == W - 1` and it is
//! exactly `-2^(W-1)`. Everything else saturates to `MIN`/`MAX` by sign and
//! signals a domain error.
//!
//! Narrowing reads the integer straight out of the significand bits.

use std::fmt;

use crate::env::{FpEnv, RoundingMode, signal_domain_error};
use crate::error::ConversionError;
use crate::format::{FloatFormat, FpBits, Storage};
use crate::nearest::{round, round_with_ambient_mode, round_with_mode};

/// Native signed integer targets.
pub trait SignedInt: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Width in bits.
    const BITS: u32;
    /// Most negative value.
    const MIN: Self;
    /// Most positive value.
    const MAX: Self;

    /// Two's-complement truncation from `i128`.
    fn wrapping_from_i128(v: i128) -> Self;
}

macro_rules! signed_int {
    ($($ty:ty),*) => {
        $(
            impl SignedInt for $ty {
                const BITS: u32 = <$ty>::BITS;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline(always)]
                fn wrapping_from_i128(v: i128) -> Self {
                    v as Self
                }
            }
        )*
    };
}

signed_int!(i8, i16, i32, i64, i128);

/// Outcome of narrowing an already-rounded value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Narrowed<I> {
    Fits(I),
    NotFinite { negative: bool },
    Overflow { negative: bool },
}

/// Exact integer value of an integral, finite value whose exponent is at most 127.
#[inline]
fn integral_to_i128<F: FloatFormat>(bits: FpBits<F>) -> i128 {
    let exponent = bits.get_exponent();
    if exponent < 0 {
        // Rounded zero; subnormals never survive rounding.
        return 0;
    }

    let significand = bits.get_mantissa().widen() | (1u128 << F::FRACTION_LEN);
    let exponent = exponent as u32;
    let magnitude = if exponent >= F::FRACTION_LEN {
        significand << (exponent - F::FRACTION_LEN)
    } else {
        significand >> (F::FRACTION_LEN - exponent)
    };

    // 2^127 only reaches here as the i128 minimum; wrapping keeps it there.
    let magnitude = magnitude as i128;
    if bits.is_neg() {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

fn narrow<F: FloatFormat, I: SignedInt>(x: F) -> Narrowed<I> {
    let bits = FpBits::new(x);
    let negative = bits.is_neg();

    if bits.is_inf_or_nan() {
        return Narrowed::NotFinite { negative };
    }

    let exponent = bits.get_exponent();
    let exponent_limit = (I::BITS - 1) as i32;
    if exponent > exponent_limit {
        return Narrowed::Overflow { negative };
    }
    if exponent == exponent_limit
        && (bits.is_pos() || bits.get_mantissa() != F::Bits::ZERO)
    {
        return Narrowed::Overflow { negative };
    }

    Narrowed::Fits(I::wrapping_from_i128(integral_to_i128(bits)))
}

/// Narrows an already-rounded value, saturating and signaling on overflow.
pub fn rounded_float_to_signed_integer<F: FloatFormat, I: SignedInt, E: FpEnv + ?Sized>(
    x: F,
    env: &E,
) -> I {
    match narrow::<F, I>(x) {
        Narrowed::Fits(v) => v,
        Narrowed::NotFinite { negative } | Narrowed::Overflow { negative } => {
            signal_domain_error(env);
            if negative { I::MIN } else { I::MAX }
        }
    }
}

/// Rounds half away from zero and narrows to `I`.
///
/// # Examples
///
/// ```
/// use fpround_core::convert::round_to_signed;
/// use fpround_core::env::{Errno, SoftEnv};
///
/// let env = SoftEnv::new();
/// assert_eq!(round_to_signed::<f64, i32, _>(-2.5, &env), -3);
/// assert_eq!(round_to_signed::<f64, i8, _>(1e10, &env), i8::MAX);
/// assert_eq!(env.errno(), Some(Errno::EDOM));
/// ```
#[inline]
pub fn round_to_signed<F: FloatFormat, I: SignedInt, E: FpEnv + ?Sized>(x: F, env: &E) -> I {
    rounded_float_to_signed_integer(round(x), env)
}

/// Rounds with the ambient direction of `env` and narrows to `I`.
#[inline]
pub fn round_to_signed_with_ambient_mode<F: FloatFormat, I: SignedInt, E: FpEnv + ?Sized>(
    x: F,
    env: &E,
) -> I {
    rounded_float_to_signed_integer(round_with_ambient_mode(x, env), env)
}

/// Rounds with `mode` and narrows to `I` without touching any environment.
///
/// # Errors
///
/// [`ConversionError::NotFinite`] for NaN and infinities,
/// [`ConversionError::OutOfRange`] when the rounded value does not fit.
pub fn checked_round_to_signed<F: FloatFormat, I: SignedInt>(
    x: F,
    mode: RoundingMode,
) -> Result<I, ConversionError> {
    match narrow::<F, I>(round_with_mode(x, mode)) {
        Narrowed::Fits(v) => Ok(v),
        Narrowed::NotFinite { .. } => Err(ConversionError::NotFinite),
        Narrowed::Overflow { negative } => Err(ConversionError::OutOfRange {
            bits: I::BITS,
            negative,
        }),
    }
}
