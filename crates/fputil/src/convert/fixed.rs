//! Rounding into a fixed-width integer domain (`fromfp` / `fromfpx`).
//!
//! The result stays a float: the value is rounded in the requested direction
//! and then checked against the range of a `width`-bit signed or unsigned
//! integer. Out-of-domain results become a quiet NaN and signal invalid plus a
//! domain error.
//!
//! Domain bounds are powers of two, built from their exponent field with
//! [`FpBits::pow2`]. A bound whose exponent exceeds the format's bias is above
//! every finite value, so the corresponding check is skipped instead of
//! computed.

use crate::env::{FpEnv, FpFlags, RoundingMode, signal_domain_error};
use crate::format::{FloatFormat, FpBits, Sign};
use crate::nearest::round_with_mode;

/// Rounds `x` with `mode` and checks the result against a `width`-bit domain.
///
/// `SIGNED` selects `[-2^(width-1), 2^(width-1) - 1]`, otherwise
/// `[0, 2^width - 1]`.
///
/// Returns a quiet NaN and raises invalid when `width` is zero, when `x` is
/// infinite or NaN, or when the rounded value falls outside the domain. The
/// last case additionally reports a domain error.
///
/// # Examples
///
/// ```
/// use fpround_core::convert::to_fixed_domain;
/// use fpround_core::env::{Errno, FpFlags, RoundingMode, SoftEnv};
///
/// let env = SoftEnv::new();
/// assert_eq!(to_fixed_domain::<true, _, _>(-128.4_f64, RoundingMode::TowardZero, 8, &env), -128.0);
/// assert!(to_fixed_domain::<true, _, _>(200.0_f64, RoundingMode::TowardZero, 8, &env).is_nan());
/// assert_eq!(env.errno(), Some(Errno::EDOM));
/// assert!(env.flags().contains(FpFlags::NV));
/// ```
pub fn to_fixed_domain<const SIGNED: bool, F: FloatFormat, E: FpEnv + ?Sized>(
    x: F,
    mode: RoundingMode,
    width: u32,
    env: &E,
) -> F {
    let quiet_nan = FpBits::<F>::quiet_nan().get_val();

    if width == 0 {
        env.raise(FpFlags::NV);
        return quiet_nan;
    }

    if FpBits::new(x).is_inf_or_nan() {
        env.raise(FpFlags::NV);
        return quiet_nan;
    }

    let rounded = round_with_mode(x, mode);
    let one = FpBits::<F>::one(Sign::Pos).get_val();

    if SIGNED {
        // No finite value reaches 2^(EXP_BIAS + 1).
        if width - 1 > F::EXP_BIAS {
            return rounded;
        }

        let range_min = FpBits::<F>::pow2(Sign::Neg, width - 1).get_val();
        let range_max = FpBits::<F>::pow2(Sign::Pos, width - 1).get_val() - one;
        if rounded < range_min || rounded > range_max {
            signal_domain_error(env);
            return quiet_nan;
        }
        return rounded;
    }

    // -0.0 compares equal to zero and is accepted.
    if rounded < FpBits::<F>::zero(Sign::Pos).get_val() {
        signal_domain_error(env);
        return quiet_nan;
    }

    if width > F::EXP_BIAS {
        return rounded;
    }

    let range_max = FpBits::<F>::pow2(Sign::Pos, width).get_val() - one;
    if rounded > range_max {
        signal_domain_error(env);
        return quiet_nan;
    }

    rounded
}

/// Same as [`to_fixed_domain`], but raises inexact when the result is a
/// number that differs from `x`.
///
/// Integral inputs inside the domain never raise inexact.
pub fn to_fixed_domain_exact<const SIGNED: bool, F: FloatFormat, E: FpEnv + ?Sized>(
    x: F,
    mode: RoundingMode,
    width: u32,
    env: &E,
) -> F {
    let rounded = to_fixed_domain::<SIGNED, F, E>(x, mode, width, env);

    if !FpBits::new(rounded).is_nan() && rounded != x {
        env.raise(FpFlags::NX);
    }

    rounded
}
