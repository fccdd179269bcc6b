//! Field-level access to a single floating-point encoding.
//!
//! [`FpBits`] wraps the raw storage of a value and exposes the sign, exponent
//! and mantissa fields individually. All constructors build values directly
//! from field patterns, never through arithmetic, so boundary constants such
//! as `2^k` are exact and cannot overflow.

use super::{FloatFormat, Sign, Storage};

/// Raw encoding of a value of format `F`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpBits<F: FloatFormat> {
    bits: F::Bits,
}

impl<F: FloatFormat> FpBits<F> {
    /// Captures the encoding of `x`.
    #[inline(always)]
    pub fn new(x: F) -> Self {
        Self {
            bits: x.to_storage(),
        }
    }

    /// Wraps an existing raw encoding.
    #[inline(always)]
    pub fn from_storage(bits: F::Bits) -> Self {
        Self { bits }
    }

    /// Builds a value from its three fields.
    ///
    /// `biased_exp` is masked to the exponent width and `mantissa` to the
    /// stored significand width.
    #[inline]
    pub fn create_value(sign: Sign, biased_exp: u32, mantissa: F::Bits) -> Self {
        let sign_bits = if sign.is_neg() { F::SIGN_MASK } else { F::Bits::ZERO };
        let exp_bits = (F::Bits::from_u32(biased_exp) << F::FRACTION_LEN) & F::EXP_MASK;
        Self {
            bits: sign_bits | exp_bits | (mantissa & F::SIG_MASK),
        }
    }

    /// Builds `±2^k` from its exponent field alone.
    ///
    /// Powers of two have an all-zero mantissa, so only the biased exponent
    /// `k + EXP_BIAS` needs to be computed. Callers keep `k` within
    /// `[1 - EXP_BIAS, EXP_BIAS]`.
    #[inline]
    pub fn pow2(sign: Sign, k: u32) -> Self {
        Self::create_value(sign, k + F::EXP_BIAS, F::Bits::ZERO)
    }

    /// Signed zero.
    #[inline]
    pub fn zero(sign: Sign) -> Self {
        Self::create_value(sign, 0, F::Bits::ZERO)
    }

    /// Signed one.
    #[inline]
    pub fn one(sign: Sign) -> Self {
        Self::create_value(sign, F::EXP_BIAS, F::Bits::ZERO)
    }

    /// Signed infinity.
    #[inline]
    pub fn inf(sign: Sign) -> Self {
        Self::create_value(sign, F::EXP_SAT, F::Bits::ZERO)
    }

    /// Positive quiet NaN with an empty payload.
    #[inline]
    pub fn quiet_nan() -> Self {
        Self::create_value(Sign::Pos, F::EXP_SAT, F::QUIET_BIT)
    }

    /// Returns the encoded value.
    #[inline(always)]
    pub fn get_val(self) -> F {
        F::from_storage(self.bits)
    }

    /// Returns the full raw encoding.
    #[inline(always)]
    pub fn uintval(self) -> F::Bits {
        self.bits
    }

    /// Replaces the full raw encoding.
    #[inline(always)]
    pub fn set_uintval(&mut self, bits: F::Bits) {
        self.bits = bits;
    }

    /// Sign of the encoding, NaNs and zeros included.
    #[inline(always)]
    pub fn sign(self) -> Sign {
        if self.bits & F::SIGN_MASK == F::Bits::ZERO {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }

    /// True when the sign bit is set.
    #[inline(always)]
    pub fn is_neg(self) -> bool {
        self.sign().is_neg()
    }

    /// True when the sign bit is clear.
    #[inline(always)]
    pub fn is_pos(self) -> bool {
        self.sign().is_pos()
    }

    /// Raw exponent field.
    #[inline(always)]
    pub fn biased_exponent(self) -> u32 {
        ((self.bits & F::EXP_MASK) >> F::FRACTION_LEN).low_u32()
    }

    /// Unbiased exponent.
    ///
    /// Zeros and subnormals report `-EXP_BIAS`, which is always `<= -1`.
    #[inline(always)]
    pub fn get_exponent(self) -> i32 {
        self.biased_exponent() as i32 - F::EXP_BIAS as i32
    }

    /// Stored mantissa bits, without the implicit leading one.
    #[inline(always)]
    pub fn get_mantissa(self) -> F::Bits {
        self.bits & F::FRACTION_MASK
    }

    /// Replaces the stored mantissa, leaving sign and exponent untouched.
    #[inline(always)]
    pub fn set_mantissa(&mut self, mantissa: F::Bits) {
        self.bits = (self.bits & !F::FRACTION_MASK) | (mantissa & F::FRACTION_MASK);
    }

    /// True for `±0`.
    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.bits & !F::SIGN_MASK == F::Bits::ZERO
    }

    /// True for `±inf`.
    #[inline(always)]
    pub fn is_inf(self) -> bool {
        self.bits & !F::SIGN_MASK == F::EXP_MASK
    }

    /// True for any NaN, quiet or signaling.
    #[inline(always)]
    pub fn is_nan(self) -> bool {
        self.bits & !F::SIGN_MASK > F::EXP_MASK
    }

    /// True for infinities and NaNs alike.
    #[inline(always)]
    pub fn is_inf_or_nan(self) -> bool {
        self.bits & F::EXP_MASK == F::EXP_MASK
    }

    /// True for a NaN with the quiet bit set.
    #[inline]
    pub fn is_quiet_nan(self) -> bool {
        self.is_nan() && self.bits & F::QUIET_BIT != F::Bits::ZERO
    }

    /// True for a NaN with the quiet bit clear.
    #[inline]
    pub fn is_signaling_nan(self) -> bool {
        self.is_nan() && self.bits & F::QUIET_BIT == F::Bits::ZERO
    }
}
