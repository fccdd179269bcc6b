//! IEEE 754 binary interchange formats.
//!
//! This module is the bit-field view every rounding routine works through. It
//! provides:
//! 1. **Metadata:** Field widths, exponent bias and masks per format ([`FloatFormat`]).
//! 2. **Storage:** The unsigned integer carrying the raw encoding ([`Storage`]).
//! 3. **Bit access:** Sign/exponent/mantissa extraction and reconstruction ([`FpBits`]).
//!
//! Formats are supported for `f32` (binary32) and `f64` (binary64).

/// Sign/exponent/mantissa accessor over a single encoded value.
pub mod bits;

/// Unsigned storage integers for raw encodings.
pub mod storage;

use std::fmt;
use std::ops::{Add, Neg, Sub};

pub use self::bits::FpBits;
pub use self::storage::Storage;

/// Sign of an encoded value, read straight from the sign bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Sign bit clear.
    Pos,
    /// Sign bit set.
    Neg,
}

impl Sign {
    /// Returns true for [`Sign::Neg`].
    #[inline(always)]
    pub const fn is_neg(self) -> bool {
        matches!(self, Self::Neg)
    }

    /// Returns true for [`Sign::Pos`].
    #[inline(always)]
    pub const fn is_pos(self) -> bool {
        matches!(self, Self::Pos)
    }
}

/// Capability trait binding a native float type to its binary layout.
///
/// The arithmetic bounds (`Add`, `Sub`, `Neg`) are only used for steps that
/// are exact by construction: adding or subtracting one to an integral value
/// whose magnitude is below `2^FRACTION_LEN`, and sign flips.
pub trait FloatFormat:
    Copy
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Unsigned integer of the same width as the float.
    type Bits: Storage;

    /// Total encoding width.
    const TOTAL_LEN: u32;

    /// Number of explicitly stored mantissa bits.
    const FRACTION_LEN: u32;

    /// Exponent field width.
    const EXP_LEN: u32 = Self::TOTAL_LEN - Self::FRACTION_LEN - 1;

    /// All-ones exponent field, shifted fully right.
    const EXP_SAT: u32 = (1 << Self::EXP_LEN) - 1;

    /// Exponent bias.
    const EXP_BIAS: u32 = Self::EXP_SAT >> 1;

    /// Mask for the sign bit.
    const SIGN_MASK: Self::Bits;

    /// Mask for the exponent field.
    const EXP_MASK: Self::Bits;

    /// Mask for the stored mantissa bits.
    const FRACTION_MASK: Self::Bits;

    /// Mask for the significand as stored in the encoding.
    ///
    /// Binary interchange formats keep the leading bit implicit, so this equals
    /// [`FRACTION_MASK`](Self::FRACTION_MASK).
    const SIG_MASK: Self::Bits;

    /// Top mantissa bit; set on quiet NaNs.
    const QUIET_BIT: Self::Bits;

    /// Reinterprets the value as its raw encoding.
    fn to_storage(self) -> Self::Bits;

    /// Reinterprets a raw encoding as a value.
    fn from_storage(bits: Self::Bits) -> Self;
}

macro_rules! float_format {
    ($ty:ty, $bits:ty, $total:expr, $fraction:expr) => {
        impl FloatFormat for $ty {
            type Bits = $bits;

            const TOTAL_LEN: u32 = $total;
            const FRACTION_LEN: u32 = $fraction;

            const SIGN_MASK: $bits = 1 << ($total - 1);
            const FRACTION_MASK: $bits = (1 << $fraction) - 1;
            const EXP_MASK: $bits = !(Self::SIGN_MASK | Self::FRACTION_MASK);
            const SIG_MASK: $bits = Self::FRACTION_MASK;
            const QUIET_BIT: $bits = 1 << ($fraction - 1);

            #[inline(always)]
            fn to_storage(self) -> $bits {
                self.to_bits()
            }

            #[inline(always)]
            fn from_storage(bits: $bits) -> Self {
                <$ty>::from_bits(bits)
            }
        }
    };
}

float_format!(f32, u32, 32, 23);
float_format!(f64, u64, 64, 52);
