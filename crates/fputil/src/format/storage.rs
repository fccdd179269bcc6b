//! Unsigned storage integers backing a floating-point encoding.
//!
//! Every supported format is manipulated through the unsigned integer of the
//! same width (`u32` for `f32`, `u64` for `f64`). The rounding algorithms only
//! need shifts, masks and a widening step for exact integer narrowing.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr, Sub};

/// Unsigned integer holding the raw bit pattern of a float.
pub trait Storage:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Sub<Output = Self>
    + 'static
{
    /// All bits clear.
    const ZERO: Self;
    /// Only the lowest bit set.
    const ONE: Self;
    /// Width of the integer in bits.
    const BITS: u32;

    /// Converts an exponent field or small constant into storage width.
    fn from_u32(v: u32) -> Self;

    /// Truncates to the low 32 bits. Used to read back the exponent field.
    fn low_u32(self) -> u32;

    /// Zero-extends to `u128` for exact integer narrowing.
    fn widen(self) -> u128;

    /// Returns a mask with the low `n` bits set.
    #[inline]
    fn low_mask(n: u32) -> Self {
        if n >= Self::BITS {
            !Self::ZERO
        } else {
            (Self::ONE << n) - Self::ONE
        }
    }
}

macro_rules! storage_impl {
    ($($ty:ty),*) => {
        $(
            impl Storage for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn from_u32(v: u32) -> Self {
                    v as Self
                }

                #[inline(always)]
                fn low_u32(self) -> u32 {
                    self as u32
                }

                #[inline(always)]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

storage_impl!(u32, u64);
