//! Float-to-integer conversions.
//!
//! - [`fixed`]: round into a `width`-bit signed/unsigned domain, result kept as a float.
//! - [`integer`]: round and narrow into a native signed integer, saturating on overflow.

/// Fixed-width domain conversion (`fromfp` family).
pub mod fixed;

/// Native signed integer conversion (`lround`/`lrint` family).
pub mod integer;

pub use self::fixed::{to_fixed_domain, to_fixed_domain_exact};
pub use self::integer::{
    SignedInt, checked_round_to_signed, round_to_signed, round_to_signed_with_ambient_mode,
    rounded_float_to_signed_integer,
};
