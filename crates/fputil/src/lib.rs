//! Bit-exact IEEE 754 nearest-integer operations.
//!
//! This crate rounds binary floating-point values to integral values and
//! converts them to integers by editing their encodings directly, with no
//! reliance on the host FPU's rounding instructions or rounding mode:
//! 1. **Format:** Sign/exponent/mantissa access for `f32` and `f64`.
//! 2. **Rounding:** `trunc`, `ceil`, `floor`, `round` and all five directed modes.
//! 3. **Conversion:** Fixed-width domain checks (`fromfp`) and native integer narrowing (`lround`/`lrint`).
//! 4. **Environment:** Ambient rounding mode, exception flags and errno behind an injectable trait.
//! 5. **Configuration:** Signal policy and initial rounding, loadable from JSON.

/// Environment configuration (signal policy, initial rounding).
pub mod config;
/// Float-to-integer conversions (fixed-width domains, native integers).
pub mod convert;
/// Floating-point environment (rounding modes, flags, errno).
pub mod env;
/// Error types for parsing, configuration and checked conversion.
pub mod error;
/// Binary layout of supported float formats.
pub mod format;
/// Nearest-integer rounding primitives and the directed-rounding engine.
pub mod nearest;

/// Injectable floating-point environment; pass `&ThreadEnv` for per-thread state.
pub use crate::env::{FpEnv, RoundingMode, ThreadEnv};
/// Format capability implemented for `f32` and `f64`.
pub use crate::format::FloatFormat;
