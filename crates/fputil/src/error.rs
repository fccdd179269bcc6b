//! Error types for the fallible, Rust-facing parts of the crate.
//!
//! The IEEE-facing operations never return errors: they report through the
//! floating-point environment and a NaN or saturated result. These types cover
//! the surfaces around them:
//! 1. **Parsing:** Rounding mode names ([`ParseModeError`]).
//! 2. **Configuration:** Environment configuration documents ([`ConfigError`]).
//! 3. **Checked conversion:** Environment-free narrowing ([`ConversionError`]).

use thiserror::Error;

/// Failure to decode a rounding mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseModeError {
    /// The name matches no rounding mode.
    #[error("unknown rounding mode `{0}`")]
    UnknownName(String),

    /// The name is a valid explicit mode with no environment counterpart.
    #[error("`{0}` has no floating-point environment equivalent")]
    NotAmbient(String),
}

/// Failure to load an environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the schema.
    #[error("invalid environment configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a checked float-to-integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The source was NaN or infinite.
    #[error("cannot convert a NaN or infinite value to an integer")]
    NotFinite,

    /// The rounded value lies outside the target integer range.
    #[error("rounded value overflows a {bits}-bit signed integer ({})", direction(.negative))]
    OutOfRange {
        /// Width of the target integer.
        bits: u32,
        /// Sign of the rejected value.
        negative: bool,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn direction(negative: &bool) -> &'static str {
    if *negative { "below minimum" } else { "above maximum" }
}
