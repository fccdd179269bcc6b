//! # Unit Components
//!
//! Tests grouped by layer, leaf-first: bit-field access, rounding primitives,
//! directed rounding, conversions, and the floating-point environment.



/// Directed rounding with explicit and ambient modes.
pub mod directed;



/// Software environment, signal policy and configuration.
pub mod env;
