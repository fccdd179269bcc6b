//! Mocks for injectable crate traits.

/// Mock floating-point environment.
pub mod env;
