//! Floating-point environment.
//!
//! The rounding core is referentially transparent: it never touches process or
//! hardware state directly. Everything ambient goes through [`FpEnv`]:
//! - [`FpEnv::rounding`]: the current ambient rounding direction.
//! - [`FpEnv::raise`]: IEEE exception signaling (invalid, inexact, ...).
//! - [`FpEnv::set_errno`]: errno-style domain error reporting.
//!
//! Submodules:
//! - [`rounding_modes`]: explicit and ambient rounding selectors.
//! - [`exception_flags`]: the IEEE flag set.
//! - [`soft`]: a software environment and the per-thread handle.

/// IEEE exception flag set.
pub mod exception_flags;

/// Explicit and ambient rounding directions.
pub mod rounding_modes;

/// Software environment implementations.
pub mod soft;

use std::fmt;

pub use self::exception_flags::FpFlags;
pub use self::rounding_modes::{AmbientRounding, RoundingMode};
pub use self::soft::{SoftEnv, ThreadEnv};

/// errno-style status code.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(pub i32);

impl Errno {
    /// Mathematics argument out of domain of function.
    pub const EDOM: Self = Self(libc::EDOM);

    /// Result too large.
    ///
    /// No operation in this crate reports it; it is named so that `Debug`
    /// and `Display` print the code symbolically when a host environment
    /// records it.
    pub const ERANGE: Self = Self(libc::ERANGE);
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EDOM => f.write_str("EDOM"),
            Self::ERANGE => f.write_str("ERANGE"),
            Self(code) => write!(f, "Errno({code})"),
        }
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Access to the calling thread's floating-point environment.
///
/// Implementations decide whether signals are recorded; callers must only rely
/// on numeric return values, never on a signal having taken effect.
pub trait FpEnv {
    /// Reads the ambient rounding direction.
    fn rounding(&self) -> AmbientRounding;

    /// Raises the given exception flags.
    fn raise(&self, flags: FpFlags);

    /// Reports an errno-style status code.
    fn set_errno(&self, errno: Errno);
}

impl<E: FpEnv + ?Sized> FpEnv for &E {
    #[inline]
    fn rounding(&self) -> AmbientRounding {
        (**self).rounding()
    }

    #[inline]
    fn raise(&self, flags: FpFlags) {
        (**self).raise(flags);
    }

    #[inline]
    fn set_errno(&self, errno: Errno) {
        (**self).set_errno(errno);
    }
}

/// Reports a domain error and raises invalid-operation.
#[inline]
pub(crate) fn signal_domain_error<E: FpEnv + ?Sized>(env: &E) {
    env.set_errno(Errno::EDOM);
    env.raise(FpFlags::NV);
}
