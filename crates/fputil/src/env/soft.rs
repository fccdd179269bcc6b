//! Software floating-point environment.
//!
//! [`SoftEnv`] keeps the ambient rounding direction, the accrued exception
//! flags and the last errno value in plain cells. It is `!Sync`, so one
//! instance always belongs to one thread.
//!
//! [`ThreadEnv`] is a zero-sized handle to a per-thread `SoftEnv`. Every thread
//! observes and mutates only its own state.

use std::cell::Cell;

use crate::config::{EnvConfig, SignalConfig};

use super::{AmbientRounding, Errno, FpEnv, FpFlags};

/// Cell-backed environment state.
#[derive(Debug, Default)]
pub struct SoftEnv {
    rounding: Cell<AmbientRounding>,
    flags: Cell<FpFlags>,
    errno: Cell<Option<Errno>>,
    signals: Cell<SignalConfig>,
}

impl SoftEnv {
    /// Creates an environment rounding to nearest with every signal enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a configuration.
    pub fn with_config(config: EnvConfig) -> Self {
        Self {
            rounding: Cell::new(config.rounding),
            signals: Cell::new(config.signals),
            ..Self::default()
        }
    }

    /// Creates an environment with the given signal policy.
    pub fn with_signals(signals: SignalConfig) -> Self {
        Self::with_config(EnvConfig {
            signals,
            ..EnvConfig::default()
        })
    }

    /// Applies a configuration, keeping accrued flags and errno.
    pub fn configure(&self, config: EnvConfig) {
        self.set_rounding(config.rounding);
        self.signals.set(config.signals);
    }

    /// Current signal policy.
    pub fn signals(&self) -> SignalConfig {
        self.signals.get()
    }

    /// Changes the ambient rounding direction.
    pub fn set_rounding(&self, mode: AmbientRounding) {
        let previous = self.rounding.replace(mode);
        if previous != mode {
            tracing::debug!(from = %previous, to = %mode, "ambient rounding changed");
        }
    }

    /// Accrued exception flags.
    pub fn flags(&self) -> FpFlags {
        self.flags.get()
    }

    /// Returns the accrued flags that are also in `mask`.
    pub fn test_flags(&self, mask: FpFlags) -> FpFlags {
        self.flags.get() & mask
    }

    /// Clears the accrued flags in `mask`.
    pub fn clear_flags(&self, mask: FpFlags) {
        self.flags.set(self.flags.get() & !mask);
    }

    /// Returns and clears every accrued flag.
    pub fn take_flags(&self) -> FpFlags {
        self.flags.take()
    }

    /// Last reported errno, if any.
    pub fn errno(&self) -> Option<Errno> {
        self.errno.get()
    }

    /// Forgets the last reported errno.
    pub fn clear_errno(&self) {
        self.errno.set(None);
    }

    /// Clears flags and errno, keeping rounding and signal policy.
    pub fn reset(&self) {
        self.flags.set(FpFlags::NONE);
        self.errno.set(None);
    }
}

impl FpEnv for SoftEnv {
    #[inline]
    fn rounding(&self) -> AmbientRounding {
        self.rounding.get()
    }

    fn raise(&self, flags: FpFlags) {
        if !self.signals.get().exceptions {
            tracing::trace!(%flags, "exception support disabled, not raising");
            return;
        }
        tracing::trace!(%flags, "raising floating-point exceptions");
        self.flags.set(self.flags.get() | flags);
    }

    fn set_errno(&self, errno: Errno) {
        if !self.signals.get().errno {
            tracing::trace!(%errno, "errno support disabled, not reporting");
            return;
        }
        tracing::trace!(%errno, "reporting errno");
        self.errno.set(Some(errno));
    }
}

thread_local! {
    static THREAD_ENV: SoftEnv = SoftEnv::new();
}

/// Handle to the calling thread's [`SoftEnv`].
///
/// ```
/// use fpround_core::env::{AmbientRounding, FpFlags, ThreadEnv};
/// use fpround_core::nearest::rint;
///
/// ThreadEnv::set_rounding(AmbientRounding::Upward);
/// assert_eq!(rint(1.25_f64), 2.0);
/// ThreadEnv::set_rounding(AmbientRounding::ToNearest);
/// assert_eq!(ThreadEnv::take_flags(), FpFlags::NONE);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThreadEnv;

impl ThreadEnv {
    /// Applies a configuration to this thread's environment.
    pub fn configure(config: EnvConfig) {
        THREAD_ENV.with(|env| env.configure(config));
    }

    /// Changes this thread's ambient rounding direction.
    pub fn set_rounding(mode: AmbientRounding) {
        THREAD_ENV.with(|env| env.set_rounding(mode));
    }

    /// Accrued exception flags of this thread.
    pub fn flags() -> FpFlags {
        THREAD_ENV.with(SoftEnv::flags)
    }

    /// Returns and clears this thread's accrued flags.
    pub fn take_flags() -> FpFlags {
        THREAD_ENV.with(SoftEnv::take_flags)
    }

    /// Last errno reported on this thread.
    pub fn errno() -> Option<Errno> {
        THREAD_ENV.with(SoftEnv::errno)
    }

    /// Clears this thread's flags and errno.
    pub fn reset() {
        THREAD_ENV.with(SoftEnv::reset);
    }
}

impl FpEnv for ThreadEnv {
    #[inline]
    fn rounding(&self) -> AmbientRounding {
        THREAD_ENV.with(FpEnv::rounding)
    }

    #[inline]
    fn raise(&self, flags: FpFlags) {
        THREAD_ENV.with(|env| env.raise(flags));
    }

    #[inline]
    fn set_errno(&self, errno: Errno) {
        THREAD_ENV.with(|env| env.set_errno(errno));
    }
}
