//! Configuration for the software floating-point environment.
//!
//! This module defines the knobs a host uses to shape [`SoftEnv`](crate::env::SoftEnv):
//! 1. **Defaults:** Baseline behavior when a field is omitted.
//! 2. **Signals:** Whether exceptions and errno-style domain errors are recorded ([`SignalConfig`]).
//! 3. **Environment:** Initial ambient rounding plus signal policy ([`EnvConfig`]).
//!
//! Configuration is supplied as JSON (see [`EnvConfig::from_json`]) or built in code.

use serde::{Deserialize, Serialize};

use crate::env::AmbientRounding;
use crate::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Exception flags are recorded unless disabled.
    pub const EXCEPTIONS: bool = true;

    /// Domain errors are recorded unless disabled.
    pub const ERRNO: bool = true;
}

/// Signal policy for an environment.
///
/// Both channels are independent. A disabled channel turns the matching
/// environment call into a no-op; numeric results never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalConfig {
    /// Record IEEE exception flags.
    #[serde(default = "SignalConfig::default_exceptions")]
    pub exceptions: bool,

    /// Record errno-style domain errors.
    #[serde(default = "SignalConfig::default_errno")]
    pub errno: bool,
}

impl SignalConfig {
    /// Both channels enabled.
    pub const fn signaling() -> Self {
        Self {
            exceptions: true,
            errno: true,
        }
    }

    /// Both channels disabled.
    pub const fn silent() -> Self {
        Self {
            exceptions: false,
            errno: false,
        }
    }

    fn default_exceptions() -> bool {
        defaults::EXCEPTIONS
    }

    fn default_errno() -> bool {
        defaults::ERRNO
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            exceptions: defaults::EXCEPTIONS,
            errno: defaults::ERRNO,
        }
    }
}

/// Complete environment configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvConfig {
    /// Initial ambient rounding direction.
    #[serde(default)]
    pub rounding: AmbientRounding,

    /// Signal policy.
    #[serde(default)]
    pub signals: SignalConfig,
}

impl EnvConfig {
    /// Parses a JSON configuration document.
    ///
    /// Every field is optional:
    ///
    /// ```
    /// use fpround_core::config::EnvConfig;
    /// use fpround_core::env::AmbientRounding;
    ///
    /// let cfg = EnvConfig::from_json(r#"{ "rounding": "downward", "signals": { "errno": false } }"#)?;
    /// assert_eq!(cfg.rounding, AmbientRounding::Downward);
    /// assert!(cfg.signals.exceptions);
    /// assert!(!cfg.signals.errno);
    /// # Ok::<(), fpround_core::error::ConfigError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON, unknown fields or
    /// unknown rounding names.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
