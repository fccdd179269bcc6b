//! Rounding direction selectors.
//!
//! Two distinct selectors exist:
//!
//! | Type               | Values | Used by                                  |
//! |--------------------|--------|------------------------------------------|
//! | [`RoundingMode`]   | 5      | Explicit-mode rounding and conversions   |
//! | [`AmbientRounding`]| 4      | The floating-point environment register  |
//!
//! The 3-bit encoding follows the RISC-V `frm` field:
//!
//! | Value | Mode | Description                             |
//! |-------|------|-----------------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even          |
//! | 0b001 | RTZ  | Round towards Zero                      |
//! | 0b010 | RDN  | Round Down (towards −∞)                 |
//! | 0b011 | RUP  | Round Up (towards +∞)                   |
//! | 0b100 | RMM  | Round to Nearest, ties to Max Magnitude |
//!
//! The environment register has no ties-away state, so RMM only decodes into
//! [`RoundingMode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

/// Directed rounding semantics accepted by explicit-mode operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    ToNearestEven = 0b000,
    /// Round towards Zero.
    TowardZero = 0b001,
    /// Round Down (towards −∞).
    Downward = 0b010,
    /// Round Up (towards +∞).
    Upward = 0b011,
    /// Round to Nearest, ties away from zero.
    ToNearestAwayFromZero = 0b100,
}

impl RoundingMode {
    /// Every mode, in encoding order.
    pub const ALL: [Self; 5] = [
        Self::ToNearestEven,
        Self::TowardZero,
        Self::Downward,
        Self::Upward,
        Self::ToNearestAwayFromZero,
    ];

    /// Decodes a 3-bit rounding mode field.
    ///
    /// Returns `None` for reserved encodings (0b101, 0b110) and the dynamic
    /// sentinel (0b111), which the caller resolves through the environment.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::ToNearestEven),
            0b001 => Some(Self::TowardZero),
            0b010 => Some(Self::Downward),
            0b011 => Some(Self::Upward),
            0b100 => Some(Self::ToNearestAwayFromZero),
            _ => None,
        }
    }

    /// Decodes a C23 `FP_INT_*` macro value as passed to `fromfp`.
    ///
    /// | Macro                      | Value |
    /// |----------------------------|-------|
    /// | `FP_INT_UPWARD`            | 0     |
    /// | `FP_INT_DOWNWARD`          | 1     |
    /// | `FP_INT_TOWARDZERO`        | 2     |
    /// | `FP_INT_TONEARESTFROMZERO` | 3     |
    /// | `FP_INT_TONEAREST`         | 4     |
    ///
    /// Unknown values select ties-to-even.
    pub const fn from_fp_int(rnd: i32) -> Self {
        match rnd {
            0 => Self::Upward,
            1 => Self::Downward,
            2 => Self::TowardZero,
            3 => Self::ToNearestAwayFromZero,
            _ => Self::ToNearestEven,
        }
    }

    /// Short mnemonic (`rne`, `rtz`, `rdn`, `rup`, `rmm`).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::ToNearestEven => "rne",
            Self::TowardZero => "rtz",
            Self::Downward => "rdn",
            Self::Upward => "rup",
            Self::ToNearestAwayFromZero => "rmm",
        }
    }
}

impl From<AmbientRounding> for RoundingMode {
    fn from(ambient: AmbientRounding) -> Self {
        match ambient {
            AmbientRounding::ToNearest => Self::ToNearestEven,
            AmbientRounding::Downward => Self::Downward,
            AmbientRounding::Upward => Self::Upward,
            AmbientRounding::TowardZero => Self::TowardZero,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for RoundingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rne" | "nearest" | "to-nearest-even" | "tonearest" => Ok(Self::ToNearestEven),
            "rtz" | "zero" | "toward-zero" | "towardzero" => Ok(Self::TowardZero),
            "rdn" | "down" | "downward" => Ok(Self::Downward),
            "rup" | "up" | "upward" => Ok(Self::Upward),
            "rmm" | "away" | "to-nearest-away" | "tonearestfromzero" => {
                Ok(Self::ToNearestAwayFromZero)
            }
            _ => Err(ParseModeError::UnknownName(s.to_owned())),
        }
    }
}

/// Rounding direction held by the floating-point environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AmbientRounding {
    /// Round to nearest, ties to even.
    #[default]
    ToNearest = 0b000,
    /// Round towards zero.
    TowardZero = 0b001,
    /// Round towards −∞.
    Downward = 0b010,
    /// Round towards +∞.
    Upward = 0b011,
}

impl AmbientRounding {
    /// Decodes the environment register field.
    ///
    /// Returns `None` for RMM, the reserved encodings and the dynamic
    /// sentinel; none of them is a valid ambient state.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::ToNearest),
            0b001 => Some(Self::TowardZero),
            0b010 => Some(Self::Downward),
            0b011 => Some(Self::Upward),
            _ => None,
        }
    }

    /// Returns the 3-bit register encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for AmbientRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        RoundingMode::from(*self).fmt(f)
    }
}

impl FromStr for AmbientRounding {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<RoundingMode>()? {
            RoundingMode::ToNearestEven => Ok(Self::ToNearest),
            RoundingMode::TowardZero => Ok(Self::TowardZero),
            RoundingMode::Downward => Ok(Self::Downward),
            RoundingMode::Upward => Ok(Self::Upward),
            RoundingMode::ToNearestAwayFromZero => Err(ParseModeError::NotAmbient(s.to_owned())),
        }
    }
}
