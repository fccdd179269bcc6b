//! Subcommand execution against a software environment.

use std::fmt::Display;
use std::str::FromStr;

use fpround_core::FloatFormat;
use fpround_core::convert::{
    SignedInt, checked_round_to_signed, round_to_signed, round_to_signed_with_ambient_mode,
    to_fixed_domain, to_fixed_domain_exact,
};
use fpround_core::env::{FpEnv, RoundingMode, SoftEnv};
use fpround_core::nearest::{round_with_ambient_mode, round_with_mode};

use crate::report::Report;
use crate::{CliError, Command, IntBits, Precision};

/// Float formats the CLI can parse and print.
trait CliFloat: FloatFormat + FromStr + Display {}

impl<F: FloatFormat + FromStr + Display> CliFloat for F {}

/// How a value is narrowed to a native integer.
#[derive(Clone, Copy, Debug)]
enum Narrow {
    /// Ties away from zero, saturating.
    Lround,
    /// Ambient direction, saturating.
    Lrint,
    /// Explicit direction, failing on overflow.
    Checked(RoundingMode),
}

/// Runs one subcommand and collects its result and signals.
pub(crate) fn dispatch(command: &Command, env: &SoftEnv) -> Result<Report, CliError> {
    match command {
        Command::Round {
            value,
            mode,
            ambient,
            precision,
        } => {
            if let Some(ambient) = ambient {
                env.set_rounding(*ambient);
            }
            let result = match precision {
                Precision::F32 => round_as::<f32>(value, *mode, env)?,
                Precision::F64 => round_as::<f64>(value, *mode, env)?,
            };
            let mode = mode.unwrap_or_else(|| RoundingMode::from(env.rounding()));
            Ok(Report::new("round", value, mode, result, env))
        }
        Command::Fromfp {
            value,
            width,
            mode,
            unsigned,
            exact,
            precision,
        } => {
            let result = match precision {
                Precision::F32 => fromfp_as::<f32>(value, *mode, *width, !*unsigned, *exact, env)?,
                Precision::F64 => fromfp_as::<f64>(value, *mode, *width, !*unsigned, *exact, env)?,
            };
            let operation = if *exact { "fromfpx" } else { "fromfp" };
            Ok(Report::new(operation, value, *mode, result, env))
        }
        Command::Lround {
            value,
            bits,
            precision,
        } => {
            let result = narrow(value, *bits, *precision, Narrow::Lround, env)?;
            Ok(Report::new(
                "lround",
                value,
                RoundingMode::ToNearestAwayFromZero,
                result,
                env,
            ))
        }
        Command::Lrint {
            value,
            ambient,
            bits,
            precision,
        } => {
            if let Some(ambient) = ambient {
                env.set_rounding(*ambient);
            }
            let result = narrow(value, *bits, *precision, Narrow::Lrint, env)?;
            let mode = RoundingMode::from(env.rounding());
            Ok(Report::new("lrint", value, mode, result, env))
        }
        Command::Int {
            value,
            mode,
            bits,
            precision,
        } => {
            let result = narrow(value, *bits, *precision, Narrow::Checked(*mode), env)?;
            Ok(Report::new("int", value, *mode, result, env))
        }
    }
}

fn parse<F: CliFloat>(value: &str) -> Result<F, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::ParseValue(value.to_owned()))
}

fn round_as<F: CliFloat>(
    value: &str,
    mode: Option<RoundingMode>,
    env: &SoftEnv,
) -> Result<String, CliError> {
    let x = parse::<F>(value)?;
    let rounded = match mode {
        Some(mode) => round_with_mode(x, mode),
        None => round_with_ambient_mode(x, env),
    };
    Ok(rounded.to_string())
}

fn fromfp_as<F: CliFloat>(
    value: &str,
    mode: RoundingMode,
    width: u32,
    signed: bool,
    exact: bool,
    env: &SoftEnv,
) -> Result<String, CliError> {
    let x = parse::<F>(value)?;
    let result = match (signed, exact) {
        (true, false) => to_fixed_domain::<true, F, _>(x, mode, width, env),
        (false, false) => to_fixed_domain::<false, F, _>(x, mode, width, env),
        (true, true) => to_fixed_domain_exact::<true, F, _>(x, mode, width, env),
        (false, true) => to_fixed_domain_exact::<false, F, _>(x, mode, width, env),
    };
    Ok(result.to_string())
}

fn narrow(
    value: &str,
    bits: IntBits,
    precision: Precision,
    how: Narrow,
    env: &SoftEnv,
) -> Result<String, CliError> {
    match precision {
        Precision::F32 => narrow_from::<f32>(parse(value)?, bits, how, env),
        Precision::F64 => narrow_from::<f64>(parse(value)?, bits, how, env),
    }
}

fn narrow_from<F: CliFloat>(
    x: F,
    bits: IntBits,
    how: Narrow,
    env: &SoftEnv,
) -> Result<String, CliError> {
    let value = match bits {
        IntBits::I8 => narrow_to::<F, i8>(x, how, env)?,
        IntBits::I16 => narrow_to::<F, i16>(x, how, env)?,
        IntBits::I32 => narrow_to::<F, i32>(x, how, env)?,
        IntBits::I64 => narrow_to::<F, i64>(x, how, env)?,
        IntBits::I128 => narrow_to::<F, i128>(x, how, env)?,
    };
    Ok(value.to_string())
}

fn narrow_to<F: CliFloat, I: SignedInt + Into<i128>>(
    x: F,
    how: Narrow,
    env: &SoftEnv,
) -> Result<i128, CliError> {
    let value: I = match how {
        Narrow::Lround => round_to_signed(x, env),
        Narrow::Lrint => round_to_signed_with_ambient_mode(x, env),
        Narrow::Checked(mode) => checked_round_to_signed(x, mode)?,
    };
    Ok(value.into())
}
