//! Bit-exact IEEE 754 rounding from the command line.
//!
//! This binary exposes the rounding library one operation at a time:
//! 1. **round:** Round to an integral float in a chosen or ambient direction.
//! 2. **fromfp:** Round into a fixed-width signed or unsigned domain.
//! 3. **lround / lrint:** Round and narrow to a native signed integer.
//! 4. **int:** Checked narrowing that fails instead of saturating.
//!
//! Every run starts from a fresh software environment, optionally loaded from
//! a JSON configuration. The raised flags and errno are reported next to the
//! result.

mod commands;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::{fs, io};

use clap::{Parser, Subcommand, ValueEnum};
use fpround_core::config::{EnvConfig, SignalConfig};
use fpround_core::env::{AmbientRounding, RoundingMode, SoftEnv};
use fpround_core::error::{ConfigError, ConversionError};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fpround",
    author,
    version,
    about = "Bit-exact IEEE 754 rounding without the host FPU",
    long_about = "Round floating-point values and convert them to integers by editing their encodings.\n\nExamples:\n  fpround round 2.5 --mode rne\n  fpround fromfp -128.5 --width 8 --mode rdn\n  fpround lrint 2.5 --ambient upward --precision f32\n  fpround int 3e9 --bits 32 --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON environment configuration (initial rounding and signal policy).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable exception flags and errno reporting.
    #[arg(long, global = true)]
    silent: bool,

    /// Print the result as a JSON object.
    #[arg(long, global = true)]
    json: bool,

    /// Log environment activity to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Binary format the input is parsed into.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Precision {
    /// IEEE binary32.
    F32,
    /// IEEE binary64.
    #[default]
    F64,
}

/// Native signed integer target.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum IntBits {
    #[value(name = "8")]
    I8,
    #[value(name = "16")]
    I16,
    #[value(name = "32")]
    I32,
    #[value(name = "64")]
    #[default]
    I64,
    #[value(name = "128")]
    I128,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Round to an integral float.
    Round {
        /// Value to round.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Rounding direction; the environment's ambient direction when omitted.
        #[arg(short, long)]
        mode: Option<RoundingMode>,

        /// Overrides the configured ambient direction.
        #[arg(long)]
        ambient: Option<AmbientRounding>,

        #[arg(short, long, value_enum, default_value_t)]
        precision: Precision,
    },

    /// Round into a fixed-width integer domain, keeping a float result.
    Fromfp {
        /// Value to round.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Domain width in bits.
        #[arg(short, long)]
        width: u32,

        /// Rounding direction.
        #[arg(short, long, default_value = "rne")]
        mode: RoundingMode,

        /// Use the unsigned domain `[0, 2^width - 1]`.
        #[arg(short, long)]
        unsigned: bool,

        /// Raise inexact when the result differs from the input.
        #[arg(short = 'x', long)]
        exact: bool,

        #[arg(short, long, value_enum, default_value_t)]
        precision: Precision,
    },

    /// Round half away from zero and narrow to a signed integer.
    Lround {
        /// Value to convert.
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[arg(short, long, value_enum, default_value_t)]
        bits: IntBits,

        #[arg(short, long, value_enum, default_value_t)]
        precision: Precision,
    },

    /// Round with the ambient direction and narrow to a signed integer.
    Lrint {
        /// Value to convert.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Overrides the configured ambient direction.
        #[arg(long)]
        ambient: Option<AmbientRounding>,

        #[arg(short, long, value_enum, default_value_t)]
        bits: IntBits,

        #[arg(short, long, value_enum, default_value_t)]
        precision: Precision,
    },

    /// Round with an explicit direction and narrow, failing on overflow.
    Int {
        /// Value to convert.
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Rounding direction.
        #[arg(short, long, default_value = "rne")]
        mode: RoundingMode,

        #[arg(short, long, value_enum, default_value_t)]
        bits: IntBits,

        #[arg(short, long, value_enum, default_value_t)]
        precision: Precision,
    },
}

/// Failures that stop the CLI before or instead of printing a result.
#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("`{0}` is not a floating-point number")]
    ParseValue(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("cannot encode the result: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn load_env(cli: &Cli) -> Result<SoftEnv, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            EnvConfig::from_json(&text)?
        }
        None => EnvConfig::default(),
    };
    if cli.silent {
        config.signals = SignalConfig::silent();
    }
    tracing::debug!(?config, "environment configured");
    Ok(SoftEnv::with_config(config))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let env = load_env(cli)?;
    let report = commands::dispatch(&cli.command, &env)?;
    report.print(cli.json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
