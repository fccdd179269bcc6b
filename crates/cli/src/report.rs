//! Result reporting in text or JSON form.

use fpround_core::env::{Errno, FpFlags, RoundingMode, SoftEnv};
use serde::Serialize;

use crate::CliError;

/// Outcome of one operation together with the signals it left behind.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    operation: &'static str,
    input: String,
    #[serde(serialize_with = "serialize_display")]
    mode: RoundingMode,
    result: String,
    #[serde(serialize_with = "serialize_flags")]
    flags: FpFlags,
    #[serde(serialize_with = "serialize_errno")]
    errno: Option<Errno>,
}

impl Report {
    /// Captures `result` and drains the environment's flags and errno.
    pub(crate) fn new(
        operation: &'static str,
        input: &str,
        mode: RoundingMode,
        result: String,
        env: &SoftEnv,
    ) -> Self {
        let report = Self {
            operation,
            input: input.to_owned(),
            mode,
            result,
            flags: env.take_flags(),
            errno: env.errno(),
        };
        env.clear_errno();
        tracing::debug!(
            operation,
            flags = %report.flags,
            errno = ?report.errno,
            "operation finished"
        );
        report
    }

    pub(crate) fn result(&self) -> &str {
        &self.result
    }

    #[cfg(test)]
    pub(crate) const fn mode(&self) -> RoundingMode {
        self.mode
    }

    pub(crate) const fn flags(&self) -> FpFlags {
        self.flags
    }

    pub(crate) const fn errno(&self) -> Option<Errno> {
        self.errno
    }

    /// Writes the report to stdout.
    pub(crate) fn print(&self, json: bool) -> Result<(), CliError> {
        if json {
            println!("{}", serde_json::to_string(self)?);
            return Ok(());
        }

        let (flags, errno) = (self.flags(), self.errno());
        if flags.is_empty() && errno.is_none() {
            println!("{}", self.result());
        } else {
            let errno = errno.map_or_else(|| "-".to_owned(), |e| e.to_string());
            println!("{}\tflags={flags} errno={errno}", self.result());
        }
        Ok(())
    }
}

fn serialize_display<S: serde::Serializer, T: std::fmt::Display>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_flags<S: serde::Serializer>(flags: &FpFlags, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(flags.names())
}

#[allow(clippy::ref_option)]
fn serialize_errno<S: serde::Serializer>(
    errno: &Option<Errno>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match errno {
        Some(e) => serializer.collect_str(e),
        None => serializer.serialize_none(),
    }
}
