//! # Environment Tests
//!
//! These tests verify the software environment and its configuration:
//! 1. **Flags:** Accumulation, testing, clearing and taking.
//! 2. **Signal policy:** Exceptions and errno toggle independently.
//! 3. **Configuration:** JSON loading, defaults and rejection of bad documents.
//! 4. **Threads:** `ThreadEnv` state never leaks across threads.

use std::thread;

use fpround_core::config::{EnvConfig, SignalConfig};
use fpround_core::convert::{round_to_signed, to_fixed_domain};
use fpround_core::env::{AmbientRounding, Errno, FpEnv, FpFlags, RoundingMode, SoftEnv};
use fpround_core::error::ConfigError;
use fpround_core::nearest::rint;
use fpround_core::ThreadEnv;
use pretty_assertions::assert_eq;

use crate::common::harness::{init_tracing, soft_env};

// ══════════════════════════════════════════════════════════
// 1. Flags
// ══════════════════════════════════════════════════════════

#[test]
fn fresh_environment_is_clean() {
    let env = soft_env();
    assert_eq!(env.rounding(), AmbientRounding::ToNearest);
    assert_eq!(env.flags(), FpFlags::NONE);
    assert_eq!(env.errno(), None);
    assert_eq!(env.signals(), SignalConfig::signaling());
}

#[test]
fn raised_flags_accumulate() {
    let env = soft_env();
    env.raise(FpFlags::NX);
    env.raise(FpFlags::NV);
    env.raise(FpFlags::NX);

    assert_eq!(env.flags(), FpFlags::NV | FpFlags::NX);
    assert_eq!(env.test_flags(FpFlags::NX | FpFlags::OF), FpFlags::NX);

    env.clear_flags(FpFlags::NX);
    assert_eq!(env.flags(), FpFlags::NV);

    assert_eq!(env.take_flags(), FpFlags::NV);
    assert!(env.flags().is_empty());
}

#[test]
fn reset_keeps_rounding_and_policy() {
    let env = SoftEnv::with_config(EnvConfig {
        rounding: AmbientRounding::Downward,
        signals: SignalConfig::signaling(),
    });
    env.raise(FpFlags::DZ);
    env.set_errno(Errno::ERANGE);

    env.reset();
    assert!(env.flags().is_empty());
    assert_eq!(env.errno(), None);
    assert_eq!(env.rounding(), AmbientRounding::Downward);
}

#[test]
fn errno_keeps_the_last_report() {
    let env = soft_env();
    env.set_errno(Errno::ERANGE);
    env.set_errno(Errno::EDOM);
    assert_eq!(env.errno(), Some(Errno::EDOM));

    env.clear_errno();
    assert_eq!(env.errno(), None);
}

#[test]
fn environment_is_usable_through_a_reference() {
    let env = soft_env();
    let by_ref: &dyn FpEnv = &env;
    assert_eq!(round_to_signed::<f64, i8, _>(500.0, by_ref), i8::MAX);
    assert_eq!(round_to_signed::<f64, i8, _>(-500.0, &&env), i8::MIN);
    assert_eq!(env.errno(), Some(Errno::EDOM));
}

// ══════════════════════════════════════════════════════════
// 2. Signal policy
// ══════════════════════════════════════════════════════════

#[test]
fn errno_only_policy_skips_flags() {
    init_tracing();
    let env = SoftEnv::with_signals(SignalConfig {
        exceptions: false,
        errno: true,
    });
    assert!(to_fixed_domain::<true, _, _>(1e6_f64, RoundingMode::TowardZero, 8, &env).is_nan());
    assert_eq!(env.errno(), Some(Errno::EDOM));
    assert!(env.flags().is_empty());
}

#[test]
fn exceptions_only_policy_skips_errno() {
    init_tracing();
    let env = SoftEnv::with_signals(SignalConfig {
        exceptions: true,
        errno: false,
    });
    assert!(to_fixed_domain::<true, _, _>(1e6_f64, RoundingMode::TowardZero, 8, &env).is_nan());
    assert_eq!(env.errno(), None);
    assert_eq!(env.flags(), FpFlags::NV);
}

#[test]
fn silent_policy_keeps_numeric_results() {
    init_tracing();
    let loud = SoftEnv::new();
    let quiet = SoftEnv::with_signals(SignalConfig::silent());
    for x in [-1e30, -129.5, 0.5, 127.5, 1e30, f64::NAN] {
        assert_eq!(
            round_to_signed::<f64, i8, _>(x, &loud),
            round_to_signed::<f64, i8, _>(x, &quiet)
        );
    }
    assert!(quiet.flags().is_empty());
    assert_eq!(quiet.errno(), None);
}

#[test]
fn configure_keeps_accrued_state() {
    let env = soft_env();
    env.raise(FpFlags::OF);
    env.configure(EnvConfig {
        rounding: AmbientRounding::Upward,
        signals: SignalConfig::silent(),
    });
    env.raise(FpFlags::UF);

    assert_eq!(env.flags(), FpFlags::OF);
    assert_eq!(env.rounding(), AmbientRounding::Upward);
    assert_eq!(env.signals(), SignalConfig::silent());
}

// ══════════════════════════════════════════════════════════
// 3. Configuration
// ══════════════════════════════════════════════════════════

#[test]
fn empty_document_is_default() -> Result<(), ConfigError> {
    assert_eq!(EnvConfig::from_json("{}")?, EnvConfig::default());
    Ok(())
}

#[test]
fn full_document() -> Result<(), ConfigError> {
    let cfg = EnvConfig::from_json(
        r#"{
            "rounding": "toward_zero",
            "signals": { "exceptions": false, "errno": true }
        }"#,
    )?;
    assert_eq!(
        cfg,
        EnvConfig {
            rounding: AmbientRounding::TowardZero,
            signals: SignalConfig {
                exceptions: false,
                errno: true,
            },
        }
    );

    let env = SoftEnv::with_config(cfg);
    assert_eq!(env.rounding(), AmbientRounding::TowardZero);
    Ok(())
}

#[test]
fn config_serializes_with_snake_case_names() -> Result<(), serde_json::Error> {
    let cfg = EnvConfig {
        rounding: AmbientRounding::Upward,
        signals: SignalConfig::silent(),
    };
    let text = serde_json::to_string(&cfg)?;
    assert_eq!(
        text,
        r#"{"rounding":"upward","signals":{"exceptions":false,"errno":false}}"#
    );
    Ok(())
}

#[test]
fn bad_documents_are_rejected() {
    let bad = [
        r#"{ "rounding": "to_nearest_away_from_zero" }"#,
        r#"{ "rounding": "sideways" }"#,
        r#"{ "precision": 53 }"#,
        r#"{ "signals": { "overflow": true } }"#,
        r#"{ "signals": { "errno": "yes" } }"#,
        "not json",
    ];
    for doc in bad {
        let err = EnvConfig::from_json(doc);
        assert!(
            matches!(err, Err(ConfigError::Json(_))),
            "accepted {doc}: {err:?}"
        );
    }
}

#[test]
fn config_error_message_names_the_problem() {
    let msg = EnvConfig::from_json(r#"{ "rounding": "sideways" }"#)
        .err()
        .map(|e| e.to_string())
        .unwrap_or_default();
    assert!(msg.starts_with("invalid environment configuration: "), "{msg}");
    assert!(msg.contains("sideways"), "{msg}");
}

// ══════════════════════════════════════════════════════════
// 4. Threads
// ══════════════════════════════════════════════════════════

#[test]
fn thread_environment_is_per_thread() {
    ThreadEnv::reset();
    ThreadEnv::set_rounding(AmbientRounding::ToNearest);

    thread::scope(|s| {
        let _ = s.spawn(|| {
            ThreadEnv::set_rounding(AmbientRounding::Upward);
            ThreadEnv.raise(FpFlags::NX);
            assert_eq!(rint(0.25_f64), 1.0);
            assert_eq!(ThreadEnv::flags(), FpFlags::NX);
        });
    });

    assert_eq!(ThreadEnv.rounding(), AmbientRounding::ToNearest);
    assert_eq!(rint(0.25_f64), 0.0);
    assert!(ThreadEnv::flags().is_empty());
}

#[test]
fn thread_environment_records_domain_errors() {
    ThreadEnv::reset();
    assert_eq!(round_to_signed::<f64, i16, _>(f64::INFINITY, &ThreadEnv), i16::MAX);
    assert_eq!(ThreadEnv::errno(), Some(Errno::EDOM));
    assert_eq!(ThreadEnv::take_flags(), FpFlags::NV);
    assert!(ThreadEnv::flags().is_empty());
    ThreadEnv::reset();
}

#[test]
fn thread_environment_accepts_configuration() {
    ThreadEnv::reset();
    ThreadEnv::configure(EnvConfig {
        rounding: AmbientRounding::Downward,
        signals: SignalConfig::silent(),
    });
    assert_eq!(rint(-0.5_f32), -1.0);
    assert_eq!(round_to_signed::<f32, i8, _>(1000.0, &ThreadEnv), i8::MAX);
    assert_eq!(ThreadEnv::errno(), None);
    ThreadEnv::configure(EnvConfig::default());
}

#[test]
fn errno_formatting() {
    assert_eq!(Errno::EDOM.to_string(), "EDOM");
    assert_eq!(format!("{:?}", Errno::ERANGE), "ERANGE");
    assert_eq!(format!("{:?}", Errno(12_345)), "Errno(12345)");
}
