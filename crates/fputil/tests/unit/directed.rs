//! # Directed Rounding Tests
//!
//! These tests verify that `round_with_mode()` applies each of the five
//! rounding directions, and that the ambient variant follows the
//! environment's current mode.

use fpround_core::env::{AmbientRounding, RoundingMode};
use fpround_core::nearest::{rint, round_with_ambient_mode, round_with_mode};
use fpround_core::{FpEnv, ThreadEnv};
use rstest::rstest;

use crate::common::harness::{assert_same, soft_env};
use crate::common::mocks::env::MockEnv;

use RoundingMode::{Downward, ToNearestAwayFromZero, ToNearestEven, TowardZero, Upward};

// ══════════════════════════════════════════════════════════
// 1. |x| < 1: results picked from ±0 and ±1
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(0.3, Downward, 0.0)]
#[case(-0.3, Downward, -1.0)]
#[case(0.3, Upward, 1.0)]
#[case(-0.3, Upward, -0.0)]
#[case(0.7, TowardZero, 0.0)]
#[case(-0.7, TowardZero, -0.0)]
#[case(0.5, ToNearestAwayFromZero, 1.0)]
#[case(-0.5, ToNearestAwayFromZero, -1.0)]
#[case(0.49, ToNearestAwayFromZero, 0.0)]
#[case(-0.49, ToNearestAwayFromZero, -0.0)]
#[case(0.5, ToNearestEven, 0.0)]
#[case(-0.5, ToNearestEven, -0.0)]
#[case(0.75, ToNearestEven, 1.0)]
#[case(-0.51, ToNearestEven, -1.0)]
#[case(0.25, ToNearestEven, 0.0)]
#[case(5e-324, Upward, 1.0)]
#[case(-5e-324, Downward, -1.0)]
#[case(-5e-324, ToNearestEven, -0.0)]
fn below_one(#[case] x: f64, #[case] mode: RoundingMode, #[case] expected: f64) {
    assert_same(round_with_mode(x, mode), expected);
}

// ══════════════════════════════════════════════════════════
// 2. Ties
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(2.5, ToNearestEven, 2.0)]
#[case(3.5, ToNearestEven, 4.0)]
#[case(-2.5, ToNearestEven, -2.0)]
#[case(-3.5, ToNearestEven, -4.0)]
#[case(1.5, ToNearestEven, 2.0)]
#[case(-1.5, ToNearestEven, -2.0)]
#[case(2.5, ToNearestAwayFromZero, 3.0)]
#[case(-2.5, ToNearestAwayFromZero, -3.0)]
#[case(1.5, ToNearestAwayFromZero, 2.0)]
#[case(2.5, TowardZero, 2.0)]
#[case(-2.5, TowardZero, -2.0)]
#[case(2.5, Downward, 2.0)]
#[case(-2.5, Downward, -3.0)]
#[case(2.5, Upward, 3.0)]
#[case(-2.5, Upward, -2.0)]
#[case(4_503_599_627_370_495.5, ToNearestEven, 4_503_599_627_370_496.0)]
#[case(4_503_599_627_370_494.5, ToNearestEven, 4_503_599_627_370_494.0)]
fn ties(#[case] x: f64, #[case] mode: RoundingMode, #[case] expected: f64) {
    assert_same(round_with_mode(x, mode), expected);
}

// ══════════════════════════════════════════════════════════
// 3. Non-ties
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(2.500_000_1, ToNearestEven, 3.0)]
#[case(2.499_999_9, ToNearestEven, 2.0)]
#[case(-2.7, TowardZero, -2.0)]
#[case(2.1, Upward, 3.0)]
#[case(-2.1, Downward, -3.0)]
#[case(2.9, Downward, 2.0)]
#[case(-2.9, Upward, -2.0)]
#[case(2.4, ToNearestAwayFromZero, 2.0)]
#[case(-1.25, ToNearestEven, -1.0)]
#[case(1.75, ToNearestEven, 2.0)]
fn non_ties(#[case] x: f64, #[case] mode: RoundingMode, #[case] expected: f64) {
    assert_same(round_with_mode(x, mode), expected);
}

#[rstest]
#[case(2.5, ToNearestEven, 2.0)]
#[case(8_388_607.5, ToNearestEven, 8_388_608.0)]
#[case(8_388_606.5, ToNearestEven, 8_388_606.0)]
#[case(-8_388_606.5, ToNearestAwayFromZero, -8_388_607.0)]
#[case(-0.5, Downward, -1.0)]
#[case(0.1, Upward, 1.0)]
fn f32_modes(#[case] x: f32, #[case] mode: RoundingMode, #[case] expected: f32) {
    assert_same(round_with_mode(x, mode), expected);
}

// ══════════════════════════════════════════════════════════
// 4. Values that never change
// ══════════════════════════════════════════════════════════

#[test]
fn specials_and_integers_are_untouched_in_every_mode() {
    let fixed = [
        0.0,
        -0.0,
        3.0,
        -1024.0,
        1e300,
        f64::MAX,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    for mode in RoundingMode::ALL {
        for x in fixed {
            assert_same(round_with_mode(x, mode), x);
        }
        assert!(round_with_mode(f64::NAN, mode).is_nan());
    }
}

// ══════════════════════════════════════════════════════════
// 5. Ambient rounding
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(AmbientRounding::ToNearest, 2.5, 2.0)]
#[case(AmbientRounding::Downward, 2.5, 2.0)]
#[case(AmbientRounding::Downward, -2.5, -3.0)]
#[case(AmbientRounding::Upward, 2.1, 3.0)]
#[case(AmbientRounding::TowardZero, -2.9, -2.0)]
fn ambient_follows_environment(
    #[case] ambient: AmbientRounding,
    #[case] x: f64,
    #[case] expected: f64,
) {
    let env = soft_env();
    env.set_rounding(ambient);
    assert_eq!(env.rounding(), ambient);
    assert_same(round_with_ambient_mode(x, &env), expected);
}

#[test]
fn ambient_reads_mode_without_signaling() {
    // Only `rounding` has an expectation; a raise would fail the test.
    let env = MockEnv::with_rounding(AmbientRounding::Upward);
    assert_same(round_with_ambient_mode(-0.5_f32, &env), -0.0);
    assert_same(round_with_ambient_mode(0.5_f32, &env), 1.0);
}

#[test]
fn rint_uses_thread_environment() {
    ThreadEnv::reset();
    ThreadEnv::set_rounding(AmbientRounding::Downward);
    assert_same(rint(1.75_f64), 1.0);
    ThreadEnv::set_rounding(AmbientRounding::Upward);
    assert_same(rint(1.25_f64), 2.0);
    ThreadEnv::set_rounding(AmbientRounding::ToNearest);
    assert_same(rint(0.5_f64), 0.0);
    assert!(ThreadEnv::flags().is_empty());
}

#[test]
fn ambient_mode_maps_onto_explicit_mode() {
    assert_eq!(RoundingMode::from(AmbientRounding::ToNearest), ToNearestEven);
    assert_eq!(RoundingMode::from(AmbientRounding::Downward), Downward);
    assert_eq!(RoundingMode::from(AmbientRounding::Upward), Upward);
    assert_eq!(RoundingMode::from(AmbientRounding::TowardZero), TowardZero);
}
