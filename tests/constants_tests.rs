// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use whip_core::constants::*;
use whip_core::explosion::{COLOR_TIERS, SIZE_TIERS, SPEED_TIERS};

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_factors_are_contractions() {
    assert!(VELOCITY_IDLE_DECAY > 0.0 && VELOCITY_IDLE_DECAY < 1.0);
    assert!(TARGET_IDLE_DECAY > 0.0 && TARGET_IDLE_DECAY < 1.0);
    // velocity settles faster than the target
    assert!(VELOCITY_IDLE_DECAY < TARGET_IDLE_DECAY);
    assert!(GLOW_EASE > 0.0 && GLOW_EASE < 1.0);
}

#[test]
fn return_takes_fifty_frames() {
    assert_eq!((1.0 / RETURN_PROGRESS_STEP).round() as u32, 50);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn follow_and_return_rates_stay_in_range() {
    assert!(BODY_FOLLOW_RATE - BODY_FOLLOW_DELAY > 0.0);
    assert!(TIP_FOLLOW_RATE < 1.0);
    assert!(BODY_RETURN_SPEED + BODY_RETURN_SPEED_GROWTH < 1.0);
    assert!(TIP_RETURN_SPEED > 0.0 && TIP_RETURN_SPEED < 1.0);
    assert!(TIP_DRAG_GAIN > BODY_DRAG_GAIN);
    assert!(TIP_OVERSHOOT > BODY_OVERSHOOT);
}

#[test]
fn tier_weights_sum_to_one() {
    let speed: f32 = SPEED_TIERS.iter().map(|t| t.0).sum();
    let color: f32 = COLOR_TIERS.iter().map(|t| t.0).sum();
    let size: f32 = SIZE_TIERS.iter().map(|t| t.0).sum();
    for sum in [speed, color, size] {
        assert!((sum - 1.0).abs() < 1e-5);
    }
    for (_, lo, hi) in SPEED_TIERS.iter().chain(SIZE_TIERS.iter()) {
        assert!(lo < hi);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn explosion_timing_is_consistent() {
    assert!(EXPLOSION_DURATION_SEC > JAB_COOLDOWN_SEC);
    assert!(EXPLOSION_SHRINK_EXPONENT_MIN < EXPLOSION_SHRINK_EXPONENT_MAX);
    assert!(JAB_VELOCITY_THRESHOLD > 0.0);
}

#[test]
fn dom_hooks_are_well_formed() {
    assert!(CONTAINER_SELECTOR.starts_with('.'));
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(!HINT_TEXT.is_empty());
    assert!(!ARIA_LABEL.is_empty());
    assert!(!WHIPPING_CLASS.contains(' '));
}
