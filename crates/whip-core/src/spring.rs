//! Small per-frame smoothing helpers shared by the segments.
//!
//! None of these are full second-order springs: offsets follow their goal
//! through a first-order low-pass step, and the elastic feel after release
//! comes from [`release_bounce`], a decaying sinusoid keyed on normalized
//! time since release.

use glam::Vec2;
use std::f32::consts::PI;

/// One exponential-smoothing step of `current` toward `goal`.
#[inline]
pub fn smooth_toward(current: Vec2, goal: Vec2, rate: f32) -> Vec2 {
    current + (goal - current) * rate.clamp(0.0, 1.0)
}

#[inline]
pub fn ease_scalar(current: f32, goal: f32, rate: f32) -> f32 {
    current + (goal - current) * rate.clamp(0.0, 1.0)
}

/// `sin(p·π·k)·(1 − p)·amplitude` for return progress `p` in \[0, 1\].
///
/// Zero at release and at settle, so every segment shares one damped
/// oscillation regardless of where it is.
#[inline]
pub fn release_bounce(return_progress: f32, half_cycles: f32, amplitude: f32) -> f32 {
    let p = return_progress.clamp(0.0, 1.0);
    (p * PI * half_cycles).sin() * (1.0 - p) * amplitude
}
