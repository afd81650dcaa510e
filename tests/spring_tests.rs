// Host-side tests for idle decay and the release bounce.

use glam::Vec2;
use whip_core::constants::*;
use whip_core::segment::idle_spiral;
use whip_core::spring::{release_bounce, smooth_toward};
use whip_core::{EngineConfig, Segment, SegmentRole, Viewport, WhipEngine};

const FRAME: f64 = 1.0 / 60.0;

fn flips_sign(values: &[f32]) -> bool {
    values.windows(2).any(|w| w[0] > 0.0 && w[1] < 0.0)
}

// The idle branch of a segment in one dimension, frame by frame.
fn release_trajectory(
    release_offset: f32,
    return_speed: f32,
    half_cycles: f32,
    amplitude: f32,
    frames: usize,
) -> Vec<f32> {
    let mut offset = release_offset;
    let mut progress = 0.0f32;
    let mut out = Vec::with_capacity(frames);
    for _ in 0..frames {
        progress = (progress + RETURN_PROGRESS_STEP).min(1.0);
        offset += (0.0 - offset) * return_speed;
        out.push(offset + release_offset * release_bounce(progress, half_cycles, amplitude));
    }
    out
}

#[test]
fn idle_decay_factors_converge() {
    let mut v = 1.0e4f32;
    let mut small_target = 0.05f32;
    for _ in 0..200 {
        v *= VELOCITY_IDLE_DECAY;
        small_target *= TARGET_IDLE_DECAY;
    }
    assert!(v < 1e-3);
    assert!(small_target < 1e-3);
}

#[test]
fn engine_decays_velocity_and_target_after_release() {
    let mut e = WhipEngine::new(EngineConfig::default()).unwrap();
    let vp = Viewport::new(900.0, 900.0);
    let c = vp.center();
    e.pointer_down(c, c, vp);
    // a full-viewport flick: target 3, velocity 45
    e.pointer_move(c + Vec2::new(900.0, 0.0), vp);
    assert!(e.state().velocity().length() > 40.0);
    e.pointer_up();

    let mut now = 0.0;
    for _ in 0..200 {
        now += FRAME;
        e.tick(now);
    }
    assert!(e.state().velocity().length() < 1e-3);
    for _ in 0..200 {
        now += FRAME;
        e.tick(now);
    }
    assert!(e.state().target().length() < 1e-3);
}

#[test]
fn bounce_is_zero_at_release_and_at_settle() {
    assert!(release_bounce(0.0, TIP_BOUNCE_HALF_CYCLES, TIP_BOUNCE_AMPLITUDE).abs() < 1e-6);
    assert!(release_bounce(1.0, TIP_BOUNCE_HALF_CYCLES, TIP_BOUNCE_AMPLITUDE).abs() < 1e-6);
    // out-of-range progress is clamped
    assert!(release_bounce(3.0, BODY_BOUNCE_HALF_CYCLES, BODY_BOUNCE_AMPLITUDE).abs() < 1e-6);
}

#[test]
fn tip_overshoots_past_rest_after_release() {
    let frames = (1.0 / RETURN_PROGRESS_STEP) as usize;
    let path = release_trajectory(
        1.0,
        TIP_RETURN_SPEED,
        TIP_BOUNCE_HALF_CYCLES,
        TIP_BOUNCE_AMPLITUDE,
        frames,
    );
    assert!(flips_sign(&path));
    assert!(path.last().unwrap().abs() < 0.2);
}

#[test]
fn far_body_segment_overshoots_past_rest() {
    let n = EngineConfig::default().segment_count;
    let far = Segment::body(n - 1, n);
    let path = release_trajectory(
        1.0,
        far.return_speed(),
        BODY_BOUNCE_HALF_CYCLES,
        BODY_BOUNCE_AMPLITUDE,
        50,
    );
    assert!(flips_sign(&path));
}

#[test]
fn smoothing_alone_never_overshoots() {
    let path = release_trajectory(1.0, TIP_RETURN_SPEED, 3.0, 0.0, 200);
    assert!(path.iter().all(|&x| x > 0.0));
    assert!(path.windows(2).all(|w| w[1] < w[0]));

    let mut x = Vec2::new(2.0, -1.0);
    for _ in 0..500 {
        x = smooth_toward(x, Vec2::ZERO, 0.2);
        assert!(x.x >= 0.0 && x.y <= 0.0);
    }
    assert!(x.length() < 1e-6);
}

#[test]
fn engine_tip_swings_past_rest_after_release() {
    let config = EngineConfig::default();
    let n = config.segment_count;
    let mut e = WhipEngine::new(config).unwrap();
    let vp = Viewport::new(900.0, 900.0);
    let c = vp.center();
    e.pointer_down(c, c, vp);
    e.pointer_move(c + Vec2::new(150.0, 0.0), vp);

    let mut now = 0.0;
    for _ in 0..30 {
        now += FRAME;
        e.tick(now);
    }
    e.pointer_up();

    let mut path = Vec::new();
    for _ in 0..50 {
        now += FRAME;
        let frame = e.tick(now);
        let tip = frame.segments.last().unwrap();
        assert_eq!(tip.role, SegmentRole::Tip);
        let (rest, _) = idle_spiral(SegmentRole::Tip, n, 1.0, frame.time);
        path.push(tip.position.x - rest.x);
    }
    assert!(path[0] > 1.0);
    assert!(flips_sign(&path));
    assert!(path.last().unwrap().abs() < path[0].abs());
}
