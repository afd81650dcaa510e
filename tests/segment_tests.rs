// Host-side tests for segment placement, drag response and glow.

use glam::Vec2;
use whip_core::constants::*;
use whip_core::segment::idle_spiral;
use whip_core::{chevron_outline, Camera, GestureTracker, Segment, SegmentRole, Viewport, WhipState};

fn dragging_state(offset_px: Vec2) -> WhipState {
    let vp = Viewport::new(900.0, 900.0);
    let c = vp.center();
    let mut state = WhipState::default();
    let mut tracker = GestureTracker::new();
    tracker.pointer_down(&mut state, c, c, vp, &Camera::default());
    tracker.pointer_move(&mut state, c + offset_px, vp);
    state
}

#[test]
fn body_and_tip_layout() {
    let first = Segment::body(0, 30);
    let last = Segment::body(29, 30);
    let tip = Segment::tip(30);
    assert_eq!(first.progress(), 0.0);
    assert_eq!(tip.progress(), 1.0);
    assert_eq!(tip.index(), 30);
    assert_eq!(tip.role(), SegmentRole::Tip);
    assert!(first.size() > last.size());
    assert_eq!(tip.size(), TIP_CHEVRON_SIZE);
    assert!(first.drag_influence() < last.drag_influence());
    assert!(last.return_speed() > first.return_speed());
}

#[test]
fn segments_follow_the_drag() {
    let state = dragging_state(Vec2::new(150.0, 0.0));
    let mut tip = Segment::tip(30);
    let mut mid = Segment::body(15, 30);
    let mut root = Segment::body(0, 30);
    for i in 0..60 {
        let t = i as f32 / 60.0;
        tip.update(t, &state);
        mid.update(t, &state);
        root.update(t, &state);
    }
    assert!(tip.offset().x > mid.offset().x);
    assert!(mid.offset().x > 0.0);
    // the anchored end has zero influence
    assert!(root.offset().length() < 1e-6);
    assert!(tip.glow() > GLOW_IDLE);
}

#[test]
fn release_settles_back_to_the_spiral() {
    let drag = dragging_state(Vec2::new(0.0, -200.0));
    let mut tip = Segment::tip(30);
    for i in 0..60 {
        tip.update(i as f32 / 60.0, &drag);
    }
    assert!(tip.offset().y < 0.0);

    let mut idle = WhipState::default();
    let tracker = GestureTracker::new();
    for i in 60..260 {
        tracker.idle_decay(&mut idle);
        let t = i as f32 / 60.0;
        let pose = tip.update(t, &idle);
        if i == 259 {
            let (rest, _) = idle_spiral(SegmentRole::Tip, 30, 1.0, t);
            assert!((pose.position - rest).length() < 1e-2);
        }
    }
    assert!(tip.offset().length() < 1e-2);
    assert!((tip.glow() - GLOW_IDLE).abs() < 1e-3);
}

#[test]
fn hover_pulses_glow_above_idle() {
    let mut state = WhipState::default();
    GestureTracker::new().set_hovering(&mut state, true);
    let mut seg = Segment::body(10, 30);
    let mut peak: f32 = 0.0;
    for i in 0..240 {
        let pose = seg.update(i as f32 / 60.0, &state);
        peak = peak.max(pose.glow);
    }
    assert!(peak > GLOW_IDLE);
    assert!(peak <= GLOW_IDLE + BODY_GLOW_HOVER_PULSE + 1e-4);
}

#[test]
fn idle_spiral_is_deterministic_and_spreads_out() {
    let a = idle_spiral(SegmentRole::Body, 3, 0.1, 2.0);
    let b = idle_spiral(SegmentRole::Body, 3, 0.1, 2.0);
    assert_eq!(a, b);
    let near = idle_spiral(SegmentRole::Body, 0, 0.0, 0.0).0;
    let far = idle_spiral(SegmentRole::Body, 29, 29.0 / 30.0, 0.0).0;
    assert!(far.truncate().length() > near.truncate().length());
    assert!(far.z > near.z);
}

#[test]
fn chevron_outline_is_a_symmetric_arrow() {
    for role in [SegmentRole::Body, SegmentRole::Tip] {
        let [nose, upper, notch, lower] = chevron_outline(role);
        assert!(nose.x > notch.x && notch.x > upper.x);
        assert_eq!(upper.x, lower.x);
        assert_eq!(upper.y, -lower.y);
        assert_eq!(nose.y, 0.0);
    }
}
