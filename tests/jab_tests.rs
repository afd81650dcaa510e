// Host-side tests for jab detection and the explosion lifecycle.

use glam::{Vec2, Vec3};
use std::collections::HashSet;
use whip_core::constants::*;
use whip_core::explosion::{pick_tier, COLOR_TIERS};
use whip_core::{
    Camera, EngineConfig, ExplosionManager, GestureTracker, JabDetector, Viewport, WhipEngine,
    WhipState,
};

const FRAME: f64 = 1.0 / 60.0;

fn viewport() -> Viewport {
    Viewport::new(900.0, 900.0)
}

#[test]
fn spike_inside_cooldown_is_swallowed() {
    let vp = viewport();
    let c = vp.center();
    let cam = Camera::default();
    let mut state = WhipState::default();
    let mut tracker = GestureTracker::new();
    let mut jab = JabDetector::new();

    tracker.pointer_down(&mut state, c, c, vp, &cam);
    assert!(jab.check(&state, 0.0).is_none());

    // 100 px in one move: a third of a unit, velocity 5
    tracker.pointer_move(&mut state, c + Vec2::new(100.0, 0.0), vp);
    let center = jab.check(&state, 1.0).unwrap();
    assert!((center - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);

    tracker.pointer_move(&mut state, c + Vec2::new(200.0, 0.0), vp);
    assert!(jab.check(&state, 1.0 + JAB_COOLDOWN_SEC * 0.5).is_none());

    tracker.pointer_move(&mut state, c + Vec2::new(300.0, 0.0), vp);
    assert!(jab.check(&state, 1.0 + JAB_COOLDOWN_SEC * 2.0).is_some());
    assert_eq!(jab.last_jab_time(), Some(1.0 + JAB_COOLDOWN_SEC * 2.0));
}

#[test]
fn slow_moves_and_idle_state_never_jab() {
    let vp = viewport();
    let c = vp.center();
    let cam = Camera::default();
    let mut state = WhipState::default();
    let mut tracker = GestureTracker::new();
    let mut jab = JabDetector::new();

    tracker.pointer_down(&mut state, c, c, vp, &cam);
    tracker.pointer_move(&mut state, c + Vec2::new(10.0, 0.0), vp);
    assert!(jab.check(&state, 1.0).is_none());

    tracker.pointer_move(&mut state, c + Vec2::new(200.0, 0.0), vp);
    tracker.pointer_up(&mut state);
    assert!(state.velocity().length() > JAB_VELOCITY_THRESHOLD);
    assert!(jab.check(&state, 2.0).is_none());
}

#[test]
fn scenario_spikes_50ms_and_200ms_apart() {
    let mut e = WhipEngine::new(EngineConfig::default()).unwrap();
    let vp = viewport();
    let c = vp.center();
    let mut now = 1.0;
    e.pointer_down(c, c, vp);
    e.tick(now);
    assert!(e.explosions().is_empty());

    e.pointer_move(c + Vec2::new(100.0, 0.0), vp);
    assert!((e.state().velocity().length() - 5.0).abs() < 1e-4);
    now += FRAME;
    e.tick(now);
    assert_eq!(e.explosions().len(), 1);
    let first = now;

    // holding still keeps the old velocity but must not fire again
    for _ in 0..2 {
        now += FRAME;
        e.tick(now);
    }
    assert_eq!(e.explosions().len(), 1);

    e.pointer_move(c + Vec2::new(200.0, 0.0), vp);
    e.tick(first + 0.05);
    assert_eq!(e.explosions().len(), 1);

    for k in 1..=8 {
        e.tick(first + 0.05 + k as f64 * FRAME);
    }
    assert_eq!(e.explosions().len(), 1);

    e.pointer_move(c + Vec2::new(300.0, 0.0), vp);
    e.tick(first + 0.2);
    assert_eq!(e.explosions().len(), 2);
    assert_eq!(e.last_jab_time(), Some(first + 0.2));

    let ids: HashSet<u64> = e.explosions().iter().map(|x| x.id()).collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn explosion_lives_exactly_its_duration() {
    let mut m = ExplosionManager::new(40, 7);
    let start = 10.0;
    let id = m.spawn(Vec3::ZERO, start);
    let mut reaped_total = 0;
    for k in 0..120 {
        let now = start + k as f64 * FRAME;
        reaped_total += m.advance(now);
        let alive = (now - start) / EXPLOSION_DURATION_SEC < 1.0;
        assert_eq!(m.contains(id), alive, "frame {}", k);
    }
    assert_eq!(reaped_total, 1);
}

#[test]
fn hitch_past_the_end_reaps_once() {
    let mut m = ExplosionManager::new(40, 7);
    m.spawn(Vec3::ZERO, 0.0);
    assert_eq!(m.advance(0.5), 0);
    assert_eq!(m.advance(5.0), 1);
    assert_eq!(m.advance(6.0), 0);
    assert!(m.is_empty());
}

#[test]
fn ids_are_unique_across_reaping() {
    let mut m = ExplosionManager::new(8, 1);
    let mut seen = HashSet::new();
    for round in 0..3 {
        let t = round as f64 * 10.0;
        for _ in 0..5 {
            assert!(seen.insert(m.spawn(Vec3::ZERO, t)));
        }
        m.advance(t + 5.0);
        assert!(m.is_empty());
    }
}

#[test]
fn particle_buffers_keep_their_length_and_fade() {
    let n = 60;
    let mut m = ExplosionManager::new(n, 3);
    m.spawn(Vec3::new(1.0, 2.0, 0.0), 0.0);
    m.advance(0.0);
    let e = &m.active()[0];
    assert_eq!(e.particle_count(), n);
    assert_eq!(e.positions().len(), n * 3);
    assert_eq!(e.velocities().len(), n * 3);
    assert_eq!(e.colors().len(), n * 3);
    assert_eq!(e.sizes().len(), n);
    assert!((e.opacity() - 1.0).abs() < 1e-6);
    let start_sizes: Vec<f32> = e.sizes().to_vec();

    let mut now = 0.0;
    let mut last_opacity = 1.0;
    while now < 1.0 {
        now += FRAME;
        m.advance(now);
        let e = &m.active()[0];
        assert_eq!(e.positions().len(), n * 3);
        assert!(e.opacity() <= last_opacity);
        last_opacity = e.opacity();
        for (s, s0) in e.sizes().iter().zip(&start_sizes) {
            assert!(*s >= 0.0 && *s <= *s0);
        }
    }
    assert!(last_opacity < 0.5);
}

#[test]
fn same_seed_gives_same_burst() {
    let mut a = ExplosionManager::new(16, 99);
    let mut b = ExplosionManager::new(16, 99);
    a.spawn(Vec3::ZERO, 0.0);
    b.spawn(Vec3::ZERO, 0.0);
    assert_eq!(a.active()[0].positions(), b.active()[0].positions());
    assert_eq!(a.active()[0].colors(), b.active()[0].colors());
}

#[test]
fn tier_picking_covers_the_range() {
    assert_eq!(*pick_tier(&COLOR_TIERS, 0.0), COLOR_TIERS[0].1);
    assert_eq!(*pick_tier(&COLOR_TIERS, 0.5), COLOR_TIERS[1].1);
    assert_eq!(*pick_tier(&COLOR_TIERS, 0.9999), COLOR_TIERS[3].1);
    assert_eq!(*pick_tier(&COLOR_TIERS, 1.5), COLOR_TIERS[3].1);
}
