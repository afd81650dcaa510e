//! Jab detection and ownership of live explosions.

use crate::constants::{JAB_COOLDOWN_SEC, JAB_TARGET_SCALE, JAB_VELOCITY_THRESHOLD};
use crate::explosion::Explosion;
use crate::state::WhipState;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;

/// Watches pointer velocity while dragging and reports jab positions.
///
/// Each move sample is judged once, on the first frame after it arrives.
/// Holding still after a fast flick leaves a large velocity in the state but
/// produces no further bursts.
#[derive(Clone, Debug, Default)]
pub struct JabDetector {
    last_jab_time: Option<f64>,
    judged_move: u64,
}

impl JabDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_jab_time(&self) -> Option<f64> {
        self.last_jab_time
    }

    /// World-space burst center when this frame is a jab.
    ///
    /// Never fires while idle, so velocity left over from a release cannot
    /// trigger bursts.
    pub fn check(&mut self, state: &WhipState, now: f64) -> Option<Vec3> {
        if !state.is_dragging() || !now.is_finite() {
            return None;
        }
        if state.move_count() == self.judged_move {
            return None;
        }
        self.judged_move = state.move_count();
        if state.velocity().length() <= JAB_VELOCITY_THRESHOLD {
            return None;
        }
        if let Some(last) = self.last_jab_time {
            if now - last <= JAB_COOLDOWN_SEC {
                return None;
            }
        }
        self.last_jab_time = Some(now);
        let center = state.target() * JAB_TARGET_SCALE + state.scene_offset();
        Some(center.extend(0.0))
    }
}

/// Sole owner of the live explosions.
pub struct ExplosionManager {
    active: SmallVec<[Explosion; 4]>,
    next_id: u64,
    particle_count: usize,
    rng: StdRng,
}

impl ExplosionManager {
    pub fn new(particle_count: usize, seed: u64) -> Self {
        Self {
            active: SmallVec::new(),
            next_id: 0,
            particle_count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self, center: Vec3, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let explosion = Explosion::spawn(id, center, now, self.particle_count, &mut self.rng);
        log::debug!(
            "[jab] explosion {} at ({:.2},{:.2}) with {} particles",
            id,
            center.x,
            center.y,
            self.particle_count
        );
        self.active.push(explosion);
        id
    }

    /// Integrate every live explosion and drop the finished ones. Returns how
    /// many were reaped this frame.
    pub fn advance(&mut self, now: f64) -> usize {
        let before = self.active.len();
        self.active.retain(|e| e.advance(now));
        let reaped = before - self.active.len();
        if reaped > 0 {
            log::debug!("[jab] reaped {} explosion(s), {} live", reaped, self.active.len());
        }
        reaped
    }

    pub fn active(&self) -> &[Explosion] {
        &self.active
    }

    pub fn contains(&self, id: u64) -> bool {
        self.active.iter().any(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
