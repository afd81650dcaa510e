//! Particle bursts spawned by jabs.
//!
//! Each [`Explosion`] keeps its particles in flat, fixed-length arrays (one
//! xyz triple or one scalar per particle) so integration walks contiguous
//! memory and the renderer can pack them without per-particle objects.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// `(weight, min, max)` bands for launch speed in world units per second.
pub const SPEED_TIERS: [(f32, f32, f32); 4] = [
    (0.2, 6.0, 9.0), // ultra-fast
    (0.3, 4.0, 6.0), // fast
    (0.3, 2.0, 4.0), // medium
    (0.2, 0.8, 2.0), // slow
];

/// `(weight, rgb)` palette bands.
pub const COLOR_TIERS: [(f32, [f32; 3]); 4] = [
    (0.15, [0.9, 1.0, 1.0]),     // core
    (0.40, [0.0, 0.831, 1.0]),   // primary #00D4FF
    (0.30, [0.302, 0.651, 1.0]), // secondary #4DA6FF
    (0.15, [0.6, 0.4, 1.0]),     // accent
];

/// `(weight, min, max)` bands for starting particle size.
pub const SIZE_TIERS: [(f32, f32, f32); 4] = [
    (0.10, 0.22, 0.30), // ultra-large
    (0.25, 0.14, 0.22), // large
    (0.40, 0.08, 0.14), // medium
    (0.25, 0.03, 0.08), // small
];

// Frame hitches longer than this are integrated as this long.
const MAX_STEP_SEC: f32 = 0.1;

/// Pick the band whose cumulative weight covers `roll` in \[0, 1).
///
/// Rolls past the last cumulative weight (rounding) land in the last band.
pub fn pick_tier<T>(tiers: &[(f32, T)], roll: f32) -> &T {
    let mut acc = 0.0;
    for (weight, value) in tiers {
        acc += *weight;
        if roll < acc {
            return value;
        }
    }
    &tiers[tiers.len() - 1].1
}

fn pick_band<R: Rng>(tiers: &[(f32, f32, f32)], rng: &mut R) -> f32 {
    let roll = rng.gen::<f32>();
    let mut acc = 0.0;
    for &(weight, lo, hi) in tiers {
        acc += weight;
        if roll < acc {
            return rng.gen_range(lo..hi);
        }
    }
    let (_, lo, hi) = tiers[tiers.len() - 1];
    rng.gen_range(lo..hi)
}

#[derive(Clone, Debug)]
pub struct Explosion {
    id: u64,
    start_time: f64,
    duration: f64,
    last_time: f64,
    twist: f32,
    progress: f32,
    opacity: f32,
    positions: Box<[f32]>,
    velocities: Box<[f32]>,
    colors: Box<[f32]>,
    sizes: Box<[f32]>,
    base_sizes: Box<[f32]>,
    shrink: Box<[f32]>,
}

impl Explosion {
    pub fn spawn<R: Rng>(
        id: u64,
        center: Vec3,
        start_time: f64,
        particle_count: usize,
        rng: &mut R,
    ) -> Self {
        let n = particle_count;
        let mut positions = vec![0.0f32; n * 3];
        let mut velocities = vec![0.0f32; n * 3];
        let mut colors = vec![0.0f32; n * 3];
        let mut base_sizes = vec![0.0f32; n];
        let mut shrink = vec![0.0f32; n];

        for i in 0..n {
            // clustered jitter: most particles start near the center
            let a = rng.gen_range(0.0..TAU);
            let r = rng.gen::<f32>().powi(2) * EXPLOSION_JITTER_RADIUS;
            let depth = (rng.gen::<f32>() - 0.5) * r;
            positions[i * 3] = center.x + a.cos() * r;
            positions[i * 3 + 1] = center.y + a.sin() * r;
            positions[i * 3 + 2] = center.z + depth;

            let theta = rng.gen_range(0.0..TAU);
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos() * EXPLOSION_Z_FLATTEN,
            );
            let vel = dir * pick_band(&SPEED_TIERS, rng) + Vec3::Y * EXPLOSION_UPWARD_BIAS;
            velocities[i * 3..i * 3 + 3].copy_from_slice(&vel.to_array());

            let rgb = pick_tier(&COLOR_TIERS, rng.gen::<f32>());
            let brightness = rng.gen_range(0.85..1.0);
            for c in 0..3 {
                colors[i * 3 + c] = rgb[c] * brightness;
            }

            base_sizes[i] = pick_band(&SIZE_TIERS, rng);
            shrink[i] =
                rng.gen_range(EXPLOSION_SHRINK_EXPONENT_MIN..EXPLOSION_SHRINK_EXPONENT_MAX);
        }

        let twist = rng.gen_range(-EXPLOSION_SPIRAL_TWIST_MAX..EXPLOSION_SPIRAL_TWIST_MAX);
        let sizes = base_sizes.clone();
        Self {
            id,
            start_time,
            duration: EXPLOSION_DURATION_SEC,
            last_time: start_time,
            twist,
            progress: 0.0,
            opacity: 1.0,
            positions: positions.into_boxed_slice(),
            velocities: velocities.into_boxed_slice(),
            colors: colors.into_boxed_slice(),
            sizes: sizes.into_boxed_slice(),
            base_sizes: base_sizes.into_boxed_slice(),
            shrink: shrink.into_boxed_slice(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn start_time(&self) -> f64 {
        self.start_time
    }
    pub fn duration(&self) -> f64 {
        self.duration
    }
    pub fn particle_count(&self) -> usize {
        self.sizes.len()
    }
    pub fn progress(&self) -> f32 {
        self.progress
    }
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }
    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn progress_at(&self, now: f64) -> f64 {
        ((now - self.start_time) / self.duration).max(0.0)
    }

    /// Integrate to `now`. Returns `false` once the burst has run its course;
    /// the buffers are left as they were on the last live frame.
    pub fn advance(&mut self, now: f64) -> bool {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            self.progress = 1.0;
            self.opacity = 0.0;
            return false;
        }
        let p = progress as f32;
        let dt = ((now - self.last_time).max(0.0) as f32).min(MAX_STEP_SEC);
        self.last_time = self.last_time.max(now);
        self.progress = p;
        self.opacity = 1.0 - p.powf(EXPLOSION_FADE_EXPONENT);

        let remaining = 1.0 - p;
        let drag = remaining.powi(EXPLOSION_DRAG_EXPONENT);
        let (sin_t, cos_t) = (self.twist * dt * remaining).sin_cos();

        for i in 0..self.sizes.len() {
            let v = &mut self.velocities[i * 3..i * 3 + 3];
            let swirled = Vec2::new(v[0] * cos_t - v[1] * sin_t, v[0] * sin_t + v[1] * cos_t);
            v[0] = swirled.x;
            v[1] = swirled.y - EXPLOSION_GRAVITY * dt;

            let step = dt * drag;
            self.positions[i * 3] += v[0] * step;
            self.positions[i * 3 + 1] += v[1] * step;
            self.positions[i * 3 + 2] += v[2] * step;

            self.sizes[i] = self.base_sizes[i] * (1.0 - p.powf(self.shrink[i]));
        }
        true
    }
}
