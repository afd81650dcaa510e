//! Whole-scene motion and the GPU-facing instance layouts.
//!
//! Renderers consume [`SegmentInstance`] and [`ParticleInstance`] slices
//! straight from `bytemuck::cast_slice`; the packing functions here are the
//! only place the engine's poses and flat particle arrays are reshaped.

use crate::constants::*;
use crate::explosion::Explosion;
use crate::segment::{SegmentPose, SegmentRole};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentInstance {
    pub position: [f32; 3],
    pub size: f32,
    /// (yaw about Y, roll about Z)
    pub rotation: [f32; 2],
    pub glow: f32,
    pub tip: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Model matrix for the whip group: scene anchoring, gentle sway and a slow
/// floating bob.
pub fn group_transform(t: f32, scene_offset: Vec2) -> Mat4 {
    let sway = Quat::from_euler(
        EulerRot::XYZ,
        (t * 0.25).sin() * SWAY_AMPLITUDE,
        (t * 0.18).cos() * SWAY_AMPLITUDE,
        0.0,
    );
    let phase = t / 4.0 * FLOAT_SPEED;
    let float_rot = Quat::from_euler(
        EulerRot::XYZ,
        phase.cos() / 8.0 * FLOAT_ROTATION_INTENSITY,
        phase.sin() / 8.0 * FLOAT_ROTATION_INTENSITY,
        phase.sin() / 20.0 * FLOAT_ROTATION_INTENSITY,
    );
    let bob = Vec3::new(0.0, phase.sin() / 10.0 * FLOAT_INTENSITY, 0.0);
    Mat4::from_translation(scene_offset.extend(0.0))
        * Mat4::from_quat(sway)
        * Mat4::from_translation(bob)
        * Mat4::from_quat(float_rot)
}

pub fn pack_segments(poses: &[SegmentPose], out: &mut Vec<SegmentInstance>) {
    out.clear();
    out.extend(poses.iter().map(|p| SegmentInstance {
        position: p.position.to_array(),
        size: p.size,
        rotation: [p.rotation.y, p.rotation.z],
        glow: p.glow,
        tip: match p.role {
            SegmentRole::Body => 0.0,
            SegmentRole::Tip => 1.0,
        },
    }));
}

/// Append every live particle, with the burst's opacity in alpha. Particles
/// that have shrunk to nothing are skipped.
pub fn pack_explosions(explosions: &[Explosion], out: &mut Vec<ParticleInstance>) {
    for e in explosions {
        let positions = e.positions();
        let colors = e.colors();
        for (i, &size) in e.sizes().iter().enumerate() {
            if size <= 0.0 {
                continue;
            }
            out.push(ParticleInstance {
                position: [positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2]],
                size,
                color: [colors[i * 3], colors[i * 3 + 1], colors[i * 3 + 2], e.opacity()],
            });
        }
    }
}

/// Static glow points scattered along the spiral.
#[derive(Clone, Debug)]
pub struct AmbientMotes {
    positions: Vec<Vec3>,
}

impl AmbientMotes {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x6d6f_7465);
        let positions = (0..count)
            .map(|i| {
                let f = i as f32 / count.max(1) as f32;
                let angle = f * TAU * 2.2;
                let radius = SPIRAL_BASE_RADIUS + f * SPIRAL_RADIUS_GROWTH;
                Vec3::new(
                    angle.cos() * radius + (rng.gen::<f32>() - 0.5) * MOTE_SCATTER,
                    angle.sin() * radius * SPIRAL_Y_SQUASH + (rng.gen::<f32>() - 0.5) * MOTE_SCATTER,
                    f * SPIRAL_DEPTH + (rng.gen::<f32>() - 0.5) * MOTE_SCATTER * 0.5,
                )
            })
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn transform(t: f32) -> Mat4 {
        Mat4::from_rotation_y((t * 0.15).sin() * 0.08) * Mat4::from_rotation_z(t * MOTE_SPIN_RATE)
    }

    /// Append the motes at time `t`, carried along with the whip's
    /// `scene_offset` so they stay around it while expanded.
    pub fn pack(&self, t: f32, scene_offset: Vec2, out: &mut Vec<ParticleInstance>) {
        let m = Mat4::from_translation(scene_offset.extend(0.0)) * Self::transform(t);
        out.extend(self.positions.iter().map(|p| ParticleInstance {
            position: m.transform_point3(*p).to_array(),
            size: MOTE_SIZE,
            color: [WHIP_COLOR[0], WHIP_COLOR[1], WHIP_COLOR[2], MOTE_OPACITY],
        }));
    }
}
