//! Whip segments: idle spiral placement, drag response and glow.
//!
//! Each [`Segment`] owns its offset and reads [`WhipState`] only. The body
//! chevrons and the tip share the update; [`SegmentRole`] selects the tuning.

use crate::constants::*;
use crate::spring::{ease_scalar, release_bounce, smooth_toward};
use crate::state::WhipState;
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentRole {
    Body,
    Tip,
}

/// Per-frame output for one chevron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPose {
    pub position: Vec3,
    /// Euler angles in radians, applied Z then Y.
    pub rotation: Vec3,
    pub size: f32,
    pub glow: f32,
    pub role: SegmentRole,
}

#[derive(Clone, Debug)]
pub struct Segment {
    index: usize,
    count: usize,
    progress: f32,
    role: SegmentRole,
    offset: Vec2,
    release_offset: Vec2,
    was_dragging: bool,
    glow: f32,
}

impl Segment {
    /// Body chevron `index` of `count`.
    pub fn body(index: usize, count: usize) -> Self {
        let count = count.max(1);
        Self::with_role(index, count, index as f32 / count as f32, SegmentRole::Body)
    }

    /// The tip sits past the last body segment at progress 1.
    pub fn tip(count: usize) -> Self {
        let count = count.max(1);
        Self::with_role(count, count, 1.0, SegmentRole::Tip)
    }

    fn with_role(index: usize, count: usize, progress: f32, role: SegmentRole) -> Self {
        Self {
            index,
            count,
            progress,
            role,
            offset: Vec2::ZERO,
            release_offset: Vec2::ZERO,
            was_dragging: false,
            glow: GLOW_IDLE,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn progress(&self) -> f32 {
        self.progress
    }
    pub fn role(&self) -> SegmentRole {
        self.role
    }
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
    pub fn glow(&self) -> f32 {
        self.glow
    }

    /// Segments nearer the free end follow the pointer more.
    #[inline]
    pub fn drag_influence(&self) -> f32 {
        self.progress.powf(DRAG_INFLUENCE_EXPONENT)
    }

    pub fn size(&self) -> f32 {
        match self.role {
            SegmentRole::Body => BODY_CHEVRON_SIZE - self.progress * BODY_CHEVRON_TAPER,
            SegmentRole::Tip => TIP_CHEVRON_SIZE,
        }
    }

    fn follow_rate(&self) -> f32 {
        match self.role {
            SegmentRole::Body => BODY_FOLLOW_RATE - self.progress * BODY_FOLLOW_DELAY,
            SegmentRole::Tip => TIP_FOLLOW_RATE,
        }
    }

    pub fn return_speed(&self) -> f32 {
        match self.role {
            SegmentRole::Body => BODY_RETURN_SPEED + self.progress * BODY_RETURN_SPEED_GROWTH,
            SegmentRole::Tip => TIP_RETURN_SPEED,
        }
    }

    fn drag_goal(&self, state: &WhipState) -> Vec2 {
        let influence = self.drag_influence();
        let (gain, overshoot) = match self.role {
            SegmentRole::Body => (BODY_DRAG_GAIN, BODY_OVERSHOOT * influence),
            SegmentRole::Tip => (TIP_DRAG_GAIN, TIP_OVERSHOOT),
        };
        state.target * gain * influence + state.velocity * overshoot
    }

    fn bounce(&self, return_progress: f32) -> f32 {
        match self.role {
            SegmentRole::Body => {
                release_bounce(return_progress, BODY_BOUNCE_HALF_CYCLES, BODY_BOUNCE_AMPLITUDE)
            }
            SegmentRole::Tip => {
                release_bounce(return_progress, TIP_BOUNCE_HALF_CYCLES, TIP_BOUNCE_AMPLITUDE)
            }
        }
    }

    /// Advance this segment's offset and glow; returns its pose at time `t`.
    pub fn update(&mut self, t: f32, state: &WhipState) -> SegmentPose {
        let (idle, angle) = idle_spiral(self.role, self.index, self.progress, t);

        let displacement = if state.is_dragging {
            let goal = self.drag_goal(state);
            self.offset = smooth_toward(self.offset, goal, self.follow_rate());
            self.offset
        } else {
            if self.was_dragging {
                self.release_offset = self.offset;
            } else if state.return_progress >= 1.0 {
                self.release_offset = Vec2::ZERO;
            }
            self.offset = smooth_toward(self.offset, Vec2::ZERO, self.return_speed());
            self.offset + self.release_offset * self.bounce(state.return_progress)
        };
        self.was_dragging = state.is_dragging;

        self.glow = ease_scalar(self.glow, self.glow_goal(t, state), GLOW_EASE);

        SegmentPose {
            position: idle + displacement.extend(0.0),
            rotation: self.rotation(t, angle, displacement),
            size: self.size(),
            glow: self.glow,
            role: self.role,
        }
    }

    fn rotation(&self, t: f32, angle: f32, displacement: Vec2) -> Vec3 {
        let ahead = angle + TANGENT_LOOKAHEAD_RAD;
        let tilt = match self.role {
            SegmentRole::Body => BODY_OFFSET_TILT,
            SegmentRole::Tip => TIP_OFFSET_TILT,
        };
        let tangent = Vec2::new(-ahead.sin(), ahead.cos() * SPIRAL_Y_SQUASH) + displacement * tilt;
        let heading = tangent.y.atan2(tangent.x);
        match self.role {
            SegmentRole::Body => Vec3::new(
                0.0,
                (t * 0.6 + self.index as f32 * 0.08).sin() * 0.15,
                heading + FRAC_PI_2,
            ),
            SegmentRole::Tip => Vec3::new(0.0, (t * 0.6).sin() * 0.2, heading),
        }
    }

    fn glow_goal(&self, t: f32, state: &WhipState) -> f32 {
        let (drag, pulse) = match self.role {
            SegmentRole::Body => (BODY_GLOW_DRAG, BODY_GLOW_HOVER_PULSE),
            SegmentRole::Tip => (TIP_GLOW_DRAG, TIP_GLOW_HOVER_PULSE),
        };
        if state.is_dragging {
            drag
        } else if state.is_hovering {
            GLOW_IDLE + pulse * (0.5 + 0.5 * (t * GLOW_HOVER_PULSE_RATE).sin())
        } else {
            GLOW_IDLE
        }
    }
}

/// Resting position on the spiral and the spiral angle used for heading.
pub fn idle_spiral(role: SegmentRole, index: usize, progress: f32, t: f32) -> (Vec3, f32) {
    let i = index as f32;
    let wave_offset = i * WAVE_PHASE_PER_INDEX;
    let wave1 = (t * 1.8 + wave_offset).sin() * 0.12;
    let angle = progress * SPIRAL_TURNS_RAD + t * SPIRAL_SPIN_RATE;
    let radius = SPIRAL_BASE_RADIUS + progress * SPIRAL_RADIUS_GROWTH + wave1;
    let depth_wobble = (t * 0.7 + i * 0.15).sin() * 0.08;

    let pos = match role {
        SegmentRole::Body => {
            let wave2 = (t * 1.3 + wave_offset * 0.8).cos() * 0.08;
            let wave3 = (t * 0.9 + wave_offset * 1.2).sin() * 0.06;
            Vec3::new(
                angle.cos() * radius + wave2,
                angle.sin() * radius * SPIRAL_Y_SQUASH + wave3,
                progress * SPIRAL_DEPTH + depth_wobble,
            )
        }
        SegmentRole::Tip => Vec3::new(
            angle.cos() * radius + (t * 1.3 + 7.0).cos() * 0.08,
            angle.sin() * radius * SPIRAL_Y_SQUASH + (t * 0.9 + 10.0).sin() * 0.06 - 0.3,
            progress * SPIRAL_DEPTH + depth_wobble + 0.15,
        ),
    };
    (pos, angle)
}

/// Outline of a unit chevron pointing along +X: nose, upper wing, notch,
/// lower wing. Scale by [`SegmentPose::size`].
pub fn chevron_outline(role: SegmentRole) -> [Vec2; 4] {
    match role {
        SegmentRole::Body => [
            Vec2::new(1.5, 0.0),
            Vec2::new(0.0, 0.5),
            Vec2::new(0.3, 0.0),
            Vec2::new(0.0, -0.5),
        ],
        SegmentRole::Tip => [
            Vec2::new(2.2, 0.0),
            Vec2::new(0.0, 0.6),
            Vec2::new(0.35, 0.0),
            Vec2::new(0.0, -0.6),
        ],
    }
}
