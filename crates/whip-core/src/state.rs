//! Shared animation state and camera description.
//!
//! [`WhipState`] is the single record every per-frame updater reads. Its
//! fields are crate-private and only the gesture tracker mutates them; the
//! segments and the jab detector receive `&WhipState`.

use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z};
use glam::{Mat4, Vec2, Vec3};

/// Interaction mode derived from the drag flag and return progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Dragging,
    Returning,
}

#[derive(Clone, Debug)]
pub struct WhipState {
    pub(crate) is_dragging: bool,
    pub(crate) is_hovering: bool,
    pub(crate) target: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) return_progress: f32,
    pub(crate) scene_offset: Vec2,
    // bumped on every accepted pointer move
    pub(crate) move_count: u64,
}

impl Default for WhipState {
    fn default() -> Self {
        Self {
            is_dragging: false,
            is_hovering: false,
            target: Vec2::ZERO,
            velocity: Vec2::ZERO,
            return_progress: 1.0,
            scene_offset: Vec2::ZERO,
            move_count: 0,
        }
    }
}

impl WhipState {
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }
    pub fn target(&self) -> Vec2 {
        self.target
    }
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
    pub fn return_progress(&self) -> f32 {
        self.return_progress
    }
    pub fn scene_offset(&self) -> Vec2 {
        self.scene_offset
    }
    /// Number of pointer moves applied so far; lets readers tell a fresh
    /// velocity sample from one left over by an earlier move.
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    pub fn mode(&self) -> Mode {
        if self.is_dragging {
            Mode::Dragging
        } else if self.return_progress < 1.0 {
            Mode::Returning
        } else {
            Mode::Idle
        }
    }

    /// True while the element should stay expanded (the `whipping` class).
    pub fn is_expanded(&self) -> bool {
        self.mode() != Mode::Idle
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World units spanned vertically by the frustum at the z=0 plane.
    pub fn visible_height_at_origin(&self) -> f32 {
        let distance = (self.eye - self.target).length();
        2.0 * distance * (self.fovy_radians * 0.5).tan()
    }
}
