//! Pointer gesture tracking.
//!
//! Converts viewport-pixel pointer positions into the normalized drag target
//! and velocity stored in [`WhipState`]. This module is the only writer of
//! the pointer-related fields of the state.

use crate::constants::{
    RETURN_PROGRESS_STEP, TARGET_IDLE_DECAY, VELOCITY_GAIN, VELOCITY_IDLE_DECAY,
    VIEWPORT_DRAG_FRACTION,
};
use crate::state::{Camera, WhipState};
use glam::Vec2;

/// Size of the host viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Map a pointer position to the drag target space.
///
/// One unit spans a third of the viewport and Y points up. The result is not
/// clamped: fast, wide drags leave the unit range and that is what produces
/// overshoot. Returns `None` for non-finite input or an unusable viewport.
#[inline]
pub fn normalize_pointer(pointer: Vec2, origin: Vec2, viewport: Viewport) -> Option<Vec2> {
    if !viewport.is_usable() || !pointer.is_finite() || !origin.is_finite() {
        return None;
    }
    Some(Vec2::new(
        (pointer.x - origin.x) / (viewport.width / VIEWPORT_DRAG_FRACTION),
        -(pointer.y - origin.y) / (viewport.height / VIEWPORT_DRAG_FRACTION),
    ))
}

/// World-space translation that keeps the whip over `origin` once the canvas
/// fills the whole viewport.
pub fn scene_offset_for(origin: Vec2, viewport: Viewport, camera: &Camera) -> Vec2 {
    if !viewport.is_usable() || !origin.is_finite() {
        return Vec2::ZERO;
    }
    let world_per_px = camera.visible_height_at_origin() / viewport.height;
    let from_center = origin - viewport.center();
    Vec2::new(from_center.x * world_per_px, -from_center.y * world_per_px)
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    origin: Vec2,
    last: Vec2,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag. `origin` is the element's on-screen center at the moment
    /// of the press, in the same pixel space as `pointer`.
    pub fn pointer_down(
        &mut self,
        state: &mut WhipState,
        pointer: Vec2,
        origin: Vec2,
        viewport: Viewport,
        camera: &Camera,
    ) -> bool {
        let Some(pos) = normalize_pointer(pointer, origin, viewport) else {
            log::debug!("[gesture] ignored pointer down at {:?}", pointer);
            return false;
        };
        self.origin = origin;
        self.last = pos;
        state.scene_offset = scene_offset_for(origin, viewport, camera);
        state.is_dragging = true;
        state.return_progress = 0.0;
        state.target = pos;
        state.velocity = Vec2::ZERO;
        true
    }

    pub fn pointer_move(&mut self, state: &mut WhipState, pointer: Vec2, viewport: Viewport) {
        if !state.is_dragging {
            return;
        }
        let Some(pos) = normalize_pointer(pointer, self.origin, viewport) else {
            return;
        };
        state.velocity = (pos - self.last) * VELOCITY_GAIN;
        state.target = pos;
        state.move_count = state.move_count.wrapping_add(1);
        self.last = pos;
    }

    /// Release: restarts the return easing. No-op unless dragging.
    pub fn pointer_up(&mut self, state: &mut WhipState) -> bool {
        if !state.is_dragging {
            return false;
        }
        state.is_dragging = false;
        state.return_progress = 0.0;
        true
    }

    /// Abrupt stop that skips the return bounce entirely.
    pub fn cancel(&mut self, state: &mut WhipState) -> bool {
        if !state.is_dragging {
            return false;
        }
        state.is_dragging = false;
        state.return_progress = 1.0;
        state.velocity = Vec2::ZERO;
        state.scene_offset = Vec2::ZERO;
        true
    }

    pub fn set_hovering(&self, state: &mut WhipState, hovering: bool) {
        state.is_hovering = hovering;
    }

    /// Per-frame relaxation while not dragging.
    pub fn idle_decay(&self, state: &mut WhipState) {
        if state.is_dragging {
            return;
        }
        state.velocity *= VELOCITY_IDLE_DECAY;
        state.target *= TARGET_IDLE_DECAY;
        if state.return_progress < 1.0 {
            let next = state.return_progress + RETURN_PROGRESS_STEP;
            // snap so accumulated f32 error cannot cost an extra frame
            if next >= 1.0 - 1e-4 {
                state.return_progress = 1.0;
                state.scene_offset = Vec2::ZERO;
            } else {
                state.return_progress = next;
            }
        }
    }
}
