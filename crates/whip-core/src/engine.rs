//! The per-frame controller that frontends drive.
//!
//! Event handlers call the pointer/key methods in dispatch order; the frame
//! callback calls [`WhipEngine::tick`] once per animation frame and hands the
//! resulting [`WhipFrame`] plus the live explosions to the renderer.

use crate::config::{ConfigError, EngineConfig};
use crate::constants::MOTE_COUNT;
use crate::explosion::Explosion;
use crate::gesture::{GestureTracker, Viewport};
use crate::jab::{ExplosionManager, JabDetector};
use crate::scene::{group_transform, pack_explosions, pack_segments, AmbientMotes};
use crate::scene::{ParticleInstance, SegmentInstance};
use crate::segment::{Segment, SegmentPose};
use crate::state::{Camera, Mode, WhipState};
use glam::{Mat4, Vec2};

/// Everything the renderer needs for one frame apart from particle buffers.
#[derive(Clone, Debug)]
pub struct WhipFrame {
    pub time: f32,
    pub group: Mat4,
    /// Body segments in order, tip last.
    pub segments: Vec<SegmentPose>,
    pub mode: Mode,
    pub expanded: bool,
}

impl Default for WhipFrame {
    fn default() -> Self {
        Self {
            time: 0.0,
            group: Mat4::IDENTITY,
            segments: Vec::new(),
            mode: Mode::Idle,
            expanded: false,
        }
    }
}

pub struct WhipEngine {
    config: EngineConfig,
    state: WhipState,
    tracker: GestureTracker,
    segments: Vec<Segment>,
    tip: Segment,
    jab: JabDetector,
    explosions: ExplosionManager,
    motes: AmbientMotes,
    camera: Camera,
    last_now: Option<f64>,
    frame: WhipFrame,
}

impl WhipEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = config.segment_count;
        let segments = (0..n).map(|i| Segment::body(i, n)).collect();
        log::info!(
            "[engine] segments={} particles/burst={} dpr_cap={:.1}",
            n,
            config.particle_count,
            config.pixel_density_cap
        );
        Ok(Self {
            state: WhipState::default(),
            tracker: GestureTracker::new(),
            segments,
            tip: Segment::tip(n),
            jab: JabDetector::new(),
            explosions: ExplosionManager::new(config.particle_count, config.seed),
            motes: AmbientMotes::new(MOTE_COUNT, config.seed),
            camera: Camera::default(),
            last_now: None,
            frame: WhipFrame {
                segments: Vec::with_capacity(n + 1),
                ..WhipFrame::default()
            },
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
    pub fn state(&self) -> &WhipState {
        &self.state
    }
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
    pub fn tip(&self) -> &Segment {
        &self.tip
    }
    pub fn explosions(&self) -> &[Explosion] {
        self.explosions.active()
    }
    pub fn frame(&self) -> &WhipFrame {
        &self.frame
    }
    pub fn last_jab_time(&self) -> Option<f64> {
        self.jab.last_jab_time()
    }

    /// Drawable size changed; only the projection aspect depends on it.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn pointer_down(&mut self, pointer: Vec2, origin: Vec2, viewport: Viewport) -> bool {
        let started =
            self.tracker
                .pointer_down(&mut self.state, pointer, origin, viewport, &self.camera);
        if started {
            log::debug!("[gesture] drag start target={:?}", self.state.target());
        }
        started
    }

    pub fn pointer_move(&mut self, pointer: Vec2, viewport: Viewport) {
        self.tracker.pointer_move(&mut self.state, pointer, viewport);
    }

    pub fn pointer_up(&mut self) -> bool {
        self.tracker.pointer_up(&mut self.state)
    }

    pub fn cancel_drag(&mut self) -> bool {
        let cancelled = self.tracker.cancel(&mut self.state);
        if cancelled {
            log::debug!("[gesture] drag cancelled");
        }
        cancelled
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.tracker.set_hovering(&mut self.state, hovering);
    }

    /// Key handling: only Escape does anything, and only while dragging.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "Escape" => self.cancel_drag(),
            _ => false,
        }
    }

    /// Advance one animation frame to monotonic time `now` (seconds).
    ///
    /// Non-finite, negative or backwards timestamps reuse the previous time.
    pub fn tick(&mut self, now: f64) -> &WhipFrame {
        let now = match (self.last_now, now.is_finite() && now >= 0.0) {
            (Some(last), true) => now.max(last),
            (Some(last), false) => last,
            (None, true) => now,
            (None, false) => 0.0,
        };
        self.last_now = Some(now);
        let t = now as f32;

        self.tracker.idle_decay(&mut self.state);

        self.frame.segments.clear();
        for segment in &mut self.segments {
            self.frame.segments.push(segment.update(t, &self.state));
        }
        self.frame.segments.push(self.tip.update(t, &self.state));

        if let Some(center) = self.jab.check(&self.state, now) {
            self.explosions.spawn(center, now);
        }
        self.explosions.advance(now);

        self.frame.time = t;
        self.frame.group = group_transform(t, self.state.scene_offset());
        self.frame.mode = self.state.mode();
        self.frame.expanded = self.state.is_expanded();
        &self.frame
    }

    pub fn pack_segments(&self, out: &mut Vec<SegmentInstance>) {
        pack_segments(&self.frame.segments, out);
    }

    /// Explosion particles followed by the ambient motes.
    pub fn pack_particles(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        pack_explosions(self.explosions.active(), out);
        self.motes
            .pack(self.frame.time, self.state.scene_offset(), out);
    }
}
