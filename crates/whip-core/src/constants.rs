use std::f32::consts::PI;

// Shared whip tuning constants used by both web and native frontends.
// Per-frame factors assume one call per displayed frame (60 Hz reference).

// Gesture tracking
pub const VELOCITY_GAIN: f32 = 15.0; // normalized delta per move event -> velocity
pub const VIEWPORT_DRAG_FRACTION: f32 = 3.0; // a third of the viewport spans one unit of target
pub const VELOCITY_IDLE_DECAY: f32 = 0.92; // per idle frame
pub const TARGET_IDLE_DECAY: f32 = 0.98; // per idle frame
pub const RETURN_PROGRESS_STEP: f32 = 0.02; // 50 frames from release to settled

// Idle spiral path
pub const SPIRAL_TURNS_RAD: f32 = 2.2 * PI;
pub const SPIRAL_SPIN_RATE: f32 = 0.4;
pub const SPIRAL_BASE_RADIUS: f32 = 1.2;
pub const SPIRAL_RADIUS_GROWTH: f32 = 1.0;
pub const SPIRAL_Y_SQUASH: f32 = 0.7;
pub const SPIRAL_DEPTH: f32 = 0.3;
pub const WAVE_PHASE_PER_INDEX: f32 = 0.25;
pub const TANGENT_LOOKAHEAD_RAD: f32 = 0.15;

// Drag response
pub const DRAG_INFLUENCE_EXPONENT: f32 = 0.6;
pub const BODY_DRAG_GAIN: f32 = 2.5;
pub const TIP_DRAG_GAIN: f32 = 3.0;
pub const BODY_OVERSHOOT: f32 = 0.6; // scaled by drag influence
pub const TIP_OVERSHOOT: f32 = 0.8;
pub const BODY_FOLLOW_RATE: f32 = 0.15;
pub const BODY_FOLLOW_DELAY: f32 = 0.1; // rate reduction at the free end
pub const TIP_FOLLOW_RATE: f32 = 0.2;

// Return after release
pub const BODY_RETURN_SPEED: f32 = 0.03;
pub const BODY_RETURN_SPEED_GROWTH: f32 = 0.02;
pub const TIP_RETURN_SPEED: f32 = 0.04;
pub const BODY_BOUNCE_HALF_CYCLES: f32 = 2.0;
pub const TIP_BOUNCE_HALF_CYCLES: f32 = 3.0;
pub const BODY_BOUNCE_AMPLITUDE: f32 = 0.8;
pub const TIP_BOUNCE_AMPLITUDE: f32 = 1.0;

// Orientation
pub const BODY_OFFSET_TILT: f32 = 0.4;
pub const TIP_OFFSET_TILT: f32 = 0.5;

// Glow
pub const GLOW_IDLE: f32 = 1.0;
pub const BODY_GLOW_DRAG: f32 = 1.5;
pub const TIP_GLOW_DRAG: f32 = 1.8;
pub const BODY_GLOW_HOVER_PULSE: f32 = 0.3;
pub const TIP_GLOW_HOVER_PULSE: f32 = 0.5;
pub const GLOW_HOVER_PULSE_RATE: f32 = 4.0;
pub const GLOW_EASE: f32 = 0.1;

// Chevron sizing
pub const BODY_CHEVRON_SIZE: f32 = 0.18;
pub const BODY_CHEVRON_TAPER: f32 = 0.06;
pub const TIP_CHEVRON_SIZE: f32 = 0.25;
pub const BODY_CHEVRON_DEPTH: f32 = 0.06; // extrusion, world units
pub const TIP_CHEVRON_DEPTH: f32 = 0.1;

// Jab detection
pub const JAB_VELOCITY_THRESHOLD: f32 = 2.5;
pub const JAB_COOLDOWN_SEC: f64 = 0.12;
pub const JAB_TARGET_SCALE: f32 = 1.5;

// Explosions
pub const EXPLOSION_DURATION_SEC: f64 = 1.2;
pub const EXPLOSION_JITTER_RADIUS: f32 = 0.15;
pub const EXPLOSION_UPWARD_BIAS: f32 = 0.8;
pub const EXPLOSION_Z_FLATTEN: f32 = 0.5;
pub const EXPLOSION_GRAVITY: f32 = 2.2;
pub const EXPLOSION_SPIRAL_TWIST_MAX: f32 = 1.5; // rad/s, sign chosen per burst
pub const EXPLOSION_DRAG_EXPONENT: i32 = 2;
pub const EXPLOSION_FADE_EXPONENT: f32 = 1.5;
pub const EXPLOSION_SHRINK_EXPONENT_MIN: f32 = 1.5;
pub const EXPLOSION_SHRINK_EXPONENT_MAX: f32 = 3.0;

// Ambient motes around the spiral
pub const MOTE_COUNT: usize = 40;
pub const MOTE_SCATTER: f32 = 0.4;
pub const MOTE_SIZE: f32 = 0.04;
pub const MOTE_OPACITY: f32 = 0.7;
pub const MOTE_SPIN_RATE: f32 = 0.08;

// Whole-whip sway and float bob
pub const SWAY_AMPLITUDE: f32 = 0.04;
pub const FLOAT_SPEED: f32 = 1.5;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.15;
pub const FLOAT_INTENSITY: f32 = 0.25;

// Camera
pub const CAMERA_Z: f32 = 4.5;
pub const CAMERA_FOV_DEG: f32 = 50.0;

// Palette
pub const WHIP_COLOR: [f32; 3] = [0.0, 0.831, 1.0]; // #00D4FF
pub const WHIP_RIM_COLOR: [f32; 3] = [0.5, 1.0, 1.0];
