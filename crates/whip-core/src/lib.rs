pub mod config;
pub mod constants;
pub mod engine;
pub mod explosion;
pub mod gesture;
pub mod jab;
pub mod scene;
pub mod segment;
pub mod spring;
pub mod state;

pub use config::*;
pub use engine::*;
pub use explosion::Explosion;
pub use gesture::{GestureTracker, Viewport};
pub use jab::{ExplosionManager, JabDetector};
pub use scene::{AmbientMotes, ParticleInstance, SegmentInstance};
pub use segment::{chevron_outline, Segment, SegmentPose, SegmentRole};
pub use state::*;
