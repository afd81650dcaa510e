//! Start-up configuration resolved once from the device tier.
//!
//! Frontends classify the host (see the web crate's `device` module) and hand
//! the resulting [`EngineConfig`] to [`crate::WhipEngine::new`]. Nothing in the
//! per-frame path queries the platform again.

use thiserror::Error;

/// Coarse capability class of the host device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceTier {
    #[default]
    Standard,
    Constrained,
}

impl DeviceTier {
    pub fn from_constrained(constrained: bool) -> Self {
        if constrained {
            DeviceTier::Constrained
        } else {
            DeviceTier::Standard
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("segment count must be at least 1")]
    NoSegments,
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("pixel density cap must be a finite value >= 1.0, got {0}")]
    PixelDensityCap(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Body segments, not counting the tip.
    pub segment_count: usize,
    /// Particles per explosion.
    pub particle_count: usize,
    /// Upper bound applied to the device pixel ratio when sizing the surface.
    pub pixel_density_cap: f32,
    pub seed: u64,
}

impl EngineConfig {
    pub fn for_tier(tier: DeviceTier) -> Self {
        match tier {
            DeviceTier::Standard => Self {
                segment_count: 30,
                particle_count: 120,
                pixel_density_cap: 2.0,
                seed: 42,
            },
            DeviceTier::Constrained => Self {
                segment_count: 20,
                particle_count: 60,
                pixel_density_cap: 1.5,
                seed: 42,
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_count == 0 {
            return Err(ConfigError::NoSegments);
        }
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !self.pixel_density_cap.is_finite() || self.pixel_density_cap < 1.0 {
            return Err(ConfigError::PixelDensityCap(self.pixel_density_cap));
        }
        Ok(())
    }

    /// Device pixel ratio to use for the backing store.
    #[inline]
    pub fn capped_pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(self.pixel_density_cap as f64)
        } else {
            1.0
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::for_tier(DeviceTier::Standard)
    }
}
