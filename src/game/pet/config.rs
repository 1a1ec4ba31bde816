// Pet behaviour and asset configuration

use glam::IVec2;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Pause probability must be within [0, 1], got {0}")]
    PauseProbability(f64),

    #[error("Pause duration range is empty: {start}..={end} ms")]
    PauseDuration { start: u64, end: u64 },

    #[error("Animation interval must be greater than zero")]
    ZeroInterval,

    #[error("Resize factor must be a positive number, got {0}")]
    ResizeFactor(f32),
}

/// Tunables for how the pet looks and moves
#[derive(Debug, Clone)]
pub struct PetConfig {
    /// Directory the asset names are resolved against
    pub asset_dir: PathBuf,
    /// Still image shown while paused
    pub standing_image: String,
    /// Animated image played while walking
    pub walking_animation: String,
    /// Sound played when the pet is clicked
    pub click_sound: String,

    /// Uniform scale applied to every image
    pub resize_factor: f32,
    /// Pixels moved per walking tick
    pub move_distance: i32,
    /// Delay between walking ticks
    pub animation_interval: Duration,
    /// Chance of pausing after each tick
    pub pause_probability: f64,
    /// Pause length bounds in milliseconds, both inclusive
    pub pause_duration_ms: RangeInclusive<u64>,

    /// Initial window position
    pub start_position: IVec2,
    pub window_title: String,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            standing_image: "pet-stand.png".to_string(),
            walking_animation: "pet-walk.gif".to_string(),
            click_sound: "click.wav".to_string(),
            resize_factor: 0.5,
            move_distance: 5,
            animation_interval: Duration::from_millis(100),
            pause_probability: 0.10,
            pause_duration_ms: 2000..=5000,
            start_position: IVec2::new(200, 200),
            window_title: "Desktop Pet".to_string(),
        }
    }
}

impl PetConfig {
    /// Resolve assets against a different directory
    #[cfg(test)]
    pub fn with_asset_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Override the pause chance and duration bounds
    #[cfg(test)]
    pub fn with_pauses(mut self, probability: f64, duration_ms: RangeInclusive<u64>) -> Self {
        self.pause_probability = probability;
        self.pause_duration_ms = duration_ms;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.pause_probability) {
            return Err(ConfigError::PauseProbability(self.pause_probability));
        }
        if self.pause_duration_ms.is_empty() {
            return Err(ConfigError::PauseDuration {
                start: *self.pause_duration_ms.start(),
                end: *self.pause_duration_ms.end(),
            });
        }
        if self.animation_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !self.resize_factor.is_finite() || self.resize_factor <= 0.0 {
            return Err(ConfigError::ResizeFactor(self.resize_factor));
        }
        Ok(())
    }
}
