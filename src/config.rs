use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a pet config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// One animation clip: how many frames it has, how fast it plays,
/// and the native pixel size of its frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    pub frame_count: usize,
    pub fps: f32,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl ClipConfig {
    pub const fn new(frame_count: usize, fps: f32) -> Self {
        Self {
            frame_count,
            fps,
            frame_width: 100.0,
            frame_height: 100.0,
        }
    }

    /// Seconds for one full pass through the clip. An empty clip counts as one frame.
    pub fn loop_duration(&self) -> f32 {
        if self.fps <= 0.0 {
            return 0.0;
        }
        self.frame_count.max(1) as f32 / self.fps
    }
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self::new(1, 12.0)
    }
}

/// Every tunable the creature controller reads.
///
/// Loaded from RON by the host; missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    /// Cruising speed in pixels/second.
    pub base_speed: f32,
    /// Hard cap on speed after smoothing.
    pub max_speed: f32,
    /// Velocity low-pass rate (1/s). Higher = snappier turns.
    pub smoothness: f32,

    /// Speed multiplier while a tap boost is active.
    pub press_boost: f32,
    /// Length of the tap boost in seconds.
    pub press_duration: f32,
    /// Walk animation rate while boosted.
    pub pressed_fps: f32,

    pub frustration_per_click: f32,
    /// Seconds per point of frustration decay.
    pub frustration_decay_interval: f32,
    /// Seconds per point of happiness decay.
    pub happiness_decay_interval: f32,
    pub feed_happiness: f32,

    /// Idle seconds before the pet falls asleep.
    pub sleep_after: f32,
    pub angry_duration: f32,
    /// Frustration left over once a tantrum ends.
    pub angry_exit_frustration: f32,

    pub follow_tolerance: f32,
    /// Below this speed the walk cycle slows to `idle_anim_rate`.
    pub moving_threshold: f32,
    pub idle_anim_rate: f32,

    /// Extra sprite scale on top of the fit-to-viewport factor.
    pub display_scale: f32,
    /// Maximum fit-to-viewport upscale.
    pub max_upscale: f32,
    /// Fraction of the viewport width a frame may occupy.
    pub fit_width_fraction: f32,
    /// Fraction of the viewport height a frame may occupy.
    pub fit_height_fraction: f32,

    pub walk: ClipConfig,
    pub sleep: ClipConfig,
    pub happy: ClipConfig,
    pub angry: ClipConfig,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            base_speed: 140.0,
            max_speed: 800.0,
            smoothness: 8.0,
            press_boost: 2.2,
            press_duration: 0.7,
            pressed_fps: 28.0,
            frustration_per_click: 10.0,
            frustration_decay_interval: 3.0,
            happiness_decay_interval: 2.0,
            feed_happiness: 15.0,
            sleep_after: 30.0,
            angry_duration: 10.0,
            angry_exit_frustration: 50.0,
            follow_tolerance: 12.0,
            moving_threshold: 6.0,
            idle_anim_rate: 0.4,
            display_scale: 1.30,
            max_upscale: 1.35,
            fit_width_fraction: 0.5,
            fit_height_fraction: 0.35,
            walk: ClipConfig::new(161, 12.0),
            sleep: ClipConfig::new(24, 8.0),
            happy: ClipConfig::new(72, 36.0),
            angry: ClipConfig::new(48, 12.0),
        }
    }
}

impl PetConfig {
    /// Read and validate a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&text)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: PetConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or blow up the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
            ("smoothness", self.smoothness),
            ("pressed_fps", self.pressed_fps),
            ("frustration_decay_interval", self.frustration_decay_interval),
            ("happiness_decay_interval", self.happiness_decay_interval),
            ("sleep_after", self.sleep_after),
            ("display_scale", self.display_scale),
            ("max_upscale", self.max_upscale),
            ("fit_width_fraction", self.fit_width_fraction),
            ("fit_height_fraction", self.fit_height_fraction),
            ("walk.fps", self.walk.fps),
            ("sleep.fps", self.sleep.fps),
            ("happy.fps", self.happy.fps),
            ("angry.fps", self.angry.fps),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("press_boost", self.press_boost),
            ("press_duration", self.press_duration),
            ("frustration_per_click", self.frustration_per_click),
            ("feed_happiness", self.feed_happiness),
            ("angry_duration", self.angry_duration),
            ("follow_tolerance", self.follow_tolerance),
            ("moving_threshold", self.moving_threshold),
            ("idle_anim_rate", self.idle_anim_rate),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be zero or positive",
                });
            }
        }

        if !(0.0..=100.0).contains(&self.angry_exit_frustration) {
            return Err(ConfigError::Invalid {
                field: "angry_exit_frustration",
                reason: "must lie in 0..=100",
            });
        }
        Ok(())
    }
}
