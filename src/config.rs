use serde::Deserialize;
use std::time::Duration;

use crate::constants::*;
use crate::error::ConfigError;

/// Input device class. Selects the drag sensitivity and velocity constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputProfile {
    #[default]
    Pointer,
    Touch,
}

impl InputProfile {
    /// Frames per unit of horizontal drag.
    pub fn sensitivity(self) -> f64 {
        match self {
            InputProfile::Pointer => POINTER_SENSITIVITY,
            InputProfile::Touch => TOUCH_SENSITIVITY,
        }
    }

    /// Velocity per unit of horizontal drag, seeds momentum on release.
    pub fn velocity_scale(self) -> f64 {
        match self {
            InputProfile::Pointer => POINTER_VELOCITY_SCALE,
            InputProfile::Touch => TOUCH_VELOCITY_SCALE,
        }
    }
}

/// Everything a [`crate::FrameController`] needs at construction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub frame_count: usize,
    pub initial_frame: usize,
    pub auto_rotate: bool,
    /// Auto-rotate frames per second.
    pub rotation_speed: f64,
    pub enable_momentum: bool,
    pub input_profile: InputProfile,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            frame_count: 0,
            initial_frame: 0,
            auto_rotate: false,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            enable_momentum: true,
            input_profile: InputProfile::Pointer,
        }
    }
}

impl ViewerConfig {
    /// Defaults for a sequence of `frame_count` images.
    pub fn new(frame_count: usize) -> Self {
        Self { frame_count, ..Self::default() }
    }

    /// The ordered image list defines the frame count.
    pub fn for_images<T>(images: &[T]) -> Self {
        Self::new(images.len())
    }

    pub fn with_initial_frame(mut self, initial_frame: usize) -> Self {
        self.initial_frame = initial_frame;
        self
    }

    pub fn with_auto_rotate(mut self, enabled: bool) -> Self {
        self.auto_rotate = enabled;
        self
    }

    pub fn with_rotation_speed(mut self, frames_per_second: f64) -> Self {
        self.rotation_speed = frames_per_second;
        self
    }

    pub fn with_momentum(mut self, enabled: bool) -> Self {
        self.enable_momentum = enabled;
        self
    }

    pub fn with_input_profile(mut self, profile: InputProfile) -> Self {
        self.input_profile = profile;
        self
    }

    /// Auto-rotate cadence, `1000 / rotation_speed` milliseconds.
    pub fn auto_rotate_period(&self) -> Result<Duration, ConfigError> {
        let speed = self.rotation_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::InvalidRotationSpeed(speed));
        }
        match Duration::try_from_secs_f64(1.0 / speed) {
            // Too fast to represent: the timer would never fire
            Ok(period) if !period.is_zero() => Ok(period),
            _ => Err(ConfigError::InvalidRotationSpeed(speed)),
        }
    }
}
