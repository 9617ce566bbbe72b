use thiserror::Error;

/// Raised when a [`crate::FrameController`] cannot be built from its configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a frame sequence needs at least one image")]
    EmptySequence,
    #[error("initial frame {initial} is outside a sequence of {frame_count} frames")]
    InitialFrameOutOfRange { initial: usize, frame_count: usize },
    #[error("rotation speed must be a positive number of frames per second, got {0}")]
    InvalidRotationSpeed(f64),
}
