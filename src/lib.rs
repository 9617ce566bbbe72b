//! Frame control for 360° turntable viewers.
//!
//! A [`FrameController`] maps drag gestures, release momentum and idle
//! auto-rotation onto an index into a fixed, pre-ordered image sequence, and
//! tells a [`FrameRenderer`] which frame to show. It does no drawing itself.

pub mod auto_rotate;
pub mod config;
pub mod constants;
pub mod drag;
pub mod error;
pub mod frame_controller;
pub mod momentum;
pub mod renderer;
pub mod sequence;
pub mod state;

pub use config::{InputProfile, ViewerConfig};
pub use error::ConfigError;
pub use frame_controller::FrameController;
pub use renderer::{FrameRenderer, NullRenderer};
pub use state::ViewerState;
