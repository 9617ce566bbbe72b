use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use turntable::constants::*;
use turntable::{InputProfile, ViewerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Pointer,
    Touch,
}

impl From<ProfileArg> for InputProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Pointer => InputProfile::Pointer,
            ProfileArg::Touch => InputProfile::Touch,
        }
    }
}

/// Drag-to-rotate viewer for a directory of turntable photos.
#[derive(Debug, Parser)]
#[command(name = "turntable", version, about)]
pub struct Args {
    /// Directory holding the frames, ordered by file name
    pub image_directory: PathBuf,

    /// Rotate on a timer while idle
    #[arg(long)]
    pub auto_rotate: bool,

    /// Auto-rotate speed in frames per second
    #[arg(long, default_value_t = DEFAULT_ROTATION_SPEED)]
    pub rotation_speed: f64,

    /// Stop as soon as the drag is released
    #[arg(long)]
    pub no_momentum: bool,

    /// Input device class, selects drag sensitivity
    #[arg(long, value_enum, default_value_t = ProfileArg::Pointer)]
    pub profile: ProfileArg,

    #[arg(long, default_value_t = 0)]
    pub initial_frame: usize,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

impl Args {
    pub fn viewer_config<T>(&self, images: &[T]) -> ViewerConfig {
        ViewerConfig::for_images(images)
            .with_initial_frame(self.initial_frame)
            .with_auto_rotate(self.auto_rotate)
            .with_rotation_speed(self.rotation_speed)
            .with_momentum(!self.no_momentum)
            .with_input_profile(self.profile.into())
    }
}
