use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use turntable::FrameController;
use turntable::constants::ERROR_DISPLAY_SECS;

mod cli;
mod input;
mod texture_loader;
mod viewer;

use crate::cli::Args;
use crate::input::InputTracker;
use crate::texture_loader::{load_frames, load_sorted_image_paths};
use crate::viewer::{TextureFrames, draw_error, draw_loading};

fn show_error(rl: &mut RaylibHandle, rl_thread: &RaylibThread, err: &anyhow::Error) {
    error!("{err:#}");
    draw_error(rl, rl_thread, &format!("{err:#}"));
    thread::sleep(Duration::from_secs(ERROR_DISPLAY_SECS));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!(directory = %args.image_directory.display(), "starting turntable viewer");

    let (mut rl, rl_thread) = raylib::init()
        .size(args.width, args.height)
        .title("360° Turntable")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Image Source ---
    let loaded = load_sorted_image_paths(&args.image_directory).and_then(|paths| {
        draw_loading(&mut rl, &rl_thread, 0, paths.len());
        load_frames(&mut rl, &rl_thread, &paths, draw_loading)
    });
    let textures = match loaded {
        Ok(textures) => textures,
        Err(err) => {
            show_error(&mut rl, &rl_thread, &err);
            return Err(err);
        }
    };

    let config = args.viewer_config(&textures);
    let initial = config.initial_frame;
    let mut controller = match FrameController::new(config, TextureFrames::new(textures, initial)) {
        Ok(controller) => controller,
        Err(err) => {
            let err = anyhow::Error::new(err);
            show_error(&mut rl, &rl_thread, &err);
            return Err(err);
        }
    };
    let mut input = InputTracker::new(controller.config().input_profile);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or_default();

        for event in input.poll(&rl) {
            input::apply(&mut controller, event);
        }
        controller.update(dt);

        let mut d = rl.begin_drawing(&rl_thread);
        d.clear_background(Color::BLACK);
        controller.renderer().draw(&mut d);
    }

    // Stop both loops before the textures go away
    controller.dispose();
    info!(frame = controller.current_frame(), "viewer closed");
    Ok(())
}
