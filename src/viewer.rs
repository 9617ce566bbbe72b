use raylib::prelude::*;
use turntable::FrameRenderer;
use turntable::constants::FIT_RATIO;

const LABEL: &str = "360°";
const LABEL_SIZE: i32 = 16;
const LABEL_WIDTH: i32 = 36; // default font at LABEL_SIZE
const LABEL_COLOR: Color = Color::new(156, 163, 175, 204);

/// Scale that fits a `tex_width` x `tex_height` frame inside the window, never upscaling.
fn fit_scale(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> f32 {
    let max_width = screen_width * FIT_RATIO;
    let max_height = screen_height * FIT_RATIO;
    (max_width / tex_width).min(max_height / tex_height).min(1.0)
}

/// Renderer backed by the loaded turntable textures.
pub struct TextureFrames {
    textures: Vec<Texture2D>,
    shown: usize,
}

impl TextureFrames {
    pub fn new(textures: Vec<Texture2D>, initial: usize) -> Self {
        Self { textures, shown: initial }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let Some(texture) = self.textures.get(self.shown) else {
            return;
        };
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;
        let scale = fit_scale(tex_width, tex_height, screen_width, screen_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        d.draw_text(
            LABEL,
            (screen_width as i32 - LABEL_WIDTH) / 2,
            screen_height as i32 - 30 - LABEL_SIZE,
            LABEL_SIZE,
            LABEL_COLOR,
        );
    }
}

impl FrameRenderer for TextureFrames {
    fn present(&mut self, frame: usize) {
        if frame < self.textures.len() {
            self.shown = frame;
        }
    }
}

/// Loading screen with a progress bar for `loaded` of `total` frames.
pub fn draw_loading(rl: &mut RaylibHandle, thread: &RaylibThread, loaded: usize, total: usize) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);

    let screen_width = d.get_screen_width();
    let screen_height = d.get_screen_height();
    let bar_width = screen_width / 2;
    let bar_x = (screen_width - bar_width) / 2;
    let bar_y = screen_height / 2;
    let progress = if total == 0 { 0.0 } else { loaded as f32 / total as f32 };

    d.draw_text("Loading 360° View...", bar_x, bar_y - 30, 20, Color::LIGHTGRAY);
    d.draw_rectangle_lines(bar_x, bar_y, bar_width, 8, Color::DARKGRAY);
    d.draw_rectangle(bar_x, bar_y, (bar_width as f32 * progress) as i32, 8, Color::WHITE);
}

/// Draws a load failure; the caller decides how long it stays up.
pub fn draw_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text("Failed to load 360° viewer", 20, 20, 20, Color::RED);
    d.draw_text(message, 20, 50, 16, Color::LIGHTGRAY);
}
