pub const WINDOW_WIDTH: i32 = 960;            // Default window width
pub const WINDOW_HEIGHT: i32 = 540;           // Default window height
pub const FPS: u32 = 60;                      // Display refresh rate driving momentum ticks

pub const POINTER_SENSITIVITY: f64 = 0.25;    // Frames per pixel of mouse drag
pub const TOUCH_SENSITIVITY: f64 = 0.15;      // Lower for coarse input, reduces jitter
pub const POINTER_VELOCITY_SCALE: f64 = 0.01; // Velocity per pixel of mouse drag
pub const TOUCH_VELOCITY_SCALE: f64 = 0.015;  // Touch gestures are shorter and faster

pub const MOMENTUM_THRESHOLD: f64 = 0.001;    // Below this, momentum (and release velocity) counts as zero
pub const MOMENTUM_DECAY: f64 = 0.95;         // Geometric decay applied every momentum tick
pub const MOMENTUM_FRAME_GAIN: f64 = 10.0;    // Frames per unit of momentum per tick

pub const DEFAULT_ROTATION_SPEED: f64 = 0.5;  // Auto-rotate frames per second
pub const FIT_RATIO: f32 = 0.9;               // Share of the window a frame may fill
pub const ERROR_DISPLAY_SECS: u64 = 5;        // How long a load error stays on screen
