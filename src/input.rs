use raylib::prelude::*;
use turntable::{FrameController, FrameRenderer, InputProfile};

/// Host input, already reduced to what the controller understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press(f64),
    Move(f64),
    Release,
    /// Arrow keys: one frame forward (+1) or back (-1), wrapping.
    Step(i64),
    Home,
    Reset,
    ToggleAutoRotate,
}

pub fn apply<R: FrameRenderer>(controller: &mut FrameController<R>, event: InputEvent) {
    match event {
        InputEvent::Press(x) => controller.begin_drag(x),
        InputEvent::Move(x) => controller.continue_drag(x),
        InputEvent::Release => controller.end_drag(),
        InputEvent::Step(delta) => {
            let count = controller.frame_count() as i64;
            let target = (controller.current_frame() as i64 + delta).rem_euclid(count);
            controller.go_to_frame(target);
        }
        InputEvent::Home => controller.go_to_frame(0usize),
        InputEvent::Reset => controller.reset(),
        InputEvent::ToggleAutoRotate => {
            let enabled = !controller.config().auto_rotate;
            controller.set_auto_rotate(enabled);
        }
    }
}

/// Turns raylib's polled mouse/touch/keyboard state into [`InputEvent`]s.
///
/// Only one contact is tracked; extra touch points are ignored.
#[derive(Debug)]
pub struct InputTracker {
    profile: InputProfile,
    contact: bool,
}

impl InputTracker {
    pub fn new(profile: InputProfile) -> Self {
        Self { profile, contact: false }
    }

    pub fn poll(&mut self, rl: &RaylibHandle) -> Vec<InputEvent> {
        let mut events = match self.profile {
            InputProfile::Pointer => self.poll_pointer(rl),
            InputProfile::Touch => self.poll_touch(rl),
        };
        events.extend(poll_keys(rl));
        events
    }

    fn poll_pointer(&mut self, rl: &RaylibHandle) -> Vec<InputEvent> {
        let x = rl.get_mouse_x() as f64;
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && rl.is_cursor_on_screen() {
            self.contact = true;
            return vec![InputEvent::Press(x)];
        }
        if !self.contact {
            return Vec::new();
        }
        // Leaving the window counts as a release
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) || !rl.is_cursor_on_screen() {
            self.contact = false;
            return vec![InputEvent::Release];
        }
        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            return vec![InputEvent::Move(x)];
        }
        Vec::new()
    }

    fn poll_touch(&mut self, rl: &RaylibHandle) -> Vec<InputEvent> {
        let points = rl.get_touch_point_count();
        let x = rl.get_touch_x() as f64;
        self.touch_transition(points, x)
    }

    fn touch_transition(&mut self, points: i32, x: f64) -> Vec<InputEvent> {
        match (self.contact, points) {
            (false, 1) => {
                self.contact = true;
                vec![InputEvent::Press(x)]
            }
            (true, 0) => {
                self.contact = false;
                vec![InputEvent::Release]
            }
            (true, 1) => vec![InputEvent::Move(x)],
            _ => Vec::new(),
        }
    }
}

fn poll_keys(rl: &RaylibHandle) -> Vec<InputEvent> {
    let bindings = [
        (KeyboardKey::KEY_RIGHT, InputEvent::Step(1)),
        (KeyboardKey::KEY_LEFT, InputEvent::Step(-1)),
        (KeyboardKey::KEY_HOME, InputEvent::Home),
        (KeyboardKey::KEY_R, InputEvent::Reset),
        (KeyboardKey::KEY_SPACE, InputEvent::ToggleAutoRotate),
    ];
    bindings
        .into_iter()
        .filter(|(key, _)| rl.is_key_pressed(*key))
        .map(|(_, event)| event)
        .collect()
}
