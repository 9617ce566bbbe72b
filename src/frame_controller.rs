//! Drag, momentum and auto-rotate control over a circular frame sequence.
//!
//! The controller never draws. Every accepted frame change is pushed to a
//! [`FrameRenderer`] synchronously, and the host drives the two scheduled
//! loops (momentum and auto-rotate) by calling [`FrameController::update`]
//! once per display frame.

use std::time::Duration;

use tracing::{debug, trace};

use crate::auto_rotate::AutoRotateTimer;
use crate::config::ViewerConfig;
use crate::drag::DragSession;
use crate::error::ConfigError;
use crate::momentum::{MomentumState, MomentumStep};
use crate::renderer::FrameRenderer;
use crate::sequence::FrameSequence;
use crate::state::ViewerState;

#[derive(Debug)]
pub struct FrameController<R: FrameRenderer> {
    config: ViewerConfig,
    sequence: FrameSequence,
    drag: Option<DragSession>,
    // Last drag velocity, kept after release for inspection
    velocity: f64,
    momentum: MomentumState,
    timer: AutoRotateTimer,
    disposed: bool,
    renderer: R,
}

impl<R: FrameRenderer> FrameController<R> {
    pub fn new(config: ViewerConfig, renderer: R) -> Result<Self, ConfigError> {
        let sequence = FrameSequence::new(config.frame_count, config.initial_frame)?;
        let timer = AutoRotateTimer::new(config.auto_rotate_period()?);

        let mut controller = Self {
            config,
            sequence,
            drag: None,
            velocity: 0.0,
            momentum: MomentumState::default(),
            timer,
            disposed: false,
            renderer,
        };
        if controller.config.auto_rotate {
            controller.timer.start();
        }
        debug!(
            frame_count = controller.sequence.frame_count(),
            period_ms = controller.timer.period().as_millis() as u64,
            profile = ?controller.config.input_profile,
            auto_rotate = controller.config.auto_rotate,
            "frame controller ready"
        );
        Ok(controller)
    }

    pub fn current_frame(&self) -> usize {
        self.sequence.current()
    }

    pub fn frame_count(&self) -> usize {
        self.sequence.frame_count()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn velocity(&self) -> f64 {
        self.drag.map_or(self.velocity, |drag| drag.velocity())
    }

    pub fn momentum(&self) -> f64 {
        self.momentum.magnitude()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Which source currently owns the frame.
    pub fn state(&self) -> ViewerState {
        if self.drag.is_some() {
            ViewerState::Dragging
        } else if self.momentum.is_active() {
            ViewerState::Momentum
        } else if self.timer.is_running() {
            ViewerState::AutoRotating
        } else {
            ViewerState::Idle
        }
    }

    /// Press start. Cancels auto-rotation and momentum and tracks a new contact.
    pub fn begin_drag(&mut self, x: f64) {
        if self.disposed || !x.is_finite() {
            return;
        }
        self.timer.stop();
        self.momentum.clear();
        self.velocity = 0.0;
        self.drag = Some(DragSession::begin(x));
        debug!(x, "drag started");
    }

    /// Move sample of the active contact.
    pub fn continue_drag(&mut self, x: f64) {
        if self.disposed || !x.is_finite() {
            return;
        }
        let profile = self.config.input_profile;
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta_x = drag.sample(x, profile.velocity_scale());
        let frame_delta = (delta_x * profile.sensitivity()).round();
        self.advance(frame_delta);
    }

    /// Release or cancel. Hands over to momentum, then to auto-rotate, then to idle.
    pub fn end_drag(&mut self) {
        if self.disposed {
            return;
        }
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.velocity = drag.velocity();

        if self.config.enable_momentum && MomentumState::qualifies(self.velocity) {
            self.momentum.start(self.velocity);
            debug!(velocity = self.velocity, "drag released into momentum");
            // First step runs on release, the rest follow once per display frame
            self.tick_momentum();
        } else if self.config.auto_rotate {
            self.timer.start();
            debug!("drag released, auto-rotate resumed");
        } else {
            debug!("drag released");
        }
    }

    /// One animation frame of momentum. Returns whether another tick is needed.
    pub fn tick_momentum(&mut self) -> bool {
        if self.disposed || !self.momentum.is_active() {
            return false;
        }
        match self.momentum.tick() {
            MomentumStep::Continue(frame_delta) => {
                self.advance(frame_delta);
                true
            }
            MomentumStep::Settled => {
                // Auto-rotate deliberately stays off after momentum
                debug!(frame = self.current_frame(), "momentum settled");
                false
            }
        }
    }

    /// One auto-rotate period elapsed. Ignored while a drag or momentum owns the frame.
    pub fn tick_auto_rotate(&mut self) {
        if self.disposed || self.drag.is_some() || self.momentum.is_active() {
            return;
        }
        self.advance(1.0);
    }

    /// Jumps to `index`. Negative or out-of-range indices are ignored.
    pub fn go_to_frame<I: TryInto<usize>>(&mut self, index: I) {
        if self.disposed {
            return;
        }
        let Ok(index) = TryInto::<usize>::try_into(index) else {
            return;
        };
        if self.sequence.set(index) {
            self.present();
        }
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        if self.disposed {
            return;
        }
        self.config.auto_rotate = enabled;
        if enabled {
            self.timer.start();
        } else {
            self.timer.stop();
        }
        debug!(enabled, "auto-rotate toggled");
    }

    /// Back to frame 0, restarting auto-rotation from a full period if it is configured.
    pub fn reset(&mut self) {
        if self.disposed {
            return;
        }
        self.sequence.set(0);
        self.present();
        self.timer.stop();
        if self.config.auto_rotate {
            self.timer.start();
        }
    }

    /// Drives the scheduled loops: one momentum tick, then at most one auto-rotate tick.
    ///
    /// Auto-rotate periods missed during a long frame are dropped, not replayed.
    pub fn update(&mut self, dt: Duration) {
        if self.disposed {
            return;
        }
        self.tick_momentum();
        if self.timer.advance(dt) {
            self.tick_auto_rotate();
        }
    }

    /// Teardown. Nothing ticks or signals afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.timer.stop();
        self.momentum.clear();
        self.drag = None;
        self.disposed = true;
        debug!("frame controller disposed");
    }

    fn advance(&mut self, frame_delta: f64) {
        if self.sequence.advance(frame_delta) {
            self.present();
        }
    }

    fn present(&mut self) {
        let frame = self.sequence.current();
        trace!(frame, "present");
        self.renderer.present(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputProfile;
    use crate::renderer::NullRenderer;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Signals = Rc<RefCell<Vec<usize>>>;

    fn recording(config: ViewerConfig) -> (FrameController<impl FrameRenderer>, Signals) {
        let signals: Signals = Rc::default();
        let sink = signals.clone();
        let controller = FrameController::new(config, move |frame: usize| sink.borrow_mut().push(frame)).unwrap();
        (controller, signals)
    }

    fn thirteen() -> ViewerConfig {
        ViewerConfig::new(13)
    }

    #[test]
    fn rejects_empty_sequence() {
        let err = FrameController::new(ViewerConfig::new(0), NullRenderer).unwrap_err();
        assert_eq!(err, ConfigError::EmptySequence);
    }

    #[test]
    fn rejects_bad_rotation_speed() {
        let err = FrameController::new(thirteen().with_rotation_speed(0.0), NullRenderer).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRotationSpeed(0.0));
    }

    #[test]
    fn drag_of_100_pixels_lands_on_frame_12() {
        let (mut viewer, signals) = recording(thirteen());
        viewer.begin_drag(0.0);
        assert!(signals.borrow().is_empty());
        viewer.continue_drag(100.0);
        assert_eq!(viewer.current_frame(), 12);
        assert_eq!(*signals.borrow(), vec![12]);
        assert!((viewer.velocity() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn touch_profile_uses_coarser_constants() {
        let (mut viewer, _) = recording(thirteen().with_input_profile(InputProfile::Touch));
        viewer.begin_drag(0.0);
        viewer.continue_drag(20.0);
        assert_eq!(viewer.current_frame(), 3);
        assert!((viewer.velocity() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn each_sample_is_measured_from_the_previous_one() {
        let (mut viewer, signals) = recording(thirteen());
        viewer.begin_drag(0.0);
        viewer.continue_drag(1.0); // 0.25 rounds to 0, origin still moves
        viewer.continue_drag(2.0);
        viewer.continue_drag(3.0);
        assert_eq!(viewer.current_frame(), 0);
        assert!(signals.borrow().is_empty());
        viewer.continue_drag(7.0); // 4 * 0.25 = 1
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn dragging_left_wraps_backward() {
        let (mut viewer, _) = recording(thirteen());
        viewer.begin_drag(100.0);
        viewer.continue_drag(96.0);
        assert_eq!(viewer.current_frame(), 12);
    }

    #[test]
    fn continue_without_begin_is_ignored() {
        let (mut viewer, signals) = recording(thirteen());
        viewer.continue_drag(100.0);
        viewer.end_drag();
        assert_eq!(viewer.current_frame(), 0);
        assert!(signals.borrow().is_empty());
        assert_eq!(viewer.state(), ViewerState::Idle);
    }

    #[test]
    fn nan_coordinates_are_absorbed() {
        let (mut viewer, signals) = recording(thirteen());
        viewer.begin_drag(f64::NAN);
        assert!(!viewer.is_dragging());
        viewer.begin_drag(10.0);
        viewer.continue_drag(f64::NAN);
        viewer.continue_drag(f64::INFINITY);
        assert_eq!(viewer.current_frame(), 0);
        assert!(signals.borrow().is_empty());
        viewer.continue_drag(14.0);
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn release_with_velocity_starts_momentum() {
        let (mut viewer, signals) = recording(thirteen());
        viewer.begin_drag(0.0);
        viewer.continue_drag(20.0);
        assert_eq!(viewer.current_frame(), 5);

        // The first momentum step lands on release, before any update
        viewer.end_drag();
        assert_eq!(viewer.state(), ViewerState::Momentum);
        assert_eq!(viewer.current_frame(), 7);
        assert!((viewer.momentum() - 0.19).abs() < 1e-12);

        assert!(viewer.tick_momentum());
        assert_eq!(viewer.current_frame(), 9);
        assert_eq!(*signals.borrow(), vec![5, 7, 9]);
    }

    #[test]
    fn momentum_runs_to_completion_and_stays_idle() {
        let (mut viewer, _) = recording(thirteen().with_auto_rotate(true));
        viewer.begin_drag(0.0);
        viewer.continue_drag(100.0);
        viewer.end_drag();
        // The tick run on release plus the settling one
        let mut ticks = 2;
        while viewer.tick_momentum() {
            ticks += 1;
            assert!(ticks < 1_000);
        }
        assert!((130..=140).contains(&ticks), "settled after {ticks} ticks");
        assert_eq!(viewer.momentum(), 0.0);
        // Auto-rotate is not resumed after momentum
        assert_eq!(viewer.state(), ViewerState::Idle);
    }

    #[test]
    fn release_at_rest_resumes_auto_rotate() {
        let (mut viewer, _) = recording(thirteen().with_auto_rotate(true));
        assert_eq!(viewer.state(), ViewerState::AutoRotating);
        viewer.begin_drag(5.0);
        assert_eq!(viewer.state(), ViewerState::Dragging);
        viewer.end_drag();
        assert_eq!(viewer.state(), ViewerState::AutoRotating);
    }

    #[test]
    fn release_without_momentum_flag_resumes_auto_rotate() {
        let config = thirteen().with_auto_rotate(true).with_momentum(false);
        let (mut viewer, _) = recording(config);
        viewer.begin_drag(0.0);
        viewer.continue_drag(50.0);
        viewer.end_drag();
        assert_eq!(viewer.momentum(), 0.0);
        assert_eq!(viewer.state(), ViewerState::AutoRotating);
    }

    #[test]
    fn release_at_rest_without_auto_rotate_is_idle() {
        let (mut viewer, _) = recording(thirteen());
        viewer.begin_drag(5.0);
        viewer.end_drag();
        assert_eq!(viewer.state(), ViewerState::Idle);
    }

    #[test]
    fn begin_drag_cancels_momentum() {
        let (mut viewer, _) = recording(thirteen());
        viewer.begin_drag(0.0);
        viewer.continue_drag(40.0);
        viewer.end_drag();
        viewer.begin_drag(40.0);
        assert_eq!(viewer.momentum(), 0.0);
        assert_eq!(viewer.velocity(), 0.0);
        let frame = viewer.current_frame();
        assert!(!viewer.tick_momentum());
        assert_eq!(viewer.current_frame(), frame);
    }

    #[test]
    fn drag_blocks_auto_rotate_ticks() {
        let (mut viewer, signals) = recording(thirteen().with_auto_rotate(true));
        viewer.begin_drag(0.0);
        viewer.set_auto_rotate(true);
        viewer.tick_auto_rotate();
        viewer.update(Duration::from_secs(10));
        assert_eq!(viewer.current_frame(), 0);
        assert!(signals.borrow().is_empty());

        viewer.end_drag();
        viewer.tick_auto_rotate();
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn momentum_blocks_auto_rotate_ticks() {
        let (mut viewer, _) = recording(thirteen());
        viewer.begin_drag(0.0);
        viewer.continue_drag(8.0);
        viewer.end_drag();
        viewer.set_auto_rotate(true);
        let frame = viewer.current_frame();
        viewer.tick_auto_rotate();
        assert_eq!(viewer.current_frame(), frame);
        assert_eq!(viewer.state(), ViewerState::Momentum);
    }

    #[test]
    fn update_fires_auto_rotate_once_per_period() {
        let config = thirteen().with_auto_rotate(true).with_rotation_speed(2.0);
        let (mut viewer, signals) = recording(config);
        viewer.update(Duration::from_millis(400));
        assert_eq!(viewer.current_frame(), 0);
        viewer.update(Duration::from_millis(100));
        assert_eq!(viewer.current_frame(), 1);
        viewer.update(Duration::from_millis(1000));
        assert_eq!(viewer.current_frame(), 2);
        assert_eq!(*signals.borrow(), vec![1, 2]);
    }

    #[test]
    fn long_frame_advances_auto_rotate_once() {
        let config = thirteen().with_auto_rotate(true).with_rotation_speed(1e8);
        let (mut viewer, signals) = recording(config);
        viewer.update(Duration::from_secs(5));
        assert_eq!(viewer.current_frame(), 1);
        viewer.update(Duration::from_secs(5));
        assert_eq!(*signals.borrow(), vec![1, 2]);
    }

    #[test]
    fn rejects_rotation_speed_with_zero_period() {
        let err = FrameController::new(thirteen().with_rotation_speed(1e12), NullRenderer).unwrap_err();
        assert_eq!(err, ConfigError::InvalidRotationSpeed(1e12));
    }

    #[test]
    fn auto_rotate_wraps_to_zero() {
        let (mut viewer, _) = recording(thirteen().with_initial_frame(12));
        viewer.tick_auto_rotate();
        assert_eq!(viewer.current_frame(), 0);
    }

    #[test]
    fn set_auto_rotate_toggles_the_timer() {
        let (mut viewer, _) = recording(thirteen());
        viewer.set_auto_rotate(true);
        assert!(viewer.config().auto_rotate);
        assert_eq!(viewer.state(), ViewerState::AutoRotating);
        viewer.set_auto_rotate(false);
        assert_eq!(viewer.state(), ViewerState::Idle);
        viewer.update(Duration::from_secs(60));
        assert_eq!(viewer.current_frame(), 0);
    }

    #[test]
    fn set_auto_rotate_leaves_a_drag_alone() {
        let (mut viewer, _) = recording(thirteen());
        viewer.begin_drag(0.0);
        viewer.set_auto_rotate(true);
        assert!(viewer.is_dragging());
        viewer.continue_drag(4.0);
        assert_eq!(viewer.current_frame(), 1);
    }

    #[test]
    fn go_to_frame_ignores_out_of_range() {
        let (mut viewer, signals) = recording(thirteen().with_initial_frame(4));
        viewer.go_to_frame(-1);
        viewer.go_to_frame(13usize);
        viewer.go_to_frame(i64::MAX);
        assert_eq!(viewer.current_frame(), 4);
        assert!(signals.borrow().is_empty());
    }

    #[test]
    fn go_to_frame_signals_every_call() {
        let (mut viewer, signals) = recording(thirteen());
        viewer.go_to_frame(7);
        viewer.go_to_frame(7);
        assert_eq!(viewer.current_frame(), 7);
        assert_eq!(*signals.borrow(), vec![7, 7]);
    }

    #[test]
    fn go_to_last_frame_then_step_forward_wraps() {
        let (mut viewer, _) = recording(thirteen());
        viewer.go_to_frame(12);
        viewer.begin_drag(0.0);
        viewer.continue_drag(4.0);
        assert_eq!(viewer.current_frame(), 0);
    }

    #[test]
    fn reset_returns_to_first_frame_and_restarts_timer() {
        let (mut viewer, signals) = recording(thirteen().with_auto_rotate(true).with_rotation_speed(1.0));
        viewer.update(Duration::from_millis(1500));
        assert_eq!(viewer.current_frame(), 1);
        viewer.reset();
        assert_eq!(viewer.current_frame(), 0);
        assert_eq!(viewer.state(), ViewerState::AutoRotating);
        // The half period accumulated before reset is discarded
        viewer.update(Duration::from_millis(600));
        assert_eq!(viewer.current_frame(), 0);
        assert_eq!(*signals.borrow(), vec![1, 0]);
    }

    #[test]
    fn dispose_silences_every_loop() {
        let (mut viewer, signals) = recording(thirteen().with_auto_rotate(true));
        viewer.begin_drag(0.0);
        viewer.continue_drag(40.0);
        viewer.end_drag();
        let frame = viewer.current_frame();
        let emitted = signals.borrow().len();

        viewer.dispose();
        assert!(viewer.is_disposed());
        assert!(!viewer.tick_momentum());
        viewer.tick_auto_rotate();
        viewer.update(Duration::from_secs(60));
        viewer.go_to_frame(3);
        viewer.reset();
        viewer.set_auto_rotate(true);
        viewer.begin_drag(0.0);
        viewer.continue_drag(100.0);

        assert_eq!(viewer.current_frame(), frame);
        assert_eq!(signals.borrow().len(), emitted);
        assert_eq!(viewer.state(), ViewerState::Idle);
    }

    #[test]
    fn single_frame_sequence_stays_on_zero() {
        let (mut viewer, signals) = recording(ViewerConfig::new(1).with_auto_rotate(true));
        viewer.begin_drag(0.0);
        viewer.continue_drag(100.0);
        viewer.end_drag();
        while viewer.tick_momentum() {}
        viewer.set_auto_rotate(true);
        viewer.tick_auto_rotate();
        assert_eq!(viewer.current_frame(), 0);
        assert!(signals.borrow().iter().all(|&frame| frame == 0));
    }
}
