use crate::constants::*;

/// Release velocity that keeps rotating the sequence while it decays.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MomentumState {
    magnitude: f64,
}

/// Outcome of one momentum tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MomentumStep {
    /// Advance by this many frames (may be zero) and tick again next frame.
    Continue(f64),
    /// Magnitude fell under the threshold; momentum is cleared.
    Settled,
}

impl MomentumState {
    /// Whether a release velocity is large enough to start momentum.
    pub fn qualifies(velocity: f64) -> bool {
        velocity.abs() > MOMENTUM_THRESHOLD
    }

    pub fn start(&mut self, velocity: f64) {
        self.magnitude = velocity;
    }

    pub fn clear(&mut self) {
        self.magnitude = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.magnitude != 0.0
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn tick(&mut self) -> MomentumStep {
        if self.magnitude.is_nan() || self.magnitude.abs() < MOMENTUM_THRESHOLD {
            self.magnitude = 0.0;
            return MomentumStep::Settled;
        }
        let frame_delta = (self.magnitude * MOMENTUM_FRAME_GAIN).round();
        self.magnitude *= MOMENTUM_DECAY;
        MomentumStep::Continue(frame_delta)
    }
}
