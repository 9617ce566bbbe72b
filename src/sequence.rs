use crate::error::ConfigError;

/// Circular index into a fixed-length, pre-ordered image sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frame_count: usize,
    current: usize,
}

impl FrameSequence {
    pub fn new(frame_count: usize, initial: usize) -> Result<Self, ConfigError> {
        if frame_count < 1 {
            return Err(ConfigError::EmptySequence);
        }
        if initial >= frame_count {
            return Err(ConfigError::InitialFrameOutOfRange { initial, frame_count });
        }
        Ok(Self { frame_count, current: initial })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves by a signed, already rounded frame delta, wrapping in both directions.
    ///
    /// Returns `false` for a zero or non-finite delta, in which case nothing changes.
    pub fn advance(&mut self, delta: f64) -> bool {
        if !delta.is_finite() || delta == 0.0 {
            return false;
        }
        // rem_euclid keeps huge or negative deltas inside [0, frame_count)
        let steps = delta.rem_euclid(self.frame_count as f64) as usize % self.frame_count;
        self.current = (self.current + steps) % self.frame_count;
        true
    }

    /// Jumps straight to `index`. Out-of-range requests are dropped.
    pub fn set(&mut self, index: usize) -> bool {
        if index >= self.frame_count {
            return false;
        }
        self.current = index;
        true
    }
}
