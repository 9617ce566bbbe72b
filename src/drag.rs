/// One tracked contact point, alive between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    origin_x: f64,
    velocity: f64,
}

impl DragSession {
    pub fn begin(x: f64) -> Self {
        Self { origin_x: x, velocity: 0.0 }
    }

    /// Records a new sample and returns the horizontal displacement since the previous one.
    ///
    /// The origin always moves to `x`, so each sample is measured from the last.
    pub fn sample(&mut self, x: f64, velocity_scale: f64) -> f64 {
        let delta_x = x - self.origin_x;
        self.velocity = delta_x * velocity_scale;
        self.origin_x = x;
        delta_x
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}
