//! Per-entity pulse animator.
//!
//! Drives the gentle "breathing" of the bounding box drawn under each actor.

/// Time accumulator producing a sinusoidal scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    /// Accumulated phase
    pub t: f32,
    /// Phase advance per second
    pub rate: f32,
    /// Peak deviation from a scale of 1.0
    pub amplitude: f32,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            t: 0.0,
            rate: 5.0,
            amplitude: 0.05,
        }
    }
}

impl Animator {
    pub fn new(rate: f32, amplitude: f32) -> Self {
        Self {
            rate,
            amplitude,
            ..Default::default()
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.t += dt * self.rate;
    }

    /// Scale factor oscillating around 1.0.
    pub fn pulse_scale(&self) -> f32 {
        1.0 + self.amplitude * self.t.sin()
    }
}
