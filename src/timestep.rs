//! Fixed-timestep accumulator decoupling simulation rate from frame rate.

/// Accumulates real frame time and pays it out in fixed simulation steps.
pub struct FixedTimestep {
    step: f32,
    lag: f32,
}

impl FixedTimestep {
    /// A timer stepping the simulation every `step` seconds.
    pub fn new(step: f32) -> Self {
        Self { step, lag: 0.0 }
    }

    /// The fixed step length in seconds.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add one frame's elapsed time and return how many fixed updates
    /// are now owed.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.lag += frame_dt;
        let mut steps = 0;
        while self.lag >= self.step {
            self.lag -= self.step;
            steps += 1;
        }
        steps
    }
}
