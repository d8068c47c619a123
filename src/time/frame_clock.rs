use std::time::Instant;

/// Source of elapsed time between frames
pub trait FrameClock {
    /// Seconds since the previous call; never negative
    fn elapsed_seconds(&mut self) -> f32;
}

/// Wall-clock frame timer
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn elapsed_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }
}

/// Clock that advances by a constant step every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step: f32,
    frames: u64,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            frames: 0,
        }
    }

    /// Simulated seconds since the clock was created
    pub fn total_seconds(&self) -> f64 {
        self.frames as f64 * self.step as f64
    }
}

impl FrameClock for FixedClock {
    fn elapsed_seconds(&mut self) -> f32 {
        self.frames += 1;
        self.step
    }
}
