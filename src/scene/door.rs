use crate::config::DoorConfig;

/// Phase of the door animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Opening,
    Open,
}

/// Sliding door in the container wall
///
/// Once triggered the door rises by a fixed step at a fixed interval, the
/// first step applying immediately, until it reaches its full aperture and
/// stays there.
#[derive(Debug, Clone)]
pub struct DoorAnimation {
    max_aperture: f32,
    step: f32,
    step_interval: f32,
    steps_taken: u32,
    until_next_step: f32,
    state: DoorState,
}

impl DoorAnimation {
    pub fn new(config: &DoorConfig) -> Self {
        Self {
            max_aperture: config.max_aperture,
            step: config.step,
            step_interval: config.step_interval,
            steps_taken: 0,
            until_next_step: 0.0,
            state: DoorState::Closed,
        }
    }

    /// Door that starts fully open
    pub fn opened(config: &DoorConfig) -> Self {
        let mut door = Self::new(config);
        door.open_fully();
        door
    }

    /// Start opening; repeated triggers have no further effect
    pub fn trigger(&mut self) {
        if self.state == DoorState::Closed {
            log::info!("Opening door");
            self.state = DoorState::Opening;
            self.until_next_step = 0.0;
        }
    }

    /// Skip the animation
    pub fn open_fully(&mut self) {
        self.steps_taken = (self.max_aperture / self.step).ceil() as u32;
        self.state = DoorState::Open;
    }

    /// Advance the animation by `elapsed` seconds
    pub fn advance(&mut self, elapsed: f32) {
        if self.state != DoorState::Opening {
            return;
        }
        self.until_next_step -= elapsed.max(0.0);
        while self.state == DoorState::Opening && self.until_next_step <= 0.0 {
            self.steps_taken += 1;
            self.until_next_step += self.step_interval;
            if self.aperture() >= self.max_aperture {
                self.state = DoorState::Open;
                log::info!("Door fully open");
            }
        }
    }

    /// Current opening, in `[0, max_aperture]`
    pub fn aperture(&self) -> f32 {
        (self.steps_taken as f32 * self.step).min(self.max_aperture)
    }

    pub fn max_aperture(&self) -> f32 {
        self.max_aperture
    }

    pub fn state(&self) -> DoorState {
        self.state
    }
}
