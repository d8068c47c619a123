use glam::Vec3;

/// One slot of the water particle pool
///
/// Inactive slots keep their last position and velocity; only `active`
/// decides whether the slot takes part in motion and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub active: bool,
}

impl Particle {
    pub const INACTIVE: Self = Self {
        position: Vec3::ZERO,
        velocity: Vec3::ZERO,
        active: false,
    };

    /// Put the slot into play at `position` moving with `velocity`
    pub fn activate(&mut self, position: Vec3, velocity: Vec3) {
        self.position = position;
        self.velocity = velocity;
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::INACTIVE
    }
}
