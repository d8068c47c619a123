use glam::Vec3;
use rand::Rng;

use crate::config::{DoorConfig, WaterConfig};
use crate::particles::{LiquidLevels, Particle};
use crate::scene::SceneLayout;

/// Releases water through the door as particles
///
/// Two regimes govern the opening the water flows through. While the head
/// above the sill exceeds the regime threshold the door aperture limits the
/// flow; below it the lower of the head and the aperture does.
#[derive(Debug, Clone)]
pub struct WaterEmitter {
    /// Particles per second through a fully open door
    release_rate: f32,
    full_aperture: f32,
    min_release_aperture: f32,
    regime_threshold: f32,
    start_velocity: f32,
    diameter: f32,
    sill: f32,
    door_left: f32,
    door_width: f32,
    door_depth: f32,
    slope: Vec3,
}

impl WaterEmitter {
    pub fn new(water: &WaterConfig, door: &DoorConfig, layout: &SceneLayout) -> Self {
        Self {
            release_rate: water.release_rate,
            full_aperture: door.max_aperture,
            min_release_aperture: door.min_release_aperture,
            regime_threshold: water.release_regime_threshold,
            start_velocity: water.start_velocity,
            diameter: layout.particle_diameter,
            sill: layout.sill_height(),
            door_left: layout.door_frame[0].x,
            door_width: layout.door_width(),
            door_depth: layout.door_depth(),
            slope: layout.chute.slope_direction(),
        }
    }

    pub fn sill(&self) -> f32 {
        self.sill
    }

    /// Height of the opening water currently flows through
    fn flow_opening(&self, head: f32, aperture: f32) -> f32 {
        if head > self.regime_threshold {
            aperture
        } else {
            head.min(aperture)
        }
    }

    /// Whether the door lets anything through at `aperture`
    pub fn is_releasing(&self, aperture: f32) -> bool {
        aperture > self.min_release_aperture
    }

    /// Maximum particles admitted over `elapsed` seconds
    pub fn release_budget(&self, elapsed: f32, levels: &LiquidLevels, aperture: f32) -> f32 {
        if !self.is_releasing(aperture) {
            return 0.0;
        }
        let head = levels.head_above(self.sill);
        let opening = self.flow_opening(head, aperture);
        (elapsed * self.release_rate * opening / self.full_aperture).max(0.0)
    }

    /// Whether another particle may enter play this tick
    pub fn can_admit(&self, levels: &LiquidLevels, admitted: usize, budget: f32) -> bool {
        levels.is_above(self.sill) && (admitted as f32) < budget
    }

    /// Place `particle` in the door opening and debit the reservoir
    ///
    /// The particle starts at a random point across the door width and up
    /// the flow opening, heading down the chute with a speed scaled by the
    /// current head.
    pub fn admit<R: Rng + ?Sized>(
        &self,
        particle: &mut Particle,
        levels: &mut LiquidLevels,
        aperture: f32,
        rng: &mut R,
    ) {
        let head = levels.head_above(self.sill);
        let opening = self.flow_opening(head, aperture);

        let position = Vec3::new(
            self.door_left + self.diameter / 2.0 + rng.gen::<f32>() * (self.door_width - self.diameter),
            self.sill + self.diameter + rng.gen::<f32>() * (opening - self.diameter),
            self.door_depth,
        );
        let speed = (self.start_velocity + rng.gen::<f32>() * self.start_velocity) * head;

        particle.activate(position, self.slope * speed);
        levels.debit_reservoir();
    }
}
