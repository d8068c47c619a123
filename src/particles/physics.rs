use crate::particles::Particle;
use crate::scene::ChuteGeometry;

/// Per-tick motion rules for particles on and beyond the chute
///
/// Velocity increments are precomputed for one tick so every particle in
/// the pass sees the same step.
#[derive(Debug, Clone, Copy)]
pub struct ChuteKinematics {
    end_depth: f32,
    landing_height: f32,
    dt: f32,
    gravity_step: f32,
    slope_vertical_step: f32,
    slope_horizontal_step: f32,
}

impl ChuteKinematics {
    pub fn for_tick(chute: &ChuteGeometry, gravity: f32, landing_height: f32, dt: f32) -> Self {
        let acceleration = chute.slope_acceleration(gravity);
        Self {
            end_depth: chute.end_depth,
            landing_height,
            dt,
            gravity_step: gravity * dt,
            slope_vertical_step: dt * acceleration * chute.drop / chute.magnitude,
            slope_horizontal_step: dt * acceleration * chute.length / chute.magnitude,
        }
    }

    /// At or beyond the chute exit
    pub fn is_falling(&self, particle: &Particle) -> bool {
        particle.position.z >= self.end_depth
    }

    /// Slide down the chute: move, then accelerate along the slope
    pub fn slide(&self, particle: &mut Particle) {
        particle.position += particle.velocity * self.dt;
        particle.velocity.z += self.slope_horizontal_step;
        particle.velocity.y -= self.slope_vertical_step;
    }

    /// Fall freely under gravity; returns true once the particle has landed
    pub fn fall(&self, particle: &mut Particle) -> bool {
        particle.velocity.y -= self.gravity_step;
        particle.position += particle.velocity * self.dt;
        particle.position.y <= self.landing_height
    }
}
