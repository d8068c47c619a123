//! Water particles
//!
//! Water leaves the reservoir as discrete particles of fixed volume, slides
//! down the chute, falls off its end and lands in the basin.

pub mod emitter;
pub mod levels;
pub mod particle;
pub mod particle_data;
pub mod particle_system;
pub mod physics;

pub use emitter::WaterEmitter;
pub use levels::LiquidLevels;
pub use particle::Particle;
pub use particle_data::ParticlePool;
pub use particle_system::{TickReport, WaterSimulation};
pub use physics::ChuteKinematics;
