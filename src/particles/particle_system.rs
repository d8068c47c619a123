use rand::rngs::StdRng;

use crate::config::GardenConfig;
use crate::particles::{ChuteKinematics, LiquidLevels, Particle, ParticlePool, WaterEmitter};
use crate::scene::{DoorAnimation, SceneLayout};

/// Outcome of one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Particles that entered play
    pub admitted: usize,
    /// Particles that reached the basin
    pub landed: usize,
    /// Slots in play after the pass
    pub active: usize,
    /// Every slot was in play after the pass
    pub saturated: bool,
}

/// Water transfer from the reservoir, down the chute, into the basin
///
/// Owns every piece of mutable simulation state: the liquid levels, the
/// particle pool, the door and the random source used for admission.
pub struct WaterSimulation {
    pool: ParticlePool,
    levels: LiquidLevels,
    door: DoorAnimation,
    emitter: WaterEmitter,
    layout: SceneLayout,
    gravity: f32,
    rng: StdRng,
    active: usize,
    saturated: bool,
}

impl WaterSimulation {
    pub fn new(config: &GardenConfig, layout: SceneLayout, rng: StdRng) -> Self {
        let emitter = WaterEmitter::new(&config.water, &config.door, &layout);
        Self {
            pool: ParticlePool::new(config.water.capacity),
            levels: LiquidLevels::new(config.water.initial_level, config.water.particle_volume),
            door: DoorAnimation::new(&config.door),
            emitter,
            layout,
            gravity: config.water.gravity,
            rng,
            active: 0,
            saturated: false,
        }
    }

    /// Advance every particle by `elapsed` seconds and admit new ones
    ///
    /// Slots are visited once each, in order. A particle that lands frees
    /// its slot for immediate reuse within the same pass. Negative or
    /// non-finite elapsed time is treated as zero.
    pub fn tick(&mut self, elapsed: f32) -> TickReport {
        let dt = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

        let Self {
            pool,
            levels,
            door,
            emitter,
            layout,
            gravity,
            rng,
            ..
        } = self;

        let aperture = door.aperture();
        let budget = emitter.release_budget(dt, levels, aperture);
        let kinematics =
            ChuteKinematics::for_tick(&layout.chute, *gravity, layout.landing_height(), dt);

        let mut report = TickReport::default();
        for particle in pool.slots_mut() {
            if particle.active {
                if !kinematics.is_falling(particle) {
                    kinematics.slide(particle);
                    continue;
                }
                if !kinematics.fall(particle) {
                    continue;
                }
                levels.credit_basin();
                report.landed += 1;
                if emitter.can_admit(levels, report.admitted, budget) {
                    emitter.admit(particle, levels, aperture, rng);
                    report.admitted += 1;
                } else {
                    particle.deactivate();
                }
            } else if emitter.can_admit(levels, report.admitted, budget) {
                emitter.admit(particle, levels, aperture, rng);
                report.admitted += 1;
            }
        }

        report.active = pool.active_count();
        report.saturated = report.active == pool.capacity();
        self.active = report.active;
        self.note_saturation(report.saturated);
        report
    }

    fn note_saturation(&mut self, saturated: bool) {
        if saturated && !self.saturated {
            log::warn!(
                "Maximum number of particles reached ({})",
                self.pool.capacity()
            );
        } else if !saturated && self.saturated {
            log::debug!("Particle pool no longer saturated");
        }
        self.saturated = saturated;
    }

    pub fn levels(&self) -> &LiquidLevels {
        &self.levels
    }

    pub fn reservoir_level(&self) -> f32 {
        self.levels.reservoir() as f32
    }

    pub fn basin_level(&self) -> f32 {
        self.levels.basin() as f32
    }

    pub fn door(&self) -> &DoorAnimation {
        &self.door
    }

    pub fn door_mut(&mut self) -> &mut DoorAnimation {
        &mut self.door
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Active particles as of the last tick
    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.pool.iter_active()
    }

    /// Reservoir, basin and in-flight liquid combined
    pub fn total_volume(&self) -> f64 {
        self.levels.total(self.pool.active_count())
    }

    /// Water above the sill remains to be released
    pub fn has_head(&self) -> bool {
        self.levels.is_above(self.emitter.sill())
    }

    /// Whether there is anything left for a tick to do
    pub fn is_idle(&self) -> bool {
        self.door.aperture() <= 0.0 || (!self.has_head() && self.active == 0)
    }

    /// Nothing left above the sill and nothing in flight
    pub fn is_drained(&self) -> bool {
        !self.has_head() && self.active == 0
    }
}
