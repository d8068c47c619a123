//! Frame orchestration
//!
//! A frame advances the door, ticks the water, then draws. The plant is
//! sized from the basin level after the tick, never before it.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GardenConfig;
use crate::error::GardenResult;
use crate::growth::{render_growth, BranchFrame, GrowthStats};
use crate::particles::{TickReport, WaterSimulation};
use crate::renderer::GeometrySink;
use crate::scene::{fixtures, SceneLayout};
use crate::terrain::TerrainMesh;

/// What one frame did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// `None` when the simulation was idle and skipped
    pub tick: Option<TickReport>,
    pub growth: GrowthStats,
}

/// The whole scene: container, chute, tray, soil, water and plant
pub struct Garden {
    config: GardenConfig,
    water: WaterSimulation,
    soil: TerrainMesh,
    drained_reported: bool,
}

impl Garden {
    /// Build a garden seeded from the configuration, or from the clock
    pub fn new(config: GardenConfig) -> GardenResult<Self> {
        let seed = config.seed.unwrap_or_else(time_seed);
        log::info!("Garden seed {seed}");
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Build a garden drawing all randomness from `rng`
    pub fn with_rng(config: GardenConfig, mut rng: StdRng) -> GardenResult<Self> {
        config.validate()?;
        let layout = SceneLayout::new(&config.scene, &config.water);
        let soil = TerrainMesh::build(&config.soil, &layout, &mut rng);
        let water_rng = StdRng::seed_from_u64(rng.gen());
        let water = WaterSimulation::new(&config, layout, water_rng);
        log::info!(
            "Garden ready: {} particle slots, {} soil triangles",
            water.capacity(),
            soil.triangle_count()
        );
        Ok(Self {
            config,
            water,
            soil,
            drained_reported: false,
        })
    }

    /// Start opening the door
    pub fn open_door(&mut self) {
        self.water.door_mut().trigger();
    }

    /// Advance the door and, unless there is nothing to do, the water
    ///
    /// `elapsed` is clamped to `[0, max_frame_seconds]`.
    pub fn update(&mut self, elapsed: f32) -> Option<TickReport> {
        let dt = self.clamp_elapsed(elapsed);
        self.water.door_mut().advance(dt);
        if self.water.is_idle() {
            return None;
        }

        let report = self.water.tick(dt);
        log::debug!(
            "tick: +{} -{} active {} reservoir {:.4} basin {:.4}",
            report.admitted,
            report.landed,
            report.active,
            self.water.reservoir_level(),
            self.water.basin_level()
        );
        if self.water.is_drained() && !self.drained_reported {
            log::info!(
                "Reservoir drained; basin level {:.3}",
                self.water.basin_level()
            );
            self.drained_reported = true;
        }
        Some(report)
    }

    fn clamp_elapsed(&self, elapsed: f32) -> f32 {
        if elapsed.is_finite() {
            elapsed.clamp(0.0, self.config.frame.max_frame_seconds)
        } else {
            0.0
        }
    }

    /// Draw the current state; returns what the plant pass emitted
    pub fn render(&self, sink: &mut dyn GeometrySink) -> GrowthStats {
        let layout = self.water.layout();
        fixtures::draw_container(layout, sink);
        fixtures::draw_door(layout, self.water.door().aperture(), sink);
        fixtures::draw_chute(layout, sink);
        fixtures::draw_tray(layout, sink);
        self.soil.draw(sink);

        let growth = render_growth(
            self.growth_height(),
            self.config.growth.branch_trigger,
            BranchFrame::upright(self.plant_root()),
            sink,
        );

        fixtures::draw_reservoir_water(layout, self.water.reservoir_level(), sink);
        fixtures::draw_basin_water(layout, self.water.basin_level(), sink);
        fixtures::draw_particles(self.water.particles(), sink);
        growth
    }

    /// Update then render
    pub fn frame(&mut self, elapsed: f32, sink: &mut dyn GeometrySink) -> FrameOutcome {
        let tick = self.update(elapsed);
        let growth = self.render(sink);
        FrameOutcome { tick, growth }
    }

    /// Plant height for the current basin level
    pub fn growth_height(&self) -> f32 {
        self.water.basin_level() * self.config.growth.scale
    }

    fn plant_root(&self) -> Vec3 {
        let centre = self.water.layout().tray_center;
        Vec3::new(centre.x, self.config.soil.base_height, centre.z)
    }

    pub fn water(&self) -> &WaterSimulation {
        &self.water
    }

    pub fn soil(&self) -> &TerrainMesh {
        &self.soil
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    /// Reservoir below the sill and nothing left in flight
    pub fn is_finished(&self) -> bool {
        self.water.is_drained()
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
