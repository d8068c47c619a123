//! Runtime configuration
//!
//! Every value defaults to the matching entry in [`crate::constants`], so a
//! configuration file only needs to list what it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{invalid_config, GardenError, GardenErrorContext, GardenResult};
use crate::terrain::SubdivisionScheme;

/// Deepest soil subdivision accepted; each level multiplies the triangle count
pub const MAX_SOIL_DEPTH: u32 = 8;

/// Top-level garden configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Fixed random seed; wall-clock time is used when absent
    pub seed: Option<u64>,
    pub scene: SceneConfig,
    pub water: WaterConfig,
    pub door: DoorConfig,
    pub soil: SoilConfig,
    pub growth: GrowthConfig,
    pub frame: FrameConfig,
    pub textures: TextureConfig,
}

/// Scene dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub container_radius: f32,
    pub container_height: f32,
    pub door_height: f32,
    pub chute_length: f32,
    pub chute_exit_height: f32,
    pub tray_size: f32,
    pub tray_wall_height: f32,
    pub basin_floor_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_radius: constants::scene::CONTAINER_RADIUS,
            container_height: constants::scene::CONTAINER_HEIGHT,
            door_height: constants::scene::DOOR_HEIGHT,
            chute_length: constants::scene::CHUTE_LENGTH,
            chute_exit_height: constants::scene::CHUTE_EXIT_HEIGHT,
            tray_size: constants::scene::TRAY_SIZE,
            tray_wall_height: constants::scene::TRAY_WALL_HEIGHT,
            basin_floor_height: constants::scene::BASIN_FLOOR_HEIGHT,
        }
    }
}

/// Water simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Number of particle slots; fixed for the lifetime of the simulation
    pub capacity: usize,
    /// Particles per second at full door opening
    pub release_rate: f32,
    pub particle_size: f32,
    pub particle_volume: f32,
    pub start_velocity: f32,
    pub gravity: f32,
    pub initial_level: f32,
    pub release_regime_threshold: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            capacity: constants::water::MAX_PARTICLES,
            release_rate: constants::water::RELEASE_RATE,
            particle_size: constants::water::PARTICLE_SIZE,
            particle_volume: constants::water::PARTICLE_VOLUME,
            start_velocity: constants::water::START_VELOCITY,
            gravity: constants::water::GRAVITY,
            initial_level: constants::water::INITIAL_RESERVOIR_LEVEL,
            release_regime_threshold: constants::water::RELEASE_REGIME_THRESHOLD,
        }
    }
}

impl WaterConfig {
    /// Physical diameter of a particle
    pub fn particle_diameter(&self) -> f32 {
        self.particle_size / constants::water::DIAMETER_DIVISOR
    }
}

/// Door animation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    pub max_aperture: f32,
    pub step: f32,
    pub step_interval: f32,
    pub min_release_aperture: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            max_aperture: constants::door::MAX_APERTURE,
            step: constants::door::APERTURE_STEP,
            step_interval: constants::door::STEP_INTERVAL,
            min_release_aperture: constants::door::MIN_RELEASE_APERTURE,
        }
    }
}

/// Soil terrain parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoilConfig {
    pub depth: u32,
    pub drift: f32,
    pub base_height: f32,
    pub scheme: SubdivisionScheme,
}

impl Default for SoilConfig {
    fn default() -> Self {
        Self {
            depth: constants::soil::SUBDIVISION_DEPTH,
            drift: constants::soil::SUBDIVISION_DRIFT,
            base_height: constants::soil::BASE_HEIGHT,
            scheme: SubdivisionScheme::default(),
        }
    }
}

/// Plant growth parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub scale: f32,
    pub branch_trigger: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            scale: constants::growth::GROWTH_SCALE,
            branch_trigger: constants::growth::BRANCH_TRIGGER,
        }
    }
}

/// Frame timing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub max_frame_seconds: f32,
    pub fixed_step: f32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_seconds: constants::frame::MAX_FRAME_SECONDS,
            fixed_step: constants::frame::FIXED_STEP,
        }
    }
}

/// Texture image locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub wood: Option<PathBuf>,
    pub soil: Option<PathBuf>,
}

impl GardenConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> GardenResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).io_context(path)?;
        let config = Self::from_toml(&raw).map_err(|e| match e {
            GardenError::ConfigParse { message, .. } => GardenError::ConfigParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(raw: &str) -> GardenResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| GardenError::ConfigParse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> GardenResult<String> {
        toml::to_string_pretty(self).map_err(|e| invalid_config("config", e))
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> GardenResult<()> {
        let scene = &self.scene;
        positive("scene.container_radius", scene.container_radius)?;
        positive("scene.container_height", scene.container_height)?;
        positive("scene.chute_length", scene.chute_length)?;
        positive("scene.tray_size", scene.tray_size)?;
        if scene.chute_exit_height > scene.door_height {
            return Err(invalid_config(
                "scene.chute_exit_height",
                "chute must not rise above the door sill",
            ));
        }

        let water = &self.water;
        if water.capacity == 0 {
            return Err(invalid_config("water.capacity", "must be at least one slot"));
        }
        positive("water.particle_volume", water.particle_volume)?;
        positive("water.particle_size", water.particle_size)?;
        positive("water.gravity", water.gravity)?;
        non_negative("water.release_rate", water.release_rate)?;
        non_negative("water.start_velocity", water.start_velocity)?;
        positive("water.release_regime_threshold", water.release_regime_threshold)?;
        if water.initial_level > scene.container_height {
            return Err(invalid_config(
                "water.initial_level",
                format!("exceeds container height {}", scene.container_height),
            ));
        }

        positive("door.max_aperture", self.door.max_aperture)?;
        positive("door.step", self.door.step)?;
        positive("door.step_interval", self.door.step_interval)?;
        non_negative("door.min_release_aperture", self.door.min_release_aperture)?;

        non_negative("soil.drift", self.soil.drift)?;
        if self.soil.depth > MAX_SOIL_DEPTH {
            return Err(invalid_config(
                "soil.depth",
                format!("must be at most {}", MAX_SOIL_DEPTH),
            ));
        }

        non_negative("growth.scale", self.growth.scale)?;
        positive("growth.branch_trigger", self.growth.branch_trigger)?;

        positive("frame.max_frame_seconds", self.frame.max_frame_seconds)?;
        positive("frame.fixed_step", self.frame.fixed_step)?;
        Ok(())
    }
}

fn positive(field: &str, value: f32) -> GardenResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_config(field, format!("must be positive, got {}", value)))
    }
}

fn non_negative(field: &str, value: f32) -> GardenResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid_config(field, format!("must not be negative, got {}", value)))
    }
}
