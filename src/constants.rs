// Reservoir Garden Constants - SINGLE SOURCE OF TRUTH
//
// Every default tuning value lives here. Configuration files override these
// at runtime, but nothing else in the crate hard-codes a scene dimension.

/// Scene dimensions (world units)
pub mod scene {
    /// Radius of the hexagonal container
    pub const CONTAINER_RADIUS: f32 = 5.0;
    /// Height of the container walls
    pub const CONTAINER_HEIGHT: f32 = 10.0;
    /// Height of the door sill above the ground
    pub const DOOR_HEIGHT: f32 = 2.5;
    /// Horizontal length of the chute
    pub const CHUTE_LENGTH: f32 = 10.0;
    /// Height of the chute where it meets the tray
    pub const CHUTE_EXIT_HEIGHT: f32 = 2.0;
    /// Length of the sides of the tray
    pub const TRAY_SIZE: f32 = 8.0;
    /// Height of the tray walls
    pub const TRAY_WALL_HEIGHT: f32 = 2.0;
    /// Height of the tray floor where particles land
    pub const BASIN_FLOOR_HEIGHT: f32 = 0.0;
}

/// Water simulation
pub mod water {
    /// Maximum number of live water particles
    pub const MAX_PARTICLES: usize = 20_000;
    /// Particles released per second with the door fully open
    pub const RELEASE_RATE: f32 = 2000.0;
    /// Point size of a rendered particle; the physical diameter is this / 25
    pub const PARTICLE_SIZE: f32 = 4.0;
    /// Liquid volume carried by one particle
    pub const PARTICLE_VOLUME: f32 = 0.0002;
    /// Base launch speed per unit of head
    pub const START_VELOCITY: f32 = 1.0;
    /// Gravitational acceleration
    pub const GRAVITY: f32 = 100.0;
    /// Reservoir level at startup (one unit below the container rim)
    pub const INITIAL_RESERVOIR_LEVEL: f32 = super::scene::CONTAINER_HEIGHT - 1.0;
    /// Head above which the release rate is limited by the door rather than the head
    pub const RELEASE_REGIME_THRESHOLD: f32 = 0.5;
    /// Ratio between the rendered point size and the physical diameter
    pub const DIAMETER_DIVISOR: f32 = 25.0;
}

/// Door animation
pub mod door {
    /// Fully open aperture
    pub const MAX_APERTURE: f32 = 0.5;
    /// Aperture gained per animation step
    pub const APERTURE_STEP: f32 = 0.05;
    /// Seconds between animation steps
    pub const STEP_INTERVAL: f32 = 0.5;
    /// Aperture that must be exceeded before any water is admitted
    pub const MIN_RELEASE_APERTURE: f32 = 0.0;
}

/// Soil terrain in the tray
pub mod soil {
    /// Recursion depth of the subdivision
    pub const SUBDIVISION_DEPTH: u32 = 5;
    /// Maximum vertical displacement of a new vertex
    pub const SUBDIVISION_DRIFT: f32 = 0.5;
    /// Height of the undisturbed soil surface
    pub const BASE_HEIGHT: f32 = 1.0;
}

/// Plant growth
pub mod growth {
    /// Plant height once all water above the sill has reached the basin
    pub const FULL_PLANT_HEIGHT: f32 = 10.0;
    /// Plant height per unit of basin level
    pub const GROWTH_SCALE: f32 = FULL_PLANT_HEIGHT
        / (super::water::INITIAL_RESERVOIR_LEVEL - super::scene::DOOR_HEIGHT);
    /// Branch size below which a leaf is drawn instead of more branches
    pub const BRANCH_TRIGGER: f32 = 2.0;
    /// Fraction of the remaining size spent on the current segment
    pub const SEGMENT_FRACTION: f32 = 0.5;
    /// Shrink applied to the branching threshold at each level
    pub const TRIGGER_DECAY: f32 = 0.75;
    /// Half-width of a leaf triangle
    pub const LEAF_SIZE: f32 = 0.2;
}

/// Frame timing
pub mod frame {
    /// Longest frame the simulation will integrate in one step (seconds)
    pub const MAX_FRAME_SECONDS: f32 = 0.1;
    /// Step of the fixed clock used by the headless driver
    pub const FIXED_STEP: f32 = 1.0 / 60.0;
}
