//! Reservoir garden
//!
//! A hexagonal tank releases water through a rising door. The water runs
//! down a chute as particles and collects in a tray of bumpy soil, and a
//! recursively branching plant in the tray grows with the collected water.

pub mod config;
pub mod constants;
pub mod error;
pub mod garden;
pub mod geometry;
pub mod growth;
pub mod particles;
pub mod renderer;
pub mod scene;
pub mod terrain;
pub mod time;

pub use config::GardenConfig;
pub use error::{GardenError, GardenResult};
pub use garden::{FrameOutcome, Garden};
pub use growth::{render_growth, BranchFrame, GrowthStats};
pub use particles::{TickReport, WaterSimulation};
pub use renderer::{GeometryBuffer, GeometrySink, Material, MeshVertex};
pub use terrain::{SubdivisionScheme, TerrainMesh};
