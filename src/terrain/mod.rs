//! Procedural soil terrain

pub mod soil;
pub mod subdivision;

use serde::{Deserialize, Serialize};

pub use soil::TerrainMesh;
pub use subdivision::Subdivider;

/// How a triangle is split at each subdivision level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubdivisionScheme {
    /// Split at the randomly raised centroid into three; `3^depth` leaves
    #[default]
    Centroid,
    /// Split at noise-displaced edge midpoints into four; `4^depth` leaves,
    /// with neighbouring triangles agreeing on shared edges
    Midpoint,
}

impl SubdivisionScheme {
    /// Leaf triangles produced from one root triangle at `depth`
    pub fn leaf_count(&self, depth: u32) -> usize {
        match self {
            SubdivisionScheme::Centroid => 3usize.pow(depth),
            SubdivisionScheme::Midpoint => 4usize.pow(depth),
        }
    }
}
