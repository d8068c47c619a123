use glam::Vec3;
use rand::Rng;

use crate::config::SoilConfig;
use crate::renderer::{GeometryBuffer, GeometrySink, Material, MeshVertex};
use crate::scene::SceneLayout;
use crate::terrain::Subdivider;

/// Bumpy soil surface covering the tray floor
///
/// Generated once; drawing replays the stored triangles.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    triangles: Vec<[MeshVertex; 3]>,
}

impl TerrainMesh {
    /// Split the floor square into four triangles fanning to its centre and
    /// subdivide each one
    pub fn build<R: Rng + ?Sized>(config: &SoilConfig, layout: &SceneLayout, rng: &mut R) -> Self {
        let half = layout.tray_size / 2.0;
        let y = config.base_height;
        let offset = layout.tray_center;
        let corners = [
            Vec3::new(-half, y, -half),
            Vec3::new(-half, y, half),
            Vec3::new(half, y, half),
            Vec3::new(half, y, -half),
        ]
        .map(|c| c + offset);
        let centre = Vec3::new(0.0, y, 0.0) + offset;

        let subdivider = Subdivider::new(config.scheme, config.drift, rng);
        let mut buffer = GeometryBuffer::new();
        for i in 0..4 {
            subdivider.generate_mesh(
                config.depth,
                corners[i],
                corners[(i + 1) % 4],
                centre,
                rng,
                &mut buffer,
            );
        }

        log::debug!(
            "Built {:?} soil mesh: {} triangles at depth {}",
            config.scheme,
            buffer.triangles.len(),
            config.depth
        );
        Self {
            triangles: buffer.triangles.into_iter().map(|t| t.vertices).collect(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangles(&self) -> &[[MeshVertex; 3]] {
        &self.triangles
    }

    pub fn draw(&self, sink: &mut dyn GeometrySink) {
        sink.set_material(Material::Soil);
        for triangle in &self.triangles {
            sink.triangle(*triangle);
        }
    }
}
