//! Immediate-mode renderer interface
//!
//! Generators push primitives into a [`GeometrySink`] as they produce them;
//! they hold no rendering state of their own. A real renderer, a recording
//! buffer, or a counting probe in a test can all sit behind the trait.

use glam::Vec3;

use crate::renderer::vertex::MeshVertex;

/// Surface appearance selected for subsequent primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Container,
    Door,
    Chute,
    Water,
    Wood,
    Soil,
    Bark,
    Leaf,
}

impl Material {
    /// RGBA diffuse colour
    pub fn color(&self) -> [f32; 4] {
        match self {
            Material::Container => [0.0, 0.2, 0.2, 1.0],
            Material::Door => [0.0, 0.0, 0.0, 1.0],
            Material::Chute => [0.5, 0.5, 0.5, 1.0],
            Material::Water => [0.0, 0.0, 0.8, 0.5],
            Material::Wood | Material::Soil => [1.0, 1.0, 1.0, 1.0],
            Material::Bark => [0.6, 0.4, 0.0, 1.0],
            Material::Leaf => [0.0, 0.5, 0.0, 1.0],
        }
    }

    /// Specular exponent
    pub fn shininess(&self) -> f32 {
        match self {
            Material::Container => 10.0,
            Material::Door => 50.0,
            Material::Chute => 80.0,
            Material::Water => 100.0,
            _ => 0.0,
        }
    }

    /// Whether the material samples a texture image
    pub fn is_textured(&self) -> bool {
        matches!(self, Material::Wood | Material::Soil)
    }
}

/// Receiver of immediate-mode geometry
pub trait GeometrySink {
    /// Select the material for the primitives that follow
    fn set_material(&mut self, material: Material);

    /// A single line segment
    fn line(&mut self, start: Vec3, end: Vec3);

    /// A single triangle; winding determines the front face
    fn triangle(&mut self, vertices: [MeshVertex; 3]);

    /// A single point sprite
    fn point(&mut self, position: Vec3);

    /// A planar quad, split into two triangles sharing the first vertex
    fn quad(&mut self, vertices: [MeshVertex; 4]) {
        self.triangle([vertices[0], vertices[1], vertices[2]]);
        self.triangle([vertices[0], vertices[2], vertices[3]]);
    }

    /// A closed outline through `points`
    fn line_loop(&mut self, points: &[Vec3]) {
        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.line(start, end);
        }
    }
}
