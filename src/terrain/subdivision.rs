use glam::{Vec2, Vec3};
use noise::{NoiseFn, Perlin};
use rand::Rng;

use crate::geometry::face_normal;
use crate::renderer::{GeometrySink, MeshVertex};
use crate::terrain::SubdivisionScheme;

/// Spatial frequency of the midpoint displacement field; kept off the
/// integer lattice where Perlin noise is zero
const MIDPOINT_NOISE_FREQUENCY: f64 = 0.731;

/// Recursive triangle subdivider with random vertical displacement
pub struct Subdivider {
    scheme: SubdivisionScheme,
    drift: f32,
    displacement: Perlin,
}

impl Subdivider {
    /// The noise field is seeded from `rng` so a seeded run is reproducible
    pub fn new<R: Rng + ?Sized>(scheme: SubdivisionScheme, drift: f32, rng: &mut R) -> Self {
        Self {
            scheme,
            drift,
            displacement: Perlin::new(rng.gen::<u32>()),
        }
    }

    pub fn scheme(&self) -> SubdivisionScheme {
        self.scheme
    }

    /// Subdivide `(p1, p2, p3)` `depth` times and emit the leaves into `sink`
    pub fn generate_mesh<R: Rng + ?Sized>(
        &self,
        depth: u32,
        p1: Vec3,
        p2: Vec3,
        p3: Vec3,
        rng: &mut R,
        sink: &mut dyn GeometrySink,
    ) {
        if depth == 0 {
            emit_leaf(p1, p2, p3, sink);
            return;
        }
        match self.scheme {
            SubdivisionScheme::Centroid => {
                let mut mid = (p1 + p2 + p3) / 3.0;
                mid.y += self.drift * 2.0 * (rng.gen::<f32>() - 0.5);
                self.generate_mesh(depth - 1, p1, p2, mid, rng, sink);
                self.generate_mesh(depth - 1, p1, mid, p3, rng, sink);
                self.generate_mesh(depth - 1, mid, p2, p3, rng, sink);
            }
            SubdivisionScheme::Midpoint => {
                let m12 = self.edge_midpoint(p1, p2);
                let m23 = self.edge_midpoint(p2, p3);
                let m31 = self.edge_midpoint(p3, p1);
                self.generate_mesh(depth - 1, p1, m12, m31, rng, sink);
                self.generate_mesh(depth - 1, m12, p2, m23, rng, sink);
                self.generate_mesh(depth - 1, m31, m23, p3, rng, sink);
                self.generate_mesh(depth - 1, m12, m23, m31, rng, sink);
            }
        }
    }

    /// Midpoint of an edge raised by the noise field at its position
    ///
    /// Depends only on the endpoints, so both triangles sharing the edge get
    /// the same point.
    fn edge_midpoint(&self, a: Vec3, b: Vec3) -> Vec3 {
        let mut mid = (a + b) * 0.5;
        let sample = self.displacement.get([
            mid.x as f64 * MIDPOINT_NOISE_FREQUENCY,
            mid.z as f64 * MIDPOINT_NOISE_FREQUENCY,
        ]);
        mid.y += self.drift * sample as f32;
        mid
    }
}

fn emit_leaf(p1: Vec3, p2: Vec3, p3: Vec3, sink: &mut dyn GeometrySink) {
    let normal = face_normal(p1, p2, p3).unwrap_or_else(|e| {
        log::error!("Terrain leaf ({p1}, {p2}, {p3}): {e}; using an upward normal");
        Vec3::Y
    });
    sink.triangle([
        MeshVertex::new(p1, normal, Vec2::new(0.0, 0.0)),
        MeshVertex::new(p2, normal, Vec2::new(1.0, 0.0)),
        MeshVertex::new(p3, normal, Vec2::new(0.5, 1.0)),
    ]);
}
