use glam::Vec3;

use crate::renderer::sink::{GeometrySink, Material};
use crate::renderer::vertex::MeshVertex;

/// Line segment tagged with its material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub material: Material,
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        (self.end - self.start).length()
    }
}

/// Triangle tagged with its material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub material: Material,
    pub vertices: [MeshVertex; 3],
}

/// Point tagged with its material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub material: Material,
    pub position: Vec3,
}

/// Sink that records everything it receives
///
/// Used to capture static geometry once and replay it, and by tests to
/// inspect generator output.
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    material: Material,
    pub lines: Vec<LineSegment>,
    pub triangles: Vec<Triangle>,
    pub points: Vec<Point>,
}

impl Default for GeometryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self {
            material: Material::Container,
            lines: Vec::new(),
            triangles: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.triangles.clear();
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty() && self.points.is_empty()
    }

    pub fn lines_of(&self, material: Material) -> impl Iterator<Item = &LineSegment> + '_ {
        self.lines.iter().filter(move |l| l.material == material)
    }

    pub fn triangles_of(&self, material: Material) -> impl Iterator<Item = &Triangle> + '_ {
        self.triangles.iter().filter(move |t| t.material == material)
    }

    pub fn points_of(&self, material: Material) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(move |p| p.material == material)
    }

    /// Send the recorded primitives to another sink, preserving materials
    pub fn replay(&self, sink: &mut dyn GeometrySink) {
        for line in &self.lines {
            sink.set_material(line.material);
            sink.line(line.start, line.end);
        }
        for tri in &self.triangles {
            sink.set_material(tri.material);
            sink.triangle(tri.vertices);
        }
        for point in &self.points {
            sink.set_material(point.material);
            sink.point(point.position);
        }
    }
}

impl GeometrySink for GeometryBuffer {
    fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    fn line(&mut self, start: Vec3, end: Vec3) {
        self.lines.push(LineSegment {
            material: self.material,
            start,
            end,
        });
    }

    fn triangle(&mut self, vertices: [MeshVertex; 3]) {
        self.triangles.push(Triangle {
            material: self.material,
            vertices,
        });
    }

    fn point(&mut self, position: Vec3) {
        self.points.push(Point {
            material: self.material,
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_with_current_material() {
        let mut buffer = GeometryBuffer::new();
        buffer.set_material(Material::Bark);
        buffer.line(Vec3::ZERO, Vec3::Y);
        buffer.set_material(Material::Water);
        buffer.point(Vec3::X);

        assert_eq!(buffer.lines_of(Material::Bark).count(), 1);
        assert_eq!(buffer.points_of(Material::Water).count(), 1);
        assert_eq!(buffer.points_of(Material::Bark).count(), 0);
    }

    #[test]
    fn quad_splits_into_two_triangles() {
        let mut buffer = GeometryBuffer::new();
        let v = |x: f32, z: f32| MeshVertex::untextured(Vec3::new(x, 0.0, z), Vec3::Y);
        buffer.quad([v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)]);
        assert_eq!(buffer.triangles.len(), 2);
        assert_eq!(buffer.triangles[1].vertices[0], v(0.0, 0.0));
    }

    #[test]
    fn line_loop_closes_outline() {
        let mut buffer = GeometryBuffer::new();
        buffer.line_loop(&[Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(buffer.lines.len(), 3);
        assert_eq!(buffer.lines[2].end, Vec3::ZERO);
    }

    #[test]
    fn replay_reproduces_geometry() {
        let mut source = GeometryBuffer::new();
        source.set_material(Material::Leaf);
        source.line(Vec3::ZERO, Vec3::Z);
        source.point(Vec3::ONE);

        let mut copy = GeometryBuffer::new();
        source.replay(&mut copy);
        assert_eq!(copy.lines, source.lines);
        assert_eq!(copy.points, source.points);
    }
}
