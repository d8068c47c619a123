use glam::{Quat, Vec3};

use crate::constants::growth::{LEAF_SIZE, SEGMENT_FRACTION, TRIGGER_DECAY};
use crate::renderer::{GeometrySink, Material, MeshVertex};

/// Placement of one child branch relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchSlot {
    /// Rotation about the parent axis, degrees
    pub azimuth: f32,
    /// Lean away from the parent axis, degrees
    pub tilt: f32,
    pub size_factor: f32,
    pub trigger_factor: f32,
}

const fn slot(azimuth: f32, tilt: f32, size_factor: f32, trigger_factor: f32) -> BranchSlot {
    BranchSlot {
        azimuth,
        tilt,
        size_factor,
        trigger_factor,
    }
}

/// The five children of every branching node
pub const BRANCH_SLOTS: [BranchSlot; 5] = [
    slot(0.0, 25.0, 0.9, 0.9),
    slot(72.0, 30.0, 1.0, 0.9),
    slot(144.0, 25.0, 0.9, 1.0),
    slot(216.0, 30.0, 1.1, 1.1),
    slot(288.0, 35.0, 1.0, 1.1),
];

/// Local coordinate frame of a branch; branches grow along local +Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchFrame {
    pub origin: Vec3,
    pub orientation: Quat,
}

impl BranchFrame {
    pub fn upright(origin: Vec3) -> Self {
        Self {
            origin,
            orientation: Quat::IDENTITY,
        }
    }

    fn to_world(&self, local: Vec3) -> Vec3 {
        self.origin + self.orientation * local
    }

    fn child(&self, slot: &BranchSlot) -> Self {
        Self {
            origin: self.origin,
            orientation: self.orientation
                * Quat::from_rotation_y(slot.azimuth.to_radians())
                * Quat::from_rotation_z(slot.tilt.to_radians()),
        }
    }
}

/// Primitive counts from one growth pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrowthStats {
    pub segments: usize,
    pub leaves: usize,
    /// Nodes that spawned children
    pub forks: usize,
    pub max_depth: usize,
}

/// Emit a plant of `total_height` rooted at `root` into `sink`
///
/// Each node draws a segment half its remaining size, then either ends in a
/// leaf (size below `threshold`) or forks into [`BRANCH_SLOTS`] with the
/// remaining size and a decayed threshold.
pub fn render_growth(
    total_height: f32,
    threshold: f32,
    root: BranchFrame,
    sink: &mut dyn GeometrySink,
) -> GrowthStats {
    let mut stats = GrowthStats::default();
    branch(total_height, threshold, root, 0, sink, &mut stats);
    stats
}

fn branch(
    size: f32,
    trigger: f32,
    frame: BranchFrame,
    depth: usize,
    sink: &mut dyn GeometrySink,
    stats: &mut GrowthStats,
) {
    stats.max_depth = stats.max_depth.max(depth);

    let length = if size > 0.0 { SEGMENT_FRACTION * size } else { 0.0 };
    let tip = frame.to_world(Vec3::Y * length);
    if length > 0.0 {
        sink.set_material(Material::Bark);
        sink.line(frame.origin, tip);
        stats.segments += 1;
    }
    let frame = BranchFrame {
        origin: tip,
        ..frame
    };

    let terminal = !size.is_finite() || !(trigger > 0.0) || !(size >= trigger);
    if terminal {
        leaf(&frame, sink);
        stats.leaves += 1;
        return;
    }

    stats.forks += 1;
    let smaller = size - length;
    let trig = trigger * TRIGGER_DECAY;
    for slot in &BRANCH_SLOTS {
        branch(
            smaller * slot.size_factor,
            trig * slot.trigger_factor,
            frame.child(slot),
            depth + 1,
            sink,
            stats,
        );
    }
}

fn leaf(frame: &BranchFrame, sink: &mut dyn GeometrySink) {
    let normal = frame.orientation * Vec3::NEG_Z;
    sink.set_material(Material::Leaf);
    sink.triangle(
        [
            Vec3::new(0.0, LEAF_SIZE, 0.0),
            Vec3::new(LEAF_SIZE, 0.0, 0.0),
            Vec3::new(-LEAF_SIZE, 0.0, 0.0),
        ]
        .map(|p| MeshVertex::untextured(frame.to_world(p), normal)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::GeometryBuffer;

    fn grow(height: f32, threshold: f32) -> (GrowthStats, GeometryBuffer) {
        let mut buffer = GeometryBuffer::new();
        let stats = render_growth(height, threshold, BranchFrame::upright(Vec3::ZERO), &mut buffer);
        (stats, buffer)
    }

    #[test]
    fn small_plant_is_one_segment_and_a_leaf() {
        let (stats, buffer) = grow(1.0, 2.0);
        assert_eq!(stats.segments, 1);
        assert_eq!(stats.leaves, 1);
        assert_eq!(buffer.lines.len(), 1);
        assert_eq!(buffer.lines[0].start, Vec3::ZERO);
        assert!((buffer.lines[0].end - Vec3::new(0.0, 0.5, 0.0)).length() < 1e-6);

        let leaf = &buffer.triangles[0];
        assert_eq!(leaf.material, Material::Leaf);
        assert!((leaf.vertices[0].position() - Vec3::new(0.0, 0.7, 0.0)).length() < 1e-6);
    }

    #[test]
    fn zero_height_is_a_bare_leaf() {
        let (stats, buffer) = grow(0.0, 2.0);
        assert_eq!(stats.segments, 0);
        assert_eq!(stats.leaves, 1);
        assert!(buffer.lines.is_empty());
    }

    #[test]
    fn non_positive_threshold_terminates() {
        for threshold in [0.0, -1.0, f32::NAN] {
            let (stats, _) = grow(10.0, threshold);
            assert_eq!(stats.leaves, 1);
            assert_eq!(stats.forks, 0);
        }
    }

    #[test]
    fn every_fork_has_five_children() {
        let (stats, buffer) = grow(10.0, 2.0);
        assert!(stats.forks > 0);
        assert_eq!(stats.leaves, 4 * stats.forks + 1);
        assert_eq!(stats.segments, stats.forks + stats.leaves);
        assert_eq!(buffer.lines_of(Material::Bark).count(), stats.segments);
        assert_eq!(buffer.triangles_of(Material::Leaf).count(), stats.leaves);
    }

    #[test]
    fn segments_shrink_with_depth() {
        let (_, buffer) = grow(10.0, 2.0);
        let trunk = buffer.lines[0].length();
        assert!((trunk - 5.0).abs() < 1e-5);
        assert!(buffer.lines.iter().all(|l| l.length() <= trunk + 1e-5));
    }

    #[test]
    fn first_child_leans_from_the_trunk_tip() {
        let (_, buffer) = grow(10.0, 2.0);
        let trunk_tip = buffer.lines[0].end;
        let child = buffer.lines[1];
        assert!((child.start - trunk_tip).length() < 1e-5);
        let direction = (child.end - child.start).normalize();
        let lean = direction.angle_between(Vec3::Y).to_degrees();
        assert!((lean - 25.0).abs() < 1e-2);
    }

    #[test]
    fn larger_plants_have_more_leaves() {
        let (small, _) = grow(5.0, 2.0);
        let (large, _) = grow(20.0, 2.0);
        assert!(large.leaves > small.leaves);
        assert!(large.max_depth > small.max_depth);
    }
}
