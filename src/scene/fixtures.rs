//! Static scene elements
//!
//! Everything here is redrawn every frame from the layout plus the current
//! levels; nothing is cached.

use std::f32::consts::PI;

use glam::{Quat, Vec2, Vec3};

use crate::particles::Particle;
use crate::renderer::{GeometrySink, Material, MeshVertex};
use crate::scene::SceneLayout;

/// Door panel sits this far in front of the frame
const DOOR_OFFSET: f32 = 0.05;
/// Chute side walls rise this far above the chute surface
const CHUTE_WALL_HEIGHT: f32 = 0.5;

/// Corner `index` of the hexagonal container at height `y`
fn container_corner(layout: &SceneLayout, index: usize, y: f32) -> Vec3 {
    let theta = index as f32 * PI / 3.0;
    let corner = Vec3::new(
        layout.container_radius * theta.sin(),
        y,
        layout.container_radius * theta.cos(),
    );
    Quat::from_rotation_y(-PI / 6.0) * corner
}

fn container_ring(layout: &SceneLayout, y: f32) -> [Vec3; 6] {
    std::array::from_fn(|i| container_corner(layout, i, y))
}

/// Wireframe outline of the container walls
pub fn draw_container(layout: &SceneLayout, sink: &mut dyn GeometrySink) {
    sink.set_material(Material::Container);
    let bottom = container_ring(layout, 0.0);
    let top = container_ring(layout, layout.container_height);
    for i in 0..6 {
        let next = (i + 1) % 6;
        sink.line_loop(&[bottom[i], top[i], top[next], bottom[next]]);
    }
}

/// Door frame, the door panel raised by `aperture`, and its lifting cord
pub fn draw_door(layout: &SceneLayout, aperture: f32, sink: &mut dyn GeometrySink) {
    sink.set_material(Material::Container);
    sink.line_loop(&layout.door_frame);

    let lift = Vec3::new(0.0, aperture, DOOR_OFFSET);
    let panel = layout.door_frame.map(|corner| MeshVertex::untextured(corner + lift, Vec3::Z));
    sink.set_material(Material::Door);
    sink.triangle(panel);

    let apex = layout.door_frame[2] + lift;
    sink.line(apex, Vec3::new(apex.x, layout.container_height, apex.z));
}

/// Chute surface and its two side walls
pub fn draw_chute(layout: &SceneLayout, sink: &mut dyn GeometrySink) {
    let chute = &layout.chute;
    let sill = layout.sill_height();
    let top_left = Vec3::new(chute.left, sill, chute.start_depth);
    let top_right = Vec3::new(chute.right, sill, chute.start_depth);
    let bottom_left = Vec3::new(chute.left, chute.exit_height, chute.end_depth);
    let bottom_right = Vec3::new(chute.right, chute.exit_height, chute.end_depth);

    sink.set_material(Material::Chute);
    let normal = chute.surface_normal();
    sink.quad([top_left, bottom_left, bottom_right, top_right].map(|p| MeshVertex::untextured(p, normal)));

    let rise = Vec3::Y * CHUTE_WALL_HEIGHT;
    for (top, bottom, normal) in [(top_left, bottom_left, Vec3::X), (top_right, bottom_right, -Vec3::X)] {
        sink.quad(
            [top, top + rise, bottom + rise, bottom].map(|p| MeshVertex::untextured(p, normal)),
        );
    }
}

/// Wooden tray around the basin
pub fn draw_tray(layout: &SceneLayout, sink: &mut dyn GeometrySink) {
    let half = layout.tray_size / 2.0;
    let height = layout.tray_wall_height;
    let c = layout.tray_center;
    let corners = [
        c + Vec3::new(-half, 0.0, -half),
        c + Vec3::new(half, 0.0, -half),
        c + Vec3::new(half, 0.0, half),
        c + Vec3::new(-half, 0.0, half),
    ];
    let uvs = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)];

    sink.set_material(Material::Wood);
    let floor = [corners[0], corners[3], corners[2], corners[1]];
    sink.quad(std::array::from_fn(|i| MeshVertex::new(floor[i], Vec3::Y, uvs[i])));

    let up = Vec3::Y * height;
    for i in 0..4 {
        let a = corners[i];
        let b = corners[(i + 1) % 4];
        // Walls face the inside of the tray
        let inward = (c - (a + b) / 2.0).normalize_or_zero();
        let wall = [a, a + up, b + up, b];
        sink.quad(std::array::from_fn(|j| MeshVertex::new(wall[j], inward, uvs[j])));
    }
}

/// Water remaining in the container as a translucent hexagonal prism
pub fn draw_reservoir_water(layout: &SceneLayout, level: f32, sink: &mut dyn GeometrySink) {
    if level <= 0.0 {
        return;
    }
    sink.set_material(Material::Water);
    let bottom = container_ring(layout, 0.0);
    let top = container_ring(layout, level);
    let centre_bottom = Vec3::ZERO;
    let centre_top = Vec3::new(0.0, level, 0.0);

    for i in 0..6 {
        let next = (i + 1) % 6;
        sink.triangle([
            MeshVertex::untextured(centre_top, Vec3::Y),
            MeshVertex::untextured(top[i], Vec3::Y),
            MeshVertex::untextured(top[next], Vec3::Y),
        ]);
        sink.triangle([
            MeshVertex::untextured(centre_bottom, -Vec3::Y),
            MeshVertex::untextured(bottom[next], -Vec3::Y),
            MeshVertex::untextured(bottom[i], -Vec3::Y),
        ]);
        let outward = ((bottom[i] + bottom[next]) / 2.0).normalize_or_zero();
        sink.quad([bottom[i], bottom[next], top[next], top[i]].map(|p| MeshVertex::untextured(p, outward)));
    }
}

/// Water surface in the tray; clamped to the tray rim
pub fn draw_basin_water(layout: &SceneLayout, level: f32, sink: &mut dyn GeometrySink) {
    if level <= 0.0 {
        return;
    }
    let half = layout.tray_size / 2.0;
    let y = layout.basin_floor_height + level.min(layout.tray_wall_height);
    let c = layout.tray_center + Vec3::Y * y;
    sink.set_material(Material::Water);
    sink.quad(
        [
            c + Vec3::new(-half, 0.0, -half),
            c + Vec3::new(-half, 0.0, half),
            c + Vec3::new(half, 0.0, half),
            c + Vec3::new(half, 0.0, -half),
        ]
        .map(|p| MeshVertex::untextured(p, Vec3::Y)),
    );
}

/// One point per particle in flight
pub fn draw_particles<'a>(particles: impl Iterator<Item = &'a Particle>, sink: &mut dyn GeometrySink) {
    sink.set_material(Material::Water);
    for particle in particles {
        sink.point(particle.position);
    }
}
