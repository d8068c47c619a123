//! Derived scene geometry
//!
//! The container is a hexagonal prism rotated so that one flat face points
//! down +Z. The door is an equilateral triangle cut into that face; its
//! base is the sill. The chute runs from the sill down to the tray along +Z.

use std::f32::consts::PI;

use glam::Vec3;

use crate::config::{SceneConfig, WaterConfig};

/// Inclined channel from the door sill to the tray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChuteGeometry {
    /// Height lost between the sill and the exit
    pub drop: f32,
    /// Horizontal length
    pub length: f32,
    /// Length along the slope
    pub magnitude: f32,
    /// Height of the exit edge
    pub exit_height: f32,
    /// Depth (z) of the entry edge
    pub start_depth: f32,
    /// Depth (z) of the exit edge; particles at or beyond it are falling
    pub end_depth: f32,
    /// Left and right x extents, matching the door width
    pub left: f32,
    pub right: f32,
}

impl ChuteGeometry {
    /// Unit vector pointing down the slope
    pub fn slope_direction(&self) -> Vec3 {
        Vec3::new(0.0, -self.drop / self.magnitude, self.length / self.magnitude)
    }

    /// Acceleration along the slope under `gravity`
    pub fn slope_acceleration(&self, gravity: f32) -> f32 {
        // g·h·cos(atan(l/h)), with cos(atan(l/h)) = h/m
        gravity * self.drop * (self.drop / self.magnitude)
    }

    /// Upward surface normal
    pub fn surface_normal(&self) -> Vec3 {
        Vec3::new(0.0, self.length / self.magnitude, self.drop / self.magnitude)
    }
}

/// Fixed positions of every scene element
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub container_radius: f32,
    pub container_height: f32,
    /// Left sill corner, right sill corner, apex
    pub door_frame: [Vec3; 3],
    pub chute: ChuteGeometry,
    /// Centre of the tray floor
    pub tray_center: Vec3,
    pub tray_size: f32,
    pub tray_wall_height: f32,
    pub basin_floor_height: f32,
    pub particle_diameter: f32,
}

impl SceneLayout {
    pub fn new(scene: &SceneConfig, water: &WaterConfig) -> Self {
        let door_depth = scene.container_radius * (PI / 6.0).cos();
        let half_width = 0.5 * scene.container_radius * (PI / 6.0).sin();
        let frame_height = ((2.0 * half_width).powi(2) - half_width.powi(2)).sqrt();

        let door_frame = [
            Vec3::new(-half_width, scene.door_height, door_depth),
            Vec3::new(half_width, scene.door_height, door_depth),
            Vec3::new(0.0, scene.door_height + frame_height, door_depth),
        ];

        let drop = scene.door_height - scene.chute_exit_height;
        let length = scene.chute_length;
        let chute = ChuteGeometry {
            drop,
            length,
            magnitude: (drop * drop + length * length).sqrt(),
            exit_height: scene.chute_exit_height,
            start_depth: door_depth,
            end_depth: door_depth + length,
            left: -half_width,
            right: half_width,
        };

        Self {
            container_radius: scene.container_radius,
            container_height: scene.container_height,
            door_frame,
            chute,
            tray_center: Vec3::new(0.0, 0.0, door_depth + length + scene.tray_size / 2.0),
            tray_size: scene.tray_size,
            tray_wall_height: scene.tray_wall_height,
            basin_floor_height: scene.basin_floor_height,
            particle_diameter: water.particle_diameter(),
        }
    }

    /// Height of the door sill
    pub fn sill_height(&self) -> f32 {
        self.door_frame[0].y
    }

    /// Depth (z) of the door plane
    pub fn door_depth(&self) -> f32 {
        self.door_frame[0].z
    }

    pub fn door_width(&self) -> f32 {
        self.door_frame[1].x - self.door_frame[0].x
    }

    /// Height at which a falling particle counts as landed
    pub fn landing_height(&self) -> f32 {
        self.basin_floor_height + self.particle_diameter
    }
}
