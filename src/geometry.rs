//! Vector helpers used when building lit meshes.

use glam::Vec3;

use crate::error::{GardenError, GardenResult};

/// Component-wise `a - b`
#[inline]
pub fn difference(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

/// Right-handed cross product `a × b`
#[inline]
pub fn cross_product(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Scale `v` to unit length
///
/// Fails with [`GardenError::DegenerateVector`] for a zero-length or
/// non-finite input instead of producing NaNs.
pub fn normalise(v: Vec3) -> GardenResult<Vec3> {
    v.try_normalize().ok_or(GardenError::DegenerateVector)
}

/// Unit normal of triangle `(p1, p2, p3)`
///
/// Computed as `(p1 - p2) × (p2 - p3)`; counter-clockwise winding seen
/// from above gives an upward normal. The winding decides which face is lit.
pub fn face_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> GardenResult<Vec3> {
    normalise(cross_product(difference(p1, p2), difference(p2, p3)))
}
