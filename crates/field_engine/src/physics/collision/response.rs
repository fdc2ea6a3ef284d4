//! Shared contact-response projection helpers
//!
//! Each shape computes its own inside-normal vector; the deflection rule
//! applied along that normal is the same everywhere and lives here.

use crate::foundation::math::{project_onto, Vec3};

/// Remove the horizontal part of `vector` that points along `inside_normal`.
///
/// Used for lateral contacts against round shapes: only the x/z components
/// are corrected, vertical motion along the wall is left alone. Vectors
/// already moving away from or parallel to the surface pass through
/// unchanged.
pub(crate) fn deflect_lateral(vector: &Vec3, inside_normal: &Vec3) -> Vec3 {
    if vector.dot(inside_normal) > 0.0 {
        let projection = project_onto(vector, inside_normal);
        return Vec3::new(vector.x - projection.x, vector.y, vector.z - projection.z);
    }

    *vector
}

/// Remove the full 3D part of `vector` that points along `inside_normal`.
///
/// Used by the parallelepiped, whose face normals are axis-aligned and whose
/// top/bottom contacts cancel the entire into-surface component.
pub(crate) fn deflect_full(vector: &Vec3, inside_normal: &Vec3) -> Vec3 {
    if vector.dot(inside_normal) > 0.0 {
        return vector - project_onto(vector, inside_normal);
    }

    *vector
}

/// Horizontal unit vector from `point` toward the vertical axis through
/// `(axis_x, axis_z)`.
///
/// Lateral contacts on round shapes are defined purely in the x/z plane, so
/// the normal's y component is always zero. A point exactly on the axis has
/// no defined direction; the zero vector is returned and the deflection
/// helpers treat it as "no into-surface component".
pub(crate) fn axial_inside_normal(axis_x: f64, axis_z: f64, point: &Vec3) -> Vec3 {
    let inside = Vec3::new(axis_x - point.x, 0.0, axis_z - point.z);
    let length = inside.norm();

    if length == 0.0 {
        return Vec3::zeros();
    }

    Vec3::new(inside.x / length, 0.0, inside.z / length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deflect_lateral_cancels_into_surface_component() {
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let deflected = deflect_lateral(&Vec3::new(1.0, 0.0, -3.0), &normal);
        assert_relative_eq!(deflected, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_deflect_lateral_keeps_vertical_component() {
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let deflected = deflect_lateral(&Vec3::new(0.0, -9.0, -3.0), &normal);
        assert_relative_eq!(deflected, Vec3::new(0.0, -9.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_deflect_lateral_ignores_outgoing_vectors() {
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let outgoing = Vec3::new(1.0, 0.0, 3.0);
        assert_relative_eq!(
            deflect_lateral(&outgoing, &normal),
            outgoing,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deflect_full_zeroes_along_vertical_normal() {
        let normal = Vec3::new(0.0, -1.0, 0.0);
        let deflected = deflect_full(&Vec3::new(1.0, -2.0, 1.0), &normal);
        assert_relative_eq!(deflected, Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_deflection_is_idempotent() {
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let once = deflect_lateral(&Vec3::new(1.0, 2.0, -3.0), &normal);
        let twice = deflect_lateral(&once, &normal);
        assert_relative_eq!(once, twice, epsilon = 1e-12);
    }

    #[test]
    fn test_axial_inside_normal_is_horizontal_unit() {
        let normal = axial_inside_normal(0.0, 0.0, &Vec3::new(0.0, 5.0, 0.701));
        assert_relative_eq!(normal, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_axial_inside_normal_on_axis_is_zero() {
        let normal = axial_inside_normal(1.0, 2.0, &Vec3::new(1.0, 5.0, 2.0));
        assert_relative_eq!(normal, Vec3::zeros(), epsilon = 1e-12);
    }
}
