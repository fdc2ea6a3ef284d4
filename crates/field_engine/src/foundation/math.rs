//! Math utilities and types
//!
//! Provides the fundamental math types for the simulation. Collision
//! semantics were tuned with double precision, so the aliases are `f64`-based.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f64>;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f64>;

/// Length of a vector's projection onto the horizontal x-z plane
pub fn planar_norm(v: &Vec3) -> f64 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Length of the hypotenuse of a right triangle with the given legs
pub fn hypot2(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Length of the space diagonal spanned by the three given extents
pub fn hypot3(a: f64, b: f64, c: f64) -> f64 {
    (a * a + b * b + c * c).sqrt()
}

/// Projection of `v` onto `onto` (not necessarily unit length)
pub fn project_onto(v: &Vec3, onto: &Vec3) -> Vec3 {
    onto * (v.dot(onto) / onto.norm_squared())
}

/// Convert an angle from degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planar_norm_ignores_y() {
        let v = Vec3::new(3.0, 100.0, 4.0);
        assert_relative_eq!(planar_norm(&v), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_onto_axis() {
        let v = Vec3::new(1.0, -2.0, -3.0);
        let axis = Vec3::new(0.0, 0.0, 0.701);
        let projected = project_onto(&v, &axis);
        assert_relative_eq!(projected.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(projected.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(projected.z, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_onto_is_idempotent() {
        let v = Vec3::new(2.0, 5.0, -1.0);
        let onto = Vec3::new(1.0, 1.0, 0.0);
        let once = project_onto(&v, &onto);
        let twice = project_onto(&once, &onto);
        assert_relative_eq!(once, twice, epsilon = 1e-12);
    }
}
