//! Polymorphic collision shape
//!
//! A closed enum over the shape kinds, so adding a new kind forces every
//! dispatch site to handle it at compile time.

use super::body::BodyContact;
use super::cylinder::CylinderCollider;
use super::parallelepiped::ParallelepipedCollider;
use super::ray::Ray;
use super::sphere::SphereCollider;
use super::NO_COLLISION_DISTANCE;
use crate::foundation::math::Vec3;

/// Collision shape owned by a scene object
#[derive(Debug, Clone, Default)]
pub enum CollisionShape {
    /// No geometry; decorative objects that never block movement
    #[default]
    None,
    /// Round obstacle
    Sphere(SphereCollider),
    /// Vertical cylinder obstacle
    Cylinder(CylinderCollider),
    /// Axis-aligned box obstacle
    Parallelepiped(ParallelepipedCollider),
}

impl CollisionShape {
    /// Creates a sphere shape
    pub fn sphere(center: Vec3, radius: f64) -> Self {
        Self::Sphere(SphereCollider::new(center, radius))
    }

    /// Creates a vertical cylinder shape from its bottom-face center
    pub fn cylinder(base_center: Vec3, radius: f64, height: f64) -> Self {
        Self::Cylinder(CylinderCollider::new(base_center, radius, height))
    }

    /// Creates an axis-aligned box shape from its bottom-face center
    pub fn parallelepiped(
        base_center: Vec3,
        half_width_x: f64,
        height: f64,
        half_width_z: f64,
    ) -> Self {
        Self::Parallelepiped(ParallelepipedCollider::new(
            base_center,
            half_width_x,
            height,
            half_width_z,
        ))
    }

    /// Test whether the ray hits this shape; see the per-shape docs for the
    /// meaning of the returned distance
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Sphere(sphere) => sphere.intersect_ray(ray),
            Self::Cylinder(cylinder) => cylinder.intersect_ray(ray),
            Self::Parallelepiped(parallelepiped) => parallelepiped.intersect_ray(ray),
        }
    }

    /// Test the standing player (eyes at `eye`, `height` tall) against this
    /// shape
    pub fn check_body_collision(&self, eye: &Vec3, height: f64) -> Option<BodyContact> {
        match self {
            Self::None => None,
            Self::Sphere(sphere) => sphere.check_body_collision(eye, height),
            Self::Cylinder(cylinder) => cylinder.check_body_collision(eye, height),
            Self::Parallelepiped(parallelepiped) => {
                parallelepiped.check_body_collision(eye, height)
            }
        }
    }

    /// Minimum distance from `point` to this shape's surface, `0.0` inside.
    /// Shapes without geometry report a very large distance.
    pub fn distance_to(&self, point: &Vec3) -> f64 {
        match self {
            Self::None => NO_COLLISION_DISTANCE,
            Self::Sphere(sphere) => sphere.distance_to(point),
            Self::Cylinder(cylinder) => cylinder.distance_to(point),
            Self::Parallelepiped(parallelepiped) => parallelepiped.distance_to(point),
        }
    }

    /// Cheap conservative pre-filter: true only when this shape is certainly
    /// not touching a body of the given allowance around `point`
    pub fn is_far_from(&self, point: &Vec3, body_allowance: f64, extra_allowance: f64) -> bool {
        match self {
            Self::None => true,
            Self::Sphere(sphere) => sphere.is_far_from(point, body_allowance, extra_allowance),
            Self::Cylinder(cylinder) => {
                cylinder.is_far_from(point, body_allowance, extra_allowance)
            }
            Self::Parallelepiped(parallelepiped) => {
                parallelepiped.is_far_from(point, body_allowance, extra_allowance)
            }
        }
    }

    /// Resulting force after removing the component pushing the contact
    /// point into this shape
    pub fn contact_force(&self, force: &Vec3, contact: &BodyContact) -> Vec3 {
        self.resolve(force, contact)
    }

    /// Resulting velocity after removing the component pushing the contact
    /// point into this shape
    pub fn contact_velocity(&self, velocity: &Vec3, contact: &BodyContact) -> Vec3 {
        self.resolve(velocity, contact)
    }

    fn resolve(&self, vector: &Vec3, contact: &BodyContact) -> Vec3 {
        match self {
            Self::None => Vec3::zeros(),
            Self::Sphere(sphere) => sphere.resolve(vector, &contact.point, contact.region),
            Self::Cylinder(cylinder) => cylinder.resolve(vector, &contact.point, contact.region),
            Self::Parallelepiped(parallelepiped) => {
                parallelepiped.resolve(vector, &contact.point, contact.region)
            }
        }
    }

    /// Move this shape so its reference point sits at `position`
    pub fn set_position(&mut self, position: Vec3) {
        match self {
            Self::None => {}
            Self::Sphere(sphere) => sphere.set_position(position),
            Self::Cylinder(cylinder) => cylinder.set_position(position),
            Self::Parallelepiped(parallelepiped) => parallelepiped.set_position(position),
        }
    }

    /// Rescale this shape component-wise; each kind interprets the factors
    /// its own way
    pub fn set_scale(&mut self, scale: Vec3) {
        match self {
            Self::None => {}
            Self::Sphere(sphere) => sphere.set_scale(scale),
            Self::Cylinder(cylinder) => cylinder.set_scale(scale),
            Self::Parallelepiped(parallelepiped) => parallelepiped.set_scale(scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::body::ContactRegion;
    use approx::assert_relative_eq;

    #[test]
    fn test_none_never_interacts() {
        let shape = CollisionShape::None;
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        assert!(shape.intersect_ray(&ray).is_none());
        assert!(shape.check_body_collision(&Vec3::zeros(), 1.7).is_none());
        assert!(shape.is_far_from(&Vec3::zeros(), 1.7, 3.0));
        assert!(shape.distance_to(&Vec3::zeros()) >= 100_000.0);
    }

    #[test]
    fn test_none_contact_response_is_zero() {
        let shape = CollisionShape::None;
        let contact = BodyContact {
            point: Vec3::zeros(),
            region: ContactRegion::Body,
        };
        let force = shape.contact_force(&Vec3::new(1.0, 2.0, 3.0), &contact);
        assert_relative_eq!(force, Vec3::zeros(), epsilon = 1e-12);
    }

    #[test]
    fn test_dispatch_reaches_the_sphere() {
        let shape = CollisionShape::sphere(Vec3::zeros(), 0.7);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let distance = shape.intersect_ray(&ray).expect("hit");
        assert_relative_eq!(distance, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_clone_is_a_deep_value_copy() {
        let original = CollisionShape::cylinder(Vec3::zeros(), 0.35, 4.38);
        let mut copy = original.clone();
        copy.set_position(Vec3::new(5.0, 0.0, 5.0));
        copy.set_scale(Vec3::new(2.0, 2.0, 2.0));

        // The original template is unaffected by the instance mutations.
        let CollisionShape::Cylinder(cylinder) = &original else {
            panic!("unexpected variant");
        };
        assert_relative_eq!(cylinder.base_center(), Vec3::zeros(), epsilon = 1e-12);
        assert_relative_eq!(cylinder.radius(), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_force_and_velocity_share_the_projection() {
        let shape = CollisionShape::cylinder(Vec3::zeros(), 0.7, 0.8);
        let contact = BodyContact {
            point: Vec3::new(0.0, 0.801, 0.0),
            region: ContactRegion::Feet,
        };
        let vector = Vec3::new(1.0, -2.0, 1.0);
        assert_relative_eq!(
            shape.contact_force(&vector, &contact),
            shape.contact_velocity(&vector, &contact),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            shape.contact_force(&vector, &contact),
            Vec3::new(1.0, 0.0, 1.0),
            epsilon = 1e-12
        );
    }
}
