//! Spherical collision shape

use super::body::{sample_standing_body, BodyContact, ContactRegion};
use super::ray::Ray;
use super::response::{axial_inside_normal, deflect_lateral};
use super::SEPARATION_EPSILON;
use crate::foundation::math::{hypot2, Vec3};

/// Collision shape of a round obstacle (the bird, round rocks)
#[derive(Debug, Clone)]
pub struct SphereCollider {
    center: Vec3,
    radius: f64,
}

impl SphereCollider {
    /// Creates a sphere with the given center and radius
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Center of the sphere
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius of the sphere
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Move the sphere so its center sits at `position`
    pub fn set_position(&mut self, position: Vec3) {
        self.center = position;
    }

    /// Rescale the sphere; only the x factor applies, as a uniform radius
    /// scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.radius *= scale.x;
    }

    /// Exact minimum distance from `point` to the sphere surface, `0.0`
    /// inside
    pub fn distance_to(&self, point: &Vec3) -> f64 {
        let from_center = (point - self.center).norm();

        if from_center <= self.radius {
            return 0.0;
        }

        from_center - self.radius
    }

    /// Distance from `point` to the sphere treated as a vertical cylinder of
    /// the same radius, spanning `center.y - radius` to `center.y + radius`.
    ///
    /// Body sampling uses this instead of the true sphere distance; the
    /// exact [`Self::distance_to`] stays in use for every other query.
    fn upright_cylinder_distance(&self, point: &Vec3) -> f64 {
        let base_y = self.center.y - self.radius;
        let height = 2.0 * self.radius;
        let planar = hypot2(point.x - self.center.x, point.z - self.center.z);

        if point.y < base_y {
            // below the cylinder
            if planar < self.radius {
                return (base_y - point.y).abs();
            }
            return hypot2(planar - self.radius, base_y - point.y);
        }

        if point.y > base_y + height {
            // over the cylinder
            if planar < self.radius {
                return (point.y - (base_y + height)).abs();
            }
            return hypot2(planar - self.radius, point.y - (base_y + height));
        }

        // alongside the lateral surface
        let from_border = planar - self.radius;

        if from_border < 0.0 {
            return 0.0;
        }

        from_border
    }

    /// Test whether the ray hits this sphere.
    ///
    /// A hit from inside reports distance `0.0`. Any other hit reports the
    /// exact origin-to-surface distance rather than the distance along the
    /// ray; capture-range tuning depends on that value.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let to_center = self.center - ray.origin;
        let to_center_squared = to_center.norm_squared();

        if to_center_squared < self.radius * self.radius {
            return Some(0.0);
        }

        if ray.is_behind(&self.center) {
            return None;
        }

        // Perpendicular miss distance via the Pythagorean relation
        let along_ray = to_center.dot(&ray.direction);
        let miss_squared = to_center_squared - along_ray * along_ray;

        if miss_squared > self.radius * self.radius {
            return None;
        }

        Some(self.distance_to(&ray.origin))
    }

    /// Test the standing player against this sphere, using the cylindrical
    /// distance approximation
    pub fn check_body_collision(&self, eye: &Vec3, height: f64) -> Option<BodyContact> {
        sample_standing_body(eye, height, |point| self.upright_cylinder_distance(point))
    }

    /// Whether this sphere is certainly not touching a body of the given
    /// allowance around `point`
    pub fn is_far_from(&self, point: &Vec3, body_allowance: f64, extra_allowance: f64) -> bool {
        (point - self.center).norm() > self.radius + body_allowance + extra_allowance
    }

    /// Remove from `vector` the component that would push the contact point
    /// further into the sphere
    pub(crate) fn resolve(
        &self,
        vector: &Vec3,
        contact_point: &Vec3,
        region: ContactRegion,
    ) -> Vec3 {
        match region {
            ContactRegion::Body => self.lateral(vector, contact_point),
            ContactRegion::Feet => {
                if contact_point.y >= self.center.y + self.radius - SEPARATION_EPSILON {
                    // standing on top
                    if vector.y < 0.0 {
                        return Vec3::new(vector.x, 0.0, vector.z);
                    }
                    return *vector;
                }

                self.lateral(vector, contact_point)
            }
            ContactRegion::Head => {
                if contact_point.y <= self.center.y + SEPARATION_EPSILON {
                    // bumping the underside
                    if vector.y > 0.0 {
                        return Vec3::new(vector.x, 0.0, vector.z);
                    }
                    return *vector;
                }

                self.lateral(vector, contact_point)
            }
        }
    }

    fn lateral(&self, vector: &Vec3, contact_point: &Vec3) -> Vec3 {
        let normal = axial_inside_normal(self.center.x, self.center.z, contact_point);
        deflect_lateral(vector, &normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_sphere() -> SphereCollider {
        SphereCollider::new(Vec3::zeros(), 0.7)
    }

    #[test]
    fn test_intersect_ray_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let distance = unit_sphere().intersect_ray(&ray).expect("hit");
        assert_relative_eq!(distance, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_intersect_ray_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(unit_sphere().intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_intersect_ray_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(unit_sphere().intersect_ray(&ray).is_none());
    }

    #[test]
    fn test_intersect_ray_from_inside() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));
        let distance = unit_sphere().intersect_ray(&ray).expect("hit");
        assert_relative_eq!(distance, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_check_body_collision_reports_torso() {
        let eye = Vec3::new(0.0, 0.0, 0.71);
        let contact = unit_sphere()
            .check_body_collision(&eye, 1.7)
            .expect("contact");
        assert_eq!(contact.region, ContactRegion::Body);
        assert_relative_eq!(contact.point.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(contact.point.y, -0.85, epsilon = 1e-9);
        assert_relative_eq!(contact.point.z, 0.71, epsilon = 1e-12);
    }

    #[test]
    fn test_check_body_collision_reports_feet_on_top() {
        let eye = Vec3::new(0.0, 2.5, 0.0);
        let contact = unit_sphere()
            .check_body_collision(&eye, 1.7)
            .expect("contact");
        assert_eq!(contact.region, ContactRegion::Feet);
        assert_relative_eq!(contact.point.y, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_check_body_collision_out_of_reach() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        assert!(unit_sphere().check_body_collision(&eye, 1.7).is_none());
    }

    #[test]
    fn test_resolve_feet_on_top_cancels_descent() {
        let result = unit_sphere().resolve(
            &Vec3::new(1.0, -2.0, 1.0),
            &Vec3::new(0.0, 0.701, 0.0),
            ContactRegion::Feet,
        );
        assert_relative_eq!(result, Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_feet_on_top_keeps_ascent() {
        let result = unit_sphere().resolve(
            &Vec3::new(1.0, 4.0, 1.0),
            &Vec3::new(0.0, 0.701, 0.0),
            ContactRegion::Feet,
        );
        assert_relative_eq!(result, Vec3::new(1.0, 4.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_head_below_cancels_ascent() {
        let result = unit_sphere().resolve(
            &Vec3::new(1.0, 4.0, 1.0),
            &Vec3::new(0.0, -0.701, 0.0),
            ContactRegion::Head,
        );
        assert_relative_eq!(result, Vec3::new(1.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_head_below_keeps_descent() {
        let result = unit_sphere().resolve(
            &Vec3::new(1.0, -2.0, 1.0),
            &Vec3::new(0.0, -0.701, 0.0),
            ContactRegion::Head,
        );
        assert_relative_eq!(result, Vec3::new(1.0, -2.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_lateral_cancels_into_surface_component() {
        let result = unit_sphere().resolve(
            &Vec3::new(1.0, 0.0, -3.0),
            &Vec3::new(0.0, 0.0, 0.701),
            ContactRegion::Body,
        );
        assert_relative_eq!(result, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_lateral_keeps_outgoing_vector() {
        let result = unit_sphere().resolve(
            &Vec3::new(1.0, 0.0, 3.0),
            &Vec3::new(0.0, 0.0, 0.701),
            ContactRegion::Body,
        );
        assert_relative_eq!(result, Vec3::new(1.0, 0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let sphere = unit_sphere();
        let contact_point = Vec3::new(0.0, 0.0, 0.701);
        let once = sphere.resolve(
            &Vec3::new(1.0, 2.0, -3.0),
            &contact_point,
            ContactRegion::Body,
        );
        let twice = sphere.resolve(&once, &contact_point, ContactRegion::Body);
        assert_relative_eq!(once, twice, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_to_outside_and_inside() {
        let sphere = unit_sphere();
        assert_relative_eq!(sphere.distance_to(&Vec3::new(0.0, 0.0, 5.0)), 4.3, epsilon = 1e-9);
        assert_relative_eq!(sphere.distance_to(&Vec3::new(0.0, 3.0, 4.0)), 4.3, epsilon = 1e-9);
        assert_relative_eq!(sphere.distance_to(&Vec3::new(0.0, 0.0, 0.1)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cylinder_distance_approximation() {
        let sphere = unit_sphere();
        // Alongside: same as the sphere distance.
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(0.0, 0.0, 5.0)),
            4.3,
            epsilon = 1e-9
        );
        // Over the rim: distance to the top circle edge.
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(0.0, 3.0, 4.0)),
            4.0224,
            epsilon = 1e-4
        );
        // Directly over: vertical drop to the top cap.
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(0.0, 3.0, 0.0)),
            2.3,
            epsilon = 1e-9
        );
        // Below mirrors over.
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(0.0, -3.0, 4.0)),
            4.0224,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(0.0, -3.0, 0.0)),
            2.3,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cylinder_distance_off_origin() {
        let sphere = SphereCollider::new(Vec3::new(1.0, 2.0, 3.0), 0.7);
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(1.0, 2.0, 4.0)),
            0.3,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            sphere.upright_cylinder_distance(&Vec3::new(1.0, 2.1, 3.0)),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_is_far_from() {
        let sphere = SphereCollider::new(Vec3::new(1.0, 2.0, 3.0), 0.7);
        assert!(sphere.is_far_from(&Vec3::new(10.0, 7.0, 8.0), 1.7, 3.0));
        assert!(!sphere.is_far_from(&Vec3::new(1.0, 2.0, 4.0), 1.7, 3.0));
    }

    #[test]
    fn test_set_scale_uses_x_factor_only() {
        let mut sphere = unit_sphere();
        sphere.set_scale(Vec3::new(2.0, 10.0, 10.0));
        assert_relative_eq!(sphere.radius(), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = SphereCollider::new(Vec3::new(1.0, 2.0, 3.0), 0.7);
        let mut copy = original.clone();
        copy.set_position(Vec3::new(9.0, 9.0, 9.0));
        assert_relative_eq!(original.center(), Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(copy.center(), Vec3::new(9.0, 9.0, 9.0), epsilon = 1e-12);
    }
}
