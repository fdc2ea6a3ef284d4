//! Vertical cylinder collision shape

use super::body::{sample_standing_body, BodyContact, ContactRegion};
use super::ray::Ray;
use super::response::{axial_inside_normal, deflect_lateral};
use super::SEPARATION_EPSILON;
use crate::foundation::math::{hypot2, Vec3};

/// Collision shape of trunk-like obstacles (trees, stumps), standing upright
/// on the center of its bottom face
#[derive(Debug, Clone)]
pub struct CylinderCollider {
    base_center: Vec3,
    radius: f64,
    height: f64,
}

impl CylinderCollider {
    /// Creates a cylinder from the center of its bottom face, its radius and
    /// its height
    pub fn new(base_center: Vec3, radius: f64, height: f64) -> Self {
        Self {
            base_center,
            radius,
            height,
        }
    }

    /// Center of the bottom face
    pub fn base_center(&self) -> Vec3 {
        self.base_center
    }

    /// Radius of the circular faces
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Height of the cylinder
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Move the cylinder so its bottom-face center sits at `position`
    pub fn set_position(&mut self, position: Vec3) {
        self.base_center = position;
    }

    /// Rescale the cylinder: radius by the x factor, height by the y factor
    pub fn set_scale(&mut self, scale: Vec3) {
        self.radius *= scale.x;
        self.height *= scale.y;
    }

    fn is_point_inside(&self, point: &Vec3) -> bool {
        let planar = hypot2(point.x - self.base_center.x, point.z - self.base_center.z);

        planar <= self.radius
            && point.y >= self.base_center.y
            && point.y <= self.base_center.y + self.height
    }

    /// Exact minimum distance from `point` to the cylinder surface, `0.0`
    /// inside
    pub fn distance_to(&self, point: &Vec3) -> f64 {
        let planar = hypot2(point.x - self.base_center.x, point.z - self.base_center.z);

        if point.y < self.base_center.y {
            // below the bottom face
            if planar < self.radius {
                return (self.base_center.y - point.y).abs();
            }
            return hypot2(planar - self.radius, self.base_center.y - point.y);
        }

        if point.y > self.base_center.y + self.height {
            // over the top face
            if planar < self.radius {
                return (point.y - (self.base_center.y + self.height)).abs();
            }
            return hypot2(planar - self.radius, point.y - (self.base_center.y + self.height));
        }

        // alongside the lateral surface
        let from_border = planar - self.radius;

        if from_border < 0.0 {
            return 0.0;
        }

        from_border
    }

    /// Test whether the ray hits this cylinder.
    ///
    /// There is no cheap closed form for the entry point, so after the
    /// inside and behind fast paths the ray is probed at fixed sample
    /// distances; the reported distance is to the first inside sample.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        if self.is_point_inside(&ray.origin) {
            return Some(0.0);
        }

        if ray.is_behind(&self.base_center) {
            return None;
        }

        ray.march_until_inside(|point| self.is_point_inside(point))
    }

    /// Test the standing player against this cylinder
    pub fn check_body_collision(&self, eye: &Vec3, height: f64) -> Option<BodyContact> {
        sample_standing_body(eye, height, |point| self.distance_to(point))
    }

    /// Whether this cylinder is certainly not touching a body of the given
    /// allowance around `point`
    pub fn is_far_from(&self, point: &Vec3, body_allowance: f64, extra_allowance: f64) -> bool {
        (point - self.base_center).norm()
            > (self.radius + self.height) + body_allowance + extra_allowance
    }

    /// Remove from `vector` the component that would push the contact point
    /// further into the cylinder
    pub(crate) fn resolve(
        &self,
        vector: &Vec3,
        contact_point: &Vec3,
        region: ContactRegion,
    ) -> Vec3 {
        match region {
            ContactRegion::Body => self.lateral(vector, contact_point),
            ContactRegion::Feet => {
                if contact_point.y > self.base_center.y + self.height - SEPARATION_EPSILON {
                    // standing on the top face
                    if vector.y < 0.0 {
                        return Vec3::new(vector.x, 0.0, vector.z);
                    }
                    return *vector;
                }

                self.lateral(vector, contact_point)
            }
            ContactRegion::Head => {
                if contact_point.y < self.base_center.y + SEPARATION_EPSILON {
                    // bumping the bottom face
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
        let normal =
            axial_inside_normal(self.base_center.x, self.base_center.z, contact_point);
        deflect_lateral(vector, &normal)
    }
}
