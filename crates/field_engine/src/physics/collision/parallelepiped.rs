//! Axis-aligned box collision shape

use super::body::{sample_standing_body, BodyContact, ContactRegion};
use super::ray::Ray;
use super::response::deflect_full;
use super::SEPARATION_EPSILON;
use crate::foundation::math::{hypot2, hypot3, Vec3};

/// Collision shape of blocky obstacles (rocks, signs, the ground slab),
/// standing upright on the center of its bottom face
#[derive(Debug, Clone)]
pub struct ParallelepipedCollider {
    base_center: Vec3,
    half_width_x: f64,
    height: f64,
    half_width_z: f64,
}

impl ParallelepipedCollider {
    /// Creates a box from the center of its bottom face, its half widths
    /// along x and z, and its height
    pub fn new(base_center: Vec3, half_width_x: f64, height: f64, half_width_z: f64) -> Self {
        Self {
            base_center,
            half_width_x,
            height,
            half_width_z,
        }
    }

    /// Center of the bottom face
    pub fn base_center(&self) -> Vec3 {
        self.base_center
    }

    /// Half of the width along the x axis
    pub fn half_width_x(&self) -> f64 {
        self.half_width_x
    }

    /// Height of the box
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Half of the width along the z axis
    pub fn half_width_z(&self) -> f64 {
        self.half_width_z
    }

    /// Move the box so its bottom-face center sits at `position`
    pub fn set_position(&mut self, position: Vec3) {
        self.base_center = position;
    }

    /// Rescale the box: x half width, height, z half width by the
    /// corresponding scale components
    pub fn set_scale(&mut self, scale: Vec3) {
        self.half_width_x *= scale.x;
        self.height *= scale.y;
        self.half_width_z *= scale.z;
    }

    fn is_point_inside(&self, point: &Vec3) -> bool {
        point.x >= self.base_center.x - self.half_width_x
            && point.x <= self.base_center.x + self.half_width_x
            && point.z >= self.base_center.z - self.half_width_z
            && point.z <= self.base_center.z + self.half_width_z
            && point.y >= self.base_center.y
            && point.y <= self.base_center.y + self.height
    }

    /// Exact minimum distance from `point` to the box surface, `0.0` inside.
    ///
    /// Split by vertical band: above the top face, below the bottom face, or
    /// level with the box; each band then resolves against a face, an edge
    /// or a corner depending on where the point falls in the x-z plane.
    pub fn distance_to(&self, point: &Vec3) -> f64 {
        if point.y > self.base_center.y + self.height - SEPARATION_EPSILON {
            // over the top face
            return self.distance_past_cap(point, self.height);
        }

        if point.y < self.base_center.y + SEPARATION_EPSILON {
            // below the bottom face
            return self.distance_past_cap(point, 0.0);
        }

        self.distance_at_level(point)
    }

    /// Distance for a point over the top cap (`y_shift = height`) or below
    /// the bottom cap (`y_shift = 0`)
    fn distance_past_cap(&self, point: &Vec3, y_shift: f64) -> f64 {
        let cap_y = self.base_center.y + y_shift;

        if point.x > self.base_center.x + self.half_width_x - SEPARATION_EPSILON {
            // beyond the +x face
            if point.z > self.base_center.z - self.half_width_z {
                if point.z < self.base_center.z + self.half_width_z {
                    // facing the +x cap edge
                    return hypot2(
                        point.x - (self.base_center.x + self.half_width_x),
                        point.y - cap_y,
                    );
                }

                // +x / +z cap corner
                return hypot3(
                    point.x - (self.base_center.x + self.half_width_x),
                    point.y - cap_y,
                    point.z - (self.base_center.z + self.half_width_z),
                );
            }

            // +x / -z cap corner
            return hypot3(
                point.x - (self.base_center.x + self.half_width_x),
                point.y - cap_y,
                point.z - (self.base_center.z - self.half_width_z),
            );
        }

        if point.x < self.base_center.x - self.half_width_x + SEPARATION_EPSILON {
            // beyond the -x face
            if point.z > self.base_center.z - self.half_width_z {
                if point.z < self.base_center.z + self.half_width_z {
                    return hypot2(
                        point.x - (self.base_center.x - self.half_width_x),
                        point.y - cap_y,
                    );
                }

                return hypot3(
                    point.x - (self.base_center.x - self.half_width_x),
                    point.y - cap_y,
                    point.z - (self.base_center.z + self.half_width_z),
                );
            }

            return hypot3(
                point.x - (self.base_center.x - self.half_width_x),
                point.y - cap_y,
                point.z - (self.base_center.z - self.half_width_z),
            );
        }

        // within the x extent
        if point.z < self.base_center.z - self.half_width_z + SEPARATION_EPSILON {
            // facing the -z cap edge
            return hypot2(
                point.z - (self.base_center.z - self.half_width_z),
                point.y - cap_y,
            );
        }

        if point.z > self.base_center.z + self.half_width_z - SEPARATION_EPSILON {
            // facing the +z cap edge
            return hypot2(
                point.z - (self.base_center.z + self.half_width_z),
                point.y - cap_y,
            );
        }

        // directly past the cap
        (point.y - cap_y).abs()
    }

    /// Distance for a point level with the box (between the two caps)
    fn distance_at_level(&self, point: &Vec3) -> f64 {
        if point.x > self.base_center.x + self.half_width_x - SEPARATION_EPSILON {
            // beyond the +x face
            if point.z > self.base_center.z - self.half_width_z {
                if point.z < self.base_center.z + self.half_width_z {
                    return (point.x - (self.base_center.x + self.half_width_x)).abs();
                }

                return hypot2(
                    point.x - (self.base_center.x + self.half_width_x),
                    point.z - (self.base_center.z + self.half_width_z),
                );
            }

            return hypot2(
                point.x - (self.base_center.x + self.half_width_x),
                point.z - (self.base_center.z - self.half_width_z),
            );
        }

        if point.x < self.base_center.x - self.half_width_x + SEPARATION_EPSILON {
            // beyond the -x face
            if point.z > self.base_center.z - self.half_width_z {
                if point.z < self.base_center.z + self.half_width_z {
                    return (point.x - (self.base_center.x - self.half_width_x)).abs();
                }

                return hypot2(
                    point.x - (self.base_center.x - self.half_width_x),
                    point.z - (self.base_center.z + self.half_width_z),
                );
            }

            return hypot2(
                point.x - (self.base_center.x - self.half_width_x),
                point.z - (self.base_center.z - self.half_width_z),
            );
        }

        // within the x extent
        if point.z < self.base_center.z - self.half_width_z + SEPARATION_EPSILON {
            return (point.z - (self.base_center.z - self.half_width_z)).abs();
        }

        if point.z > self.base_center.z + self.half_width_z - SEPARATION_EPSILON {
            return (point.z - (self.base_center.z + self.half_width_z)).abs();
        }

        // the point is inside
        0.0
    }

    /// Test whether the ray hits this box.
    ///
    /// Same probing strategy as the cylinder: no closed form, fixed sample
    /// distances after the inside and behind fast paths.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        if self.is_point_inside(&ray.origin) {
            return Some(0.0);
        }

        if ray.is_behind(&self.base_center) {
            return None;
        }

        ray.march_until_inside(|point| self.is_point_inside(point))
    }

    /// Test the standing player against this box
    pub fn check_body_collision(&self, eye: &Vec3, height: f64) -> Option<BodyContact> {
        sample_standing_body(eye, height, |point| self.distance_to(point))
    }

    /// Whether this box is certainly not touching a body of the given
    /// allowance around `point`
    pub fn is_far_from(&self, point: &Vec3, body_allowance: f64, extra_allowance: f64) -> bool {
        (point - self.base_center).norm()
            > (self.half_width_x + self.half_width_z + self.height)
                + body_allowance
                + extra_allowance
    }

    /// Remove from `vector` the component that would push the contact point
    /// further into the box
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
                    return deflect_full(vector, &Vec3::new(0.0, -1.0, 0.0));
                }

                self.lateral(vector, contact_point)
            }
            ContactRegion::Head => {
                if contact_point.y < self.base_center.y + SEPARATION_EPSILON {
                    // bumping the bottom face
                    return deflect_full(vector, &Vec3::new(0.0, 1.0, 0.0));
                }

                self.lateral(vector, contact_point)
            }
        }
    }

    /// Lateral deflection against whichever face the contact point sits on,
    /// tested in fixed priority order. The downward default is kept from the
    /// original tuning: a contact matching no face falls through to it
    /// rather than picking an arbitrary lateral axis.
    fn lateral(&self, vector: &Vec3, contact_point: &Vec3) -> Vec3 {
        let mut inside_normal = Vec3::new(0.0, -1.0, 0.0);

        if contact_point.x > self.base_center.x + self.half_width_x - SEPARATION_EPSILON {
            // +x face
            inside_normal = Vec3::new(-1.0, 0.0, 0.0);
        } else if contact_point.x < self.base_center.x - self.half_width_x + SEPARATION_EPSILON {
            // -x face
            inside_normal = Vec3::new(1.0, 0.0, 0.0);
        } else if contact_point.z > self.base_center.z + self.half_width_z - SEPARATION_EPSILON {
            // +z face
            inside_normal = Vec3::new(0.0, 0.0, -1.0);
        } else if contact_point.z < self.base_center.z - self.half_width_z + SEPARATION_EPSILON {
            // -z face
            inside_normal = Vec3::new(0.0, 0.0, 1.0);
        }

        deflect_full(vector, &inside_normal)
    }
}
