//! Rays for picking and capture tests

use crate::foundation::math::Vec3;

/// Number of sample points probed along a ray when a shape has no closed-form
/// entry test
pub(crate) const MARCH_SAMPLES: u32 = 20;

/// Farthest distance probed along a ray, in world units; the capture range
/// never exceeds it
pub(crate) const MARCH_MAX_DISTANCE: f64 = 3.0;

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (unit length)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction.
    ///
    /// The direction is normalized here so intersection tests can assume
    /// unit length; it must not be the zero vector.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.norm_squared() > 0.0,
            "ray direction must be non-zero"
        );

        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Whether `reference` lies strictly behind the ray origin
    pub(crate) fn is_behind(&self, reference: &Vec3) -> bool {
        (reference - self.origin).dot(&self.direction) < 0.0
    }

    /// March sample points along the ray and return the straight-line
    /// distance from the origin to the first sample classified inside the
    /// shape.
    ///
    /// The returned distance is to the sample point, not to the true surface
    /// entry point; callers rely on that coarse value for range gating.
    pub(crate) fn march_until_inside<F>(&self, is_inside: F) -> Option<f64>
    where
        F: Fn(&Vec3) -> bool,
    {
        for step in 1..=MARCH_SAMPLES {
            let t = MARCH_MAX_DISTANCE * f64::from(step) / f64::from(MARCH_SAMPLES);
            let point = self.point_at(t);
            if is_inside(&point) {
                return Some((point - self.origin).norm());
            }
        }

        None
    }
}
