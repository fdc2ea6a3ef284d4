//! Body sampling for player-versus-shape collision
//!
//! The standing player is discretized into a vertical stack of sample points
//! below the eye position. Each point is tested against a shape's distance
//! function; the first point within [`DISTANCE_EPSILON`](super::DISTANCE_EPSILON)
//! of the surface decides the contact.

use super::DISTANCE_EPSILON;
use crate::foundation::math::Vec3;

/// Number of sample points the standing body is discretized into
pub(crate) const BODY_SAMPLE_COUNT: usize = 11;

/// Number of samples counted as feet, and likewise as head
pub(crate) const FOOT_SAMPLES: usize = 2;

/// Vertical band of the player that touched a surface.
///
/// The band constrains which contact directions are physically meaningful:
/// a head point collides from above or laterally, a body point only
/// laterally, a foot point from below or laterally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRegion {
    /// Topmost two sample points, at and just below the eye
    Head,
    /// The seven mid-torso sample points
    Body,
    /// Lowest two sample points
    Feet,
}

/// A confirmed player-versus-shape contact
#[derive(Debug, Clone, Copy)]
pub struct BodyContact {
    /// The sampled body point that registered the hit (not projected onto
    /// the surface)
    pub point: Vec3,
    /// Which vertical band of the body the point belongs to
    pub region: ContactRegion,
}

/// Run the body-sampling protocol against a shape's distance function.
///
/// Sample points live on the segment `[eye.y - height, eye.y]`, spaced
/// `height / 10` apart, all sharing the eye's x and z. Scan order is fixed:
/// the seven torso points first (bottom to top), then the two foot points,
/// then the two head points counted downward from the eye. The first point
/// within the touch epsilon wins, so a geometry reachable by several bands
/// always resolves to Body before Feet before Head.
pub(crate) fn sample_standing_body<F>(
    eye: &Vec3,
    height: f64,
    distance_to: F,
) -> Option<BodyContact>
where
    F: Fn(&Vec3) -> f64,
{
    let step = height / (BODY_SAMPLE_COUNT - 1) as f64;

    for i in FOOT_SAMPLES..=(BODY_SAMPLE_COUNT - 1) - FOOT_SAMPLES {
        let point = Vec3::new(eye.x, eye.y - height + i as f64 * step, eye.z);
        if distance_to(&point) <= DISTANCE_EPSILON {
            return Some(BodyContact {
                point,
                region: ContactRegion::Body,
            });
        }
    }

    for i in 0..FOOT_SAMPLES {
        let point = Vec3::new(eye.x, eye.y - height + i as f64 * step, eye.z);
        if distance_to(&point) <= DISTANCE_EPSILON {
            return Some(BodyContact {
                point,
                region: ContactRegion::Feet,
            });
        }
    }

    for i in 0..FOOT_SAMPLES {
        let point = Vec3::new(eye.x, eye.y - i as f64 * step, eye.z);
        if distance_to(&point) <= DISTANCE_EPSILON {
            return Some(BodyContact {
                point,
                region: ContactRegion::Head,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_hit_when_everything_is_far() {
        let eye = Vec3::new(0.0, 1.7, 0.0);
        let result = sample_standing_body(&eye, 1.7, |_| 10.0);
        assert!(result.is_none());
    }

    #[test]
    fn test_body_wins_when_every_point_touches() {
        // Distance function that reports contact for every sample, so the
        // scan order alone decides the region.
        let eye = Vec3::new(0.0, 1.7, 0.0);
        let contact = sample_standing_body(&eye, 1.7, |_| 0.0).expect("hit");
        assert_eq!(contact.region, ContactRegion::Body);
        // First torso point sits two steps above the feet.
        assert_relative_eq!(contact.point.y, 1.7 - 1.7 + 2.0 * 0.17, epsilon = 1e-12);
    }

    #[test]
    fn test_feet_win_over_head() {
        // Touch only the very lowest and very highest points.
        let eye = Vec3::new(0.0, 1.7, 0.0);
        let contact = sample_standing_body(&eye, 1.7, |p| {
            if p.y <= 0.01 || p.y >= 1.69 {
                0.0
            } else {
                10.0
            }
        })
        .expect("hit");
        assert_eq!(contact.region, ContactRegion::Feet);
        assert_relative_eq!(contact.point.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_head_points_count_down_from_the_eye() {
        let eye = Vec3::new(3.0, 10.0, -2.0);
        let contact = sample_standing_body(&eye, 1.7, |p| {
            if p.y >= 9.9 {
                0.0
            } else {
                10.0
            }
        })
        .expect("hit");
        assert_eq!(contact.region, ContactRegion::Head);
        assert_relative_eq!(contact.point.y, 10.0, epsilon = 1e-12);
        assert_relative_eq!(contact.point.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(contact.point.z, -2.0, epsilon = 1e-12);
    }
}
