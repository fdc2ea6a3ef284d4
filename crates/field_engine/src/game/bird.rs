//! Bird capture and proximity cues

use crate::foundation::math::Vec3;
use crate::physics::collision::Ray;
use crate::scene::{CollidableId, SceneColliders};

/// The positions the bird may roost at, one picked per round
pub const BIRD_ROOSTS: [[f64; 3]; 6] = [
    [0.7, 0.5, 4.5],
    [-24.0, 0.5, 5.0],
    [-3.0, 0.5, 11.0],
    [27.3, 2.75, 32.2],
    [-30.0, 0.5, -32.0],
    [-2.0, 0.5, -21.0],
];

/// How far past the capture distance the player must retreat before the
/// chirp cue re-arms
const CHIRP_REARM_MARGIN: f64 = 2.0;

/// Roost position by index, wrapping past the end of the table
pub fn roost(index: usize) -> Vec3 {
    let [x, y, z] = BIRD_ROOSTS[index % BIRD_ROOSTS.len()];
    Vec3::new(x, y, z)
}

/// Result of a capture attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The click selected the bird
    Captured,
    /// The click selected some other object
    WrongTarget(CollidableId),
    /// Nothing selectable within capture range
    Missed,
}

/// Nearest collidable the ray hits strictly inside `max_distance`.
///
/// Objects are tested in registration order; a later object only replaces
/// an earlier hit when strictly closer.
pub fn find_ray_target(
    scene: &SceneColliders,
    ray: &Ray,
    max_distance: f64,
) -> Option<(CollidableId, f64)> {
    let mut nearest: Option<(CollidableId, f64)> = None;

    for (id, collidable) in scene.iter() {
        if let Some(distance) = collidable.shape().intersect_ray(ray) {
            let closer = nearest.map_or(true, |(_, best)| distance < best);
            if distance < max_distance && closer {
                nearest = Some((id, distance));
            }
        }
    }

    nearest
}

/// Resolve a capture click: whichever object the ray selects decides the
/// outcome
pub fn try_capture(scene: &SceneColliders, ray: &Ray, max_distance: f64) -> CaptureOutcome {
    match find_ray_target(scene, ray, max_distance) {
        Some((id, _)) => {
            if scene.get(id).is_some_and(|collidable| collidable.is_bird()) {
                CaptureOutcome::Captured
            } else {
                CaptureOutcome::WrongTarget(id)
            }
        }
        None => CaptureOutcome::Missed,
    }
}

/// Hysteresis gate for the bird's chirp cue.
///
/// The cue fires once when the player comes within the trigger distance and
/// cannot fire again until the player has retreated past the trigger
/// distance plus a margin.
#[derive(Debug, Default)]
pub struct ChirpGate {
    chirping: bool,
}

impl ChirpGate {
    /// Creates a re-armed gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current bird distance; returns true when the chirp cue
    /// should start playing
    pub fn update(&mut self, bird_distance: f64, trigger_distance: f64) -> bool {
        if bird_distance < trigger_distance {
            if !self.chirping {
                self.chirping = true;
                return true;
            }
        } else if bird_distance > trigger_distance + CHIRP_REARM_MARGIN {
            self.chirping = false;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{prototypes, SceneKind};
    use approx::assert_relative_eq;

    fn scene_with_bird() -> (SceneColliders, CollidableId) {
        let mut scene = SceneColliders::new();
        prototypes::spawn_ground(&mut scene, 40.0);
        let bird = prototypes::spawn(&mut scene, SceneKind::Bird, roost(0));
        (scene, bird)
    }

    #[test]
    fn test_capture_within_range() {
        let (scene, _) = scene_with_bird();
        // Looking straight at the bird from two units away.
        let ray = Ray::new(Vec3::new(0.7, 0.5, 6.5), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(try_capture(&scene, &ray, 3.0), CaptureOutcome::Captured);
    }

    #[test]
    fn test_capture_out_of_range() {
        let (scene, _) = scene_with_bird();
        let ray = Ray::new(Vec3::new(0.7, 0.5, 9.5), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(try_capture(&scene, &ray, 3.0), CaptureOutcome::Missed);
    }

    #[test]
    fn test_click_on_an_obstacle_is_a_wrong_target() {
        let (mut scene, _) = scene_with_bird();
        let stump = prototypes::spawn(&mut scene, SceneKind::Stump, Vec3::new(10.0, 0.0, 10.0));
        // Aimed at the stump's trunk from within range.
        let ray = Ray::new(Vec3::new(10.0, 0.4, 11.5), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            try_capture(&scene, &ray, 3.0),
            CaptureOutcome::WrongTarget(stump)
        );
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut scene = SceneColliders::new();
        let near = prototypes::spawn(&mut scene, SceneKind::Stump, Vec3::new(0.0, 0.0, -1.0));
        let _far = prototypes::spawn(&mut scene, SceneKind::Stump, Vec3::new(0.0, 0.0, -2.5));

        let ray = Ray::new(Vec3::new(0.0, 0.4, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let (id, distance) = find_ray_target(&scene, &ray, 3.0).expect("hit");
        assert_eq!(id, near);
        assert!(distance < 1.0);
    }

    #[test]
    fn test_roost_wraps() {
        assert_relative_eq!(roost(0), roost(BIRD_ROOSTS.len()), epsilon = 1e-12);
    }

    #[test]
    fn test_chirp_gate_hysteresis() {
        let mut gate = ChirpGate::new();

        // First approach: fires once.
        assert!(gate.update(2.5, 3.0));
        assert!(!gate.update(2.0, 3.0));

        // Wandering just out of trigger range does not re-arm.
        assert!(!gate.update(4.0, 3.0));
        assert!(!gate.update(2.5, 3.0));

        // Retreating past the margin re-arms the cue.
        assert!(!gate.update(5.5, 3.0));
        assert!(gate.update(2.5, 3.0));
    }
}
