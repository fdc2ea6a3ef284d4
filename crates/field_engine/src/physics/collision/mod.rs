//! Narrow-phase collision geometry
//!
//! Collision shapes for the static field obstacles and the bird, queried once
//! per simulation tick against the standing player and against pick rays.
//! Shapes are plain values: constructed from a prototype template, cloned per
//! placed instance, repositioned and rescaled as their owning scene object
//! moves.

pub mod body;
pub mod cylinder;
pub mod parallelepiped;
pub mod ray;
mod response;
pub mod shape;
pub mod sphere;

pub use body::{BodyContact, ContactRegion};
pub use cylinder::CylinderCollider;
pub use parallelepiped::ParallelepipedCollider;
pub use ray::Ray;
pub use shape::CollisionShape;
pub use sphere::SphereCollider;

/// Distance at or below which a sampled body point counts as touching a surface
pub const DISTANCE_EPSILON: f64 = 0.2;

/// Tolerance used to decide which face of a shape a contact point lies on.
///
/// Currently exact; kept as a named constant so every face threshold stays
/// tunable in one place.
pub const SEPARATION_EPSILON: f64 = 0.0;

/// Distance reported by shapes that never collide
pub(crate) const NO_COLLISION_DISTANCE: f64 = 100_000.0;
