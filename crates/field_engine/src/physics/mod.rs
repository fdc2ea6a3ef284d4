//! Physics module for collision detection and player movement
//!
//! Narrow-phase collision geometry for the field obstacles, plus the
//! force-based first-person movement integration that consumes it.

pub mod collision;
pub mod movement;

pub use collision::{
    BodyContact, CollisionShape, ContactRegion, CylinderCollider, ParallelepipedCollider, Ray,
    SphereCollider,
};
pub use movement::{MovementInput, PlayerController, TickContacts};
