//! Scene collidables and obstacle archetypes

pub mod collidable;
pub mod prototypes;

pub use collidable::{Collidable, CollidableId, ObjectTags, SceneColliders};
pub use prototypes::{ground_slab, spawn, spawn_ground, spawn_scaled, SceneKind};
