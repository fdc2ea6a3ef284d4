//! Obstacle archetypes and their collision templates
//!
//! Each archetype carries the collision template measured against its mesh.
//! Spawning clones a fresh shape from the template; instances never share a
//! prototype shape, so repositioning one object cannot drag another's
//! collider along.

use super::collidable::{Collidable, CollidableId, ObjectTags, SceneColliders};
use crate::foundation::math::Vec3;
use crate::physics::collision::CollisionShape;

/// Vertical extent of the ground collision slab
const GROUND_SLAB_HEIGHT: f64 = 1.0;

/// The obstacle archetypes that populate the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// Tall spruce tree
    Spruce,
    /// Bare dead tree
    DeadTree,
    /// Thin decorative spruce
    CircularSpruce,
    /// Short maritime pine
    MaritimePine,
    /// Cut tree stump, low enough to climb onto
    Stump,
    /// Decorative flower, never blocks movement
    Flower,
    /// Decorative plant, never blocks movement
    Plant,
    /// The hidden bird
    Bird,
    /// Large angular rock
    LargeRock,
    /// Medium rock
    MediumRock,
    /// Wide boulder, usually spawned scaled as a wall segment
    Boulder,
    /// Small rock
    SmallRock,
    /// Wooden sign
    Sign,
    /// Rotating windmill blade assembly; touching it hurts
    WindmillBlade,
}

impl SceneKind {
    /// A fresh collision shape for this archetype, positioned at the origin
    pub fn collision_template(self) -> CollisionShape {
        let origin = Vec3::zeros();

        match self {
            Self::Spruce => CollisionShape::cylinder(origin, 0.35, 4.38),
            Self::DeadTree => CollisionShape::cylinder(origin, 0.22, 4.41),
            Self::CircularSpruce => CollisionShape::cylinder(origin, 0.2, 4.38),
            Self::MaritimePine => CollisionShape::cylinder(origin, 0.32, 2.0),
            Self::Stump => CollisionShape::cylinder(origin, 0.7, 0.896),
            Self::Flower | Self::Plant => CollisionShape::None,
            Self::Bird => CollisionShape::sphere(origin, 0.5),
            Self::LargeRock => CollisionShape::parallelepiped(origin, 5.47 / 2.0, 6.24, 4.65 / 2.0),
            Self::MediumRock => CollisionShape::parallelepiped(origin, 4.67 / 2.0, 4.82, 4.25 / 2.0),
            Self::Boulder => CollisionShape::parallelepiped(origin, 6.92 / 2.0, 5.2, 5.33 / 2.0),
            Self::SmallRock => CollisionShape::parallelepiped(origin, 1.64 / 2.0, 1.27, 1.34 / 2.0),
            Self::Sign => CollisionShape::parallelepiped(origin, 0.7 / 2.0, 1.1844, 0.2 / 2.0),
            Self::WindmillBlade => CollisionShape::parallelepiped(origin, 0.5, 0.8, 0.5),
        }
    }

    /// Tag mask attached to instances of this archetype
    pub fn tags(self) -> u32 {
        match self {
            Self::WindmillBlade => ObjectTags::HARMFUL,
            Self::Bird => ObjectTags::BIRD,
            _ => ObjectTags::NONE,
        }
    }

    /// Display label for logs
    pub fn label(self) -> &'static str {
        match self {
            Self::Spruce => "spruce",
            Self::DeadTree => "dead tree",
            Self::CircularSpruce => "circular spruce",
            Self::MaritimePine => "maritime pine",
            Self::Stump => "stump",
            Self::Flower => "flower",
            Self::Plant => "plant",
            Self::Bird => "bird",
            Self::LargeRock => "large rock",
            Self::MediumRock => "medium rock",
            Self::Boulder => "boulder",
            Self::SmallRock => "small rock",
            Self::Sign => "sign",
            Self::WindmillBlade => "windmill blade",
        }
    }
}

/// Spawn an archetype instance at `position`
pub fn spawn(scene: &mut SceneColliders, kind: SceneKind, position: Vec3) -> CollidableId {
    spawn_scaled(scene, kind, position, Vec3::new(1.0, 1.0, 1.0))
}

/// Spawn an archetype instance at `position` with component-wise `scale`
/// applied to its collision template
pub fn spawn_scaled(
    scene: &mut SceneColliders,
    kind: SceneKind,
    position: Vec3,
    scale: Vec3,
) -> CollidableId {
    let mut shape = kind.collision_template();
    shape.set_scale(scale);
    shape.set_position(position);

    scene.insert(Collidable::new(shape, kind.tags(), kind.label()))
}

/// The ground collision slab: a flat box whose top face is the walkable
/// plane at y = 0, spanning `range` in each planar direction
pub fn ground_slab(range: f64) -> CollisionShape {
    CollisionShape::parallelepiped(
        Vec3::new(0.0, -GROUND_SLAB_HEIGHT, 0.0),
        range,
        GROUND_SLAB_HEIGHT,
        range,
    )
}

/// Register the ground slab in the scene
pub fn spawn_ground(scene: &mut SceneColliders, range: f64) -> CollidableId {
    scene.insert(Collidable::new(
        ground_slab(range),
        ObjectTags::NONE,
        "field",
    ))
}
