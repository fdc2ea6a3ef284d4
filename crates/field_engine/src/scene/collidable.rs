//! Collidable scene objects
//!
//! Pairs a collision shape with just enough identity for the game rules:
//! a tag mask and a display label. The registry hands out stable ids and
//! iterates in registration order; contact corrections from simultaneous
//! touches compose sequentially in that order, so it must not change
//! between the gather pass and the response pass.

use crate::physics::collision::CollisionShape;
use crate::foundation::math::Vec3;

/// Tag definitions for collidable objects
pub struct ObjectTags;

impl ObjectTags {
    /// No tags
    pub const NONE: u32 = 0;

    /// Touching this object damages the player
    pub const HARMFUL: u32 = 1 << 0;

    /// This object is the capture target
    pub const BIRD: u32 = 1 << 1;
}

/// Handle to a collidable registered in a [`SceneColliders`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollidableId(usize);

/// A scene object that participates in collision queries
#[derive(Debug, Clone)]
pub struct Collidable {
    shape: CollisionShape,
    tags: u32,
    label: &'static str,
}

impl Collidable {
    /// Creates a collidable from a shape, a tag mask and a label
    pub fn new(shape: CollisionShape, tags: u32, label: &'static str) -> Self {
        Self { shape, tags, label }
    }

    /// The collision shape
    pub fn shape(&self) -> &CollisionShape {
        &self.shape
    }

    /// Mutable access to the collision shape
    pub fn shape_mut(&mut self) -> &mut CollisionShape {
        &mut self.shape
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether touching this object hurts the player
    pub fn is_harmful(&self) -> bool {
        self.tags & ObjectTags::HARMFUL != 0
    }

    /// Whether this object is the capture target
    pub fn is_bird(&self) -> bool {
        self.tags & ObjectTags::BIRD != 0
    }

    /// Move the object (forwards to the shape)
    pub fn set_position(&mut self, position: Vec3) {
        self.shape.set_position(position);
    }

    /// Rescale the object (forwards to the shape)
    pub fn set_scale(&mut self, scale: Vec3) {
        self.shape.set_scale(scale);
    }
}

/// Registry of every collidable in the scene
#[derive(Debug, Default)]
pub struct SceneColliders {
    objects: Vec<Collidable>,
}

impl SceneColliders {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collidable, returning its id
    pub fn insert(&mut self, collidable: Collidable) -> CollidableId {
        let id = CollidableId(self.objects.len());
        self.objects.push(collidable);
        id
    }

    /// Look up a collidable by id
    pub fn get(&self, id: CollidableId) -> Option<&Collidable> {
        self.objects.get(id.0)
    }

    /// Look up a collidable mutably by id
    pub fn get_mut(&mut self, id: CollidableId) -> Option<&mut Collidable> {
        self.objects.get_mut(id.0)
    }

    /// Iterate all collidables in registration order
    pub fn iter(&self) -> impl Iterator<Item = (CollidableId, &Collidable)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, collidable)| (CollidableId(index), collidable))
    }

    /// Number of registered collidables
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        let blade = Collidable::new(CollisionShape::None, ObjectTags::HARMFUL, "blade");
        assert!(blade.is_harmful());
        assert!(!blade.is_bird());

        let bird = Collidable::new(CollisionShape::None, ObjectTags::BIRD, "bird");
        assert!(bird.is_bird());
        assert!(!bird.is_harmful());
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut scene = SceneColliders::new();
        scene.insert(Collidable::new(CollisionShape::None, ObjectTags::NONE, "a"));
        scene.insert(Collidable::new(CollisionShape::None, ObjectTags::NONE, "b"));
        scene.insert(Collidable::new(CollisionShape::None, ObjectTags::NONE, "c"));

        let labels: Vec<&str> = scene.iter().map(|(_, c)| c.label()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_by_id() {
        let mut scene = SceneColliders::new();
        let id = scene.insert(Collidable::new(CollisionShape::None, ObjectTags::BIRD, "bird"));
        assert!(scene.get(id).expect("present").is_bird());
    }
}
