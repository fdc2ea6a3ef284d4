//! # Field Engine
//!
//! Core of a first-person "find the hidden bird" field game: the player
//! roams a field under physics-like movement (drive forces, friction,
//! gravity, jumping) among static obstacles, hunting a bird that can be
//! captured with a ray-cast click.
//!
//! ## Features
//!
//! - **Collision geometry**: sphere, vertical cylinder and axis-aligned box
//!   shapes with distance queries, ray tests and sliding contact response
//! - **Body sampling**: the standing player tested as a stack of head, torso
//!   and foot sample points
//! - **Player movement**: force-based per-tick integration with jumping and
//!   a double jump
//! - **Game rules**: life and damage, bird capture, proximity cues
//!
//! Rendering, audio and input remain with the embedding application; the
//! engine consumes an eye position and key state, and hands back positions,
//! contacts and game events.
//!
//! ## Quick Start
//!
//! ```rust
//! use field_engine::prelude::*;
//!
//! let config = GameConfig::default();
//! let mut scene = SceneColliders::new();
//! spawn_ground(&mut scene, config.field_range);
//! spawn(&mut scene, SceneKind::Stump, Vec3::new(-1.0, 0.0, 9.0));
//! let bird = spawn(&mut scene, SceneKind::Bird, roost(0));
//!
//! let mut game = GameSession::new(config, scene, bird);
//! game.tick(1.0 / 60.0, &MovementInput::default());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod game;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::config::{Config, ConfigError, GameConfig};
    pub use crate::foundation::{
        math::{Vec2, Vec3},
        time::FrameClock,
    };
    pub use crate::game::{
        roost, CaptureOutcome, GameSession, GameState, Life, TickReport, BIRD_ROOSTS,
    };
    pub use crate::physics::{
        BodyContact, CollisionShape, ContactRegion, MovementInput, PlayerController, Ray,
    };
    pub use crate::scene::{
        spawn, spawn_ground, spawn_scaled, Collidable, CollidableId, ObjectTags, SceneColliders,
        SceneKind,
    };
}
