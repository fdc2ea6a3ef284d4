//! Game rules: life, bird capture, session orchestration

pub mod bird;
pub mod life;
pub mod session;

pub use bird::{find_ray_target, roost, try_capture, CaptureOutcome, ChirpGate, BIRD_ROOSTS};
pub use life::{Life, FULL_LIFE};
pub use session::{GameSession, GameState, TickReport};
