//! Game session orchestration
//!
//! Ties the scene, the player, the life pool and the bird rules together
//! into the per-tick loop the application drives.

use super::bird::{try_capture, CaptureOutcome, ChirpGate};
use super::life::Life;
use crate::config::GameConfig;
use crate::physics::collision::Ray;
use crate::physics::movement::{MovementInput, PlayerController};
use crate::scene::{CollidableId, SceneColliders};

/// Whether the round is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The bird is still hidden
    Running,
    /// The bird has been captured
    Won,
}

/// What happened during one tick
#[derive(Debug, Default, Clone, Copy)]
pub struct TickReport {
    /// Number of harmful objects touched this tick
    pub harmful_contacts: usize,
    /// The bird chirp cue started this tick
    pub chirp_started: bool,
    /// The player ran out of life and respawned this tick
    pub died: bool,
}

/// One round of the bird hunt
#[derive(Debug)]
pub struct GameSession {
    scene: SceneColliders,
    player: PlayerController,
    life: Life,
    bird: CollidableId,
    chirp: ChirpGate,
    state: GameState,
    elapsed: f64,
    config: GameConfig,
}

impl GameSession {
    /// Creates a session over a prepared scene; `bird` must identify the
    /// capture target registered in it
    pub fn new(config: GameConfig, scene: SceneColliders, bird: CollidableId) -> Self {
        let player = PlayerController::new(config.clone());

        Self {
            scene,
            player,
            life: Life::new(),
            bird,
            chirp: ChirpGate::new(),
            state: GameState::Running,
            elapsed: 0.0,
            config,
        }
    }

    /// The player
    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    /// Remaining life
    pub fn life(&self) -> &Life {
        &self.life
    }

    /// Current round state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Seconds played so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The scene being played in
    pub fn scene(&self) -> &SceneColliders {
        &self.scene
    }

    /// Distance from the player's eyes to the bird
    pub fn bird_distance(&self) -> f64 {
        self.scene
            .get(self.bird)
            .map_or(f64::INFINITY, |bird| {
                bird.shape().distance_to(&self.player.position())
            })
    }

    /// Forward a jump request to the player
    pub fn jump(&mut self) {
        if self.state == GameState::Running {
            self.player.jump();
        }
    }

    /// Advance the round by `dt` seconds
    pub fn tick(&mut self, dt: f64, input: &MovementInput) -> TickReport {
        if self.state != GameState::Running {
            return TickReport::default();
        }

        let contacts = self.player.step(dt, input, &self.scene);
        let mut report = TickReport {
            harmful_contacts: contacts.harmful_contacts,
            ..TickReport::default()
        };

        if contacts.harmful_contacts > 0 {
            self.life.damage(
                dt * self.config.damage_per_second * contacts.harmful_contacts as f64,
            );
        }

        if self.life.is_depleted() {
            log::info!("player ran out of life, respawning at the start");
            self.player.reset();
            self.life.refill();
            report.died = true;
        }

        report.chirp_started = self
            .chirp
            .update(self.bird_distance(), self.config.capture_distance);
        if report.chirp_started {
            log::debug!("bird chirp cue started");
        }

        self.elapsed += dt;

        report
    }

    /// Resolve a capture click along `ray`
    pub fn click(&mut self, ray: &Ray) -> CaptureOutcome {
        if self.state != GameState::Running {
            return CaptureOutcome::Missed;
        }

        let outcome = try_capture(&self.scene, ray, self.config.capture_distance);

        if outcome == CaptureOutcome::Captured {
            log::info!("bird captured after {:.1} s", self.elapsed);
            self.state = GameState::Won;
        }

        outcome
    }
}
