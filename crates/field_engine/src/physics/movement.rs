//! First-person player movement
//!
//! Force-based integration of the camera/player: drive forces from the
//! movement keys, kinetic friction, gravity, then a collision pass against
//! every nearby collidable before positions are advanced. The player's eyes
//! sit at the controller position; the body hangs `person_height` below it.

use crate::config::GameConfig;
use crate::foundation::math::{deg_to_rad, planar_norm, Vec3};
use crate::physics::collision::BodyContact;
use crate::scene::{CollidableId, SceneColliders};

/// Friction coefficient as a fraction of the drive force
const FRICTION_FACTOR: f64 = 0.7;

/// Widens the friction stop band beyond one friction impulse
const FRICTION_BAND_FACTOR: f64 = 0.2;

/// Key state driving one simulation tick
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementInput {
    /// Drive forward (W)
    pub forward: bool,
    /// Drive backward (S)
    pub backward: bool,
    /// Strafe left (A)
    pub strafe_left: bool,
    /// Strafe right (D)
    pub strafe_right: bool,
    /// Turn the compass left
    pub turn_left: bool,
    /// Turn the compass right
    pub turn_right: bool,
    /// Raise the look elevation
    pub look_up: bool,
    /// Lower the look elevation
    pub look_down: bool,
    /// Roll counterclockwise (Q)
    pub roll_left: bool,
    /// Roll clockwise (E)
    pub roll_right: bool,
}

impl MovementInput {
    fn any_drive(&self) -> bool {
        self.forward || self.backward || self.strafe_left || self.strafe_right
    }
}

/// Contacts gathered while stepping one tick
#[derive(Debug, Default)]
pub struct TickContacts {
    /// Every collidable touched this tick, in scene registration order
    pub contacts: Vec<(CollidableId, BodyContact)>,
    /// How many of those collidables are tagged harmful
    pub harmful_contacts: usize,
}

/// The player, integrated once per simulation tick
#[derive(Debug)]
pub struct PlayerController {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    compass_direction: f64,
    compass_velocity: f64,
    elevation: f64,
    elevation_velocity: f64,
    roll: f64,
    roll_velocity: f64,
    double_jump_used: bool,
    config: GameConfig,
}

impl PlayerController {
    /// Creates a player standing still at the configured start position
    pub fn new(config: GameConfig) -> Self {
        let position = config.start_position();

        Self {
            position,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            compass_direction: 0.0,
            compass_velocity: 0.0,
            elevation: 0.0,
            elevation_velocity: 0.0,
            roll: 0.0,
            roll_velocity: 0.0,
            double_jump_used: false,
            config,
        }
    }

    /// Eye/camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Compass heading in degrees
    pub fn compass_direction(&self) -> f64 {
        self.compass_direction
    }

    /// Look elevation in degrees
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Roll in degrees
    pub fn roll(&self) -> f64 {
        self.roll
    }

    /// Unit vector the player is looking along, from the compass heading and
    /// the elevation
    pub fn look_direction(&self) -> Vec3 {
        let heading = deg_to_rad(self.compass_direction);
        let elevation = deg_to_rad(self.elevation);

        Vec3::new(
            -heading.sin() * elevation.cos(),
            elevation.sin(),
            -heading.cos() * elevation.cos(),
        )
    }

    /// Put the player back at the start position, standing still
    pub fn reset(&mut self) {
        self.position = self.config.start_position();
        self.velocity = Vec3::zeros();
        self.acceleration = Vec3::zeros();
        self.compass_direction = 0.0;
        self.compass_velocity = 0.0;
        self.elevation = 0.0;
        self.elevation_velocity = 0.0;
        self.roll = 0.0;
        self.roll_velocity = 0.0;
        self.double_jump_used = false;
    }

    /// Try to jump.
    ///
    /// A grounded player (no vertical velocity or acceleration) always may;
    /// once airborne a single extra jump is allowed until the next landing.
    pub fn jump(&mut self) {
        if self.velocity.y == 0.0 && self.acceleration.y == 0.0 {
            self.double_jump_used = false;
            self.velocity.y = self.config.jump_velocity;
        } else if !self.double_jump_used {
            self.double_jump_used = true;
            self.velocity.y = self.config.jump_velocity;
        }
    }

    /// Signed planar speed along the facing direction
    fn front_velocity(&self) -> f64 {
        let speed = planar_norm(&self.velocity);
        let heading = deg_to_rad(self.compass_direction);

        if 0.0 < self.velocity.x * (-heading.sin()) + self.velocity.z * (-heading.cos()) {
            speed
        } else {
            -speed
        }
    }

    /// Signed planar speed along the facing direction rotated 90 degrees
    fn right_velocity(&self) -> f64 {
        let speed = planar_norm(&self.velocity);
        let heading = deg_to_rad(self.compass_direction);

        if 0.0 < self.velocity.x * heading.cos() + self.velocity.z * (-heading.sin()) {
            speed
        } else {
            -speed
        }
    }

    /// Drive force along the facing direction, gated by the speed cap
    fn front_force(&self, input: &MovementInput) -> Vec3 {
        let heading = deg_to_rad(self.compass_direction);
        let force = self.config.max_camera_force;
        let mut front = Vec3::zeros();

        if input.forward {
            if self.front_velocity() < self.config.max_camera_speed {
                front = Vec3::new(-force * heading.sin(), 0.0, -force * heading.cos());
            } else {
                front = Vec3::zeros();
            }
        }

        if input.backward {
            if self.front_velocity() > -self.config.max_camera_speed {
                front = Vec3::new(force * heading.sin(), 0.0, force * heading.cos());
            } else {
                front = Vec3::zeros();
            }
        }

        front
    }

    /// Drive force along the strafe direction, gated by the speed cap
    fn right_force(&self, input: &MovementInput) -> Vec3 {
        let heading = deg_to_rad(self.compass_direction);
        let force = self.config.max_camera_force;
        let mut right = Vec3::zeros();

        if input.strafe_left {
            if self.right_velocity() > -self.config.max_camera_speed {
                right = Vec3::new(-force * heading.cos(), 0.0, force * heading.sin());
            } else {
                right = Vec3::zeros();
            }
        }

        if input.strafe_right {
            if self.right_velocity() < self.config.max_camera_speed {
                right = Vec3::new(force * heading.cos(), 0.0, -force * heading.sin());
            } else {
                right = Vec3::zeros();
            }
        }

        right
    }

    /// Advance the player by `dt` seconds.
    ///
    /// Collidables are visited in scene registration order twice: once to
    /// gather contacts (skipping objects the far-away filter rejects), then
    /// again to apply force and velocity corrections cumulatively in the
    /// same order.
    pub fn step(&mut self, dt: f64, input: &MovementInput, scene: &SceneColliders) -> TickContacts {
        let friction_strength = self.config.max_camera_force * FRICTION_FACTOR;
        let friction_band = friction_strength * FRICTION_BAND_FACTOR;
        let mass = self.config.player_mass;

        let front_force = self.front_force(input);
        let right_force = self.right_force(input);

        let planar_speed = planar_norm(&self.velocity);
        let mut friction = Vec3::zeros();

        if planar_speed > (friction_strength + friction_band) / mass * dt {
            friction.x = -friction_strength * self.velocity.x / planar_speed;
            friction.z = -friction_strength * self.velocity.z / planar_speed;
        } else if !input.any_drive() {
            // Too slow for a full friction impulse and no key held: stop
            // instead of oscillating around zero.
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        }

        let gravity_force = mass * self.config.gravity_accel;

        let mut resulting_force = Vec3::new(
            front_force.x + right_force.x + friction.x,
            gravity_force,
            front_force.z + right_force.z + friction.z,
        );

        let mut tick = TickContacts::default();

        for (id, collidable) in scene.iter() {
            if collidable.shape().is_far_from(
                &self.position,
                self.config.person_height,
                self.config.collision_allowance,
            ) {
                continue;
            }

            if let Some(contact) = collidable
                .shape()
                .check_body_collision(&self.position, self.config.person_height)
            {
                if collidable.is_harmful() {
                    tick.harmful_contacts += 1;
                    log::debug!("touching harmful object {}", collidable.label());
                }
                tick.contacts.push((id, contact));
            }
        }

        for (id, contact) in &tick.contacts {
            if let Some(collidable) = scene.get(*id) {
                resulting_force = collidable.shape().contact_force(&resulting_force, contact);
                self.velocity = collidable.shape().contact_velocity(&self.velocity, contact);
            }
        }

        self.acceleration = resulting_force / mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        self.step_orientation(dt, input);

        tick
    }

    fn step_orientation(&mut self, dt: f64, input: &MovementInput) {
        self.compass_velocity = if input.turn_left {
            self.config.compass_speed
        } else if input.turn_right {
            -self.config.compass_speed
        } else {
            0.0
        };

        self.compass_direction += self.compass_velocity * dt;
        if self.compass_direction > 360.0 {
            self.compass_direction -= 360.0;
        } else if self.compass_direction < -360.0 {
            self.compass_direction += 360.0;
        }

        self.elevation_velocity = if input.look_up {
            self.config.elevation_speed
        } else if input.look_down {
            -self.config.elevation_speed
        } else {
            0.0
        };

        if (-self.config.max_elevation..=self.config.max_elevation).contains(&self.elevation) {
            self.elevation += self.elevation_velocity * dt;
        }
        self.elevation = self
            .elevation
            .clamp(-self.config.max_elevation, self.config.max_elevation);

        let roll_speed = self.config.roll_speed;

        if input.roll_left {
            self.roll_velocity = roll_speed;
        } else if input.roll_right {
            self.roll_velocity = -roll_speed;
        } else {
            // Recenter: run the roll back toward upright and snap the last
            // fraction of a step to exactly zero.
            let recenter_band = roll_speed * 0.1;
            if self.roll > (roll_speed + recenter_band) * dt {
                self.roll_velocity = -roll_speed;
            } else if self.roll < -(roll_speed + recenter_band) * dt {
                self.roll_velocity = roll_speed;
            } else {
                self.roll_velocity = 0.0;
                self.roll = 0.0;
            }
        }

        if (-self.config.max_roll..=self.config.max_roll).contains(&self.roll) {
            self.roll += self.roll_velocity * dt;
        }
        self.roll = self.roll.clamp(-self.config.max_roll, self.config.max_roll);
    }
}
