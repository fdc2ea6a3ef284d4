//! Configuration system

pub use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Game tuning parameters.
///
/// Defaults reproduce the values the collision and movement behavior was
/// balanced against; the capture distance in particular is coupled to the
/// coarse ray-intersection distances and should not be raised casually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Height of the player; the eyes sit at the top of this span
    pub person_height: f64,
    /// Where the player starts and respawns
    pub start_position: [f64; 3],
    /// Largest drive force along one direction (front or right)
    pub max_camera_force: f64,
    /// Planar speed cap per drive direction
    pub max_camera_speed: f64,
    /// Mass of the player, dividing forces into accelerations
    pub player_mass: f64,
    /// Vertical gravitational acceleration (negative is down)
    pub gravity_accel: f64,
    /// Upward velocity granted by a jump
    pub jump_velocity: f64,
    /// Turn rate from the turn keys, degrees per second
    pub compass_speed: f64,
    /// Look up/down rate, degrees per second
    pub elevation_speed: f64,
    /// Roll rate, degrees per second
    pub roll_speed: f64,
    /// Elevation clamp, degrees either side of level
    pub max_elevation: f64,
    /// Roll clamp, degrees either side of upright
    pub max_roll: f64,
    /// Farthest distance at which a click can capture the bird
    pub capture_distance: f64,
    /// Extra margin added to the far-away rejection test
    pub collision_allowance: f64,
    /// Half extent of the walkable field
    pub field_range: f64,
    /// Life drained per second while touching a harmful object
    pub damage_per_second: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            person_height: 1.7,
            start_position: [-10.0, 1.7 + 0.2, 25.0],
            max_camera_force: 400.0,
            max_camera_speed: 5.0,
            player_mass: 70.0,
            gravity_accel: -9.81,
            jump_velocity: 5.0,
            compass_speed: 80.0,
            elevation_speed: 80.0,
            roll_speed: 80.0,
            max_elevation: 75.0,
            max_roll: 10.0,
            capture_distance: 3.0,
            collision_allowance: 3.0,
            field_range: 40.0,
            damage_per_second: 30.0,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Start position as a vector
    pub fn start_position(&self) -> Vec3 {
        Vec3::new(
            self.start_position[0],
            self.start_position[1],
            self.start_position[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_original_tuning() {
        let config = GameConfig::default();
        assert_relative_eq!(config.person_height, 1.7, epsilon = 1e-12);
        assert_relative_eq!(config.capture_distance, 3.0, epsilon = 1e-12);
        assert_relative_eq!(config.gravity_accel, -9.81, epsilon = 1e-12);
        assert_relative_eq!(config.start_position().y, 1.9, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: GameConfig = toml::from_str("jump_velocity = 7.5\n").expect("parse");
        assert_relative_eq!(config.jump_velocity, 7.5, epsilon = 1e-12);
        assert_relative_eq!(config.max_camera_force, 400.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let result = GameConfig::default().save_to_file("tuning.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
