//! Data-driven game balance
//!
//! Every gameplay number lives here so a run can be retuned from a JSON file
//! without recompiling. Missing fields fall back to the defaults below.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Widest chunk a tuning file may ask for, in tiles
pub const MAX_CHUNK_WIDTH: f32 = 4096.0;
/// Most chunks generated ahead of the camera
pub const MAX_LOOKAHEAD: u32 = 16;
/// Most tiles a single chunk layer may hold
pub const MAX_CHUNK_CELLS: u64 = 1 << 20;

/// Player movement, stamina and camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub spawn: Vec2,
    pub size: Vec2,
    /// Horizontal acceleration per frame while grounded
    pub ground_accel: f32,
    /// Horizontal acceleration per frame while airborne (reduced air control)
    pub air_accel: f32,
    /// Vertical velocity applied on jump
    pub jump_velocity: f32,
    /// Vertical speed band around the apex that keeps the previous air state
    pub air_dead_band: f32,
    pub max_health: f32,
    pub max_stamina: f32,
    /// Seconds between stamina drains
    pub stamina_interval: f32,
    /// Camera never looks below this world height
    pub camera_min_y: f32,
    pub sprite_size: Vec2,
    pub sprite_offset_y: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(50.0, 10.0),
            size: Vec2::new(1.0, 2.0),
            ground_accel: 0.1,
            air_accel: 0.01,
            jump_velocity: 0.75,
            air_dead_band: 0.05,
            max_health: 100.0,
            max_stamina: 100.0,
            stamina_interval: 2.0,
            camera_min_y: 9.0,
            sprite_size: Vec2::new(2.0, 6.0),
            sprite_offset_y: 2.0,
        }
    }
}

/// Endless ground generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundTuning {
    /// Chunk width in world units (one tile per unit)
    pub chunk_width: f32,
    /// Chunks generated from the camera's chunk onward
    pub lookahead: u32,
    /// Solid rows per chunk
    pub ground_rows: u32,
    /// World y of the bottom row
    pub origin_y: f32,
}

impl Default for GroundTuning {
    fn default() -> Self {
        Self {
            chunk_width: 100.0,
            lookahead: 3,
            ground_rows: 5,
            origin_y: -1.0,
        }
    }
}

/// Compy pursuit behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PursuerTuning {
    pub spawn_xs: Vec<f32>,
    pub spawn_y: f32,
    pub size: Vec2,
    pub chase_speed: f32,
    /// Retreat speed as a multiple of chase speed
    pub retreat_factor: f32,
    /// Distances in (hold_min, hold_max] hold position in front of the player
    pub hold_min: f32,
    pub hold_max: f32,
    /// Attack when closer than this many body widths
    pub attack_range_factor: f32,
}

impl Default for PursuerTuning {
    fn default() -> Self {
        Self {
            spawn_xs: vec![40.0, 50.0, 60.0],
            spawn_y: 10.0,
            size: Vec2::new(1.0, 1.0),
            chase_speed: 0.08,
            retreat_factor: 1.5,
            hold_min: 9.0,
            hold_max: 10.0,
            attack_range_factor: 2.0,
        }
    }
}

/// World parameters consumed by the host stand-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Per-frame gravity
    pub gravity: Vec2,
    /// Horizontal velocity multiplier applied while on ground
    pub ground_friction: f32,
    /// Per-axis velocity clamp
    pub max_speed: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -0.05),
            ground_friction: 0.8,
            max_speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub ground: GroundTuning,
    pub pursuer: PursuerTuning,
    pub world: WorldTuning,
}

impl Tuning {
    /// Parse and validate tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation can't work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ground.chunk_width > 0.0) {
            return Err(ConfigError::invalid("ground.chunk_width", "must be positive"));
        }
        if !(self.ground.chunk_width <= MAX_CHUNK_WIDTH) {
            return Err(ConfigError::invalid(
                "ground.chunk_width",
                format!("must be at most {}", MAX_CHUNK_WIDTH),
            ));
        }
        if !(1..=MAX_LOOKAHEAD).contains(&self.ground.lookahead) {
            return Err(ConfigError::invalid(
                "ground.lookahead",
                format!("must be between 1 and {}", MAX_LOOKAHEAD),
            ));
        }
        if self.ground.ground_rows == 0 {
            return Err(ConfigError::invalid("ground.ground_rows", "must be at least 1"));
        }
        let cells = self.ground.chunk_width.ceil() as u64 * u64::from(self.ground.ground_rows);
        if cells > MAX_CHUNK_CELLS {
            return Err(ConfigError::invalid(
                "ground.ground_rows",
                format!("{} tiles per chunk exceeds {}", cells, MAX_CHUNK_CELLS),
            ));
        }
        if !(self.player.max_health > 0.0) {
            return Err(ConfigError::invalid("player.max_health", "must be positive"));
        }
        if !(self.player.max_stamina > 0.0) {
            return Err(ConfigError::invalid("player.max_stamina", "must be positive"));
        }
        if !(self.player.stamina_interval > 0.0) {
            return Err(ConfigError::invalid(
                "player.stamina_interval",
                "must be positive",
            ));
        }
        if self.pursuer.chase_speed < 0.0 {
            return Err(ConfigError::invalid("pursuer.chase_speed", "must not be negative"));
        }
        if self.pursuer.hold_min > self.pursuer.hold_max {
            return Err(ConfigError::invalid(
                "pursuer.hold_min",
                format!(
                    "{} is above hold_max {}",
                    self.pursuer.hold_min, self.pursuer.hold_max
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "pursuer": { "chase_speed": 0.1 } }"#).unwrap();
        assert_eq!(tuning.pursuer.chase_speed, 0.1);
        assert_eq!(tuning.pursuer.spawn_xs, vec![40.0, 50.0, 60.0]);
        assert_eq!(tuning.ground.chunk_width, 100.0);
    }

    #[test]
    fn test_rejects_zero_chunk_width() {
        let err = Tuning::from_json(r#"{ "ground": { "chunk_width": 0.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ground.chunk_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_oversized_chunk() {
        let err = Tuning::from_json(r#"{ "ground": { "chunk_width": 1e10 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ground.chunk_width",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "ground": { "lookahead": 4000000000 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ground.lookahead",
                ..
            }
        ));

        // Each bound alone is fine, together they blow the tile budget
        let err = Tuning::from_json(r#"{ "ground": { "chunk_width": 4096, "ground_rows": 1000 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ground.ground_rows",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_resource_pools() {
        for json in [
            r#"{ "player": { "max_health": 0.0 } }"#,
            r#"{ "player": { "max_stamina": -5.0 } }"#,
        ] {
            assert!(matches!(
                Tuning::from_json(json),
                Err(ConfigError::Invalid { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_inverted_hold_band() {
        let err =
            Tuning::from_json(r#"{ "pursuer": { "hold_min": 12.0, "hold_max": 10.0 } }"#)
                .unwrap_err();
        assert!(err.to_string().contains("hold_min"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
