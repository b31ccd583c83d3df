//! Gameplay configuration loaded from an external RON file.
//!
//! Allows tweaking the world constants without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::animation::FrameTiming;
use super::error::ConfigError;

/// Default location of the gameplay configuration.
pub const CONFIG_PATH: &str = "assets/data/game.ron";

/// Gameplay configuration loaded from assets/data/game.ron.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // World
    pub world_width: f32,
    pub world_height: f32,
    pub cell_size: f32,
    // Bodies
    pub move_speed: f32,
    /// Collision box side as a fraction of the cell size
    pub entity_scale: f32,
    pub invulnerability_secs: f32,
    /// Enemy wander delay, sampled from `[min, max)`
    pub wander_interval: (f32, f32),
    // Animation
    pub animation_fps: f32,
    pub idle_frames: usize,
    pub run_frames: usize,
    pub pulse_rate: f32,
    pub pulse_amplitude: f32,
    // Rules
    pub initial_lives: u32,
    pub enemy_count: usize,
    pub hero_start: (i32, i32),
    // Audio
    pub music_track: String,
    pub hit_sound: String,
    /// Fixed RNG seed, mostly useful for reproducing a run
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            cell_size: 50.0,
            move_speed: 200.0,
            entity_scale: 0.6,
            invulnerability_secs: 1.2,
            wander_interval: (0.5, 1.5),
            animation_fps: 10.0,
            idle_frames: 12,
            run_frames: 8,
            pulse_rate: 5.0,
            pulse_amplitude: 0.05,
            initial_lives: 3,
            enemy_count: 5,
            hero_start: (4, 4),
            music_track: "time_for_adventure".to_string(),
            hit_sound: "kick".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the config from [`CONFIG_PATH`], falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::ReadError { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron(&contents, &path.display().to_string())
    }

    /// Parse and validate RON text. `origin` is only used in error messages.
    pub fn from_ron(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("cell_size", self.cell_size)?;
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("move_speed", self.move_speed)?;
        positive("entity_scale", self.entity_scale)?;
        positive("animation_fps", self.animation_fps)?;
        // A zero window would let several enemies hit in the same tick.
        positive("invulnerability_secs", self.invulnerability_secs)?;

        if self.columns() < 1 || self.rows() < 1 {
            return Err(ConfigError::Invalid {
                field: "cell_size",
                reason: "world is smaller than a single cell".to_string(),
            });
        }

        let (min, max) = self.wander_interval;
        if !(min > 0.0 && min < max) {
            return Err(ConfigError::Invalid {
                field: "wander_interval",
                reason: format!("expected 0 < min < max, got ({min}, {max})"),
            });
        }

        if self.idle_frames == 0 || self.run_frames == 0 {
            return Err(ConfigError::Invalid {
                field: "idle_frames/run_frames",
                reason: "frame counts must be at least 1".to_string(),
            });
        }

        let (x, y) = self.hero_start;
        if x < 0 || y < 0 || x >= self.columns() || y >= self.rows() {
            return Err(ConfigError::Invalid {
                field: "hero_start",
                reason: format!(
                    "({x}, {y}) is outside the {}x{} grid",
                    self.columns(),
                    self.rows()
                ),
            });
        }

        Ok(())
    }

    /// Number of grid columns.
    pub fn columns(&self) -> i32 {
        (self.world_width / self.cell_size).floor() as i32
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        (self.world_height / self.cell_size).floor() as i32
    }

    /// Side of the collision box shared by the hero and enemies.
    pub fn entity_size(&self) -> f32 {
        self.cell_size * self.entity_scale
    }

    pub fn frame_timing(&self) -> FrameTiming {
        FrameTiming {
            frames_per_second: self.animation_fps,
            idle_frames: self.idle_frames,
            run_frames: self.run_frames,
        }
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }
}

/// System to load the game config at startup.
pub fn load_game_config(mut commands: Commands) {
    let config = GameConfig::load();
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_16_by_12_grid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns(), 16);
        assert_eq!(config.rows(), 12);
        assert_eq!(config.entity_size(), 30.0);
    }

    #[test]
    fn partial_ron_keeps_defaults_for_missing_fields() {
        let config = GameConfig::from_ron("(enemy_count: 2, seed: Some(7))", "inline").unwrap();
        assert_eq!(config.enemy_count, 2);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.music_track, "time_for_adventure");
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = GameConfig::from_ron("(enemy_count: \"five\")", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn hero_outside_grid_is_rejected() {
        let err = GameConfig::from_ron("(hero_start: (16, 0))", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "hero_start", .. }));
    }

    #[test]
    fn inverted_wander_interval_is_rejected() {
        let err = GameConfig::from_ron("(wander_interval: (1.5, 0.5))", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "wander_interval", .. }));
    }

    #[test]
    fn zero_invulnerability_is_rejected() {
        let config = GameConfig {
            invulnerability_secs: 0.0,
            ..default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = GameConfig::load_from("assets/data/does_not_exist.ron").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn shipped_config_file_is_valid() {
        let config = GameConfig::load_from(CONFIG_PATH).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
