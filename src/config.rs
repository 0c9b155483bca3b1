use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::PLAYER_WIDTH;
use crate::error::GameError;

pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 600.0;
pub const DEFAULT_UFO_SPAWN_CHANCE: f64 = 0.002;

// Gameplay settings read at runtime. Fixed entity tuning lives with the entities.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Per-tick spawn probability while the saucer is parked.
    pub ufo_spawn_chance: f64,
    /// Clearing this level wins the game. `None` means play until game over.
    pub win_level: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            ufo_spawn_chance: DEFAULT_UFO_SPAWN_CHANCE,
            win_level: None,
        }
    }
}

impl GameConfig {
    pub fn with_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let (w, h) = (self.screen_width, self.screen_height);
        if !w.is_finite() || !h.is_finite() || w < PLAYER_WIDTH || h <= 0.0 {
            return Err(GameError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        if !(0.0..=1.0).contains(&self.ufo_spawn_chance) {
            return Err(GameError::InvalidChance {
                name: "ufo_spawn_chance",
                value: self.ufo_spawn_chance,
            });
        }
        Ok(())
    }

    /// Read overrides from `INVADERS_*` environment variables.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with a caller-supplied variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let defaults = Self::default();
        let config = Self {
            screen_width: parse_var(&lookup, "INVADERS_SCREEN_WIDTH")?
                .unwrap_or(defaults.screen_width),
            screen_height: parse_var(&lookup, "INVADERS_SCREEN_HEIGHT")?
                .unwrap_or(defaults.screen_height),
            ufo_spawn_chance: parse_var(&lookup, "INVADERS_UFO_CHANCE")?
                .unwrap_or(defaults.ufo_spawn_chance),
            win_level: parse_var(&lookup, "INVADERS_WIN_LEVEL")?.or(defaults.win_level),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Absent or blank is `None`; present but unparseable is an error.
pub fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, GameError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| GameError::InvalidConfig {
                key: key.to_string(),
                value: raw,
            }),
    }
}
