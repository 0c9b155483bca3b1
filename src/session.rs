/// Builds a fresh game: player, parked UFO, full formation, four shields.

use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, Player, Shield, Ufo};
use crate::error::GameError;
use crate::formation::Formation;

pub const STARTING_LIVES: u32 = 3;
pub const SHIELD_COUNT: usize = 4;

/// Player row sits this far above the bottom of the screen.
const PLAYER_BOTTOM_OFFSET: f32 = 50.0;
/// Shield row sits this far above the bottom of the screen.
const SHIELD_BOTTOM_OFFSET: f32 = 150.0;

/// New session with default tuning on a `width` x `height` screen.
pub fn new_session(width: f32, height: f32) -> Result<GameState, GameError> {
    new_session_with(GameConfig::with_screen(width, height))
}

pub fn new_session_with(config: GameConfig) -> Result<GameState, GameError> {
    config.validate()?;
    let width = config.screen_width;
    let height = config.screen_height;
    debug!(width, height, "new session");

    Ok(GameState {
        player: Player::new(width / 2.0, height - PLAYER_BOTTOM_OFFSET),
        ufo: Ufo::new(width),
        formation: Formation::default(),
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        shields: build_shields(width, height),
        score: 0,
        level: 1,
        lives: STARTING_LIVES,
        status: GameStatus::Playing,
        paused: false,
        frame: 0,
        config,
    })
}

/// Shields start at an eighth of the width and sit a fifth of the width apart.
pub fn build_shields(width: f32, height: f32) -> Vec<Shield> {
    let start_x = width / 8.0;
    let spacing = width / 5.0;
    let y = height - SHIELD_BOTTOM_OFFSET;
    (0..SHIELD_COUNT)
        .map(|i| Shield::new(start_x + i as f32 * spacing, y))
        .collect()
}
