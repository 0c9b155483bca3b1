/// Read-only view of a `GameState` for the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::collision::{HasBounds, Rect};
use crate::entities::{EnemyKind, GameState};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemySprite {
    pub rect: Rect,
    pub kind: EnemyKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentSprite {
    pub rect: Rect,
    pub health: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub player: Rect,
    pub enemies: Vec<EnemySprite>,
    pub player_bullets: Vec<Rect>,
    pub enemy_bullets: Vec<Rect>,
    pub shield_segments: Vec<SegmentSprite>,
    /// Present only while the saucer is on screen.
    pub ufo: Option<Rect>,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub game_over: bool,
    pub game_won: bool,
    pub paused: bool,
    pub frame: u64,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        FrameSnapshot {
            player: state.player.bounds(),
            enemies: state
                .enemies()
                .iter()
                .map(|e| EnemySprite {
                    rect: e.bounds(),
                    kind: e.kind,
                })
                .collect(),
            player_bullets: state.player_bullets.iter().map(|b| b.bounds()).collect(),
            enemy_bullets: state.enemy_bullets.iter().map(|b| b.bounds()).collect(),
            shield_segments: state
                .shields
                .iter()
                .flat_map(|s| &s.segments)
                .map(|seg| SegmentSprite {
                    rect: seg.bounds(),
                    health: seg.health,
                })
                .collect(),
            ufo: state.ufo.active.then(|| state.ufo.bounds()),
            score: state.score,
            level: state.level,
            lives: state.lives,
            game_over: state.is_game_over(),
            game_won: state.is_game_won(),
            paused: state.paused,
            frame: state.frame,
        }
    }
}
