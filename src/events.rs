/// Things that happened during one tick, in the order they happened.
///
/// The engine never plays sounds or draws; collaborators that do read these.

use serde::{Deserialize, Serialize};

use crate::entities::EnemyKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    PlayerFired,
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    UfoSpawned,
    UfoDestroyed { points: u32 },
    /// The saucer crossed the right edge unharmed.
    UfoEscaped,
    ShieldHit { shield: usize, owner_is_player: bool },
    PlayerHit { lives_left: u32 },
    FormationDescended,
    LevelCleared { new_level: u32 },
    GameOver,
    GameWon,
}
