/// The decoded input record for one tick.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Independent input flags; every flag defaults to off.
///
/// Left and right are applied one after the other, so holding both moves
/// the cannon out and back (a no-op away from the screen edges).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Action {
    pub move_left: bool,
    pub move_right: bool,
    pub move_shoot: bool,
    /// Flip the pause flag. Consumes the tick.
    pub toggle_pause: bool,
}

impl Action {
    pub const IDLE: Action = Action {
        move_left: false,
        move_right: false,
        move_shoot: false,
        toggle_pause: false,
    };

    pub fn left() -> Self {
        Action {
            move_left: true,
            ..Self::IDLE
        }
    }

    pub fn right() -> Self {
        Action {
            move_right: true,
            ..Self::IDLE
        }
    }

    pub fn shoot() -> Self {
        Action {
            move_shoot: true,
            ..Self::IDLE
        }
    }

    pub fn pause() -> Self {
        Action {
            toggle_pause: true,
            ..Self::IDLE
        }
    }

    pub fn and_shoot(self) -> Self {
        Action {
            move_shoot: true,
            ..self
        }
    }

    /// Decode a JSON action record such as `{"move_left": true}`.
    pub fn from_json(raw: &str) -> Result<Self, GameError> {
        serde_json::from_str(raw).map_err(|e| GameError::MalformedAction(e.to_string()))
    }
}
