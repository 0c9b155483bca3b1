pub mod action;
pub mod bullets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod formation;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use action::Action;
pub use compute::{end_game, update, update_with_events};
pub use entities::GameState;
pub use error::GameError;
pub use session::{new_session, new_session_with};
