/// The per-tick game loop.
///
/// `update` takes an immutable reference to the current `GameState`, an
/// action and an RNG handle, and returns a brand-new `GameState`. Side effects
/// are limited to the injected RNG.

use tracing::{debug, info};

use crate::action::Action;
use crate::bullets::{enemy_shooting, update_enemy_bullets, update_player_bullets};
use crate::entities::{GameState, GameStatus};
use crate::events::GameEvent;
use crate::formation::FormationStep;
use crate::rng::RandomSource;

/// Advance the simulation by one tick.
///
/// Terminal and paused states come back unchanged (bar an unpause request).
pub fn update(state: &GameState, action: &Action, rng: &mut impl RandomSource) -> GameState {
    update_with_events(state, action, rng).0
}

/// `update`, plus the events the tick produced.
pub fn update_with_events(
    state: &GameState,
    action: &Action,
    rng: &mut impl RandomSource,
) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    step(&mut next, action, rng, &mut events);
    (next, events)
}

/// In-place tick for callers that own the state outright.
pub fn step(
    state: &mut GameState,
    action: &Action,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) {
    if state.is_terminal() {
        return;
    }
    if action.toggle_pause {
        state.paused = !state.paused;
        debug!(paused = state.paused, "pause toggled");
        return;
    }
    if state.paused {
        return;
    }
    state.frame += 1;

    // ── 1. Player input ──────────────────────────────────────────────────────
    let width = state.config.screen_width;
    if action.move_left {
        state.player.move_by(-1.0, width);
    }
    if action.move_right {
        state.player.move_by(1.0, width);
    }
    if action.move_shoot {
        if let Some(bullet) = state.player.shoot() {
            state.player_bullets.push(bullet);
            events.push(GameEvent::PlayerFired);
        }
    }
    state.player.tick();

    // ── 2. UFO ───────────────────────────────────────────────────────────────
    if state.ufo.try_spawn(state.config.ufo_spawn_chance, rng) {
        debug!("ufo spawned");
        events.push(GameEvent::UfoSpawned);
    }
    if state.ufo.tick() {
        events.push(GameEvent::UfoEscaped);
    }

    // ── 3. Formation on its timer ────────────────────────────────────────────
    if state.formation.advance_timer(width) == FormationStep::Descended {
        debug!(heading = ?state.formation.heading, "formation descended");
        events.push(GameEvent::FormationDescended);
    }

    // ── 4. Bullets, then fresh enemy shots ───────────────────────────────────
    update_player_bullets(state, rng, events);
    update_enemy_bullets(state, events);
    enemy_shooting(state, rng);

    // ── 5. Level clear ───────────────────────────────────────────────────────
    if state.formation.is_empty() {
        state.level += 1;
        state.formation.next_level(state.level);
        info!(
            level = state.level,
            score = state.score,
            move_delay = state.formation.move_delay,
            "level cleared"
        );
        events.push(GameEvent::LevelCleared {
            new_level: state.level,
        });
        if state.config.win_level.is_some_and(|n| state.level > n) {
            state.status = GameStatus::GameWon;
        }
    }

    // ── 6. Terminal conditions ───────────────────────────────────────────────
    let invaded = state
        .formation
        .lowest_edge()
        .is_some_and(|bottom| bottom >= state.player.y);
    if invaded || state.lives == 0 {
        state.status = GameStatus::GameOver;
    }

    match state.status {
        GameStatus::GameOver => {
            info!(score = state.score, level = state.level, invaded, "game over");
            events.push(GameEvent::GameOver);
        }
        GameStatus::GameWon => {
            info!(score = state.score, level = state.level, "game won");
            events.push(GameEvent::GameWon);
        }
        GameStatus::Playing => {}
    }
}

/// Force the game over, e.g. when the player quits. Idempotent.
pub fn end_game(state: &GameState) -> GameState {
    if state.is_terminal() {
        return state.clone();
    }
    info!(score = state.score, level = state.level, "game ended early");
    GameState {
        status: GameStatus::GameOver,
        ..state.clone()
    }
}
