/// Projectile passes: advance, resolve hits, cull, and enemy shot generation.
///
/// Each pass takes the whole bullet list out of the state, walks it once and
/// puts back only the survivors, so a bullet removed mid-pass can never be
/// visited twice and an enemy removed by one bullet is gone for the next.
/// Per bullet the order is fixed: enemy, then UFO, then shields, then culling.

use tracing::debug;

use crate::collision::collides;
use crate::entities::{Bullet, GameState, Shield};
use crate::events::GameEvent;
use crate::rng::RandomSource;

/// First shield that absorbs `bullet`, if any.
fn absorb(shields: &mut [Shield], bullet: &Bullet) -> Option<usize> {
    shields.iter_mut().position(|s| s.resolve_hit(bullet))
}

pub fn update_player_bullets(
    state: &mut GameState,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) {
    let screen_height = state.config.screen_height;
    let bullets = std::mem::take(&mut state.player_bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for mut bullet in bullets {
        bullet.tick();

        let enemies = &mut state.formation.enemies;
        if let Some(i) = enemies.iter().position(|e| collides(&bullet, e)) {
            let enemy = enemies.remove(i);
            let points = enemy.points();
            state.score += points;
            events.push(GameEvent::EnemyDestroyed {
                kind: enemy.kind,
                points,
            });
            continue;
        }

        if state.ufo.active && collides(&bullet, &state.ufo) {
            let points = state.ufo.reward_value(rng);
            state.ufo.deactivate();
            state.score += points;
            debug!(points, "ufo destroyed");
            events.push(GameEvent::UfoDestroyed { points });
            continue;
        }

        if let Some(shield) = absorb(&mut state.shields, &bullet) {
            events.push(GameEvent::ShieldHit {
                shield,
                owner_is_player: true,
            });
            continue;
        }

        if bullet.is_offscreen(screen_height) {
            continue;
        }
        survivors.push(bullet);
    }

    state.player_bullets = survivors;
}

pub fn update_enemy_bullets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let screen_height = state.config.screen_height;
    let bullets = std::mem::take(&mut state.enemy_bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for mut bullet in bullets {
        bullet.tick();

        if collides(&bullet, &state.player) {
            state.lives = state.lives.saturating_sub(1);
            debug!(lives = state.lives, "player hit");
            events.push(GameEvent::PlayerHit {
                lives_left: state.lives,
            });
            continue;
        }

        if let Some(shield) = absorb(&mut state.shields, &bullet) {
            events.push(GameEvent::ShieldHit {
                shield,
                owner_is_player: false,
            });
            continue;
        }

        if bullet.is_offscreen(screen_height) {
            continue;
        }
        survivors.push(bullet);
    }

    state.enemy_bullets = survivors;
}

/// Every surviving enemy rolls once; hits are queued for the next bullet pass.
pub fn enemy_shooting(state: &mut GameState, rng: &mut impl RandomSource) -> usize {
    let before = state.enemy_bullets.len();
    for enemy in &state.formation.enemies {
        if let Some(bullet) = enemy.maybe_shoot(rng) {
            state.enemy_bullets.push(bullet);
        }
    }
    state.enemy_bullets.len() - before
}
