/// Game entity types and their intrinsic per-entity behavior.
///
/// Anything that needs more than one entity at a time (formation stepping,
/// bullet resolution, level flow) lives in the other modules.

use serde::{Deserialize, Serialize};

use crate::collision::{collides, HasBounds, Rect};
use crate::config::GameConfig;
use crate::formation::Formation;
use crate::rng::RandomSource;

// ── Tuning ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 5.0;
/// Ticks between player shots.
pub const PLAYER_RELOAD_TICKS: u32 = 15;

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 40.0;

pub const BULLET_WIDTH: f32 = 3.0;
pub const BULLET_HEIGHT: f32 = 15.0;
pub const BULLET_SPEED: f32 = 10.0;

pub const SHIELD_WIDTH: f32 = 80.0;
pub const SHIELD_HEIGHT: f32 = 40.0;
pub const SEGMENT_SIZE: f32 = 10.0;
pub const SEGMENT_HEALTH: u8 = 2;
const SHIELD_ROWS: usize = 4;
const SHIELD_COLS: usize = 8;

pub const UFO_WIDTH: f32 = 70.0;
pub const UFO_HEIGHT: f32 = 30.0;
pub const UFO_SPEED: f32 = 2.0;
pub const UFO_Y: f32 = 40.0;
pub const UFO_REWARDS: [u32; 4] = [50, 100, 150, 300];

// ── Shared enums ─────────────────────────────────────────────────────────────

/// Horizontal travel direction of the formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Heading {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    GameOver,
    GameWon,
}

/// Enemy class, fixed by formation row. The tier drives points and fire rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Bottom two rows.
    Octopus,
    /// Middle two rows.
    Crab,
    /// Top row.
    Squid,
}

impl EnemyKind {
    pub fn tier(self) -> u32 {
        match self {
            EnemyKind::Octopus => 1,
            EnemyKind::Crab => 2,
            EnemyKind::Squid => 3,
        }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// Vertical sign of travel: player shots go up, enemy shots go down.
    pub fn direction(self) -> f32 {
        match self {
            BulletOwner::Player => -1.0,
            BulletOwner::Enemy => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn new(x: f32, y: f32, owner: BulletOwner) -> Self {
        Bullet { x, y, owner }
    }

    pub fn tick(&mut self) {
        self.y += BULLET_SPEED * self.owner.direction();
    }

    pub fn is_offscreen(&self, screen_height: f32) -> bool {
        self.y < 0.0 || self.y > screen_height
    }
}

impl HasBounds for Bullet {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// The player's cannon. Lives are tracked on the session, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Ticks left before the next shot is allowed.
    pub reload: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player { x, y, reload: 0 }
    }

    /// Step one unit of `PLAYER_SPEED` in `direction` (-1 or 1), then clamp.
    pub fn move_by(&mut self, direction: f32, screen_width: f32) {
        let max_x = (screen_width - PLAYER_WIDTH).max(0.0);
        self.x = (self.x + direction * PLAYER_SPEED).clamp(0.0, max_x);
    }

    /// Fire if reloaded. `None` means the cannon is still cooling down.
    pub fn shoot(&mut self) -> Option<Bullet> {
        if self.reload > 0 {
            return None;
        }
        self.reload = PLAYER_RELOAD_TICKS;
        Some(Bullet::new(
            self.x + (PLAYER_WIDTH - BULLET_WIDTH) / 2.0,
            self.y,
            BulletOwner::Player,
        ))
    }

    pub fn tick(&mut self) {
        self.reload = self.reload.saturating_sub(1);
    }
}

impl HasBounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

/// One invader. Its travel direction belongs to the formation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        Enemy { x, y, kind }
    }

    pub fn points(&self) -> u32 {
        10 * self.kind.tier()
    }

    pub fn shoot_chance(&self) -> f64 {
        0.001 * self.kind.tier() as f64
    }

    pub fn advance(&mut self, dx: f32, heading: Heading) {
        self.x += dx * heading.sign();
    }

    /// Drop half a body height.
    pub fn descend(&mut self) {
        self.y += (ENEMY_HEIGHT / 2.0).round();
    }

    /// One roll against `shoot_chance`; a hit spawns a shot at the bottom centre.
    pub fn maybe_shoot(&self, rng: &mut impl RandomSource) -> Option<Bullet> {
        if rng.next_f64() < self.shoot_chance() {
            Some(Bullet::new(
                self.x + (ENEMY_WIDTH - BULLET_WIDTH) / 2.0,
                self.y + ENEMY_HEIGHT,
                BulletOwner::Enemy,
            ))
        } else {
            None
        }
    }
}

impl HasBounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

// ── Shields ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShieldSegment {
    pub x: f32,
    pub y: f32,
    pub health: u8,
}

impl HasBounds for ShieldSegment {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SEGMENT_SIZE, SEGMENT_SIZE)
    }
}

/// A bunker made of independently destructible segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    pub x: f32,
    pub y: f32,
    pub segments: Vec<ShieldSegment>,
}

impl Shield {
    /// Full 8x4 grid minus the two outer cells of the top two rows.
    pub fn new(x: f32, y: f32) -> Self {
        let mut segments = Vec::with_capacity(SHIELD_ROWS * SHIELD_COLS);
        for row in 0..SHIELD_ROWS {
            for col in 0..SHIELD_COLS {
                let corner = row < 2 && (col == 0 || col == SHIELD_COLS - 1);
                if corner {
                    continue;
                }
                segments.push(ShieldSegment {
                    x: x + col as f32 * SEGMENT_SIZE,
                    y: y + row as f32 * SEGMENT_SIZE,
                    health: SEGMENT_HEALTH,
                });
            }
        }
        Shield { x, y, segments }
    }

    /// Let the first overlapping segment absorb `bullet`.
    ///
    /// Returns `true` when a segment took the hit. A segment whose health
    /// reaches zero is removed.
    pub fn resolve_hit(&mut self, bullet: &Bullet) -> bool {
        let Some(i) = self.segments.iter().position(|s| collides(s, bullet)) else {
            return false;
        };
        let segment = &mut self.segments[i];
        segment.health = segment.health.saturating_sub(1);
        if segment.health == 0 {
            self.segments.remove(i);
        }
        true
    }

    /// Sum of live segment health.
    pub fn health(&self) -> u32 {
        self.segments.iter().map(|s| s.health as u32).sum()
    }

    pub fn is_destroyed(&self) -> bool {
        self.segments.is_empty()
    }
}

impl HasBounds for Shield {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SHIELD_WIDTH, SHIELD_HEIGHT)
    }
}

// ── UFO ──────────────────────────────────────────────────────────────────────

/// The bonus saucer crossing the top of the screen left to right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ufo {
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub screen_width: f32,
}

impl Ufo {
    /// Parked and inactive.
    pub fn new(screen_width: f32) -> Self {
        Ufo {
            x: -UFO_WIDTH,
            y: UFO_Y,
            active: false,
            screen_width,
        }
    }

    /// Move right while active. Returns `true` on the tick it leaves the screen.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.x += UFO_SPEED;
        if self.x > self.screen_width {
            self.deactivate();
            return true;
        }
        false
    }

    /// Roll for a spawn. Only rolls while inactive; returns `true` on spawn.
    pub fn try_spawn(&mut self, chance: f64, rng: &mut impl RandomSource) -> bool {
        if self.active {
            return false;
        }
        if rng.next_f64() < chance {
            self.x = -UFO_WIDTH;
            self.active = true;
            return true;
        }
        false
    }

    /// Drawn at the moment of destruction.
    pub fn reward_value(&self, rng: &mut impl RandomSource) -> u32 {
        UFO_REWARDS[rng.pick_index(UFO_REWARDS.len())]
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.x = -UFO_WIDTH;
    }
}

impl HasBounds for Ufo {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, UFO_WIDTH, UFO_HEIGHT)
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire session. Cloneable so the tick entry point can hand back a
/// fresh value without touching its input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub ufo: Ufo,
    pub formation: Formation,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub shields: Vec<Shield>,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub status: GameStatus,
    pub paused: bool,
    /// Ticks actually simulated (paused and terminal ticks don't count).
    pub frame: u64,
    pub config: GameConfig,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn is_game_won(&self) -> bool {
        self.status == GameStatus::GameWon
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::Playing
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.formation.enemies
    }
}
