/// The invader block: synchronized horizontal steps, edge detection and descent.
///
/// The formation owns the one authoritative heading. Enemies carry no
/// direction of their own, so they can never drift out of step.

use serde::{Deserialize, Serialize};

use crate::entities::{Enemy, EnemyKind, Heading, ENEMY_HEIGHT, ENEMY_WIDTH};

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 11;
pub const GRID_ORIGIN_X: f32 = 50.0;
pub const GRID_ORIGIN_Y: f32 = 100.0;
pub const GRID_SPACING_X: f32 = 50.0;
pub const GRID_SPACING_Y: f32 = 40.0;

/// Horizontal distance per step at speed factor 1.0.
pub const STEP_PX: f32 = 5.0;
pub const BASE_MOVE_DELAY: u32 = 30;
pub const MIN_MOVE_DELAY: u32 = 5;
pub const MOVE_DELAY_PER_LEVEL: u32 = 2;
pub const SPEED_FACTOR_PER_LEVEL: f32 = 0.2;

/// What a formation step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormationStep {
    Idle,
    Shifted,
    Descended,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub enemies: Vec<Enemy>,
    pub heading: Heading,
    /// Ticks since the last step.
    pub move_timer: u32,
    /// Ticks between steps.
    pub move_delay: u32,
    pub speed_factor: f32,
}

impl Default for Formation {
    fn default() -> Self {
        Formation {
            enemies: build_grid(),
            heading: Heading::Right,
            move_timer: 0,
            move_delay: BASE_MOVE_DELAY,
            speed_factor: 1.0,
        }
    }
}

/// Row 0 is the squid row, rows 1-2 crabs, the rest octopi.
pub fn kind_for_row(row: usize) -> EnemyKind {
    match row {
        0 => EnemyKind::Squid,
        1 | 2 => EnemyKind::Crab,
        _ => EnemyKind::Octopus,
    }
}

/// A fresh 5x11 grid, top row first.
pub fn build_grid() -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(GRID_ROWS * GRID_COLS);
    for row in 0..GRID_ROWS {
        let kind = kind_for_row(row);
        for col in 0..GRID_COLS {
            enemies.push(Enemy::new(
                GRID_ORIGIN_X + col as f32 * GRID_SPACING_X,
                GRID_ORIGIN_Y + row as f32 * GRID_SPACING_Y,
                kind,
            ));
        }
    }
    enemies
}

/// `max(5, 30 - 2 * level)`.
pub fn move_delay_for_level(level: u32) -> u32 {
    BASE_MOVE_DELAY
        .saturating_sub(MOVE_DELAY_PER_LEVEL.saturating_mul(level))
        .max(MIN_MOVE_DELAY)
}

impl Formation {
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// True when some enemy touches the bound it is heading towards.
    pub fn at_edge(&self, screen_width: f32) -> bool {
        self.enemies.iter().any(|e| match self.heading {
            Heading::Right => e.x + ENEMY_WIDTH >= screen_width,
            Heading::Left => e.x <= 0.0,
        })
    }

    /// Count one tick; step the block when the delay elapses.
    pub fn advance_timer(&mut self, screen_width: f32) -> FormationStep {
        self.move_timer += 1;
        if self.move_timer < self.move_delay {
            return FormationStep::Idle;
        }
        self.move_timer = 0;
        self.step(screen_width)
    }

    /// Either descend and reverse, or shift everyone one step sideways.
    pub fn step(&mut self, screen_width: f32) -> FormationStep {
        if self.enemies.is_empty() {
            return FormationStep::Idle;
        }
        if self.at_edge(screen_width) {
            self.heading = self.heading.flipped();
            for enemy in &mut self.enemies {
                enemy.descend();
            }
            return FormationStep::Descended;
        }
        let dx = STEP_PX * self.speed_factor;
        for enemy in &mut self.enemies {
            enemy.advance(dx, self.heading);
        }
        FormationStep::Shifted
    }

    /// Repopulate for `level`, faster than before.
    pub fn next_level(&mut self, level: u32) {
        self.speed_factor += SPEED_FACTOR_PER_LEVEL;
        self.move_delay = move_delay_for_level(level);
        self.enemies = build_grid();
    }

    /// Largest bottom edge among surviving enemies.
    pub fn lowest_edge(&self) -> Option<f32> {
        self.enemies
            .iter()
            .map(|e| e.y + ENEMY_HEIGHT)
            .reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_floor() {
        assert_eq!(move_delay_for_level(1), 28);
        assert_eq!(move_delay_for_level(12), 6);
        assert_eq!(move_delay_for_level(13), 5);
        assert_eq!(move_delay_for_level(40), 5);
    }

    #[test]
    fn row_types() {
        let kinds: Vec<_> = (0..GRID_ROWS).map(kind_for_row).collect();
        assert_eq!(
            kinds,
            vec![
                EnemyKind::Squid,
                EnemyKind::Crab,
                EnemyKind::Crab,
                EnemyKind::Octopus,
                EnemyKind::Octopus,
            ]
        );
    }
}
