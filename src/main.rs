use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use tracing::{error, info};

use invaders::config::{parse_var, GameConfig};
use invaders::entities::{GameState, ENEMY_WIDTH, PLAYER_WIDTH};
use invaders::rng::RandomSource;
use invaders::snapshot::FrameSnapshot;
use invaders::{new_session_with, update, Action, GameError};

// ── Runner settings ───────────────────────────────────────────────────────────

/// Ticks per game before the runner gives up on it.
const DEFAULT_FRAMES: u64 = 3600;
const DEFAULT_GAMES: u32 = 1;

/// Log a snapshot every this many ticks.
const REPORT_EVERY: u64 = 600;

struct RunnerConfig {
    frames: u64,
    games: u32,
    seed: Option<u64>,
    /// Real-time pacing per tick; zero runs flat out.
    frame: Duration,
}

impl RunnerConfig {
    fn from_env() -> Result<Self, GameError> {
        let lookup = |key: &str| std::env::var(key).ok();
        Ok(Self {
            frames: parse_var(&lookup, "INVADERS_FRAMES")?.unwrap_or(DEFAULT_FRAMES),
            games: parse_var(&lookup, "INVADERS_GAMES")?.unwrap_or(DEFAULT_GAMES),
            seed: parse_var(&lookup, "INVADERS_SEED")?,
            frame: Duration::from_millis(parse_var(&lookup, "INVADERS_FRAME_MS")?.unwrap_or(0)),
        })
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

// ── Autopilot ─────────────────────────────────────────────────────────────────

/// Stand under the lowest enemy and keep firing.
fn autopilot(state: &GameState) -> Action {
    let target = state
        .enemies()
        .iter()
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|e| e.x + ENEMY_WIDTH / 2.0);
    let centre = state.player.x + PLAYER_WIDTH / 2.0;

    let action = match target {
        Some(x) if x < centre - 5.0 => Action::left(),
        Some(x) if x > centre + 5.0 => Action::right(),
        _ => Action::IDLE,
    };
    action.and_shoot()
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn play(
    game: u32,
    runner: &RunnerConfig,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> Result<GameState, GameError> {
    let mut state = new_session_with(config.clone())?;

    for _ in 0..runner.frames {
        let frame_start = Instant::now();

        let action = autopilot(&state);
        state = update(&state, &action, rng);

        if state.frame % REPORT_EVERY == 0 {
            let snap = FrameSnapshot::capture(&state);
            info!(
                game,
                frame = snap.frame,
                score = snap.score,
                level = snap.level,
                lives = snap.lives,
                enemies = snap.enemies.len(),
                "progress"
            );
        }
        if state.is_terminal() {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < runner.frame {
            thread::sleep(runner.frame - elapsed);
        }
    }
    Ok(state)
}

fn run(
    runner: &RunnerConfig,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> Result<(), GameError> {
    let mut best: u32 = 0;
    for game in 1..=runner.games {
        let state = play(game, runner, config, rng)?;
        best = best.max(state.score);
        info!(
            game,
            score = state.score,
            level = state.level,
            frames = state.frame,
            status = ?state.status,
            "game finished"
        );
    }
    info!(games = runner.games, best, "done");
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let result = GameConfig::from_env().and_then(|config| {
        let runner = RunnerConfig::from_env()?;
        match runner.seed {
            Some(seed) => run(&runner, &config, &mut StdRng::seed_from_u64(seed)),
            None => run(&runner, &config, &mut thread_rng()),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "runner failed");
            ExitCode::FAILURE
        }
    }
}
