//! Bullet Barrage entry point
//!
//! Native builds run the simulation headless: a scripted pilot drives the
//! player while every frame is recorded into a draw list, the way a
//! windowed host would before uploading it.

use bullet_barrage::Settings;
use bullet_barrage::renderer::DrawList;
use bullet_barrage::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Frames per sweep across the screen
const SWEEP_FRAMES: u64 = 90;
/// Focus is held for this many frames out of every 120
const FOCUS_FRAMES: u64 = 40;

/// Scripted pilot: max power, fire held, sweeping side to side
fn autoplay_input(frame: u64) -> TickInput {
    let sweeping_right = (frame / SWEEP_FRAMES) % 2 == 0;
    TickInput {
        left: !sweeping_right,
        right: sweeping_right,
        focus: frame % 120 < FOCUS_FRAMES,
        fire: true,
        select_power_3: frame == 0,
        ..Default::default()
    }
}

#[derive(Debug, Default)]
struct RunStats {
    frames: u64,
    shots: usize,
    bursts: usize,
    enemy_hits: usize,
    enemy_killed_at: Option<u64>,
    peak_triangles: usize,
}

fn run(settings: &Settings, seed: u64) -> (GameState, RunStats) {
    let viewport = settings.viewport();
    let dt = settings.frame_dt();
    let mut state = GameState::new(seed);
    let mut canvas = DrawList::new();
    let mut stats = RunStats::default();

    for frame in 0..settings.max_frames {
        let input = if settings.autoplay {
            autoplay_input(frame)
        } else {
            TickInput::default()
        };
        tick(&mut state, &input, &viewport, &mut canvas, dt);
        stats.frames = frame + 1;
        stats.peak_triangles = stats.peak_triangles.max(canvas.triangle_count());

        for event in &state.events {
            match event {
                GameEvent::Shot { count } => stats.shots += count,
                GameEvent::Burst { .. } => stats.bursts += 1,
                GameEvent::EnemyHit { .. } => stats.enemy_hits += 1,
                GameEvent::EnemyKilled => {
                    stats.enemy_hits += 1;
                    stats.enemy_killed_at = Some(frame);
                }
                GameEvent::PlayerKilled => {
                    log::info!("Player died on frame {}", frame);
                }
            }
        }

        if state.phase() == GamePhase::GameOver {
            break;
        }
    }

    (state, stats)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bullet Barrage (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Game initialized with seed: {}", seed);

    let (state, stats) = run(&settings, seed);

    log::info!(
        "Finished after {} frames ({:?}): {} shots, {} bursts, {} enemy hits",
        stats.frames,
        state.phase(),
        stats.shots,
        stats.bursts,
        stats.enemy_hits
    );
    log::info!(
        "Enemy health {:.0}, peak {} triangles per frame",
        state.enemy.health,
        stats.peak_triangles
    );
    if let Some(frame) = stats.enemy_killed_at {
        log::info!("Enemy destroyed on frame {}", frame);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `tick` itself
}
