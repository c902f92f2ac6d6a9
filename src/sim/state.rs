//! Game state and core simulation types
//!
//! Player and enemy each own their projectiles; the only cross-talk is the
//! read-only collision queries made by the tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::Player;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player died; terminal
    GameOver,
}

/// Things that happened during a tick, for sound/flash hooks in the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player fired `count` projectiles
    Shot { count: usize },
    /// Enemy fired a radial burst
    Burst { count: usize },
    /// Enemy took damage
    EnemyHit { health: f32 },
    EnemyKilled,
    PlayerKilled,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the jitter RNG was created from
    pub seed: u64,
    /// Burst jitter source
    pub rng: Pcg32,
    /// Gameplay ticks run (frames spent on the game-over screen not counted)
    pub time_ticks: u64,
    pub player: Player,
    pub enemy: Enemy,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            player: Player::default(),
            enemy: Enemy::default(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.player.dead {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    /// JSON snapshot for debugging and bug reports
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
