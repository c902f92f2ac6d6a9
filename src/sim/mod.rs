//! Simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, fixed order
//! - Seeded RNG only
//! - Draw calls go to a host-supplied `Canvas`, nothing is read back

pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::{EnemyHit, circles_overlap, resolve_enemy_hits, resolve_player_hits};
pub use enemy::{Enemy, radial_burst};
pub use player::{MountOffsets, Player, PowerLevel};
pub use projectile::{Motion, Owner, Projectile};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
