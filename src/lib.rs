//! Bullet Barrage - a minimal arcade shooter
//!
//! Core modules:
//! - `sim`: Per-frame simulation (projectiles, enemy barrage, player weapons, collisions)
//! - `platform`: Boundary to the rendering/input collaborator
//! - `renderer`: CPU-side draw list that tessellates draw calls into vertices
//! - `settings`: Window/runner configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::{Canvas, NullCanvas, Viewport};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; one simulation tick per frame
    pub const TARGET_FPS: u32 = 60;
    /// Nominal frame time at the target rate
    pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    /// Movement speed in units per tick
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const PLAYER_FOCUS_SPEED: f32 = 4.5;
    /// Ticks that must elapse (strictly more than) between shots
    pub const SHOOT_COOLDOWN_TICKS: u32 = 3;

    /// Weapon mount geometry
    pub const MOUNT_RADIUS: f32 = 5.0;
    /// Resting offsets when not focused (level-2 and level-3 mounts)
    pub const MOUNT_TWO_OFFSET: f32 = 10.0;
    pub const MOUNT_THREE_OFFSET: f32 = 8.0;
    /// Offset smoothing rate (per second)
    pub const MOUNT_TRANSITION_SPEED: f32 = 15.0;

    /// Player bullets
    pub const STRAIGHT_SPEED: f32 = 10.0;
    pub const STRAIGHT_RADIUS: f32 = 5.0;
    /// Damage dealt to the enemy per hit
    pub const BULLET_DAMAGE: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_X: f32 = 400.0;
    pub const ENEMY_Y: f32 = 70.0;
    pub const ENEMY_RADIUS: f32 = 25.0;
    pub const ENEMY_HEALTH: f32 = 125_000.0;

    /// Enemy radial burst
    pub const BURST_SIZE: usize = 12;
    /// Seconds between bursts
    pub const BURST_INTERVAL: f32 = 0.1;
    pub const RADIAL_SPEED: f32 = 3.0;
    pub const RADIAL_RADIUS: f32 = 8.0;
    /// Per-burst jitter added to the angular step (inclusive, whole numbers)
    pub const BURST_STEP_JITTER: (i32, i32) = (10, 30);
    /// Per-bullet jitter added to each heading (inclusive, whole numbers)
    pub const BULLET_ANGLE_JITTER: (i32, i32) = (200, 300);
}

/// Direction vector for a heading in radians
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
