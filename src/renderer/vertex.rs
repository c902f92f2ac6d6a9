//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Convert an 8-bit RGBA color to normalized floats
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgba8;

    pub const BACKGROUND: [f32; 4] = rgba8(245, 245, 245, 255); // Raywhite
    pub const PLAYER: [f32; 4] = rgba8(190, 33, 55, 255); // Maroon
    pub const PLAYER_BULLET: [f32; 4] = rgba8(230, 41, 55, 255); // Red
    pub const WEAPON_MOUNT: [f32; 4] = rgba8(80, 80, 80, 255); // Dark gray
    pub const ENEMY: [f32; 4] = rgba8(0, 228, 48, 255); // Green
    pub const ENEMY_BULLET: [f32; 4] = rgba8(130, 130, 130, 255); // Gray
    pub const GAME_OVER_BACKGROUND: [f32; 4] = rgba8(230, 41, 55, 255);
    pub const GAME_OVER_TEXT: [f32; 4] = rgba8(130, 130, 130, 255);
}
