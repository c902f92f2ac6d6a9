//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. Whatever hosts the game
//! (a native window, a browser canvas, a headless runner) provides:
//! - Viewport bounds for clamping and off-screen tests
//! - A `Canvas` that receives draw calls while the tick runs
//!
//! Input arrives as a `sim::TickInput` snapshot built by the host each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current drawable area, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if the point lies inside the viewport (edges inclusive)
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(crate::consts::SCREEN_WIDTH, crate::consts::SCREEN_HEIGHT)
    }
}

/// Drawing primitives provided by the host
///
/// Calls produce nothing the simulation reads back.
pub trait Canvas {
    /// Fill the whole frame with a color
    fn clear(&mut self, color: [f32; 4]);

    /// Filled circle
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]);
}

/// Canvas that discards every call
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear(&mut self, _color: [f32; 4]) {}

    fn draw_circle(&mut self, _center: Vec2, _radius: f32, _color: [f32; 4]) {}

    fn draw_text(&mut self, _text: &str, _pos: Vec2, _size: f32, _color: [f32; 4]) {}
}
