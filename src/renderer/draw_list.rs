//! Draw list canvas
//!
//! Records one frame of draw calls: circles become triangles, text is kept
//! as commands for the host's font renderer.

use glam::Vec2;

use super::shapes::{circle_into, circle_segments};
use super::vertex::Vertex;
use crate::platform::Canvas;

/// A text draw call
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// One frame of recorded draw calls
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextCommand>,
    /// Circles drawn since the last clear
    pub circle_count: usize,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex buffer contents, ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for DrawList {
    /// Starts a new frame: previous geometry and text are dropped
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
        self.circle_count = 0;
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        circle_into(&mut self.vertices, center, radius, color, circle_segments(radius));
        self.circle_count += 1;
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
        self.texts.push(TextCommand {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
