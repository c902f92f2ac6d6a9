//! Projectiles fired by the player and the enemy
//!
//! Both kinds share a shape (position + radius) and differ only in how they
//! move and when they count as gone. Motion parameters are fixed at spawn;
//! only the position changes afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading;
use crate::platform::Viewport;

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Kinematic rule, set once at spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Travels straight up the screen at `speed` units per tick
    Straight { speed: f32 },
    /// Travels along a fixed heading (radians, not normalized)
    Radial { speed: f32, angle: f32 },
}

/// A single moving projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    radius: f32,
    motion: Motion,
    owner: Owner,
}

impl Projectile {
    /// Player shot moving straight up
    pub fn straight(pos: Vec2) -> Self {
        Self {
            pos,
            radius: STRAIGHT_RADIUS,
            motion: Motion::Straight {
                speed: STRAIGHT_SPEED,
            },
            owner: Owner::Player,
        }
    }

    /// Enemy shot along `angle`
    pub fn radial(pos: Vec2, speed: f32, angle: f32) -> Self {
        Self {
            pos,
            radius: RADIAL_RADIUS,
            motion: Motion::Radial { speed, angle },
            owner: Owner::Enemy,
        }
    }

    /// Builder override for the spawn speed
    #[cfg(test)]
    pub(crate) fn with_speed(mut self, new_speed: f32) -> Self {
        match &mut self.motion {
            Motion::Straight { speed } | Motion::Radial { speed, .. } => *speed = new_speed,
        }
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Displacement applied by one `advance`
    pub fn velocity(&self) -> Vec2 {
        match self.motion {
            Motion::Straight { speed } => Vec2::new(0.0, -speed),
            Motion::Radial { speed, angle } => heading(angle) * speed,
        }
    }

    /// Move one tick along the motion rule
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.velocity();
    }

    /// True once the projectile has left the playfield
    ///
    /// Straight shots only ever leave through the top, so they only test
    /// `y < 0`. Radial shots test all four edges.
    pub fn is_expired(&self, viewport: &Viewport) -> bool {
        match self.motion {
            Motion::Straight { .. } => self.pos.y < 0.0,
            Motion::Radial { .. } => !viewport.contains(self.pos),
        }
    }
}

/// Advance every projectile one tick, then drop the expired ones
pub fn advance_and_cull(projectiles: &mut Vec<Projectile>, viewport: &Viewport) {
    for p in projectiles.iter_mut() {
        p.advance();
    }
    projectiles.retain(|p| !p.is_expired(viewport));
}
