//! Player avatar: movement, weapon tiers and smoothed weapon mounts

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use crate::consts::*;
use crate::platform::{Canvas, Viewport};
use crate::renderer::colors;

/// Firing tier, selects the shot pattern and visible mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum PowerLevel {
    #[default]
    One,
    Two,
    Three,
}

impl PowerLevel {
    pub fn as_u8(&self) -> u8 {
        match self {
            PowerLevel::One => 1,
            PowerLevel::Two => 2,
            PowerLevel::Three => 3,
        }
    }

    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(PowerLevel::One),
            2 => Some(PowerLevel::Two),
            3 => Some(PowerLevel::Three),
            _ => None,
        }
    }

    /// Projectiles spawned per shot
    pub fn shot_count(&self) -> usize {
        match self {
            PowerLevel::One => 1,
            PowerLevel::Two => 3,
            PowerLevel::Three => 5,
        }
    }
}

/// Smoothed weapon mount offsets
///
/// `hori_*` push mounts outward, `vert_*` shift them vertically. All four
/// retract to zero while focused.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MountOffsets {
    pub hori_two: f32,
    pub vert_two: f32,
    pub hori_three: f32,
    pub vert_three: f32,
}

impl MountOffsets {
    /// Resting offsets for the given focus state
    pub fn target(focus: bool) -> Self {
        if focus {
            Self::default()
        } else {
            Self {
                hori_two: MOUNT_TWO_OFFSET,
                vert_two: MOUNT_TWO_OFFSET,
                hori_three: MOUNT_THREE_OFFSET,
                vert_three: MOUNT_THREE_OFFSET,
            }
        }
    }

    /// Move every offset toward `target` by `min(1, dt * rate)` of the gap
    pub fn approach(&mut self, target: &MountOffsets, dt: f32) {
        let t = (dt * MOUNT_TRANSITION_SPEED).min(1.0);
        self.hori_two = lerp(self.hori_two, target.hori_two, t);
        self.vert_two = lerp(self.vert_two, target.vert_two, t);
        self.hori_three = lerp(self.hori_three, target.hori_three, t);
        self.vert_three = lerp(self.vert_three, target.vert_three, t);
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
    /// Set on the first lethal hit, never cleared
    pub dead: bool,
    pub power: PowerLevel,
    /// Modifier held: slower movement, retracted mounts
    pub focus: bool,
    pub offsets: MountOffsets,
    /// Ticks since the last shot
    pub shoot_cooldown: u32,
    /// Live straight projectiles
    pub bullets: Vec<Projectile>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_RADIUS, Vec2::new(PLAYER_START_X, PLAYER_START_Y), colors::PLAYER)
    }
}

impl Player {
    pub fn new(radius: f32, pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            pos,
            radius,
            color,
            dead: false,
            power: PowerLevel::One,
            focus: false,
            offsets: MountOffsets::default(),
            shoot_cooldown: 0,
            bullets: Vec::new(),
        }
    }

    /// Ease mount offsets toward the focus-dependent target
    ///
    /// Runs every tick regardless of power level.
    pub fn update_weapon_offsets(&mut self, dt: f32) {
        let target = MountOffsets::target(self.focus);
        self.offsets.approach(&target, dt);
    }

    /// Level-2 mount positions (left, right)
    pub fn mounts_two(&self) -> (Vec2, Vec2) {
        let o = &self.offsets;
        let y = self.pos.y + 15.0 - o.vert_two;
        (
            Vec2::new(self.pos.x - 25.0 - o.hori_two, y),
            Vec2::new(self.pos.x + 25.0 + o.hori_two, y),
        )
    }

    /// Level-3 mount positions (left, right)
    pub fn mounts_three(&self) -> (Vec2, Vec2) {
        let o = &self.offsets;
        let y = self.pos.y - 20.0 + o.vert_three;
        (
            Vec2::new(self.pos.x - 15.0 - o.hori_three, y),
            Vec2::new(self.pos.x + 15.0 + o.hori_three, y),
        )
    }

    /// Draw the avatar body
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.draw_circle(self.pos, self.radius, self.color);
    }

    /// Draw the mounts active at the current power level
    pub fn draw_weapons(&self, canvas: &mut impl Canvas) {
        if self.power >= PowerLevel::Two {
            let (left, right) = self.mounts_two();
            canvas.draw_circle(left, MOUNT_RADIUS, colors::WEAPON_MOUNT);
            canvas.draw_circle(right, MOUNT_RADIUS, colors::WEAPON_MOUNT);
        }
        if self.power >= PowerLevel::Three {
            let (left, right) = self.mounts_three();
            canvas.draw_circle(left, MOUNT_RADIUS, colors::WEAPON_MOUNT);
            canvas.draw_circle(right, MOUNT_RADIUS, colors::WEAPON_MOUNT);
        }
    }

    /// Apply a power-level select; returns true if the level changed
    pub fn set_power(&mut self, power: PowerLevel) -> bool {
        if self.power == power {
            return false;
        }
        log::debug!("Power level {} -> {}", self.power.as_u8(), power.as_u8());
        self.power = power;
        true
    }

    /// Move along the held direction keys
    ///
    /// `dir` components are -1, 0 or 1; diagonals are normalized so every
    /// direction moves at the same speed. Also latches the focus flag.
    pub fn move_by(&mut self, dir: Vec2, focus: bool) {
        self.focus = focus;
        let speed = if focus { PLAYER_FOCUS_SPEED } else { PLAYER_SPEED };
        self.pos += dir.normalize_or_zero() * speed;
    }

    /// Keep the whole avatar circle inside the viewport
    pub fn clamp(&mut self, viewport: &Viewport) {
        let r = self.radius;
        if self.pos.x - r < 0.0 {
            self.pos.x = r;
        } else if self.pos.x + r > viewport.width {
            self.pos.x = viewport.width - r;
        }

        if self.pos.y - r < 0.0 {
            self.pos.y = r;
        } else if self.pos.y + r > viewport.height {
            self.pos.y = viewport.height - r;
        }
    }

    /// Shot pattern for the current power level
    pub fn shot_pattern(&self) -> Vec<Projectile> {
        let center = Projectile::straight(self.pos);
        match self.power {
            PowerLevel::One => vec![center],
            PowerLevel::Two => {
                let (left, right) = self.mounts_two();
                vec![
                    center,
                    Projectile::straight(left),
                    Projectile::straight(right),
                ]
            }
            PowerLevel::Three => {
                let (left3, right3) = self.mounts_three();
                // Outer pair uses the level-2 horizontal offset with the
                // level-3 vertical offset.
                let o = &self.offsets;
                let y = self.pos.y + 15.0 - o.vert_three;
                vec![
                    center,
                    Projectile::straight(left3),
                    Projectile::straight(right3),
                    Projectile::straight(Vec2::new(self.pos.x - 25.0 - o.hori_two, y)),
                    Projectile::straight(Vec2::new(self.pos.x + 25.0 + o.hori_two, y)),
                ]
            }
        }
    }

    /// Tick the fire cooldown and spawn a shot if allowed
    ///
    /// Returns the number of projectiles spawned.
    pub fn try_fire(&mut self, fire_held: bool) -> usize {
        self.shoot_cooldown = self.shoot_cooldown.saturating_add(1);
        if !fire_held || self.shoot_cooldown <= SHOOT_COOLDOWN_TICKS {
            return 0;
        }
        self.shoot_cooldown = 0;
        let shot = self.shot_pattern();
        let count = shot.len();
        self.bullets.extend(shot);
        count
    }

    /// Fire (if allowed), then advance, draw and cull live projectiles
    pub fn shoot(&mut self, fire_held: bool, viewport: &Viewport, canvas: &mut impl Canvas) -> usize {
        let spawned = self.try_fire(fire_held);

        for b in self.bullets.iter_mut() {
            b.advance();
            canvas.draw_circle(b.pos, b.radius(), colors::PLAYER_BULLET);
        }
        self.bullets.retain(|b| !b.is_expired(viewport));

        spawned
    }
}
