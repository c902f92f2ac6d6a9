//! The stationary dummy enemy and its radial attack pattern

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::projectile::{Projectile, advance_and_cull};
use crate::consts::*;
use crate::platform::{Canvas, Viewport};
use crate::renderer::colors;

/// Stationary enemy that fires radial bursts on a timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    /// Remaining health; never increases
    pub health: f32,
    /// Set once health reaches zero, never cleared
    pub dead: bool,
    pub color: [f32; 4],
    /// Seconds until the next burst
    pub cooldown: f32,
    /// Live radial projectiles
    pub bullets: Vec<Projectile>,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ENEMY_X, ENEMY_Y),
            radius: ENEMY_RADIUS,
            health: ENEMY_HEALTH,
            dead: false,
            color: colors::ENEMY,
            cooldown: 0.0,
            bullets: Vec::new(),
        }
    }
}

impl Enemy {
    /// Advance live projectiles and drop the ones that left the viewport
    pub fn update_bullets(&mut self, viewport: &Viewport) {
        advance_and_cull(&mut self.bullets, viewport);
    }

    /// Count down the attack timer and fire a burst when it elapses
    ///
    /// Returns the number of projectiles spawned (0 or `BURST_SIZE`).
    /// Firing is not gated on `dead`; the dummy keeps shooting after it dies.
    pub fn shoot_radial_pattern<R: Rng>(&mut self, dt: f32, rng: &mut R) -> usize {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return 0;
        }

        let burst = radial_burst(self.pos, rng);
        let count = burst.len();
        self.bullets.extend(burst);
        self.cooldown = BURST_INTERVAL;
        log::trace!("Burst fired, {} enemy bullets live", self.bullets.len());
        count
    }

    /// Apply one hit of damage; returns true if this hit killed the enemy
    pub fn take_hit(&mut self, damage: f32) -> bool {
        if self.dead {
            return false;
        }
        self.health -= damage;
        if self.health <= 0.0 {
            self.dead = true;
            log::info!("Enemy destroyed");
            return true;
        }
        false
    }

    /// Draw the enemy body (only while alive)
    pub fn draw(&self, canvas: &mut impl Canvas) {
        if !self.dead {
            canvas.draw_circle(self.pos, self.radius, self.color);
        }
    }

    /// Draw the health readout (only while alive)
    pub fn draw_health(&self, canvas: &mut impl Canvas) {
        if !self.dead {
            canvas.draw_text(
                &health_text(self.health),
                Vec2::new(50.0, 50.0),
                50.0,
                colors::ENEMY,
            );
        }
    }

    pub fn draw_bullets(&self, canvas: &mut impl Canvas) {
        for b in &self.bullets {
            canvas.draw_circle(b.pos, b.radius(), colors::ENEMY_BULLET);
        }
    }
}

/// Health readout text, six decimals
pub fn health_text(health: f32) -> String {
    format!("{:.6}", health)
}

/// Build one burst of radial projectiles centered on `origin`
///
/// The angular step gets one whole-number jitter per burst and every bullet
/// gets its own whole-number jitter on top. Angles are left unnormalized and
/// routinely exceed a full turn.
pub fn radial_burst<R: Rng>(origin: Vec2, rng: &mut R) -> Vec<Projectile> {
    let (step_lo, step_hi) = BURST_STEP_JITTER;
    let (angle_lo, angle_hi) = BULLET_ANGLE_JITTER;

    let step = TAU / BURST_SIZE as f32 + rng.random_range(step_lo..=step_hi) as f32;

    (0..BURST_SIZE)
        .map(|i| {
            let angle = i as f32 * step + rng.random_range(angle_lo..=angle_hi) as f32;
            Projectile::radial(origin, RADIAL_SPEED, angle)
        })
        .collect()
}
