//! Circle-circle collision between the two projectile populations
//!
//! Both checks are one-directional reads of the opposing collection. Hits do
//! not consume bullets, and each check stops at its first qualifying hit, so
//! at most one damage event and one death event happen per tick.

use glam::Vec2;

use super::enemy::Enemy;
use super::player::Player;
use super::projectile::Projectile;
use crate::consts::BULLET_DAMAGE;

/// Exact overlap test; touching circles (`d == r1 + r2`) do not collide
#[inline]
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) < radius_a + radius_b
}

/// Outcome of resolving player bullets against the enemy for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyHit {
    /// No bullet overlapped (or the enemy was already dead)
    Miss,
    /// One damage event applied; carries remaining health
    Damaged { health: f32 },
    /// The damage event brought health to zero or below
    Killed,
}

/// Apply at most one damage event from the first overlapping bullet
pub fn resolve_enemy_hits(enemy: &mut Enemy, bullets: &[Projectile]) -> EnemyHit {
    if enemy.dead {
        return EnemyHit::Miss;
    }

    let hit = bullets
        .iter()
        .any(|b| circles_overlap(enemy.pos, enemy.radius, b.pos, b.radius()));
    if !hit {
        return EnemyHit::Miss;
    }

    if enemy.take_hit(BULLET_DAMAGE) {
        EnemyHit::Killed
    } else {
        EnemyHit::Damaged {
            health: enemy.health,
        }
    }
}

/// Kill the player on the first overlapping enemy bullet
///
/// Returns true only on the tick the player dies.
pub fn resolve_player_hits(player: &mut Player, bullets: &[Projectile]) -> bool {
    if player.dead {
        return false;
    }

    let hit = bullets
        .iter()
        .any(|b| circles_overlap(player.pos, player.radius, b.pos, b.radius()));
    if hit {
        player.dead = true;
        log::info!("Player hit at ({:.1}, {:.1})", player.pos.x, player.pos.y);
    }
    hit
}
