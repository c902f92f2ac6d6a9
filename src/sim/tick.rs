//! Per-frame simulation tick
//!
//! One call per externally paced frame. Draw calls are issued to the host's
//! canvas in the same pass, in a fixed order.

use glam::Vec2;

use super::collision::{EnemyHit, resolve_enemy_hits, resolve_player_hits};
use super::player::PowerLevel;
use super::state::{GameEvent, GameState};
use crate::platform::{Canvas, Viewport};
use crate::renderer::colors;

/// Input snapshot for a single tick
///
/// Direction, focus and fire are held states. The power selects are
/// edge-triggered: true only on the frame the key went down.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Focus modifier (slow movement, retracted mounts)
    pub focus: bool,
    pub fire: bool,
    pub select_power_1: bool,
    pub select_power_2: bool,
    pub select_power_3: bool,
}

impl TickInput {
    /// Direction with components in {-1, 0, 1}
    ///
    /// Right wins over left and up wins over down when both are held.
    pub fn direction(&self) -> Vec2 {
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    /// Power level selected this tick; the last select checked wins
    pub fn power_select(&self) -> Option<PowerLevel> {
        let mut selected = None;
        if self.select_power_1 {
            selected = Some(PowerLevel::One);
        }
        if self.select_power_2 {
            selected = Some(PowerLevel::Two);
        }
        if self.select_power_3 {
            selected = Some(PowerLevel::Three);
        }
        selected
    }
}

/// Advance the game by one frame
///
/// Player death is checked first, every tick. Once the player is dead only
/// the game-over screen is drawn and nothing else advances.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    viewport: &Viewport,
    canvas: &mut impl Canvas,
    dt: f32,
) {
    state.events.clear();

    canvas.clear(colors::BACKGROUND);

    if resolve_player_hits(&mut state.player, &state.enemy.bullets) {
        state.events.push(GameEvent::PlayerKilled);
    }

    if state.player.dead {
        draw_game_over(viewport, canvas);
        return;
    }

    state.time_ticks += 1;

    // Player
    state.player.draw(canvas);
    state.player.update_weapon_offsets(dt);
    state.player.draw_weapons(canvas);

    if let Some(power) = input.power_select() {
        state.player.set_power(power);
    }

    state.player.move_by(input.direction(), input.focus);
    state.player.clamp(viewport);

    let shot = state.player.shoot(input.fire, viewport, canvas);
    if shot > 0 {
        state.events.push(GameEvent::Shot { count: shot });
    }

    // Enemy
    state.enemy.update_bullets(viewport);
    let burst = state.enemy.shoot_radial_pattern(dt, &mut state.rng);
    if burst > 0 {
        state.events.push(GameEvent::Burst { count: burst });
    }

    state.enemy.draw(canvas);
    state.enemy.draw_health(canvas);

    match resolve_enemy_hits(&mut state.enemy, &state.player.bullets) {
        EnemyHit::Miss => {}
        EnemyHit::Damaged { health } => state.events.push(GameEvent::EnemyHit { health }),
        EnemyHit::Killed => state.events.push(GameEvent::EnemyKilled),
    }

    state.enemy.draw_bullets(canvas);
}

/// Terminal screen
fn draw_game_over(viewport: &Viewport, canvas: &mut impl Canvas) {
    let center = viewport.center();
    canvas.clear(colors::GAME_OVER_BACKGROUND);
    canvas.draw_text(
        "GAME OVER",
        Vec2::new(center.x - 100.0, center.y),
        25.0,
        colors::GAME_OVER_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::NullCanvas;
    use crate::renderer::DrawList;
    use crate::sim::projectile::Projectile;
    use crate::sim::state::GamePhase;

    fn viewport() -> Viewport {
        Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn run(state: &mut GameState, input: &TickInput, ticks: usize) {
        for _ in 0..ticks {
            tick(state, input, &viewport(), &mut NullCanvas, FRAME_DT);
        }
    }

    #[test]
    fn test_direction_precedence() {
        let input = TickInput {
            left: true,
            right: true,
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));

        let input = TickInput {
            left: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.direction(), Vec2::new(-1.0, 1.0));
        assert_eq!(TickInput::default().direction(), Vec2::ZERO);
    }

    #[test]
    fn test_power_select_last_wins() {
        let input = TickInput {
            select_power_1: true,
            select_power_3: true,
            ..Default::default()
        };
        assert_eq!(input.power_select(), Some(PowerLevel::Three));
        assert_eq!(TickInput::default().power_select(), None);
    }

    #[test]
    fn test_power_follows_latest_select() {
        let mut state = GameState::new(1);
        for (input, expected) in [
            (
                TickInput {
                    select_power_2: true,
                    ..Default::default()
                },
                PowerLevel::Two,
            ),
            (TickInput::default(), PowerLevel::Two),
            (
                TickInput {
                    select_power_3: true,
                    ..Default::default()
                },
                PowerLevel::Three,
            ),
            (
                TickInput {
                    select_power_1: true,
                    ..Default::default()
                },
                PowerLevel::One,
            ),
        ] {
            tick(&mut state, &input, &viewport(), &mut NullCanvas, FRAME_DT);
            assert_eq!(state.player.power, expected);
        }
    }

    #[test]
    fn test_first_tick_spawns_burst() {
        let mut state = GameState::new(1);
        run(&mut state, &TickInput::default(), 1);
        assert_eq!(state.enemy.bullets.len(), BURST_SIZE);
        assert!(state.events.contains(&GameEvent::Burst { count: BURST_SIZE }));
    }

    #[test]
    fn test_shot_event_and_spawn_count() {
        let mut state = GameState::new(1);
        let input = TickInput {
            fire: true,
            select_power_3: true,
            ..Default::default()
        };
        run(&mut state, &input, 3);
        assert!(state.player.bullets.is_empty());
        run(&mut state, &input, 1);
        assert!(state.events.contains(&GameEvent::Shot { count: 5 }));
        assert_eq!(state.player.bullets.len(), 5);
    }

    #[test]
    fn test_player_clamped_after_move() {
        let mut state = GameState::new(1);
        state.player.pos = Vec2::new(7.0, 300.0);
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        run(&mut state, &input, 1);
        assert_eq!(state.player.pos.x, PLAYER_RADIUS);
    }

    #[test]
    fn test_death_latches_and_freezes_world() {
        let mut state = GameState::new(1);
        assert_eq!(state.phase(), GamePhase::Playing);

        // Park a lethal bullet on the player
        state
            .enemy
            .bullets
            .push(Projectile::radial(state.player.pos, 0.0, 0.0));
        run(&mut state, &TickInput::default(), 1);
        assert!(state.player.dead);
        assert_eq!(state.events, vec![GameEvent::PlayerKilled]);

        let frozen_pos = state.player.pos;
        let frozen_ticks = state.time_ticks;
        let frozen_bullets = state.enemy.bullets.len();

        let busy = TickInput {
            right: true,
            fire: true,
            select_power_3: true,
            ..Default::default()
        };
        run(&mut state, &busy, 30);
        assert!(state.player.dead);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.player.pos, frozen_pos);
        assert_eq!(state.player.power, PowerLevel::One);
        assert_eq!(state.time_ticks, frozen_ticks);
        assert_eq!(state.enemy.bullets.len(), frozen_bullets);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_game_over_screen_drawn() {
        let mut state = GameState::new(1);
        state.player.dead = true;
        let mut canvas = DrawList::new();
        tick(&mut state, &TickInput::default(), &viewport(), &mut canvas, FRAME_DT);
        assert_eq!(canvas.clear_color, colors::GAME_OVER_BACKGROUND);
        assert_eq!(canvas.texts.len(), 1);
        assert_eq!(canvas.texts[0].text, "GAME OVER");
        assert_eq!(canvas.texts[0].pos, Vec2::new(300.0, 225.0));
        assert!(canvas.vertices.is_empty());
    }

    #[test]
    fn test_enemy_damage_end_to_end() {
        let mut state = GameState::new(1);
        // Stand right under the enemy and stay clear of its bullets
        state.enemy.cooldown = f32::MAX;
        state.player.pos = Vec2::new(ENEMY_X, ENEMY_Y + 60.0);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };

        let mut hit_ticks = 0;
        for _ in 0..40 {
            tick(&mut state, &input, &viewport(), &mut NullCanvas, FRAME_DT);
            if state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemyHit { .. }))
            {
                hit_ticks += 1;
            }
        }
        assert!(hit_ticks > 0);
        assert_eq!(state.enemy.health, ENEMY_HEALTH - BULLET_DAMAGE * hit_ticks as f32);
    }

    #[test]
    fn test_enemy_hidden_after_death() {
        let mut state = GameState::new(1);
        state.enemy.dead = true;
        state.enemy.health = 0.0;
        let mut canvas = DrawList::new();
        tick(&mut state, &TickInput::default(), &viewport(), &mut canvas, FRAME_DT);
        // No health readout once dead, and the enemy keeps firing
        assert!(canvas.texts.is_empty());
        assert_eq!(state.enemy.bullets.len(), BURST_SIZE);
    }

    #[test]
    fn test_health_readout_while_alive() {
        let mut state = GameState::new(1);
        let mut canvas = DrawList::new();
        tick(&mut state, &TickInput::default(), &viewport(), &mut canvas, FRAME_DT);
        assert_eq!(canvas.clear_color, colors::BACKGROUND);
        assert_eq!(canvas.texts.len(), 1);
        assert_eq!(canvas.texts[0].text, "125000.000000");
    }

    #[test]
    fn test_new_burst_not_advanced_on_spawn_tick() {
        let mut state = GameState::new(1);
        run(&mut state, &TickInput::default(), 1);
        assert_eq!(state.enemy.bullets.len(), BURST_SIZE);
        for b in &state.enemy.bullets {
            assert_eq!(b.pos, Vec2::new(ENEMY_X, ENEMY_Y));
        }

        // Next tick moves the existing burst before anything new spawns
        run(&mut state, &TickInput::default(), 1);
        assert!(
            state
                .enemy
                .bullets
                .iter()
                .all(|b| b.pos != Vec2::new(ENEMY_X, ENEMY_Y))
        );
    }

    #[test]
    fn test_shot_fired_from_moved_and_clamped_position() {
        let mut state = GameState::new(1);
        state.enemy.cooldown = f32::MAX;
        state.player.pos = Vec2::new(10.0, 300.0);
        state.player.shoot_cooldown = SHOOT_COOLDOWN_TICKS;
        let input = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        run(&mut state, &input, 1);

        // 10 - 8 = 2, clamped to the radius, then advanced 10 units up
        assert_eq!(state.player.pos, Vec2::new(PLAYER_RADIUS, 300.0));
        assert_eq!(state.player.bullets.len(), 1);
        assert_eq!(state.player.bullets[0].pos, Vec2::new(PLAYER_RADIUS, 290.0));
    }

    #[test]
    fn test_death_checked_before_enemy_bullets_move() {
        let mut state = GameState::new(1);
        // Overlapping now (12 < 5 + 8) but 15 away after this tick's advance
        let start = state.player.pos + Vec2::new(12.0, 0.0);
        state.enemy.bullets.push(Projectile::radial(start, 3.0, 0.0));
        run(&mut state, &TickInput::default(), 1);

        assert!(state.player.dead);
        assert_eq!(state.events, vec![GameEvent::PlayerKilled]);
        assert_eq!(state.enemy.bullets[0].pos, start);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let input = TickInput {
            fire: true,
            left: true,
            select_power_2: true,
            ..Default::default()
        };
        run(&mut state1, &input, 50);
        run(&mut state2, &input, 50);

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.enemy.bullets, state2.enemy.bullets);
        assert_eq!(state1.player.bullets, state2.player.bullets);
        assert_eq!(state1.player.dead, state2.player.dead);
    }
}
