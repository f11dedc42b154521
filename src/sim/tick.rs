//! Per-frame simulation step
//!
//! One call per frame of the outer loop. The step is deterministic given
//! the state's seed, the input snapshot, and the clock value; nothing here
//! touches the platform.

use glam::Vec2;

use super::collision::circles_overlap;
use super::state::{ExplosionSize, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Held-key snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
    /// Any key released on the game-over screen; starts a fresh run
    pub restart: bool,
    /// Autopilot plays the game (demo binary, soak tests)
    pub idle_mode: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, now_ms: u64) {
    let input = if input.idle_mode {
        autopilot(state, input)
    } else {
        input.clone()
    };

    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                state.reset(now_ms);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    // Player: steer, move, clamp, and maybe fire
    let mut muzzle = None;
    if let Some(player) = state.player.as_mut() {
        player.update(&input);
        if input.shoot {
            muzzle = player.try_shoot(now_ms);
        }
    }
    if let Some(pos) = muzzle {
        state.spawn_bullet(pos);
        state.events.push(GameEvent::ShotFired);
    }

    // Every live entity updates exactly once
    for mob in &mut state.mobs {
        mob.update(now_ms, &mut state.rng);
    }
    for bullet in &mut state.bullets {
        bullet.update();
    }
    state.bullets.retain(|b| !b.off_top());
    for expl in &mut state.explosions {
        expl.update(now_ms);
    }
    state.explosions.retain(|e| !e.finished());

    resolve_bullet_hits(state, now_ms);
    resolve_player_hits(state, now_ms);

    // Hold the game-over transition until the death explosion has played out
    if state.player.is_none() {
        let death_done = match state.death_explosion {
            Some(id) => !state.explosions.iter().any(|e| e.id == id),
            None => true,
        };
        if death_done {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::RunEnded { score: state.score });
        }
    }
}

/// Bullet-mob resolution over the post-update snapshot.
///
/// Each hit mob is removed once no matter how many bullets share the
/// overlap, and each bullet is removed once no matter how many mobs it
/// clips. Every downed mob scores and is replaced, keeping the population
/// constant.
fn resolve_bullet_hits(state: &mut GameState, now_ms: u64) {
    let mut downed: Vec<(u32, Vec2)> = Vec::new();
    let mut spent: Vec<u32> = Vec::new();
    for mob in &state.mobs {
        let mob_rect = mob.bounding_rect();
        for bullet in &state.bullets {
            if mob_rect.overlaps(&bullet.bounding_rect()) {
                if !downed.iter().any(|&(id, _)| id == mob.id) {
                    downed.push((mob.id, mob.pos));
                }
                if !spent.contains(&bullet.id) {
                    spent.push(bullet.id);
                }
            }
        }
    }

    state.mobs.retain(|m| !downed.iter().any(|&(id, _)| id == m.id));
    state.bullets.retain(|b| !spent.contains(&b.id));

    for (_, pos) in downed {
        state.score += SCORE_PER_MOB;
        let sound = explosion_sound(state);
        state.events.push(GameEvent::MobShotDown { pos, sound });
        state.spawn_explosion(pos, ExplosionSize::Large, now_ms);
        state.spawn_mob(now_ms);
    }
}

/// Player-mob resolution, circle against circle.
///
/// Hits are processed in collection order; the first lethal hit removes
/// the player and further hits this frame are ignored.
fn resolve_player_hits(state: &mut GameState, now_ms: u64) {
    let Some(player) = &state.player else {
        return;
    };
    let player_pos = player.pos;
    let mut health = player.health;

    let hits: Vec<(u32, Vec2)> = state
        .mobs
        .iter()
        .filter(|m| circles_overlap(player_pos, PLAYER_RADIUS, m.pos, MOB_RADIUS))
        .map(|m| (m.id, m.pos))
        .collect();

    let mut lethal_at = None;
    for (id, pos) in hits {
        state.mobs.retain(|m| m.id != id);
        health -= 1;
        let sound = explosion_sound(state);
        if health > 0 {
            state.events.push(GameEvent::PlayerHit {
                pos,
                health_left: health,
                sound,
            });
            state.spawn_explosion(pos, ExplosionSize::Small, now_ms);
            state.spawn_mob(now_ms);
        } else {
            state.events.push(GameEvent::PlayerDestroyed { pos, sound });
            lethal_at = Some(pos);
            break;
        }
    }

    if let Some(pos) = lethal_at {
        state.player = None;
        let id = state.spawn_explosion(pos, ExplosionSize::Huge, now_ms);
        state.death_explosion = Some(id);
    } else if let Some(player) = state.player.as_mut() {
        player.health = health;
    }
}

fn explosion_sound(state: &mut GameState) -> usize {
    use rand::Rng;
    state.rng.random_range(0..EXPLOSION_SOUND_COUNT)
}

/// Derive controls for the demo binary: keep firing, restart after a run,
/// and sidestep the nearest mob that is descending toward the ship.
fn autopilot(state: &GameState, input: &FrameInput) -> FrameInput {
    let mut input = input.clone();
    input.shoot = true;

    if state.phase == GamePhase::GameOver {
        input.restart = true;
        return input;
    }

    let Some(player) = &state.player else {
        return input;
    };

    let threat = state
        .mobs
        .iter()
        .filter(|m| m.pos.y < player.pos.y && m.vel.y > 0.0)
        .min_by(|a, b| {
            let da = a.pos.distance_squared(player.pos);
            let db = b.pos.distance_squared(player.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    match threat {
        Some(mob) if (mob.pos.x - player.pos.x).abs() < 60.0 => {
            // Sidestep away from the threat
            input.left = mob.pos.x >= player.pos.x;
            input.right = mob.pos.x < player.pos.x;
        }
        _ => {
            // Drift back toward the middle of the screen
            input.left = player.pos.x > SCREEN_WIDTH / 2.0 + PLAYER_SPEED;
            input.right = player.pos.x < SCREEN_WIDTH / 2.0 - PLAYER_SPEED;
        }
    }
    input
}
