//! Game state and core simulation types
//!
//! Every entity is exclusively owned by `GameState`; entities carry stable
//! ids and never reference the state back. Removal is always by id against
//! the specific collection being resolved.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Rect, rotated_square_aabb};
use super::tick::FrameInput;
use crate::consts::*;
use crate::wrap_degrees;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; frontend shows the title/score screen until restart
    GameOver,
}

/// Explosion animation variants, each with its own sprite dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplosionSize {
    /// Player grazed by a mob
    Small,
    /// Mob downed by a bullet
    Large,
    /// Player destroyed
    Huge,
}

impl ExplosionSize {
    /// Sprite side length in pixels (frames are square)
    pub fn pixel_size(self) -> f32 {
        match self {
            ExplosionSize::Small => 40.0,
            ExplosionSize::Large => 75.0,
            ExplosionSize::Huge => 170.0,
        }
    }
}

/// Side effects the frontend must render or play, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A bullet left the ship; play the shoot sound
    ShotFired,
    /// A bullet downed a mob; `sound` picks one of the explosion samples
    MobShotDown { pos: Vec2, sound: usize },
    /// A mob grazed the player and was destroyed
    PlayerHit {
        pos: Vec2,
        health_left: i32,
        sound: usize,
    },
    /// The lethal hit; the death explosion starts here
    PlayerDestroyed { pos: Vec2, sound: usize },
    /// Death explosion finished, phase moved to GameOver
    RunEnded { score: u64 },
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite center
    pub pos: Vec2,
    pub vel_x: f32,
    pub health: i32,
    last_shot_ms: u64,
}

impl Player {
    /// Fresh ship at the fixed spawn point. The cooldown timestamp starts
    /// at the current clock, so the first shot is gated like any other.
    pub fn spawn(now_ms: u64) -> Self {
        Self {
            pos: Vec2::new(
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT - PLAYER_SPAWN_MARGIN - PLAYER_HEIGHT / 2.0,
            ),
            vel_x: 0.0,
            health: PLAYER_START_HEALTH,
            last_shot_ms: now_ms,
        }
    }

    /// Apply held keys, move, and clamp to the screen
    pub fn update(&mut self, input: &FrameInput) {
        self.vel_x = 0.0;
        if input.left {
            self.vel_x = -PLAYER_SPEED;
        }
        if input.right {
            self.vel_x = PLAYER_SPEED;
        }
        self.pos.x += self.vel_x;
        if input.up {
            self.pos.y -= PLAYER_SPEED;
        }
        if input.down {
            self.pos.y += PLAYER_SPEED;
        }

        let half_w = PLAYER_WIDTH / 2.0;
        self.pos.x = self.pos.x.clamp(half_w, SCREEN_WIDTH - half_w);

        // Vertical clamp acts on the top edge, with a fixed floor margin
        let half_h = PLAYER_HEIGHT / 2.0;
        let top = (self.pos.y - half_h).clamp(0.0, SCREEN_HEIGHT - PLAYER_FLOOR_MARGIN);
        self.pos.y = top + half_h;
    }

    /// Cooldown-gated shot. Returns the muzzle point (top-center of the
    /// ship) when a bullet should spawn, `None` while still cooling down.
    pub fn try_shoot(&mut self, now_ms: u64) -> Option<Vec2> {
        if now_ms.saturating_sub(self.last_shot_ms) > SHOOT_COOLDOWN_MS {
            self.last_shot_ms = now_ms;
            Some(Vec2::new(self.pos.x, self.pos.y - PLAYER_HEIGHT / 2.0))
        } else {
            None
        }
    }
}

/// A descending, spinning asteroid
#[derive(Debug, Clone)]
pub struct Mob {
    pub id: u32,
    /// Sprite center
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
    /// Rotation angle in degrees, wraps mod 360
    pub rot: f32,
    /// Degrees added per rotation step; fixed for the mob's lifetime
    pub rot_speed: f32,
    /// Vertical speed range; both bounds ratchet up on every recycle and
    /// are never reset while the mob lives (arcade difficulty ramp)
    pub speed_min: f32,
    pub speed_max: f32,
    last_rotate_ms: u64,
}

impl Mob {
    pub fn spawn(id: u32, now_ms: u64, rng: &mut Pcg32) -> Self {
        let mut mob = Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rot: 0.0,
            rot_speed: rng.random_range(-MOB_ROT_SPEED_RANGE..MOB_ROT_SPEED_RANGE),
            speed_min: MOB_START_SPEED_MIN,
            speed_max: MOB_START_SPEED_MAX,
            last_rotate_ms: now_ms,
        };
        mob.place_above_screen(rng);
        mob.vel = Vec2::new(
            rng.random_range(-MOB_DRIFT..MOB_DRIFT),
            rng.random_range(mob.speed_min..mob.speed_max),
        );
        mob
    }

    /// Uniform position in the spawn strip above the visible area
    fn place_above_screen(&mut self, rng: &mut Pcg32) {
        let half = MOB_SIZE / 2.0;
        self.pos = Vec2::new(
            rng.random_range(0.0..SCREEN_WIDTH - MOB_SIZE) + half,
            rng.random_range(MOB_SPAWN_Y_MIN..MOB_SPAWN_Y_MAX) + half,
        );
    }

    /// Advance the spin once per rotate interval
    pub fn rotate(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_rotate_ms) > MOB_ROTATE_INTERVAL_MS {
            self.last_rotate_ms = now_ms;
            self.rot = wrap_degrees(self.rot + self.rot_speed);
        }
    }

    /// Spin, drift, and recycle once fully off the bottom or sides.
    /// Recycling widens the vertical speed range by the ramp and redraws
    /// the vertical speed; horizontal drift and spin are untouched.
    pub fn update(&mut self, now_ms: u64, rng: &mut Pcg32) {
        self.rotate(now_ms);
        self.pos += self.vel;

        let rect = self.bounding_rect();
        let off_bottom = rect.min.y > SCREEN_HEIGHT + MOB_EXIT_SLACK_BOTTOM;
        let off_side =
            rect.min.x < -MOB_EXIT_SLACK_SIDE || rect.max.x > SCREEN_WIDTH + MOB_EXIT_SLACK_SIDE;
        if off_bottom || off_side {
            self.place_above_screen(rng);
            self.speed_min += MOB_SPEED_RAMP;
            self.speed_max += MOB_SPEED_RAMP;
            self.vel.y = rng.random_range(self.speed_min..self.speed_max);
        }
    }

    /// Axis-aligned box of the rotated sprite, re-centered on the sprite
    /// center so spinning never drifts position
    pub fn bounding_rect(&self) -> Rect {
        rotated_square_aabb(self.pos, MOB_SIZE, self.rot)
    }
}

/// A straight-line upward projectile
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u32,
    /// Sprite center
    pub pos: Vec2,
}

impl Bullet {
    /// Spawn with the bottom edge at the muzzle point
    pub fn spawn(id: u32, muzzle: Vec2) -> Self {
        Self {
            id,
            pos: Vec2::new(muzzle.x, muzzle.y - BULLET_HEIGHT / 2.0),
        }
    }

    pub fn update(&mut self) {
        self.pos.y -= BULLET_SPEED;
    }

    /// True once the sprite is fully above the top edge
    pub fn off_top(&self) -> bool {
        self.pos.y + BULLET_HEIGHT / 2.0 < 0.0
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(BULLET_WIDTH, BULLET_HEIGHT))
    }
}

/// A timed animation at a collision site
#[derive(Debug, Clone)]
pub struct Explosion {
    pub id: u32,
    pub pos: Vec2,
    pub size: ExplosionSize,
    pub frame: usize,
    last_frame_ms: u64,
}

impl Explosion {
    pub fn spawn(id: u32, pos: Vec2, size: ExplosionSize, now_ms: u64) -> Self {
        Self {
            id,
            pos,
            size,
            frame: 0,
            last_frame_ms: now_ms,
        }
    }

    /// Advance one animation frame per frame interval. No-op once
    /// finished; reaching the end is a one-time transition.
    pub fn update(&mut self, now_ms: u64) {
        if self.finished() {
            return;
        }
        if now_ms.saturating_sub(self.last_frame_ms) > EXPLOSION_FRAME_MS {
            self.last_frame_ms = now_ms;
            self.frame += 1;
        }
    }

    pub fn finished(&self) -> bool {
        self.frame >= EXPLOSION_FRAMES
    }
}

/// Complete simulation state for one process
///
/// Created once per process with a seed; `reset` starts a fresh run while
/// the RNG stream continues, so consecutive runs differ.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// `None` once the lethal hit has landed
    pub player: Option<Player>,
    pub mobs: Vec<Mob>,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    /// Side effects pending for the frontend, drained each frame
    pub events: Vec<GameEvent>,
    /// Explosion id gating the Playing -> GameOver transition
    pub death_explosion: Option<u32>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// New state with a fresh run already started
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            player: None,
            mobs: Vec::new(),
            bullets: Vec::new(),
            explosions: Vec::new(),
            events: Vec::new(),
            death_explosion: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.reset(now_ms);
        state
    }

    /// Start a fresh run: new player at the spawn point, the starting mob
    /// population, score cleared, all transient collections emptied
    pub fn reset(&mut self, now_ms: u64) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.player = Some(Player::spawn(now_ms));
        self.mobs.clear();
        self.bullets.clear();
        self.explosions.clear();
        self.events.clear();
        self.death_explosion = None;
        for _ in 0..START_MOB_COUNT {
            self.spawn_mob(now_ms);
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_mob(&mut self, now_ms: u64) {
        let id = self.next_entity_id();
        let mob = Mob::spawn(id, now_ms, &mut self.rng);
        self.mobs.push(mob);
    }

    pub fn spawn_bullet(&mut self, muzzle: Vec2) {
        let id = self.next_entity_id();
        self.bullets.push(Bullet::spawn(id, muzzle));
    }

    /// Returns the new explosion's id so the caller can track it
    pub fn spawn_explosion(&mut self, pos: Vec2, size: ExplosionSize, now_ms: u64) -> u32 {
        let id = self.next_entity_id();
        self.explosions.push(Explosion::spawn(id, pos, size, now_ms));
        id
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn player_alive(&self) -> bool {
        self.player.is_some()
    }
}
