//! Space Rocks - a top-down asteroid-dodging shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `platform`: Clock and frame pacing for native frontends
//! - `settings`: Presentation preferences (volumes, overlays)
//!
//! Rendering, audio playback and input devices live in the frontend. The
//! simulation talks to it through `sim::FrameInput` (held keys per frame),
//! a monotonic millisecond clock value, and drained `sim::GameEvent`s.

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Target frame rate for the outer loop
    pub const TARGET_FPS: u32 = 60;

    /// Mobs alive at the start of every run
    pub const START_MOB_COUNT: usize = 13;

    /// Player sprite and movement
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 38.0;
    /// Circular bounding radius used against mobs
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HEALTH: i32 = 3;
    /// Gap between the ship's bottom edge and the screen bottom at spawn
    pub const PLAYER_SPAWN_MARGIN: f32 = 10.0;
    /// The ship's top edge is clamped to [0, SCREEN_HEIGHT - this]
    pub const PLAYER_FLOOR_MARGIN: f32 = 30.0;
    /// Minimum gap between shots
    pub const SHOOT_COOLDOWN_MS: u64 = 250;

    /// Bullet sprite and movement (moves straight up)
    pub const BULLET_WIDTH: f32 = 9.0;
    pub const BULLET_HEIGHT: f32 = 33.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Mob sprite and movement
    pub const MOB_SIZE: f32 = 40.0;
    /// Circular bounding radius, 85% of the sprite half-width
    pub const MOB_RADIUS: f32 = 17.0;
    /// Starting vertical speed range; both bounds grow on every recycle
    pub const MOB_START_SPEED_MIN: f32 = 1.0;
    pub const MOB_START_SPEED_MAX: f32 = 6.0;
    /// Added to both speed bounds each time a mob escapes off-screen
    pub const MOB_SPEED_RAMP: f32 = 2.0;
    /// Horizontal drift drawn from -MOB_DRIFT..MOB_DRIFT at spawn
    pub const MOB_DRIFT: f32 = 3.0;
    /// Rotation speed drawn from this signed range, degrees per step
    pub const MOB_ROT_SPEED_RANGE: f32 = 8.0;
    /// Rotation advances once per interval
    pub const MOB_ROTATE_INTERVAL_MS: u64 = 50;
    /// Spawn strip above the screen, top-edge coordinates
    pub const MOB_SPAWN_Y_MIN: f32 = -100.0;
    pub const MOB_SPAWN_Y_MAX: f32 = -40.0;
    /// Slack past the bottom/side edges before a mob is recycled
    pub const MOB_EXIT_SLACK_BOTTOM: f32 = 10.0;
    pub const MOB_EXIT_SLACK_SIDE: f32 = 25.0;

    /// Explosion animation: 9 frames, one every 50 ms
    pub const EXPLOSION_FRAMES: usize = 9;
    pub const EXPLOSION_FRAME_MS: u64 = 50;
    /// Distinct explosion sound samples the frontend carries
    pub const EXPLOSION_SOUND_COUNT: usize = 2;

    /// Points per mob downed by a bullet
    pub const SCORE_PER_MOB: u64 = 100;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(365.0), 5.0);
        assert_eq!(wrap_degrees(-8.0), 352.0);
    }
}
