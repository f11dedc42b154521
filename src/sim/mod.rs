//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, driven by a monotonic millisecond clock
//! - Seeded RNG only, owned by the state
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circles_overlap, rotated_square_aabb};
pub use state::{
    Bullet, Explosion, ExplosionSize, GameEvent, GamePhase, GameState, Mob, Player,
};
pub use tick::{FrameInput, tick};
