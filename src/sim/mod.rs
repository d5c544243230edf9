//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time step passed in explicitly, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_brick_collision, ball_fell_out, ball_paddle_collision, deflect_vx};
pub use rect::Rect;
pub use state::{
    ArenaLayout, Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle, Snapshot,
};
pub use tick::{TickInput, reset, tick};
