//! Breakout - A classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, game state)
//! - `platform`: Shell-facing input adapter and fixed-step session driver
//! - `settings`: Data-driven arena and control configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use platform::{InputAdapter, Key, Session};
pub use settings::{ControlScheme, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (16 ms, ~62.5 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Configurable arena bounds
    pub const MIN_ARENA_HEIGHT: f32 = 200.0;
    pub const MAX_ARENA_SIZE: f32 = 4096.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle's top edge and the arena bottom
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;
    /// Starting position in the default arena (350, 560)
    pub const PADDLE_START_X: f32 = (ARENA_WIDTH - PADDLE_WIDTH) / 2.0;
    pub const PADDLE_Y: f32 = ARENA_HEIGHT - PADDLE_BOTTOM_MARGIN;
    /// Paddle speed while a direction key is held (pixels/s)
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Horizontal speed given to the ball when it hits a paddle edge
    pub const PADDLE_DEFLECT_SPEED: f32 = 200.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 10;
    /// Empty space above the first brick row (two brick heights)
    pub const BRICK_GAP_HEIGHT: f32 = 2.0 * BRICK_HEIGHT;
}
