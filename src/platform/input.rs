//! Raw input to paddle intent
//!
//! Key callbacks only flip flags here. The paddle itself is moved inside the
//! simulation tick, which reads a `TickInput` built from these flags.

use serde::{Deserialize, Serialize};

use crate::settings::ControlScheme;
use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Acknowledge the game-over notice (Enter)
    Confirm,
}

/// Accumulated input state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    scheme: ControlScheme,
    left_held: bool,
    right_held: bool,
    pointer_x: Option<f32>,
    confirm_pressed: bool,
    autopilot: bool,
}

impl InputAdapter {
    pub fn new(scheme: ControlScheme) -> Self {
        Self {
            scheme,
            ..Default::default()
        }
    }

    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Confirm => self.confirm_pressed = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Confirm => {}
        }
    }

    /// Pointer moved to `x` in arena coordinates
    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Let the paddle play by itself
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Take a pending confirm press (one-shot)
    pub fn take_confirm(&mut self) -> bool {
        std::mem::take(&mut self.confirm_pressed)
    }

    /// Paddle intent for the next tick under the active control scheme
    pub fn tick_input(&self) -> TickInput {
        match self.scheme {
            ControlScheme::Keyboard => TickInput {
                left: self.left_held,
                right: self.right_held,
                pointer_x: None,
                autopilot: self.autopilot,
            },
            ControlScheme::Pointer => TickInput {
                left: false,
                right: false,
                pointer_x: self.pointer_x,
                autopilot: self.autopilot,
            },
        }
    }
}
