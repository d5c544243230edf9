//! Shell-facing game session
//!
//! Owns the game state and input adapter, and turns variable frame times into
//! fixed `SIM_DT` ticks. A UI shell only talks to this type.

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, reset, tick};

use super::input::{InputAdapter, Key};

/// A running game plus its input and frame-time bookkeeping
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    input: InputAdapter,
    accumulator: f32,
}

impl Session {
    /// Start a session; `seed` is used when the settings don't pin one
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(seed);
        log::info!(
            "Starting session: seed={} control={}",
            seed,
            settings.control.as_str()
        );
        Self {
            state: GameState::with_layout(seed, settings.layout()),
            input: InputAdapter::new(settings.control),
            accumulator: 0.0,
        }
    }

    /// Advance by a frame of `dt_ms` milliseconds. Returns the ticks run.
    pub fn on_tick(&mut self, dt_ms: f32) -> u32 {
        if self.input.take_confirm() && self.state.phase == GamePhase::GameOver {
            log::info!("Game over acknowledged");
            self.on_reset();
        }

        if self.state.phase == GamePhase::GameOver {
            self.accumulator = 0.0;
            return 0;
        }

        let dt = (dt_ms / 1000.0).clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.tick_input();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.state.phase == GamePhase::GameOver {
                // Stop the clock; nothing moves until a reset
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    pub fn on_key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    pub fn on_pointer_moved(&mut self, x: f32) {
        self.input.pointer_moved(x);
    }

    /// Start a new run immediately, whatever the current phase
    pub fn on_reset(&mut self) {
        reset(&mut self.state);
        self.accumulator = 0.0;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.set_autopilot(enabled);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}
