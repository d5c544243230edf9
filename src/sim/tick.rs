//! Fixed timestep simulation tick
//!
//! Core game loop that advances the arena one step at a time.

use super::collision::{ball_brick_collision, ball_fell_out, ball_paddle_collision};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Pointer x in arena space; when set the paddle centers under it
    pub pointer_x: Option<f32>,
    /// Demo mode - the paddle follows the ball on its own
    pub autopilot: bool,
}

/// Advance the game state by one timestep of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    let arena_width = state.layout.width;

    move_paddle(state, input, dt);

    if state.ball.update(dt, arena_width) {
        state.events.push(GameEvent::WallBounce);
    }

    if ball_paddle_collision(&mut state.ball, &state.paddle) {
        log::debug!(
            "Paddle hit at x={:.1}, new vx={:.1}",
            state.ball.pos.x,
            state.ball.vel.x
        );
        state.events.push(GameEvent::PaddleHit);
    }

    if let Some((row, col)) = ball_brick_collision(&mut state.ball, &mut state.bricks) {
        state.score += 1;
        log::debug!("Brick ({}, {}) destroyed, score {}", row, col, state.score);
        state.events.push(GameEvent::BrickDestroyed { row, col });
        if state.bricks.is_empty() {
            log::info!("All bricks cleared (score {})", state.score);
            state.events.push(GameEvent::Cleared);
        }
    }

    if ball_fell_out(&state.ball, state.layout.height) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
        state.events.push(GameEvent::GameOver { score: state.score });
    }
}

/// Apply this tick's paddle intent
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let arena_width = state.layout.width;
    let paddle = &mut state.paddle;

    if input.autopilot {
        // Aim slightly off-center, drifting over time, so the ball doesn't
        // settle into a straight vertical loop
        let time_factor = state.time_ticks as f32 * 0.02;
        let offset = time_factor.sin() * paddle.size.x * 0.3;
        let target = state.ball.rect().center().x - paddle.size.x / 2.0 + offset;

        let max_delta = PADDLE_SPEED * dt;
        let delta = (target - paddle.pos.x).clamp(-max_delta, max_delta);
        paddle.move_by(delta, arena_width);
    } else if let Some(pointer_x) = input.pointer_x {
        paddle.move_to(pointer_x - paddle.size.x / 2.0, arena_width);
    } else {
        if input.left {
            paddle.move_by(-PADDLE_SPEED * dt, arena_width);
        }
        if input.right {
            paddle.move_by(PADDLE_SPEED * dt, arena_width);
        }
    }
}

/// Start a fresh run on the same arena.
///
/// Relaunches the ball, restores every brick and zeroes the score. The paddle
/// stays where it is.
pub fn reset(state: &mut GameState) {
    let layout = state.layout;
    state.launch_ball();
    state.bricks.clear();
    state
        .bricks
        .populate(layout.rows, layout.cols, layout.gap_height);
    state.score = 0;
    state.time_ticks = 0;
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::Reset);
    log::info!("Game reset ({} bricks)", state.bricks.live_count());
}
