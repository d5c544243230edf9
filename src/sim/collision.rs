//! Collision detection and response
//!
//! All shapes are axis-aligned boxes. Responses are deliberately simple:
//! - paddle hits remap horizontal speed from the hit offset (deflection model)
//! - brick hits flip vertical speed only

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, BrickGrid, Paddle};
use crate::consts::PADDLE_DEFLECT_SPEED;

/// Horizontal velocity after a paddle hit.
///
/// Linear in the offset between ball center and paddle center: a dead-center
/// hit sends the ball straight up, an edge hit gives ±`PADDLE_DEFLECT_SPEED`.
/// Incoming horizontal speed is ignored.
#[inline]
pub fn deflect_vx(ball: &Rect, paddle: &Rect) -> f32 {
    let dx = ball.center().x - paddle.center().x;
    dx / (paddle.width / 2.0) * PADDLE_DEFLECT_SPEED
}

/// Bounce the ball off the paddle if their boxes overlap.
///
/// Returns true on a hit.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let ball_rect = ball.rect();
    let paddle_rect = paddle.rect();
    if !ball_rect.intersects(&paddle_rect) {
        return false;
    }

    ball.vel = Vec2::new(deflect_vx(&ball_rect, &paddle_rect), -ball.vel.y);
    true
}

/// Destroy the first live brick (row-major) the ball overlaps.
///
/// At most one brick goes per call even when the ball straddles several;
/// the bounce is a single vertical flip. Returns the emptied cell.
pub fn ball_brick_collision(ball: &mut Ball, bricks: &mut BrickGrid) -> Option<(usize, usize)> {
    let (row, col) = bricks.first_hit(&ball.rect())?;
    bricks.remove(row, col);
    ball.vel.y = -ball.vel.y;
    Some((row, col))
}

/// Check if the ball has dropped below the arena
#[inline]
pub fn ball_fell_out(ball: &Ball, arena_height: f32) -> bool {
    ball.pos.y > arena_height
}
