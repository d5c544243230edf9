//! Game state and core simulation types
//!
//! The arena (`GameState`) exclusively owns the ball, the paddle and the brick
//! grid. Entities are plain data with no back-references to the arena.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom of the arena; waiting for a reset
    GameOver,
}

/// Notifications surfaced to the UI shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left, right or top wall
    WallBounce,
    /// Ball deflected off the paddle
    PaddleHit,
    /// A brick was destroyed
    BrickDestroyed { row: usize, col: usize },
    /// The last live brick was destroyed
    Cleared,
    /// Run ended with the given score
    GameOver { score: u32 },
    /// Board was reset for a new run
    Reset,
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Velocity in pixels/second
    pub vel: Vec2,
    pub size: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(BALL_SIZE),
        }
    }
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Center the ball in the arena and launch it upward, left or right at random
    pub fn start<R: Rng + ?Sized>(&mut self, arena_width: f32, arena_height: f32, rng: &mut R) {
        self.pos = Vec2::new(
            (arena_width - self.size.x) / 2.0,
            (arena_height - self.size.y) / 2.0,
        );
        let vx = if rng.random_bool(0.5) {
            BALL_SPEED
        } else {
            -BALL_SPEED
        };
        self.vel = Vec2::new(vx, -BALL_SPEED);
    }

    /// Integrate position and reflect off the side and top walls.
    ///
    /// Position is not pulled back inside the arena; the ball may overlap a
    /// wall for a frame after bouncing. There is no bottom wall.
    /// Returns true if any wall reflected the ball.
    pub fn update(&mut self, dt: f32, arena_width: f32) -> bool {
        self.pos += self.vel * dt;

        let mut bounced = false;
        if self.pos.x < 0.0 || self.pos.x + self.size.x > arena_width {
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        if self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        bounced
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::for_arena(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl Paddle {
    /// Paddle centered horizontally, `PADDLE_BOTTOM_MARGIN` above the arena bottom
    pub fn for_arena(arena_width: f32, arena_height: f32) -> Self {
        Self {
            pos: Vec2::new(
                ((arena_width - PADDLE_WIDTH) / 2.0).max(0.0),
                arena_height - PADDLE_BOTTOM_MARGIN,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Shift horizontally by `dx` pixels, staying inside the arena
    pub fn move_by(&mut self, dx: f32, arena_width: f32) {
        self.pos.x += dx;
        self.clamp_to(arena_width);
    }

    /// Place the left edge at `target_x`, staying inside the arena
    pub fn move_to(&mut self, target_x: f32, arena_width: f32) {
        self.pos.x = target_x;
        self.clamp_to(arena_width);
    }

    fn clamp_to(&mut self, arena_width: f32) {
        let max_x = (arena_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.max(0.0).min(max_x);
        debug_assert!(
            (0.0..=max_x).contains(&self.pos.x),
            "paddle x {} outside [0, {}]",
            self.pos.x,
            max_x
        );
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Brick {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Row-major grid of bricks; destroyed bricks leave an empty cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Brick>>,
}

impl BrickGrid {
    /// Create a fully populated grid
    pub fn new(rows: usize, cols: usize, gap_height: f32) -> Self {
        let mut grid = Self::default();
        grid.populate(rows, cols, gap_height);
        grid
    }

    /// Lay out `rows × cols` bricks edge to edge, starting `gap_height` below the top
    pub fn populate(&mut self, rows: usize, cols: usize, gap_height: f32) {
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells.reserve(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let pos = Vec2::new(
                    j as f32 * BRICK_WIDTH,
                    i as f32 * BRICK_HEIGHT + gap_height,
                );
                self.cells.push(Some(Brick::new(pos)));
            }
        }
    }

    /// Remove every brick, keeping the grid dimensions
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        debug_assert!(
            row < self.rows && col < self.cols,
            "brick cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Live brick at a cell, `None` if the cell is empty
    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        self.index(row, col)
            .and_then(|idx| self.cells.get(idx))
            .and_then(Option::as_ref)
    }

    /// Take the brick out of a cell, leaving it empty
    pub fn remove(&mut self, row: usize, col: usize) -> Option<Brick> {
        let idx = self.index(row, col)?;
        self.cells.get_mut(idx).and_then(Option::take)
    }

    /// Live bricks with their (row, col), in row-major order
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize, &Brick)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|b| (idx / cols, idx % cols, b)))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// First live brick (row-major) whose box overlaps `rect`
    pub fn first_hit(&self, rect: &Rect) -> Option<(usize, usize)> {
        self.iter_live()
            .find(|(_, _, brick)| brick.rect().intersects(rect))
            .map(|(row, col, _)| (row, col))
    }
}

/// Arena dimensions and brick layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaLayout {
    pub width: f32,
    pub height: f32,
    pub rows: usize,
    pub cols: usize,
    pub gap_height: f32,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            gap_height: BRICK_GAP_HEIGHT,
        }
    }
}

/// Read-only view of the arena for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Rect,
    pub paddle: Rect,
    pub bricks: Vec<Rect>,
    pub score: u32,
    pub phase: GamePhase,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub layout: ArenaLayout,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed this run
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter (this run)
    pub time_ticks: u64,
    /// Notifications not yet handed to the shell
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the default arena
    pub fn new(seed: u64) -> Self {
        Self::with_layout(seed, ArenaLayout::default())
    }

    /// Create a new game with a custom arena
    pub fn with_layout(seed: u64, layout: ArenaLayout) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::default();
        ball.start(layout.width, layout.height, &mut rng);

        log::info!(
            "New game: seed={} arena={}x{} bricks={}x{}",
            seed,
            layout.width,
            layout.height,
            layout.rows,
            layout.cols
        );

        Self {
            seed,
            layout,
            ball,
            paddle: Paddle::for_arena(layout.width, layout.height),
            bricks: BrickGrid::new(layout.rows, layout.cols, layout.gap_height),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Relaunch the ball from the arena center using the run RNG
    pub fn launch_ball(&mut self) {
        self.ball
            .start(self.layout.width, self.layout.height, &mut self.rng);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball.rect(),
            paddle: self.paddle.rect(),
            bricks: self.bricks.iter_live().map(|(_, _, b)| b.rect()).collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}
