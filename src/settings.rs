//! Game settings
//!
//! Arena size, brick layout and control scheme. Loaded from an optional JSON
//! file; anything missing falls back to the classic 800x600 board.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ArenaLayout;

/// How the paddle is driven. Only one scheme is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControlScheme {
    /// Arrow keys held down move the paddle at a fixed speed
    #[default]
    Keyboard,
    /// Paddle centers under the pointer
    Pointer,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Keyboard => "keyboard",
            ControlScheme::Pointer => "pointer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keyboard" | "keys" => Some(ControlScheme::Keyboard),
            "pointer" | "mouse" => Some(ControlScheme::Pointer),
            _ => None,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    /// Empty space above the first row
    pub gap_height: f32,

    // === Input ===
    pub control: ControlScheme,

    /// RNG seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            gap_height: BRICK_GAP_HEIGHT,
            control: ControlScheme::Keyboard,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the simulation can't run with.
    ///
    /// Dimensions must be finite and within bounds, and the brick grid must
    /// fit across the arena and above the paddle.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !self.arena_width.is_finite()
            || !(PADDLE_WIDTH..=MAX_ARENA_SIZE).contains(&self.arena_width)
        {
            log::warn!(
                "Arena width {} outside [{}, {}], using {}",
                self.arena_width,
                PADDLE_WIDTH,
                MAX_ARENA_SIZE,
                defaults.arena_width
            );
            self.arena_width = defaults.arena_width;
        }
        if !self.arena_height.is_finite()
            || !(MIN_ARENA_HEIGHT..=MAX_ARENA_SIZE).contains(&self.arena_height)
        {
            log::warn!(
                "Arena height {} outside [{}, {}], using {}",
                self.arena_height,
                MIN_ARENA_HEIGHT,
                MAX_ARENA_SIZE,
                defaults.arena_height
            );
            self.arena_height = defaults.arena_height;
        }

        let paddle_y = self.arena_height - PADDLE_BOTTOM_MARGIN;
        if !self.gap_height.is_finite()
            || self.gap_height < 0.0
            || self.gap_height + BRICK_HEIGHT > paddle_y
        {
            log::warn!(
                "Gap height {} leaves no room for bricks, using {}",
                self.gap_height,
                defaults.gap_height
            );
            self.gap_height = defaults.gap_height;
        }

        if self.brick_rows == 0 || self.brick_cols == 0 {
            log::warn!(
                "Empty brick grid {}x{}, using {}x{}",
                self.brick_rows,
                self.brick_cols,
                defaults.brick_rows,
                defaults.brick_cols
            );
            self.brick_rows = defaults.brick_rows;
            self.brick_cols = defaults.brick_cols;
        }

        let max_cols = ((self.arena_width / BRICK_WIDTH).floor() as usize).max(1);
        let max_rows = (((paddle_y - self.gap_height) / BRICK_HEIGHT).floor() as usize).max(1);
        if self.brick_cols > max_cols || self.brick_rows > max_rows {
            log::warn!(
                "Brick grid {}x{} doesn't fit the arena, capping to {}x{}",
                self.brick_rows,
                self.brick_cols,
                self.brick_rows.min(max_rows),
                self.brick_cols.min(max_cols)
            );
            self.brick_rows = self.brick_rows.min(max_rows);
            self.brick_cols = self.brick_cols.min(max_cols);
        }

        self
    }

    /// Arena description handed to the simulation
    pub fn layout(&self) -> ArenaLayout {
        ArenaLayout {
            width: self.arena_width,
            height: self.arena_height,
            rows: self.brick_rows,
            cols: self.brick_cols,
            gap_height: self.gap_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_defaults_match_classic_board() {
        let layout = Settings::default().layout();
        assert_eq!(layout, ArenaLayout::default());
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 600.0);
        assert_eq!((layout.rows, layout.cols), (5, 10));
        assert_eq!(layout.gap_height, 60.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "brick_rows": 3, "control": "pointer" }"#)
            .expect("valid json");
        assert_eq!(settings.brick_rows, 3);
        assert_eq!(settings.brick_cols, BRICK_COLS);
        assert_eq!(settings.control, ControlScheme::Pointer);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_bad_values_are_replaced() {
        let settings =
            Settings::from_json(r#"{ "arena_width": 50, "brick_cols": 0, "gap_height": -4 }"#)
                .expect("valid json");
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.brick_cols, BRICK_COLS);
        assert_eq!(settings.gap_height, BRICK_GAP_HEIGHT);
    }

    #[test]
    fn test_huge_grid_is_capped() {
        let settings =
            Settings::from_json(r#"{ "brick_rows": 18446744073709551615, "brick_cols": 2 }"#)
                .expect("valid json");
        // (560 - 60) / 30 rows fit above the paddle
        assert_eq!((settings.brick_rows, settings.brick_cols), (16, 2));

        let settings = Settings::from_json(r#"{ "brick_rows": 100000, "brick_cols": 100000 }"#)
            .expect("valid json");
        assert_eq!((settings.brick_rows, settings.brick_cols), (16, 10));

        let state = GameState::with_layout(1, settings.layout());
        assert_eq!(state.bricks.live_count(), 160);
    }

    #[test]
    fn test_non_finite_dimensions_are_replaced() {
        // 1e39 overflows f32 to infinity
        let settings = Settings::from_json(r#"{ "arena_width": 1e39, "arena_height": 1e39 }"#)
            .expect("valid json");
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);

        let settings = Settings::from_json(r#"{ "gap_height": 1e39 }"#).expect("valid json");
        assert_eq!(settings.gap_height, BRICK_GAP_HEIGHT);
    }

    #[test]
    fn test_oversized_arena_is_replaced() {
        let settings = Settings::from_json(r#"{ "arena_width": 1e30, "arena_height": 100 }"#)
            .expect("valid json");
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
    }

    #[test]
    fn test_small_arena_caps_rows_above_paddle() {
        let settings = Settings::from_json(r#"{ "arena_width": 400, "arena_height": 200 }"#)
            .expect("valid json");
        // Paddle top at 160: (160 - 60) / 30 rows, 400 / 80 columns
        assert_eq!((settings.brick_rows, settings.brick_cols), (3, 5));
        let layout = settings.layout();
        let bottom_row = layout.gap_height + layout.rows as f32 * BRICK_HEIGHT;
        assert!(bottom_row <= layout.height - PADDLE_BOTTOM_MARGIN);
    }

    #[test]
    fn test_capped_settings_run_cleanly() {
        let settings = Settings::from_json(r#"{ "arena_width": 1e39, "brick_rows": 100000 }"#)
            .expect("valid json");
        let mut session = crate::Session::new(&settings, 5);
        session.set_autopilot(true);
        for _ in 0..500 {
            session.on_tick(16.0);
        }
        let snapshot = session.snapshot();
        assert!(snapshot.ball.x.is_finite() && snapshot.ball.y.is_finite());
        assert!(snapshot.paddle.x <= settings.arena_width - PADDLE_WIDTH);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here/breakout.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{ \"brick_rows\": 3, oops").expect("write");
        let settings = Settings::load(file.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(br#"{ "brick_rows": 3, "seed": 9 }"#)
            .expect("write");
        let settings = Settings::load(file.path());
        assert_eq!(settings.brick_rows, 3);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_control_scheme_names() {
        assert_eq!(ControlScheme::from_str("Mouse"), Some(ControlScheme::Pointer));
        assert_eq!(ControlScheme::from_str("keys"), Some(ControlScheme::Keyboard));
        assert_eq!(ControlScheme::from_str("gamepad"), None);
        assert_eq!(ControlScheme::Pointer.as_str(), "pointer");
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: Some(7),
            control: ControlScheme::Pointer,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), settings);
    }
}
