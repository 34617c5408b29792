//! Memory Pads - A four-pad pattern memory game
//!
//! Core modules:
//! - `sim`: Tick-driven game simulation (pads, sequence, input, state machine)
//!
//! Rendering and the frame loop live outside this crate; a driver calls
//! [`sim::tick`] once per frame and draws the returned [`sim::RenderState`].

pub mod sim;

pub use sim::{GameMode, GameState, PadId, RenderState, TickInput, tick};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Window title used by drivers
    pub const WINDOW_TITLE: &str = "Simple Memory Game";

    /// Board dimensions (square)
    pub const BOARD_SIZE: f32 = 480.0;
    /// Pad edge length
    pub const PAD_SIZE: f32 = 220.0;

    /// Level range; the sequence is generated at `MAX_LEVEL` length
    pub const MIN_LEVEL: usize = 1;
    pub const MAX_LEVEL: usize = 20;

    /// Demo playback timing (ticks)
    pub const NEW_LEVEL_DELAY_TICKS: i32 = 60;
    pub const LIGHT_TICKS: i32 = 40;
    pub const DARK_TICKS: i32 = 20;

    /// Half period of the restart instruction blink on the game over screen
    pub const GAME_OVER_FLASH_TICKS: i32 = 30;

    /// Game over screen text
    pub const GAME_OVER_TITLE: &str = "GAME OVER";
    pub const GAME_OVER_INSTRUCTION: &str = "TOUCH/CLICK TO START A NEW GAME";
}

/// Axis-aligned rectangle in board coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner (exclusive)
    pub max: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Size of the rectangle
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Half-open containment: min edges inclusive, max edges exclusive
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }
}
