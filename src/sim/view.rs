//! Per-tick snapshot handed to presentation

use serde::{Deserialize, Serialize};

use super::pad::{Pad, PadId};
use super::state::{GameMode, GameState};
use crate::Rect;
use crate::consts::*;

/// One pad as presentation should draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadView {
    pub id: PadId,
    pub region: Rect,
    pub lit: bool,
    /// Fill color for the current lit state
    pub color: [u8; 4],
}

impl From<&Pad> for PadView {
    fn from(pad: &Pad) -> Self {
        Self {
            id: pad.id,
            region: pad.region,
            lit: pad.lit,
            color: pad.id.color(pad.lit),
        }
    }
}

/// A horizontally centered line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    /// Baseline in board coordinates
    pub y: f32,
}

impl TextLine {
    fn new(text: impl Into<String>, fraction: f32) -> Self {
        Self {
            text: text.into(),
            y: BOARD_SIZE * fraction,
        }
    }
}

/// Game over screen contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverView {
    pub title: TextLine,
    pub message: TextLine,
    pub instruction: TextLine,
    /// Blink phase of the restart instruction
    pub show_instruction: bool,
}

/// Everything presentation needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub mode: GameMode,
    pub level: usize,
    pub pads: Vec<PadView>,
    /// Present only in `GameMode::Over`
    pub game_over: Option<GameOverView>,
}

impl RenderState {
    pub fn capture(state: &GameState) -> Self {
        let game_over = match (state.mode, &state.game_over_message) {
            (GameMode::Over, Some(message)) => Some(GameOverView {
                title: TextLine::new(GAME_OVER_TITLE, 0.25),
                message: TextLine::new(message.as_str(), 0.5),
                instruction: TextLine::new(GAME_OVER_INSTRUCTION, 0.75),
                show_instruction: state.clock.ticks() <= GAME_OVER_FLASH_TICKS,
            }),
            _ => None,
        };

        Self {
            mode: state.mode,
            level: state.level,
            pads: state.pads.iter().map(PadView::from).collect(),
            game_over,
        }
    }

    /// The lit pad, if any
    pub fn lit_pad(&self) -> Option<PadId> {
        self.pads.iter().find(|p| p.lit).map(|p| p.id)
    }
}
