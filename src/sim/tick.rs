//! One simulation step
//!
//! Core game loop that advances the state machine by exactly one tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameMode, GameState};
use super::view::RenderState;
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickInput {
    /// Resolved pointer position while a button or touch is held
    pub pointer_down: Option<Vec2>,
    /// Explicit restart (only meaningful on the game over screen)
    pub restart_requested: bool,
    /// Quit the process; handled by the driver, ignored here
    pub quit_requested: bool,
}

/// Advance the game state by one tick and return what to draw
pub fn tick(state: &mut GameState, input: &TickInput) -> RenderState {
    match state.mode {
        GameMode::Demo => tick_demo(state),
        GameMode::Play => tick_play(state, input),
        GameMode::Over => tick_over(state, input),
    }

    RenderState::capture(state)
}

/// Show `sequence[..level]` one pad at a time, then hand over to the player
fn tick_demo(state: &mut GameState) {
    let ticks = state.clock.advance();

    if state.current_index >= state.level {
        state.current_index = 0;
        state.mode = GameMode::Play;
        log::debug!("Level {}: waiting for player", state.level);
        return;
    }

    if ticks == 1 {
        state.pads.all_off();
        if let Some(id) = state.expected_pad() {
            state.pads.light(id);
        }
    }
    if ticks == 1 + LIGHT_TICKS {
        state.pads.all_off();
    }
    if ticks == 1 + LIGHT_TICKS + DARK_TICKS {
        state.clock.reset();
        state.current_index += 1;
    }
}

fn tick_play(state: &mut GameState, input: &TickInput) {
    let Some(pressed) = state.tracker.update(&mut state.pads, input.pointer_down) else {
        return;
    };

    log::debug!(
        "Pressed {:?} at index {} (expected {:?})",
        pressed,
        state.current_index,
        state.expected_pad()
    );

    if state.expected_pad() == Some(pressed) {
        if state.current_index + 1 < state.level {
            state.current_index += 1;
        } else {
            state.next_level();
        }
    } else {
        state.game_over(format!("YOU REACHED LEVEL {}", state.level));
    }
}

/// Blink the restart instruction; any press starts a new game
fn tick_over(state: &mut GameState, input: &TickInput) {
    if state.clock.advance() > GAME_OVER_FLASH_TICKS * 2 {
        state.clock.reset();
    }

    if input.pointer_down.is_some() || input.restart_requested {
        state.new_game();
    }
}

/// Convenience for drivers and tests: input with a held pointer
pub fn press_at(pos: Vec2) -> TickInput {
    TickInput {
        pointer_down: Some(pos),
        ..Default::default()
    }
}
