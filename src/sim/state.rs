//! Game state and level transitions
//!
//! One owned `GameState` holds everything a game needs; a new game replaces
//! the sequence and progress in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::TickClock;
use super::input::InputTracker;
use super::pad::{PadId, Pads};
use super::sequence::Sequence;
use crate::consts::*;

/// Current mode of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Playing back the sequence prefix for the current level
    Demo,
    /// Waiting for the player to repeat the prefix
    Play,
    /// Game ended, waiting for a restart
    Over,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub mode: GameMode,
    /// Length of the sequence prefix in play (1..=MAX_LEVEL)
    pub level: usize,
    /// Element being shown (Demo) or expected next (Play)
    pub current_index: usize,
    /// Phase-local tick counter
    pub clock: TickClock,
    /// Set only while `mode == Over`
    pub game_over_message: Option<String>,
    pub pads: Pads,
    pub tracker: InputTracker,
    sequence: Sequence,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let sequence = Sequence::generate(&mut rng, MAX_LEVEL);
        Self::start(seed, rng, sequence)
    }

    /// Start the first game on a fixed sequence. Later games are random.
    pub fn with_sequence(seed: u64, sequence: Sequence) -> Self {
        Self::start(seed, Pcg32::seed_from_u64(seed), sequence)
    }

    fn start(seed: u64, rng: Pcg32, sequence: Sequence) -> Self {
        let mut state = Self {
            seed,
            mode: GameMode::Demo,
            level: MIN_LEVEL - 1,
            current_index: 0,
            clock: TickClock::default(),
            game_over_message: None,
            pads: Pads::new(),
            tracker: InputTracker::new(),
            sequence,
            rng,
        };
        log::info!("New game (seed {})", seed);
        state.next_level();
        state
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Pad expected at `current_index`
    pub fn expected_pad(&self) -> Option<PadId> {
        self.sequence.get(self.current_index)
    }

    /// Throw away the current game and start over at the first level
    pub fn new_game(&mut self) {
        self.sequence = Sequence::generate(&mut self.rng, MAX_LEVEL);
        self.tracker.clear();
        self.pads.all_off();
        self.game_over_message = None;
        self.level = MIN_LEVEL - 1;
        log::info!("New game");
        self.next_level();
    }

    /// Advance to the next level, or end the game after the last one
    pub fn next_level(&mut self) {
        if self.level >= MAX_LEVEL {
            self.game_over(format!("YOU BEAT ALL {} LEVELS!", self.level));
            return;
        }

        self.level += 1;
        self.current_index = 0;
        self.clock.delay(NEW_LEVEL_DELAY_TICKS);
        self.mode = GameMode::Demo;
        log::info!("LEVEL {}", self.level);
    }

    pub fn game_over(&mut self, message: String) {
        log::info!("{}", message);
        self.clock.reset();
        self.mode = GameMode::Over;
        self.game_over_message = Some(message);
    }
}
