//! Phase-local tick counter

use serde::{Deserialize, Serialize};

/// Counts ticks within the current phase. Negative values are a pre-delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickClock {
    ticks: i32,
}

impl TickClock {
    /// Advance by one tick and return the new value
    #[inline]
    pub fn advance(&mut self) -> i32 {
        self.ticks += 1;
        self.ticks
    }

    #[inline]
    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    /// Start `ticks` ticks before zero
    #[inline]
    pub fn delay(&mut self, ticks: i32) {
        self.ticks = -ticks;
    }

    #[inline]
    pub fn ticks(&self) -> i32 {
        self.ticks
    }
}
