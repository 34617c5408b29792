//! Tick-driven game simulation
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform code:
//! - One call to `tick` per frame, no internal timers
//! - Seeded RNG only (sequence generation)
//! - Pads addressed by `PadId`, never by value comparison

pub mod clock;
pub mod input;
pub mod pad;
pub mod sequence;
pub mod state;
pub mod tick;
pub mod view;

pub use clock::TickClock;
pub use input::{InputTracker, PointerSample};
pub use pad::{Pad, PadId, Pads};
pub use sequence::Sequence;
pub use state::{GameMode, GameState};
pub use tick::{TickInput, press_at, tick};
pub use view::{GameOverView, PadView, RenderState, TextLine};
