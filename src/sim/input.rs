//! Pointer resolution and press-release tracking
//!
//! A pad press only counts once it is released, so the player sees which pad
//! is lit before the match is evaluated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pad::{PadId, Pads};

/// Raw pointer state for one frame, as a platform layer reports it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerSample {
    /// Left mouse button held
    pub mouse_down: bool,
    /// Cursor position in board coordinates
    pub mouse_pos: Vec2,
    /// Active touch positions, oldest first
    pub touches: Vec<Vec2>,
}

impl PointerSample {
    /// Mouse wins while its button is down, otherwise the first touch
    pub fn pointer_down(&self) -> Option<Vec2> {
        if self.mouse_down {
            Some(self.mouse_pos)
        } else {
            self.touches.first().copied()
        }
    }
}

/// Remembers which pad is held down across ticks
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    pressed: Option<PadId>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pad currently held down, if any
    pub fn pressed(&self) -> Option<PadId> {
        self.pressed
    }

    pub fn clear(&mut self) {
        self.pressed = None;
    }

    /// Run one tick of press tracking. Lights the held pad and returns the
    /// pad whose press completed this tick. A pointer that slides off every
    /// pad counts as a release.
    pub fn update(&mut self, pads: &mut Pads, pointer: Option<Vec2>) -> Option<PadId> {
        pads.all_off();

        if let Some(id) = pointer.and_then(|pos| pads.pad_at(pos)) {
            pads.light(id);
            self.pressed = Some(id);
            return None;
        }

        self.pressed.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ON_BLUE: Vec2 = Vec2::new(50.0, 50.0);
    const ON_YELLOW: Vec2 = Vec2::new(400.0, 400.0);
    const GAP: Vec2 = Vec2::new(240.0, 240.0);

    #[test]
    fn test_pointer_prefers_mouse() {
        let sample = PointerSample {
            mouse_down: true,
            mouse_pos: ON_BLUE,
            touches: vec![ON_YELLOW],
        };
        assert_eq!(sample.pointer_down(), Some(ON_BLUE));
    }

    #[test]
    fn test_pointer_falls_back_to_first_touch() {
        let sample = PointerSample {
            mouse_down: false,
            mouse_pos: ON_BLUE,
            touches: vec![ON_YELLOW, ON_BLUE],
        };
        assert_eq!(sample.pointer_down(), Some(ON_YELLOW));
        assert_eq!(PointerSample::default().pointer_down(), None);
    }

    #[test]
    fn test_press_emits_on_release() {
        let mut pads = Pads::new();
        let mut tracker = InputTracker::new();

        assert_eq!(tracker.update(&mut pads, Some(ON_BLUE)), None);
        assert_eq!(pads.lit_pad(), Some(PadId::Blue));
        assert_eq!(tracker.update(&mut pads, Some(ON_BLUE)), None);
        assert_eq!(tracker.pressed(), Some(PadId::Blue));

        assert_eq!(tracker.update(&mut pads, None), Some(PadId::Blue));
        assert_eq!(pads.lit_pad(), None);
        assert_eq!(tracker.pressed(), None);

        // Nothing held, nothing emitted
        assert_eq!(tracker.update(&mut pads, None), None);
    }

    #[test]
    fn test_slide_off_counts_as_release() {
        let mut pads = Pads::new();
        let mut tracker = InputTracker::new();

        tracker.update(&mut pads, Some(ON_YELLOW));
        assert_eq!(tracker.update(&mut pads, Some(GAP)), Some(PadId::Yellow));
        assert_eq!(pads.lit_count(), 0);
        assert_eq!(tracker.update(&mut pads, Some(GAP)), None);
    }

    #[test]
    fn test_slide_between_pads_reports_last_pad() {
        let mut pads = Pads::new();
        let mut tracker = InputTracker::new();

        tracker.update(&mut pads, Some(ON_BLUE));
        tracker.update(&mut pads, Some(ON_YELLOW));
        assert_eq!(pads.lit_pad(), Some(PadId::Yellow));
        assert_eq!(pads.lit_count(), 1);
        assert_eq!(tracker.update(&mut pads, None), Some(PadId::Yellow));
    }
}
