//! The four colored pads and board hit-testing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::consts::*;

/// Pad identity. Discriminants are the stable indices 0..3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadId {
    /// Top-left
    Blue = 0,
    /// Top-right
    Green = 1,
    /// Bottom-left
    Red = 2,
    /// Bottom-right
    Yellow = 3,
}

impl PadId {
    pub const COUNT: usize = 4;
    pub const ALL: [PadId; Self::COUNT] = [PadId::Blue, PadId::Green, PadId::Red, PadId::Yellow];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Top-left corner of this pad on the board
    pub fn origin(self) -> Vec2 {
        let far = BOARD_SIZE - PAD_SIZE;
        match self {
            PadId::Blue => Vec2::new(0.0, 0.0),
            PadId::Green => Vec2::new(far, 0.0),
            PadId::Red => Vec2::new(0.0, far),
            PadId::Yellow => Vec2::new(far, far),
        }
    }

    /// RGBA fill for the unlit / lit state
    pub fn color(self, lit: bool) -> [u8; 4] {
        let (dark, light) = match self {
            PadId::Blue => ([0x00, 0x00, 0x33], [0x00, 0x00, 0xff]),
            PadId::Green => ([0x00, 0x33, 0x00], [0x00, 0xff, 0x00]),
            PadId::Red => ([0x33, 0x00, 0x00], [0xff, 0x00, 0x00]),
            PadId::Yellow => ([0x33, 0x33, 0x00], [0xff, 0xff, 0x00]),
        };
        let [r, g, b] = if lit { light } else { dark };
        [r, g, b, 0xff]
    }
}

/// A single pad on the board
#[derive(Debug, Clone)]
pub struct Pad {
    pub id: PadId,
    pub region: Rect,
    pub lit: bool,
}

impl Pad {
    pub fn new(id: PadId) -> Self {
        Self {
            id,
            region: Rect::new(id.origin(), Vec2::splat(PAD_SIZE)),
            lit: false,
        }
    }
}

/// The pad registry: all four pads in `PadId` order
#[derive(Debug, Clone)]
pub struct Pads {
    pads: [Pad; PadId::COUNT],
}

impl Default for Pads {
    fn default() -> Self {
        Self::new()
    }
}

impl Pads {
    pub fn new() -> Self {
        Self {
            pads: PadId::ALL.map(Pad::new),
        }
    }

    pub fn get(&self, id: PadId) -> &Pad {
        &self.pads[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pad> {
        self.pads.iter()
    }

    /// Turn every pad off
    pub fn all_off(&mut self) {
        for pad in &mut self.pads {
            pad.lit = false;
        }
    }

    /// Light one pad (others are left as they are)
    pub fn light(&mut self, id: PadId) {
        self.pads[id.index()].lit = true;
    }

    /// The lit pad, if any (first in id order)
    pub fn lit_pad(&self) -> Option<PadId> {
        self.pads.iter().find(|p| p.lit).map(|p| p.id)
    }

    pub fn lit_count(&self) -> usize {
        self.pads.iter().filter(|p| p.lit).count()
    }

    /// Hit-test a board position. Positions off the board or in the gaps
    /// between pads return `None`.
    pub fn pad_at(&self, point: Vec2) -> Option<PadId> {
        self.pads
            .iter()
            .find(|p| p.region.contains(point))
            .map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pad_layout() {
        let pads = Pads::new();
        assert_eq!(pads.get(PadId::Blue).region.min, Vec2::ZERO);
        assert_eq!(pads.get(PadId::Green).region.min, Vec2::new(260.0, 0.0));
        assert_eq!(pads.get(PadId::Red).region.min, Vec2::new(0.0, 260.0));
        assert_eq!(pads.get(PadId::Yellow).region.max, Vec2::new(480.0, 480.0));
        for pad in pads.iter() {
            assert_eq!(pad.region.size(), Vec2::splat(PAD_SIZE));
            assert!(!pad.lit);
        }
    }

    #[test]
    fn test_pad_at_corners_and_gap() {
        let pads = Pads::new();
        assert_eq!(pads.pad_at(Vec2::new(10.0, 10.0)), Some(PadId::Blue));
        assert_eq!(pads.pad_at(Vec2::new(470.0, 10.0)), Some(PadId::Green));
        assert_eq!(pads.pad_at(Vec2::new(10.0, 470.0)), Some(PadId::Red));
        assert_eq!(pads.pad_at(Vec2::new(470.0, 470.0)), Some(PadId::Yellow));
        // Center cross between pads
        assert_eq!(pads.pad_at(Vec2::new(240.0, 240.0)), None);
        assert_eq!(pads.pad_at(Vec2::new(220.0, 10.0)), None);
        // Off the board
        assert_eq!(pads.pad_at(Vec2::new(-1.0, 10.0)), None);
        assert_eq!(pads.pad_at(Vec2::new(480.0, 480.0)), None);
    }

    #[test]
    fn test_light_and_all_off() {
        let mut pads = Pads::new();
        pads.light(PadId::Red);
        assert_eq!(pads.lit_pad(), Some(PadId::Red));
        assert_eq!(pads.lit_count(), 1);
        pads.all_off();
        assert_eq!(pads.lit_pad(), None);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, id) in PadId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(PadId::from_index(i), Some(*id));
        }
        assert_eq!(PadId::from_index(4), None);
    }

    #[test]
    fn test_colors_brighten_when_lit() {
        assert_eq!(PadId::Yellow.color(false), [0x33, 0x33, 0x00, 0xff]);
        assert_eq!(PadId::Yellow.color(true), [0xff, 0xff, 0x00, 0xff]);
        assert_eq!(PadId::Blue.color(true), [0x00, 0x00, 0xff, 0xff]);
    }

    proptest! {
        #[test]
        fn prop_hit_matches_region(x in -100.0f32..600.0, y in -100.0f32..600.0) {
            let pads = Pads::new();
            let point = Vec2::new(x, y);
            match pads.pad_at(point) {
                Some(id) => prop_assert!(pads.get(id).region.contains(point)),
                None => prop_assert!(pads.iter().all(|p| !p.region.contains(point))),
            }
        }
    }
}
