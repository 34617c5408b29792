//! Random pad sequence for one game

use rand::Rng;

use super::pad::PadId;

/// Ordered pad identities the player must reproduce. Never mutated after
/// construction; a new game builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pads: Vec<PadId>,
}

impl Sequence {
    /// Draw `length` pads independently and uniformly
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        let pads = (0..length)
            .map(|_| PadId::ALL[rng.random_range(0..PadId::COUNT)])
            .collect();
        Self { pads }
    }

    /// Build from explicit pads (replays and tests)
    pub fn from_pads(pads: Vec<PadId>) -> Self {
        Self { pads }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<PadId> {
        self.pads.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    pub fn as_slice(&self) -> &[PadId] {
        &self.pads
    }
}
