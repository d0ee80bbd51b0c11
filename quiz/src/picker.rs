//! Random target selection.
//!
//! The state machine draws targets through [`SquarePicker`] so tests can
//! script the sequence and the browser can seed from its own entropy.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::square::{File, Rank, Square};

/// Source of quiz targets.
pub trait SquarePicker {
    /// Return the next target. Repeats, including back-to-back, are allowed.
    fn pick(&mut self) -> Square;
}

/// Uniform picker: file and rank are sampled independently, so each of the
/// 64 squares has probability 1/64 on every draw.
#[derive(Clone, Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Deterministic picker for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl SquarePicker for RandomPicker {
    fn pick(&mut self) -> Square {
        let file = File::ALL[self.rng.random_range(0..File::ALL.len())];
        let rank = Rank::ALL[self.rng.random_range(0..Rank::ALL.len())];
        Square::new(file, rank)
    }
}

impl<F> SquarePicker for F
where
    F: FnMut() -> Square,
{
    fn pick(&mut self) -> Square {
        self()
    }
}
