//! Trainer state held in the root `RwSignal`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never mutate quiz fields directly. Every event handler calls one
//! of the methods below inside `signal.update(..)`, and every view reads a
//! [`Snapshot`] derived from the signal.

#[cfg(test)]
#[path = "trainer_test.rs"]
mod trainer_test;

use quiz::machine::{GuessOutcome, Quiz, QuizOptions, Snapshot};
use quiz::picker::RandomPicker;

use crate::util::seed;

/// Root trainer state. Options live on the quiz itself.
#[derive(Clone, Debug)]
pub struct TrainerState {
    pub quiz: Quiz<RandomPicker>,
}

impl Default for TrainerState {
    fn default() -> Self {
        Self::with_options(QuizOptions::default())
    }
}

impl TrainerState {
    /// Fresh trainer in `Learn` mode with an entropy-seeded picker.
    pub fn with_options(options: QuizOptions) -> Self {
        Self::seeded(seed::entropy_seed(), options)
    }

    /// Fresh trainer with a fixed picker seed.
    pub fn seeded(seed: u64, options: QuizOptions) -> Self {
        Self { quiz: Quiz::with_options(RandomPicker::seeded(seed), options) }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.quiz.snapshot()
    }

    /// Whether the flip control should be offered.
    pub fn can_flip(&self) -> bool {
        self.quiz.options().allow_flip
    }

    pub fn learn(&mut self) {
        self.quiz.enter_learn_mode();
        #[cfg(feature = "hydrate")]
        log::debug!("mode: learn");
    }

    pub fn start(&mut self) {
        let target = self.quiz.enter_start_mode();
        #[cfg(feature = "hydrate")]
        log::debug!("mode: start, target {target}");
        #[cfg(not(feature = "hydrate"))]
        let _ = target;
    }

    pub fn set_guess(&mut self, text: String) {
        self.quiz.update_guess_text(text);
    }

    pub fn submit(&mut self) -> GuessOutcome {
        let outcome = self.quiz.submit_guess();
        #[cfg(feature = "hydrate")]
        {
            match &outcome {
                GuessOutcome::Correct { answered, next } => {
                    log::debug!("correct: {answered}, next {next}, streak {}", self.quiz.streak());
                }
                GuessOutcome::Wrong { expected, guessed } => {
                    log::debug!("wrong: guessed {guessed:?}, expected {expected}");
                }
                GuessOutcome::Inactive => log::debug!("submit ignored outside start mode"),
            }
        }
        outcome
    }

    pub fn flip(&mut self) -> bool {
        self.quiz.toggle_orientation()
    }
}
