//! Square-quiz state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two modes. `Learn` shows coordinates and has no target. `Start` hides
//! coordinates and asks the user to name a highlighted target square. All
//! mutation goes through the methods on [`Quiz`]; the renderer reads a
//! [`Snapshot`] and never touches fields directly.
//!
//! Invariant: `target` is `None` exactly when `mode == Learn`.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use crate::picker::SquarePicker;
use crate::square::Square;

/// Top-level trainer mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Coordinates visible, no target.
    #[default]
    Learn,
    /// Active quiz with a highlighted target.
    Start,
}

/// What a wrong guess does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WrongGuessPolicy {
    /// Leave the quiz and return to `Learn` mode.
    #[default]
    ResetToLearn,
    /// Stay on the same target with a cleared guess.
    RetryInPlace,
}

/// Feature switches for a [`Quiz`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOptions {
    /// Whether [`Quiz::toggle_orientation`] has any effect.
    pub allow_flip: bool,
    pub wrong_guess: WrongGuessPolicy,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self { allow_flip: true, wrong_guess: WrongGuessPolicy::ResetToLearn }
    }
}

/// Result of [`Quiz::submit_guess`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Submitted outside `Start` mode; nothing changed.
    Inactive,
    /// Guess matched. `next` is the freshly drawn target (may equal `answered`).
    Correct { answered: Square, next: Square },
    /// Guess did not match. `guessed` is the normalized text.
    Wrong { expected: Square, guessed: String },
}

/// Read-only view of the quiz consumed by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: Mode,
    pub target: Option<Square>,
    pub guess: String,
    pub flipped: bool,
    /// Correct answers since the current `Start` run began.
    pub streak: u32,
}

/// Trim and lower-case guess text before comparison.
#[must_use]
pub fn normalize_guess(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The quiz state machine, generic over its target source.
#[derive(Clone, Debug)]
pub struct Quiz<P> {
    state: Snapshot,
    options: QuizOptions,
    picker: P,
}

impl<P: SquarePicker> Quiz<P> {
    /// New quiz in `Learn` mode with default options.
    #[must_use]
    pub fn new(picker: P) -> Self {
        Self::with_options(picker, QuizOptions::default())
    }

    #[must_use]
    pub fn with_options(picker: P, options: QuizOptions) -> Self {
        Self { state: Snapshot::default(), options, picker }
    }

    #[must_use]
    pub fn options(&self) -> QuizOptions {
        self.options
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[must_use]
    pub fn target(&self) -> Option<Square> {
        self.state.target
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        &self.state.guess
    }

    #[must_use]
    pub fn flipped(&self) -> bool {
        self.state.flipped
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    /// Copy of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    /// Switch to `Learn`: no target, empty guess. Orientation is kept.
    pub fn enter_learn_mode(&mut self) {
        self.state.mode = Mode::Learn;
        self.state.target = None;
        self.state.guess.clear();
        self.state.streak = 0;
    }

    /// Switch to `Start` and draw a fresh target. Also restarts an active run.
    pub fn enter_start_mode(&mut self) -> Square {
        let target = self.picker.pick();
        self.state.mode = Mode::Start;
        self.state.guess.clear();
        self.state.streak = 0;
        self.state.target = Some(target);
        target
    }

    /// Store the input text verbatim; normalization happens on submit.
    pub fn update_guess_text(&mut self, text: impl Into<String>) {
        self.state.guess = text.into();
    }

    /// Evaluate the pending guess against the canonical target label.
    ///
    /// Orientation never affects the comparison.
    pub fn submit_guess(&mut self) -> GuessOutcome {
        let Some(expected) = self.active_target() else {
            return GuessOutcome::Inactive;
        };

        let guessed = normalize_guess(&self.state.guess);
        if guessed == expected.label() {
            let next = self.picker.pick();
            self.state.guess.clear();
            self.state.streak = self.state.streak.saturating_add(1);
            self.state.target = Some(next);
            return GuessOutcome::Correct { answered: expected, next };
        }

        match self.options.wrong_guess {
            WrongGuessPolicy::ResetToLearn => self.enter_learn_mode(),
            WrongGuessPolicy::RetryInPlace => {
                self.state.guess.clear();
                self.state.streak = 0;
            }
        }
        GuessOutcome::Wrong { expected, guessed }
    }

    /// Flip the display orientation when flipping is enabled. Returns the
    /// resulting flag.
    pub fn toggle_orientation(&mut self) -> bool {
        if self.options.allow_flip {
            self.state.flipped = !self.state.flipped;
        }
        self.state.flipped
    }

    fn active_target(&self) -> Option<Square> {
        match self.state.mode {
            Mode::Start => self.state.target,
            Mode::Learn => None,
        }
    }
}
