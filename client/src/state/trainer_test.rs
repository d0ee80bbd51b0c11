use quiz::machine::{Mode, WrongGuessPolicy};

use super::*;

fn trainer() -> TrainerState {
    TrainerState::seeded(1234, QuizOptions::default())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn trainer_state_default_is_learn_mode() {
    let state = TrainerState::default();
    let snap = state.snapshot();
    assert_eq!(snap.mode, Mode::Learn);
    assert!(snap.target.is_none());
    assert!(snap.guess.is_empty());
    assert!(!snap.flipped);
}

#[test]
fn trainer_state_default_offers_flip() {
    assert!(TrainerState::default().can_flip());
}

#[test]
fn flip_hidden_when_disabled() {
    let state = TrainerState::seeded(1, QuizOptions { allow_flip: false, ..QuizOptions::default() });
    assert!(!state.can_flip());
}

// =============================================================
// Event handlers
// =============================================================

#[test]
fn start_then_learn_round_trip() {
    let mut state = trainer();
    state.start();
    assert_eq!(state.snapshot().mode, Mode::Start);
    assert!(state.snapshot().target.is_some());

    state.learn();
    assert_eq!(state.snapshot(), Snapshot::default());
}

#[test]
fn submitting_the_target_label_scores() {
    let mut state = trainer();
    state.start();
    let target = state.snapshot().target.unwrap();
    state.set_guess(format!("  {}  ", target.label().to_uppercase()));

    assert!(matches!(state.submit(), GuessOutcome::Correct { .. }));
    assert_eq!(state.snapshot().mode, Mode::Start);
    assert_eq!(state.snapshot().streak, 1);
    assert!(state.snapshot().guess.is_empty());
}

#[test]
fn submitting_garbage_returns_to_learn() {
    let mut state = trainer();
    state.start();
    state.set_guess("zz".to_owned());

    assert!(matches!(state.submit(), GuessOutcome::Wrong { .. }));
    assert_eq!(state.snapshot().mode, Mode::Learn);
}

#[test]
fn retry_policy_keeps_quiz_running() {
    let options = QuizOptions { wrong_guess: WrongGuessPolicy::RetryInPlace, ..QuizOptions::default() };
    let mut state = TrainerState::seeded(5, options);
    state.start();
    let target = state.snapshot().target;
    state.set_guess("zz".to_owned());
    state.submit();

    assert_eq!(state.snapshot().mode, Mode::Start);
    assert_eq!(state.snapshot().target, target);
}

#[test]
fn flip_toggles_without_changing_target() {
    let mut state = trainer();
    state.start();
    let target = state.snapshot().target;

    assert!(state.flip());
    assert_eq!(state.snapshot().target, target);
    assert!(!state.flip());
}

#[test]
fn seeded_trainers_draw_identical_targets() {
    let mut a = trainer();
    let mut b = trainer();
    a.start();
    b.start();
    assert_eq!(a.snapshot().target, b.snapshot().target);
}
