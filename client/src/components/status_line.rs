//! One-line hint / streak readout under the board.

#[cfg(test)]
#[path = "status_line_test.rs"]
mod status_line_test;

use leptos::prelude::*;
use quiz::machine::{Mode, Snapshot};

use crate::state::trainer::TrainerState;

/// Text shown under the board for a given snapshot.
pub fn status_message(snapshot: &Snapshot) -> String {
    match (snapshot.mode, snapshot.streak) {
        (Mode::Learn, _) => "Study the coordinates, then press Start.".to_owned(),
        (Mode::Start, 0) => "Name the highlighted square.".to_owned(),
        (Mode::Start, 1) => "1 correct in a row.".to_owned(),
        (Mode::Start, n) => format!("{n} correct in a row."),
    }
}

#[component]
pub fn StatusLine() -> impl IntoView {
    let trainer = expect_context::<RwSignal<TrainerState>>();
    let message = move || trainer.with(|t| status_message(&t.snapshot()));

    view! { <p class="status-line">{message}</p> }
}
