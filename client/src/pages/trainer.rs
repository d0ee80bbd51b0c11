//! Trainer page: title, mode buttons, guess form, board, status line.

use leptos::prelude::*;
use quiz::machine::Mode;

use crate::components::{board_grid::BoardGrid, guess_form::GuessForm, mode_bar::ModeBar, status_line::StatusLine};
use crate::state::trainer::TrainerState;

/// Single-screen trainer. The guess form is mounted only while a quiz runs.
#[component]
pub fn TrainerPage() -> impl IntoView {
    let trainer = expect_context::<RwSignal<TrainerState>>();
    let started = move || trainer.with(|t| t.quiz.mode() == Mode::Start);

    view! {
        <div class="trainer-page">
            <header class="trainer-page__header">
                <h1 class="trainer-page__title">"Chessboard Memorization"</h1>
            </header>
            <ModeBar/>
            <Show when=started>
                <GuessForm/>
            </Show>
            <BoardGrid/>
            <StatusLine/>
        </div>
    }
}
