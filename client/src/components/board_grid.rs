//! The 8x8 board with coordinate labels on every side.

use leptos::prelude::*;
use quiz::display::{board_rows, display_files, display_ranks, show_coordinates};
use quiz::machine::Snapshot;

use crate::state::trainer::TrainerState;
use crate::util::board_classes::square_class;

/// Board grid drawn from the current snapshot.
///
/// In Learn mode every cell carries its own label and the edges show file
/// letters and rank numbers. In Start mode labels disappear and the target
/// cell gets a highlight border. Orientation only changes the order.
#[component]
pub fn BoardGrid() -> impl IntoView {
    let trainer = expect_context::<RwSignal<TrainerState>>();
    let snapshot = Memo::new(move |_| trainer.with(TrainerState::snapshot));

    view! {
        <div class="board">
            {move || file_labels("top", &snapshot.get())}
            <div class="board__middle">
                {move || rank_labels("left", &snapshot.get())}
                <div class="board__grid">
                    {move || {
                        let snap = snapshot.get();
                        let labelled = show_coordinates(snap.mode);
                        board_rows(&snap)
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <div class="board__row">
                                        {row
                                            .into_iter()
                                            .map(|cell| {
                                                let label = cell.square.label();
                                                let data_square = label.clone();
                                                view! {
                                                    <div class=square_class(&cell) data-square=data_square>
                                                        {labelled
                                                            .then(|| {
                                                                view! {
                                                                    <span class="board__square-label">{label}</span>
                                                                }
                                                            })}
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                {move || rank_labels("right", &snapshot.get())}
            </div>
            {move || file_labels("bottom", &snapshot.get())}
        </div>
    }
}

fn file_labels(edge: &'static str, snap: &Snapshot) -> Option<impl IntoView + use<>> {
    if !show_coordinates(snap.mode) {
        return None;
    }
    let labels = display_files(snap.flipped)
        .into_iter()
        .map(|file| view! { <span class="board__label">{file.to_string()}</span> })
        .collect::<Vec<_>>();
    Some(view! { <div class=format!("board__files board__files--{edge}")>{labels}</div> })
}

fn rank_labels(edge: &'static str, snap: &Snapshot) -> Option<impl IntoView + use<>> {
    if !show_coordinates(snap.mode) {
        return None;
    }
    let labels = display_ranks(snap.flipped)
        .into_iter()
        .map(|rank| view! { <span class="board__label">{rank.to_string()}</span> })
        .collect::<Vec<_>>();
    Some(view! { <div class=format!("board__ranks board__ranks--{edge}")>{labels}</div> })
}
