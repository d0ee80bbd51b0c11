//! Learn / Start mode buttons and the optional board flip control.

use leptos::prelude::*;
use quiz::machine::Mode;

use crate::state::trainer::TrainerState;
use crate::util::board_classes::{flip_button_class, mode_button_class};

/// Button row above the board.
///
/// The active mode is highlighted. Clicking Start while already started draws
/// a new target. The flip button appears only when the quiz allows it.
#[component]
pub fn ModeBar() -> impl IntoView {
    let trainer = expect_context::<RwSignal<TrainerState>>();

    let mode = move || trainer.with(|t| t.quiz.mode());
    let flipped = move || trainer.with(|t| t.quiz.flipped());
    let can_flip = trainer.with_untracked(TrainerState::can_flip);

    view! {
        <div class="mode-bar">
            <button
                class=move || mode_button_class(Mode::Learn, mode())
                on:click=move |_| trainer.update(TrainerState::learn)
            >
                "Learn"
            </button>
            <button
                class=move || mode_button_class(Mode::Start, mode())
                on:click=move |_| trainer.update(TrainerState::start)
            >
                "Start"
            </button>
            <Show when=move || can_flip>
                <button
                    class=move || flip_button_class(flipped())
                    title="Flip board orientation"
                    on:click=move |_| {
                        trainer.update(|t| {
                            t.flip();
                        });
                    }
                >
                    "Flip"
                </button>
            </Show>
        </div>
    }
}
