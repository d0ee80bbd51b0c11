//! Guess input shown while a quiz is running.

use leptos::prelude::*;

use crate::state::trainer::TrainerState;

/// Text input plus submit button.
///
/// The input mirrors the stored guess verbatim; trimming and case folding
/// happen only when the guess is submitted.
#[component]
pub fn GuessForm() -> impl IntoView {
    let trainer = expect_context::<RwSignal<TrainerState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Refocus on mount and on every new target.
    Effect::new(move |_| {
        let _target = trainer.with(|t| t.quiz.target());
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        trainer.update(|t| {
            t.submit();
        });
    };

    view! {
        <form class="guess-form" on:submit=on_submit>
            <input
                class="guess-form__input"
                type="text"
                placeholder="e.g. f3"
                autocomplete="off"
                spellcheck="false"
                node_ref=input_ref
                prop:value=move || trainer.with(|t| t.quiz.guess().to_owned())
                on:input=move |ev| trainer.update(|t| t.set_guess(event_target_value(&ev)))
            />
            <button class="btn guess-form__submit" type="submit">
                "Submit Guess"
            </button>
        </form>
    }
}
