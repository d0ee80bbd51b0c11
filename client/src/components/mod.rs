//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the trainer signal from Leptos context, render one slice of
//! the page, and forward user events to [`crate::state::trainer::TrainerState`].

pub mod board_grid;
pub mod guess_form;
pub mod mode_bar;
pub mod status_line;
