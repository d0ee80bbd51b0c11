//! CSS class derivation for trainer controls and board cells.

#[cfg(test)]
#[path = "board_classes_test.rs"]
mod board_classes_test;

use quiz::display::SquareView;
use quiz::machine::Mode;

/// Class list for a mode button. The active mode gets its own accent.
pub fn mode_button_class(button: Mode, active: Mode) -> &'static str {
    match (button, button == active) {
        (Mode::Learn, true) => "btn mode-bar__button mode-bar__button--learn mode-bar__button--active",
        (Mode::Learn, false) => "btn mode-bar__button mode-bar__button--learn",
        (Mode::Start, true) => "btn mode-bar__button mode-bar__button--start mode-bar__button--active",
        (Mode::Start, false) => "btn mode-bar__button mode-bar__button--start",
    }
}

/// Class list for the flip button.
pub fn flip_button_class(flipped: bool) -> &'static str {
    if flipped {
        "btn mode-bar__button mode-bar__button--flip mode-bar__button--active"
    } else {
        "btn mode-bar__button mode-bar__button--flip"
    }
}

/// Class list for one board cell.
pub fn square_class(view: &SquareView) -> String {
    let mut class = String::from("board__square");
    class.push_str(if view.dark { " board__square--dark" } else { " board__square--light" });
    if view.highlighted {
        class.push_str(" board__square--target");
    }
    class
}
