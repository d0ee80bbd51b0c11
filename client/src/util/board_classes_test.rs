use quiz::square::Square;

use super::*;

fn view(label: &str, dark: bool, highlighted: bool) -> SquareView {
    SquareView { square: label.parse::<Square>().unwrap(), dark, highlighted }
}

#[test]
fn active_mode_button_is_marked() {
    assert!(mode_button_class(Mode::Learn, Mode::Learn).ends_with("--active"));
    assert!(mode_button_class(Mode::Start, Mode::Start).ends_with("--active"));
    assert!(!mode_button_class(Mode::Learn, Mode::Start).contains("--active"));
    assert!(!mode_button_class(Mode::Start, Mode::Learn).contains("--active"));
}

#[test]
fn mode_buttons_keep_their_own_accent() {
    assert!(mode_button_class(Mode::Learn, Mode::Start).contains("--learn"));
    assert!(mode_button_class(Mode::Start, Mode::Learn).contains("--start"));
}

#[test]
fn flip_button_active_only_when_flipped() {
    assert!(flip_button_class(true).contains("--active"));
    assert!(!flip_button_class(false).contains("--active"));
}

#[test]
fn square_class_reflects_colour() {
    assert_eq!(square_class(&view("a1", true, false)), "board__square board__square--dark");
    assert_eq!(square_class(&view("h1", false, false)), "board__square board__square--light");
}

#[test]
fn square_class_marks_target() {
    assert_eq!(
        square_class(&view("e4", false, true)),
        "board__square board__square--light board__square--target"
    );
}
