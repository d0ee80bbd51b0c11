use std::collections::HashMap;

use super::*;

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

fn started(target: &str, flipped: bool) -> Snapshot {
    Snapshot { mode: Mode::Start, target: Some(sq(target)), flipped, ..Snapshot::default() }
}

// --- coordinates ---

#[test]
fn coordinates_shown_only_in_learn_mode() {
    assert!(show_coordinates(Mode::Learn));
    assert!(!show_coordinates(Mode::Start));
}

// --- display order ---

#[test]
fn unflipped_order_is_white_side_view() {
    let files: String = display_files(false).iter().map(|f| f.as_char()).collect();
    let ranks: Vec<u8> = display_ranks(false).iter().map(|r| r.number()).collect();
    assert_eq!(files, "abcdefgh");
    assert_eq!(ranks, vec![8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn flipped_order_reverses_both_axes() {
    let files: String = display_files(true).iter().map(|f| f.as_char()).collect();
    let ranks: Vec<u8> = display_ranks(true).iter().map(|r| r.number()).collect();
    assert_eq!(files, "hgfedcba");
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

// --- parity ---

#[test]
fn corner_colours_match_a_real_board() {
    assert!(is_dark(sq("a1")));
    assert!(is_dark(sq("h8")));
    assert!(!is_dark(sq("h1")));
    assert!(!is_dark(sq("a8")));
}

#[test]
fn thirty_two_dark_squares() {
    assert_eq!(Square::all().filter(|s| is_dark(*s)).count(), 32);
}

#[test]
fn parity_is_invariant_under_flip() {
    let colours = |flipped: bool| -> HashMap<Square, bool> {
        board_rows(&Snapshot { flipped, ..Snapshot::default() })
            .into_iter()
            .flatten()
            .map(|v| (v.square, v.dark))
            .collect()
    };
    assert_eq!(colours(false), colours(true));
}

// --- board rows ---

#[test]
fn board_rows_cover_every_square_once() {
    let rows = board_rows(&Snapshot::default());
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.len() == 8));
    let mut labels: Vec<String> = rows.iter().flatten().map(|v| v.square.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), 64);
}

#[test]
fn board_rows_top_left_follows_orientation() {
    let normal = board_rows(&Snapshot::default());
    assert_eq!(normal[0][0].square, sq("a8"));
    assert_eq!(normal[7][7].square, sq("h1"));

    let flipped = board_rows(&Snapshot { flipped: true, ..Snapshot::default() });
    assert_eq!(flipped[0][0].square, sq("h1"));
    assert_eq!(flipped[7][7].square, sq("a8"));
}

#[test]
fn only_target_is_highlighted() {
    for flipped in [false, true] {
        let highlighted: Vec<Square> = board_rows(&started("d5", flipped))
            .into_iter()
            .flatten()
            .filter(|v| v.highlighted)
            .map(|v| v.square)
            .collect();
        assert_eq!(highlighted, vec![sq("d5")]);
    }
}

#[test]
fn learn_mode_highlights_nothing() {
    let any = board_rows(&Snapshot::default()).into_iter().flatten().any(|v| v.highlighted);
    assert!(!any);
}
