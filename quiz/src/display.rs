//! Display derivations for the board renderer.
//!
//! Nothing here is state. Each function maps a [`Snapshot`] (or one of its
//! fields) to what the board should show. Orientation only reorders files
//! and ranks; square colour always comes from canonical indices.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::machine::{Mode, Snapshot};
use crate::square::{File, Rank, Square};

/// Coordinate labels are shown only while learning.
#[must_use]
pub fn show_coordinates(mode: Mode) -> bool {
    mode == Mode::Learn
}

/// Files left to right: `a..h`, or `h..a` when flipped.
#[must_use]
pub fn display_files(flipped: bool) -> [File; 8] {
    let mut files = File::ALL;
    if flipped {
        files.reverse();
    }
    files
}

/// Ranks top to bottom: `8..1`, or `1..8` when flipped.
#[must_use]
pub fn display_ranks(flipped: bool) -> [Rank; 8] {
    let mut ranks = Rank::ALL;
    if !flipped {
        ranks.reverse();
    }
    ranks
}

/// Dark squares have odd `file_index + row_index`, where `row_index` counts
/// from rank 8 at the top of the unflipped board.
#[must_use]
pub fn is_dark(square: Square) -> bool {
    let row_index = Rank::ALL.len() - 1 - square.rank.index();
    (square.file.index() + row_index) % 2 == 1
}

/// One rendered board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub dark: bool,
    pub highlighted: bool,
}

/// Board cells grouped into rows, top row first, in display order.
#[must_use]
pub fn board_rows(snapshot: &Snapshot) -> Vec<Vec<SquareView>> {
    let files = display_files(snapshot.flipped);
    display_ranks(snapshot.flipped)
        .into_iter()
        .map(|rank| {
            files
                .into_iter()
                .map(|file| {
                    let square = Square::new(file, rank);
                    SquareView { square, dark: is_dark(square), highlighted: snapshot.target == Some(square) }
                })
                .collect()
        })
        .collect()
}
