//! Square-quiz core for the chessboard memorization trainer.
//!
//! This crate is pure logic with no browser or rendering dependencies. It owns
//! the quiz state machine (mode changes, random target selection, guess
//! evaluation, orientation flip) and the display derivations the board
//! renderer consumes. The `client` crate holds a [`machine::Quiz`] inside a
//! reactive signal and redraws from [`machine::Snapshot`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`square`] | `File`, `Rank`, and `Square` types with label parsing |
//! | [`picker`] | Random target selection behind the [`picker::SquarePicker`] trait |
//! | [`machine`] | The quiz state machine and its snapshot |
//! | [`display`] | Display-order arrays, square parity, and board rows |

pub mod display;
pub mod machine;
pub mod picker;
pub mod square;
