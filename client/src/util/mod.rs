//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure view
//! derivations from component wiring so they can be tested natively.

pub mod board_classes;
pub mod seed;
