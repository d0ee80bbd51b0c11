//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The trainer has exactly one piece of state, the quiz machine, held in a
//! single `RwSignal` provided from [`crate::app::App`].

pub mod trainer;
