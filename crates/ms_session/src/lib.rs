//! Persistence collaborators for the solver front ends.
//!
//! The solver core is pure; everything that survives a process restart lives here.

pub mod history;

pub use history::{HistoryError, HistoryStore, MAX_HISTORY};
