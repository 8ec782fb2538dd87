//! Step-by-step solving of short maths problems.
//!
//! A fixed chain of recognizers (linear equation, quadratic equation,
//! percentage phrase, plain arithmetic) is tried in order; the first one whose
//! grammar accepts the input produces the narrated solution.

pub mod arithmetic;
pub mod dispatch;
pub mod linear;
pub mod number_format;
pub mod percentage;
pub mod quadratic;
pub mod strategy;
pub mod types;

pub use dispatch::{solve, Dispatcher, TracedSolution};
pub use strategy::Recognizer;
pub use types::{SolutionResult, SolveOutcome, Verbosity};
