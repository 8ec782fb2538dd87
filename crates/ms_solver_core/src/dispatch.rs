//! Solve dispatcher: recognizers tried in a fixed priority order.

use std::sync::OnceLock;

use ms_parser::normalize;

use crate::arithmetic::ArithmeticRecognizer;
use crate::linear::LinearRecognizer;
use crate::percentage::PercentageRecognizer;
use crate::quadratic::QuadraticRecognizer;
use crate::strategy::Recognizer;
use crate::types::{SolutionResult, SolveOutcome, Verbosity};

/// A solution together with the name of the recognizer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedSolution {
    pub strategy: &'static str,
    pub result: SolutionResult,
}

pub struct Dispatcher {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Standard chain. Structured equations come before the raw evaluator so
    /// that an equation is never mistaken for a bare expression.
    pub fn new() -> Self {
        Self::with_recognizers(vec![
            Box::new(LinearRecognizer),
            Box::new(QuadraticRecognizer),
            Box::new(PercentageRecognizer),
            Box::new(ArithmeticRecognizer), // Terminal fallback
        ])
    }

    pub fn with_recognizers(recognizers: Vec<Box<dyn Recognizer>>) -> Self {
        Self { recognizers }
    }

    /// Recognizer names in the order they are tried.
    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Solve and report which recognizer accepted the input.
    pub fn solve_traced(&self, problem: &str, verbosity: Verbosity) -> Option<TracedSolution> {
        let text = normalize(problem);

        for recognizer in &self.recognizers {
            match recognizer.attempt(&text, verbosity) {
                Some(result) if result.is_well_formed() => {
                    tracing::debug!(
                        target: "solve",
                        strategy = recognizer.name(),
                        steps = result.steps.len(),
                        "solved"
                    );
                    return Some(TracedSolution {
                        strategy: recognizer.name(),
                        result,
                    });
                }
                Some(_) => {
                    tracing::warn!(
                        target: "solve",
                        strategy = recognizer.name(),
                        "recognizer returned an empty solution; skipping"
                    );
                }
                None => {
                    tracing::trace!(target: "solve", strategy = recognizer.name(), "declined");
                }
            }
        }

        tracing::debug!(target: "solve", input = %text, "unsolved");
        None
    }

    pub fn solve(&self, problem: &str, verbosity: Verbosity) -> SolveOutcome {
        self.solve_traced(problem, verbosity)
            .map(|traced| traced.result)
            .into()
    }
}

fn default_dispatcher() -> &'static Dispatcher {
    static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();
    DISPATCHER.get_or_init(Dispatcher::new)
}

/// Solve `problem` with the standard recognizer chain.
///
/// `verbosity` accepts a [`Verbosity`] or a `bool` (`true` = detailed).
/// Callers are expected to trim and reject empty input beforehand.
pub fn solve(problem: &str, verbosity: impl Into<Verbosity>) -> SolveOutcome {
    default_dispatcher().solve(problem, verbosity.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, Option<SolutionResult>);

    impl Recognizer for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn attempt(&self, _text: &str, _verbosity: Verbosity) -> Option<SolutionResult> {
            self.1.clone()
        }
    }

    fn answer(a: &str) -> Option<SolutionResult> {
        Some(SolutionResult::new(vec!["step".to_string()], a))
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            Dispatcher::new().recognizer_names(),
            vec!["linear", "quadratic", "percentage", "arithmetic"]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let dispatcher = Dispatcher::with_recognizers(vec![
            Box::new(Fixed("none", None)),
            Box::new(Fixed("first", answer("1"))),
            Box::new(Fixed("second", answer("2"))),
        ]);
        let traced = dispatcher.solve_traced("anything", Verbosity::Detailed).unwrap();
        assert_eq!(traced.strategy, "first");
        assert_eq!(traced.result.answer, "1");
    }

    #[test]
    fn test_malformed_result_is_skipped() {
        let dispatcher = Dispatcher::with_recognizers(vec![
            Box::new(Fixed("empty", Some(SolutionResult::new(vec![], "")))),
            Box::new(Fixed("good", answer("ok"))),
        ]);
        let traced = dispatcher.solve_traced("x", Verbosity::Concise).unwrap();
        assert_eq!(traced.strategy, "good");
    }

    #[test]
    fn test_all_declined_is_unsolved() {
        let dispatcher = Dispatcher::with_recognizers(vec![Box::new(Fixed("none", None))]);
        assert_eq!(dispatcher.solve("x", Verbosity::Detailed), SolveOutcome::Unsolved);
    }

    #[test]
    fn test_equation_is_not_evaluated_as_arithmetic() {
        let traced = Dispatcher::new()
            .solve_traced("2x+3=7", Verbosity::Detailed)
            .unwrap();
        assert_eq!(traced.strategy, "linear");
        assert_eq!(traced.result.answer, "x = 2");
    }

    #[test]
    fn test_solve_accepts_bool_verbosity() {
        let outcome = solve("2x+3=7", false);
        assert_eq!(outcome.solution().map(|r| r.steps.len()), Some(2));
    }
}
