use crate::types::{SolutionResult, Verbosity};

pub trait Recognizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Attempts to solve `text` with this recognizer's grammar.
    /// Returns:
    /// - None: the text is not in this recognizer's canonical form.
    /// - Some(result): the text matched completely and was solved.
    ///
    /// `text` has already been through `ms_parser::normalize`.
    fn attempt(&self, text: &str, verbosity: Verbosity) -> Option<SolutionResult>;
}
