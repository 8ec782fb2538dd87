use ms_parser::safe_eval;

use crate::number_format::fmt_num;
use crate::strategy::Recognizer;
use crate::types::{SolutionResult, Verbosity};

/// Fixed narration for plain arithmetic.
pub const EVALUATE_STEP: &str =
    "Evaluate the expression using order of operations (BODMAS/PEMDAS).";

/// Terminal fallback: evaluate the text as a plain arithmetic expression.
///
/// Declines anything the safe evaluator rejects, which includes every text
/// with characters outside its allow-list.
pub struct ArithmeticRecognizer;

impl Recognizer for ArithmeticRecognizer {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn attempt(&self, text: &str, _verbosity: Verbosity) -> Option<SolutionResult> {
        let value = safe_eval(text)?;
        Some(SolutionResult::new(
            vec![EVALUATE_STEP.to_string()],
            fmt_num(value),
        ))
    }
}
