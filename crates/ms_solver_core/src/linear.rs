//! Linear equations in the canonical form `ax+b=c`.

use ms_parser::{compact, strip_whitespace};
use ms_parser::lexeme::{coefficient, signed_decimal, signed_term};
use nom::{
    character::complete::{char, one_of},
    combinator::{all_consuming, opt},
    IResult,
};

use crate::number_format::{fmt_num, signed_suffix};
use crate::strategy::Recognizer;
use crate::types::{SolutionResult, Verbosity};

/// Coefficients of `ax + b = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LinearCoeffs {
    /// Right-hand side once the constant has been moved across: `c - b`.
    pub fn moved_rhs(&self) -> f64 {
        self.c - self.b
    }

    /// `(c - b) / a`. A zero `a` gives an infinite or NaN value.
    pub fn solve_x(&self) -> f64 {
        self.moved_rhs() / self.a
    }
}

pub(crate) fn variable(input: &str) -> IResult<&str, char> {
    one_of("xX")(input)
}

fn linear_equation(input: &str) -> IResult<&str, LinearCoeffs> {
    let (input, a) = coefficient(input)?;
    let (input, _) = variable(input)?;
    let (input, b) = opt(signed_term)(input)?;
    let (input, _) = char('=')(input)?;
    let (input, c) = signed_decimal(input)?;
    Ok((
        input,
        LinearCoeffs {
            a,
            b: b.unwrap_or(0.0),
            c,
        },
    ))
}

/// Parse normalized text that has no whitespace left in it.
fn parse_linear(eq: &str) -> Option<LinearCoeffs> {
    let parsed = all_consuming(linear_equation)(eq).ok();
    parsed.map(|(_, coeffs)| coeffs)
}

/// Match raw `text` against the linear grammar, ignoring whitespace.
pub fn match_linear(text: &str) -> Option<LinearCoeffs> {
    parse_linear(&compact(text))
}

/// Narration restating the equation.
pub fn start_message(coeffs: &LinearCoeffs) -> String {
    format!(
        "Start with {}x {} = {}",
        fmt_num(coeffs.a),
        signed_suffix(coeffs.b),
        fmt_num(coeffs.c)
    )
}

/// Narration for moving the constant term to the right-hand side.
pub fn move_constant_message(coeffs: &LinearCoeffs) -> String {
    format!(
        "Move constant term: {}x = {}",
        fmt_num(coeffs.a),
        fmt_num(coeffs.moved_rhs())
    )
}

/// Narration for the final division by the coefficient.
pub fn divide_message(coeffs: &LinearCoeffs) -> String {
    format!(
        "Divide by {}: x = {} / {}",
        fmt_num(coeffs.a),
        fmt_num(coeffs.moved_rhs()),
        fmt_num(coeffs.a)
    )
}

/// Build the narrated solution; concise mode skips the move-constant step.
pub fn narrate(coeffs: &LinearCoeffs, verbosity: Verbosity) -> SolutionResult {
    let mut steps = vec![start_message(coeffs)];
    if verbosity.is_detailed() {
        steps.push(move_constant_message(coeffs));
    }
    steps.push(divide_message(coeffs));

    SolutionResult::new(steps, format!("x = {}", fmt_num(coeffs.solve_x())))
}

pub struct LinearRecognizer;

impl Recognizer for LinearRecognizer {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn attempt(&self, text: &str, verbosity: Verbosity) -> Option<SolutionResult> {
        let coeffs = parse_linear(&strip_whitespace(text))?;
        tracing::trace!(target: "solve", a = coeffs.a, b = coeffs.b, c = coeffs.c, "linear match");
        Some(narrate(&coeffs, verbosity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coeffs(a: f64, b: f64, c: f64) -> LinearCoeffs {
        LinearCoeffs { a, b, c }
    }

    #[test]
    fn test_match_canonical_forms() {
        assert_eq!(match_linear("2x+3=7"), Some(coeffs(2.0, 3.0, 7.0)));
        assert_eq!(match_linear("2 x + 3 = 7"), Some(coeffs(2.0, 3.0, 7.0)));
        assert_eq!(match_linear("-x-4=-10"), Some(coeffs(-1.0, -4.0, -10.0)));
        assert_eq!(match_linear("+x=5"), Some(coeffs(1.0, 0.0, 5.0)));
        assert_eq!(match_linear("0.5X+1.5=2"), Some(coeffs(0.5, 1.5, 2.0)));
        assert_eq!(match_linear("3x − 2 = 4"), Some(coeffs(3.0, -2.0, 4.0)));
    }

    #[test]
    fn test_rejects_other_forms() {
        assert_eq!(match_linear("x^2+2x+1=0"), None);
        assert_eq!(match_linear("2x+3"), None);
        assert_eq!(match_linear("2y+3=7"), None);
        assert_eq!(match_linear("3+2x=7"), None);
        assert_eq!(match_linear("2x+3=7x"), None);
        assert_eq!(match_linear("2x+3=7 and more"), None);
    }

    #[test]
    fn test_detailed_narration() {
        let result = narrate(&coeffs(2.0, 3.0, 7.0), Verbosity::Detailed);
        assert_eq!(
            result.steps,
            vec![
                "Start with 2x + 3 = 7",
                "Move constant term: 2x = 4",
                "Divide by 2: x = 4 / 2",
            ]
        );
        assert_eq!(result.answer, "x = 2");
    }

    #[test]
    fn test_concise_drops_move_step() {
        let result = narrate(&coeffs(-1.0, -4.0, -10.0), Verbosity::Concise);
        assert_eq!(
            result.steps,
            vec!["Start with -1x - 4 = -10", "Divide by -1: x = -6 / -1"]
        );
        assert_eq!(result.answer, "x = 6");
    }

    #[test]
    fn test_zero_coefficient_is_not_guarded() {
        let result = LinearRecognizer
            .attempt("0x+1=5", Verbosity::Detailed)
            .unwrap();
        assert_eq!(result.answer, "x = Infinity");

        let result = LinearRecognizer
            .attempt("0x+5=5", Verbosity::Detailed)
            .unwrap();
        assert_eq!(result.answer, "x = NaN");
    }

    #[test]
    fn test_recognizer_accepts_spaced_normalized_text() {
        let result = LinearRecognizer
            .attempt("2x + 3 = 7", Verbosity::Detailed)
            .unwrap();
        assert_eq!(result.answer, "x = 2");
        assert_eq!(match_linear(" -x\t+ 1 =  4 "), Some(coeffs(-1.0, 1.0, 4.0)));
    }
}
