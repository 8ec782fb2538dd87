//! Quadratic equations in the canonical form `ax^2+bx+c=0`, solved with the
//! quadratic formula over the reals.

use ms_parser::{compact, strip_whitespace};
use ms_parser::lexeme::{coefficient, signed_coefficient, signed_term};
use nom::{bytes::complete::tag, combinator::all_consuming, IResult};

use crate::linear::variable;
use crate::number_format::{fmt_num, signed_suffix};
use crate::strategy::Recognizer;
use crate::types::{SolutionResult, Verbosity};

/// Answer reported when the discriminant is negative.
pub const NO_REAL_ROOTS: &str = "No real roots";

/// Coefficients of `ax^2 + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticCoeffs {
    /// Compute the quadratic discriminant `b^2 - 4ac`.
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Both real roots `(x1, x2)` where:
    /// - `x1 = (-b + sqrt(D)) / (2a)`
    /// - `x2 = (-b - sqrt(D)) / (2a)`
    ///
    /// Returns `None` when `D < 0`. The roots coincide when `D = 0`.
    pub fn real_roots(&self) -> Option<(f64, f64)> {
        let d = self.discriminant();
        if d < 0.0 {
            return None;
        }
        let sqrt_d = d.sqrt();
        let two_a = 2.0 * self.a;
        Some(((-self.b + sqrt_d) / two_a, (-self.b - sqrt_d) / two_a))
    }
}

fn quadratic_equation(input: &str) -> IResult<&str, QuadraticCoeffs> {
    let (input, a) = coefficient(input)?;
    let (input, _) = variable(input)?;
    let (input, _) = tag("^2")(input)?;
    let (input, b) = signed_coefficient(input)?;
    let (input, _) = variable(input)?;
    let (input, c) = signed_term(input)?;
    let (input, _) = tag("=0")(input)?;
    Ok((input, QuadraticCoeffs { a, b, c }))
}

/// Parse normalized text that has no whitespace left in it.
fn parse_quadratic(eq: &str) -> Option<QuadraticCoeffs> {
    let parsed = all_consuming(quadratic_equation)(eq).ok();
    parsed.map(|(_, coeffs)| coeffs)
}

/// Match raw `text` against the quadratic grammar, ignoring whitespace.
pub fn match_quadratic(text: &str) -> Option<QuadraticCoeffs> {
    parse_quadratic(&compact(text))
}

/// Narration restating the equation.
pub fn given_message(coeffs: &QuadraticCoeffs) -> String {
    format!(
        "Given {}x² {}x {} = 0",
        fmt_num(coeffs.a),
        signed_suffix(coeffs.b),
        signed_suffix(coeffs.c)
    )
}

/// Narration for the discriminant computation.
pub fn discriminant_message(d: f64) -> String {
    format!("Discriminant D = b² - 4ac = {}", fmt_num(d))
}

/// Single narration step when the discriminant is negative.
pub fn complex_roots_message(d: f64) -> String {
    format!("Discriminant = {} (< 0) so roots are complex.", fmt_num(d))
}

/// Narration substituting into the quadratic formula.
pub fn formula_message(coeffs: &QuadraticCoeffs, d: f64) -> String {
    format!(
        "x = (-b ± √D) / 2a = ({} ± √{}) / {}",
        fmt_num(-coeffs.b),
        fmt_num(d),
        fmt_num(2.0 * coeffs.a)
    )
}

/// Build the narrated solution. Concise mode drops the restatement step;
/// a negative discriminant always yields a single step.
pub fn narrate(coeffs: &QuadraticCoeffs, verbosity: Verbosity) -> SolutionResult {
    let d = coeffs.discriminant();
    let Some((x1, x2)) = coeffs.real_roots() else {
        return SolutionResult::new(vec![complex_roots_message(d)], NO_REAL_ROOTS);
    };

    let mut steps = Vec::with_capacity(3);
    if verbosity.is_detailed() {
        steps.push(given_message(coeffs));
    }
    steps.push(discriminant_message(d));
    steps.push(formula_message(coeffs, d));

    SolutionResult::new(
        steps,
        format!("x₁ = {}, x₂ = {}", fmt_num(x1), fmt_num(x2)),
    )
}

pub struct QuadraticRecognizer;

impl Recognizer for QuadraticRecognizer {
    fn name(&self) -> &'static str {
        "quadratic"
    }

    fn attempt(&self, text: &str, verbosity: Verbosity) -> Option<SolutionResult> {
        let coeffs = parse_quadratic(&strip_whitespace(text))?;
        tracing::trace!(
            target: "solve",
            a = coeffs.a,
            b = coeffs.b,
            c = coeffs.c,
            discriminant = coeffs.discriminant(),
            "quadratic match"
        );
        Some(narrate(&coeffs, verbosity))
    }
}
