//! Numeric lexemes shared by the arithmetic parser and the equation grammars.

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map, map_res, opt, recognize},
    sequence::pair,
    IResult,
};

/// Decimal literal text: `123`, `8.2`, `8.`, `.5`.
pub fn decimal_literal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(input)
}

/// Unsigned decimal value.
pub fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(decimal_literal, |s: &str| s.parse::<f64>())(input)
}

/// A single `+` or `-`.
pub fn sign(input: &str) -> IResult<&str, char> {
    one_of("+-")(input)
}

fn apply_sign(sign: Option<char>, magnitude: f64) -> f64 {
    if sign == Some('-') {
        -magnitude
    } else {
        magnitude
    }
}

/// Optional sign followed by a decimal: `7`, `+7`, `-7.5`.
pub fn signed_decimal(input: &str) -> IResult<&str, f64> {
    map(pair(opt(sign), decimal), |(s, m)| apply_sign(s, m))(input)
}

/// Mandatory sign followed by a decimal: `+3`, `-0.5`.
pub fn signed_term(input: &str) -> IResult<&str, f64> {
    map(pair(sign, decimal), |(s, m)| apply_sign(Some(s), m))(input)
}

/// Leading coefficient of a variable term.
///
/// Both parts are optional; a missing magnitude means 1, so `x` → 1,
/// `+x` → 1 and `-x` → -1. Never fails.
pub fn coefficient(input: &str) -> IResult<&str, f64> {
    map(pair(opt(sign), opt(decimal)), |(s, m)| {
        apply_sign(s, m.unwrap_or(1.0))
    })(input)
}

/// Coefficient of a non-leading variable term: the sign is mandatory,
/// the magnitude defaults to 1 (`+x` → 1, `-3x` → -3).
pub fn signed_coefficient(input: &str) -> IResult<&str, f64> {
    map(pair(sign, opt(decimal)), |(s, m)| {
        apply_sign(Some(s), m.unwrap_or(1.0))
    })(input)
}
