use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::multispace0,
    combinator::map,
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::error::ParseError;
use crate::lexeme::decimal;

/// Arithmetic syntax tree produced by [`parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseNode {
    Number(f64),
    Add(Box<ParseNode>, Box<ParseNode>),
    Sub(Box<ParseNode>, Box<ParseNode>),
    Mul(Box<ParseNode>, Box<ParseNode>),
    Div(Box<ParseNode>, Box<ParseNode>),
    Pow(Box<ParseNode>, Box<ParseNode>),
    Neg(Box<ParseNode>),
}

impl ParseNode {
    /// Evaluate with IEEE semantics; division by zero yields an infinity or NaN
    /// which the caller is expected to reject.
    pub fn evaluate(&self) -> f64 {
        match self {
            ParseNode::Number(n) => *n,
            ParseNode::Add(l, r) => l.evaluate() + r.evaluate(),
            ParseNode::Sub(l, r) => l.evaluate() - r.evaluate(),
            ParseNode::Mul(l, r) => l.evaluate() * r.evaluate(),
            ParseNode::Div(l, r) => l.evaluate() / r.evaluate(),
            ParseNode::Pow(b, e) => b.evaluate().powf(e.evaluate()),
            ParseNode::Neg(e) => -e.evaluate(),
        }
    }
}

fn parse_number(input: &str) -> IResult<&str, ParseNode> {
    map(decimal, ParseNode::Number)(input)
}

fn parse_parens(input: &str) -> IResult<&str, ParseNode> {
    delimited(
        preceded(multispace0, tag("(")),
        parse_expr,
        preceded(multispace0, tag(")")),
    )(input)
}

fn parse_atom(input: &str) -> IResult<&str, ParseNode> {
    preceded(multispace0, alt((parse_number, parse_parens)))(input)
}

// Power - right associative: 2^3^2 = 2^(3^2)
// The exponent may carry its own sign: 2^-1, 2^-(1+1)
fn parse_power(input: &str) -> IResult<&str, ParseNode> {
    let (input, base) = parse_atom(input)?;

    let try_caret = preceded::<_, _, _, nom::error::Error<&str>, _, _>(
        multispace0::<_, nom::error::Error<&str>>,
        tag::<_, _, nom::error::Error<&str>>("^"),
    )(input);

    if let Ok((input, _)) = try_caret {
        let (input, exp) = parse_unary(input)?;
        Ok((input, ParseNode::Pow(Box::new(base), Box::new(exp))))
    } else {
        Ok((input, base))
    }
}

// Unary signs bind looser than ^, so -2^2 = -(2^2)
fn parse_unary(input: &str) -> IResult<&str, ParseNode> {
    alt((
        map(
            pair(preceded(multispace0, tag("-")), parse_unary),
            |(_, expr)| ParseNode::Neg(Box::new(expr)),
        ),
        map(
            pair(preceded(multispace0, tag("+")), parse_unary),
            |(_, expr)| expr,
        ),
        parse_power,
    ))(input)
}

fn parse_term(input: &str) -> IResult<&str, ParseNode> {
    let (input, init) = parse_unary(input)?;
    fold_many0(
        pair(preceded(multispace0, alt((tag("*"), tag("/")))), parse_unary),
        move || init.clone(),
        |acc, (op, val)| match op {
            "*" => ParseNode::Mul(Box::new(acc), Box::new(val)),
            _ => ParseNode::Div(Box::new(acc), Box::new(val)),
        },
    )(input)
}

fn parse_expr(input: &str) -> IResult<&str, ParseNode> {
    let (input, init) = parse_term(input)?;
    fold_many0(
        pair(preceded(multispace0, alt((tag("+"), tag("-")))), parse_term),
        move || init.clone(),
        |acc, (op, val)| match op {
            "+" => ParseNode::Add(Box::new(acc), Box::new(val)),
            _ => ParseNode::Sub(Box::new(acc), Box::new(val)),
        },
    )(input)
}

/// Parse a complete arithmetic expression.
///
/// Trailing input other than whitespace is an error, so juxtaposed operands
/// such as `2 3` or `2(3)` are rejected rather than silently truncated.
pub fn parse(input: &str) -> Result<ParseNode, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let (remaining, node) = parse_expr(input).map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    Ok(node)
}
