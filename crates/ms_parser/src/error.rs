use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Empty expression")]
    Empty,
}

/// Reasons the safe evaluator declines an expression.
///
/// These never cross the solver boundary; they are collapsed into "no result"
/// after being logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Character '{0}' is not allowed in an arithmetic expression")]
    DisallowedChar(char),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Expression nests deeper than the evaluator allows ({0})")]
    TooDeep(&'static str),
    #[error("Result is not a finite number: {0}")]
    NonFinite(f64),
}
