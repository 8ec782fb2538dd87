//! Sandboxed arithmetic evaluation.
//!
//! The character allow-list is checked before the parser ever sees the input.
//! Anything outside `0-9 + - * / ( ) . ^` and whitespace is refused outright.

use crate::error::EvalError;
use crate::parser::parse;

/// Deepest parenthesis nesting accepted by the evaluator.
pub const MAX_NESTING: usize = 64;

/// Whether `c` may appear in an arithmetic expression.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '^') || c.is_whitespace()
}

fn check_allow_list(expr: &str) -> Result<(), EvalError> {
    match expr.chars().find(|c| !is_allowed(*c)) {
        Some(c) => Err(EvalError::DisallowedChar(c)),
        None => Ok(()),
    }
}

/// Longest run of consecutive sign characters, e.g. `--2`.
pub const MAX_SIGN_RUN: usize = 4;

// Parentheses, chained carets and unary signs each add a level of parser
// recursion. A caret chain ends at any binary operator other than `^`.
fn check_nesting(expr: &str) -> Result<(), EvalError> {
    let mut depth = 0usize;
    let mut power_chain = 0usize;
    let mut sign_run = 0usize;
    let mut prev: Option<char> = None;

    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '+' | '-' => sign_run += 1,
            _ => sign_run = 0,
        }

        let after_operand = matches!(prev, Some(p) if p.is_ascii_digit() || p == '.' || p == ')');
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '^' => power_chain += 1,
            '*' | '/' => power_chain = 0,
            '+' | '-' if after_operand => power_chain = 0,
            _ => {}
        }
        prev = Some(c);

        if depth > MAX_NESTING {
            return Err(EvalError::TooDeep("parentheses"));
        }
        if power_chain > MAX_NESTING {
            return Err(EvalError::TooDeep("powers"));
        }
        if sign_run > MAX_SIGN_RUN {
            return Err(EvalError::TooDeep("signs"));
        }
    }
    Ok(())
}

/// Evaluate `expr`, reporting why it was declined.
pub fn try_eval(expr: &str) -> Result<f64, EvalError> {
    check_allow_list(expr)?;
    check_nesting(expr)?;

    let value = parse(expr)?.evaluate();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(value))
    }
}

/// Evaluate `expr`, returning `None` for anything that is not a finite
/// arithmetic result.
pub fn safe_eval(expr: &str) -> Option<f64> {
    match try_eval(expr) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(target: "eval", error = %e, "expression declined");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn evaluates_allowed_expressions() {
        assert_eq!(safe_eval("2+2*2"), Some(6.0));
        assert_eq!(safe_eval("2^10"), Some(1024.0));
        assert_eq!(safe_eval("(12+8)*3/4"), Some(15.0));
        assert_eq!(safe_eval(" 7 "), Some(7.0));
    }

    #[test]
    fn allow_list_is_checked_first() {
        assert_eq!(
            try_eval("import os"),
            Err(EvalError::DisallowedChar('i'))
        );
        assert_eq!(try_eval("2+x"), Err(EvalError::DisallowedChar('x')));
        assert_eq!(try_eval("1=1"), Err(EvalError::DisallowedChar('=')));
        // Unicode glyphs are the normalizer's job, not the evaluator's.
        assert_eq!(try_eval("2×3"), Err(EvalError::DisallowedChar('×')));
    }

    #[test]
    fn rejects_non_finite_results() {
        assert!(matches!(try_eval("1/0"), Err(EvalError::NonFinite(_))));
        assert!(matches!(try_eval("0/0"), Err(EvalError::NonFinite(_))));
        assert!(matches!(try_eval("10^400"), Err(EvalError::NonFinite(_))));
        assert_eq!(safe_eval("(-8)^0.5"), None);
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(matches!(try_eval(""), Err(EvalError::Parse(ParseError::Empty))));
        assert!(matches!(try_eval("2+"), Err(EvalError::Parse(_))));
        assert!(matches!(try_eval("2 3"), Err(EvalError::Parse(_))));
    }

    #[test]
    fn rejects_excessive_nesting() {
        let deep = format!("{}1{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        assert_eq!(try_eval(&deep), Err(EvalError::TooDeep("parentheses")));
        let ok = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(safe_eval(&ok), Some(1.0));

        let tower = vec!["1"; MAX_NESTING + 2].join("^");
        assert_eq!(try_eval(&tower), Err(EvalError::TooDeep("powers")));
        let signed_tower = vec!["1"; MAX_NESTING + 2].join("^-");
        assert_eq!(try_eval(&signed_tower), Err(EvalError::TooDeep("powers")));

        assert_eq!(try_eval(&format!("{}2", "-".repeat(10_000))), Err(EvalError::TooDeep("signs")));
        assert_eq!(safe_eval("3 - -2"), Some(5.0));
        assert_eq!(safe_eval("----2"), Some(2.0));
    }

    #[test]
    fn separate_powers_do_not_count_as_nesting() {
        let squares = (1..=MAX_NESTING + 1)
            .map(|n| format!("{}^2", n))
            .collect::<Vec<_>>()
            .join("+");
        assert_eq!(safe_eval(&squares), Some(93665.0));

        let mixed = vec!["2^1"; MAX_NESTING + 1].join("*");
        assert!(try_eval(&mixed).is_ok());

        let differences = vec!["(3)^1"; MAX_NESTING + 1].join(" - ");
        assert!(try_eval(&differences).is_ok());
    }
}
