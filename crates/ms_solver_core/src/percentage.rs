//! Percentage phrases: `<p>% of <n>` and its locale variants.

use ms_parser::lexeme::decimal;
use ms_parser::normalize;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::opt,
    sequence::preceded,
    IResult,
};

use crate::number_format::fmt_num;
use crate::strategy::Recognizer;
use crate::types::{SolutionResult, Verbosity};

/// Connector words accepted between the percentage and the base:
/// `of` (en), `का` (hi), `de` (es, fr), `من` (ar).
pub const CONNECTORS: [&str; 4] = ["of", "का", "de", "من"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentagePhrase {
    pub percent: f64,
    pub base: f64,
}

impl PercentagePhrase {
    pub fn fraction(&self) -> f64 {
        self.percent / 100.0
    }

    pub fn value(&self) -> f64 {
        self.fraction() * self.base
    }
}

fn connector(input: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case(CONNECTORS[0]),
        tag_no_case(CONNECTORS[1]),
        tag_no_case(CONNECTORS[2]),
        tag_no_case(CONNECTORS[3]),
    ))(input)
}

fn percentage_phrase(input: &str) -> IResult<&str, PercentagePhrase> {
    let (input, percent) = decimal(input)?;
    let (input, _) = preceded(multispace0, char('%'))(input)?;
    let (input, _) = opt(preceded(multispace0, connector))(input)?;
    let (input, base) = preceded(multispace0, decimal)(input)?;
    Ok((input, PercentagePhrase { percent, base }))
}

// Leftmost match in already normalized text.
fn scan_percentage(text: &str) -> Option<PercentagePhrase> {
    text.char_indices()
        .find_map(|(start, _)| percentage_phrase(&text[start..]).ok())
        .map(|(_, phrase)| phrase)
}

/// Find the leftmost percentage phrase in raw `text`.
///
/// Surrounding words are tolerated, so `what is 15% of 240?` matches.
pub fn find_percentage(text: &str) -> Option<PercentagePhrase> {
    scan_percentage(&normalize(text))
}

pub fn to_decimal_message(phrase: &PercentagePhrase) -> String {
    format!(
        "Convert {}% to decimal: {}",
        fmt_num(phrase.percent),
        fmt_num(phrase.fraction())
    )
}

pub fn multiply_message(phrase: &PercentagePhrase) -> String {
    format!(
        "Multiply by {}: {} × {} = {}",
        fmt_num(phrase.base),
        fmt_num(phrase.fraction()),
        fmt_num(phrase.base),
        fmt_num(phrase.value())
    )
}

/// Always two steps; verbosity does not apply to percentages.
pub fn narrate(phrase: &PercentagePhrase) -> SolutionResult {
    SolutionResult::new(
        vec![to_decimal_message(phrase), multiply_message(phrase)],
        fmt_num(phrase.value()),
    )
}

pub struct PercentageRecognizer;

impl Recognizer for PercentageRecognizer {
    fn name(&self) -> &'static str {
        "percentage"
    }

    fn attempt(&self, text: &str, _verbosity: Verbosity) -> Option<SolutionResult> {
        let phrase = scan_percentage(text)?;
        tracing::trace!(
            target: "solve",
            percent = phrase.percent,
            base = phrase.base,
            "percentage match"
        );
        Some(narrate(&phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(percent: f64, base: f64) -> PercentagePhrase {
        PercentagePhrase { percent, base }
    }

    #[test]
    fn test_connector_variants() {
        assert_eq!(find_percentage("20% of 50"), Some(phrase(20.0, 50.0)));
        assert_eq!(find_percentage("20 % OF 50"), Some(phrase(20.0, 50.0)));
        assert_eq!(find_percentage("20% का 50"), Some(phrase(20.0, 50.0)));
        assert_eq!(find_percentage("20% de 50"), Some(phrase(20.0, 50.0)));
        assert_eq!(find_percentage("20% من 50"), Some(phrase(20.0, 50.0)));
        assert_eq!(find_percentage("20%50"), Some(phrase(20.0, 50.0)));
        assert_eq!(find_percentage("12.5% of 80"), Some(phrase(12.5, 80.0)));
        assert_eq!(find_percentage(".5% of 10"), Some(phrase(0.5, 10.0)));
        assert_eq!(find_percentage("5% of .5"), Some(phrase(5.0, 0.5)));
    }

    #[test]
    fn test_phrase_inside_sentence() {
        assert_eq!(
            find_percentage("what is 15% of 240?"),
            Some(phrase(15.0, 240.0))
        );
    }

    #[test]
    fn test_rejects_incomplete_phrases() {
        assert_eq!(find_percentage("20% of"), None);
        assert_eq!(find_percentage("20% off 50"), None);
        assert_eq!(find_percentage("% of 50"), None);
        assert_eq!(find_percentage("twenty percent of fifty"), None);
    }

    #[test]
    fn test_narration() {
        let result = narrate(&phrase(20.0, 50.0));
        assert_eq!(
            result.steps,
            vec![
                "Convert 20% to decimal: 0.2",
                "Multiply by 50: 0.2 × 50 = 10",
            ]
        );
        assert_eq!(result.answer, "10");
    }

    #[test]
    fn test_verbosity_is_ignored() {
        let detailed = PercentageRecognizer.attempt("25% of 80", Verbosity::Detailed);
        let concise = PercentageRecognizer.attempt("25% of 80", Verbosity::Concise);
        assert_eq!(detailed, concise);
        assert_eq!(detailed.map(|r| r.steps.len()), Some(2));
    }
}
