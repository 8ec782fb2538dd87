//! Input normalization applied before any grammar is matched.
//!
//! Both functions are pure and idempotent: feeding their output back in
//! returns it unchanged.

/// Convert a superscript digit character to its numeric value
fn superscript_to_digit(c: char) -> Option<char> {
    match c {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        _ => None,
    }
}

/// ASCII replacement for alternate operator glyphs.
fn ascii_operator(c: char) -> Option<char> {
    match c {
        '−' | '–' | '‐' => Some('-'),
        '×' | '·' | '∗' => Some('*'),
        '÷' | '∕' => Some('/'),
        _ => None,
    }
}

/// Map alternate glyphs to ASCII, collapse whitespace runs to one space and trim.
///
/// Superscript digit runs become an explicit power: `x²` → `x^2`, `2³` → `2^3`.
pub fn normalize(input: &str) -> String {
    let mut mapped = String::with_capacity(input.len());
    let mut in_superscript = false;

    for c in input.chars() {
        if let Some(digit) = superscript_to_digit(c) {
            if !in_superscript {
                mapped.push('^');
                in_superscript = true;
            }
            mapped.push(digit);
            continue;
        }
        in_superscript = false;
        mapped.push(ascii_operator(c).unwrap_or(c));
    }

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`normalize`] with every whitespace character removed.
///
/// Equation grammars require contiguous tokens (`2x+3=7`), so they match on this form.
pub fn compact(input: &str) -> String {
    strip_whitespace(&normalize(input))
}

/// Remove every whitespace character without any other rewriting.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_operator_glyphs_to_ascii() {
        assert_eq!(normalize("6 × 3 − 4 ÷ 2"), "6 * 3 - 4 / 2");
        assert_eq!(normalize("2·5"), "2*5");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  20%\t of \n 50  "), "20% of 50");
    }

    #[test]
    fn superscripts_become_powers() {
        assert_eq!(normalize("x²+3x+2=0"), "x^2+3x+2=0");
        assert_eq!(normalize("2¹⁰"), "2^10");
    }

    #[test]
    fn compact_removes_all_whitespace() {
        assert_eq!(compact(" 2 x + 3 = 7 "), "2x+3=7");
        assert_eq!(compact("x² − 4 = 0"), "x^2-4=0");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["  a  b ", "x²−1", "3 × (4 ÷ 2)", "", "20 % de 50"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
            let packed = compact(input);
            assert_eq!(compact(&packed), packed);
        }
    }

    #[test]
    fn leaves_other_text_untouched() {
        assert_eq!(normalize("import os"), "import os");
        assert_eq!(normalize("50 का 20%"), "50 का 20%");
    }

    #[test]
    fn strip_whitespace_only_removes_whitespace() {
        assert_eq!(strip_whitespace(" 2 x\t+ 3 =\n7 "), "2x+3=7");
        assert_eq!(strip_whitespace("2 × 3"), "2×3");
    }
}
