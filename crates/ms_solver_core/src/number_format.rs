/// Render a value the way a calculator display shows it.
///
/// Integral values have no fractional part, negative zero prints as `0`,
/// and non-finite values print as `Infinity`, `-Infinity` or `NaN`.
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent form
/// with an explicit exponent sign: `1e+21`, `2.5e-7`.
pub fn fmt_num(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        exponent_form(value)
    } else {
        format!("{}", value)
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => text,
    }
}

/// Operator and magnitude for writing `value` after another term: `+ 3`, `- 3`.
pub fn signed_suffix(value: f64) -> String {
    let op = if value.is_sign_negative() && value != 0.0 {
        '-'
    } else {
        '+'
    };
    format!("{} {}", op, fmt_num(value.abs()))
}
