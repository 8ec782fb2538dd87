use ms_parser::{compact, is_allowed, normalize, safe_eval};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn disallowed_characters_never_evaluate(
        prefix in "[0-9+*/() ]{0,6}",
        bad in any::<char>().prop_filter("must be outside the allow-list", |c| !is_allowed(*c)),
        suffix in "[0-9+*/() ]{0,6}",
    ) {
        let expr = format!("{}{}{}", prefix, bad, suffix);
        prop_assert_eq!(safe_eval(&expr), None);
    }

    #[test]
    fn integer_sums_and_products_match_native(a in 0i64..1000, b in 0i64..1000, c in 1i64..50) {
        let expr = format!("{} + {} * {}", a, b, c);
        prop_assert_eq!(safe_eval(&expr), Some((a + b * c) as f64));

        let expr = format!("({} - {}) / {}", a, b, c);
        prop_assert_eq!(safe_eval(&expr), Some((a - b) as f64 / c as f64));
    }

    #[test]
    fn normalization_is_idempotent(input in "\\PC{0,24}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once.clone());
        let packed = compact(&input);
        prop_assert_eq!(compact(&packed), packed);
    }
}
