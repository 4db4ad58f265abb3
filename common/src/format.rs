//! Display formatting for amounts and ratings.

use rust_decimal::prelude::*;

use crate::Theme;

/// Groups digits in threes and appends the currency symbol: `3845` -> `3 845 ₽`.
pub fn format_price(amount: i64, theme: &Theme) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(&theme.thousands_separator);
        }
        grouped.push(ch);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} {}", theme.currency_symbol)
}

/// Rounds a mean price to a whole amount, half away from zero.
pub fn round_amount(value: f64) -> i64 {
    value.round() as i64
}

/// Always exactly one decimal place, ties rounded away from zero.
///
/// Rounds the exact binary value, so 4.25 gives "4.3" while 4.35 (stored
/// just below 4.35) gives "4.3" as well.
pub fn format_rating(rating: f64) -> String {
    match Decimal::from_f64_retain(rating) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}")
        }
        // NaN, infinities and values beyond Decimal's range.
        None => format!("{rating:.1}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        let theme = Theme::default();
        assert_eq!(format_price(3845, &theme), "3 845 ₽");
        assert_eq!(format_price(1_234_567, &theme), "1 234 567 ₽");
        assert_eq!(format_price(500, &theme), "500 ₽");
        assert_eq!(format_price(0, &theme), "0 ₽");
    }

    #[test]
    fn test_format_price_negative() {
        let theme = Theme::default();
        assert_eq!(format_price(-1200, &theme), "-1 200 ₽");
    }

    #[test]
    fn test_format_price_uses_theme() {
        let theme = Theme {
            currency_symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            ..Theme::default()
        };
        assert_eq!(format_price(12000, &theme), "12,000 $");
    }

    #[test]
    fn test_format_rating_one_decimal() {
        assert_eq!(format_rating(4.567), "4.6");
        assert_eq!(format_rating(0.0), "0.0");
        assert_eq!(format_rating(4.5), "4.5");
        assert_eq!(format_rating(5.0), "5.0");
        assert_eq!(format_rating(12.0), "12.0");
    }

    #[test]
    fn test_format_rating_ties_round_up() {
        assert_eq!(format_rating(4.25), "4.3");
        assert_eq!(format_rating(0.25), "0.3");
        assert_eq!(format_rating(4.75), "4.8");
        assert_eq!(format_rating(4.35), "4.3");
        assert_eq!(format_rating(-0.25), "-0.3");
    }

    #[test]
    fn test_format_rating_non_finite() {
        assert_eq!(format_rating(f64::NAN), "NaN");
    }

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(850.0), 850);
        assert_eq!(round_amount(3844.5), 3845);
        assert_eq!(round_amount(-2.5), -3);
    }
}
