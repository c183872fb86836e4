//! Dollar amount helpers for the order list subtotal.

/// Formats `amount` as US dollars with grouping separators and two decimals,
/// e.g. `1234.5` → `"$1,234.50"` and `-3.0` → `"-$3.00"`.
///
/// Non-finite input formats as `"$0.00"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Reads a dollar amount out of display text such as `"$1,234.56"`.
///
/// Everything except ASCII digits and `.` is discarded, then the longest
/// leading decimal number is parsed (`"1.2.3"` reads as `1.2`). Returns `0.0`
/// when no number is present.
#[must_use]
pub fn parse_currency(value: &str) -> f64 {
    let normalized: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let int_len = normalized
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(normalized.len());
    let mut end = int_len;
    if normalized[int_len..].starts_with('.') {
        end += 1 + normalized[int_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
    }

    let number = &normalized[..end];
    if number.is_empty() || number == "." {
        return 0.0;
    }
    number.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_grouped_dollars() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn formats_negative_with_leading_minus() {
        assert_eq!(format_currency(-3.0), "-$3.00");
        assert_eq!(format_currency(-1500.25), "-$1,500.25");
    }

    #[test]
    fn non_finite_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0.00");
    }

    #[test]
    fn parses_display_amounts() {
        assert!((parse_currency("$1,234.56") - 1234.56).abs() < f64::EPSILON);
        assert!((parse_currency("USD 19.99") - 19.99).abs() < f64::EPSILON);
        assert!((parse_currency(".5") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_stops_at_second_decimal_point() {
        assert!((parse_currency("1.2.3") - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_without_digits_is_zero() {
        assert!(parse_currency("").abs() < f64::EPSILON);
        assert!(parse_currency("N/A").abs() < f64::EPSILON);
        assert!(parse_currency(".").abs() < f64::EPSILON);
    }

    #[test]
    fn parse_drops_sign_and_locale_separators() {
        // Only digits and '.' survive normalization.
        assert!((parse_currency("-$4.00") - 4.0).abs() < f64::EPSILON);
        assert!((parse_currency("€15,00") - 1500.0).abs() < f64::EPSILON);
    }
}
