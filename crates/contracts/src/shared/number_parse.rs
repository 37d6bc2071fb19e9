//! Parsing of numeric text typed into filter inputs.

/// Parses a price typed by the user.
///
/// Empty, whitespace-only, non-numeric and non-finite input yields `None`
/// ("filter unset"). Any finite number is returned as-is, including `0` and
/// negative values: `"0"` is a real lower bound, distinct from a cleared input.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_plain_numbers() {
        assert_eq!(parse_price("11000"), Some(11000.0));
        assert_eq!(parse_price(" 14000 "), Some(14000.0));
        assert_eq!(parse_price("12500.50"), Some(12500.5));
    }

    #[test]
    fn test_parse_price_empty_is_unset() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
    }

    #[test]
    fn test_parse_price_garbage_is_unset() {
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("12k"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_parse_price_zero_is_a_value() {
        assert_eq!(parse_price("0"), Some(0.0));
    }

    #[test]
    fn test_parse_price_negative_is_kept() {
        assert_eq!(parse_price("-100"), Some(-100.0));
    }
}
