use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse the leading decimal number of a lab value string.
///
/// Mirrors how lab sheets are typed in the field: leading whitespace is
/// skipped, an optional sign is honoured, and anything after the number
/// (units, `%`, notes) is ignored.
/// - "0.044" -> 0.044
/// - "2.5% chrysotile" -> 2.5
/// - ".5" -> 0.5
/// - "1e-3" -> 0.001
/// - "ND", "", "." -> None
pub fn leading_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos = 1;
            true
        }
        Some(b'+') => {
            pos = 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_part = &s[frac_start..end];
        pos = end;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let exponent = exponent_at(&s[pos..]);

    let mut normalized = String::with_capacity(int_part.len() + frac_part.len() + 3);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        normalized.push('.');
        normalized.push_str(frac_part);
    }
    match exponent {
        Some(exp) => Decimal::from_scientific(&format!("{normalized}e{exp}")).ok(),
        None => Decimal::from_str(&normalized).ok(),
    }
}

/// `e-3`, `E+2`, `e5` at the start of `rest`; a bare `e` is not an exponent.
fn exponent_at(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return None;
    }
    let mut end = 1;
    if matches!(bytes.get(1), Some(b'+' | b'-')) {
        end = 2;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    Some(&rest[1..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_decimal() {
        assert_eq!(leading_decimal("0.044"), Some(dec!(0.044)));
    }

    #[test]
    fn test_trailing_text_ignored() {
        assert_eq!(leading_decimal("2.5% chrysotile"), Some(dec!(2.5)));
        assert_eq!(leading_decimal("5."), Some(dec!(5)));
    }

    #[test]
    fn test_leading_whitespace_and_sign() {
        assert_eq!(leading_decimal("  -0.5"), Some(dec!(-0.5)));
        assert_eq!(leading_decimal("+3"), Some(dec!(3)));
    }

    #[test]
    fn test_bare_fraction() {
        assert_eq!(leading_decimal(".5"), Some(dec!(0.5)));
    }

    #[test]
    fn test_exponent() {
        assert_eq!(leading_decimal("1e-3"), Some(dec!(0.001)));
        assert_eq!(leading_decimal("2.5E2 ppm"), Some(dec!(250)));
        assert_eq!(leading_decimal("4 each"), Some(dec!(4)));
        assert_eq!(leading_decimal("3e"), Some(dec!(3)));
    }

    #[test]
    fn test_no_number() {
        assert_eq!(leading_decimal(""), None);
        assert_eq!(leading_decimal("ND"), None);
        assert_eq!(leading_decimal("."), None);
        assert_eq!(leading_decimal("-"), None);
        assert_eq!(leading_decimal("Positive"), None);
    }

    #[test]
    fn test_overlong_digits_do_not_panic() {
        let long = "9".repeat(60);
        assert_eq!(leading_decimal(&long), None);
    }
}
