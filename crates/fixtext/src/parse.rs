//! Forgiving numeric parsing.
//!
//! Both parsers accept an optional leading sign, consume as many valid
//! characters as they can, and stop at the first invalid one. Nothing
//! valid means zero. There is no error channel: these are for tolerant
//! text extraction, not validation.

/// Parses an integer in the given base (2 to 36).
///
/// Digits past `9` are letters in either case, so `parse_int("FF", 16)` and
/// `parse_int("ff", 16)` both yield 255. Accumulation wraps, so the text
/// form of `i64::MIN` parses back exactly.
///
/// ```
/// use fixtext::parse_int;
///
/// assert_eq!(parse_int("123abc", 10), 123);
/// assert_eq!(parse_int("-42", 10), -42);
/// assert_eq!(parse_int("", 10), 0);
/// ```
#[must_use]
pub fn parse_int(text: &str, base: u32) -> i64 {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'-') => {
            negative = true;
            i = 1;
        }
        Some(b'+') => i = 1,
        _ => {}
    }
    let mut value: i64 = 0;
    while i < bytes.len() {
        let Some(digit) = digit_value(bytes[i]) else {
            break;
        };
        if u32::from(digit) >= base {
            break;
        }
        value = value
            .wrapping_mul(i64::from(base))
            .wrapping_add(i64::from(digit));
        i += 1;
    }
    if negative { value.wrapping_neg() } else { value }
}

/// Parses a decimal float: optional sign, integer digits, at most one `.`,
/// fraction digits. A second dot stops the parse, so `"1.2.3"` yields 1.2.
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut negative = false;
    match bytes.first() {
        Some(b'-') => {
            negative = true;
            i = 1;
        }
        Some(b'+') => i = 1,
        _ => {}
    }
    let mut value = 0.0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value * 10.0 + f64::from(bytes[i] - b'0');
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let mut scale = 0.1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            value += f64::from(bytes[i] - b'0') * scale;
            scale *= 0.1;
            i += 1;
        }
    }
    if negative { -value } else { value }
}

fn digit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'z' => Some(b - b'a' + 10),
        b'A'..=b'Z' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_float, parse_int};

    #[test]
    fn partial_and_signed() {
        assert_eq!(parse_int("123abc", 10), 123);
        assert_eq!(parse_int("+7", 10), 7);
        assert_eq!(parse_int("-0", 10), 0);
        assert_eq!(parse_int("abc", 10), 0);
        assert_eq!(parse_int("-", 10), 0);
    }

    #[test]
    fn bases() {
        assert_eq!(parse_int("ff", 16), 255);
        assert_eq!(parse_int("FF", 16), 255);
        assert_eq!(parse_int("101", 2), 5);
        assert_eq!(parse_int("777", 8), 511);
        // '8' is not an octal digit, so the parse stops there.
        assert_eq!(parse_int("78", 8), 7);
        assert_eq!(parse_int("z", 36), 35);
    }

    #[test]
    fn min_round_trips() {
        assert_eq!(parse_int("-9223372036854775808", 10), i64::MIN);
    }

    #[test]
    fn floats() {
        assert!((parse_float("3.25") - 3.25).abs() < 1e-12);
        assert!((parse_float("-0.5") + 0.5).abs() < 1e-12);
        assert!((parse_float("1.2.3") - 1.2).abs() < 1e-12);
        assert!((parse_float("10") - 10.0).abs() < 1e-12);
        assert_eq!(parse_float(""), 0.0);
    }
}
