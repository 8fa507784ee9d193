//! Numeric text parsing
//!
//! Decimal text to integer with exact overflow detection, and text to
//! float. Every function is total: malformed or overflowing input yields
//! zero.
//!
//! The integer parsers accept an optional sign, the decimal digits, and an
//! optional fractional tail made only of digits which is dropped:
//!
//! ```rust
//! use nebula_variant::parse::{IntWidth, parse_signed, parse_unsigned};
//!
//! assert_eq!(parse_signed(b"-100.86", IntWidth::W64), -100);
//! assert_eq!(parse_signed(b"234.", IntWidth::W64), 0);
//! assert_eq!(parse_signed(b"-2147483648", IntWidth::W32), i64::from(i32::MIN));
//! assert_eq!(parse_signed(b"2147483648", IntWidth::W32), 0);
//! assert_eq!(parse_unsigned(b"-1", IntWidth::W64), 0);
//! ```

use core::cmp::Ordering;

/// Integer width a decimal string is parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W32,
    W64,
}

impl IntWidth {
    /// Width of the host's native integer
    pub const NATIVE: Self = if usize::BITS <= 32 { Self::W32 } else { Self::W64 };

    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Largest signed value at this width
    pub const fn signed_max(self) -> u64 {
        match self {
            Self::W32 => i32::MAX as u64,
            Self::W64 => i64::MAX as u64,
        }
    }

    /// Largest unsigned value at this width
    pub const fn unsigned_max(self) -> u64 {
        match self {
            Self::W32 => u32::MAX as u64,
            Self::W64 => u64::MAX,
        }
    }

    /// Digit count of [`IntWidth::signed_max`]
    pub const fn signed_digits(self) -> usize {
        match self {
            Self::W32 => 10,
            Self::W64 => 19,
        }
    }

    /// Digit count of [`IntWidth::unsigned_max`]
    pub const fn unsigned_digits(self) -> usize {
        match self {
            Self::W32 => 10,
            Self::W64 => 20,
        }
    }
}

/// Parse a signed decimal integer, `0` on malformed or overflowing input.
///
/// The result always lies within the signed range of `width`.
pub fn parse_signed(text: &[u8], width: IntWidth) -> i64 {
    signed(text, width).unwrap_or_else(|| {
        rejected(text, width, "signed");
        0
    })
}

/// Parse an unsigned decimal integer, `0` on malformed, negative or overflowing input.
///
/// The result always lies within the unsigned range of `width`.
pub fn parse_unsigned(text: &[u8], width: IntWidth) -> u64 {
    unsigned(text, width).unwrap_or_else(|| {
        rejected(text, width, "unsigned");
        0
    })
}

/// Parse a 32-bit float, `0.0` on malformed input or overflow to infinity.
pub fn parse_float32(text: &[u8]) -> f32 {
    float_text(text)
        .and_then(|s| s.parse::<f32>().ok().filter(|v| !v.is_infinite() || is_infinity(s)))
        .unwrap_or(0.0)
}

/// Parse a 64-bit float, `0.0` on malformed input or overflow to infinity.
pub fn parse_float64(text: &[u8]) -> f64 {
    float_text(text)
        .and_then(|s| s.parse::<f64>().ok().filter(|v| !v.is_infinite() || is_infinity(s)))
        .unwrap_or(0.0)
}

#[cold]
fn rejected(text: &[u8], width: IntWidth, sign: &'static str) {
    tracing::trace!(
        input = %String::from_utf8_lossy(text),
        bits = width.bits(),
        sign,
        "decimal text rejected, parsing as zero"
    );
}

fn float_text(text: &[u8]) -> Option<&str> {
    core::str::from_utf8(text).ok()
}

fn is_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Strip a fractional tail. `None` when the tail is empty or holds a non-digit.
fn integer_part(text: &[u8]) -> Option<&[u8]> {
    match text.iter().position(|&b| b == b'.') {
        None => Some(text),
        Some(dot) => {
            let tail = &text[dot + 1..];
            if tail.is_empty() || !tail.iter().all(u8::is_ascii_digit) {
                return None;
            }
            Some(&text[..dot])
        }
    }
}

#[inline]
fn digit(byte: u8) -> Option<u64> {
    byte.is_ascii_digit().then(|| u64::from(byte - b'0'))
}

/// Accumulate digits; callers keep the count below the width's digit count.
fn accumulate(digits: &[u8]) -> Option<u64> {
    digits
        .iter()
        .try_fold(0_u64, |n, &b| n.checked_mul(10)?.checked_add(digit(b)?))
}

/// Split the last digit off a maximal-length run and check it against
/// `cutoff = max / 10` and `remainder = max % 10`.
fn boundary(digits: &[u8], max: u64, negative: bool) -> Option<(u64, u64)> {
    let (&last, head) = digits.split_last()?;
    let n = accumulate(head)?;
    let d = digit(last)?;
    let (cutoff, remainder) = (max / 10, max % 10);

    if negative && n == cutoff && d == remainder + 1 {
        // two's-complement minimum: one past the positive maximum
        Some((n * 10 + remainder, 1))
    } else if n < cutoff || (n == cutoff && d <= remainder) {
        Some((n * 10 + d, 0))
    } else {
        None
    }
}

fn signed(text: &[u8], width: IntWidth) -> Option<i64> {
    let int_part = integer_part(text)?;
    let (negative, digits) = match int_part {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, int_part),
    };
    if digits.is_empty() {
        return None;
    }

    let (magnitude, correction) = match digits.len().cmp(&width.signed_digits()) {
        Ordering::Less => (accumulate(digits)?, 0),
        Ordering::Equal => boundary(digits, width.signed_max(), negative)?,
        Ordering::Greater => return None,
    };

    // magnitude <= signed_max, which fits in i64 at every width
    let value = magnitude as i64;
    Some(if negative {
        -value - correction as i64
    } else {
        value
    })
}

fn unsigned(text: &[u8], width: IntWidth) -> Option<u64> {
    let int_part = integer_part(text)?;
    let digits = match int_part {
        [b'-', ..] => return None,
        [b'+', rest @ ..] => rest,
        _ => int_part,
    };
    if digits.is_empty() {
        return None;
    }

    match digits.len().cmp(&width.unsigned_digits()) {
        Ordering::Less => accumulate(digits),
        Ordering::Equal => boundary(digits, width.unsigned_max(), false).map(|(n, _)| n),
        Ordering::Greater => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    // shorter than the digit count
    #[case(b"0", 0)]
    #[case(b"-0", 0)]
    #[case(b"+42", 42)]
    #[case(b"-123456789", -123_456_789)]
    #[case(b"999999999", 999_999_999)]
    // exactly the digit count
    #[case(b"2147483647", 2_147_483_647)]
    #[case(b"-2147483647", -2_147_483_647)]
    #[case(b"-2147483648", -2_147_483_648)]
    #[case(b"2147483648", 0)]
    #[case(b"-2147483649", 0)]
    #[case(b"2147483650", 0)]
    #[case(b"3000000000", 0)]
    #[case(b"1999999999", 1_999_999_999)]
    #[case(b"214748364x", 0)]
    // longer than the digit count
    #[case(b"10000000000", 0)]
    #[case(b"-00000000001", 0)]
    fn test_signed_w32(#[case] text: &[u8], #[case] expected: i64) {
        assert_eq!(parse_signed(text, IntWidth::W32), expected);
    }

    #[rstest]
    #[case(b"9223372036854775807", i64::MAX)]
    #[case(b"-9223372036854775807", -i64::MAX)]
    #[case(b"-9223372036854775808", i64::MIN)]
    #[case(b"9223372036854775808", 0)]
    #[case(b"+9223372036854775808", 0)]
    #[case(b"-9223372036854775809", 0)]
    #[case(b"999999999999999999", 999_999_999_999_999_999)]
    #[case(b"9999999999999999999", 0)]
    #[case(b"92233720368547758070", 0)]
    #[case(b"2147483648", 2_147_483_648)]
    fn test_signed_w64(#[case] text: &[u8], #[case] expected: i64) {
        assert_eq!(parse_signed(text, IntWidth::W64), expected);
    }

    #[rstest]
    #[case(b"4294967295", IntWidth::W32, u64::from(u32::MAX))]
    #[case(b"4294967296", IntWidth::W32, 0)]
    #[case(b"+4294967295", IntWidth::W32, u64::from(u32::MAX))]
    #[case(b"429496729", IntWidth::W32, 429_496_729)]
    #[case(b"10000000000", IntWidth::W32, 0)]
    #[case(b"18446744073709551615", IntWidth::W64, u64::MAX)]
    #[case(b"18446744073709551616", IntWidth::W64, 0)]
    #[case(b"28446744073709551615", IntWidth::W64, 0)]
    #[case(b"9999999999999999999", IntWidth::W64, 9_999_999_999_999_999_999)]
    #[case(b"184467440737095516150", IntWidth::W64, 0)]
    #[case(b"-1", IntWidth::W64, 0)]
    #[case(b"-0", IntWidth::W64, 0)]
    fn test_unsigned(#[case] text: &[u8], #[case] width: IntWidth, #[case] expected: u64) {
        assert_eq!(parse_unsigned(text, width), expected);
    }

    #[rstest]
    #[case(b"-100.86", -100)]
    #[case(b"100.0", 100)]
    #[case(b"234.", 0)]
    #[case(b".234", 0)]
    #[case(b"127.0.0.1", 0)]
    #[case(b"12.3e4", 0)]
    #[case(b"", 0)]
    #[case(b"-", 0)]
    #[case(b"+", 0)]
    #[case(b"-.5", 0)]
    #[case(b" 12", 0)]
    #[case(b"1abc", 0)]
    #[case("Hello World!你好！".as_bytes(), 0)]
    fn test_fractional_tail_and_malformed(#[case] text: &[u8], #[case] expected: i64) {
        assert_eq!(parse_signed(text, IntWidth::W64), expected);
        assert_eq!(parse_unsigned(text, IntWidth::W64), expected.max(0) as u64);
    }

    #[test]
    fn test_native_width_matches_host() {
        assert_eq!(IntWidth::NATIVE.bits(), usize::BITS);
        assert_eq!(IntWidth::NATIVE.signed_max(), isize::MAX as u64);
        assert_eq!(IntWidth::NATIVE.unsigned_max(), usize::MAX as u64);
    }

    #[test]
    fn test_digit_counts_match_maxima() {
        for width in [IntWidth::W32, IntWidth::W64] {
            assert_eq!(width.signed_max().to_string().len(), width.signed_digits());
            assert_eq!(width.unsigned_max().to_string().len(), width.unsigned_digits());
        }
    }

    #[rstest]
    #[case(b"-100.86", -100.86)]
    #[case(b"1e3", 1000.0)]
    #[case(b"inf", f64::INFINITY)]
    #[case(b"-Infinity", f64::NEG_INFINITY)]
    #[case(b"1e999", 0.0)]
    #[case(b"abc", 0.0)]
    #[case(b"", 0.0)]
    #[case(&[0xff, 0xfe], 0.0)]
    fn test_parse_float64(#[case] text: &[u8], #[case] expected: f64) {
        assert_eq!(parse_float64(text), expected);
    }

    #[test]
    fn test_parse_float32() {
        assert_eq!(parse_float32(b"-100.86"), -100.86_f32);
        assert_eq!(parse_float32(b"12345.123"), 12_345.123_f32);
        assert_eq!(parse_float32(b"1e39"), 0.0);
        assert!(parse_float32(b"NaN").is_nan());
    }
}
