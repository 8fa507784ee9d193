//! String target

use super::{Converter, flag, instant, scalar};
use crate::codec::time::format_time;
use crate::variant::Variant;

/// Conversions to `String`.
pub struct StringConverter;

/// Shortest decimal text that reads back to the same float, never in
/// exponent form.
pub(crate) fn float_text(f: f64, text: impl FnOnce() -> String) -> String {
    if f.is_nan() {
        "NaN".to_owned()
    } else if f.is_infinite() {
        let sign = if f.is_sign_positive() { "+" } else { "-" };
        format!("{sign}Inf")
    } else {
        text()
    }
}

impl Converter for StringConverter {
    type Output = String;
    const TARGET: &'static str = "string";

    fn zero() -> String {
        String::new()
    }

    fn from_string(v: &Variant) -> String {
        String::from_utf8_lossy(v.to_bytes()).into_owned()
    }

    fn from_bool(v: &Variant) -> String {
        flag(v).to_string()
    }

    fn from_int(v: &Variant) -> String {
        scalar::<isize>(v).to_string()
    }

    fn from_int8(v: &Variant) -> String {
        scalar::<i8>(v).to_string()
    }

    fn from_int16(v: &Variant) -> String {
        scalar::<i16>(v).to_string()
    }

    fn from_int32(v: &Variant) -> String {
        scalar::<i32>(v).to_string()
    }

    fn from_int64(v: &Variant) -> String {
        scalar::<i64>(v).to_string()
    }

    fn from_uint(v: &Variant) -> String {
        scalar::<usize>(v).to_string()
    }

    fn from_uint8(v: &Variant) -> String {
        scalar::<u8>(v).to_string()
    }

    fn from_uint16(v: &Variant) -> String {
        scalar::<u16>(v).to_string()
    }

    fn from_uint32(v: &Variant) -> String {
        scalar::<u32>(v).to_string()
    }

    fn from_uint64(v: &Variant) -> String {
        scalar::<u64>(v).to_string()
    }

    fn from_float32(v: &Variant) -> String {
        // formatted at 32-bit precision, so 12345.123 stays "12345.123"
        let f = scalar::<f32>(v);
        float_text(f64::from(f), || f.to_string())
    }

    fn from_float64(v: &Variant) -> String {
        let f = scalar::<f64>(v);
        float_text(f, || f.to_string())
    }

    fn from_time(v: &Variant) -> String {
        instant(v)
            .map(|t| format_time(&t, v.layout()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Variant::from(true), "true")]
    #[case(Variant::from(false), "false")]
    #[case(Variant::from("Hello World!你好！"), "Hello World!你好！")]
    #[case(Variant::from(i8::MAX), "127")]
    #[case(Variant::from(i8::MIN), "-128")]
    #[case(Variant::from(i16::MAX), "32767")]
    #[case(Variant::from(i16::MIN), "-32768")]
    #[case(Variant::from(i32::MAX), "2147483647")]
    #[case(Variant::from(i32::MIN), "-2147483648")]
    #[case(Variant::from(i64::MAX), "9223372036854775807")]
    #[case(Variant::from(i64::MIN), "-9223372036854775808")]
    #[case(Variant::from(-42_isize), "-42")]
    #[case(Variant::from(u8::MAX), "255")]
    #[case(Variant::from(u16::MAX), "65535")]
    #[case(Variant::from(u32::MAX), "4294967295")]
    #[case(Variant::from(u64::MAX), "18446744073709551615")]
    #[case(Variant::from(42_usize), "42")]
    #[case(Variant::from(12_345.123_f32), "12345.123")]
    #[case(Variant::from(123_456_789.123_456_78_f64), "123456789.12345678")]
    #[case(Variant::from(1e21_f64), "1000000000000000000000")]
    #[case(Variant::from(0.1_f32), "0.1")]
    #[case(Variant::from(f64::INFINITY), "+Inf")]
    #[case(Variant::from(f32::NEG_INFINITY), "-Inf")]
    #[case(Variant::from(f64::NAN), "NaN")]
    #[case(Variant::NIL, "")]
    fn test_to_text(#[case] v: Variant, #[case] expected: &str) {
        assert_eq!(v.to_text(), expected);
    }

    #[rstest]
    #[case(Kind::Int)]
    #[case(Kind::Int8)]
    #[case(Kind::Int64)]
    #[case(Kind::Uint)]
    #[case(Kind::Uint16)]
    #[case(Kind::Float32)]
    #[case(Kind::Float64)]
    fn test_empty_numeric_is_zero(#[case] kind: Kind) {
        assert_eq!(Variant::from_parts(kind, vec![]).to_text(), "0");
    }

    #[test]
    fn test_bool_reads_first_byte() {
        assert_eq!(Variant::from_parts(Kind::Bool, vec![]).to_text(), "false");
        assert_eq!(Variant::from_parts(Kind::Bool, vec![0x00, 0x01]).to_text(), "false");
        assert_eq!(Variant::from_parts(Kind::Bool, vec![0x05]).to_text(), "true");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let v = Variant::from_parts(Kind::String, vec![b'a', 0xff, b'b']);
        assert_eq!(v.to_text(), "a\u{fffd}b");
    }

    #[test]
    fn test_time_uses_layout() {
        let t = DateTime::parse_from_rfc3339("2024-06-20T19:30:00+05:30").unwrap();
        let v = Variant::from(t);
        assert_eq!(v.to_text(), "2024-06-20 19:30:00");
        let v = v.with_layout("%d/%m/%Y %H:%M %:z");
        assert_eq!(v.to_text(), "20/06/2024 19:30 +05:30");
    }

    #[test]
    fn test_undecodable_time_is_empty() {
        let v = Variant::from_parts(Kind::Time, vec![0x01, 0x02]);
        assert_eq!(v.to_text(), "");
    }
}
