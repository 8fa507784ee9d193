//! Platform word unsigned integer target

use super::{Converter, epoch_nanos, flag, narrow, scalar};
use crate::parse::{IntWidth, parse_unsigned};
use crate::variant::Variant;

/// Conversions to the platform word `usize`.
///
/// Negative sources, whatever their kind, convert to `0`.
pub struct UintConverter;

impl Converter for UintConverter {
    type Output = usize;
    const TARGET: &'static str = "uint";

    fn zero() -> usize {
        0
    }

    fn from_string(v: &Variant) -> usize {
        usize::try_from(parse_unsigned(v.to_bytes(), IntWidth::NATIVE)).unwrap_or_default()
    }

    fn from_bool(v: &Variant) -> usize {
        usize::from(flag(v))
    }

    fn from_int(v: &Variant) -> usize {
        narrow::<isize, _>(v)
    }

    fn from_int8(v: &Variant) -> usize {
        narrow::<i8, _>(v)
    }

    fn from_int16(v: &Variant) -> usize {
        narrow::<i16, _>(v)
    }

    fn from_int32(v: &Variant) -> usize {
        narrow::<i32, _>(v)
    }

    fn from_int64(v: &Variant) -> usize {
        narrow::<i64, _>(v)
    }

    fn from_uint(v: &Variant) -> usize {
        scalar::<usize>(v)
    }

    fn from_uint8(v: &Variant) -> usize {
        narrow::<u8, _>(v)
    }

    fn from_uint16(v: &Variant) -> usize {
        narrow::<u16, _>(v)
    }

    fn from_uint32(v: &Variant) -> usize {
        narrow::<u32, _>(v)
    }

    fn from_uint64(v: &Variant) -> usize {
        narrow::<u64, _>(v)
    }

    fn from_float32(v: &Variant) -> usize {
        scalar::<f32>(v) as usize
    }

    fn from_float64(v: &Variant) -> usize {
        scalar::<f64>(v) as usize
    }

    fn from_time(v: &Variant) -> usize {
        epoch_nanos(v).map_or(0, |n| usize::try_from(n).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Variant::from(true), 1)]
    #[case(Variant::from(false), 0)]
    #[case(Variant::from("192hello.你好！"), 0)]
    #[case(Variant::from("234."), 0)]
    #[case(Variant::from("100.86"), 100)]
    #[case(Variant::from("-100"), 0)]
    #[case(Variant::from("4294967295"), 4_294_967_295)]
    #[case(Variant::from(i8::MAX), 127)]
    #[case(Variant::from(i8::MIN), 0)]
    #[case(Variant::from(i16::MIN), 0)]
    #[case(Variant::from(i32::MIN), 0)]
    #[case(Variant::from(i64::MIN), 0)]
    #[case(Variant::from(-1_isize), 0)]
    #[case(Variant::from(u8::MAX), 255)]
    #[case(Variant::from(u16::MAX), 65_535)]
    #[case(Variant::from(u32::MAX), 4_294_967_295)]
    #[case(Variant::from(usize::MAX), usize::MAX)]
    #[case(Variant::from(12_345.123_f32), 12_345)]
    #[case(Variant::from(-12_345.123_f32), 0)]
    #[case(Variant::from(123_456_789.123_456_78_f64), 123_456_789)]
    #[case(Variant::from(-0.5_f64), 0)]
    fn test_to_uint(#[case] v: Variant, #[case] expected: usize) {
        assert_eq!(v.to_uint(), expected);
    }

    #[test]
    fn test_time_before_epoch_is_zero() {
        let t = DateTime::parse_from_rfc3339("1969-12-31T23:59:59Z").unwrap();
        assert_eq!(Variant::from(t).to_uint(), 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_native_width_string_boundary() {
        assert_eq!(Variant::from("18446744073709551615").to_uint(), usize::MAX);
        assert_eq!(Variant::from("18446744073709551616").to_uint(), 0);
    }
}
