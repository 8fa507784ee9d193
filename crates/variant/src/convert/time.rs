//! Timestamp target

use chrono::Local;

use super::{Converter, flag, instant, scalar};
use crate::codec::FixedWidth;
use crate::codec::time::{Timestamp, from_unix_nanos, parse_time, zero_time};
use crate::variant::Variant;

/// Conversions to [`Timestamp`].
///
/// Numbers are nanoseconds since the Unix epoch, so an empty numeric buffer
/// reads as `0` and lands on the epoch itself. Anything else that cannot be
/// read as an instant is the zero timestamp.
pub struct TimeConverter;

/// Integer source as an epoch offset, zero time when it exceeds `i64`
#[inline]
fn nanos_of<S>(v: &Variant) -> Timestamp
where
    S: FixedWidth,
    i64: TryFrom<S>,
{
    i64::try_from(scalar::<S>(v)).map_or_else(|_| zero_time(), from_unix_nanos)
}

impl Converter for TimeConverter {
    type Output = Timestamp;
    const TARGET: &'static str = "time";

    fn zero() -> Timestamp {
        zero_time()
    }

    /// Parsed with the variant's layout, then as a decimal nanosecond count.
    fn from_string(v: &Variant) -> Timestamp {
        let Ok(text) = core::str::from_utf8(v.to_bytes()) else {
            return zero_time();
        };
        parse_time(text, v.layout())
            .or_else(|| text.parse::<i64>().ok().map(from_unix_nanos))
            .unwrap_or_else(zero_time)
    }

    /// `true` is the current local time, `false` the zero timestamp.
    fn from_bool(v: &Variant) -> Timestamp {
        if flag(v) {
            Local::now().fixed_offset()
        } else {
            zero_time()
        }
    }

    fn from_int(v: &Variant) -> Timestamp {
        nanos_of::<isize>(v)
    }

    fn from_int8(v: &Variant) -> Timestamp {
        nanos_of::<i8>(v)
    }

    fn from_int16(v: &Variant) -> Timestamp {
        nanos_of::<i16>(v)
    }

    fn from_int32(v: &Variant) -> Timestamp {
        nanos_of::<i32>(v)
    }

    fn from_int64(v: &Variant) -> Timestamp {
        nanos_of::<i64>(v)
    }

    fn from_uint(v: &Variant) -> Timestamp {
        nanos_of::<usize>(v)
    }

    fn from_uint8(v: &Variant) -> Timestamp {
        nanos_of::<u8>(v)
    }

    fn from_uint16(v: &Variant) -> Timestamp {
        nanos_of::<u16>(v)
    }

    fn from_uint32(v: &Variant) -> Timestamp {
        nanos_of::<u32>(v)
    }

    fn from_uint64(v: &Variant) -> Timestamp {
        nanos_of::<u64>(v)
    }

    fn from_float32(v: &Variant) -> Timestamp {
        from_unix_nanos(scalar::<f32>(v) as i64)
    }

    fn from_float64(v: &Variant) -> Timestamp {
        from_unix_nanos(scalar::<f64>(v) as i64)
    }

    fn from_time(v: &Variant) -> Timestamp {
        instant(v).unwrap_or_else(zero_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::time::{is_zero_time, unix_nanos};
    use crate::kind::Kind;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Variant::from(0_i8), 0)]
    #[case(Variant::from(-3_i8), -3)]
    #[case(Variant::from(0_i16), 0)]
    #[case(Variant::from(10_086_i32), 10_086)]
    #[case(Variant::from(-10_086_i32), -10_086)]
    #[case(Variant::from(86_i64), 86)]
    #[case(Variant::from(86_isize), 86)]
    #[case(Variant::from(0_u8), 0)]
    #[case(Variant::from(0_u16), 0)]
    #[case(Variant::from(10_086_u32), 10_086)]
    #[case(Variant::from(86_u64), 86)]
    #[case(Variant::from(86_usize), 86)]
    #[case(Variant::from(-12_345.123_f32), -12_345)]
    #[case(Variant::from(0.0_f32), 0)]
    #[case(Variant::from(123_456_789.123_456_78_f64), 123_456_789)]
    #[case(Variant::from("1718892000000000000"), 1_718_892_000_000_000_000)]
    #[case(Variant::from_parts(Kind::Int32, vec![]), 0)]
    #[case(Variant::from_parts(Kind::Uint64, vec![0x01]), 0)]
    #[case(Variant::from_parts(Kind::Float64, vec![]), 0)]
    fn test_numbers_are_epoch_nanos(#[case] v: Variant, #[case] expected: i64) {
        assert_eq!(unix_nanos(&v.to_time()), Some(expected));
    }

    #[rstest]
    #[case(Variant::from(false))]
    #[case(Variant::from("100.86"))]
    #[case(Variant::from("2024-13-45 99:00:00"))]
    #[case(Variant::from(u64::MAX))]
    #[case(Variant::from_parts(Kind::Time, vec![0x01, 0x00]))]
    #[case(Variant::from_parts(Kind::String, vec![0xff]))]
    #[case(Variant::NIL)]
    fn test_unreadable_is_zero_time(#[case] v: Variant) {
        assert!(is_zero_time(&v.to_time()));
    }

    #[test]
    fn test_string_uses_layout() {
        let v = Variant::from("2024-06-20 14:00:00");
        assert_eq!(v.to_time().timestamp(), 1_718_892_000);

        let v = Variant::from("20.06.2024").with_layout("%d.%m.%Y");
        assert_eq!(v.to_time().timestamp(), 1_718_841_600);

        let v = Variant::from("2024-06-20T19:30:00+05:30").with_layout("%Y-%m-%dT%H:%M:%S%:z");
        let t = v.to_time();
        assert_eq!(t.timestamp(), 1_718_892_000);
        assert_eq!(t.offset().local_minus_utc(), 19_800);
    }

    #[test]
    fn test_binary_round_trip_keeps_nanos() {
        let now = Utc::now();
        let t = Variant::from(now).to_time();
        assert_eq!(t.timestamp_nanos_opt(), now.timestamp_nanos_opt());
    }

    // true reads the wall clock, so only bound it
    #[test]
    fn test_true_is_now() {
        let before = Utc::now();
        let t = Variant::from(true).to_time();
        let after = Utc::now();
        assert!(t.to_utc() >= before && t.to_utc() <= after);
    }
}
