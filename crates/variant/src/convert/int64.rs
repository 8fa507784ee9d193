//! Int64 target

use super::{Converter, epoch_nanos, flag, narrow, scalar};
use crate::parse::{IntWidth, parse_signed};
use crate::variant::Variant;

/// Conversions to `i64`.
pub struct Int64Converter;

impl Converter for Int64Converter {
    type Output = i64;
    const TARGET: &'static str = "int64";

    fn zero() -> i64 {
        0
    }

    fn from_string(v: &Variant) -> i64 {
        parse_signed(v.to_bytes(), IntWidth::W64)
    }

    fn from_bool(v: &Variant) -> i64 {
        i64::from(flag(v))
    }

    fn from_int(v: &Variant) -> i64 {
        narrow::<isize, _>(v)
    }

    fn from_int8(v: &Variant) -> i64 {
        i64::from(scalar::<i8>(v))
    }

    fn from_int16(v: &Variant) -> i64 {
        i64::from(scalar::<i16>(v))
    }

    fn from_int32(v: &Variant) -> i64 {
        i64::from(scalar::<i32>(v))
    }

    fn from_int64(v: &Variant) -> i64 {
        scalar::<i64>(v)
    }

    fn from_uint(v: &Variant) -> i64 {
        narrow::<usize, _>(v)
    }

    fn from_uint8(v: &Variant) -> i64 {
        i64::from(scalar::<u8>(v))
    }

    fn from_uint16(v: &Variant) -> i64 {
        i64::from(scalar::<u16>(v))
    }

    fn from_uint32(v: &Variant) -> i64 {
        i64::from(scalar::<u32>(v))
    }

    fn from_uint64(v: &Variant) -> i64 {
        // above i64::MAX is 0, never a wrapped negative
        narrow::<u64, _>(v)
    }

    fn from_float32(v: &Variant) -> i64 {
        scalar::<f32>(v) as i64
    }

    fn from_float64(v: &Variant) -> i64 {
        scalar::<f64>(v) as i64
    }

    fn from_time(v: &Variant) -> i64 {
        epoch_nanos(v).unwrap_or_default()
    }
}
