//! Uint64 target

use super::{Converter, epoch_nanos, flag, narrow, scalar};
use crate::parse::{IntWidth, parse_unsigned};
use crate::variant::Variant;

/// Conversions to `u64`.
pub struct Uint64Converter;

impl Converter for Uint64Converter {
    type Output = u64;
    const TARGET: &'static str = "uint64";

    fn zero() -> u64 {
        0
    }

    fn from_string(v: &Variant) -> u64 {
        parse_unsigned(v.to_bytes(), IntWidth::W64)
    }

    fn from_bool(v: &Variant) -> u64 {
        u64::from(flag(v))
    }

    fn from_int(v: &Variant) -> u64 {
        narrow::<isize, _>(v)
    }

    fn from_int8(v: &Variant) -> u64 {
        narrow::<i8, _>(v)
    }

    fn from_int16(v: &Variant) -> u64 {
        narrow::<i16, _>(v)
    }

    fn from_int32(v: &Variant) -> u64 {
        narrow::<i32, _>(v)
    }

    fn from_int64(v: &Variant) -> u64 {
        narrow::<i64, _>(v)
    }

    fn from_uint(v: &Variant) -> u64 {
        narrow::<usize, _>(v)
    }

    fn from_uint8(v: &Variant) -> u64 {
        u64::from(scalar::<u8>(v))
    }

    fn from_uint16(v: &Variant) -> u64 {
        u64::from(scalar::<u16>(v))
    }

    fn from_uint32(v: &Variant) -> u64 {
        u64::from(scalar::<u32>(v))
    }

    fn from_uint64(v: &Variant) -> u64 {
        scalar::<u64>(v)
    }

    fn from_float32(v: &Variant) -> u64 {
        scalar::<f32>(v) as u64
    }

    fn from_float64(v: &Variant) -> u64 {
        scalar::<f64>(v) as u64
    }

    fn from_time(v: &Variant) -> u64 {
        epoch_nanos(v).map_or(0, |n| u64::try_from(n).unwrap_or_default())
    }
}
