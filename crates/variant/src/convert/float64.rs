//! Float64 target

use super::{Converter, epoch_nanos, flag, scalar};
use crate::parse::parse_float64;
use crate::variant::Variant;

/// Conversions to `f64`.
pub struct Float64Converter;

impl Converter for Float64Converter {
    type Output = f64;
    const TARGET: &'static str = "float64";

    fn zero() -> f64 {
        0.0
    }

    fn from_string(v: &Variant) -> f64 {
        parse_float64(v.to_bytes())
    }

    fn from_bool(v: &Variant) -> f64 {
        f64::from(u8::from(flag(v)))
    }

    fn from_int(v: &Variant) -> f64 {
        scalar::<isize>(v) as f64
    }

    fn from_int8(v: &Variant) -> f64 {
        f64::from(scalar::<i8>(v))
    }

    fn from_int16(v: &Variant) -> f64 {
        f64::from(scalar::<i16>(v))
    }

    fn from_int32(v: &Variant) -> f64 {
        f64::from(scalar::<i32>(v))
    }

    fn from_int64(v: &Variant) -> f64 {
        scalar::<i64>(v) as f64
    }

    fn from_uint(v: &Variant) -> f64 {
        scalar::<usize>(v) as f64
    }

    fn from_uint8(v: &Variant) -> f64 {
        f64::from(scalar::<u8>(v))
    }

    fn from_uint16(v: &Variant) -> f64 {
        f64::from(scalar::<u16>(v))
    }

    fn from_uint32(v: &Variant) -> f64 {
        f64::from(scalar::<u32>(v))
    }

    fn from_uint64(v: &Variant) -> f64 {
        scalar::<u64>(v) as f64
    }

    /// Widens through the shortest decimal text of the `f32`, so `0.1_f32`
    /// becomes `0.1` rather than `0.10000000149011612`.
    fn from_float32(v: &Variant) -> f64 {
        scalar::<f32>(v).to_string().parse().unwrap_or(0.0)
    }

    fn from_float64(v: &Variant) -> f64 {
        scalar::<f64>(v)
    }

    fn from_time(v: &Variant) -> f64 {
        epoch_nanos(v).map_or(0.0, |n| n as f64)
    }
}
