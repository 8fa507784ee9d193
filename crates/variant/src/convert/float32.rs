//! Float32 target

use super::{Converter, epoch_nanos, flag, scalar};
use crate::parse::parse_float32;
use crate::variant::Variant;

/// Conversions to `f32`.
///
/// Wide integers and `f64` round to the nearest representable value.
pub struct Float32Converter;

impl Converter for Float32Converter {
    type Output = f32;
    const TARGET: &'static str = "float32";

    fn zero() -> f32 {
        0.0
    }

    fn from_string(v: &Variant) -> f32 {
        parse_float32(v.to_bytes())
    }

    fn from_bool(v: &Variant) -> f32 {
        f32::from(u8::from(flag(v)))
    }

    fn from_int(v: &Variant) -> f32 {
        scalar::<isize>(v) as f32
    }

    fn from_int8(v: &Variant) -> f32 {
        f32::from(scalar::<i8>(v))
    }

    fn from_int16(v: &Variant) -> f32 {
        f32::from(scalar::<i16>(v))
    }

    fn from_int32(v: &Variant) -> f32 {
        scalar::<i32>(v) as f32
    }

    fn from_int64(v: &Variant) -> f32 {
        scalar::<i64>(v) as f32
    }

    fn from_uint(v: &Variant) -> f32 {
        scalar::<usize>(v) as f32
    }

    fn from_uint8(v: &Variant) -> f32 {
        f32::from(scalar::<u8>(v))
    }

    fn from_uint16(v: &Variant) -> f32 {
        f32::from(scalar::<u16>(v))
    }

    fn from_uint32(v: &Variant) -> f32 {
        scalar::<u32>(v) as f32
    }

    fn from_uint64(v: &Variant) -> f32 {
        scalar::<u64>(v) as f32
    }

    fn from_float32(v: &Variant) -> f32 {
        scalar::<f32>(v)
    }

    fn from_float64(v: &Variant) -> f32 {
        scalar::<f64>(v) as f32
    }

    fn from_time(v: &Variant) -> f32 {
        epoch_nanos(v).map_or(0.0, |n| n as f32)
    }
}
