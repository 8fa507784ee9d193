//! Platform word signed integer target

use super::{Converter, epoch_nanos, flag, narrow, scalar};
use crate::parse::{IntWidth, parse_signed};
use crate::variant::Variant;

/// Conversions to the platform word `isize`.
///
/// Values outside the `isize` range convert to `0`; floats truncate toward
/// zero and saturate.
pub struct IntConverter;

impl Converter for IntConverter {
    type Output = isize;
    const TARGET: &'static str = "int";

    fn zero() -> isize {
        0
    }

    fn from_string(v: &Variant) -> isize {
        isize::try_from(parse_signed(v.to_bytes(), IntWidth::NATIVE)).unwrap_or_default()
    }

    fn from_bool(v: &Variant) -> isize {
        isize::from(flag(v))
    }

    fn from_int(v: &Variant) -> isize {
        scalar::<isize>(v)
    }

    fn from_int8(v: &Variant) -> isize {
        narrow::<i8, _>(v)
    }

    fn from_int16(v: &Variant) -> isize {
        narrow::<i16, _>(v)
    }

    fn from_int32(v: &Variant) -> isize {
        narrow::<i32, _>(v)
    }

    fn from_int64(v: &Variant) -> isize {
        narrow::<i64, _>(v)
    }

    fn from_uint(v: &Variant) -> isize {
        narrow::<usize, _>(v)
    }

    fn from_uint8(v: &Variant) -> isize {
        narrow::<u8, _>(v)
    }

    fn from_uint16(v: &Variant) -> isize {
        narrow::<u16, _>(v)
    }

    fn from_uint32(v: &Variant) -> isize {
        narrow::<u32, _>(v)
    }

    fn from_uint64(v: &Variant) -> isize {
        narrow::<u64, _>(v)
    }

    fn from_float32(v: &Variant) -> isize {
        scalar::<f32>(v) as isize
    }

    fn from_float64(v: &Variant) -> isize {
        scalar::<f64>(v) as isize
    }

    fn from_time(v: &Variant) -> isize {
        epoch_nanos(v).map_or(0, |n| isize::try_from(n).unwrap_or_default())
    }
}
