//! Bool target

use super::Converter;
use crate::variant::Variant;

/// Conversions to `bool`.
///
/// One rule for every kind: true iff any stored byte is nonzero. A string
/// of any content, `"false"` included, is true; a zero number is false.
pub struct BoolConverter;

#[inline]
fn any_nonzero(v: &Variant) -> bool {
    v.to_bytes().iter().any(|&b| b != 0x00)
}

macro_rules! uniform {
    ($($from:ident),* $(,)?) => {$(
        #[inline]
        fn $from(v: &Variant) -> bool {
            any_nonzero(v)
        }
    )*};
}

impl Converter for BoolConverter {
    type Output = bool;
    const TARGET: &'static str = "bool";

    fn zero() -> bool {
        false
    }

    uniform!(
        from_string,
        from_bool,
        from_int,
        from_int8,
        from_int16,
        from_int32,
        from_int64,
        from_uint,
        from_uint8,
        from_uint16,
        from_uint32,
        from_uint64,
        from_float32,
        from_float64,
        from_time,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use chrono::{DateTime, Utc};
    use rstest::rstest;

    #[rstest]
    #[case(Variant::from(true), true)]
    #[case(Variant::from(false), false)]
    #[case(Variant::from("Hello World!你好！"), true)]
    #[case(Variant::from("false"), true)]
    #[case(Variant::from("0"), true)]
    #[case(Variant::from(""), false)]
    #[case(Variant::from(0_i8), false)]
    #[case(Variant::from(i8::MIN), true)]
    #[case(Variant::from(256_i16), true)]
    #[case(Variant::from(0_isize), false)]
    #[case(Variant::from(u64::MAX), true)]
    #[case(Variant::from(0.0_f32), false)]
    #[case(Variant::from(-0.0_f64), true)]
    #[case(Variant::from(0.5_f64), true)]
    #[case(Variant::from(DateTime::<Utc>::UNIX_EPOCH), true)]
    #[case(Variant::from_parts(Kind::Int32, vec![]), false)]
    #[case(Variant::from_parts(Kind::Bool, vec![0x00, 0x01]), true)]
    fn test_any_nonzero_byte(#[case] v: Variant, #[case] expected: bool) {
        assert_eq!(v.to_bool(), expected);
    }
}
