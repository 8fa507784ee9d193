//! Fixed-width scalar encoding

use bytes::Bytes;

use crate::kind::Kind;

/// A native scalar with a fixed-width big-endian encoding.
pub trait FixedWidth: Copy + Default {
    /// Kind tag a variant built from this type carries
    const KIND: Kind;

    /// Encoded width in bytes
    const WIDTH: usize;

    /// Encode into a fresh buffer of exactly [`Self::WIDTH`] bytes
    fn encode(self) -> Bytes;

    /// Decode from a buffer; anything but exactly [`Self::WIDTH`] bytes yields the zero value
    fn decode(data: &[u8]) -> Self;
}

/// Encode `value` into its canonical bytes.
#[inline]
pub fn encode<T: FixedWidth>(value: T) -> Bytes {
    value.encode()
}

/// Decode a `T` from `data`, tolerating short or absent buffers.
#[inline]
pub fn decode<T: FixedWidth>(data: &[u8]) -> T {
    T::decode(data)
}

#[cold]
fn width_mismatch(kind: Kind, expected: usize, actual: usize) {
    // An empty buffer is the valid zero value, not a mismatch.
    if actual != 0 {
        tracing::trace!(%kind, expected, actual, "buffer width mismatch, decoding as zero");
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl FixedWidth for $ty {
            const KIND: Kind = Kind::$kind;
            const WIDTH: usize = size_of::<$ty>();

            #[inline]
            fn encode(self) -> Bytes {
                Bytes::copy_from_slice(&self.to_be_bytes())
            }

            #[inline]
            fn decode(data: &[u8]) -> Self {
                match <[u8; size_of::<$ty>()]>::try_from(data) {
                    Ok(raw) => <$ty>::from_be_bytes(raw),
                    Err(_) => {
                        width_mismatch(Self::KIND, Self::WIDTH, data.len());
                        Self::default()
                    }
                }
            }
        }
    )*};
}

impl_fixed_width! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    usize => Uint,
    f32 => Float32,
    f64 => Float64,
}

impl FixedWidth for bool {
    const KIND: Kind = Kind::Bool;
    const WIDTH: usize = 1;

    #[inline]
    fn encode(self) -> Bytes {
        Bytes::from_static(if self { &[0x01] } else { &[0x00] })
    }

    #[inline]
    fn decode(data: &[u8]) -> Self {
        match data {
            [byte] => *byte != 0x00,
            _ => {
                width_mismatch(Self::KIND, Self::WIDTH, data.len());
                false
            }
        }
    }
}
