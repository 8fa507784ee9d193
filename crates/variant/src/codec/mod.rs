//! Byte codec
//!
//! Per-kind rules between a native scalar and the byte buffer a
//! [`Variant`](crate::Variant) stores:
//!
//! - integers are two's-complement, big-endian, `width / 8` bytes
//! - floats store their IEEE-754 bit pattern big-endian
//! - bools are a single byte, `0x01` for true; any nonzero byte reads back as true
//! - timestamps use the versioned binary layout in [`time`]
//!
//! Decoding is total. A buffer whose length does not match the expected
//! width decodes to the zero value of the requested type.

pub mod scalar;
pub mod time;

pub use scalar::{FixedWidth, decode, encode};
pub use time::{Timestamp, decode_time, encode_time, zero_time};
