//! Dynamically typed scalar values.
//!
//! A [`Variant`] holds one of a closed set of scalar kinds (text, bool,
//! eight integer widths, two float widths, timestamp) as a tagged buffer of
//! canonical bytes, and converts to any of nine target representations on
//! request. Every conversion is total: unreadable input yields the target's
//! zero value.
//!
//! ```rust
//! use nebula_variant::prelude::*;
//!
//! let v = Variant::from(i64::MAX);
//! assert_eq!(v.kind(), Kind::Int64);
//! assert_eq!(v.to_text(), "9223372036854775807");
//! assert_eq!(v.to_int64(), i64::MAX);
//! assert_eq!(v.to_float32(), 9.223_372e18);
//!
//! assert_eq!(Variant::from("-100.86").to_int64(), -100);
//! assert_eq!(Variant::from(-1_i32).to_uint(), 0);
//! assert!(Variant::from("false").to_bool());
//! ```
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod convert;
pub mod error;
pub mod kind;
pub mod parse;
pub mod text;
pub mod variant;

pub use codec::Timestamp;
pub use config::TextCodecConfig;
pub use convert::{ConvertFn, Converter, Registry, Table};
pub use error::{Result, VariantError};
pub use kind::Kind;
pub use text::{TextCodec, marshal_text, unmarshal_text};
pub use variant::{DEFAULT_LAYOUT, Variant};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Kind, Registry, TextCodec, TextCodecConfig, Timestamp, Variant, VariantError};
}
