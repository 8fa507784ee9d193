//! The variant value box
//!
//! A [`Variant`] is a [`Kind`] tag, the canonical bytes of the value, and a
//! time layout used when a timestamp is read as or parsed from text. It is
//! immutable once built; [`Variant::with_layout`] consumes and returns it.
//!
//! ```rust
//! use nebula_variant::{Kind, Variant};
//!
//! let v = Variant::from(-100_i16);
//! assert_eq!(v.kind(), Kind::Int16);
//! assert_eq!(v.to_bytes(), &[0xff, 0x9c]);
//! assert_eq!(v.to_text(), "-100");
//! assert_eq!(v.to_uint64(), 0);
//!
//! let age = Variant::from("36");
//! assert_eq!(age.to_int(), 36);
//! assert!(age.to_bool());
//! ```

use core::any::Any;
use core::fmt::{Debug, Display, Formatter};
use std::borrow::Cow;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

use crate::codec::{self, FixedWidth, Timestamp};
use crate::convert::{Registry, Table};
use crate::kind::Kind;

/// Layout used for time text unless a variant carries its own
pub const DEFAULT_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A scalar of any supported kind, stored as canonical bytes.
///
/// Equality is structural over kind, bytes and layout: `Int32(5)` and
/// `Int64(5)` differ, as do two equal timestamps with different layouts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    kind: Kind,
    data: Bytes,
    layout: Cow<'static, str>,
}

impl Variant {
    /// The invalid variant, holding nothing
    #[allow(clippy::declare_interior_mutable_const)]
    pub const NIL: Self = Self {
        kind: Kind::Invalid,
        data: Bytes::new(),
        layout: Cow::Borrowed(DEFAULT_LAYOUT),
    };

    /// Build from any supported native value
    pub fn new(value: impl Into<Self>) -> Self {
        value.into()
    }

    /// Build from a kind and raw bytes, without checking them against each other.
    ///
    /// Accessors tolerate any buffer; mismatched widths read as zero.
    pub fn from_parts(kind: Kind, data: impl Into<Bytes>) -> Self {
        Self {
            kind,
            data: data.into(),
            layout: Cow::Borrowed(DEFAULT_LAYOUT),
        }
    }

    fn fixed<T: FixedWidth>(value: T) -> Self {
        Self::from_parts(T::KIND, codec::encode(value))
    }

    /// Build from a type-erased value.
    ///
    /// Every supported native type is recognized, along with `Option`s of
    /// them, `&'static str`, `()` and `Variant` itself. Anything else yields
    /// [`Variant::NIL`].
    pub fn from_any(value: &dyn Any) -> Self {
        macro_rules! downcast {
            ($($ty:ty),* $(,)?) => {$(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return Self::from(v);
                }
                if let Some(v) = value.downcast_ref::<Option<$ty>>() {
                    return Self::from(v.as_ref());
                }
            )*};
        }

        downcast!(
            bool,
            i8,
            i16,
            i32,
            i64,
            isize,
            u8,
            u16,
            u32,
            u64,
            usize,
            f32,
            f64,
            String,
            DateTime<Utc>,
            DateTime<FixedOffset>,
            DateTime<Local>,
            Variant,
        );
        if let Some(&text) = value.downcast_ref::<&'static str>() {
            return Self::from(text);
        }
        if let Some(text) = value.downcast_ref::<Option<&'static str>>() {
            return Self::from(*text);
        }
        if value.is::<()>() {
            return Self::NIL;
        }

        tracing::trace!(type_id = ?value.type_id(), "unsupported native type, building an invalid variant");
        Self::NIL
    }

    /// Attach the strftime-style layout used for time text
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<Cow<'static, str>>) -> Self {
        self.layout = layout.into();
        self
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Check if this variant holds a value
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.kind != Kind::Invalid
    }

    /// The stored bytes, whatever the kind
    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the stored bytes
    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Borrow a `String` variant's text, `None` for other kinds or invalid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            Kind::String => core::str::from_utf8(&self.data).ok(),
            _ => None,
        }
    }

    /// Convert through an explicitly supplied table
    #[inline]
    pub fn convert<T>(&self, table: &Table<T>) -> T {
        table.convert(self)
    }

    pub fn to_bool(&self) -> bool {
        self.convert(Registry::global().boolean())
    }

    pub fn to_int(&self) -> isize {
        self.convert(Registry::global().int())
    }

    pub fn to_int64(&self) -> i64 {
        self.convert(Registry::global().int64())
    }

    pub fn to_uint(&self) -> usize {
        self.convert(Registry::global().uint())
    }

    pub fn to_uint64(&self) -> u64 {
        self.convert(Registry::global().uint64())
    }

    pub fn to_float32(&self) -> f32 {
        self.convert(Registry::global().float32())
    }

    pub fn to_float64(&self) -> f64 {
        self.convert(Registry::global().float64())
    }

    /// Text form; timestamps are formatted with [`Variant::layout`]
    pub fn to_text(&self) -> String {
        self.convert(Registry::global().string())
    }

    pub fn to_time(&self) -> Timestamp {
        self.convert(Registry::global().time())
    }

    /// Compare against a variant or any native value.
    ///
    /// A native operand is first built into a variant carrying this
    /// variant's layout.
    pub fn equal(&self, other: &dyn Any) -> bool {
        if let Some(v) = other.downcast_ref::<Self>() {
            return self == v;
        }
        *self == Self::from_any(other).with_layout(self.layout.clone())
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::NIL
    }
}

impl Debug for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Variant({}, {:?})", self.kind, &self.data[..])
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

macro_rules! from_fixed {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Variant {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::fixed(value)
            }
        }

        impl From<&$ty> for Variant {
            #[inline]
            fn from(value: &$ty) -> Self {
                Self::fixed(*value)
            }
        }
    )*};
}

from_fixed!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::from_parts(Kind::String, Bytes::copy_from_slice(value.as_bytes()))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::from_parts(Kind::String, value.into_bytes())
    }
}

impl From<&String> for Variant {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Variant {
    fn from(value: DateTime<Tz>) -> Self {
        Self::from(&value)
    }
}

impl<Tz: TimeZone> From<&DateTime<Tz>> for Variant {
    fn from(value: &DateTime<Tz>) -> Self {
        Self::from_parts(Kind::Time, codec::encode_time(&value.fixed_offset()))
    }
}

impl From<&Variant> for Variant {
    fn from(value: &Variant) -> Self {
        value.clone()
    }
}

/// `None` builds [`Variant::NIL`]
impl<T: Into<Variant>> From<Option<T>> for Variant {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NIL, Into::into)
    }
}
