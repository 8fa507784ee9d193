//! Conversion registry
//!
//! One frozen dispatch table per target representation. A table maps every
//! source [`Kind`] to the function that converts a [`Variant`] of that kind;
//! [`Kind::Invalid`] has no entry and resolves to the target's zero value.
//!
//! Tables are built from a [`Converter`], whose [`Converter::resolve`] is an
//! exhaustive match over [`Kind`]: a new kind does not compile until every
//! target handles it.
//!
//! ```rust
//! use nebula_variant::{Kind, Registry, Variant};
//!
//! let registry = Registry::new();
//! assert!(registry.int64().get(Kind::Invalid).is_none());
//! assert_eq!(registry.int64().convert(&Variant::from("-42")), -42);
//! assert_eq!(Variant::from(7_u8).convert(registry.string()), "7");
//! ```

mod boolean;
mod float32;
mod float64;
mod int;
mod int64;
mod string;
mod time;
mod uint;
mod uint64;

use core::fmt::{Debug, Formatter};

use once_cell::sync::Lazy;

pub use boolean::BoolConverter;
pub use float32::Float32Converter;
pub use float64::Float64Converter;
pub use int::IntConverter;
pub use int64::Int64Converter;
pub use string::StringConverter;
pub use time::TimeConverter;
pub use uint::UintConverter;
pub use uint64::Uint64Converter;

use crate::codec::{self, FixedWidth, Timestamp};
use crate::kind::Kind;
use crate::variant::Variant;

/// A conversion from one source kind to a target type
pub type ConvertFn<T> = fn(&Variant) -> T;

/// The conversions into one target representation.
///
/// Every function is total: short, absent or malformed data yields the
/// target's zero value.
pub trait Converter {
    /// Target type
    type Output;

    /// Target name, for diagnostics
    const TARGET: &'static str;

    /// Value returned for kinds without a conversion
    fn zero() -> Self::Output;

    fn from_string(v: &Variant) -> Self::Output;
    fn from_bool(v: &Variant) -> Self::Output;
    fn from_int(v: &Variant) -> Self::Output;
    fn from_int8(v: &Variant) -> Self::Output;
    fn from_int16(v: &Variant) -> Self::Output;
    fn from_int32(v: &Variant) -> Self::Output;
    fn from_int64(v: &Variant) -> Self::Output;
    fn from_uint(v: &Variant) -> Self::Output;
    fn from_uint8(v: &Variant) -> Self::Output;
    fn from_uint16(v: &Variant) -> Self::Output;
    fn from_uint32(v: &Variant) -> Self::Output;
    fn from_uint64(v: &Variant) -> Self::Output;
    fn from_float32(v: &Variant) -> Self::Output;
    fn from_float64(v: &Variant) -> Self::Output;
    fn from_time(v: &Variant) -> Self::Output;

    /// Conversion for `kind`, `None` for [`Kind::Invalid`]
    fn resolve(kind: Kind) -> Option<ConvertFn<Self::Output>> {
        let f: ConvertFn<Self::Output> = match kind {
            Kind::Invalid => return None,
            Kind::String => Self::from_string,
            Kind::Bool => Self::from_bool,
            Kind::Int => Self::from_int,
            Kind::Int8 => Self::from_int8,
            Kind::Int16 => Self::from_int16,
            Kind::Int32 => Self::from_int32,
            Kind::Int64 => Self::from_int64,
            Kind::Uint => Self::from_uint,
            Kind::Uint8 => Self::from_uint8,
            Kind::Uint16 => Self::from_uint16,
            Kind::Uint32 => Self::from_uint32,
            Kind::Uint64 => Self::from_uint64,
            Kind::Float32 => Self::from_float32,
            Kind::Float64 => Self::from_float64,
            Kind::Time => Self::from_time,
        };
        Some(f)
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Frozen dispatch table for one target type, indexed by [`Kind::index`].
pub struct Table<T> {
    target: &'static str,
    entries: [Option<ConvertFn<T>>; Kind::COUNT],
    zero: fn() -> T,
}

impl<T> Table<T> {
    /// Build the table for converter `C`
    pub fn build<C: Converter<Output = T>>() -> Self {
        Self {
            target: C::TARGET,
            entries: Kind::ALL.map(C::resolve),
            zero: C::zero,
        }
    }

    /// Target name
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Conversion registered for `kind`
    #[inline]
    pub fn get(&self, kind: Kind) -> Option<ConvertFn<T>> {
        self.entries[kind.index()]
    }

    /// Convert `v`, falling back to the zero value when its kind has no entry
    #[inline]
    pub fn convert(&self, v: &Variant) -> T {
        match self.get(v.kind()) {
            Some(f) => f(v),
            None => (self.zero)(),
        }
    }

    /// The target's zero value
    pub fn zero(&self) -> T {
        (self.zero)()
    }

    /// Number of kinds with a registered conversion
    pub fn registered(&self) -> usize {
        self.entries.iter().flatten().count()
    }
}

impl<T> Debug for Table<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Table")
            .field("target", &self.target)
            .field("registered", &self.registered())
            .finish()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The complete set of conversion tables, one per target representation.
///
/// Built once and never mutated, so a shared reference is safe to read from
/// any number of threads.
#[derive(Debug)]
pub struct Registry {
    boolean: Table<bool>,
    string: Table<String>,
    int: Table<isize>,
    int64: Table<i64>,
    uint: Table<usize>,
    uint64: Table<u64>,
    float32: Table<f32>,
    float64: Table<f64>,
    time: Table<Timestamp>,
}

impl Registry {
    /// Build every table
    pub fn new() -> Self {
        let registry = Self {
            boolean: Table::build::<BoolConverter>(),
            string: Table::build::<StringConverter>(),
            int: Table::build::<IntConverter>(),
            int64: Table::build::<Int64Converter>(),
            uint: Table::build::<UintConverter>(),
            uint64: Table::build::<Uint64Converter>(),
            float32: Table::build::<Float32Converter>(),
            float64: Table::build::<Float64Converter>(),
            time: Table::build::<TimeConverter>(),
        };
        tracing::debug!(
            targets = 9,
            kinds = Kind::COUNT,
            native_bits = usize::BITS,
            "conversion registry built"
        );
        registry
    }

    /// Process-wide registry, built on first use
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn boolean(&self) -> &Table<bool> {
        &self.boolean
    }

    pub fn string(&self) -> &Table<String> {
        &self.string
    }

    pub fn int(&self) -> &Table<isize> {
        &self.int
    }

    pub fn int64(&self) -> &Table<i64> {
        &self.int64
    }

    pub fn uint(&self) -> &Table<usize> {
        &self.uint
    }

    pub fn uint64(&self) -> &Table<u64> {
        &self.uint64
    }

    pub fn float32(&self) -> &Table<f32> {
        &self.float32
    }

    pub fn float64(&self) -> &Table<f64> {
        &self.float64
    }

    pub fn time(&self) -> &Table<Timestamp> {
        &self.time
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SHARED DECODING
// ============================================================================

/// Decode the fixed-width scalar a variant stores
#[inline]
pub(crate) fn scalar<S: FixedWidth>(v: &Variant) -> S {
    codec::decode(v.to_bytes())
}

/// Decode a fixed-width scalar and narrow it into `T`, `0` when it does not fit.
#[inline]
pub(crate) fn narrow<S, T>(v: &Variant) -> T
where
    S: FixedWidth,
    T: TryFrom<S> + Default,
{
    T::try_from(scalar::<S>(v)).unwrap_or_default()
}

/// Bool-kind sources read their first byte; an absent byte is false.
#[inline]
pub(crate) fn flag(v: &Variant) -> bool {
    v.to_bytes().first().is_some_and(|&b| b != 0x00)
}

/// Decode a time-kind buffer
#[inline]
pub(crate) fn instant(v: &Variant) -> Option<Timestamp> {
    codec::decode_time(v.to_bytes())
}

/// Nanoseconds since the Unix epoch of a time-kind buffer
#[inline]
pub(crate) fn epoch_nanos(v: &Variant) -> Option<i64> {
    instant(v).and_then(|t| codec::time::unix_nanos(&t))
}
