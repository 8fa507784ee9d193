//! Kind tags for [`Variant`](crate::Variant).
//!
//! A [`Kind`] names the native scalar a variant holds and, through that,
//! how its byte buffer is laid out. The set is closed: every conversion
//! target matches on it exhaustively.
//!
//! ```rust
//! use nebula_variant::Kind;
//!
//! assert_eq!(Kind::Int16.width(), Some(2));
//! assert!(Kind::Uint64.is_unsigned());
//! assert_eq!(Kind::from_name("float32"), Some(Kind::Float32));
//! assert_eq!(Kind::Time.width(), None);
//! ```

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The scalar type a [`Variant`](crate::Variant) currently holds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Kind {
    /// Absence of a value
    #[default]
    Invalid,
    String,
    Bool,
    /// Platform word-sized signed integer
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// Platform word-sized unsigned integer
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Time,
}

impl Kind {
    /// Number of kinds, `Invalid` included
    pub const COUNT: usize = 16;

    /// Every kind in tag order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Invalid,
        Self::String,
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
        Self::Time,
    ];

    /// Position of this kind in [`Kind::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get a descriptive name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Time => "time",
        }
    }

    /// Parse from a name produced by [`Kind::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Encoded width in bytes, `None` for the variable-width kinds and for
    /// `Invalid`, which holds no value.
    ///
    /// `Int` and `Uint` follow the host word size.
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Invalid => None,
            Self::Bool | Self::Int8 | Self::Uint8 => Some(1),
            Self::Int16 | Self::Uint16 => Some(2),
            Self::Int32 | Self::Uint32 | Self::Float32 => Some(4),
            Self::Int64 | Self::Uint64 | Self::Float64 => Some(8),
            Self::Int | Self::Uint => Some(size_of::<usize>()),
            Self::String | Self::Time => None,
        }
    }

    /// Check if this kind has a fixed encoded width
    pub const fn is_fixed_width(self) -> bool {
        self.width().is_some()
    }

    /// Check if this kind is a signed integer
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Check if this kind is an unsigned integer
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Uint | Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    /// Check if this kind is an integer of either sign
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Check if this kind is a float
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Check if this kind is numeric (integer or float)
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
