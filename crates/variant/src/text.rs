//! JSON text boundary
//!
//! Maps a [`Variant`] to a single JSON token and back:
//!
//! | kind                | token                                          |
//! |---------------------|------------------------------------------------|
//! | `String`            | quoted string                                  |
//! | `Time`              | quoted string formatted with the time layout   |
//! | `Bool`              | `true` / `false`                               |
//! | signed integers     | 64-bit signed number                           |
//! | unsigned integers   | 64-bit unsigned number                         |
//! | floats              | 64-bit number; NaN is `null`, infinities `"+Inf"`/`"-Inf"` |
//! | `Invalid`           | `null`, or the base64 of a non-empty buffer    |
//!
//! Decoding is deliberately shallow: a quoted token becomes a `String`,
//! `true`/`false` a `Bool`, `null` or empty input `Invalid`, and any other
//! token is kept verbatim as a `String` for the accessors to interpret.
//!
//! ```rust
//! use nebula_variant::text::{marshal_text, unmarshal_text};
//! use nebula_variant::{Kind, Variant};
//!
//! assert_eq!(marshal_text(&Variant::from(-3_i8)).unwrap(), b"-3");
//!
//! let weight = unmarshal_text(b"60.123").unwrap();
//! assert_eq!(weight.kind(), Kind::String);
//! assert_eq!(weight.to_int(), 60);
//! assert_eq!(weight.to_float64(), 60.123);
//! ```

use base64::Engine;
use bytes::Bytes;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::codec::time::{decode_time, format_time};
use crate::config::TextCodecConfig;
use crate::error::{Result, VariantError};
use crate::kind::Kind;
use crate::variant::Variant;

/// Encode `v` as a JSON token with the default configuration
pub fn marshal_text(v: &Variant) -> Result<Vec<u8>> {
    TextCodec::default().marshal(v)
}

/// Decode one JSON token with the default configuration
pub fn unmarshal_text(data: &[u8]) -> Result<Variant> {
    TextCodec::default().unmarshal(data)
}

/// Text codec bound to a validated [`TextCodecConfig`]
#[derive(Debug, Clone, Default)]
pub struct TextCodec {
    config: TextCodecConfig,
}

impl TextCodec {
    pub fn new(config: TextCodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TextCodecConfig {
        &self.config
    }

    pub fn marshal(&self, v: &Variant) -> Result<Vec<u8>> {
        let layout = if self.config.honor_variant_layout {
            v.layout()
        } else {
            &self.config.layout
        };
        Ok(serde_json::to_vec(&Token { variant: v, layout })?)
    }

    /// Decode one token; surrounding ASCII whitespace is ignored.
    ///
    /// Fails only on a quoted token that does not unquote cleanly.
    pub fn unmarshal(&self, data: &[u8]) -> Result<Variant> {
        let token = data.trim_ascii();
        let v = match token {
            [] | b"null" => Variant::NIL,
            b"true" => Variant::from(true),
            b"false" => Variant::from(false),
            [b'"', ..] => match serde_json::from_slice::<String>(token) {
                Ok(text) => Variant::from(text),
                Err(err) => {
                    let input = String::from_utf8_lossy(token);
                    tracing::debug!(%input, error = %err, "rejected quoted token");
                    return Err(VariantError::decode(input, err.to_string()));
                }
            },
            raw => Variant::from_parts(Kind::String, Bytes::copy_from_slice(raw)),
        };
        Ok(v.with_layout(self.config.layout.clone()))
    }
}

/// A variant paired with the layout its time token is formatted with
struct Token<'a> {
    variant: &'a Variant,
    layout: &'a str,
}

impl Serialize for Token<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let v = self.variant;
        match v.kind() {
            Kind::String => serializer.serialize_str(&v.to_text()),

            Kind::Time => {
                let text = decode_time(v.to_bytes())
                    .map(|t| format_time(&t, self.layout))
                    .unwrap_or_default();
                serializer.serialize_str(&text)
            }

            Kind::Bool => serializer.serialize_bool(v.to_bool()),

            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 => {
                serializer.serialize_i64(v.to_int64())
            }

            Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64 => {
                serializer.serialize_u64(v.to_uint64())
            }

            Kind::Float32 | Kind::Float64 => {
                let f = v.to_float64();
                if f.is_nan() {
                    serializer.serialize_none()
                } else if f.is_infinite() {
                    serializer.serialize_str(if f > 0.0 { "+Inf" } else { "-Inf" })
                } else {
                    serializer.serialize_f64(f)
                }
            }

            Kind::Invalid if v.to_bytes().is_empty() => serializer.serialize_none(),

            Kind::Invalid => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(v.to_bytes());
                serializer.serialize_str(&encoded)
            }
        }
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Token {
            variant: self,
            layout: self.layout(),
        }
        .serialize(serializer)
    }
}

/// Captures the raw JSON token, so this only works with `serde_json`
/// deserializers.
impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        unmarshal_text(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}
