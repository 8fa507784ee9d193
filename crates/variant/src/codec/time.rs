//! Binary timestamp encoding
//!
//! Layout (big-endian):
//!
//! | offset | size | field                                                  |
//! |--------|------|--------------------------------------------------------|
//! | 0      | 1    | version, `2` only when the UTC offset carries seconds  |
//! | 1      | 8    | seconds since `0001-01-01T00:00:00Z`                   |
//! | 9      | 4    | nanoseconds within the second                          |
//! | 13     | 2    | UTC offset in minutes, `-1` for UTC                    |
//! | 15     | 1    | version 2 only: remaining offset seconds               |

use core::fmt::Write;

use bytes::{BufMut, Bytes, BytesMut};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};

/// Timestamp type produced by time conversions
pub type Timestamp = DateTime<FixedOffset>;

const VERSION_V1: u8 = 1;
const VERSION_V2: u8 = 2;
const V1_LEN: usize = 15;
const V2_LEN: usize = 16;

/// Seconds between `0001-01-01T00:00:00Z` and the Unix epoch
const UNIX_TO_INTERNAL: i64 = 62_135_596_800;

/// Offset field value marking a UTC timestamp
const UTC_MARKER: i16 = -1;

const NANOS_PER_SEC: i64 = 1_000_000_000;

fn to_fixed(t: DateTime<Utc>) -> Timestamp {
    t.with_timezone(&Utc.fix())
}

/// The zero timestamp, `0001-01-01T00:00:00Z`.
pub fn zero_time() -> Timestamp {
    to_fixed(DateTime::from_timestamp(-UNIX_TO_INTERNAL, 0).unwrap_or_default())
}

/// Check whether `t` is the zero timestamp
pub fn is_zero_time(t: &Timestamp) -> bool {
    t.timestamp() == -UNIX_TO_INTERNAL && t.timestamp_subsec_nanos() == 0
}

/// Encode `t` with its UTC offset.
pub fn encode_time(t: &Timestamp) -> Bytes {
    let offset = t.offset().local_minus_utc();
    let (version, offset_min, offset_sec) = match (offset / 60, offset % 60) {
        (0, 0) => (VERSION_V1, UTC_MARKER, 0),
        // -1 minute collides with the UTC marker, carry it in the seconds byte
        (-1, _) => (VERSION_V2, 0, offset as i8),
        (min, 0) => (VERSION_V1, min as i16, 0),
        (min, sec) => (VERSION_V2, min as i16, sec as i8),
    };

    let mut buf = BytesMut::with_capacity(V2_LEN);
    buf.put_u8(version);
    buf.put_i64(t.timestamp() + UNIX_TO_INTERNAL);
    buf.put_i32(t.timestamp_subsec_nanos() as i32);
    buf.put_i16(offset_min);
    if version == VERSION_V2 {
        buf.put_i8(offset_sec);
    }
    buf.freeze()
}

/// Decode a timestamp, `None` when `data` is not a valid encoding.
pub fn decode_time(data: &[u8]) -> Option<Timestamp> {
    let decoded = decode_parts(data);
    if decoded.is_none() && !data.is_empty() {
        tracing::trace!(len = data.len(), "undecodable binary timestamp");
    }
    decoded
}

fn decode_parts(data: &[u8]) -> Option<Timestamp> {
    let version = *data.first()?;
    let expected = match version {
        VERSION_V1 => V1_LEN,
        VERSION_V2 => V2_LEN,
        _ => return None,
    };
    if data.len() != expected {
        return None;
    }

    let secs = i64::from_be_bytes(data[1..9].try_into().ok()?);
    let nanos = i32::from_be_bytes(data[9..13].try_into().ok()?);
    let offset_min = i16::from_be_bytes(data[13..15].try_into().ok()?);

    let mut offset = if offset_min == UTC_MARKER {
        0
    } else {
        i32::from(offset_min) * 60
    };
    if version == VERSION_V2 {
        offset += i32::from(data[15] as i8);
    }

    let utc = DateTime::from_timestamp(
        secs.checked_sub(UNIX_TO_INTERNAL)?,
        u32::try_from(nanos).ok()?,
    )?;
    Some(utc.with_timezone(&FixedOffset::east_opt(offset)?))
}

/// Timestamp `nanos` nanoseconds after the Unix epoch, in UTC.
pub fn from_unix_nanos(nanos: i64) -> Timestamp {
    let secs = nanos.div_euclid(NANOS_PER_SEC);
    let subsec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    DateTime::from_timestamp(secs, subsec).map_or_else(zero_time, to_fixed)
}

/// Nanoseconds since the Unix epoch, `None` outside the `i64` range.
pub fn unix_nanos(t: &Timestamp) -> Option<i64> {
    t.timestamp_nanos_opt()
}

/// Format `t` with a strftime-style layout, empty when the layout is invalid.
pub fn format_time(t: &Timestamp, layout: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", t.format(layout)).is_err() {
        tracing::trace!(layout, "layout failed to format timestamp");
        return String::new();
    }
    out
}

/// Parse `text` with a strftime-style layout.
///
/// Layouts with an offset keep it; layouts without one are read as UTC,
/// and date-only layouts as UTC midnight.
pub fn parse_time(text: &str, layout: &str) -> Option<Timestamp> {
    if let Ok(t) = DateTime::parse_from_str(text, layout) {
        return Some(t);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout) {
        return Some(to_fixed(naive.and_utc()));
    }
    NaiveDate::parse_from_str(text, layout)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| to_fixed(naive.and_utc()))
}
