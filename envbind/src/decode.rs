//! The decoder table
//!
//! Each entry maps a canonical decoder key to a function turning the raw
//! string into a [`Value`]. The table is built on first use and never mutated
//! afterwards, so concurrent readers need no synchronisation.
//!
//! | key              | value                                           |
//! |------------------|-------------------------------------------------|
//! | `String`         | the raw string                                  |
//! | `[]u8`           | the raw bytes                                   |
//! | `[]String`       | split on `,` without trimming                   |
//! | `i8` … `isize`   | base-10 integer, range checked                  |
//! | `u8` … `usize`   | base-10 unsigned integer, no sign, range checked |
//! | `f32`, `f64`     | floating point, overflow to infinity rejected   |
//! | `bool`           | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `OffsetDateTime` | RFC 3339 timestamp                              |
//! | `Duration`       | see [`parse_duration`]                          |
//! | `Level`          | `debug`, `info`, `warn`, `error`, any case      |

use std::collections::HashMap;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::Level;

use crate::duration::parse_duration;
use crate::error::DecodeError;

/// A decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Bytes(Vec<u8>),
    Strings(Vec<String>),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Bool(bool),
    Timestamp(OffsetDateTime),
    Duration(Duration),
    Level(Level),
}

impl Value {
    /// The decoder key that produces this kind of value.
    pub fn key(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Bytes(_) => "[]u8",
            Self::Strings(_) => "[]String",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Timestamp(_) => "OffsetDateTime",
            Self::Duration(_) => "Duration",
            Self::Level(_) => "Level",
        }
    }
}

/// A decoder converts a raw string into a [`Value`].
pub type Decoder = fn(&str) -> Result<Value, DecodeError>;

static DECODERS: LazyLock<HashMap<&'static str, Decoder>> = LazyLock::new(|| {
    let entries: [(&'static str, Decoder); 19] = [
        ("String", |raw| Ok(Value::String(raw.to_string()))),
        ("[]u8", |raw| Ok(Value::Bytes(raw.as_bytes().to_vec()))),
        ("[]String", |raw| {
            Ok(Value::Strings(raw.split(',').map(str::to_string).collect()))
        }),
        ("i8", |raw| Ok(Value::I8(raw.parse()?))),
        ("i16", |raw| Ok(Value::I16(raw.parse()?))),
        ("i32", |raw| Ok(Value::I32(raw.parse()?))),
        ("i64", |raw| Ok(Value::I64(raw.parse()?))),
        ("isize", |raw| Ok(Value::Isize(raw.parse()?))),
        ("u8", |raw| Ok(Value::U8(parse_unsigned(raw)?))),
        ("u16", |raw| Ok(Value::U16(parse_unsigned(raw)?))),
        ("u32", |raw| Ok(Value::U32(parse_unsigned(raw)?))),
        ("u64", |raw| Ok(Value::U64(parse_unsigned(raw)?))),
        ("usize", |raw| Ok(Value::Usize(parse_unsigned(raw)?))),
        ("f32", |raw| Ok(Value::F32(parse_float(raw)?))),
        ("f64", |raw| Ok(Value::F64(parse_float(raw)?))),
        ("bool", |raw| parse_bool(raw).map(Value::Bool)),
        ("OffsetDateTime", |raw| {
            Ok(Value::Timestamp(OffsetDateTime::parse(raw, &Rfc3339)?))
        }),
        ("Duration", |raw| Ok(Value::Duration(parse_duration(raw)?))),
        ("Level", |raw| parse_level(raw).map(Value::Level)),
    ];
    HashMap::from(entries)
});

/// Look up the decoder registered for `key`.
pub fn lookup(key: &str) -> Option<Decoder> {
    DECODERS.get(key).copied()
}

/// Decode `raw` with the decoder registered for `key`.
///
/// Returns `None` when no decoder is registered for `key`.
pub fn decode(key: &str, raw: &str) -> Option<Result<Value, DecodeError>> {
    lookup(key).map(|decoder| decoder(raw))
}

fn parse_unsigned<T>(raw: &str) -> Result<T, DecodeError>
where
    T: FromStr<Err = ParseIntError>,
{
    if raw.starts_with('+') {
        return Err(DecodeError::UnsignedSign {
            raw: raw.to_string(),
        });
    }
    Ok(raw.parse()?)
}

fn parse_float<T>(raw: &str) -> Result<T, DecodeError>
where
    T: FromStr<Err = ParseFloatError> + Into<f64> + Copy,
{
    let value: T = raw.parse()?;
    // Rust rounds overflowing literals to infinity; only explicit
    // `inf`/`infinity` may decode to it.
    if value.into().is_infinite() {
        let literal = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
        if literal != "inf" && literal != "infinity" {
            return Err(DecodeError::FloatRange {
                raw: raw.to_string(),
            });
        }
    }
    Ok(value)
}

fn parse_bool(raw: &str) -> Result<bool, DecodeError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(DecodeError::Bool {
            raw: raw.to_string(),
        }),
    }
}

fn parse_level(raw: &str) -> Result<Level, DecodeError> {
    match raw.trim().to_lowercase().as_str() {
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(DecodeError::Level {
            raw: raw.to_string(),
            fallback: Level::INFO,
        }),
    }
}
