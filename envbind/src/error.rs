//! Error types for struct population

use std::num::{ParseFloatError, ParseIntError};

use crate::duration::DurationError;

/// Errors that can occur when populating a struct from environment variables.
///
/// Population stops at the first failing field. Fields processed before the
/// failure keep the values they were given.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The destination is not a writable structure reference.
    #[error("invalid target: not a reference to a struct")]
    InvalidTarget,

    /// The field is not declared `pub` and cannot be written.
    #[error("field {field:?}: field is unexported")]
    FieldUnexported {
        /// Name of the struct field
        field: &'static str,
    },

    /// The binding is marked `required` but neither `VAR` nor `VAR_FILE`
    /// yielded a value.
    #[error("field {field:?}: field is required ({var})")]
    FieldRequired {
        /// Name of the struct field
        field: &'static str,
        /// Name of the environment variable that was looked up
        var: String,
    },

    /// No decoder is registered for the field's decoder key.
    #[error("field {field:?}: unsupported field type: {key:?}")]
    FieldUnsupportedType {
        /// Name of the struct field
        field: &'static str,
        /// Decoder key derived from the field's shape (e.g. `[]i32`)
        key: String,
    },

    /// The decoder rejected the raw value.
    #[error("field {field:?}: field decode: {source}")]
    FieldDecode {
        /// Name of the struct field
        field: &'static str,
        /// Underlying decode failure
        #[source]
        source: DecodeError,
    },
}

impl Error {
    /// Name of the struct field the error is attached to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidTarget => None,
            Self::FieldUnexported { field }
            | Self::FieldRequired { field, .. }
            | Self::FieldUnsupportedType { field, .. }
            | Self::FieldDecode { field, .. } => Some(*field),
        }
    }
}

/// Errors produced by entries of the decoder table and by the assignment
/// engine when a decoded value does not fit its destination.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// A sign on an unsigned integer; only bare digits are accepted.
    #[error("invalid unsigned integer: {raw:?}")]
    UnsignedSign { raw: String },

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// A finite literal too large for the float type.
    #[error("float out of range: {raw:?}")]
    FloatRange { raw: String },

    #[error("invalid bool: {raw:?}")]
    Bool { raw: String },

    #[error(transparent)]
    Timestamp(#[from] time::error::Parse),

    #[error(transparent)]
    Duration(#[from] DurationError),

    /// Unrecognised log level. `fallback` is the level the decoder would have
    /// produced; population discards it and reports the error.
    #[error("invalid log level: {raw:?}")]
    Level {
        raw: String,
        fallback: tracing::Level,
    },

    /// The decoded value's kind does not match the destination.
    #[error("cannot assign {found} to {expected}")]
    Mismatch {
        expected: String,
        found: &'static str,
    },
}
