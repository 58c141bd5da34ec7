//! Destination shapes and assignment of decoded values
//!
//! A bound field is one of three shapes:
//!
//! - a scalar such as `u16` or `String`,
//! - a sequence `Vec<T>` of a scalar,
//! - an optional `Option<T>` around either of the above.
//!
//! The shape decides which decoder key is looked up and how the decoded
//! [`Value`] is written back.

use std::borrow::Cow;
use std::time::Duration;

use time::OffsetDateTime;
use tracing::Level;

use crate::decode::Value;
use crate::error::DecodeError;

/// Shape of a destination field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A scalar with the given decoder key
    Scalar(&'static str),
    /// A `Vec` of the scalar with the given decoder key
    Sequence(&'static str),
    /// An `Option` around another shape
    Optional(Box<Shape>),
}

impl Shape {
    /// Decoder key for this shape.
    ///
    /// Sequences look up `[]` followed by the element key. Optionals look up
    /// the key of the shape they wrap.
    pub fn decoder_key(&self) -> Cow<'static, str> {
        match self {
            Self::Scalar(key) => Cow::Borrowed(*key),
            Self::Sequence(key) => Cow::Owned(format!("[]{key}")),
            Self::Optional(inner) => inner.decoder_key(),
        }
    }
}

/// A scalar type that can be the element of a [`Shape`].
pub trait Scalar: Sized {
    /// Decoder key of the scalar.
    const KEY: &'static str;

    /// Extract `Self` from a decoded value of the matching kind.
    fn from_value(value: Value) -> Option<Self>;

    /// Extract a sequence of `Self` from a decoded value.
    ///
    /// Only scalars with a sequence decoder (`[]u8`, `[]String`) return `Some`.
    fn seq_from_value(value: Value) -> Option<Vec<Self>> {
        let _ = value;
        None
    }
}

/// A field that decoded values can be assigned to.
pub trait Target {
    /// Shape of the type, without an instance.
    fn shape_of() -> Shape
    where
        Self: Sized;

    /// Build a fresh value of the type from a decoded value.
    fn build(value: Value) -> Result<Self, DecodeError>
    where
        Self: Sized;

    /// Shape of this destination.
    fn shape(&self) -> Shape;

    /// Write `value` into this destination.
    fn assign(&mut self, value: Value) -> Result<(), DecodeError>;
}

fn mismatch(expected: Shape, found: &'static str) -> DecodeError {
    DecodeError::Mismatch {
        expected: expected.decoder_key().into_owned(),
        found,
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $key:literal, $variant:ident $(, seq = $seq:ident)?;)*) => {
        $(
            impl Scalar for $ty {
                const KEY: &'static str = $key;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                $(
                    fn seq_from_value(value: Value) -> Option<Vec<Self>> {
                        match value {
                            Value::$seq(v) => Some(v),
                            _ => None,
                        }
                    }
                )?
            }

            impl Target for $ty {
                fn shape_of() -> Shape {
                    Shape::Scalar($key)
                }

                fn build(value: Value) -> Result<Self, DecodeError> {
                    let found = value.key();
                    <$ty as Scalar>::from_value(value)
                        .ok_or_else(|| mismatch(Self::shape_of(), found))
                }

                fn shape(&self) -> Shape {
                    Self::shape_of()
                }

                fn assign(&mut self, value: Value) -> Result<(), DecodeError> {
                    *self = Self::build(value)?;
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar! {
    String => "String", String, seq = Strings;
    i8 => "i8", I8;
    i16 => "i16", I16;
    i32 => "i32", I32;
    i64 => "i64", I64;
    isize => "isize", Isize;
    u8 => "u8", U8, seq = Bytes;
    u16 => "u16", U16;
    u32 => "u32", U32;
    u64 => "u64", U64;
    usize => "usize", Usize;
    f32 => "f32", F32;
    f64 => "f64", F64;
    bool => "bool", Bool;
    OffsetDateTime => "OffsetDateTime", Timestamp;
    Duration => "Duration", Duration;
    Level => "Level", Level;
}

impl<T: Scalar> Target for Vec<T> {
    fn shape_of() -> Shape {
        Shape::Sequence(T::KEY)
    }

    fn build(value: Value) -> Result<Self, DecodeError> {
        let found = value.key();
        T::seq_from_value(value).ok_or_else(|| mismatch(Self::shape_of(), found))
    }

    fn shape(&self) -> Shape {
        Self::shape_of()
    }

    fn assign(&mut self, value: Value) -> Result<(), DecodeError> {
        // Replace, never extend: a shorter sequence must not leave stale
        // trailing elements behind.
        *self = Self::build(value)?;
        Ok(())
    }
}

impl<T: Target> Target for Option<T> {
    fn shape_of() -> Shape {
        Shape::Optional(Box::new(T::shape_of()))
    }

    fn build(value: Value) -> Result<Self, DecodeError> {
        T::build(value).map(Some)
    }

    fn shape(&self) -> Shape {
        Self::shape_of()
    }

    fn assign(&mut self, value: Value) -> Result<(), DecodeError> {
        match self {
            Some(inner) => inner.assign(value),
            None => {
                *self = Some(T::build(value)?);
                Ok(())
            }
        }
    }
}
