//! Populating structs field by field

use crate::binding::Binding;
use crate::decode;
use crate::error::{DecodeError, Error};
use crate::source::{resolve_in, ProcessEnv, Source};
use crate::target::Target;

/// One struct field as seen by the dispatcher.
///
/// Built by the code `#[derive(Populate)]` generates. Fields with an
/// `#[env("...")]` attribute are [`Field::bound`], the rest are
/// [`Field::unbound`].
pub struct Field<'a> {
    name: &'static str,
    exported: bool,
    slot: Option<(&'static str, &'a mut dyn Target)>,
}

impl<'a> Field<'a> {
    /// A field carrying a binding string and a writable destination.
    pub fn bound(
        name: &'static str,
        tag: &'static str,
        exported: bool,
        target: &'a mut dyn Target,
    ) -> Self {
        Self {
            name,
            exported,
            slot: Some((tag, target)),
        }
    }

    /// A field without a binding. It is never written to.
    pub fn unbound(name: &'static str, exported: bool) -> Self {
        Self {
            name,
            exported,
            slot: None,
        }
    }
}

/// Structs that can be populated from environment variables.
///
/// Usually implemented with `#[derive(Populate)]`.
pub trait Populate {
    /// Hand every field to `visit` in declaration order, stopping at the
    /// first error `visit` returns.
    fn visit_fields(
        &mut self,
        visit: &mut dyn FnMut(Field<'_>) -> Result<(), Error>,
    ) -> Result<(), Error>;

    /// Populate `self` from the process environment.
    ///
    /// # Errors
    ///
    /// See [`populate`].
    fn populate(&mut self) -> Result<(), Error> {
        populate(self)
    }

    /// Build `Self::default()` and populate it from the process environment.
    ///
    /// # Errors
    ///
    /// See [`populate`].
    fn from_env() -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        let mut config = Self::default();
        config.populate()?;
        Ok(config)
    }
}

/// Populate `target` from the process environment.
///
/// Each bound field reads `VAR`, or the file named by `VAR_FILE`, decodes the
/// value for the field's type and writes it into the field. Fields whose
/// variable is not set keep their current value unless marked `required`.
///
/// # Errors
///
/// Stops at the first failing field; fields populated before it keep their
/// new values.
///
/// - [`Error::FieldUnexported`]: the field is not `pub`
/// - [`Error::FieldRequired`]: a `required` variable is not set
/// - [`Error::FieldUnsupportedType`]: no decoder exists for the field's type
/// - [`Error::FieldDecode`]: the value could not be decoded
pub fn populate<T: Populate + ?Sized>(target: &mut T) -> Result<(), Error> {
    populate_from(target, &ProcessEnv)
}

/// Populate `target` from the variables of `source`.
///
/// Same semantics as [`populate`], including the `VAR_FILE` fallback.
pub fn populate_from<T, S>(target: &mut T, source: &S) -> Result<(), Error>
where
    T: Populate + ?Sized,
    S: Source + ?Sized,
{
    target.visit_fields(&mut |field| populate_field(field, source))
}

/// Like [`populate`], for a destination that may be missing.
///
/// # Errors
///
/// [`Error::InvalidTarget`] when `target` is `None`, otherwise as [`populate`].
pub fn try_populate<T: Populate + ?Sized>(target: Option<&mut T>) -> Result<(), Error> {
    let target = target.ok_or(Error::InvalidTarget)?;
    populate(target)
}

fn populate_field<S: Source + ?Sized>(field: Field<'_>, source: &S) -> Result<(), Error> {
    let Field {
        name: field_name,
        exported,
        slot,
    } = field;

    if !exported {
        return Err(Error::FieldUnexported { field: field_name });
    }

    let Some((tag, target)) = slot else {
        return Ok(());
    };
    let Some(binding) = Binding::parse(tag) else {
        tracing::trace!(field = field_name, "no binding, skipping");
        return Ok(());
    };

    let Some(raw) = resolve_in(source, binding.name) else {
        if binding.required {
            return Err(Error::FieldRequired {
                field: field_name,
                var: binding.name.to_string(),
            });
        }
        tracing::debug!(field = field_name, var = binding.name, "not set, keeping current value");
        return Ok(());
    };

    let key = target.shape().decoder_key();
    let decoder = decode::lookup(&key).ok_or_else(|| Error::FieldUnsupportedType {
        field: field_name,
        key: key.to_string(),
    })?;

    let decode_error = |source: DecodeError| Error::FieldDecode {
        field: field_name,
        source,
    };
    let value = decoder(&raw).map_err(decode_error)?;
    target.assign(value).map_err(decode_error)?;

    tracing::trace!(field = field_name, var = binding.name, "populated");
    Ok(())
}
