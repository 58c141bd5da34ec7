//! Parsing of `#[env("...")]` binding strings

/// A field's binding: the variable it reads from and whether it must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    /// Environment variable name
    pub name: &'a str,
    /// Whether absence of the variable is an error
    pub required: bool,
}

impl<'a> Binding<'a> {
    /// Parse a binding string of the form `NAME` or `NAME,required`.
    ///
    /// Returns `None` for an empty string, meaning the field has no binding
    /// and is skipped. A second segment other than `required` is ignored.
    /// Segments are matched exactly, without trimming.
    pub fn parse(tag: &'a str) -> Option<Self> {
        if tag.is_empty() {
            return None;
        }

        let mut parts = tag.split(',');
        let name = parts.next().unwrap_or_default();
        let required = parts.next() == Some("required");

        Some(Self { name, required })
    }
}
