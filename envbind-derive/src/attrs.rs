//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The binding string is passed through to the runtime unchanged; this module
//! only checks that it is well-formed Rust syntax.

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attribute from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Binding string such as `"PORT"` or `"DATABASE_URL,required"`.
    ///
    /// `None` when the field carries no `#[env]` attribute.
    pub binding: Option<LitStr>,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` attribute from a struct field.
    ///
    /// Attributes other than `env` are ignored so other derives can use them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if attrs.binding.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate env attribute, combine into #[env(\"NAME,required\")]",
                ));
            }

            let binding: LitStr = attr.parse_args().map_err(|e| {
                syn::Error::new(
                    e.span(),
                    "expected a string literal, e.g. #[env(\"NAME\")] or #[env(\"NAME,required\")]",
                )
            })?;
            attrs.binding = Some(binding);
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_binding() {
        let field: Field = parse_quote! {
            #[env("DATABASE_URL")]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.binding.unwrap().value(), "DATABASE_URL");
    }

    #[test]
    fn test_parse_required_binding() {
        let field: Field = parse_quote! {
            #[env("DATABASE_URL,required")]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.binding.unwrap().value(), "DATABASE_URL,required");
    }

    #[test]
    fn test_no_attribute() {
        let field: Field = parse_quote! {
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.binding.is_none());
    }

    #[test]
    fn test_other_attributes_ignored() {
        let field: Field = parse_quote! {
            #[doc = "Listening port"]
            #[env("PORT")]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.binding.unwrap().value(), "PORT");
    }

    #[test]
    fn test_duplicate_attribute() {
        let field: Field = parse_quote! {
            #[env("PORT")]
            #[env("HTTP_PORT")]
            pub port: u16
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("duplicate env attribute"));
    }

    #[test]
    fn test_non_literal_argument() {
        let field: Field = parse_quote! {
            #[env(name = "PORT")]
            pub port: u16
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("expected a string literal"));
    }
}
