//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// `Populate` derive macro
///
/// Implements `envbind::Populate` by handing every field to the dispatcher
/// in declaration order.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("NAME")]`: Read the field from `NAME` (or `NAME_FILE`)
/// - `#[env("NAME,required")]`: Same, failing when neither is set
///
/// Fields without `#[env]` are not read, but must still be `pub`.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(env))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Populate only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Populate only supports structs",
            ));
        }
    };

    let visits = fields
        .iter()
        .map(|field| {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new_spanned(field, "expected a named field"));
            };
            let field_name = ident.unraw().to_string();
            let exported = !matches!(field.vis, Visibility::Inherited);

            let attrs = FieldAttrs::from_field(field)?;

            Ok(match attrs.binding {
                Some(binding) => quote! {
                    visit(::envbind::Field::bound(
                        #field_name,
                        #binding,
                        #exported,
                        &mut self.#ident,
                    ))?;
                },
                None => quote! {
                    visit(::envbind::Field::unbound(#field_name, #exported))?;
                },
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::envbind::Populate for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn visit_fields(
                &mut self,
                visit: &mut dyn ::core::ops::FnMut(
                    ::envbind::Field<'_>,
                ) -> ::core::result::Result<(), ::envbind::Error>,
            ) -> ::core::result::Result<(), ::envbind::Error> {
                #(#visits)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
