//! Proc-macros for cross-ui.
//!
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder methods
//!   for each named field of a configuration struct.
//!
//! ## Field control
//! - `#[with_builders(skip)]` leaves the field without a builder.
//! - `#[with_builders(into)]` makes the builder accept `impl Into<FieldType>`.
//!
//! ### Example
//! ```ignore
//! use cross_ui_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, WithBuilders)]
//! pub struct SliderConfig {
//!     pub maximum: f32,
//!     #[with_builders(into)]
//!     pub label: String,
//!     #[with_builders(skip)]
//!     pub revision: u32,
//! }
//!
//! let config = SliderConfig { maximum: 1.0, label: String::new(), revision: 0 }
//!     .with_maximum(10.0)
//!     .with_label("volume");
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Field, Fields};

/// How a single field's builder is generated
#[derive(Default)]
struct FieldOptions {
    skip: bool,
    into: bool,
}

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value and return `Self`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        ));
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        ));
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in &fields_named.named {
        let options = field_options(field)?;
        if options.skip {
            continue;
        }
        if let Some(method) = builder_method(field, &options) {
            methods.push(method);
        }
    }

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    })
}

fn builder_method(field: &Field, options: &FieldOptions) -> Option<TokenStream2> {
    let field_ident = field.ident.as_ref()?;
    let field_ty = &field.ty;
    let method_ident = format_ident!("with_{}", field_ident);
    let doc = format!("Set `{}`", field_ident);

    let method = if options.into {
        quote! {
            #[doc = #doc]
            #[inline]
            pub fn #method_ident(mut self, value: impl ::core::convert::Into<#field_ty>) -> Self {
                self.#field_ident = value.into();
                self
            }
        }
    } else {
        quote! {
            #[doc = #doc]
            #[inline]
            pub fn #method_ident(mut self, value: #field_ty) -> Self {
                self.#field_ident = value;
                self
            }
        }
    };

    Some(method)
}

fn field_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("with_builders") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("into") {
                options.into = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `into`"))
            }
        })?;
    }

    if options.skip && options.into {
        return Err(syn::Error::new(
            field.span(),
            "`skip` and `into` cannot be combined",
        ));
    }

    Ok(options)
}
