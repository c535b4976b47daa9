//! `#[derive(Dispatch)]`.
//!
//! Turns an enum into a named, exhaustively matchable dispatch result. One
//! variant is marked `#[dispatch(default)]`; every other variant is a
//! single-field tuple variant whose field type is a candidate. Candidates are
//! tried in variant declaration order.
//!
//! Generates on the enum:
//! - `produce(&predicate, id, args)` - first-match construction
//! - `is_default()` - whether the default variant is active
//! - `variant_name()` - the active variant's name

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Variant, parse_macro_input};

fn is_default_variant(variant: &Variant) -> syn::Result<bool> {
    let mut found = false;
    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("dispatch")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                found = true;
                Ok(())
            } else {
                Err(meta.error("unknown dispatch option; expected `default`"))
            }
        })?;
    }
    Ok(found)
}

pub(crate) fn dispatch_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Dispatch)] can only be used on enums",
            ));
        }
    };

    let mut default_variant = None;
    let mut candidates = Vec::new();

    for variant in variants {
        if is_default_variant(variant)? {
            if default_variant.is_some() {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "only one variant can be `#[dispatch(default)]`",
                ));
            }
            default_variant = Some(variant);
            continue;
        }

        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                candidates.push((&variant.ident, &fields.unnamed[0].ty));
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "candidate variants must have exactly one unnamed field",
                ));
            }
        }
    }

    let Some(default_variant) = default_variant else {
        return Err(syn::Error::new_spanned(
            enum_name,
            "mark exactly one variant with `#[dispatch(default)]`",
        ));
    };

    let default_ident = &default_variant.ident;
    let (default_value, default_pattern) = match &default_variant.fields {
        Fields::Unit => (
            quote! { #enum_name::#default_ident },
            quote! { #enum_name::#default_ident },
        ),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => (
            quote! { #enum_name::#default_ident(::core::default::Default::default()) },
            quote! { #enum_name::#default_ident(_) },
        ),
        _ => {
            return Err(syn::Error::new_spanned(
                default_variant,
                "the default variant must be a unit variant or have exactly one unnamed field",
            ));
        }
    };

    let bounds = candidates.iter().map(|(_, ty)| {
        quote! {
            __P: ::metafactory::Matches<#ty, __K>,
            #ty: ::metafactory::Construct<__Args>,
        }
    });

    let attempts = candidates.iter().map(|(ident, ty)| {
        quote! {
            if <__P as ::metafactory::Matches<#ty, __K>>::matches(predicate, id) {
                return #enum_name::#ident(<#ty as ::metafactory::Construct<__Args>>::construct(args));
            }
        }
    });

    let name_arms = candidates.iter().map(|(ident, _)| {
        quote! {
            #enum_name::#ident(_) => stringify!(#ident)
        }
    });

    Ok(quote! {
        impl #impl_generics #enum_name #ty_generics #where_clause {
            /// Builds the first candidate variant whose type `predicate` accepts
            /// for `id`, or the default variant if none does.
            #[allow(unused_variables)]
            pub fn produce<__P, __K, __Args>(predicate: &__P, id: &__K, args: __Args) -> Self
            where
                __K: ?Sized,
                #(#bounds)*
            {
                #(#attempts)*
                #default_value
            }

            /// Returns `true` if the default variant is active.
            pub fn is_default(&self) -> bool {
                ::core::matches!(self, #default_pattern)
            }

            /// Returns the name of the active variant.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    #default_pattern => stringify!(#default_ident),
                    #(#name_arms),*
                }
            }
        }
    })
}
