//! `#[derive(Candidate)]`.
//!
//! Generates the identity and capability impls a candidate type needs:
//! - `Identified` from `id = "..."` (defaults to the type name)
//! - `Keyed<T>` from `key = <expr>, key_type = <type>`
//! - `Upcast<B>` for every `base = <type>`

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    DeriveInput, Expr, Ident, LitStr, Token, Type,
    parse::ParseStream,
    parse_macro_input,
};

/// Arguments collected from every `#[candidate(...)]` attribute.
#[derive(Default)]
pub(crate) struct CandidateArgs {
    id: Option<LitStr>,
    key: Option<Expr>,
    key_type: Option<Type>,
    bases: Vec<Type>,
}

impl CandidateArgs {
    /// Parses one attribute's arguments; repeated attributes accumulate.
    fn parse_into(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "id" => {
                    if self.id.is_some() {
                        return Err(syn::Error::new(ident.span(), "duplicate `id`"));
                    }
                    self.id = Some(input.parse()?);
                }
                "key" => {
                    if self.key.is_some() {
                        return Err(syn::Error::new(ident.span(), "duplicate `key`"));
                    }
                    self.key = Some(input.parse()?);
                }
                "key_type" => {
                    if self.key_type.is_some() {
                        return Err(syn::Error::new(ident.span(), "duplicate `key_type`"));
                    }
                    self.key_type = Some(input.parse()?);
                }
                "base" => {
                    self.bases.push(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(())
    }
}

pub(crate) fn candidate_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut args = CandidateArgs::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("candidate")) {
        if let Err(err) = attr.parse_args_with(|stream: ParseStream| args.parse_into(stream)) {
            return err.to_compile_error().into();
        }
    }

    let id = args
        .id
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));

    let keyed_impl = match (args.key, args.key_type) {
        (Some(key), Some(key_type)) => quote! {
            impl #impl_generics ::metafactory::Keyed<#key_type> for #name #ty_generics #where_clause {
                const KEY: #key_type = #key;
            }
        },
        (None, None) => quote! {},
        (Some(key), None) => {
            return syn::Error::new_spanned(key, "`key` requires `key_type = <type>`")
                .to_compile_error()
                .into();
        }
        (None, Some(key_type)) => {
            return syn::Error::new_spanned(key_type, "`key_type` requires `key = <expr>`")
                .to_compile_error()
                .into();
        }
    };

    let upcast_impls = args.bases.iter().map(|base| {
        quote! {
            impl #impl_generics ::metafactory::Upcast<#base> for #name #ty_generics #where_clause {
                fn upcast(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<#base> {
                    self
                }
            }
        }
    });

    let expanded = quote! {
        impl #impl_generics ::metafactory::Identified for #name #ty_generics #where_clause {
            const ID: &'static str = #id;
        }

        #keyed_impl

        #(#upcast_impls)*
    };

    TokenStream::from(expanded)
}
