// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `#[warn_deprecated]` attribute macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parser, punctuated::Punctuated, Expr, ExprLit, ItemFn, Lit, LitStr, Meta, Token};

/// Parsed attributes from `#[warn_deprecated(...)]`.
#[derive(Debug)]
struct WarnDeprecatedAttrs {
    /// Notice text
    message: LitStr,
    /// Shared identity, if any
    id: Option<LitStr>,
}

impl WarnDeprecatedAttrs {
    fn parse(attr: TokenStream) -> syn::Result<Self> {
        // Shorthand: #[warn_deprecated("text")]
        if let Ok(message) = syn::parse2::<LitStr>(attr.clone()) {
            return Ok(WarnDeprecatedAttrs { message, id: None });
        }

        let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
        let nested = parser.parse2(attr.clone())?;

        let mut message = None;
        let mut id = None;

        for meta in nested {
            let Meta::NameValue(nv) = &meta else {
                return Err(syn::Error::new_spanned(
                    &meta,
                    "expected `message = \"...\"` or `id = \"...\"`",
                ));
            };
            let Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = &nv.value
            else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "expected a string literal",
                ));
            };

            if nv.path.is_ident("message") {
                message = Some(lit_str.clone());
            } else if nv.path.is_ident("id") {
                id = Some(lit_str.clone());
            } else {
                return Err(syn::Error::new_spanned(
                    &nv.path,
                    "unknown key (expected `message` or `id`)",
                ));
            }
        }

        let message = message.ok_or_else(|| {
            syn::Error::new_spanned(&attr, "missing `message = \"...\"`")
        })?;

        Ok(WarnDeprecatedAttrs { message, id })
    }
}

/// Main entry point for the `#[warn_deprecated]` attribute macro.
pub fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let attrs = WarnDeprecatedAttrs::parse(attr)?;
    let func: ItemFn = syn::parse2(item)?;

    if let Some(constness) = &func.sig.constness {
        return Err(syn::Error::new_spanned(
            constness,
            "#[warn_deprecated] cannot be used on a `const fn`",
        ));
    }

    let message = &attrs.message;
    let id = match &attrs.id {
        Some(id) => quote! { ::core::option::Option::Some(#id) },
        None => quote! { ::core::option::Option::None },
    };

    let ItemFn {
        attrs: fn_attrs,
        vis,
        sig,
        block,
    } = func;

    Ok(quote! {
        #(#fn_attrs)*
        #vis #sig {
            {
                static __DEVLOP_NOTICE: ::devlop::OnceNotice =
                    ::devlop::OnceNotice::new(#message, #id);
                __DEVLOP_NOTICE.emit();
            }
            #block
        }
    })
}
