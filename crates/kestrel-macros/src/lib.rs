// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This crate provides procedural macros for the Kestrel framework.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, DeriveInput, Ident, LitStr, Token};

/// A derive macro that declares a concrete event class.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Event)]
/// #[event(kind = WindowResize, category = WINDOW, custom_display)]
/// pub struct WindowResizeEvent { pub width: u32, pub height: u32 }
/// ```
///
/// * `kind` names both the `EventKind` variant and the `Event` variant wrapping the type.
/// * `category` is a `|`-separated list of `EventCategory` flag names.
/// * `custom_display` skips the generated `Display` impl, which renders the type name.
///
/// The expansion implements `kestrel_core::event::EventType` and
/// `From<Self> for kestrel_core::event::Event`.
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_event(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Parsed contents of the `#[event(...)]` attribute.
struct EventAttrs {
    kind: Ident,
    categories: Vec<Ident>,
    custom_display: bool,
}

fn parse_event_attrs(input: &DeriveInput) -> syn::Result<EventAttrs> {
    let mut kind = None;
    let mut categories = None;
    let mut custom_display = false;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("event")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                kind = Some(meta.value()?.parse::<Ident>()?);
                Ok(())
            } else if meta.path.is_ident("category") {
                let flags =
                    Punctuated::<Ident, Token![|]>::parse_separated_nonempty(meta.value()?)?;
                categories = Some(flags.into_iter().collect());
                Ok(())
            } else if meta.path.is_ident("custom_display") {
                custom_display = true;
                Ok(())
            } else {
                Err(meta.error("expected `kind`, `category` or `custom_display`"))
            }
        })?;
    }

    let kind = kind
        .ok_or_else(|| syn::Error::new_spanned(&input.ident, "missing `#[event(kind = ...)]`"))?;
    let categories = categories.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "missing `#[event(category = ...)]`")
    })?;

    Ok(EventAttrs {
        kind,
        categories,
        custom_display,
    })
}

fn expand_event(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "event types cannot be generic",
        ));
    }

    let EventAttrs {
        kind,
        categories,
        custom_display,
    } = parse_event_attrs(input)?;

    let name = &input.ident;
    let name_str = LitStr::new(&name.to_string(), name.span());
    let event = quote!(::kestrel_core::event::Event);
    let event_kind = quote!(::kestrel_core::event::EventKind);
    let category = quote!(::kestrel_core::event::EventCategory);

    let mut expanded = quote! {
        impl ::kestrel_core::event::EventType for #name {
            const KIND: #event_kind = #event_kind::#kind;
            const CATEGORY: #category = #category::EMPTY #(.with(#category::#categories))*;
            const NAME: &'static str = #name_str;

            #[allow(unreachable_patterns)]
            fn from_event(event: &#event) -> ::core::option::Option<&Self> {
                match event {
                    #event::#kind(inner) => ::core::option::Option::Some(inner),
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(unreachable_patterns)]
            fn from_event_mut(event: &mut #event) -> ::core::option::Option<&mut Self> {
                match event {
                    #event::#kind(inner) => ::core::option::Option::Some(inner),
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::convert::From<#name> for #event {
            fn from(event: #name) -> Self {
                #event::#kind(event)
            }
        }
    };

    if !custom_display {
        expanded.extend(quote! {
            impl ::core::fmt::Display for #name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(<Self as ::kestrel_core::event::EventType>::NAME)
                }
            }
        });
    }

    Ok(expanded)
}
