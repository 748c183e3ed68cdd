/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! The wrapper template.
//!
//! The template is a pure function of the request. Its only branch is the
//! body of `sub`.
//!
//! Generated types do not depend on this crate, so their `unmarshal_json`
//! returns `serde_json::Error` rather than [`DecodeError`](crate::DecodeError).

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::ext::IdentExt;

use crate::codegen::error::{GenerateError, Result};
use crate::codegen::request::GenerationRequest;

/// Renders the wrapper described by `request` as unformatted Rust source.
///
/// # Errors
///
/// [`GenerateError::Render`] if the type name or the wrapped type is not a
/// Rust identifier.
pub fn render(request: &GenerationRequest) -> Result<String> {
    let name = parse_ident("name", &request.type_name)?;
    let wrapped = parse_ident("wrapped", &request.wrapped_type)?;
    Ok(wrapper(&name, &wrapped, request.unsigned).to_string())
}

fn parse_ident(field: &'static str, value: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(value).map_err(|source| GenerateError::Render {
        field,
        value: value.to_owned(),
        source,
    })
}

/// `i32` -> `AtomicI32`, `usize` -> `AtomicUsize`.
fn cell_ident(wrapped: &Ident) -> Ident {
    let wrapped = wrapped.unraw().to_string();
    let mut chars = wrapped.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format_ident!("Atomic{}", capitalized)
}

/// The argument `sub` adds: the two's-complement negation of `n`.
fn negation(unsigned: bool) -> TokenStream {
    if unsigned {
        quote!(!(n.wrapping_sub(1)))
    } else {
        quote!(n.wrapping_neg())
    }
}

fn wrapper(name: &Ident, wrapped: &Ident, unsigned: bool) -> TokenStream {
    let cell = cell_ident(wrapped);
    let negated = negation(unsigned);
    let type_doc = format!(" `{name}` is an atomic wrapper around `{wrapped}`.");
    let add_doc = format!(" Atomically adds to the wrapped `{wrapped}` and returns the new value.");
    let sub_doc =
        format!(" Atomically subtracts from the wrapped `{wrapped}` and returns the new value.");
    let inc_doc = format!(" Atomically increments the wrapped `{wrapped}` and returns the new value.");
    let dec_doc = format!(" Atomically decrements the wrapped `{wrapped}` and returns the new value.");
    let swap_doc = format!(" Atomically swaps the wrapped `{wrapped}` and returns the old value.");
    let marshal_doc = format!(" Encodes the wrapped `{wrapped}` into JSON.");
    let unmarshal_doc = format!(" Decodes JSON into the wrapped `{wrapped}`.");

    quote! {
        use std::fmt;
        use std::sync::atomic::{#cell, Ordering};

        use serde::{Deserialize, Deserializer, Serialize, Serializer};

        #[doc = #type_doc]
        #[repr(transparent)]
        pub struct #name {
            v: #cell,
        }

        impl #name {
            /// Creates a new wrapper holding `value`.
            #[inline]
            pub const fn new(value: #wrapped) -> Self {
                Self { v: #cell::new(value) }
            }

            /// Atomically loads the wrapped value.
            #[inline]
            pub fn load(&self) -> #wrapped {
                self.v.load(Ordering::Acquire)
            }

            #[doc = #add_doc]
            #[inline]
            pub fn add(&self, n: #wrapped) -> #wrapped {
                self.v.fetch_add(n, Ordering::AcqRel).wrapping_add(n)
            }

            #[doc = #sub_doc]
            #[inline]
            pub fn sub(&self, n: #wrapped) -> #wrapped {
                self.add(#negated)
            }

            #[doc = #inc_doc]
            #[inline]
            pub fn inc(&self) -> #wrapped {
                self.add(1)
            }

            #[doc = #dec_doc]
            #[inline]
            pub fn dec(&self) -> #wrapped {
                self.sub(1)
            }

            /// Atomic compare-and-swap. Returns whether the swap happened.
            #[inline]
            pub fn cas(&self, old: #wrapped, new: #wrapped) -> bool {
                self.v
                    .compare_exchange(old, new, Ordering::AcqRel, Ordering::Acquire)
                    .is_ok()
            }

            /// Atomically stores the passed value.
            #[inline]
            pub fn store(&self, n: #wrapped) {
                self.v.store(n, Ordering::Release);
            }

            #[doc = #swap_doc]
            #[inline]
            pub fn swap(&self, n: #wrapped) -> #wrapped {
                self.v.swap(n, Ordering::AcqRel)
            }

            #[doc = #marshal_doc]
            pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>> {
                serde_json::to_vec(&self.load())
            }

            #[doc = #unmarshal_doc]
            pub fn unmarshal_json(&self, b: &[u8]) -> serde_json::Result<()> {
                let v: #wrapped = serde_json::from_slice(b)?;
                self.store(v);
                Ok(())
            }
        }

        impl Default for #name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<#wrapped> for #name {
            #[inline]
            fn from(value: #wrapped) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for #name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!(#name))
                    .field("value", &self.load())
                    .finish()
            }
        }

        impl fmt::Display for #name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.load())
            }
        }

        impl Serialize for #name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.load().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for #name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #wrapped::deserialize(deserializer).map(Self::new)
            }
        }
    }
}
