//! Paths of `sf_reflect` items used by generated code.
//!
//! Kept in one place so a reorganisation of `sf_reflect` only touches this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Returns the path through which the deriving crate reaches `sf_reflect`.
///
/// 1. Crates depending on `sf_reflect` get `::sf_reflect`.
/// 2. Crates depending on `sf_core` get `::sf_core::reflect`.
/// 3. Anything else gets `::sf_reflect`.
///
/// This reads the caller's Cargo.toml, so it is resolved once per derive and
/// then passed around.
pub(crate) fn sf_reflect() -> syn::Path {
    sf_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sf_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn macro_utils_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::__macro_exports::macro_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn concat_(sf_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sf_reflect_path::impls::concat
    }
}
