//! `#[derive(Reflect)]` for structs with named fields.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`, describing every field in declaration order
/// - `Reflect`
/// - `Struct`
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Custom Type Path
///
/// The default path is `module_path!()` followed by the type name. It can be
/// replaced, without generics (they are appended automatically):
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "proto::wire::Header")]
/// struct Header { /* ... */ }
/// ```
///
/// ## Field Attributes
///
/// - `#[reflect(rename = "key")]`: the field is described under `key` instead
///   of its identifier. Keys must be unique within the struct.
/// - `#[reflect(ignore)]`: the field is not described at all. It is invisible
///   to `Struct` and keeps its `Default` value when a decoder fills the struct.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct Object {
///     #[reflect(rename = "payload")]
///     bytes: Vec<u8>,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Generics
///
/// Type parameters receive `Reflect + Typed` bounds, and so do the field types
/// of a generic struct. Lifetime and const parameters are not supported.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let reflect_struct = match derive_data::ReflectStruct::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls = impls::impl_struct(&reflect_struct);

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
