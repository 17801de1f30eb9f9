//! Reflection implementations for built-in types, and the helpers used to
//! write new ones.
//!
//! - [`concat`]: joins string slices, used to build generic type paths.
//! - [`NonGenericTypeInfoCell`]: caches the [`TypeInfo`] of a non-generic type.
//! - [`GenericTypeInfoCell`] / [`GenericTypePathCell`]: the same for generic types,
//!   keyed by `TypeId` because one `static` is shared by every instantiation.
//!
//! ## Implemented
//!
//! - scalars: `bool`, `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`, `String`
//! - lists: `Vec<T>`, `VecDeque<T>` for `T: Reflect + Typed + Default`
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod list;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

/// Concatenates `parts` into one owned string with a single allocation.
///
/// # Examples
///
/// ```
/// assert_eq!(sf_reflect::impls::concat(&["Vec<", "u8", ">"]), "Vec<u8>");
/// ```
#[inline(never)]
pub fn concat(parts: &[&str]) -> ::alloc::string::String {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut res = ::alloc::string::String::with_capacity(len);
    for part in parts {
        res.push_str(part);
    }
    res
}
