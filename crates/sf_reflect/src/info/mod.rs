//! Compile-time type information.
//!
//! - [`TypePath`]: stable names for a type (`type_path`, `type_name`, `type_ident`, `module_path`).
//! - [`Type`]: a `TypeId` bundled with the type's [`TypePathTable`].
//! - [`TypeInfo`]: the shape of a reflected type, one of:
//!     - [`StructInfo`]: named fields in declaration order, each a [`NamedField`].
//!     - [`ListInfo`]: a growable sequence and its item type.
//!     - [`ScalarInfo`]: a leaf value, classified by [`ScalarKind`].
//! - [`Typed`]: access to a type's `&'static TypeInfo`.
//!
//! Field and item type information is resolved lazily through function
//! pointers, so a type may refer to itself through a list.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod list_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use list_info::ListInfo;
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
