//! Compile-time reflection for plain data types.
//!
//! A reflected type exposes three things to generic code:
//!
//! - a static description ([`TypeInfo`](info::TypeInfo)) obtained through [`Typed`](info::Typed),
//!   naming its shape and, for structs, its ordered field descriptors;
//! - dynamic access to a live value through [`Reflect`], which hands out
//!   [`ReflectRef`](ops::ReflectRef) / [`ReflectMut`](ops::ReflectMut) views;
//! - per-shape operations: [`Struct`](ops::Struct), [`List`](ops::List), [`Scalar`](ops::Scalar).
//!
//! Structs opt in with `#[derive(Reflect)]`; scalars, `String`, `Vec<T>` and
//! `VecDeque<T>` are implemented here.
//!
//! # Examples
//!
//! ```
//! use sf_reflect::{derive::Reflect, info::Typed, ops::Struct};
//!
//! #[derive(Reflect, Default)]
//! struct Object {
//!     bytes: Vec<u8>,
//!     size: usize,
//!     name: String,
//! }
//!
//! let info = Object::type_info().as_struct().unwrap();
//! assert_eq!(info.field_names(), &["bytes", "size", "name"]);
//!
//! let mut object = Object::default();
//! *object.field_mut("size").unwrap().downcast_mut::<usize>().unwrap() = 128;
//! assert_eq!(object.size, 128);
//! ```

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names this crate by its absolute path, which must also
// resolve inside the crate itself (unit tests, doctests).
extern crate self as sf_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use sf_reflect_derive as derive;
