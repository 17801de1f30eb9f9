//! Data access on reflected values.
//!
//! Each [`ReflectKind`](crate::info::ReflectKind) has a subtrait of
//! [`Reflect`](crate::Reflect) with the operations for that shape:
//!
//! - [`Struct`]: named fields, by name or by declaration index.
//! - [`List`]: indexed items; can be cleared and grown in place.
//! - [`Scalar`]: a leaf value, read through [`ScalarRef`] and written through [`ScalarMut`].
//!
//! [`ReflectRef`] and [`ReflectMut`] select the subtrait of a `dyn Reflect`.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod scalar_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use list_ops::list_debug;
pub(crate) use scalar_ops::scalar_debug;
pub(crate) use struct_ops::struct_debug;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::{List, ListItemIter};
pub use scalar_ops::{Scalar, ScalarMut, ScalarRef};
pub use struct_ops::{Struct, StructFieldIter};
