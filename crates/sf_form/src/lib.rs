//! Structural conversion between reflected Rust values and JSON-shaped trees.
//!
//! A type described through [`sf_reflect`] is converted to and from a
//! [`serde_json::Value`] by two drivers that dispatch on the type's
//! [`Category`]:
//!
//! - [`EncodeDriver`] walks a live value and builds a tree. It never fails.
//! - [`DecodeDriver`] walks a tree and writes into a value, stopping at the
//!   first [`DecodeError`], which names the failing location as a
//!   [`FieldPath`].
//!
//! Decoding is deliberately lenient in three places:
//!
//! - a struct field whose key is absent keeps its default value;
//! - a non-array node where a sequence is expected decodes as a
//!   one-element sequence;
//! - `null`, `[]` and `{}` all decode to an empty sequence.
//!
//! It is strict everywhere else: no coercion between booleans, numbers and
//! strings, no integer-to-float conversion, and out-of-range integers are
//! rejected unless [`NarrowingPolicy::Truncate`] is selected.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sf_reflect::derive::Reflect;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Inner {
//!     flag: bool,
//! }
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Outer {
//!     inner: Inner,
//!     tags: Vec<String>,
//! }
//!
//! let outer: Outer = sf_form::decode(&json!({ "inner": { "flag": true }, "tags": "solo" })).unwrap();
//! assert!(outer.inner.flag);
//! assert_eq!(outer.tags, ["solo"]);
//!
//! let err = sf_form::decode::<Outer>(&json!({ "inner": { "flag": 1 } })).unwrap_err();
//! assert_eq!(err.path().to_string(), "inner.flag");
//!
//! assert_eq!(sf_form::encode(&outer), json!({ "inner": { "flag": true }, "tags": ["solo"] }));
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cfg;

crate::cfg::debug! {
    mod info_stack;
}

mod decode;
mod encode;

pub mod category;
pub mod error;
pub mod options;
pub mod text;
pub mod value;

// -----------------------------------------------------------------------------
// Exports

pub use category::{Category, NumericKind};
pub use decode::{DecodeDriver, DecodeProcessor};
pub use encode::{EncodeDriver, EncodeProcessor};
pub use error::{DecodeError, Error, FieldPath, PathSegment};
pub use options::{DecodeOptions, NarrowingPolicy};
pub use text::{from_str, parse, render, render_pretty, to_string};
pub use value::ValueKind;

pub use serde_json::Value;

use sf_reflect::Reflect;
use sf_reflect::info::Typed;

// -----------------------------------------------------------------------------
// Entry points

/// Encodes `value` into a tree.
#[inline]
pub fn encode<T: Reflect>(value: &T) -> Value {
    EncodeDriver::new(value).encode()
}

/// Encodes a type-erased value into a tree.
#[inline]
pub fn encode_reflect(value: &dyn Reflect) -> Value {
    EncodeDriver::new(value).encode()
}

/// Decodes a fresh `T` with default [`DecodeOptions`].
///
/// All or nothing: on failure no part of the value is returned.
#[inline]
pub fn decode<T: Reflect + Typed + Default>(value: &Value) -> Result<T, DecodeError> {
    decode_with(value, &DecodeOptions::default())
}

/// Decodes a fresh `T` with the given options.
#[inline]
pub fn decode_with<T: Reflect + Typed + Default>(
    value: &Value,
    options: &DecodeOptions,
) -> Result<T, DecodeError> {
    DecodeDriver::new(options).decode(value)
}

/// Decodes into an existing value.
///
/// Fields absent from `value` keep their current content, which makes this a
/// way to layer partial input over prepared defaults. On failure `target` may
/// be partially written.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sf_form::DecodeOptions;
/// use sf_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Limits {
///     low: u32,
///     high: u32,
/// }
///
/// let mut limits = Limits { low: 1, high: 10 };
/// sf_form::decode_into(&mut limits, &json!({ "high": 20 }), &DecodeOptions::default()).unwrap();
/// assert_eq!((limits.low, limits.high), (1, 20));
/// ```
#[inline]
pub fn decode_into(
    target: &mut dyn Reflect,
    value: &Value,
    options: &DecodeOptions,
) -> Result<(), DecodeError> {
    DecodeDriver::new(options).decode_into(target, value)
}
