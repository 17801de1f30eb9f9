use alloc::vec::Vec;

use serde_json::{Map, Value};

use super::EncodeProcessor;
use super::scalar::encode_scalar;
use crate::Category;

use sf_reflect::Reflect;
use sf_reflect::info::ReflectKindError;
use sf_reflect::ops::{List, Struct};

// -----------------------------------------------------------------------------
// EncodeDriver

/// Encoder for reflected values.
///
/// # Encoding Rules
///
/// At every node:
///
/// 1. **Processor first**: if an [`EncodeProcessor`] is set and returns
///    `Some`, that value is used.
/// 2. **Built-in rules** otherwise, by the [`Category`] of the value:
///     - booleans become `Bool`;
///     - signed integers become a signed `Number`, unsigned integers an
///       unsigned one, both at 64 bits;
///     - floats become a floating `Number` (non-finite floats become `Null`);
///     - strings become `String`;
///     - sequences become an `Array`, one entry per element, in order;
///     - structs become an `Object` with one key per described field, in
///       declaration order. Ignored fields are not written.
///
/// Encoding cannot fail.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sf_form::EncodeDriver;
/// use sf_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Object {
///     bytes: Vec<u8>,
///     size: usize,
///     name: String,
/// }
///
/// let object = Object {
///     bytes: vec![2, 4, 8, 16, 32],
///     size: 128,
///     name: "hehe".into(),
/// };
///
/// let value = EncodeDriver::new(&object).encode();
/// assert_eq!(
///     value,
///     json!({ "bytes": [2, 4, 8, 16, 32], "size": 128, "name": "hehe" }),
/// );
/// ```
pub struct EncodeDriver<'a, P: EncodeProcessor = ()> {
    value: &'a dyn Reflect,
    processor: Option<&'a P>,
}

impl<'a> EncodeDriver<'a, ()> {
    /// Creates an encoder with no processor.
    ///
    /// If you want to add custom logic for encoding certain values, use
    /// [`with_processor`](Self::with_processor).
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self {
            value,
            processor: None,
        }
    }
}

impl<'a, P: EncodeProcessor> EncodeDriver<'a, P> {
    /// Creates an encoder with a processor.
    #[inline]
    pub const fn with_processor(value: &'a dyn Reflect, processor: &'a P) -> Self {
        Self {
            value,
            processor: Some(processor),
        }
    }

    #[inline]
    const fn new_internal(value: &'a dyn Reflect, processor: Option<&'a P>) -> Self {
        Self { value, processor }
    }

    /// Encodes the value.
    pub fn encode(&self) -> Value {
        if let Some(processor) = self.processor
            && let Some(value) = processor.try_encode(self.value)
        {
            return value;
        }

        let reflect_ref = self.value.reflect_ref();
        let encoded = match Category::of(self.value.reflect_type_info()) {
            Category::Boolean | Category::Numeric(_) | Category::StringLike => reflect_ref
                .as_scalar()
                .map(|scalar| encode_scalar(scalar.scalar_ref(), self.value.reflect_type_path())),
            Category::Sequence(_) => reflect_ref.as_list().map(|list| self.encode_list(list)),
            Category::Struct(_) => reflect_ref.as_struct().map(|value| self.encode_struct(value)),
        };

        encoded.unwrap_or_else(|err| self.inconsistent(err))
    }

    /// The type info and the runtime shape disagree, which only a broken
    /// manual `Reflect` impl can cause.
    fn inconsistent(&self, err: ReflectKindError) -> Value {
        tracing::warn!(
            ty = self.value.reflect_type_path(),
            error = %err,
            "type info does not match the reflected value, encoding null"
        );
        Value::Null
    }

    fn encode_list(&self, list: &'a dyn List) -> Value {
        let items = list
            .iter()
            .map(|item| Self::new_internal(item, self.processor).encode())
            .collect::<Vec<_>>();
        Value::Array(items)
    }

    fn encode_struct(&self, struct_value: &'a dyn Struct) -> Value {
        let mut map = Map::with_capacity(struct_value.field_len());
        for (index, field) in struct_value.iter_fields().enumerate() {
            // `iter_fields` and `name_at` walk the same indices.
            let Some(name) = struct_value.name_at(index) else {
                continue;
            };
            map.insert(name.into(), Self::new_internal(field, self.processor).encode());
        }
        Value::Object(map)
    }
}
