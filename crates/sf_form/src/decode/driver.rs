use serde_json::Value;

use super::DecodeProcessor;

use crate::category::Category;
use crate::error::{DecodeError, FieldPath, PathSegment};
use crate::options::DecodeOptions;

use sf_reflect::Reflect;
use sf_reflect::info::{ReflectKindError, Typed};

crate::cfg::debug! {
    use crate::info_stack::TYPE_INFO_STACK;
}

// -----------------------------------------------------------------------------
// DecodeDriver

/// Decoder populating reflected values from a [`Value`] tree.
///
/// # Decoding Rules
///
/// At every node the target type's [`Category`] selects one rule:
///
/// 1. **Processor first**: if a [`DecodeProcessor`] is set and claims the
///    node, its result is used.
/// 2. **Boolean**: requires `Bool`. Numbers are not coerced.
/// 3. **Numeric**: integer targets require an integer `Number`, float targets
///    a floating `Number`. Out-of-range integers follow
///    [`NarrowingPolicy`](crate::NarrowingPolicy).
/// 4. **String-like**: requires `String`.
/// 5. **Sequence**: the target is cleared first. `null`, `[]` and `{}` leave
///    it empty. An `Array` decodes element by element, in order. Any other
///    node decodes as the only element.
/// 6. **Struct**: requires `Object`. Each described field is looked up by
///    name, in declaration order. An absent key leaves the field untouched,
///    unknown keys are ignored.
///
/// The first failure aborts the decode; later fields and elements are not
/// visited.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sf_form::{DecodeDriver, DecodeOptions};
/// use sf_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default, PartialEq, Debug)]
/// struct Object {
///     bytes: Vec<u8>,
///     size: usize,
///     name: String,
/// }
///
/// let input = json!({ "bytes": [2, 4, 8, 16, 32], "size": 128, "name": "hehe" });
///
/// let options = DecodeOptions::default();
/// let object: Object = DecodeDriver::new(&options).decode(&input).unwrap();
///
/// assert_eq!(object.bytes, [2, 4, 8, 16, 32]);
/// assert_eq!(object.size, 128);
/// assert_eq!(object.name, "hehe");
/// ```
pub struct DecodeDriver<'a, P: DecodeProcessor = ()> {
    options: &'a DecodeOptions,
    processor: Option<&'a mut P>,
    path: FieldPath,
    depth: usize,
}

impl<'a> DecodeDriver<'a, ()> {
    /// Creates a decoder with no processor.
    ///
    /// If you want to add custom logic for decoding certain types, use
    /// [`with_processor`](Self::with_processor).
    #[inline]
    pub const fn new(options: &'a DecodeOptions) -> Self {
        Self {
            options,
            processor: None,
            path: FieldPath::root(),
            depth: 0,
        }
    }
}

impl<'a, P: DecodeProcessor> DecodeDriver<'a, P> {
    /// Creates a decoder with a processor.
    #[inline]
    pub const fn with_processor(options: &'a DecodeOptions, processor: &'a mut P) -> Self {
        Self {
            options,
            processor: Some(processor),
            path: FieldPath::root(),
            depth: 0,
        }
    }

    /// Decodes a fresh `T`, starting from `T::default()`.
    ///
    /// Nothing of a failed decode is observable: the partially written value
    /// is dropped.
    pub fn decode<T: Reflect + Typed + Default>(&mut self, value: &Value) -> Result<T, DecodeError> {
        let mut target = T::default();
        self.decode_into(&mut target, value)?;
        Ok(target)
    }

    /// Decodes into an existing value.
    ///
    /// Fields that are absent from `value` keep their current content. On
    /// failure `target` may be partially written.
    pub fn decode_into(&mut self, target: &mut dyn Reflect, value: &Value) -> Result<(), DecodeError> {
        self.path = FieldPath::root();
        self.depth = 0;

        crate::cfg::debug! {
            run { TYPE_INFO_STACK.with_borrow_mut(|stack| stack.clear()); }
        }

        let result = self.visit(target, value);

        if let Err(err) = &result {
            tracing::debug!(path = %err.path(), "decode failed: {err}");
            crate::cfg::debug! {
                run {
                    TYPE_INFO_STACK.with_borrow(|stack| {
                        tracing::debug!(stack = ?stack, "types being decoded at the failure");
                    });
                }
            }
        }

        result
    }

    #[inline]
    pub(super) fn options(&self) -> &DecodeOptions {
        self.options
    }

    #[inline]
    pub(super) fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Reports a target whose reflected kind disagrees with its type info.
    pub(super) fn inconsistent(&self, err: ReflectKindError) -> DecodeError {
        DecodeError::custom(err, self.path.clone())
    }

    /// Decodes one child node, one level deeper under `segment`.
    pub(super) fn visit_child(
        &mut self,
        segment: PathSegment,
        target: &mut dyn Reflect,
        value: &Value,
    ) -> Result<(), DecodeError> {
        self.path.push(segment);
        self.depth += 1;
        let result = self.visit(target, value);
        self.depth -= 1;
        self.path.pop();
        result
    }

    fn visit(&mut self, target: &mut dyn Reflect, value: &Value) -> Result<(), DecodeError> {
        if self.depth > self.options.max_depth() {
            return Err(DecodeError::DepthLimitExceeded {
                limit: self.options.max_depth(),
                path: self.path.clone(),
            });
        }

        if let Some(processor) = self.processor.as_deref_mut()
            && let Some(result) = processor.try_decode(target, value, &self.path)
        {
            return result;
        }

        let info = target.reflect_type_info();

        crate::cfg::debug! {
            run { TYPE_INFO_STACK.with_borrow_mut(|stack| stack.push(info)); }
        }

        let result = match Category::of(info) {
            Category::Boolean | Category::Numeric(_) | Category::StringLike => {
                self.visit_scalar(target, value)
            }
            Category::Sequence(list_info) => self.visit_list(target, list_info, value),
            Category::Struct(struct_info) => self.visit_struct(target, struct_info, value),
        };

        // On failure the stack is kept, so the error context shows the chain
        // of types that led to it. It is reset by the next `decode_into`.
        crate::cfg::debug! {
            run {
                if result.is_ok() {
                    TYPE_INFO_STACK.with_borrow_mut(|stack| stack.pop());
                }
            }
        }

        result
    }
}
