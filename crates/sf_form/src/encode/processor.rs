use serde_json::Value;

use sf_reflect::Reflect;

/// Custom encoding for selected values.
///
/// [`EncodeDriver`](crate::EncodeDriver) asks the processor first at every
/// node, the root included:
///
/// - **`Some(value)`**: the processor claims the node and `value` is used as-is.
///   Children of a claimed node are not visited.
/// - **`None`**: the node is encoded by the built-in rules.
///
/// `()` declines everything.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use sf_form::{EncodeDriver, EncodeProcessor};
/// use sf_reflect::{Reflect, derive::Reflect};
///
/// /// Writes every `bool` as `"yes"` / `"no"`.
/// struct YesNo;
///
/// impl EncodeProcessor for YesNo {
///     fn try_encode(&self, value: &dyn Reflect) -> Option<Value> {
///         let flag = value.downcast_ref::<bool>()?;
///         Some(Value::from(if *flag { "yes" } else { "no" }))
///     }
/// }
///
/// #[derive(Reflect, Default)]
/// struct Settings {
///     verbose: bool,
///     level: u8,
/// }
///
/// let settings = Settings { verbose: true, level: 3 };
/// let value = EncodeDriver::with_processor(&settings, &YesNo).encode();
/// assert_eq!(value, json!({ "verbose": "yes", "level": 3 }));
/// ```
pub trait EncodeProcessor {
    fn try_encode(&self, value: &dyn Reflect) -> Option<Value>;
}

impl EncodeProcessor for () {
    #[inline(always)]
    fn try_encode(&self, _value: &dyn Reflect) -> Option<Value> {
        None
    }
}
