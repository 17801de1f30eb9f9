use serde_json::Value;

use sf_reflect::Reflect;

use crate::error::{DecodeError, FieldPath};

/// Custom decoding for selected targets.
///
/// [`DecodeDriver`](crate::DecodeDriver) asks the processor first at every
/// node, the root included:
///
/// - **`Some(Ok(()))`**: the processor wrote `target` itself.
/// - **`Some(Err(error))`**: the processor claims the node but the data is
///   invalid. Decoding stops with `error`.
/// - **`None`**: the node is decoded by the built-in rules.
///
/// `()` declines everything.
///
/// A processor is also the extension point for shapes the built-in rules do
/// not cover, and it sees every node in visiting order, which makes it
/// useful for tracing a decode.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use sf_form::{DecodeDriver, DecodeError, DecodeOptions, DecodeProcessor, FieldPath};
/// use sf_reflect::{Reflect, derive::Reflect};
///
/// /// Accepts `"yes"` / `"no"` for every `bool`.
/// struct YesNo;
///
/// impl DecodeProcessor for YesNo {
///     fn try_decode(
///         &mut self,
///         target: &mut dyn Reflect,
///         value: &Value,
///         path: &FieldPath,
///     ) -> Option<Result<(), DecodeError>> {
///         let flag = target.downcast_mut::<bool>()?;
///         let text = value.as_str()?;
///         *flag = match text {
///             "yes" => true,
///             "no" => false,
///             other => {
///                 let message = format!("bad flag `{other}`");
///                 return Some(Err(DecodeError::custom(message, path.clone())));
///             }
///         };
///         Some(Ok(()))
///     }
/// }
///
/// #[derive(Reflect, Default)]
/// struct Settings {
///     verbose: bool,
///     quiet: bool,
/// }
///
/// let options = DecodeOptions::default();
/// let mut processor = YesNo;
/// let mut driver = DecodeDriver::with_processor(&options, &mut processor);
///
/// let settings: Settings = driver.decode(&json!({ "verbose": "yes", "quiet": false })).unwrap();
/// assert!(settings.verbose);
/// assert!(!settings.quiet);
/// ```
pub trait DecodeProcessor {
    fn try_decode(
        &mut self,
        target: &mut dyn Reflect,
        value: &Value,
        path: &FieldPath,
    ) -> Option<Result<(), DecodeError>>;
}

impl DecodeProcessor for () {
    #[inline(always)]
    fn try_decode(
        &mut self,
        _target: &mut dyn Reflect,
        _value: &Value,
        _path: &FieldPath,
    ) -> Option<Result<(), DecodeError>> {
        None
    }
}
