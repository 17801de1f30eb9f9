//! Conversion between text and [`Value`] trees, and shortcuts through it.

use alloc::format;
use alloc::string::String;

use serde_json::Value;

use sf_reflect::Reflect;
use sf_reflect::info::Typed;

use crate::error::Error;

/// Parses JSON text into a tree.
#[inline]
pub fn parse(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Renders a tree as compact JSON. Object keys keep their insertion order.
#[inline]
pub fn render(value: &Value) -> String {
    format!("{value}")
}

/// Renders a tree as indented JSON.
#[inline]
pub fn render_pretty(value: &Value) -> String {
    format!("{value:#}")
}

/// Parses `text` and decodes it into a `T` with default options.
///
/// # Examples
///
/// ```
/// use sf_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Object {
///     bytes: Vec<u8>,
///     size: usize,
///     name: String,
/// }
///
/// let object: Object =
///     sf_form::from_str(r#"{"bytes":[2,4,8,16,32],"size":128,"name":"hehe"}"#).unwrap();
/// assert_eq!(object.size, 128);
///
/// assert!(sf_form::from_str::<Object>("{").is_err());
/// ```
pub fn from_str<T: Reflect + Typed + Default>(text: &str) -> Result<T, Error> {
    let value = parse(text)?;
    Ok(crate::decode(&value)?)
}

/// Encodes `value` and renders it as compact JSON.
#[inline]
pub fn to_string<T: Reflect>(value: &T) -> String {
    render(&crate::encode(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn render_keeps_insertion_order() {
        let value = parse(r#"{"size":1,"bytes":[],"name":"x"}"#).unwrap();
        assert_eq!(render(&value), r#"{"size":1,"bytes":[],"name":"x"}"#);
    }

    #[test]
    fn pretty_is_reparsable() {
        let value = json!({ "a": [1, 2], "b": { "c": null } });
        let text = render_pretty(&value);
        assert!(text.contains('\n'));
        assert_eq!(parse(&text).unwrap(), value);
    }

    #[test]
    fn parse_errors_surface() {
        let err = from_str::<u8>("[1,").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));

        let err = from_str::<u8>("true").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
