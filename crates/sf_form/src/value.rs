//! Classification of [`Value`] nodes.

use core::fmt;

use serde_json::Value;

/// The tag of a [`Value`], with numbers split into integers and floats.
///
/// An integer is any number stored as `i64` or `u64`. A number written with
/// a fraction or exponent is a float even when its value is integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classifies `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use sf_form::value::ValueKind;
    ///
    /// assert_eq!(ValueKind::of(&json!(128)), ValueKind::Integer);
    /// assert_eq!(ValueKind::of(&json!(-1)), ValueKind::Integer);
    /// assert_eq!(ValueKind::of(&json!(1.0)), ValueKind::Float);
    /// assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
    /// ```
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(number) if number.is_f64() => Self::Float,
            Value::Number(_) => Self::Integer,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` for nodes that decode to an empty sequence: `null`, `[]`
/// and `{}`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use sf_form::value::is_empty_equivalent;
///
/// assert!(is_empty_equivalent(&json!(null)));
/// assert!(is_empty_equivalent(&json!([])));
/// assert!(is_empty_equivalent(&json!({})));
/// assert!(!is_empty_equivalent(&json!("")));
/// assert!(!is_empty_equivalent(&json!(0)));
/// ```
pub fn is_empty_equivalent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn large_unsigned_is_integer() {
        assert_eq!(ValueKind::of(&json!(u64::MAX)), ValueKind::Integer);
    }

    #[test]
    fn display_names() {
        assert_eq!(ValueKind::Object.to_string(), "object");
        assert_eq!(ValueKind::Float.to_string(), "float");
    }

    #[test]
    fn non_empty_containers() {
        assert!(!is_empty_equivalent(&json!([null])));
        assert!(!is_empty_equivalent(&json!({ "a": null })));
        assert!(!is_empty_equivalent(&json!(false)));
    }
}
