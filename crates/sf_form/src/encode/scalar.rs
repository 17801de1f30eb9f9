use alloc::borrow::ToOwned;

use serde_json::{Number, Value};

use sf_reflect::ops::ScalarRef;

/// Encodes a scalar through its widest view, so no precision is lost
/// whatever the native width.
pub(super) fn encode_scalar(scalar: ScalarRef<'_>, type_path: &'static str) -> Value {
    match scalar {
        ScalarRef::Bool(value) => Value::Bool(value),
        ScalarRef::Signed(value) => Value::Number(Number::from(value)),
        ScalarRef::Unsigned(value) => Value::Number(Number::from(value)),
        ScalarRef::Float(value) => match Number::from_f64(value) {
            Some(number) => Value::Number(number),
            None => {
                tracing::warn!(
                    value = %value,
                    ty = type_path,
                    "non-finite float has no tree representation, encoding null"
                );
                Value::Null
            }
        },
        ScalarRef::Str(value) => Value::String(value.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_keep_their_sign() {
        assert_eq!(encode_scalar(ScalarRef::Signed(-5), "i8"), json!(-5));
        let unsigned = encode_scalar(ScalarRef::Unsigned(u64::MAX), "u64");
        assert_eq!(unsigned.as_u64(), Some(u64::MAX));
    }

    #[test]
    fn floats_stay_floats() {
        let value = encode_scalar(ScalarRef::Float(2.0), "f64");
        assert!(value.is_f64());
        assert_eq!(value.as_f64(), Some(2.0));
    }

    #[test]
    fn non_finite_is_null() {
        assert_eq!(encode_scalar(ScalarRef::Float(f64::NAN), "f64"), Value::Null);
        assert_eq!(encode_scalar(ScalarRef::Float(f64::INFINITY), "f32"), Value::Null);
    }

    #[test]
    fn text_and_flags() {
        assert_eq!(encode_scalar(ScalarRef::Str("hehe"), "String"), json!("hehe"));
        assert_eq!(encode_scalar(ScalarRef::Bool(false), "bool"), json!(false));
    }
}
