//! Type mismatches and their reported locations.

use serde_json::json;
use sf_form::{DecodeError, ValueKind, decode};
use sf_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug)]
struct Flags {
    enabled: bool,
    bytes: Vec<u8>,
    ratio: f64,
    label: String,
}

fn mismatch(err: &DecodeError) -> (ValueKind, ValueKind, String) {
    match err {
        DecodeError::TypeMismatch {
            expected,
            found,
            path,
        } => (*expected, *found, path.to_string()),
        other => panic!("expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn bool_rejects_string_and_number() {
    let err = decode::<Flags>(&json!({ "enabled": "true" })).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::Bool, ValueKind::String, "enabled".into())
    );

    let err = decode::<Flags>(&json!({ "enabled": 1 })).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::Bool, ValueKind::Integer, "enabled".into())
    );
}

#[test]
fn root_must_be_an_object() {
    let err = decode::<Flags>(&json!([1, 2])).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::Object, ValueKind::Array, "(root)".into())
    );

    let err = decode::<Flags>(&json!(null)).unwrap_err();
    assert_eq!(err.expected(), Some(ValueKind::Object));
}

#[test]
fn element_errors_carry_their_index() {
    let err = decode::<Flags>(&json!({ "bytes": [1, 2, "x", 4] })).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::Integer, ValueKind::String, "bytes[2]".into())
    );
}

#[test]
fn wrapped_scalar_errors_use_index_zero() {
    let err = decode::<Flags>(&json!({ "bytes": true })).unwrap_err();
    assert_eq!(err.path().to_string(), "bytes[0]");
}

#[test]
fn floats_and_integers_do_not_mix() {
    let err = decode::<Flags>(&json!({ "ratio": 1 })).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::Float, ValueKind::Integer, "ratio".into())
    );

    let err = decode::<Flags>(&json!({ "bytes": [1.0] })).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::Integer, ValueKind::Float, "bytes[0]".into())
    );
}

#[test]
fn strings_are_not_coerced() {
    let err = decode::<Flags>(&json!({ "label": 7 })).unwrap_err();
    assert_eq!(err.expected(), Some(ValueKind::String));

    let err = decode::<Flags>(&json!({ "label": null })).unwrap_err();
    assert_eq!(
        mismatch(&err),
        (ValueKind::String, ValueKind::Null, "label".into())
    );
}

#[test]
fn messages_name_the_location() {
    let err = decode::<Flags>(&json!({ "bytes": [0, -1] })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "number -1 does not fit in `u8` at `bytes[1]`"
    );
}
