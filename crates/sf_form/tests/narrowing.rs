//! Both narrowing policies.

use serde_json::json;
use sf_form::{DecodeError, DecodeOptions, NarrowingPolicy, decode, decode_with};
use sf_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, PartialEq)]
struct Narrow {
    byte: u8,
    signed: i8,
    single: f32,
}

const TRUNCATE: DecodeOptions = DecodeOptions::new().with_narrowing(NarrowingPolicy::Truncate);

#[test]
fn fitting_values_pass_either_way() {
    let value = json!({ "byte": 255, "signed": -128, "single": 1.5 });
    let expected = Narrow {
        byte: 255,
        signed: -128,
        single: 1.5,
    };
    assert_eq!(decode::<Narrow>(&value).unwrap(), expected);
    assert_eq!(decode_with::<Narrow>(&value, &TRUNCATE).unwrap(), expected);
}

#[test]
fn reject_is_the_default() {
    let err = decode::<Narrow>(&json!({ "byte": 300 })).unwrap_err();
    assert_eq!(
        err,
        DecodeError::NumericNarrowingLoss {
            value: "300".into(),
            target: "u8",
            path: err.path().clone(),
        }
    );
    assert_eq!(err.path().to_string(), "byte");

    let err = decode::<Narrow>(&json!({ "byte": -1 })).unwrap_err();
    assert!(matches!(err, DecodeError::NumericNarrowingLoss { target: "u8", .. }));

    let err = decode::<Narrow>(&json!({ "signed": u64::MAX })).unwrap_err();
    assert!(matches!(err, DecodeError::NumericNarrowingLoss { target: "i8", .. }));
}

#[test]
fn truncate_keeps_low_bits() {
    let value = json!({ "byte": 300, "signed": 200 });
    let narrow: Narrow = decode_with(&value, &TRUNCATE).unwrap();
    assert_eq!(narrow.byte, 44);
    assert_eq!(narrow.signed, -56);

    let narrow: Narrow = decode_with(&json!({ "byte": -1 }), &TRUNCATE).unwrap();
    assert_eq!(narrow.byte, 255);
}

#[test]
fn wide_unsigned_values() {
    let max: u64 = decode(&json!(u64::MAX)).unwrap();
    assert_eq!(max, u64::MAX);

    let err = decode::<i64>(&json!(u64::MAX)).unwrap_err();
    assert!(matches!(err, DecodeError::NumericNarrowingLoss { target: "i64", .. }));
    assert_eq!(decode_with::<i64>(&json!(u64::MAX), &TRUNCATE).unwrap(), -1);
}

#[test]
fn f32_range() {
    let err = decode::<Narrow>(&json!({ "single": 1e300 })).unwrap_err();
    assert!(matches!(err, DecodeError::NumericNarrowingLoss { target: "f32", .. }));

    let narrow: Narrow = decode_with(&json!({ "single": -1e300 }), &TRUNCATE).unwrap();
    assert_eq!(narrow.single, f32::NEG_INFINITY);

    // Precision loss alone is not narrowing.
    let narrow: Narrow = decode(&json!({ "single": 0.1 })).unwrap();
    assert_eq!(narrow.single, 0.1_f32);
}
