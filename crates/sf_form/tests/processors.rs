//! Processors, and what they reveal about visiting order.

use serde_json::{Value, json};
use sf_form::{
    DecodeDriver, DecodeError, DecodeOptions, DecodeProcessor, EncodeDriver, EncodeProcessor,
    FieldPath,
};
use sf_reflect::Reflect;
use sf_reflect::derive::Reflect;

/// Declines every node, recording where it was asked.
#[derive(Default)]
struct Recorder {
    visited: Vec<String>,
}

impl DecodeProcessor for Recorder {
    fn try_decode(
        &mut self,
        _target: &mut dyn Reflect,
        _value: &Value,
        path: &FieldPath,
    ) -> Option<Result<(), DecodeError>> {
        self.visited.push(path.to_string());
        None
    }
}

#[derive(Reflect, Default, Debug)]
struct Three {
    first: u8,
    second: bool,
    third: String,
}

#[test]
fn decode_stops_at_the_first_error() {
    let options = DecodeOptions::default();
    let mut recorder = Recorder::default();
    let mut driver = DecodeDriver::with_processor(&options, &mut recorder);

    let value = json!({ "first": 1, "second": "nope", "third": "never" });
    let err = driver.decode::<Three>(&value).unwrap_err();
    assert_eq!(err.path().to_string(), "second");

    assert_eq!(recorder.visited, ["(root)", "first", "second"]);
}

#[test]
fn elements_after_a_failure_are_not_visited() {
    let options = DecodeOptions::default();
    let mut recorder = Recorder::default();
    let mut driver = DecodeDriver::with_processor(&options, &mut recorder);

    let err = driver.decode::<Vec<u8>>(&json!([1, true, 3])).unwrap_err();
    assert_eq!(err.path().to_string(), "[1]");
    assert_eq!(recorder.visited, ["(root)", "[0]", "[1]"]);
}

#[test]
fn driver_is_reusable_after_failure() {
    let options = DecodeOptions::default();
    let mut driver = DecodeDriver::new(&options);

    assert!(driver.decode::<Three>(&json!({ "first": "x" })).is_err());
    let err = driver.decode::<Three>(&json!({ "second": 1 })).unwrap_err();
    assert_eq!(err.path().to_string(), "second");
}

/// Parses hexadecimal strings into `u32` fields.
struct Hex;

impl DecodeProcessor for Hex {
    fn try_decode(
        &mut self,
        target: &mut dyn Reflect,
        value: &Value,
        path: &FieldPath,
    ) -> Option<Result<(), DecodeError>> {
        let slot = target.downcast_mut::<u32>()?;
        let text = value.as_str()?.strip_prefix("0x")?;
        Some(match u32::from_str_radix(text, 16) {
            Ok(parsed) => {
                *slot = parsed;
                Ok(())
            }
            Err(err) => Err(DecodeError::custom(err, path.clone())),
        })
    }
}

impl EncodeProcessor for Hex {
    fn try_encode(&self, value: &dyn Reflect) -> Option<Value> {
        let number = value.downcast_ref::<u32>()?;
        Some(Value::String(format!("0x{number:x}")))
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Colors {
    palette: Vec<u32>,
    count: u8,
}

#[test]
fn processors_claim_selected_nodes() {
    let options = DecodeOptions::default();
    let mut hex = Hex;
    let mut driver = DecodeDriver::with_processor(&options, &mut hex);

    let colors: Colors = driver
        .decode(&json!({ "palette": ["0xff0000", 255], "count": 2 }))
        .unwrap();
    assert_eq!(colors.palette, [0xff0000, 255]);
    assert_eq!(colors.count, 2);

    let value = EncodeDriver::with_processor(&colors, &Hex).encode();
    assert_eq!(value, json!({ "palette": ["0xff0000", "0xff"], "count": 2 }));
}

#[test]
fn processor_errors_abort() {
    let options = DecodeOptions::default();
    let mut hex = Hex;
    let mut driver = DecodeDriver::with_processor(&options, &mut hex);

    let err = driver
        .decode::<Colors>(&json!({ "palette": ["0xzz"] }))
        .unwrap_err();
    let DecodeError::Custom { message, path } = &err else {
        panic!("expected custom error, got {err:?}");
    };
    assert!(message.starts_with("invalid digit"));
    assert_eq!(path.to_string(), "palette[0]");
}
