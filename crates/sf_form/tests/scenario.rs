//! The `Object` round trip through text.

use serde_json::{Value, json};
use sf_form::{decode, encode, parse, render};
use sf_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Object {
    bytes: Vec<u8>,
    size: usize,
    name: String,
}

fn sample() -> Object {
    Object {
        bytes: vec![2, 4, 8, 16, 32],
        size: 128,
        name: "hehe".to_string(),
    }
}

#[test]
fn encode_render_parse() {
    let text = render(&encode(&sample()));
    let value = parse(&text).unwrap();

    let Value::Object(map) = &value else {
        panic!("expected an object, got {value}");
    };
    assert_eq!(map.keys().collect::<Vec<_>>(), ["bytes", "size", "name"]);
    assert_eq!(value["bytes"], json!([2, 4, 8, 16, 32]));
    assert_eq!(value["size"].as_u64(), Some(128));
    assert_eq!(value["name"], json!("hehe"));
}

#[test]
fn rendered_text_is_stable() {
    assert_eq!(
        sf_form::to_string(&sample()),
        r#"{"bytes":[2,4,8,16,32],"size":128,"name":"hehe"}"#
    );
}

#[test]
fn decode_reconstructs_every_field() {
    let value = parse(r#"{"bytes":[2,4,8,16,32],"size":128,"name":"hehe"}"#).unwrap();
    let object: Object = decode(&value).unwrap();
    assert_eq!(object, sample());
}

#[test]
fn key_order_does_not_matter_on_decode() {
    let value = json!({ "name": "hehe", "size": 128, "bytes": [2, 4, 8, 16, 32] });
    assert_eq!(decode::<Object>(&value).unwrap(), sample());
}
