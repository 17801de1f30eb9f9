//! Nested, generic, renamed and self-referential structs.

use serde_json::json;
use sf_form::{DecodeError, DecodeOptions, decode, decode_with, encode};
use sf_reflect::derive::Reflect;
use sf_reflect::info::Typed;

#[derive(Reflect, Default, Debug, PartialEq)]
struct Inner {
    flag: bool,
    weight: u32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Outer {
    inner: Inner,
    others: Vec<Inner>,
}

#[test]
fn nested_structs_recurse() {
    let value = json!({
        "inner": { "flag": true, "weight": 3 },
        "others": [{ "flag": false, "weight": 1 }, { "weight": 2 }],
    });
    let outer: Outer = decode(&value).unwrap();

    assert_eq!(outer.inner, Inner { flag: true, weight: 3 });
    assert_eq!(outer.others.len(), 2);
    assert_eq!(outer.others[1], Inner { flag: false, weight: 2 });
    assert_eq!(encode(&outer)["others"][1], json!({ "flag": false, "weight": 2 }));
}

#[test]
fn nested_errors_are_dotted() {
    let err = decode::<Outer>(&json!({ "inner": { "flag": 0 } })).unwrap_err();
    assert_eq!(err.path().to_string(), "inner.flag");

    let err = decode::<Outer>(&json!({ "others": [{}, { "weight": "x" }] })).unwrap_err();
    assert_eq!(err.path().to_string(), "others[1].weight");
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Renamed {
    #[reflect(rename = "payload")]
    bytes: Vec<u8>,
    #[reflect(ignore)]
    cache: Vec<u8>,
    size: usize,
}

#[test]
fn renamed_and_ignored_fields() {
    let value = Renamed {
        bytes: vec![1],
        cache: vec![9, 9],
        size: 4,
    };
    assert_eq!(encode(&value), json!({ "payload": [1], "size": 4 }));

    let decoded: Renamed = decode(&json!({ "payload": [2], "bytes": [3], "cache": [4] })).unwrap();
    assert_eq!(decoded.bytes, [2]);
    assert!(decoded.cache.is_empty());
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Tagged<T> {
    tag: String,
    items: Vec<T>,
}

#[test]
fn generic_structs() {
    let value = Tagged {
        tag: "numbers".into(),
        items: vec![1_i64, -2],
    };
    let round: Tagged<i64> = decode(&encode(&value)).unwrap();
    assert_eq!(round, value);

    let names: Tagged<String> = decode(&json!({ "tag": "t", "items": "solo" })).unwrap();
    assert_eq!(names.items, ["solo"]);

    let nested: Tagged<Inner> = decode(&json!({ "items": [{ "flag": true }] })).unwrap();
    assert!(nested.items[0].flag);

    assert_ne!(
        <Tagged<i64> as Typed>::type_info().type_id(),
        <Tagged<String> as Typed>::type_info().type_id()
    );
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Node {
    name: String,
    children: Vec<Node>,
}

fn chain(depth: usize) -> serde_json::Value {
    let mut value = json!({ "name": "leaf" });
    for _ in 0..depth {
        value = json!({ "name": "branch", "children": [value] });
    }
    value
}

#[test]
fn self_referential_trees() {
    let tree: Node = decode(&chain(3)).unwrap();
    assert_eq!(tree.children[0].children[0].children[0].name, "leaf");
    assert_eq!(decode::<Node>(&encode(&tree)).unwrap(), tree);
}

#[test]
fn depth_limit() {
    // Each level of the chain adds a field and an element, and the leaf's
    // `name` sits one level below the leaf.
    let options = DecodeOptions::new().with_max_depth(7);
    assert!(decode_with::<Node>(&chain(3), &options).is_ok());

    let err = decode_with::<Node>(&chain(4), &options).unwrap_err();
    let DecodeError::DepthLimitExceeded { limit, path } = &err else {
        panic!("expected depth error, got {err:?}");
    };
    assert_eq!(*limit, 7);
    assert_eq!(path.to_string(), "children[0].children[0].children[0].children[0]");
}

#[test]
fn default_depth_limit_stops_runaway_input() {
    let err = decode::<Node>(&chain(100)).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::DepthLimitExceeded { limit: 128, .. }
    ));
}
