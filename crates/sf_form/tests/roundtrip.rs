//! `decode(encode(v)) == v` for every category.

use std::collections::VecDeque;

use sf_form::{decode, encode};
use sf_reflect::Reflect;
use sf_reflect::info::Typed;
use sf_reflect::derive::Reflect;

fn round_trip<T>(value: &T) -> T
where
    T: Reflect + Typed + Default,
{
    decode(&encode(value)).unwrap()
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Scalars {
    flag: bool,
    tiny: i8,
    small: i16,
    medium: i32,
    large: i64,
    pointer: isize,
    byte: u8,
    word: u16,
    dword: u32,
    qword: u64,
    size: usize,
    single: f32,
    double: f64,
    text: String,
}

#[test]
fn scalar_extremes() {
    let low = Scalars {
        flag: false,
        tiny: i8::MIN,
        small: i16::MIN,
        medium: i32::MIN,
        large: i64::MIN,
        pointer: isize::MIN,
        byte: u8::MIN,
        word: u16::MIN,
        dword: u32::MIN,
        qword: u64::MIN,
        size: usize::MIN,
        single: f32::MIN,
        double: f64::MIN,
        text: String::new(),
    };
    assert_eq!(round_trip(&low), low);

    let high = Scalars {
        flag: true,
        tiny: i8::MAX,
        small: i16::MAX,
        medium: i32::MAX,
        large: i64::MAX,
        pointer: isize::MAX,
        byte: u8::MAX,
        word: u16::MAX,
        dword: u32::MAX,
        qword: u64::MAX,
        size: usize::MAX,
        single: f32::MAX,
        double: f64::MAX,
        text: "ünïcödé \"quoted\"\n".to_string(),
    };
    assert_eq!(round_trip(&high), high);
}

#[test]
fn fractional_floats() {
    let value = Scalars {
        single: 0.1,
        double: -2.5e-300,
        ..Scalars::default()
    };
    assert_eq!(round_trip(&value), value);
}

#[test]
fn integral_floats_stay_floats() {
    // `1.0` must not turn into the integer `1`, which a float field rejects.
    let value = Scalars {
        single: 1.0,
        double: 0.0,
        ..Scalars::default()
    };
    assert!(encode(&value)["double"].is_f64());
    assert_eq!(round_trip(&value), value);
}

#[test]
fn sequences() {
    let nested: Vec<Vec<u16>> = vec![vec![], vec![1], vec![2, 3]];
    assert_eq!(round_trip(&nested), nested);

    let deque: VecDeque<String> = ["a", "b"].into_iter().map(String::from).collect();
    assert_eq!(round_trip(&deque), deque);

    let empty: Vec<bool> = Vec::new();
    assert_eq!(round_trip(&empty), empty);
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Record {
    id: u32,
    labels: Vec<String>,
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Table {
    name: String,
    rows: Vec<Record>,
}

#[test]
fn sequences_of_structs() {
    let table = Table {
        name: "t".into(),
        rows: vec![
            Record { id: 1, labels: vec!["x".into()] },
            Record { id: 2, labels: vec![] },
        ],
    };
    assert_eq!(round_trip(&table), table);
}
