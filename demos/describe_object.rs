//! Decodes a literal object, prints it, and encodes it back.
//!
//! Run with `RUST_LOG=sf_form=trace` to see the decoder's records.

use std::error::Error;

use sf_core::form::{self, DecodeOptions, NarrowingPolicy};
use sf_core::reflect::derive::Reflect;
use sf_core::reflect::info::Typed;
use tracing_subscriber::EnvFilter;

#[derive(Reflect, Default, Debug)]
struct Object {
    bytes: Vec<u8>,
    size: usize,
    name: String,
}

const INPUT: &str = r#"{"bytes":[2,4,8,16,32],"size":128,"name":"hehe"}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::from_default_env().add_directive("sf_form=debug".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let info = Object::type_info().as_struct()?;
    println!("{} has fields {:?}", info.type_path(), info.field_names());

    let value = form::parse(INPUT)?;
    let object: Object = form::decode(&value)?;
    println!("decoded: {object:?}");

    let encoded = form::encode(&object);
    println!("encoded: {}", form::render(&encoded));
    println!("pretty:\n{}", form::render_pretty(&encoded));

    // Absent keys keep their defaults, a bare number is a one-element list.
    let partial: Object = form::from_str(r#"{"bytes":7}"#)?;
    println!("lenient: {partial:?}");

    // An out-of-range element fails with its location, unless truncation is
    // requested.
    let wide = form::parse(r#"{"bytes":[1,2,300]}"#)?;
    if let Err(err) = form::decode::<Object>(&wide) {
        println!("rejected: {err}");
    }
    let truncate = DecodeOptions::new().with_narrowing(NarrowingPolicy::Truncate);
    let truncated: Object = form::decode_with(&wide, &truncate)?;
    println!("truncated: {:?}", truncated.bytes);

    Ok(())
}
