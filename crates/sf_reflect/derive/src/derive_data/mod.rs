//! Parsed form of a `#[derive(Reflect)]` input.

mod attributes;
mod reflect_meta;
mod reflect_struct;

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::ReflectStruct;
