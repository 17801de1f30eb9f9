//! [`Value`](serde_json::Value) to reflected value.

mod driver;
mod list;
mod processor;
mod scalar;
mod structure;

pub use driver::DecodeDriver;
pub use processor::DecodeProcessor;
