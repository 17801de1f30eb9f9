//! Reflected value to [`Value`](serde_json::Value).

mod driver;
mod processor;
mod scalar;

pub use driver::EncodeDriver;
pub use processor::EncodeProcessor;
