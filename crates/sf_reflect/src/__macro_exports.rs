//! Items referenced by `#[derive(Reflect)]` output.
//!
//! Generated code must not depend on what the user's crate has in scope,
//! so everything it touches is re-exported from here.

pub mod macro_utils {
    pub use ::alloc::string::String;
    pub use ::core::option::Option;
    pub use ::core::primitive::{str, usize};
}
