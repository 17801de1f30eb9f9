//! Small containers shared by the `sf_*` crates.
//!
//! - [`hash`]: deterministic hashers and a [`HashMap`](hash::HashMap) alias over *hashbrown*.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId), used by the
//!   reflection caches of generic types.
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
