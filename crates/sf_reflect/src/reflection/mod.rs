mod reflect;

pub use reflect::Reflect;

pub(crate) use reflect::{ReflectDebug, impl_reflect_cast_fn};
