use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// A value whose shape can be inspected and modified through generic code.
///
/// [`reflect_ref`](Reflect::reflect_ref) and [`reflect_mut`](Reflect::reflect_mut)
/// expose the value as one of the [`ops`](crate::ops) traits, while
/// [`reflect_type_info`](DynamicTyped::reflect_type_info) gives its static
/// description.
///
/// Implement it with `#[derive(Reflect)]`:
///
/// ```
/// use sf_reflect::{Reflect, derive::Reflect, info::ReflectKind};
///
/// #[derive(Reflect, Default)]
/// struct Point { x: f32, y: f32 }
///
/// let point = Point { x: 1.0, y: 2.0 };
/// let value: &dyn Reflect = &point;
///
/// assert_eq!(value.reflect_kind(), ReflectKind::Struct);
/// assert!(value.is::<Point>());
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns the `TypeId` of the concrete type behind a `dyn Reflect`.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn reflect_kind(&self) -> ReflectKind;

    fn reflect_ref(&self) -> ReflectRef<'_>;

    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Formats the value through reflection.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::ops::struct_debug(data, f),
            ReflectRef::List(data) => crate::ops::list_debug(data, f),
            ReflectRef::Scalar(data) => crate::ops::scalar_debug(data, f),
        }
    }
}

impl dyn Reflect {
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

/// `Debug` adapter for a borrowed reflected value of any lifetime.
pub(crate) struct ReflectDebug<'a>(pub &'a dyn Reflect);

impl fmt::Debug for ReflectDebug<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// The kind-dependent part of a [`Reflect`] implementation.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
