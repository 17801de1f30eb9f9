use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to a type's [`TypeInfo`].
///
/// The returned reference lives in a per-type cache, so repeated calls are
/// cheap and always return the same address.
///
/// Implemented by `#[derive(Reflect)]`. A manual implementation stores the
/// info in one of the cells from [`impls`](crate::impls):
///
/// ```
/// use sf_reflect::impls::NonGenericTypeInfoCell;
/// use sf_reflect::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
///
/// struct Flag(bool);
///
/// impl TypePath for Flag {
///     fn type_path() -> &'static str { "demo::Flag" }
///     fn type_name() -> &'static str { "Flag" }
///     fn type_ident() -> &'static str { "Flag" }
/// }
///
/// impl Typed for Flag {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::Bool)))
///     }
/// }
///
/// assert!(core::ptr::eq(Flag::type_info(), Flag::type_info()));
/// ```
pub trait Typed: TypePath {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Object-safe counterpart of [`Typed`].
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
