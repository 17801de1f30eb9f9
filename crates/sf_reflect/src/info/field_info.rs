use core::any::TypeId;

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of one named struct field.
///
/// `name` is the key the field is known by outside of Rust. It defaults to the
/// field identifier and can be changed with `#[reflect(rename = "...")]`.
///
/// # Examples
///
/// ```
/// use sf_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// struct Header {
///     #[reflect(rename = "content-length")]
///     content_length: u64,
/// }
///
/// let field = Header::type_info().as_struct().unwrap().field_at(0).unwrap();
/// assert_eq!(field.name(), "content-length");
/// assert!(field.type_is::<u64>());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // Resolved on first access, so a struct may contain a list of itself.
    type_info: fn() -> &'static TypeInfo,
}

impl NamedField {
    /// Creates a descriptor for a field of type `T` stored under `name`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_info: T::type_info,
        }
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}
