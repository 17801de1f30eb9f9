use core::any::TypeId;
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Static, human readable names for a type.
///
/// Unlike [`core::any::type_name`], the returned strings are part of the
/// type's contract and do not change between compiler versions.
///
/// | method        | `Vec<u8>`               |
/// |---------------|-------------------------|
/// | `type_path`   | `alloc::vec::Vec<u8>`   |
/// | `type_name`   | `Vec<u8>`               |
/// | `type_ident`  | `Vec`                   |
/// | `module_path` | `Some("alloc::vec")`    |
///
/// Implemented by `#[derive(Reflect)]`, which accepts
/// `#[reflect(type_path = "my_crate::Name")]` to override the default
/// `module_path!()` based path.
pub trait TypePath: 'static {
    /// Fully qualified path, including generic arguments.
    fn type_path() -> &'static str;

    /// Path without the module prefix.
    fn type_name() -> &'static str;

    /// Name without module prefix or generic arguments.
    fn type_ident() -> &'static str;

    /// Module the type lives in. `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe counterpart of [`TypePath`].
pub trait DynamicTypePath {
    fn reflect_type_path(&self) -> &'static str;

    fn reflect_type_name(&self) -> &'static str;

    fn reflect_type_ident(&self) -> &'static str;

    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// The [`TypePath`] functions of one type, stored as function pointers.
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }

    /// First segment of [`module_path`](Self::module_path).
    pub fn crate_name(&self) -> Option<&'static str> {
        let module = (self.module_path)()?;
        Some(module.split("::").next().unwrap_or(module))
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] plus the names of the type it identifies.
///
/// Equality and hashing only consider the `TypeId`.
///
/// # Examples
///
/// ```
/// use sf_reflect::info::Type;
///
/// let ty = Type::of::<Vec<u8>>();
/// assert!(ty.is::<Vec<u8>>());
/// assert_eq!(ty.path(), "alloc::vec::Vec<u8>");
/// assert_eq!(ty.ident(), "Vec");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn is<T: TypePath + ?Sized>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    #[inline]
    pub const fn type_path_table(&self) -> &TypePathTable {
        &self.type_path_table
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Implements `ty()` plus the name shortcuts for an info struct holding a `Type`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the [`Type`](crate::info::Type) this information describes.
        #[inline]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }

        #[inline]
        pub fn type_id(&self) -> ::core::any::TypeId {
            self.$field.id()
        }

        #[inline]
        pub fn type_is<T: $crate::info::TypePath>(&self) -> bool {
            self.$field.is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.$field.path()
        }

        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.$field.ident()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};

    struct Local;

    impl TypePath for Local {
        fn type_path() -> &'static str {
            "outer::inner::Local"
        }
        fn type_name() -> &'static str {
            "Local"
        }
        fn type_ident() -> &'static str {
            "Local"
        }
        fn module_path() -> Option<&'static str> {
            Some("outer::inner")
        }
    }

    #[test]
    fn crate_name_is_first_segment() {
        let ty = Type::of::<Local>();
        assert_eq!(ty.type_path_table().crate_name(), Some("outer"));
        assert_eq!(Type::of::<u8>().type_path_table().crate_name(), None);
    }

    #[test]
    fn equality_ignores_names() {
        assert_eq!(Type::of::<Local>(), Type::of::<Local>());
        assert_ne!(Type::of::<Local>(), Type::of::<u8>());
    }
}
