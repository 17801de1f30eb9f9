use core::fmt;

use crate::Reflect;
use crate::reflection::ReflectDebug;

// -----------------------------------------------------------------------------
// Struct trait

/// Field access for structs with named fields.
///
/// Indices follow declaration order and match
/// [`StructInfo::field_at`](crate::info::StructInfo::field_at).
/// Names are the descriptor names, so a renamed field is found under its new
/// name only.
///
/// Usually implemented with `#[derive(Reflect)]`.
pub trait Struct: Reflect {
    /// Returns the field stored under `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sf_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect, Default)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let foo = Foo { a: 1, b: true };
    /// assert_eq!(foo.field("a").unwrap().downcast_ref::<i32>(), Some(&1));
    /// assert!(foo.field("c").is_none());
    /// ```
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Mutable counterpart of [`field`](Struct::field).
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable counterpart of [`field_at`](Struct::field_at).
    ///
    /// # Examples
    ///
    /// ```
    /// # use sf_reflect::{derive::Reflect, ops::Struct};
    /// #[derive(Reflect, Default)]
    /// struct Foo { a: i32, b: bool }
    ///
    /// let mut foo = Foo { a: 1, b: true };
    /// if let Some(field) = foo.field_at_mut(0) {
    ///     *field.downcast_mut::<i32>().unwrap() = 42;
    /// }
    /// assert_eq!(foo.a, 42);
    /// ```
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    fn field_len(&self) -> usize;

    /// Iterates field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

impl dyn Struct {
    /// Typed access to the field stored under `name`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Typed mutable access to the field stored under `name`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// Iterator over the field values of a [`Struct`].
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.struct_val.field_len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}

/// `Debug` output of a struct, `Name { field: value, .. }`.
pub(crate) fn struct_debug(value: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(value.reflect_type_ident());
    for (index, field) in value.iter_fields().enumerate() {
        debug.field(value.name_at(index).unwrap_or("?"), &ReflectDebug(field));
    }
    debug.finish()
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::Struct;

    #[derive(Reflect, Default)]
    struct Sample {
        id: u32,
        #[reflect(rename = "label")]
        name: String,
        #[reflect(ignore)]
        scratch: Vec<u8>,
        tags: Vec<String>,
    }

    #[derive(Reflect, Default)]
    #[reflect(type_path = "wire::frame::Header")]
    struct Header {
        length: u16,
    }

    #[derive(Reflect, Default)]
    struct Holder<T> {
        inner: T,
    }

    #[test]
    fn descriptors_skip_ignored_fields() {
        let info = Sample::type_info().as_struct().unwrap();
        assert_eq!(info.field_names(), &["id", "label", "tags"]);
        assert_eq!(info.index_of("label"), Some(1));
        assert_eq!(info.index_of("name"), None);
        assert_eq!(info.index_of("scratch"), None);
        assert!(info.field("tags").unwrap().type_is::<Vec<String>>());
    }

    #[test]
    fn access_by_name_and_index_agree() {
        let mut sample = Sample {
            id: 7,
            name: "x".into(),
            scratch: Vec::new(),
            tags: Vec::new(),
        };

        assert_eq!(sample.field_len(), 3);
        assert_eq!(sample.name_at(1), Some("label"));
        assert_eq!(sample.field_at(0).unwrap().downcast_ref::<u32>(), Some(&7));
        assert!(sample.field("name").is_none());

        *sample.field_mut("label").unwrap().downcast_mut::<String>().unwrap() = "y".into();
        assert_eq!(sample.name, "y");

        let collected: Vec<_> = sample.iter_fields().map(|f| f.reflect_kind()).collect();
        assert_eq!(
            collected,
            [ReflectKind::Scalar, ReflectKind::Scalar, ReflectKind::List]
        );
    }

    #[test]
    fn default_type_path() {
        assert_eq!(Sample::type_ident(), "Sample");
        assert_eq!(Sample::type_name(), "Sample");
        assert_eq!(Sample::module_path(), Some(module_path!()));
        assert_eq!(
            Sample::type_path(),
            format!("{}::Sample", module_path!())
        );
    }

    #[test]
    fn custom_type_path() {
        assert_eq!(Header::type_path(), "wire::frame::Header");
        assert_eq!(Header::type_name(), "Header");
        assert_eq!(Header::module_path(), Some("wire::frame"));
    }

    #[test]
    fn generic_type_paths() {
        assert_eq!(Holder::<i32>::type_name(), "Holder<i32>");
        assert_eq!(Holder::<Vec<u8>>::type_name(), "Holder<Vec<u8>>");
        assert_eq!(
            Holder::<Header>::type_path(),
            format!("{}::Holder<wire::frame::Header>", module_path!())
        );
        assert!(core::ptr::eq(
            Holder::<i32>::type_info(),
            Holder::<i32>::type_info()
        ));
        assert!(!core::ptr::eq(
            Holder::<i32>::type_info(),
            Holder::<u8>::type_info()
        ));
    }

    #[test]
    fn debug_output() {
        let sample = Sample {
            id: 1,
            name: "n".into(),
            scratch: Vec::new(),
            tags: Vec::from([String::from("t")]),
        };
        let text = format!("{:?}", sample.as_reflect());
        assert_eq!(text, r#"Sample { id: 1, label: "n", tags: ["t"] }"#);
    }
}
