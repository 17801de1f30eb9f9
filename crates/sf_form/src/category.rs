//! Selection of the conversion rule for a type.

use sf_reflect::info::{ListInfo, ScalarKind, StructInfo, TypeInfo, Typed};

use crate::value::ValueKind;

/// Sub-kind of a numeric scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Signed,
    Unsigned,
    Float,
}

/// The conversion rule a type is encoded and decoded with.
///
/// Every reflected type has exactly one category, computed from its static
/// [`TypeInfo`] alone. The candidates are tried in a fixed order and the
/// first match wins:
///
/// 1. [`Boolean`](Category::Boolean)
/// 2. [`Numeric`](Category::Numeric)
/// 3. [`StringLike`](Category::StringLike)
/// 4. [`Sequence`](Category::Sequence)
/// 5. [`Struct`](Category::Struct)
///
/// `TypeInfo` is cached per type, so resolving a category is a couple of
/// pointer reads and needs no memo table of its own.
#[derive(Debug, Clone, Copy)]
pub enum Category {
    Boolean,
    Numeric(NumericKind),
    StringLike,
    Sequence(&'static ListInfo),
    Struct(&'static StructInfo),
}

impl Category {
    /// Resolves the category of the type described by `info`.
    pub fn of(info: &'static TypeInfo) -> Self {
        match info {
            TypeInfo::Scalar(scalar) if scalar.kind() == ScalarKind::Bool => Self::Boolean,
            TypeInfo::Scalar(scalar) if scalar.kind().is_signed() => {
                Self::Numeric(NumericKind::Signed)
            }
            TypeInfo::Scalar(scalar) if scalar.kind().is_unsigned() => {
                Self::Numeric(NumericKind::Unsigned)
            }
            TypeInfo::Scalar(scalar) if scalar.kind().is_float() => {
                Self::Numeric(NumericKind::Float)
            }
            TypeInfo::Scalar(_) => Self::StringLike,
            TypeInfo::List(list) => Self::Sequence(list),
            TypeInfo::Struct(info) => Self::Struct(info),
        }
    }

    /// Static form of [`Category::of`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sf_form::category::{Category, NumericKind};
    ///
    /// assert!(matches!(Category::resolve::<bool>(), Category::Boolean));
    /// assert!(matches!(Category::resolve::<u8>(), Category::Numeric(NumericKind::Unsigned)));
    /// assert!(matches!(Category::resolve::<String>(), Category::StringLike));
    /// assert!(matches!(Category::resolve::<Vec<u8>>(), Category::Sequence(_)));
    /// ```
    #[inline]
    pub fn resolve<T: Typed>() -> Self {
        Self::of(T::type_info())
    }

    /// Category of the elements of a sequence, `None` for other categories.
    pub fn element(&self) -> Option<Category> {
        match self {
            Self::Sequence(list) => Some(Self::of(list.item_info())),
            _ => None,
        }
    }

    /// The value tag this category decodes from.
    pub const fn expected_kind(&self) -> ValueKind {
        match self {
            Self::Boolean => ValueKind::Bool,
            Self::Numeric(NumericKind::Float) => ValueKind::Float,
            Self::Numeric(_) => ValueKind::Integer,
            Self::StringLike => ValueKind::String,
            Self::Sequence(_) => ValueKind::Array,
            Self::Struct(_) => ValueKind::Object,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Numeric(_) => "numeric",
            Self::StringLike => "string-like",
            Self::Sequence(_) => "sequence",
            Self::Struct(_) => "struct",
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec::Vec;

    use sf_reflect::derive::Reflect;

    use super::*;

    #[derive(Reflect, Default)]
    struct Pair {
        left: i32,
        right: Vec<String>,
    }

    #[test]
    fn scalars() {
        assert!(matches!(Category::resolve::<i8>(), Category::Numeric(NumericKind::Signed)));
        assert!(matches!(Category::resolve::<isize>(), Category::Numeric(NumericKind::Signed)));
        assert!(matches!(Category::resolve::<usize>(), Category::Numeric(NumericKind::Unsigned)));
        assert!(matches!(Category::resolve::<f32>(), Category::Numeric(NumericKind::Float)));
        assert!(matches!(Category::resolve::<bool>(), Category::Boolean));
        assert!(matches!(Category::resolve::<String>(), Category::StringLike));
    }

    #[test]
    fn nested_elements() {
        let category = Category::resolve::<Vec<Vec<bool>>>();
        let inner = category.element().and_then(|c| c.element());
        assert!(matches!(inner, Some(Category::Boolean)));
        assert!(Category::resolve::<bool>().element().is_none());

        let deque = Category::resolve::<VecDeque<u16>>();
        assert!(matches!(
            deque.element(),
            Some(Category::Numeric(NumericKind::Unsigned))
        ));
    }

    #[test]
    fn structs() {
        let Category::Struct(info) = Category::resolve::<Pair>() else {
            panic!("expected struct category");
        };
        assert_eq!(info.field_names(), &["left", "right"]);
        assert_eq!(Category::resolve::<Pair>().expected_kind(), ValueKind::Object);
    }

    #[test]
    fn expected_kinds() {
        assert_eq!(Category::resolve::<f64>().expected_kind(), ValueKind::Float);
        assert_eq!(Category::resolve::<u64>().expected_kind(), ValueKind::Integer);
        assert_eq!(Category::resolve::<Vec<u8>>().expected_kind(), ValueKind::Array);
    }
}
