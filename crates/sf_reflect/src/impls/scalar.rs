use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{Scalar, ScalarMut, ScalarRef};
use crate::reflection::impl_reflect_cast_fn;

/// Implements `TypePath`, `Typed`, `Reflect` and `Scalar` for a leaf type.
///
/// `$read` widens `&self` (bound to `$this`) into a [`ScalarRef`].
macro_rules! impl_scalar {
    (
        $ty:ty, $kind:ident,
        path = $path:expr, name = $name:expr, module = $module:expr,
        |$this:ident| $read:expr
    ) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Scalar);
        }

        impl Scalar for $ty {
            #[inline]
            fn scalar_kind(&self) -> ScalarKind {
                ScalarKind::$kind
            }

            #[inline]
            fn scalar_ref(&self) -> ScalarRef<'_> {
                let $this = self;
                $read
            }

            #[inline]
            fn scalar_mut(&mut self) -> ScalarMut<'_> {
                ScalarMut::$kind(self)
            }
        }
    };
    ($ty:ident, $kind:ident, |$this:ident| $read:expr) => {
        impl_scalar!(
            $ty, $kind,
            path = stringify!($ty), name = stringify!($ty), module = None,
            |$this| $read
        );
    };
}

impl_scalar!(bool, Bool, |v| ScalarRef::Bool(*v));

impl_scalar!(i8, I8, |v| ScalarRef::Signed(i64::from(*v)));
impl_scalar!(i16, I16, |v| ScalarRef::Signed(i64::from(*v)));
impl_scalar!(i32, I32, |v| ScalarRef::Signed(i64::from(*v)));
impl_scalar!(i64, I64, |v| ScalarRef::Signed(*v));
impl_scalar!(isize, Isize, |v| ScalarRef::Signed(*v as i64));

impl_scalar!(u8, U8, |v| ScalarRef::Unsigned(u64::from(*v)));
impl_scalar!(u16, U16, |v| ScalarRef::Unsigned(u64::from(*v)));
impl_scalar!(u32, U32, |v| ScalarRef::Unsigned(u64::from(*v)));
impl_scalar!(u64, U64, |v| ScalarRef::Unsigned(*v));
impl_scalar!(usize, Usize, |v| ScalarRef::Unsigned(*v as u64));

impl_scalar!(f32, F32, |v| ScalarRef::Float(f64::from(*v)));
impl_scalar!(f64, F64, |v| ScalarRef::Float(*v));

impl_scalar!(
    String, String,
    path = "alloc::string::String", name = "String", module = Some("alloc::string"),
    |v| ScalarRef::Str(v.as_str())
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, TypePath, Typed};
    use crate::ops::{ReflectMut, ScalarMut, ScalarRef};
    use alloc::string::String;

    #[test]
    fn type_paths() {
        assert_eq!(u8::type_path(), "u8");
        assert_eq!(u8::module_path(), None);
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_ident(), "String");
    }

    #[test]
    fn kinds_match_info() {
        let info = <isize as Typed>::type_info().as_scalar().unwrap();
        assert_eq!(info.kind(), ScalarKind::Isize);
        assert!(info.kind().is_signed());
        assert!(<f32 as Typed>::type_info().as_scalar().unwrap().kind().is_float());
    }

    #[test]
    fn widened_reads() {
        let value: &dyn Reflect = &-3_i8;
        let scalar = value.reflect_ref().as_scalar().unwrap();
        assert_eq!(scalar.scalar_ref(), ScalarRef::Signed(-3));

        let name = String::from("hehe");
        let scalar = name.reflect_ref().as_scalar().unwrap();
        assert_eq!(scalar.scalar_ref(), ScalarRef::Str("hehe"));
    }

    #[test]
    fn write_through_view() {
        let mut flag = false;
        let ReflectMut::Scalar(scalar) = flag.reflect_mut() else {
            panic!("bool should be a scalar");
        };
        match scalar.scalar_mut() {
            ScalarMut::Bool(slot) => *slot = true,
            _ => panic!("unexpected scalar kind"),
        }
        assert!(flag);
    }
}
