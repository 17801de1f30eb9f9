use core::{error, fmt};

use crate::info::{ListInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected type, without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Scalar,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Scalar => f.pad("Scalar"),
        }
    }
}

/// Returned when a [`TypeInfo`] or reflected value is accessed as the wrong kind.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// # Examples
///
/// ```
/// use sf_reflect::info::{ReflectKind, ScalarKind, Typed};
///
/// let info = <Vec<u8> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
///
/// let item = info.as_list().unwrap().item_info();
/// assert_eq!(item.as_scalar().unwrap().kind(), ScalarKind::U8);
/// assert!(info.as_struct().is_err());
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Scalar(ScalarInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the [`", stringify!($info), "`], or an error for other kinds.")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);

    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Scalar(_) => ReflectKind::Scalar,
        }
    }

    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> core::any::TypeId {
        self.ty().id()
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    #[inline]
    pub fn type_ident(&self) -> &'static str {
        self.ty().ident()
    }

    #[inline]
    pub fn type_is<T: crate::info::TypePath>(&self) -> bool {
        self.ty().is::<T>()
    }
}
