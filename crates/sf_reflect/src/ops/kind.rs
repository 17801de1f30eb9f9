use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Scalar, Struct};

macro_rules! impl_kind_views {
    ($name:ident, $($mut_:tt)?) => {
        impl<'a> $name<'a> {
            /// Returns the [`ReflectKind`] of the viewed value.
            pub fn kind(&self) -> ReflectKind {
                match self {
                    Self::Struct(_) => ReflectKind::Struct,
                    Self::List(_) => ReflectKind::List,
                    Self::Scalar(_) => ReflectKind::Scalar,
                }
            }

            pub fn as_struct(self) -> Result<&'a $($mut_)? dyn Struct, ReflectKindError> {
                match self {
                    Self::Struct(value) => Ok(value),
                    other => Err(ReflectKindError {
                        expected: ReflectKind::Struct,
                        received: other.kind(),
                    }),
                }
            }

            pub fn as_list(self) -> Result<&'a $($mut_)? dyn List, ReflectKindError> {
                match self {
                    Self::List(value) => Ok(value),
                    other => Err(ReflectKindError {
                        expected: ReflectKind::List,
                        received: other.kind(),
                    }),
                }
            }

            pub fn as_scalar(self) -> Result<&'a $($mut_)? dyn Scalar, ReflectKindError> {
                match self {
                    Self::Scalar(value) => Ok(value),
                    other => Err(ReflectKindError {
                        expected: ReflectKind::Scalar,
                        received: other.kind(),
                    }),
                }
            }
        }
    };
}

/// An immutable view of a reflected value, by kind.
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Scalar(&'a dyn Scalar),
}

/// A mutable view of a reflected value, by kind.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Scalar(&'a mut dyn Scalar),
}

impl_kind_views!(ReflectRef,);
impl_kind_views!(ReflectMut, mut);
