use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::ScalarKind;

// -----------------------------------------------------------------------------
// ScalarRef

/// Read view of a scalar, widened to the largest type of its family.
///
/// Signed integers read as `i64`, unsigned as `u64`, floats as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Str(&'a str),
}

// -----------------------------------------------------------------------------
// ScalarMut

/// Write view of a scalar, one variant per [`ScalarKind`].
pub enum ScalarMut<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    String(&'a mut String),
}

impl ScalarMut<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::Isize(_) => ScalarKind::Isize,
            Self::U8(_) => ScalarKind::U8,
            Self::U16(_) => ScalarKind::U16,
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::Usize(_) => ScalarKind::Usize,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::String(_) => ScalarKind::String,
        }
    }
}

// -----------------------------------------------------------------------------
// Scalar trait

/// A leaf value: boolean, number or string.
///
/// # Examples
///
/// ```
/// use sf_reflect::ops::{Scalar, ScalarMut, ScalarRef};
///
/// let mut size: usize = 128;
/// assert_eq!(size.scalar_ref(), ScalarRef::Unsigned(128));
///
/// if let ScalarMut::Usize(slot) = size.scalar_mut() {
///     *slot = 64;
/// }
/// assert_eq!(size, 64);
/// ```
pub trait Scalar: Reflect {
    fn scalar_kind(&self) -> ScalarKind;

    fn scalar_ref(&self) -> ScalarRef<'_>;

    fn scalar_mut(&mut self) -> ScalarMut<'_>;
}

pub(crate) fn scalar_debug(value: &dyn Scalar, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.scalar_ref() {
        ScalarRef::Bool(v) => fmt::Debug::fmt(&v, f),
        ScalarRef::Signed(v) => fmt::Debug::fmt(&v, f),
        ScalarRef::Unsigned(v) => fmt::Debug::fmt(&v, f),
        ScalarRef::Float(v) => fmt::Debug::fmt(&v, f),
        ScalarRef::Str(v) => fmt::Debug::fmt(v, f),
    }
}
