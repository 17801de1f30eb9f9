use alloc::string::ToString;

use serde_json::Value;

use super::{DecodeDriver, DecodeProcessor};

use crate::error::DecodeError;
use crate::options::NarrowingPolicy;
use crate::value::ValueKind;

use sf_reflect::Reflect;
use sf_reflect::ops::ScalarMut;

// -----------------------------------------------------------------------------
// Integer narrowing

/// An integer target, reached from the `i128` every source integer widens to.
trait Integer: Sized {
    const NAME: &'static str;

    /// Value-preserving conversion, `None` when out of range.
    fn narrow(wide: i128) -> Option<Self>;

    /// Keeps the low bits.
    fn truncate(wide: i128) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ident),* $(,)?) => {$(
        impl Integer for $ty {
            const NAME: &'static str = stringify!($ty);

            #[inline]
            fn narrow(wide: i128) -> Option<Self> {
                <$ty>::try_from(wide).ok()
            }

            #[inline]
            fn truncate(wide: i128) -> Self {
                wide as $ty
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Scalar rules

impl<P: DecodeProcessor> DecodeDriver<'_, P> {
    /// Boolean, numeric and string-like targets.
    pub(super) fn visit_scalar(&mut self, target: &mut dyn Reflect, value: &Value) -> Result<(), DecodeError> {
        let scalar = target
            .reflect_mut()
            .as_scalar()
            .map_err(|err| self.inconsistent(err))?;

        match scalar.scalar_mut() {
            ScalarMut::Bool(slot) => *slot = self.read_bool(value)?,
            ScalarMut::I8(slot) => *slot = self.read_integer(value)?,
            ScalarMut::I16(slot) => *slot = self.read_integer(value)?,
            ScalarMut::I32(slot) => *slot = self.read_integer(value)?,
            ScalarMut::I64(slot) => *slot = self.read_integer(value)?,
            ScalarMut::Isize(slot) => *slot = self.read_integer(value)?,
            ScalarMut::U8(slot) => *slot = self.read_integer(value)?,
            ScalarMut::U16(slot) => *slot = self.read_integer(value)?,
            ScalarMut::U32(slot) => *slot = self.read_integer(value)?,
            ScalarMut::U64(slot) => *slot = self.read_integer(value)?,
            ScalarMut::Usize(slot) => *slot = self.read_integer(value)?,
            ScalarMut::F32(slot) => *slot = self.read_f32(value)?,
            ScalarMut::F64(slot) => *slot = self.read_float(value)?,
            ScalarMut::String(slot) => {
                let text = self.read_str(value)?;
                slot.clear();
                slot.push_str(text);
            }
        }

        Ok(())
    }

    fn read_bool(&self, value: &Value) -> Result<bool, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::mismatch(ValueKind::Bool, value, self.path()))
    }

    fn read_str<'v>(&self, value: &'v Value) -> Result<&'v str, DecodeError> {
        value
            .as_str()
            .ok_or_else(|| DecodeError::mismatch(ValueKind::String, value, self.path()))
    }

    fn read_integer<T: Integer>(&self, value: &Value) -> Result<T, DecodeError> {
        let wide = match value {
            Value::Number(number) if !number.is_f64() => number
                .as_i64()
                .map(i128::from)
                .or_else(|| number.as_u64().map(i128::from)),
            _ => None,
        }
        .ok_or_else(|| DecodeError::mismatch(ValueKind::Integer, value, self.path()))?;

        match self.options().narrowing() {
            NarrowingPolicy::Reject => T::narrow(wide).ok_or_else(|| {
                DecodeError::NumericNarrowingLoss {
                    value: wide.to_string(),
                    target: T::NAME,
                    path: self.path().clone(),
                }
            }),
            NarrowingPolicy::Truncate => Ok(T::truncate(wide)),
        }
    }

    /// Floats only: an integer `Number` is a mismatch even when it would
    /// convert exactly.
    fn read_float(&self, value: &Value) -> Result<f64, DecodeError> {
        match value {
            Value::Number(number) if number.is_f64() => number.as_f64(),
            _ => None,
        }
        .ok_or_else(|| DecodeError::mismatch(ValueKind::Float, value, self.path()))
    }

    fn read_f32(&self, value: &Value) -> Result<f32, DecodeError> {
        let wide = self.read_float(value)?;
        let in_range = (f64::from(f32::MIN)..=f64::from(f32::MAX)).contains(&wide);

        if !in_range && self.options().narrowing() == NarrowingPolicy::Reject {
            return Err(DecodeError::NumericNarrowingLoss {
                value: wide.to_string(),
                target: "f32",
                path: self.path().clone(),
            });
        }

        Ok(wide as f32)
    }
}
