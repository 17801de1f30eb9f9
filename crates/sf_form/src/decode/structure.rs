use serde_json::Value;

use super::{DecodeDriver, DecodeProcessor};

use crate::error::{DecodeError, PathSegment};
use crate::value::ValueKind;

use sf_reflect::Reflect;
use sf_reflect::info::StructInfo;

impl<P: DecodeProcessor> DecodeDriver<'_, P> {
    /// The field walker.
    pub(super) fn visit_struct(
        &mut self,
        target: &mut dyn Reflect,
        info: &'static StructInfo,
        value: &Value,
    ) -> Result<(), DecodeError> {
        let Value::Object(map) = value else {
            return Err(DecodeError::mismatch(ValueKind::Object, value, self.path()));
        };

        let target = target
            .reflect_mut()
            .as_struct()
            .map_err(|err| self.inconsistent(err))?;

        for (index, field) in info.iter().enumerate() {
            let name = field.name();

            let Some(item) = map.get(name) else {
                tracing::trace!(
                    ty = info.type_path(),
                    field = name,
                    "field absent from input, keeping its current value"
                );
                continue;
            };

            let Some(slot) = target.field_at_mut(index) else {
                let message = alloc::format!(
                    "`{}` describes field `{name}` at index {index} but exposes no such field",
                    info.type_path()
                );
                return Err(DecodeError::custom(message, self.path().clone()));
            };

            self.visit_child(PathSegment::Field(name), slot, item)?;
        }

        Ok(())
    }
}
