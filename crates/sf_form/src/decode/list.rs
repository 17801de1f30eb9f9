use serde_json::Value;

use super::{DecodeDriver, DecodeProcessor};

use crate::error::{DecodeError, PathSegment};
use crate::value::is_empty_equivalent;

use sf_reflect::Reflect;
use sf_reflect::info::ListInfo;

impl<P: DecodeProcessor> DecodeDriver<'_, P> {
    pub(super) fn visit_list(
        &mut self,
        target: &mut dyn Reflect,
        info: &'static ListInfo,
        value: &Value,
    ) -> Result<(), DecodeError> {
        let list = target
            .reflect_mut()
            .as_list()
            .map_err(|err| self.inconsistent(err))?;

        list.clear();

        if is_empty_equivalent(value) {
            return Ok(());
        }

        match value {
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let slot = list.push_default();
                    self.visit_child(PathSegment::Index(index), slot, item)?;
                }
            }
            single => {
                tracing::trace!(
                    ty = info.type_path(),
                    path = %self.path(),
                    "non-array value accepted as a one-element sequence"
                );
                let slot = list.push_default();
                self.visit_child(PathSegment::Index(0), slot, single)?;
            }
        }

        Ok(())
    }
}
