use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::{Debug, Formatter};
use core::slice::Iter;

use sf_reflect::info::TypeInfo;

std::thread_local! {
    pub(crate) static TYPE_INFO_STACK: RefCell<TypeInfoStack> =
        const { RefCell::new(TypeInfoStack::new()) };
}

/// Helper struct for managing a stack of [`TypeInfo`] instances.
///
/// Tracks the types entered while decoding, so an error can report how it
/// was reached.
#[derive(Default, Clone)]
pub(crate) struct TypeInfoStack {
    stack: Vec<&'static TypeInfo>,
}

impl TypeInfoStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, type_info: &'static TypeInfo) {
        self.stack.push(type_info);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Iterates in push order.
    pub fn iter(&self) -> Iter<'_, &'static TypeInfo> {
        self.stack.iter()
    }
}

impl Debug for TypeInfoStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut iter = self.iter();

        if let Some(first) = iter.next() {
            writeln!(f, "`{}`", first.type_path())?;
        }

        for info in iter {
            writeln!(f, " -> `{}`", info.type_path())?;
        }

        Ok(())
    }
}
