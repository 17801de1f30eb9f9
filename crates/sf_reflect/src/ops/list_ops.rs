use core::fmt;

use crate::Reflect;
use crate::reflection::ReflectDebug;

// -----------------------------------------------------------------------------
// List trait

/// Access to an ordered, growable sequence.
///
/// Items are appended with [`push_default`](List::push_default), which
/// hands back the new item so it can be filled in place. This is how a
/// decoder populates a list without ever holding a boxed item.
///
/// # Examples
///
/// ```
/// use sf_reflect::ops::List;
///
/// let mut list: Vec<u16> = vec![7];
/// let dynamic: &mut dyn List = &mut list;
///
/// dynamic.clear();
/// *dynamic.push_default().downcast_mut::<u16>().unwrap() = 3;
///
/// assert_eq!(dynamic.len(), 1);
/// assert_eq!(list, [3]);
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable counterpart of [`get`](List::get).
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends a default-constructed item and returns it.
    fn push_default(&mut self) -> &mut dyn Reflect;

    /// Removes every item.
    fn clear(&mut self);

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the items in order.
    fn iter(&self) -> ListItemIter<'_>;
}

impl dyn List {
    /// Typed access to the item at `index`.
    #[inline]
    pub fn get_as<T: Reflect>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(<dyn Reflect>::downcast_ref)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// Iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    #[inline(always)]
    pub const fn new(list: &'a dyn List) -> ListItemIter<'a> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}

pub(crate) fn list_debug(value: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
        .entries(value.iter().map(ReflectDebug))
        .finish()
}
