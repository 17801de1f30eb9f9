use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::{List, ListItemIter};
use crate::reflection::impl_reflect_cast_fn;

/// Implements `TypePath`, `Typed`, `Reflect` and `List` for a growable
/// sequence `$ty<T>` with `push` / `len` / `get` / `clear` semantics.
macro_rules! impl_list {
    ($ty:ident, module = $module:literal, push = $push:ident) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$module, "::", stringify!($ty), "<", T::type_path(), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + Typed + Default> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed + Default> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);
        }

        impl<T: Reflect + Typed + Default> List for $ty<T> {
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                if index < <$ty<T>>::len(self) {
                    Some(&self[index])
                } else {
                    None
                }
            }

            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                if index < <$ty<T>>::len(self) {
                    Some(&mut self[index])
                } else {
                    None
                }
            }

            fn push_default(&mut self) -> &mut dyn Reflect {
                let index = <$ty<T>>::len(self);
                self.$push(T::default());
                &mut self[index]
            }

            #[inline]
            fn clear(&mut self) {
                <$ty<T>>::clear(self);
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn iter(&self) -> ListItemIter<'_> {
                ListItemIter::new(self)
            }
        }
    };
}

impl_list!(Vec, module = "alloc::vec", push = push);
impl_list!(VecDeque, module = "alloc::collections::vec_deque", push = push_back);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::{ScalarKind, TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn generic_type_paths() {
        assert_eq!(Vec::<u8>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(Vec::<Vec<String>>::type_name(), "Vec<Vec<String>>");
        assert_eq!(
            VecDeque::<i32>::type_path(),
            "alloc::collections::vec_deque::VecDeque<i32>"
        );
    }

    #[test]
    fn infos_are_cached_per_instantiation() {
        let a = <Vec<u8> as Typed>::type_info();
        let b = <Vec<u16> as Typed>::type_info();
        assert!(!core::ptr::eq(a, b));
        assert!(core::ptr::eq(a, <Vec<u8> as Typed>::type_info()));

        let item = a.as_list().unwrap().item_info().as_scalar().unwrap();
        assert_eq!(item.kind(), ScalarKind::U8);
    }

    #[test]
    fn push_default_appends() {
        let mut queue: VecDeque<String> = VecDeque::new();
        let list: &mut dyn List = &mut queue;
        list.push_default()
            .downcast_mut::<String>()
            .unwrap()
            .push_str("tail");

        assert_eq!(list.len(), 1);
        assert_eq!(list.get_as::<String>(0).map(String::as_str), Some("tail"));
    }

    #[test]
    fn iter_in_order() {
        let values = vec![2_u8, 4, 8];
        let list: &dyn List = &values;
        let collected: Vec<u8> = list
            .iter()
            .filter_map(|item| item.downcast_ref::<u8>().copied())
            .collect();
        assert_eq!(collected, values);
    }

    #[test]
    fn get_through_dyn_list() {
        let mut values = vec![1_u16, 2, 3];
        let list: &mut dyn List = &mut values;
        assert_eq!(list.get(2).and_then(|item| item.downcast_ref::<u16>()), Some(&3));
        assert!(list.get(3).is_none());

        *list.get_mut(0).unwrap().downcast_mut::<u16>().unwrap() = 9;
        assert!(list.get_mut(3).is_none());
        assert_eq!(values, [9, 2, 3]);

        let mut queue: VecDeque<String> = VecDeque::from([String::from("a"), String::from("b")]);
        let list: &mut dyn List = &mut queue;
        assert_eq!(list.get_as::<String>(1).map(String::as_str), Some("b"));
        assert!(list.get(2).is_none());

        list.get_mut(1).unwrap().downcast_mut::<String>().unwrap().push('!');
        assert!(list.get_mut(2).is_none());
        assert_eq!(queue, ["a", "b!"]);
    }
}
