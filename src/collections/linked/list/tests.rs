#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::traits::List;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_add_tracks_tail() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());

    list.add(1);
    assert_eq!(list.first(), &1);
    assert_eq!(list.last(), &1, "A single node should be both first and last.");

    list.add(2);
    list.add(3);
    assert_eq!(list.first(), &1);
    assert_eq!(list.last(), &3);
    assert_eq!(list.len(), 3);
    list.verify_links();
}

#[test]
fn test_first_and_last_on_empty() {
    let list = LinkedList::<u8>::new();
    assert_eq!(list.try_first(), Err(NoSuchElement));
    assert_eq!(list.try_last(), Err(NoSuchElement));
    assert_panics!({ list.last(); });
}

#[test]
fn test_insert() {
    let mut list = LinkedList::of([1, 3]);

    list.insert(1, 2);
    list.insert(0, 0);
    let len = list.len();
    list.insert(len, 4);
    assert_eq!(list.to_string(), "(0) -> (1) -> (2) -> (3) -> (4)");
    assert_eq!(list.last(), &4, "Inserting at len should move the tail.");
    list.verify_links();

    assert_eq!(
        list.try_insert(6, 5),
        Err(IndexOutOfBounds { index: 6, len: 5 }),
        "Inserting past len should fail."
    );
    assert_eq!(list.len(), 5, "A failed insert shouldn't change the list.");

    let mut empty = LinkedList::new();
    assert_eq!(empty.try_insert(1, 'a'), Err(IndexOutOfBounds { index: 1, len: 0 }));
    empty.insert(0, 'a');
    assert_eq!(empty.first(), empty.last());
    empty.verify_links();
}

#[test]
fn test_get_and_set() {
    let mut list = LinkedList::of(["zero", "one", "two"]);

    assert_eq!(list.get(0), &"zero");
    assert_eq!(list.get(2), &"two");
    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    assert_eq!(list.set(1, "uno"), "one", "set should return the replaced value.");
    assert_eq!(list.get(1), &"uno");
    assert_eq!(list.len(), 3);

    list.set(2, "dos");
    assert_eq!(list.last(), &"dos", "Setting the last index should be visible through last.");

    *list.get_mut(0) = "cero";
    assert_eq!(list.first(), &"cero");
    assert_eq!(list.try_set(3, "tres"), Err(IndexOutOfBounds { index: 3, len: 3 }));
}

#[test]
fn test_remove() {
    let mut list = LinkedList::of([1, 2, 3, 4]);

    assert_eq!(list.remove(3), 4);
    assert_eq!(list.last(), &3, "Removing the last node should move the tail back.");
    list.verify_links();

    list.add(5);
    assert_eq!(list.to_string(), "(1) -> (2) -> (3) -> (5)");

    assert_eq!(list.remove(1), 2);
    assert_eq!(list.to_string(), "(1) -> (3) -> (5)");
    list.verify_links();

    assert_eq!(list.remove(0), 1);
    assert_eq!(list.first(), &3);

    assert_eq!(list.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(list.remove(1), 5);
    assert_eq!(list.remove(0), 3);
    assert!(list.is_empty());
    assert_eq!(list.try_last(), Err(NoSuchElement));
    assert_eq!(list.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    list.add(6);
    assert_eq!(list.first(), &6, "An emptied list should be usable again.");
    assert_eq!(list.last(), &6);
}

#[test]
fn test_contains() {
    let list = LinkedList::of([Some('a'), None, Some('c')]);
    assert!(list.contains(&None), "Two absent values should compare equal.");
    assert!(list.contains(&Some('c')));
    assert!(!list.contains(&Some('b')));
    assert_eq!(list.index_of(&Some('c')), Some(2));
    assert_eq!(list.index_of(&Some('b')), None);
}

#[test]
fn test_push_and_pop_front() {
    let mut list = LinkedList::new();
    list.push_front(2);
    list.push_front(1);
    assert_eq!(list.last(), &2);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new();
    let mut list = LinkedList::of(iter::repeat_with(|| counter.clone()).take(8));

    drop(list.remove(4));
    assert_eq!(counter.drops(), 1);

    list.clear();
    assert_eq!(counter.drops(), 8, "clear should drop every remaining node.");
    assert!(list.is_empty());

    let list = LinkedList::of(iter::repeat_with(|| counter.clone()).take(5));
    drop(list);
    assert_eq!(counter.drops(), 13, "Dropping a list should drop every node exactly once.");
}

#[test]
fn test_long_list_drop() {
    // Dropping node by node shouldn't recurse through the chain.
    let list: LinkedList<u32> = (0..200_000).collect();
    assert_eq!(list.last(), &199_999);
    drop(list);
}

#[test]
fn test_formatting_and_equality() {
    let list = LinkedList::of([1, 2, 3]);
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(LinkedList::<u8>::new().to_string(), "()");

    let cloned = list.clone();
    assert_eq!(list, cloned);
    assert_ne!(list, LinkedList::of([1, 2]));
    assert_ne!(list, LinkedList::of([1, 2, 4]));
}

#[test]
fn test_list_trait_objects() {
    fn exercise(list: &mut dyn List<i32>) {
        list.add(10);
        list.add(30);
        list.insert(1, 20);
        assert_eq!(list.remove(0), 10);
        assert_eq!(list.first(), &20);
        assert_eq!(list.last(), &30);
        assert!(list.contains(&30));
        list.clear();
        assert!(list.is_empty());
    }

    exercise(&mut LinkedList::new());
    #[cfg(feature = "contiguous")]
    exercise(&mut crate::collections::contiguous::ArrayList::new());
}

proptest! {
    #[test]
    fn prop_set_then_get(values in prop::collection::vec(any::<i64>(), 1..64), seed in any::<usize>(), new in any::<i64>()) {
        let mut list = LinkedList::of(values.iter().copied());
        let index = seed % values.len();

        list.set(index, new);
        prop_assert_eq!(list.get(index), &new);
        prop_assert_eq!(list.len(), values.len());
    }

    #[test]
    fn prop_remove_then_insert_restores(values in prop::collection::vec(any::<u8>(), 1..64), seed in any::<usize>()) {
        let mut list = LinkedList::of(values.iter().copied());
        let index = seed % values.len();

        let removed = list.remove(index);
        list.insert(index, removed);
        list.verify_links();
        prop_assert!(list.iter().eq(values.iter()));
    }
}
