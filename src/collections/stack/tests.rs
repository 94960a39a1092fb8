#![cfg(test)]

use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());

    stack.push('a');
    stack.push('b');
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(&'b'));

    assert_eq!(stack.pop(), 'b');
    assert_eq!(stack.pop(), 'a');
    assert!(stack.is_empty());
    assert_eq!(stack.try_pop(), Err(EmptyCollection));
    assert_panics!({ stack.pop(); });
    assert_eq!(stack.len(), 0, "A failed pop shouldn't change the Stack.");
}

#[test]
fn test_of_matches_pushing_in_order() {
    let mut pushed = Stack::new();
    for i in 1..=4 {
        pushed.push(i);
    }

    assert_eq!(Stack::of([1, 2, 3, 4]), pushed);
    assert_eq!(format!("{pushed:?}"), "[4, 3, 2, 1]", "The last element pushed should be on top.");
}

#[test]
fn test_try_push_rejects_null() {
    let mut stack = Stack::of([1]);
    assert_eq!(stack.try_push(None), Err(InvalidArgument::NullElement));
    assert_eq!(stack.len(), 1, "A rejected push shouldn't change the Stack.");

    stack.try_push(Some(2)).unwrap();
    assert_eq!(stack.peek(), Some(&2));
}

#[test]
fn test_try_of_is_atomic() {
    let counter = CountedDrop::new();
    let elements = [Some(counter.clone()), Some(counter.clone()), None, Some(counter.clone())];

    let result = Stack::try_of(Some(elements));
    assert_eq!(result.unwrap_err(), InvalidArgument::NullElement);
    assert_eq!(
        counter.drops(),
        3,
        "Every element, including those already linked, should be dropped on failure."
    );

    assert_eq!(
        Stack::<u8>::try_of(None::<[Option<u8>; 1]>).unwrap_err(),
        InvalidArgument::MissingElements
    );

    let mut stack = Stack::try_of(Some(vec![Some("x"), Some("y")])).unwrap();
    assert_eq!(stack.pop(), "y");
}

#[test]
fn test_peek_mut_and_clear() {
    let mut stack = Stack::of([1, 2]);
    if let Some(top) = stack.peek_mut() {
        *top = 20;
    }
    assert_eq!(stack.pop(), 20);

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), None);
    stack.push(3);
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let stack = Stack::of(iter::repeat_with(|| counter.clone()).take(6));
    let cloned = stack.clone();

    drop(stack);
    assert_eq!(counter.drops(), 6);
    drop(cloned);
    assert_eq!(counter.drops(), 12, "A clone should own its own copies of every element.");

    // Long chains are released iteratively.
    let stack: Stack<u32> = (0..200_000).collect();
    assert_eq!(stack.peek(), Some(&199_999));
    drop(stack);
}

#[test]
fn test_clone_preserves_order() {
    let stack = Stack::of(["bottom", "middle", "top"]);
    let mut cloned = stack.clone();
    assert_eq!(stack, cloned);
    assert_eq!(cloned.len(), 3);
    assert_eq!(cloned.pop(), "top");
    assert_eq!(cloned.pop(), "middle");
    assert_eq!(cloned.pop(), "bottom");
}

proptest! {
    #[test]
    fn prop_pops_in_reverse_push_order(values in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut stack = Stack::new();
        for value in values.iter() {
            stack.push(*value);
        }

        for value in values.iter().rev() {
            prop_assert_eq!(stack.pop(), *value);
        }
        prop_assert!(stack.is_empty());
    }
}
