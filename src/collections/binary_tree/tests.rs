#![cfg(test)]

use std::cell::Cell;

use proptest::prelude::*;

use super::*;
use crate::util::alloc::CountedDrop;

fn collect_in_order<T: Ord + Clone>(tree: &BinarySearchTree<T>) -> Vec<T> {
    let mut visited = vec![];
    tree.in_order_traversal(|value| visited.push(value.clone()));
    visited
}

#[test]
fn test_in_order_traversal() {
    let tree = BinarySearchTree::of([5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.len(), 7);
    assert_eq!(collect_in_order(&tree), [1, 3, 4, 5, 7, 8, 9]);

    let calls = Cell::new(0);
    BinarySearchTree::<u8>::new().in_order_traversal(|_| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0, "An empty tree should never call the visitor.");
}

#[test]
fn test_duplicate_insert() {
    let mut tree = BinarySearchTree::of([10, 5, 15]);
    let depth = tree.depth();

    assert!(!tree.insert(5), "A duplicate insert should be rejected.");
    assert_eq!(tree.len(), 3, "A duplicate insert shouldn't change the size.");
    assert_eq!(tree.depth(), depth, "A duplicate insert shouldn't change the shape.");
    assert!(tree.contains(&5));

    assert!(tree.insert(6));
    assert_eq!(tree.len(), 4);

    let tree = BinarySearchTree::of([2, 1, 2, 1, 3]);
    assert_eq!(tree.len(), 3, "of should skip duplicates rather than failing.");
}

#[test]
fn test_contains() {
    let tree = BinarySearchTree::of(["m", "c", "x", "a"]);
    assert!(tree.contains("a"), "Borrowed forms of the element should be accepted.");
    assert!(tree.contains(&"x"));
    assert!(!tree.contains("b"));

    assert_eq!(tree.try_contains(Some("c")), Ok(true));
    assert_eq!(tree.try_contains(Some("z")), Ok(false));
    assert_eq!(tree.try_contains::<str>(None), Err(InvalidArgument::NullElement));

    assert!(!BinarySearchTree::<u8>::new().contains(&0));
}

#[test]
fn test_depth() {
    assert_eq!(BinarySearchTree::<u8>::new().depth(), 0, "An empty tree has no edges.");
    assert_eq!(BinarySearchTree::of([1]).depth(), 0, "A lone root has no edges.");
    assert_eq!(BinarySearchTree::of([2, 1]).depth(), 1);
    assert_eq!(BinarySearchTree::of([3, 2, 1]).depth(), 2, "A left chain of 3 has 2 edges.");
    assert_eq!(BinarySearchTree::of([1, 2, 3, 4]).depth(), 3);
    assert_eq!(BinarySearchTree::of([5, 3, 8, 1, 4, 7, 9]).depth(), 2);
}

#[test]
fn test_try_of() {
    assert_eq!(
        BinarySearchTree::<u8>::try_of(None::<[u8; 0]>).unwrap_err(),
        InvalidArgument::MissingElements
    );

    let tree = BinarySearchTree::try_of(Some([4, 2, 6])).unwrap();
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_first_last_and_clear() {
    let mut tree = BinarySearchTree::of([50, 20, 80, 10, 90, 60]);
    assert_eq!(tree.first(), Some(&10));
    assert_eq!(tree.last(), Some(&90));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.depth(), 0);
    assert!(tree.insert(1));
}

#[test]
fn test_drop() {
    #[derive(Debug, Clone)]
    struct Keyed(u8, CountedDrop);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let counter = CountedDrop::new();
    let mut tree = BinarySearchTree::new();
    for key in [3, 1, 2, 1] {
        tree.insert(Keyed(key, counter.clone()));
    }
    assert_eq!(counter.drops(), 1, "A rejected duplicate should be dropped straight away.");

    drop(tree);
    assert_eq!(counter.drops(), 4);
}

#[test]
fn test_debug() {
    let tree = BinarySearchTree::of([2, 1, 3]);
    let rendered = format!("{:?}", tree.root);
    assert_eq!(rendered, "┌    ┌    -\n┌    (1)\n┌    └    -\n(2)\n└    ┌    -\n└    (3)\n└    └    -");
}

proptest! {
    #[test]
    fn prop_in_order_is_sorted_and_unique(values in prop::collection::vec(any::<i16>(), 0..128)) {
        let tree = BinarySearchTree::of(values.iter().copied());

        let mut expected = values.clone();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(tree.len(), expected.len());
        prop_assert_eq!(collect_in_order(&tree), expected);
        for value in values.iter() {
            prop_assert!(tree.contains(value));
        }
    }
}
