use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};

use super::Branch;
#[doc(inline)]
pub use crate::util::error::InvalidArgument;

/// An unbalanced binary search tree. Every operation descends recursively, so most are `O(depth)`,
/// which degrades to `O(n)` when elements are inserted in order.
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch::empty(),
            len: 0,
        }
    }

    /// Creates a tree by inserting `elements` in order. Duplicates are skipped.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> BinarySearchTree<T> {
        let tree: BinarySearchTree<T> = elements.into_iter().collect();
        log::debug!("built BinarySearchTree of {} elements", tree.len);
        tree
    }

    pub fn try_of<I: IntoIterator<Item = T>>(
        elements: Option<I>,
    ) -> Result<BinarySearchTree<T>, InvalidArgument> {
        elements.map(BinarySearchTree::of).ok_or(InvalidArgument::MissingElements)
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value`, returning false and leaving the tree untouched if an equal element is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::binary_tree::BinarySearchTree;
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.contains(value)
    }

    /// Like [`contains`](BinarySearchTree::contains), but for a queried value which may be absent.
    pub fn try_contains<Q>(&self, value: Option<&Q>) -> Result<bool, InvalidArgument>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Ok(self.contains(value.ok_or(InvalidArgument::NullElement)?))
    }

    /// Returns the number of edges between the root and the deepest leaf. Both an empty tree and
    /// a tree holding only a root have a depth of 0.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::binary_tree::BinarySearchTree;
    /// assert_eq!(BinarySearchTree::<u8>::new().depth(), 0);
    /// assert_eq!(BinarySearchTree::of([1]).depth(), 0);
    /// assert_eq!(BinarySearchTree::of([3, 2, 1]).depth(), 2);
    /// ```
    pub fn depth(&self) -> usize {
        // height counts nodes rather than edges, so the root's own level is excluded.
        match self.root.height() {
            0 => 0,
            nodes => nodes - 1,
        }
    }

    /// Calls `visit` once for every element, in ascending order.
    pub fn in_order_traversal<F: FnMut(&T)>(&self, mut visit: F) {
        self.root.in_order(&mut visit);
    }

    /// Returns the smallest element, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.root.first()
    }

    /// Returns the largest element, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.root.last()
    }

    pub fn clear(&mut self) {
        self.root = Branch::empty();
        self.len = 0;
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &format_args!("\n{:?}\n", self.root))
            .field("len", &self.len)
            .finish()
    }
}
