use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, Length, Node, NodePtr, ONE};
use crate::collections::traits::List;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, NoSuchElement};
use crate::util::result::ResultExtension;

/// A list with links in one direction, which also tracks its last node so that appending doesn't
/// require a traversal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `add` | `O(1)` |
/// | `push_front/pop_front` | `O(1)` |
/// | `get/set` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Reads of the last index are `O(1)` as well, because they go straight to the tail.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

/// The head reaches the tail in exactly `len - 1` hops, and the tail has no next node.
pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a LinkedList holding `elements` in order.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> LinkedList<T> {
        let list: LinkedList<T> = elements.into_iter().collect();
        log::debug!("built LinkedList of {} elements", list.len());
        list
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, or an [`Err`] if it is empty.
    pub fn try_first(&self) -> Result<&T, NoSuchElement> {
        match &self.state {
            Empty => Err(NoSuchElement),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn first(&self) -> &T {
        self.try_first().throw()
    }

    /// Returns a reference to the last element in the list, or an [`Err`] if it is empty.
    pub fn try_last(&self) -> Result<&T, NoSuchElement> {
        match &self.state {
            Empty => Err(NoSuchElement),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn last(&self) -> &T {
        self.try_last().throw()
    }

    /// Adds the provided element to the end of the LinkedList.
    pub fn add(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked straight away, so the freed node is never reached.
                let node = unsafe { head.take_node() };

                match (len.checked_sub(1), node.next) {
                    (Some(new_len), Some(new_head)) => {
                        *head = new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Replaces the element at `index`, returning the old element.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`. Valid indices are `0..=len`, where `len`
    /// appends.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.add(value);
        } else {
            // The node before index has to exist, so check that rather than index itself.
            let contents = self
                .checked_contents_for_index_mut(index - 1)
                .map_err(|_| IndexOutOfBounds { index, len })?;
            let prev = contents.seek(index - 1);

            contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

            let node = NodePtr::from_node(Node {
                value,
                next: *prev.next(),
            });
            *prev.next_mut() = Some(node);
        }
        Ok(())
    }

    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Removes the element at `index`, linking its predecessor to its successor.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        if index == 0 {
            return self.pop_front().ok_or(IndexOutOfBounds { index, len: 0 });
        }

        let prev = contents.seek(index - 1);
        // SAFETY: index is less than len, so the node before it has a successor. That successor is
        // unlinked below, before anything else can reach it.
        let node = unsafe { prev.next().unwrap_unchecked().take_node() };

        *prev.next_mut() = node.next;
        if node.next.is_none() {
            contents.tail = prev;
        }
        // SAFETY: index > 0, so the list held at least two elements.
        contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

        Ok(node.value)
    }

    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Drops every node, leaving the list empty.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: match &self.state {
                Empty => None,
                Full(ListContents { head, .. }) => Some(*head),
            },
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    /// Returns true if any element is equal to `item`. With an element type of [`Option`], two
    /// [`None`]s are considered equal.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the list and checks that the tail and length agree with the links.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut hops = 0;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    curr = *next;
                    hops += 1;
                }
                assert!(*tail == curr, "The tail should be the last reachable node.");
                assert_eq!(hops + 1, len.get(), "The length should match the reachable nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Returns the node at `index`, which must be less than `len`.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index == self.last_index() {
            return self.tail;
        }

        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index < len, so there are at least index nodes after the head.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        self.head = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> List<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn add(&mut self, value: T) {
        LinkedList::add(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        LinkedList::try_insert(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        LinkedList::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        LinkedList::try_get_mut(self, index)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        LinkedList::try_set(self, index, value)
    }

    fn try_first(&self) -> Result<&T, NoSuchElement> {
        LinkedList::try_first(self)
    }

    fn try_last(&self) -> Result<&T, NoSuchElement> {
        LinkedList::try_last(self)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        LinkedList::try_remove(self, index)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::contains(self, value)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Each node is reached exactly once, through the link of its predecessor
                // which has already been freed.
                let node = unsafe { ptr.take_node() };
                curr = node.next;
            }
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

// SAFETY: LinkedList owns all of its nodes, none are shared with other lists.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Nodes are only mutated through &mut LinkedList.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Contents<'a, T>(&'a LinkedList<T>);

        impl<T: Debug> Debug for Contents<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("LinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

/// Formats the list as a chain of nodes, e.g. `(1) -> (2) -> (3)`.
impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
