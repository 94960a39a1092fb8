use crate::util::error::{IndexOutOfBounds, NoSuchElement};
use crate::util::result::ResultExtension;

/// An ordered sequence of elements addressed by a zero-based logical index.
///
/// Implementors only need to provide the fallible `try_*` methods, the panicking counterparts are
/// derived from them and panic with the message of the returned error.
///
/// Index ranges differ between operation kinds: access-type methods (`get`, `set`, `remove`)
/// accept `[0, len)`, while `insert` also accepts `len`, which is equivalent to [`add`](List::add).
pub trait List<T> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns true if the list contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` to the end of the list.
    fn add(&mut self, value: T);

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds>;

    /// Inserts `value` before the element currently at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds>;

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Replaces the element at `index`, returning the previous value.
    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds>;

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    fn try_first(&self) -> Result<&T, NoSuchElement>;

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    fn first(&self) -> &T {
        self.try_first().throw()
    }

    fn try_last(&self) -> Result<&T, NoSuchElement>;

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    fn last(&self) -> &T {
        self.try_last().throw()
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Removes and returns the element at `index`, closing the gap it leaves.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Returns true if any element in the list is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes all elements, returning the list to its empty state.
    fn clear(&mut self);
}
