use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::buffer::Buffer;
use crate::collections::traits::List;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidArgument, NoSuchElement};
use crate::util::result::ResultExtension;

/// The capacity of an ArrayList created with [`ArrayList::new`].
pub const DEFAULT_CAP: usize = 5;

/// A resizable contiguous list, backed by a single owned buffer.
///
/// The buffer has a capacity that is distinct from the list's length: slots below the length hold
/// elements, slots above it are unused. When an element is added to a full buffer, the capacity
/// grows by a factor of 1.5 (`(cap / 2) * 3`), or by a single slot when that wouldn't grow at all.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get/set` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the buffer is full, `add` reallocates and takes `O(n)`, which amortizes to `O(1)`.
pub struct ArrayList<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with a capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::{ArrayList, DEFAULT_CAP};
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), DEFAULT_CAP);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList {
            buf: Buffer::with_cap(DEFAULT_CAP),
            len: 0,
        }
    }

    /// Creates a new, empty ArrayList with a capacity of exactly `cap`, returning an [`Err`] if
    /// `cap` is zero.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::ArrayList;
    /// # use scratch_collections::collections::error::InvalidArgument;
    /// assert_eq!(ArrayList::<u8>::try_with_cap(8).unwrap().cap(), 8);
    /// assert_eq!(ArrayList::<u8>::try_with_cap(0).unwrap_err(), InvalidArgument::ZeroCapacity);
    /// ```
    pub fn try_with_cap(cap: usize) -> Result<ArrayList<T>, InvalidArgument> {
        if cap == 0 {
            return Err(InvalidArgument::ZeroCapacity);
        }

        Ok(ArrayList {
            buf: Buffer::with_cap(cap),
            len: 0,
        })
    }

    /// Creates a new, empty ArrayList with a capacity of exactly `cap`.
    ///
    /// # Panics
    /// Panics if `cap` is zero, or if the memory layout size exceeds [`isize::MAX`].
    #[track_caller]
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        Self::try_with_cap(cap).throw()
    }

    /// Creates an ArrayList holding `elements` in order, with a capacity of exactly the number of
    /// elements provided.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::ArrayList;
    /// let list = ArrayList::of([1, 2, 3]);
    /// assert_eq!(&*list, &[1, 2, 3]);
    /// assert_eq!(list.cap(), 3);
    /// ```
    pub fn of<I>(elements: I) -> ArrayList<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = elements.into_iter();
        let mut list = ArrayList {
            buf: Buffer::with_cap(iter.len()),
            len: 0,
        };

        for item in iter {
            list.add(item);
        }

        log::debug!("built ArrayList of {} elements", list.len);
        list
    }

    /// Like [`ArrayList::of`], but treats a [`None`] sequence as an invalid argument.
    pub fn try_of<I>(elements: Option<I>) -> Result<ArrayList<T>, InvalidArgument>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        elements.map(ArrayList::of).ok_or(InvalidArgument::MissingElements)
    }

    /// Returns the number of elements in the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the ArrayList can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Appends the provided value to the end of the ArrayList, growing the buffer if it is full.
    ///
    /// # Panics
    /// Panics if the grown capacity can't be represented.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// for i in 0..8 {
    ///     list.add(i);
    /// }
    /// assert_eq!(&*list, &[0, 1, 2, 3, 4, 5, 6, 7]);
    /// // 5 -> 6 -> 9
    /// assert_eq!(list.cap(), 9);
    /// ```
    pub fn add(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: There is at least one free slot at len after growing.
        unsafe { self.buf.write(self.len, value); }
        self.len += 1;
    }

    /// Inserts the provided value before the element at `index`, moving all following elements
    /// one slot to the right. An `index` equal to the length appends.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::of([0, 1, 2]);
    /// list.try_insert(1, 100).unwrap();
    /// list.try_insert(4, 200).unwrap();
    /// assert!(list.try_insert(6, 300).is_err());
    /// assert_eq!(&*list, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap after growing, so the shifted range stays in bounds and all
        // slots from index to len are initialized.
        unsafe {
            self.buf.shift_right(index, self.len - index);
            self.buf.write(index, value);
        }
        self.len += 1;
        Ok(())
    }

    /// # Panics
    /// Panics if `index` is greater than the length of the ArrayList.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_first(&self) -> Result<&T, NoSuchElement> {
        self.as_slice().first().ok_or(NoSuchElement)
    }

    /// # Panics
    /// Panics if the ArrayList is empty.
    #[track_caller]
    pub fn first(&self) -> &T {
        self.try_first().throw()
    }

    pub fn try_last(&self) -> Result<&T, NoSuchElement> {
        self.as_slice().last().ok_or(NoSuchElement)
    }

    /// # Panics
    /// Panics if the ArrayList is empty.
    #[track_caller]
    pub fn last(&self) -> &T {
        self.try_last().throw()
    }

    /// Removes the element at `index`, moving all following elements one slot to the left.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::of([1, 2, 3]);
    /// assert_eq!(list.try_remove(1), Ok(2));
    /// assert_eq!(list.get(1), &3);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. It is overwritten by the shift left
        // after, and everything from index + 1 to len is initialized.
        let value = unsafe {
            let value = self.buf.read(index);
            self.buf.shift_left(index, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Drops all elements and releases the buffer, leaving an ArrayList with capacity 0. The
    /// buffer is allocated again by the next addition.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: All slots below the old len were initialized, len is already 0 so they are never
        // read again.
        unsafe { self.buf.drop_prefix(len); }

        log::trace!("releasing ArrayList buffer of {} slots", self.cap());
        self.buf = Buffer::with_cap(0);
    }

    pub fn as_slice(&self) -> &[T] {
        self
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Calculates the capacity that a full buffer of `cap` slots grows to.
    pub(crate) const fn grown_cap(cap: usize) -> Result<usize, CapacityOverflow> {
        let Some(grown) = (cap / 2).checked_mul(3) else {
            return Err(CapacityOverflow);
        };

        if grown > cap {
            Ok(grown)
        } else {
            // (cap / 2) * 3 doesn't grow capacities of 0, 1 or 3.
            match cap.checked_add(1) {
                Some(grown) => Ok(grown),
                None => Err(CapacityOverflow),
            }
        }
    }

    /// Grows the buffer so that it can take at least one more element.
    ///
    /// # Panics
    /// Panics if the new capacity can't be represented.
    pub(crate) fn grow(&mut self) {
        let new_cap = Self::grown_cap(self.cap()).throw();
        log::trace!("growing ArrayList buffer from {} to {} slots", self.cap(), new_cap);

        // SAFETY: All len slots are initialized and new_cap > cap >= len.
        unsafe { self.buf.realloc(new_cap, self.len); }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns true if any element in the ArrayList is equal to `value`. Unused slots beyond the
    /// length are never inspected.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T> List<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn add(&mut self, value: T) {
        ArrayList::add(self, value)
    }

    fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        ArrayList::try_insert(self, index, value)
    }

    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        ArrayList::try_get(self, index)
    }

    fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        ArrayList::try_get_mut(self, index)
    }

    fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        ArrayList::try_set(self, index, value)
    }

    fn try_first(&self) -> Result<&T, NoSuchElement> {
        ArrayList::try_first(self)
    }

    fn try_last(&self) -> Result<&T, NoSuchElement> {
        ArrayList::try_last(self)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        ArrayList::try_remove(self, index)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayList::contains(self, value)
    }

    fn clear(&mut self) {
        ArrayList::clear(self)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // SAFETY: All values below len are initialized and never used again. The Buffer then
        // deallocates itself without touching the values.
        unsafe { self.buf.drop_prefix(self.len); }
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: All len values are initialized and len <= cap.
        unsafe { self.buf.as_slice(self.len) }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: All len values are initialized and len <= cap.
        unsafe { self.buf.as_mut_slice(self.len) }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = ArrayList {
            buf: Buffer::with_cap(iter.size_hint().0),
            len: 0,
        };

        for item in iter {
            list.add(item);
        }

        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = ArrayList {
            buf: Buffer::with_cap(self.cap()),
            len: 0,
        };

        for value in self.iter() {
            list.add(value.clone());
        }

        list
    }
}

// SAFETY: ArrayList uniquely owns its buffer, so it can be sent between threads when T: Send.
unsafe impl<T: Send> Send for ArrayList<T> {}
// SAFETY: ArrayList's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that ArrayList<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for ArrayList<T> {}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Formats the elements separated by single spaces, e.g. `1 2 3`.
impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
