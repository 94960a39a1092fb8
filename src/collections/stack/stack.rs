use std::fmt::{self, Debug, Formatter};
use std::iter;

use super::{Link, Node};
#[doc(inline)]
pub use crate::util::error::{EmptyCollection, InvalidArgument};
use crate::util::result::ResultExtension;

/// A last-in first-out stack of singly linked nodes.
///
/// Every operation other than [`clear`](Stack::clear) (and dropping the Stack) is `O(1)`.
pub struct Stack<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> Stack<T> {
    /// Creates a new Stack with no elements.
    pub const fn new() -> Stack<T> {
        Stack {
            head: None,
            len: 0,
        }
    }

    /// Creates a Stack by pushing `elements` in order, so that the last element provided is the
    /// first one popped.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::stack::Stack;
    /// let mut stack = Stack::of([1, 2, 3]);
    /// assert_eq!(stack.pop(), 3);
    /// assert_eq!(stack.pop(), 2);
    /// assert_eq!(stack.pop(), 1);
    /// assert!(stack.is_empty());
    /// ```
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Stack<T> {
        let stack: Stack<T> = elements.into_iter().collect();
        log::debug!("built Stack of {} elements", stack.len);
        stack
    }

    /// Creates a Stack from a sequence which, along with any of its elements, may be absent.
    ///
    /// Construction is all-or-nothing: if the sequence or any element is [`None`], every node
    /// built so far is dropped and an [`Err`] is returned.
    ///
    /// # Examples
    /// ```
    /// # use scratch_collections::collections::stack::{InvalidArgument, Stack};
    /// let stack = Stack::try_of(Some([Some(1), Some(2)])).unwrap();
    /// assert_eq!(stack.len(), 2);
    ///
    /// let err = Stack::try_of(Some([Some(1), None, Some(3)])).unwrap_err();
    /// assert_eq!(err, InvalidArgument::NullElement);
    ///
    /// let err = Stack::<u8>::try_of(None::<[Option<u8>; 0]>).unwrap_err();
    /// assert_eq!(err, InvalidArgument::MissingElements);
    /// ```
    pub fn try_of<I>(elements: Option<I>) -> Result<Stack<T>, InvalidArgument>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut stack = Stack::new();
        for element in elements.ok_or(InvalidArgument::MissingElements)? {
            stack.try_push(element)?;
        }

        log::debug!("built Stack of {} elements", stack.len);
        Ok(stack)
    }

    /// Returns the number of elements in the Stack.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Stack contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Pushes an element which may be absent, rejecting [`None`] without modifying the Stack.
    pub fn try_push(&mut self, element: Option<T>) -> Result<(), InvalidArgument> {
        self.push(element.ok_or(InvalidArgument::NullElement)?);
        Ok(())
    }

    /// Removes the top element and returns it, or returns an [`Err`] if the Stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        let node = self.head.take().ok_or(EmptyCollection)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Removes the top element and returns it.
    ///
    /// # Panics
    /// Panics if the Stack is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        self.try_pop().throw()
    }

    /// Returns a reference to the top element, if there is one.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// Drops every element, one node at a time.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates from the top of the Stack to the bottom.
    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|node| &node.value)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Box would otherwise drop the chain recursively.
        self.clear();
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let mut stack = Stack::new();
        let mut tail = &mut stack.head;

        // Append below the previous node to keep the same order, rather than pushing.
        for value in self.values() {
            let node = tail.insert(Box::new(Node {
                value: value.clone(),
                next: None,
            }));
            tail = &mut node.next;
        }

        stack.len = self.len;
        stack
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
