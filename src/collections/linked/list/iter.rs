use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::Link;

/// A borrowed iterator over the elements of a [`LinkedList`](super::LinkedList), front to back.
pub(crate) struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    // Tracked separately so that size_hint is exact without walking the remaining nodes.
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = *node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
