use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// Nodes are allocated through Box, so that taking a node back out of the heap moves its value
// without any manual reads.

/// A non-owning pointer to a heap allocated [`Node`]. Ownership of every node belongs to the list
/// that links it, which frees them in order when dropped.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(pub NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Deallocates the node, returning its contents.
    ///
    /// # Safety
    /// The pointer must be live, and neither it nor any copy of it can be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer originates from Box::leak in from_node, the caller guarantees it
        // hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Every NodePtr held by a list points to a live node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: Every NodePtr held by a list points to a live node, and the list only hands out
        // one borrow at a time through &mut self.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: Every NodePtr held by a list points to a live node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As above, links are only rewritten while the list is mutably borrowed.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
