pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single stack frame. Each node is owned by the node above it, or by the stack for the top.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
