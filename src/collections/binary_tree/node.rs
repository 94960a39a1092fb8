use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// An owned, possibly empty subtree.
pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Branch<T> {
    pub const fn empty() -> Branch<T> {
        Branch(None)
    }

    /// Links `value` as a new leaf, unless an equal value is already on the path to it.
    pub fn insert(&mut self, value: T) -> bool {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(Node {
                    left: Branch::empty(),
                    right: Branch::empty(),
                    value,
                }));
                true
            },
        }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.contains(value),
                Ordering::Greater => node.right.contains(value),
                Ordering::Equal => true,
            },
            None => false,
        }
    }

    /// The number of nodes on the longest path down from this branch, 0 when it is empty.
    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => 0,
        }
    }

    pub fn in_order<F: FnMut(&T)>(&self, visit: &mut F) {
        if let Some(node) = &self.0 {
            node.left.in_order(visit);
            visit(&node.value);
            node.right.in_order(visit);
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn last(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.right.last() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Renders the tree sideways, with left children above their parent and right children below.
impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => {
                for line in format!("{:?}", node.left).lines() {
                    writeln!(f, "┌    {line}")?;
                }
                writeln!(f, "({:?})", node.value)?;
                let right = format!("{:?}", node.right);
                let mut lines = right.lines().peekable();
                while let Some(line) = lines.next() {
                    write!(f, "└    {line}")?;
                    if lines.peek().is_some() {
                        writeln!(f)?;
                    }
                }
                Ok(())
            },
            None => write!(f, "-"),
        }
    }
}
