//! Tree-based collection types. Currently just [`BinarySearchTree`], an unbalanced, recursive
//! binary search tree.

mod binary_search_tree;
mod node;
mod tests;

pub use binary_search_tree::*;
pub(crate) use node::*;
