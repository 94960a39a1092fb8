//! Various general-purpose collection types, each built from raw parts rather than on top of
//! [`Vec`] or [`Box<[T]>`](Box).
//!
//! # Contents
//! - [`stack::Stack`], a singly linked last-in first-out stack.
//! - [`linked::LinkedList`], a singly linked list which tracks its tail.
//! - [`contiguous::ArrayList`], a list backed by a single buffer which grows by half again.
//! - [`binary_tree::BinarySearchTree`], a recursive, unbalanced search tree.
//!
//! Both lists implement [`traits::List`], so they can be used interchangeably.
//!
//! # Errors
//! Fallible operations come in pairs: a `try_*` method returning a specific error from [`error`],
//! and a method of the same name without the prefix which panics with that error's message.

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "traits")]
pub mod traits;

pub use crate::util::error;
