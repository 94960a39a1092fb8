//! A module containing [`Stack`], a last-in first-out collection built from singly linked nodes.

mod node;
mod stack;
mod tests;

pub(crate) use node::*;
pub use stack::*;
