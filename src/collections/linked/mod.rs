//! Linked collection types. Currently just [`LinkedList`], a singly linked list that tracks both
//! of its ends.

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
