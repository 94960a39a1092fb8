//! Traits shared between collection types. Currently just [`List`], which is implemented by both
//! [`LinkedList`](super::linked::LinkedList) and [`ArrayList`](super::contiguous::ArrayList).

pub mod list;

#[doc(inline)]
pub use list::List;
