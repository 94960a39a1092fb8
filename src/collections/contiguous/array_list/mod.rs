//! A module containing [`ArrayList`], a resizable list stored in one contiguous buffer.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;

pub use array_list::*;
