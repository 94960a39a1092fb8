//! Contiguous collection types. Namely [`ArrayList`], a list backed by a single growable buffer.

pub mod array_list;
pub(crate) mod buffer;

#[doc(inline)]
pub use array_list::{ArrayList, DEFAULT_CAP};
