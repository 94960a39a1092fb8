//! A small collections library written from scratch: a stack, a linked list, an array list and a
//! binary search tree.
//!
//! # Purpose
//! Each data structure here is written by hand to understand how it works underneath, covering
//! node ownership, raw allocation, growth policies and recursion. Nothing here wraps the
//! equivalent [`std`] type.
//!
//! # Error Handling
//! Every operation which can fail is available in two forms. The `try_*` form returns a
//! strongly typed error, such as [`IndexOutOfBounds`](collections::error::IndexOutOfBounds),
//! while the plain form panics with that error's message. All errors convert into
//! [`CollectionError`](collections::error::CollectionError) for callers which want a single type.
//!
//! Values which the caller might not have (a missing sequence, an absent element) are taken as
//! [`Option`]s by the `try_*` constructors, and rejected with
//! [`InvalidArgument`](collections::error::InvalidArgument).
//!
//! # Features
//! Each collection sits behind a Cargo feature of the same name (`stack`, `linked`,
//! `contiguous`, `binary_tree`) along with `traits` for the shared [`List`](collections::traits::List)
//! interface. `collections-all` enables everything and is on by default.
//!
//! # Logging
//! Bulk construction and buffer growth are reported through the [`log`] facade at `debug` and
//! `trace` level. Nothing is printed unless the consuming binary installs a logger.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
