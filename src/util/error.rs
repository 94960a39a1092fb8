use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A positional index fell outside of the range that the requested operation accepts. Access-type
/// operations accept `[0, len)`, while insertions also accept `len` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Growing a collection would require a capacity that can't be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// An element was requested from the end of a list that contains no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No such element, the collection is empty!")
    }
}

impl Error for NoSuchElement {}

/// An element was popped from a collection that contains no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to remove an element from an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// A required input was missing, or a constructor argument was outside of its valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum InvalidArgument {
    /// A single element was `None`.
    NullElement,
    /// The whole input sequence was `None`.
    MissingElements,
    /// An explicit capacity of zero was requested.
    ZeroCapacity,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NullElement => write!(f, "Invalid argument: element can't be null!"),
            InvalidArgument::MissingElements => {
                write!(f, "Invalid argument: element sequence can't be null!")
            },
            InvalidArgument::ZeroCapacity => {
                write!(f, "Invalid argument: capacity must be greater than 0!")
            },
        }
    }
}

impl Error for InvalidArgument {}

/// Any of the errors produced by this crate's collections, for callers that would rather
/// propagate a single type with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
    NoSuchElement(NoSuchElement),
    EmptyCollection(EmptyCollection),
    InvalidArgument(InvalidArgument),
}
