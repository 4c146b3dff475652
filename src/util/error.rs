use derive_more::{Display, Error};

/// An index fell outside of the range a collection accepts for the attempted operation.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The length of the collection at the time of the check.
    pub len: usize,
}

/// Growing a collection would require a capacity that can't be represented by a [`usize`].
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
