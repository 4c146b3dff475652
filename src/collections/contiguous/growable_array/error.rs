use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};

/// A [`GrowableArray`](super::GrowableArray) was requested with an initial capacity of zero.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Initial capacity must be greater than zero!")]
pub struct InvalidCapacity;

/// No element equal to the requested one was found.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No matching element found!")]
pub struct NotFound;

/// The slot at `index` is within the logical range but holds no value.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Slot {index} is empty!")]
pub struct EmptySlot {
    /// The index of the empty slot.
    pub index: usize,
}

/// Any of the recoverable errors produced by a [`GrowableArray`](super::GrowableArray), for use
/// with `?` across several operations.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum GrowableArrayError {
    /// See [`InvalidCapacity`].
    InvalidCapacity(InvalidCapacity),
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`NotFound`].
    NotFound(NotFound),
}
