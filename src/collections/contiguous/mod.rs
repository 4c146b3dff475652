//! Contiguous collection types. Namely [`GrowableArray`], a collection that varies in size at
//! runtime, and [`BackingStore`], the fixed-size block of slots it is built on.
#![warn(missing_docs)]

pub mod backing_store;
pub mod growable_array;

#[doc(inline)]
pub use backing_store::BackingStore;
#[doc(inline)]
pub use growable_array::GrowableArray;
