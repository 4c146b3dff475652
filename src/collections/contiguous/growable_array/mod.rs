//! A module containing [`GrowableArray`] and associated types.
//!
//! Alongside the collection itself, this module provides [`Iter`] and [`IntoIter`] for borrowed
//! and owned iteration, as well as the errors returned by its fallible methods.
//!
//! [`GrowableArray`] is also re-exported under the parent module.

mod error;
mod growable_array;
mod iter;
mod tests;

pub use error::*;
pub use growable_array::*;
pub use iter::*;
