//! General-purpose collection types.
//!
//! # Purpose
//! These types exist to learn about the data structures themselves, along with the ownership and
//! iteration patterns needed to implement them safely.

#[cfg(feature = "contiguous")]
pub mod contiguous;
