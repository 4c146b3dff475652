//! This crate is a study of a single data structure: a growable array, built the slow and
//! explicit way so that every reallocation is visible.
//!
//! # Purpose
//! This crate is a learning exercise, with no expectation for it to be used in production. The
//! [`GrowableArray`](collections::contiguous::GrowableArray) here deliberately keeps a few
//! unusual behaviors, which are documented on the methods that have them:
//! - [`set`](collections::contiguous::GrowableArray::set) increments the length on every write.
//! - [`remove_at`](collections::contiguous::GrowableArray::remove_at) shrinks the capacity by one.
//! - [`iter`](collections::contiguous::GrowableArray::iter) scans every slot of the backing store
//!   rather than just the logical range.
//!
//! # Method
//! The backing store is a fixed-size block of [`Option`] slots, so occupancy is always explicit
//! and no `unsafe` code is needed. It is replaced wholesale whenever the capacity changes, rather
//! than being reallocated in place.
//!
//! # Error Handling
//! Methods that can fail because of their arguments return strongly typed errors via [`Result`]s,
//! using structs (often ZSTs) that implement [`Error`](std::error::Error) and an enum for static
//! dispatch when several can occur. Capacity overflow isn't worth handling at every call site, so
//! growing methods panic in that case instead. The [`Index`](std::ops::Index) implementations
//! panic with the message of the error their fallible counterpart would have returned.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
