//! A fixed-size, heap-allocated array with checked access, slicing and a handful of reductions.
//!
//! # Purpose
//! [`Array`](collections::contiguous::Array) is a numeric buffer: it is allocated once with a
//! known number of entries, never resized, and hands out elements through bounds-checked accessors
//! or plain slice views. On top of that it can copy an inclusive contiguous range into another
//! Array ([`chunk`](collections::contiguous::Array::chunk)), gather elements by index
//! ([`partial`](collections::contiguous::Array::partial)) and compute the min, max, sum and
//! Euclidean norm of its contents.
//!
//! # Memory
//! The Array manages its own allocation through [`std::alloc`] rather than wrapping a [`Vec`].
//! Uninitialized storage is only ever exposed as [`MaybeUninit`](std::mem::MaybeUninit), so safe
//! code can't read garbage, and every element is dropped exactly once.
//!
//! # Error Handling
//! Fallible operations return a strongly typed
//! [`ArrayError`](collections::contiguous::array::ArrayError), which is either an invalid argument
//! (zero size, empty range, mismatched destination) or an out of range index. Errors are structs
//! that implement [`Error`](std::error::Error), wrapped in enums for static dispatch. The only
//! panics are for capacity overflow and for the usual `arr[i]` slice indexing.
//!
//! # Features
//! - `log` (default): emits `trace` records for allocations and `debug` records for rejected
//!   operations through the [`log`](https://docs.rs/log) facade.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
