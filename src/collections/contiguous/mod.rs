//! Contiguous collection types. Namely [`Array`], a contiguous collection that is sized once at
//! runtime.
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::Array;
