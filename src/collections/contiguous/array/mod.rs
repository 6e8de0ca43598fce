//! A module containing [`Array`] and associtated types.
//!
//! Besides the Array itself this includes [`IntoIter`] for owned iteration and the error types
//! returned by fallible operations, rooted at [`ArrayError`].
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod error;
mod iter;
mod reduce;
mod slicing;
mod tests;

pub use array::*;
pub use error::*;
pub use iter::*;
