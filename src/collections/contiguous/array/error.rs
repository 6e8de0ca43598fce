use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A sized constructor was asked for an Array with no entries.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("array size cannot be zero")]
pub struct ZeroSizeError;

/// A range was requested whose start doesn't come before its end.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("start index {start} must be less than end index {end}")]
pub struct EmptyRangeError {
    /// The requested (inclusive) start of the range.
    pub start: usize,
    /// The requested (inclusive) end of the range.
    pub end: usize,
}

/// A destination Array, or a list of indices, has a different number of entries than required.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("expected {expected} entries but found {found}")]
pub struct SizeMismatchError {
    /// The number of entries required by the operation.
    pub expected: usize,
    /// The number of entries that were actually provided.
    pub found: usize,
}

/// An index referred to an entry past the end of an Array.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for array with {len} entries")]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The number of entries in the indexed Array.
    pub len: usize,
}

/// The arguments of an operation were rejected before anything was read or written.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// See [`ZeroSizeError`].
    ZeroSize(ZeroSizeError),
    /// See [`EmptyRangeError`].
    EmptyRange(EmptyRangeError),
    /// See [`SizeMismatchError`].
    SizeMismatch(SizeMismatchError),
}

/// The error type of all fallible [`Array`](super::Array) operations.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// See [`InvalidArgument`].
    InvalidArgument(InvalidArgument),
    /// See [`IndexOutOfBounds`].
    OutOfRange(IndexOutOfBounds),
}

impl From<ZeroSizeError> for ArrayError {
    fn from(value: ZeroSizeError) -> Self {
        ArrayError::InvalidArgument(value.into())
    }
}

impl From<EmptyRangeError> for ArrayError {
    fn from(value: EmptyRangeError) -> Self {
        ArrayError::InvalidArgument(value.into())
    }
}

impl From<SizeMismatchError> for ArrayError {
    fn from(value: SizeMismatchError) -> Self {
        ArrayError::InvalidArgument(value.into())
    }
}
