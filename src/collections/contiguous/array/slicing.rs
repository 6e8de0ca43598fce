use super::{Array, ArrayError, EmptyRangeError, SizeMismatchError};
use crate::util::logging::debug;

impl<T: Clone> Array<T> {
    /// Copies the entries from `start` to `end` (both inclusive) into `out`, overwriting its
    /// contents. `out` has to hold exactly `end - start + 1` entries.
    ///
    /// Nothing is written unless every check passes.
    ///
    /// # Errors
    /// - [`IndexOutOfBounds`](super::IndexOutOfBounds) if `start` or `end` isn't a valid index,
    ///   checked in that order.
    /// - [`EmptyRangeError`] if `start >= end`.
    /// - [`SizeMismatchError`] if `out` doesn't have `end - start + 1` entries.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 4, 1, 5].into_iter());
    /// let mut out = Array::create(3).unwrap();
    /// arr.chunk(1, 3, &mut out).unwrap();
    /// assert_eq!(&*out, &[1, 4, 1]);
    /// ```
    pub fn chunk(&self, start: usize, end: usize, out: &mut Array<T>) -> Result<(), ArrayError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;

        if start >= end {
            debug!("rejected chunk with start {} and end {}", start, end);
            return Err(EmptyRangeError { start, end }.into());
        }

        let expected = end - start + 1;
        if out.size() != expected {
            debug!("rejected chunk of {} entries into {}", expected, out.size());
            return Err(SizeMismatchError {
                expected,
                found: out.size(),
            }.into());
        }

        out.clone_from_slice(&self[start..=end]);
        Ok(())
    }

    /// Gathers the entries at each of `indices` into `out`, so that `out[i] == self[indices[i]]`.
    /// Indices may repeat and may come in any order. `out` has to hold exactly as many entries as
    /// `indices`.
    ///
    /// Nothing is written unless every check passes. Empty `indices` (with an empty `out`) do
    /// nothing.
    ///
    /// # Errors
    /// - [`SizeMismatchError`] if `out` and `indices` differ in size.
    /// - [`IndexOutOfBounds`](super::IndexOutOfBounds) for the largest index if it isn't a valid
    ///   index into self.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 4, 1, 5].into_iter());
    /// let indices = Array::from([4, 0, 2].into_iter());
    /// let mut out = Array::create(3).unwrap();
    /// arr.partial(&indices, &mut out).unwrap();
    /// assert_eq!(&*out, &[5, 3, 4]);
    /// ```
    pub fn partial(&self, indices: &Array<usize>, out: &mut Array<T>) -> Result<(), ArrayError> {
        if indices.size() != out.size() {
            debug!("rejected gather of {} indices into {} entries", indices.size(), out.size());
            return Err(SizeMismatchError {
                expected: indices.size(),
                found: out.size(),
            }.into());
        }

        // Every other index is no larger than the maximum, so one check covers them all.
        let Some(max) = indices.maxval() else {
            return Ok(());
        };
        self.check_bounds(max)?;

        for (slot, &index) in out.iter_mut().zip(indices.iter()) {
            slot.clone_from(&self[index]);
        }
        Ok(())
    }
}
