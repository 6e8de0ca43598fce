use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};
use std::slice;

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let result = IntoIter {
            buf: self.ptr,
            size: self.size,
            start: 0,
            end: self.size,
            _phantom: PhantomData,
        };
        // The allocation now belongs to the iterator.
        mem::forget(self);
        result
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned type for owned iteration over an [`Array`]. See [`Array::into_iter`].
///
/// Values in `start..end` are still owned by the iterator, everything else has been moved out.
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized and within the original allocation.
        unsafe {
            slice::from_raw_parts(self.buf.add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end are initialized and haven't been moved out, so each is
        // dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        // Hand the allocation back to an Array of uninitialized values, which deallocates it
        // without dropping anything.
        drop(Array::<MaybeUninit<T>> {
            ptr: self.buf.cast(),
            size: self.size,
            _phantom: PhantomData,
        });
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The value at start is initialized and start is incremented next, so that the
            // value is effectively moved off of the heap.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The value at the newly decremented end is initialized and now outside of
            // start..end, so it won't be read or dropped again.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}
