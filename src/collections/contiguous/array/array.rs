use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use num_traits::Zero;

use super::{ArrayError, IndexOutOfBounds, ZeroSizeError};
use crate::util::logging::{debug, trace};

/// A fixed-size array that is sized once at runtime. Similar to a [`Box<[T]>`](Box<T>), with
/// checked accessors, range and gather copies, and some reductions over numeric contents.
///
/// Every sized constructor ([`Array::with_size`], [`Array::create`], [`Array::filled`]) rejects a
/// size of zero. An empty Array can still be made with [`Array::new`] or from an empty iterator,
/// and every operation on it is well defined.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Array.
/// - `m`: The number of entries being copied.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `size` | `O(1)` |
/// | `create` | `O(n)` |
/// | `chunk` | `O(m)` |
/// | `partial` | `O(m)` |
/// | `maxval`, `minval`, `sum`, `norm` | `O(n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the number of entries in the Array.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of bytes occupied by the entries of the Array, which is always
    /// `size() * size_of::<T>()`.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::<u32>::create(4).unwrap();
    /// assert_eq!(arr.num_bytes(), 16);
    /// ```
    pub const fn num_bytes(&self) -> usize {
        self.size * size_of::<T>()
    }

    /// Creates a new Array with size 0, without allocating.
    ///
    /// Indexing into this Array always fails and all reductions return [`None`]. See
    /// [`Array::create`] or [`Array::from`] for more useful methods of initialization.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert!(arr.at(0).is_err());
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized and need to be written before calling [`Array::assume_init`].
    ///
    /// # Errors
    /// Returns [`ZeroSizeError`] (an invalid argument) if `size` is zero.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let mut arr = Array::<u8>::with_size(3).unwrap();
    /// for (i, slot) in arr.iter_mut().enumerate() {
    ///     slot.write(i as u8);
    /// }
    /// // SAFETY: Every slot has just been written.
    /// let arr = unsafe { arr.assume_init() };
    /// assert_eq!(&*arr, &[0, 1, 2]);
    ///
    /// assert!(Array::<u8>::with_size(0).is_err());
    /// ```
    pub fn with_size(size: usize) -> Result<Array<MaybeUninit<T>>, ArrayError> {
        Self::check_size(size)?;
        Ok(Self::new_uninit(size))
    }

    /// Returns a reference to the entry at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size()`.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 4].into_iter());
    /// assert_eq!(arr.at(2), Ok(&4));
    /// assert!(arr.at(3).unwrap_err().is_out_of_range());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_bounds(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the entry at `index`, which can be used to both read and
    /// overwrite it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size()`.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let mut arr = Array::<i32>::create(2).unwrap();
    /// *arr.at_mut(1).unwrap() = 7;
    /// assert_eq!(&*arr, &[0, 7]);
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_bounds(index)?;
        Ok(&mut self[index])
    }

    /// Borrows the entries of the Array as a slice. The slice can't outlive the Array.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Borrows the entries of the Array as a mutable slice. The slice can't outlive the Array.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Array<T> {
    /// Allocates an Array of `size` uninitialized values, without checking `size`. A size of zero
    /// produces a dangling pointer and no allocation.
    pub(crate) fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            trace!("allocating {} bytes (align {})", layout.size(), layout.align());
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    pub(crate) fn check_size(size: usize) -> Result<(), ArrayError> {
        if size == 0 {
            debug!("rejected zero sized array");
            return Err(ZeroSizeError.into());
        }
        Ok(())
    }

    pub(crate) fn check_bounds(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.size {
            debug!("rejected index {} for array with {} entries", index, self.size);
            return Err(IndexOutOfBounds {
                index,
                len: self.size,
            });
        }
        Ok(())
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new `Array<T>` with `size` clones of `item`.
    ///
    /// # Errors
    /// Returns [`ZeroSizeError`] (an invalid argument) if `size` is zero.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::filled("ab", 3).unwrap();
    /// assert_eq!(&*arr, &["ab", "ab", "ab"]);
    /// ```
    pub fn filled(item: T, size: usize) -> Result<Array<T>, ArrayError> {
        Self::check_size(size)?;
        let mut arr = Self::new_uninit(size);

        for slot in arr.iter_mut() {
            slot.write(item.clone());
        }

        // SAFETY: All values are initialized with a clone of item.
        Ok(unsafe { arr.assume_init() })
    }
}

impl<T: Zero + Clone> Array<T> {
    /// Creates a new `Array<T>` of `size` entries, all equal to zero.
    ///
    /// # Errors
    /// Returns [`ZeroSizeError`] (an invalid argument) if `size` is zero.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::<f32>::create(3).unwrap();
    /// assert_eq!(&*arr, &[0.0, 0.0, 0.0]);
    /// assert!(Array::<f32>::create(0).unwrap_err().is_invalid_argument());
    /// ```
    pub fn create(size: usize) -> Result<Array<T>, ArrayError> {
        Self::filled(T::zero(), size)
    }
}

impl<T, I> From<I> for Array<T>
where
    I: ExactSizeIterator<Item = T>,
{
    /// Creates an Array from an [`ExactSizeIterator`], with exactly as many entries as the iterator
    /// reports. Unlike the sized constructors, this can produce an empty Array.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator yields fewer items
    /// than its reported length.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(&*arr, [1, 2, 3]);
    /// ```
    fn from(iter: I) -> Self {
        let size = iter.len();
        let mut arr = Self::new_uninit(size);
        let mut written = 0;

        for (slot, item) in arr.iter_mut().zip(iter) {
            slot.write(item);
            written += 1;
        }

        // Anything already written is leaked rather than dropped, which is safe.
        assert_eq!(written, size, "ExactSizeIterator yielded fewer items than its length!");

        // SAFETY: All values are initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let arr = Array {
            ptr: self.ptr.cast(),
            size: self.size,
            _phantom: PhantomData,
        };
        // The allocation now belongs to arr.
        mem::forget(self);
        arr
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: The pointer is nonnull, properly aligned and points to size initialized values
        // which are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            trace!("releasing {} bytes", layout.size());
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents access throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    /// Clones every entry into a new, independent allocation.
    fn clone(&self) -> Self {
        Array::from(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.as_slice())
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
