#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use proptest::collection::vec;
use proptest::prelude::*;

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::panic::assert_panics;

fn sample() -> Array<i32> {
    Array::from([3, 1, 4, 1, 5].into_iter())
}

#[test]
fn test_zst_support() {
    let arr = Array::filled(ZeroSizedType, 5).unwrap();
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr.at(4), Ok(&ZeroSizedType),
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(arr.size(), 5);
    assert_eq!(arr.num_bytes(), 0, "ZSTs shouldn't occupy any bytes.");
    assert_eq!(arr.maxval(), Some(ZeroSizedType));
}

#[test]
fn test_sized_construction() {
    let arr = Array::<u64>::with_size(6).unwrap();
    assert_eq!(arr.size(), 6);
    assert_eq!(arr.num_bytes(), 48);

    let arr = Array::<u16>::create(5).unwrap();
    assert_eq!(arr.size(), 5);
    assert_eq!(arr.num_bytes(), 10);
    assert_eq!(&*arr, &[0; 5], "Created arrays should be zero filled.");

    let arr = Array::<f64>::create(2).unwrap();
    assert_eq!(&*arr, &[0.0, 0.0]);

    for err in [
        Array::<u8>::with_size(0).unwrap_err(),
        Array::<u8>::create(0).unwrap_err(),
        Array::filled(1_u8, 0).unwrap_err(),
    ] {
        assert_eq!(
            err,
            ArrayError::InvalidArgument(InvalidArgument::ZeroSize(ZeroSizeError)),
            "Zero sized construction should be an invalid argument."
        );
    }
}

#[test]
fn test_uninit_then_init() {
    let mut arr = Array::<u16>::with_size(4).unwrap();
    for (i, slot) in arr.iter_mut().enumerate() {
        slot.write(i as u16 * 10);
    }

    // SAFETY: Every slot has been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 10, 20, 30]);
}

#[test]
fn test_empty() {
    let mut arr: Array<i32> = Array::new();
    assert_eq!(arr.size(), 0);
    assert_eq!(arr.num_bytes(), 0);
    assert_eq!(arr, Array::default());
    assert_eq!(arr, Array::from(iter::empty()));

    assert!(arr.at(0).unwrap_err().is_out_of_range());
    assert!(arr.at_mut(0).unwrap_err().is_out_of_range());
    assert_eq!(arr.maxval(), None);
    assert_eq!(arr.minval(), None);
    assert_eq!(arr.sum(), 0, "An empty Array should sum to zero.");
    assert_eq!(arr.norm(), None);
}

#[test]
fn test_checked_access() {
    let mut arr = Array::<i64>::create(3).unwrap();

    *arr.at_mut(1).unwrap() = -7;
    assert_eq!(arr.at(1), Ok(&-7), "A written value should be read back.");
    assert_eq!(arr.as_slice(), &[0, -7, 0]);

    arr.as_mut_slice()[2] = 9;
    assert_eq!(arr[2], 9);

    assert_eq!(
        arr.at(3),
        Err(ArrayError::OutOfRange(IndexOutOfBounds { index: 3, len: 3 })),
        "Index equal to size should be out of range."
    );
    assert!(arr.at_mut(usize::MAX).unwrap_err().is_out_of_range());

    assert_panics!({
        let arr = Array::<i64>::create(3).unwrap();
        arr[3]
    });
}

#[test]
fn test_clone_is_independent() {
    let arr = sample();
    let mut copy = arr.clone();
    assert_eq!(copy.size(), arr.size());
    assert_eq!(copy, arr, "A clone should be equal element-wise.");

    copy[0] = 100;
    assert_eq!(arr[0], 3, "Mutating a clone shouldn't affect the original.");
    assert_ne!(copy.ptr, arr.ptr, "A clone should have its own allocation.");

    let counter = DropCounter::new();
    let arr = Array::from((0..4).map(|_| counter.clone()));
    let copy = arr.clone();
    drop(arr);
    assert_eq!(counter.take(), 4);
    drop(copy);
    assert_eq!(counter.take(), 4, "Cloned entries should be dropped separately.");
}

#[test]
fn test_chunk() {
    let arr = sample();

    let mut out = Array::create(3).unwrap();
    arr.chunk(1, 3, &mut out).unwrap();
    assert_eq!(&*out, &[1, 4, 1], "Chunk should include both ends of the range.");

    let mut out = Array::create(5).unwrap();
    arr.chunk(0, 4, &mut out).unwrap();
    assert_eq!(out, arr);

    let mut out = Array::filled(-1, 2).unwrap();
    assert_eq!(
        arr.chunk(3, 3, &mut out),
        Err(EmptyRangeError { start: 3, end: 3 }.into()),
        "A single entry range should be rejected."
    );
    assert!(arr.chunk(3, 1, &mut out).unwrap_err().is_invalid_argument());
    assert_eq!(
        arr.chunk(0, 2, &mut out),
        Err(SizeMismatchError { expected: 3, found: 2 }.into())
    );
    assert_eq!(
        arr.chunk(5, 1, &mut out),
        Err(IndexOutOfBounds { index: 5, len: 5 }.into()),
        "Start should be bounds checked first."
    );
    assert_eq!(
        arr.chunk(1, 5, &mut out),
        Err(IndexOutOfBounds { index: 5, len: 5 }.into())
    );
    assert_eq!(&*out, &[-1, -1], "Failed chunks shouldn't write anything.");
}

#[test]
fn test_partial() {
    let arr = sample();

    let indices = Array::from([4, 0, 2].into_iter());
    let mut out = Array::create(3).unwrap();
    arr.partial(&indices, &mut out).unwrap();
    assert_eq!(&*out, &[5, 3, 4]);

    let indices = Array::from([1, 1, 1, 1].into_iter());
    let mut out = Array::create(4).unwrap();
    arr.partial(&indices, &mut out).unwrap();
    assert_eq!(&*out, &[1; 4], "Repeated indices should be allowed.");

    let mut out = Array::filled(-1, 2).unwrap();
    assert_eq!(
        arr.partial(&indices, &mut out),
        Err(SizeMismatchError { expected: 4, found: 2 }.into())
    );

    let indices = Array::from([0, 5].into_iter());
    assert_eq!(
        arr.partial(&indices, &mut out),
        Err(IndexOutOfBounds { index: 5, len: 5 }.into())
    );
    assert_eq!(&*out, &[-1, -1], "Failed gathers shouldn't write anything.");

    let mut out = Array::new();
    arr.partial(&Array::new(), &mut out).unwrap();
    assert_eq!(out.size(), 0);
}

#[test]
fn test_reductions() {
    let arr = sample();
    assert_eq!(arr.maxval(), Some(5));
    assert_eq!(arr.minval(), Some(1));
    assert_eq!(arr.sum(), 14);

    let arr = Array::from([-2.5_f64, 7.0, 0.5].into_iter());
    assert_eq!(arr.maxval(), Some(7.0));
    assert_eq!(arr.minval(), Some(-2.5));
    assert_eq!(arr.sum(), 5.0);

    let arr = Array::from([f64::NAN, 1.0].into_iter());
    assert!(
        arr.maxval().is_some_and(f64::is_nan),
        "The first entry should be kept when nothing compares greater."
    );

    let words = Array::from(["pear", "apple", "quince"].into_iter());
    assert_eq!(words.maxval(), Some("quince"));
    assert_eq!(words.minval(), Some("apple"));
}

#[test]
fn test_norm() {
    assert_eq!(Array::from([3_i32, 4].into_iter()).norm(), Some(5.0));
    assert_eq!(Array::from([-3_i8, 4].into_iter()).norm(), Some(5.0));

    let norm = Array::from([200_u8, 200].into_iter()).norm().unwrap();
    assert!(
        (norm - 80_000_f64.sqrt()).abs() < 1e-9,
        "Squares should be accumulated as f64, not u8."
    );

    let norm = Array::from([0.1_f32; 3].into_iter()).norm().unwrap();
    assert!((norm - (3.0 * 0.1_f32 as f64 * 0.1_f32 as f64).sqrt()).abs() < 1e-12);
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::from((0..10).map(|_| counter.clone()));

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let counter = DropCounter::new();
    let arr = Array::filled(counter.clone(), 3).unwrap();
    assert_eq!(counter.take(), 1, "The original item should be dropped after cloning.");
    drop(arr);
    assert_eq!(counter.take(), 3);
}

#[test]
fn test_short_iterator() {
    struct Liar(usize);

    impl Iterator for Liar {
        type Item = u8;

        fn next(&mut self) -> Option<u8> {
            self.0 = self.0.checked_sub(1)?;
            Some(0)
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (5, Some(5))
        }
    }

    impl ExactSizeIterator for Liar {}

    assert_panics!({ Array::from(Liar(3)) });
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4].into_iter()), Array::from(0..5));

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let arr = Array::from([1, 2].into_iter());
    assert_eq!(format!("{arr}"), "[1, 2]");
    assert_eq!(format!("{arr:?}"), "Array { contents: [1, 2], size: 2 }");

    let err = Array::<u8>::create(0).unwrap_err();
    assert_eq!(err.to_string(), "array size cannot be zero");
    assert_eq!(
        sample().at(9).unwrap_err().to_string(),
        "index 9 out of bounds for array with 5 entries"
    );
}

#[test]
fn test_error_kinds() {
    let err = sample().chunk(2, 1, &mut Array::new()).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(!err.is_out_of_range());

    let kind = InvalidArgument::try_from(err).unwrap();
    assert!(kind.is_empty_range());
    assert!(IndexOutOfBounds::try_from(err).is_err());
}

#[test]
fn test_iterators() {
    let mut arr = Array::from(0_usize..5);
    let collected = Array::from(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );
    assert_eq!((&arr).into_iter().count(), 5);

    assert_eq!(
        arr,
        Array::from(arr.clone().into_iter()),
        "Cloned and collected array should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = DropCounter::new();
    let arr = Array::from((0..10).map(|_| counter.clone()));

    drop(arr.into_iter());
    assert_eq!(
        counter.take(),
        10,
        "Dropping an owned iterator should drop all elements."
    );

    let arr = Array::from((0..10).map(|_| counter.clone()));
    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.take(), 2);
    drop(iter);
    assert_eq!(
        counter.take(),
        8,
        "A partially consumed iterator should drop only the remaining elements."
    );
}

proptest! {
    #[test]
    fn prop_sized_construction(n in 1_usize..512) {
        let arr = Array::<u32>::create(n).unwrap();
        prop_assert_eq!(arr.size(), n);
        prop_assert_eq!(arr.num_bytes(), n * size_of::<u32>());
        prop_assert!(arr.iter().all(|&value| value == 0));

        let arr = Array::<u8>::with_size(n).unwrap();
        prop_assert_eq!(arr.size(), n);
    }

    #[test]
    fn prop_write_then_read(
        values in vec(any::<i64>(), 1..64),
        index in 0_usize..80,
        value in any::<i64>(),
    ) {
        let mut arr = Array::from(values.into_iter());
        let size = arr.size();

        if index < size {
            *arr.at_mut(index).unwrap() = value;
            prop_assert_eq!(arr.at(index), Ok(&value));
        } else {
            prop_assert!(arr.at_mut(index).unwrap_err().is_out_of_range());
            prop_assert!(arr.at(index).unwrap_err().is_out_of_range());
        }
    }

    #[test]
    fn prop_chunk(
        values in vec(any::<i32>(), 1..64),
        start in 0_usize..70,
        end in 0_usize..70,
    ) {
        let arr = Array::from(values.iter().copied());
        let size = arr.size();
        let mut out = Array::create(end.saturating_sub(start) + 1).unwrap();

        match arr.chunk(start, end, &mut out) {
            Ok(()) => {
                prop_assert_eq!(&*out, &values[start..=end]);
            },
            Err(err) if start >= size || end >= size => {
                prop_assert!(err.is_out_of_range());
            },
            Err(err) => {
                prop_assert!(start >= end);
                prop_assert!(err.is_invalid_argument());
            },
        }
    }

    #[test]
    fn prop_partial(
        values in vec(any::<i32>(), 1..64),
        indices in vec(0_usize..80, 1..16),
    ) {
        let arr = Array::from(values.iter().copied());
        let indices = Array::from(indices.into_iter());
        let mut out = Array::create(indices.size()).unwrap();

        match arr.partial(&indices, &mut out) {
            Ok(()) => {
                for (&index, &gathered) in indices.iter().zip(out.iter()) {
                    prop_assert_eq!(gathered, values[index]);
                }
            },
            Err(err) => {
                prop_assert!(indices.iter().any(|&index| index >= values.len()));
                prop_assert!(err.is_out_of_range());
            },
        }

        let mut short = Array::create(indices.size() + 1).unwrap();
        prop_assert!(arr.partial(&indices, &mut short).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn prop_reductions(values in vec(-1000_i64..1000, 1..64)) {
        let arr = Array::from(values.iter().copied());
        prop_assert_eq!(arr.maxval(), values.iter().copied().max());
        prop_assert_eq!(arr.minval(), values.iter().copied().min());
        prop_assert_eq!(arr.sum(), values.iter().sum::<i64>());

        let expected = values.iter().map(|&v| (v * v) as f64).sum::<f64>().sqrt();
        prop_assert!((arr.norm().unwrap() - expected).abs() < 1e-6);
    }
}
