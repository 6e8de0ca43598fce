use num_traits::{AsPrimitive, Zero};

use super::Array;

impl<T: PartialOrd + Clone> Array<T> {
    /// Returns the largest entry, or [`None`] if the Array is empty.
    ///
    /// The scan is seeded with the first entry and only replaces it with a strictly greater one,
    /// so the first of several equal maxima wins. Incomparable values (such as `NaN`) are never
    /// greater, which means a leading `NaN` is returned as is.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 4, 1, 5].into_iter());
    /// assert_eq!(arr.maxval(), Some(5));
    /// ```
    pub fn maxval(&self) -> Option<T> {
        let (first, rest) = self.split_first()?;
        let mut max = first;

        for value in rest {
            if value > max {
                max = value;
            }
        }

        Some(max.clone())
    }

    /// Returns the smallest entry, or [`None`] if the Array is empty. Mirrors [`Array::maxval`],
    /// replacing on strictly less.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 4, 1, 5].into_iter());
    /// assert_eq!(arr.minval(), Some(1));
    /// ```
    pub fn minval(&self) -> Option<T> {
        let (first, rest) = self.split_first()?;
        let mut min = first;

        for value in rest {
            if value < min {
                min = value;
            }
        }

        Some(min.clone())
    }
}

impl<T: Zero + Clone> Array<T> {
    /// Returns the sum of all entries, starting from zero. An empty Array sums to zero.
    ///
    /// # Panics
    /// Overflow behaves like `+` on `T`, so integer overflow panics in debug builds and wraps in
    /// release builds.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3, 1, 4, 1, 5].into_iter());
    /// assert_eq!(arr.sum(), 14);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, value| acc + value.clone())
    }
}

impl<T: AsPrimitive<f64>> Array<T> {
    /// Returns the Euclidean norm of the entries, or [`None`] if the Array is empty.
    ///
    /// Every entry is widened to [`f64`] before it is squared and accumulated, so small integer
    /// types can't overflow and `f32` contents keep double precision throughout.
    ///
    /// # Examples
    /// ```
    /// # use fixed_array::collections::contiguous::Array;
    /// let arr = Array::from([3_u8, 4].into_iter());
    /// assert_eq!(arr.norm(), Some(5.0));
    /// ```
    pub fn norm(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let squares: f64 = self
            .iter()
            .map(|&value| {
                let value: f64 = value.as_();
                value * value
            })
            .sum();

        Some(squares.sqrt())
    }
}
