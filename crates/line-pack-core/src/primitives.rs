// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Core Primitives
//!
//! Generic building blocks shared by the rest of the workspace. The central
//! type is [`Interval`], a half-open range used for both free gaps and placed
//! segments on the line.

use std::cmp::Ordering;
use std::fmt;

/// A half-open interval `[start, end)`.
///
/// The start is inclusive and the end is exclusive, so `[start, end)` covers
/// all values `x` with `start <= x < end`.
///
/// # Examples
///
/// ```
/// use line_pack_core::primitives::Interval;
/// let interval = Interval::new(1.0, 5.0);
/// assert_eq!(interval.start(), 1.0);
/// assert_eq!(interval.end(), 5.0);
/// assert!(interval.spans(5.0));
/// assert!(!interval.is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> Interval<T> {
    /// Creates a new half-open interval `[start, end)`.
    ///
    /// The bounds are ordered on construction, so `Interval::new(5, 3)` is the
    /// same interval as `Interval::new(3, 5)`.
    ///
    /// # Panics
    ///
    /// Panics if `a` and `b` are not comparable (e.g. one of them is NaN).
    ///
    /// # Examples
    ///
    /// ```
    /// use line_pack_core::primitives::Interval;
    ///
    /// let interval = Interval::new(5.0, 3.0);
    /// assert_eq!(interval.start(), 3.0);
    /// assert_eq!(interval.end(), 5.0);
    /// ```
    #[inline]
    pub fn new(a: T, b: T) -> Self
    where
        T: PartialOrd + Copy,
    {
        // Every method below relies on `start_inclusive <= end_exclusive`.
        let ord = a
            .partial_cmp(&b)
            .expect("Interval::new: non-comparable bounds (NaN?)");
        let (s, e) = match ord {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };

        Self {
            start_inclusive: s,
            end_exclusive: e,
        }
    }

    /// Returns the inclusive start of the interval.
    #[inline]
    pub fn start(&self) -> T
    where
        T: Copy,
    {
        self.start_inclusive
    }

    /// Returns the exclusive end of the interval.
    #[inline]
    pub fn end(&self) -> T
    where
        T: Copy,
    {
        self.end_exclusive
    }

    /// Checks if the interval has no length.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_pack_core::primitives::Interval;
    ///
    /// assert!(Interval::new(5.0, 5.0).is_empty());
    /// assert!(!Interval::new(1.0, 5.0).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool
    where
        T: PartialEq,
    {
        self.start_inclusive == self.end_exclusive
    }

    /// Checks if `x` lies in the closed range `[start, end]`.
    ///
    /// The end bound is included. This is the test used to decide whether a
    /// target point sits "inside" a free gap, where touching either edge
    /// still counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_pack_core::primitives::Interval;
    ///
    /// let interval = Interval::new(1.0, 5.0);
    /// assert!(interval.spans(1.0));
    /// assert!(interval.spans(5.0));
    /// assert!(!interval.spans(5.5));
    /// ```
    #[inline]
    pub fn spans(&self, x: T) -> bool
    where
        T: PartialOrd,
    {
        x >= self.start_inclusive && x <= self.end_exclusive
    }

    /// Checks if `other` lies entirely within this interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_pack_core::primitives::Interval;
    ///
    /// let a = Interval::new(1.0, 5.0);
    /// assert!(a.contains_interval(&Interval::new(2.0, 4.0)));
    /// assert!(a.contains_interval(&a));
    /// assert!(!a.contains_interval(&Interval::new(0.0, 6.0)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool
    where
        T: PartialOrd,
    {
        other.start_inclusive >= self.start_inclusive && other.end_exclusive <= self.end_exclusive
    }

    /// Checks if this interval overlaps `other`.
    ///
    /// Intervals that only touch at a bound do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use line_pack_core::primitives::Interval;
    ///
    /// let a = Interval::new(1.0, 5.0);
    /// assert!(a.intersects(&Interval::new(4.0, 6.0)));
    /// assert!(!a.intersects(&Interval::new(5.0, 7.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool
    where
        T: PartialOrd + Copy,
    {
        let start = if self.start_inclusive > other.start_inclusive {
            self.start_inclusive
        } else {
            other.start_inclusive
        };
        let end = if self.end_exclusive < other.end_exclusive {
            self.end_exclusive
        } else {
            other.end_exclusive
        };
        start < end
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    /// Formats the interval as `[start, end)`.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}
