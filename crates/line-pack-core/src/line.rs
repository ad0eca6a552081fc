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

use crate::primitives::Interval;
use num_traits::Zero;
use std::{
    iter::Sum,
    ops::{Add, Sub},
};

/// A point on the line, measured from its origin.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct LinePosition(f64);

pub type LineInterval = Interval<LinePosition>;

impl std::fmt::Display for LinePosition {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LinePosition({})", self.0)
    }
}

impl LinePosition {
    #[inline]
    pub const fn new(v: f64) -> Self {
        LinePosition(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        LinePosition(0.0)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Restricts the position to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        assert!(min <= max, "min must be <= max");
        LinePosition(self.0.clamp(min.0, max.0))
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        LinePosition(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        LinePosition(self.0.max(other.0))
    }

    #[inline]
    pub fn span_of(self, len: LineLength) -> LineInterval {
        LineInterval::new(self, self + len)
    }
}

impl Add<LineLength> for LinePosition {
    type Output = LinePosition;

    #[inline]
    fn add(self, rhs: LineLength) -> Self::Output {
        LinePosition(self.0 + rhs.0)
    }
}

impl Sub<LineLength> for LinePosition {
    type Output = LinePosition;

    #[inline]
    fn sub(self, rhs: LineLength) -> Self::Output {
        LinePosition(self.0 - rhs.0)
    }
}

/// The distance between two positions; always non-negative.
impl Sub<LinePosition> for LinePosition {
    type Output = LineLength;

    #[inline]
    fn sub(self, rhs: LinePosition) -> Self::Output {
        LineLength::new((self.0 - rhs.0).abs())
    }
}

/// An extent along the line, such as a requested width or a gap size.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct LineLength(f64);

impl std::fmt::Display for LineLength {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LineLength({})", self.0)
    }
}

impl LineLength {
    #[inline]
    pub const fn new(v: f64) -> Self {
        LineLength(v)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn half(self) -> Self {
        Self(self.0 / 2.0)
    }
}

impl Zero for LineLength {
    #[inline]
    fn zero() -> Self {
        LineLength::new(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Add for LineLength {
    type Output = LineLength;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        LineLength(self.0 + rhs.0)
    }
}

impl Sub for LineLength {
    type Output = LineLength;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        LineLength(self.0 - rhs.0)
    }
}

impl Sum for LineLength {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Interval<LinePosition> {
    #[inline]
    pub fn extent(&self) -> LineLength {
        self.end() - self.start()
    }

    #[inline]
    pub fn midpoint(&self) -> LinePosition {
        LinePosition::new((self.start().value() + self.end().value()) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_position_creation() {
        let pos = LinePosition::new(5.5);
        assert_eq!(pos.value(), 5.5);
        assert_eq!(LinePosition::zero().value(), 0.0);
    }

    #[test]
    fn test_line_position_display() {
        assert_eq!(format!("{}", LinePosition::new(5.0)), "LinePosition(5)");
        assert_eq!(format!("{}", LinePosition::new(2.5)), "LinePosition(2.5)");
    }

    #[test]
    fn test_line_position_add_sub_length() {
        let pos = LinePosition::new(5.0);
        let len = LineLength::new(3.0);
        assert_eq!((pos + len).value(), 8.0);
        assert_eq!((pos - len).value(), 2.0);
    }

    #[test]
    fn test_line_position_sub_may_go_negative() {
        let pos = LinePosition::new(1.0);
        assert_eq!((pos - LineLength::new(2.0)).value(), -1.0);
    }

    #[test]
    fn test_line_position_difference_is_absolute() {
        let a = LinePosition::new(10.0);
        let b = LinePosition::new(4.0);
        assert_eq!(a - b, LineLength::new(6.0));
        assert_eq!(b - a, LineLength::new(6.0));
    }

    #[test]
    fn test_line_position_clamp() {
        let lo = LinePosition::zero();
        let hi = LinePosition::new(10.0);
        assert_eq!(LinePosition::new(-3.0).clamp(lo, hi), lo);
        assert_eq!(LinePosition::new(12.0).clamp(lo, hi), hi);
        assert_eq!(LinePosition::new(4.0).clamp(lo, hi).value(), 4.0);
    }

    #[test]
    fn test_line_position_min_max() {
        let a = LinePosition::new(1.0);
        let b = LinePosition::new(2.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_line_position_span_of() {
        let iv = LinePosition::new(3.0).span_of(LineLength::new(4.0));
        assert_eq!(iv.start().value(), 3.0);
        assert_eq!(iv.end().value(), 7.0);
    }

    #[test]
    fn test_line_length_basics() {
        let len = LineLength::zero();
        assert!(len.is_zero());
        assert!(!len.is_positive());
        assert!(LineLength::new(0.5).is_positive());
        assert!(!LineLength::new(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_line_length_display() {
        assert_eq!(format!("{}", LineLength::new(10.0)), "LineLength(10)");
    }

    #[test]
    fn test_line_length_arithmetic() {
        let a = LineLength::new(10.0);
        let b = LineLength::new(4.0);
        assert_eq!((a + b).value(), 14.0);
        assert_eq!((a - b).value(), 6.0);
        assert_eq!(a.half().value(), 5.0);
    }

    #[test]
    fn test_line_length_sum() {
        let lens = [LineLength::new(1.5), LineLength::new(2.5), LineLength::new(6.0)];
        let total: LineLength = lens.into_iter().sum();
        assert_eq!(total.value(), 10.0);
    }

    #[test]
    fn test_line_interval_extent_and_midpoint() {
        let iv = LineInterval::new(LinePosition::new(2.0), LinePosition::new(8.0));
        assert_eq!(iv.extent(), LineLength::new(6.0));
        assert_eq!(iv.midpoint(), LinePosition::new(5.0));
    }
}
