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

use line_pack_core::line::{LineLength, LinePosition};
use std::fmt::Display;

/// No free gap on the line is wide enough for the requested width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnpackableError {
    width: LineLength,
    largest_gap: LineLength,
}

impl UnpackableError {
    #[inline]
    pub fn new(width: LineLength, largest_gap: LineLength) -> Self {
        Self { width, largest_gap }
    }

    #[inline]
    pub fn width(&self) -> LineLength {
        self.width
    }

    /// Size of the widest gap at the time of the request; zero when the line is full.
    #[inline]
    pub fn largest_gap(&self) -> LineLength {
        self.largest_gap
    }
}

impl Display for UnpackableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment of width {} does not fit; largest free gap is {}",
            self.width, self.largest_gap
        )
    }
}

impl std::error::Error for UnpackableError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidWidthError {
    width: LineLength,
}

impl InvalidWidthError {
    #[inline]
    pub fn new(width: LineLength) -> Self {
        Self { width }
    }

    #[inline]
    pub fn width(&self) -> LineLength {
        self.width
    }
}

impl Display for InvalidWidthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Width {} must be finite and strictly positive",
            self.width
        )
    }
}

impl std::error::Error for InvalidWidthError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearOutOfRangeError {
    near: LinePosition,
    length: LineLength,
}

impl NearOutOfRangeError {
    #[inline]
    pub fn new(near: LinePosition, length: LineLength) -> Self {
        Self { near, length }
    }

    #[inline]
    pub fn near(&self) -> LinePosition {
        self.near
    }

    #[inline]
    pub fn length(&self) -> LineLength {
        self.length
    }
}

impl Display for NearOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Target {} lies outside the line [0, {}]",
            self.near.value(),
            self.length.value()
        )
    }
}

impl std::error::Error for NearOutOfRangeError {}

/// The requested width is too small to be represented at the target's
/// magnitude; the segment would collapse or lose part of its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBelowResolutionError {
    width: LineLength,
    near: LinePosition,
}

impl WidthBelowResolutionError {
    #[inline]
    pub fn new(width: LineLength, near: LinePosition) -> Self {
        Self { width, near }
    }

    #[inline]
    pub fn width(&self) -> LineLength {
        self.width
    }

    #[inline]
    pub fn near(&self) -> LinePosition {
        self.near
    }
}

impl Display for WidthBelowResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Width {} cannot be represented near position {}",
            self.width.value(),
            self.near.value()
        )
    }
}

impl std::error::Error for WidthBelowResolutionError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLengthError {
    length: LineLength,
}

impl InvalidLengthError {
    #[inline]
    pub fn new(length: LineLength) -> Self {
        Self { length }
    }

    #[inline]
    pub fn length(&self) -> LineLength {
        self.length
    }
}

impl Display for InvalidLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line length {} must be finite and non-negative",
            self.length
        )
    }
}

impl std::error::Error for InvalidLengthError {}

/// Everything that can go wrong when placing a segment.
///
/// A failed request never changes the packer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PackError {
    Unpackable(UnpackableError),
    InvalidWidth(InvalidWidthError),
    NearOutOfRange(NearOutOfRangeError),
    BelowResolution(WidthBelowResolutionError),
}

impl PackError {
    #[inline]
    pub fn is_unpackable(&self) -> bool {
        matches!(self, PackError::Unpackable(_))
    }
}

impl From<UnpackableError> for PackError {
    fn from(value: UnpackableError) -> Self {
        PackError::Unpackable(value)
    }
}

impl From<InvalidWidthError> for PackError {
    fn from(value: InvalidWidthError) -> Self {
        PackError::InvalidWidth(value)
    }
}

impl From<NearOutOfRangeError> for PackError {
    fn from(value: NearOutOfRangeError) -> Self {
        PackError::NearOutOfRange(value)
    }
}

impl From<WidthBelowResolutionError> for PackError {
    fn from(value: WidthBelowResolutionError) -> Self {
        PackError::BelowResolution(value)
    }
}

impl Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackError::Unpackable(e) => write!(f, "Unpackable: {}", e),
            PackError::InvalidWidth(e) => write!(f, "Invalid width: {}", e),
            PackError::NearOutOfRange(e) => write!(f, "Invalid target: {}", e),
            PackError::BelowResolution(e) => write!(f, "Below resolution: {}", e),
        }
    }
}

impl std::error::Error for PackError {}
