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

use crate::{
    config::{NearPolicy, PackerConfig},
    err::{
        InvalidLengthError, InvalidWidthError, NearOutOfRangeError, PackError, UnpackableError,
        WidthBelowResolutionError,
    },
    placement::{self, Choice, Placement},
};
use line_pack_core::line::{LineInterval, LineLength, LinePosition};
use num_traits::Zero;
use std::fmt::Display;
use tracing::{debug, instrument, trace};

/// Packs segments onto a line of fixed length, each one as close as possible
/// to a requested target point.
///
/// The packer tracks the free gaps and the placed segments. Together they
/// always tile `[0, length)` exactly: gaps are disjoint, segments are
/// disjoint, and no segment overlaps a gap. Segments are permanent.
///
/// Gaps are kept in insertion order. When a gap is consumed, the rest keep
/// their order and the remainders are appended left first.
///
/// # Examples
///
/// ```
/// use line_pack::prelude::*;
///
/// let mut packer = LinePacker::new(LineLength::new(10.0)).unwrap();
/// let placed = packer
///     .pack(LineLength::new(4.0), LinePosition::new(5.0))
///     .unwrap();
/// assert_eq!(placed.into_parts(), (3.0, 7.0, 0.0));
/// assert_eq!(packer.to_string(), "Gaps: [(0, 3), (7, 10)], Segments: [(3, 7)]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinePacker {
    length: LineLength,
    gaps: Vec<LineInterval>,
    segments: Vec<LineInterval>,
    config: PackerConfig,
}

impl LinePacker {
    /// Creates an empty packer for the line `[0, length)`.
    ///
    /// A line of length zero has no free gap at all, so nothing ever fits.
    #[inline]
    pub fn new(length: LineLength) -> Result<Self, InvalidLengthError> {
        Self::with_config(length, PackerConfig::default())
    }

    pub fn with_config(
        length: LineLength,
        config: PackerConfig,
    ) -> Result<Self, InvalidLengthError> {
        if !length.is_finite() || length < LineLength::zero() {
            return Err(InvalidLengthError::new(length));
        }
        let mut gaps = Vec::new();
        if length.is_positive() {
            gaps.push(LinePosition::zero().span_of(length));
        }
        Ok(Self {
            length,
            gaps,
            segments: Vec::new(),
            config,
        })
    }

    #[inline]
    pub fn length(&self) -> LineLength {
        self.length
    }

    #[inline]
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// The whole line as an interval.
    #[inline]
    pub fn universe(&self) -> LineInterval {
        LinePosition::zero().span_of(self.length)
    }

    /// Free gaps in storage order.
    #[inline]
    pub fn gaps(&self) -> &[LineInterval] {
        &self.gaps
    }

    /// Placed segments in placement order.
    #[inline]
    pub fn segments(&self) -> &[LineInterval] {
        &self.segments
    }

    #[inline]
    pub fn free_space(&self) -> LineLength {
        self.gaps.iter().map(|gap| gap.extent()).sum()
    }

    #[inline]
    pub fn occupied_space(&self) -> LineLength {
        self.segments.iter().map(|segment| segment.extent()).sum()
    }

    /// The widest free gap; the first one in storage order on ties.
    pub fn largest_gap(&self) -> Option<LineInterval> {
        let mut best: Option<LineInterval> = None;
        for &gap in &self.gaps {
            if best.is_none_or(|b| gap.extent() > b.extent()) {
                best = Some(gap);
            }
        }
        best
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Returns `true` if some gap could host `width`.
    ///
    /// The position of the gap does not matter. Non-positive widths are not
    /// rejected here; [`LinePacker::pack`] does that.
    #[inline]
    pub fn canfit(&self, width: LineLength) -> bool {
        if width > self.length {
            return false;
        }
        self.gaps.iter().any(|gap| gap.extent() >= width)
    }

    /// Places a segment of `width` as close as possible to `near`.
    ///
    /// If `near` lies inside a gap that can host the segment, the segment is
    /// centered on `near`, or pushed flush against the gap edge it would
    /// overhang. Otherwise the gap whose nearer endpoint is closest to `near`
    /// is used and the segment is aligned to that endpoint.
    ///
    /// On success the returned [`Placement`] carries the segment bounds and
    /// the distance from `near` to the segment's center. On failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// - [`PackError::InvalidWidth`] if `width` is not finite or not positive.
    /// - [`PackError::NearOutOfRange`] if `near` is not finite, or lies outside
    ///   `[0, length]` under [`NearPolicy::Reject`].
    /// - [`PackError::Unpackable`] if no gap is wide enough.
    /// - [`PackError::BelowResolution`] if `width` is too small to be placed
    ///   at the chosen spot without rounding away.
    #[instrument(level = "debug", skip_all, fields(width = width.value(), near = near.value()), err(Display))]
    pub fn pack(
        &mut self,
        width: LineLength,
        near: LinePosition,
    ) -> Result<Placement, PackError> {
        if !width.is_finite() || !width.is_positive() {
            return Err(InvalidWidthError::new(width).into());
        }
        let near = self.resolve_near(near)?;

        if !self.canfit(width) {
            return Err(self.unpackable(width).into());
        }

        let Some(Choice { gap_index, segment }) = placement::choose(&self.gaps, width, near)
        else {
            return Err(self.unpackable(width).into());
        };
        if !placement::resolves(segment, width) {
            return Err(WidthBelowResolutionError::new(width, near).into());
        }

        self.commit(gap_index, segment);

        let placed = Placement::new(segment, near);
        debug!(
            start = placed.start().value(),
            end = placed.end().value(),
            distance = placed.distance().value(),
            gaps = self.gaps.len(),
            "Placed segment"
        );
        Ok(placed)
    }

    /// [`LinePacker::pack`] targeting the origin of the line.
    #[inline]
    pub fn pack_from_origin(&mut self, width: LineLength) -> Result<Placement, PackError> {
        self.pack(width, LinePosition::zero())
    }

    fn resolve_near(&self, near: LinePosition) -> Result<LinePosition, NearOutOfRangeError> {
        if !near.is_finite() {
            return Err(NearOutOfRangeError::new(near, self.length));
        }
        let universe = self.universe();
        if universe.spans(near) {
            return Ok(near);
        }
        match self.config.near {
            NearPolicy::Reject => Err(NearOutOfRangeError::new(near, self.length)),
            NearPolicy::Clamp => {
                let clamped = near.clamp(universe.start(), universe.end());
                trace!(from = near.value(), to = clamped.value(), "Clamped target");
                Ok(clamped)
            }
            NearPolicy::Accept => Ok(near),
        }
    }

    #[inline]
    fn unpackable(&self, width: LineLength) -> UnpackableError {
        let largest = self
            .largest_gap()
            .map_or(LineLength::zero(), |gap| gap.extent());
        UnpackableError::new(width, largest)
    }

    /// Swaps the consumed gap for the segment and its remainders.
    fn commit(&mut self, gap_index: usize, segment: LineInterval) {
        let gap = self.gaps.remove(gap_index);
        debug_assert!(gap.contains_interval(&segment));
        debug_assert!(!self.segments.iter().any(|s| s.intersects(&segment)));

        self.segments.push(segment);
        if gap.start() != segment.start() {
            self.gaps.push(LineInterval::new(gap.start(), segment.start()));
        }
        if segment.end() != gap.end() {
            self.gaps.push(LineInterval::new(segment.end(), gap.end()));
        }
        trace!(gap = %gap, segment = %segment, "Split gap");
    }
}

fn write_sorted(
    f: &mut std::fmt::Formatter<'_>,
    intervals: &[LineInterval],
    key: impl Fn(&LineInterval) -> f64,
) -> std::fmt::Result {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    write!(f, "[")?;
    for (i, iv) in sorted.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({}, {})", iv.start().value(), iv.end().value())?;
    }
    write!(f, "]")
}

impl Display for LinePacker {
    /// Gaps sorted by start, segments sorted by end.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gaps: ")?;
        write_sorted(f, &self.gaps, |gap| gap.start().value())?;
        write!(f, ", Segments: ")?;
        write_sorted(f, &self.segments, |segment| segment.end().value())
    }
}
