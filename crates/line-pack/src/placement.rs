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

//! Placement search over a snapshot of free gaps.
//!
//! Nothing in here mutates the gap list: `choose` only decides which gap
//! hosts the segment and where the segment goes. The packer commits the
//! decision afterwards.

use line_pack_core::line::{LineInterval, LineLength, LinePosition};
use std::fmt::Display;

/// A successfully placed segment together with its distance to the target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    start: LinePosition,
    end: LinePosition,
    distance: LineLength,
}

impl Placement {
    #[inline]
    pub fn new(segment: LineInterval, near: LinePosition) -> Self {
        Self {
            start: segment.start(),
            end: segment.end(),
            distance: near - segment.midpoint(),
        }
    }

    #[inline]
    pub fn start(&self) -> LinePosition {
        self.start
    }

    #[inline]
    pub fn end(&self) -> LinePosition {
        self.end
    }

    /// Absolute distance from the target point to the segment's center.
    #[inline]
    pub fn distance(&self) -> LineLength {
        self.distance
    }

    #[inline]
    pub fn segment(&self) -> LineInterval {
        LineInterval::new(self.start, self.end)
    }

    #[inline]
    pub fn width(&self) -> LineLength {
        self.end - self.start
    }

    /// The raw `(start, end, distance)` triple.
    #[inline]
    pub fn into_parts(self) -> (f64, f64, f64) {
        (self.start.value(), self.end.value(), self.distance.value())
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Placement([{}, {}), distance {})",
            self.start.value(),
            self.end.value(),
            self.distance.value()
        )
    }
}

/// The outcome of the decide phase: which gap to consume and the segment carved from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Choice {
    pub gap_index: usize,
    pub segment: LineInterval,
}

#[inline]
fn candidates(
    gaps: &[LineInterval],
    width: LineLength,
) -> impl Iterator<Item = (usize, LineInterval)> + '_ {
    gaps.iter()
        .copied()
        .enumerate()
        .filter(move |(_, gap)| gap.extent() >= width)
}

/// The segment of `width` aligned to the start of `gap`.
///
/// The end is capped at the gap end so rounding never lets the segment poke
/// out of its gap.
#[inline]
fn flush_left(gap: LineInterval, width: LineLength) -> LineInterval {
    LineInterval::new(gap.start(), (gap.start() + width).min(gap.end()))
}

#[inline]
fn flush_right(gap: LineInterval, width: LineLength) -> LineInterval {
    LineInterval::new((gap.end() - width).max(gap.start()), gap.end())
}

/// Centers a segment of `width` on `near`, pushed flush against whichever
/// edge of `gap` it would otherwise overhang.
///
/// `gap` must be at least `width` wide.
#[inline]
fn center_within(gap: LineInterval, width: LineLength, near: LinePosition) -> LineInterval {
    let half = width.half();
    let ideal_start = near - half;
    let ideal_end = near + half;
    if ideal_start < gap.start() {
        flush_left(gap, width)
    } else if ideal_end > gap.end() {
        flush_right(gap, width)
    } else {
        LineInterval::new(ideal_start, ideal_end)
    }
}

/// Gaps never touch each other (see [`resolves`]), so at most one of them
/// spans `near`.
fn choose_containing(
    gaps: &[LineInterval],
    width: LineLength,
    near: LinePosition,
) -> Option<Choice> {
    candidates(gaps, width)
        .find(|(_, gap)| gap.spans(near))
        .map(|(gap_index, gap)| Choice {
            gap_index,
            segment: center_within(gap, width, near),
        })
}

fn choose_nearest_edge(
    gaps: &[LineInterval],
    width: LineLength,
    near: LinePosition,
) -> Option<Choice> {
    let mut best: Option<(usize, LineInterval, LineLength)> = None;
    for (gap_index, gap) in candidates(gaps, width) {
        let to_start = gap.start() - near;
        let to_end = gap.end() - near;
        let score = if to_start > to_end { to_end } else { to_start };
        if best.is_none_or(|(_, _, best_score)| score < best_score) {
            best = Some((gap_index, gap, score));
        }
    }

    best.map(|(gap_index, gap, _)| {
        let segment = if (gap.start() - near) > (gap.end() - near) {
            flush_right(gap, width)
        } else {
            flush_left(gap, width)
        };
        Choice { gap_index, segment }
    })
}

/// Relative slack allowed between a segment's extent and the requested width.
const WIDTH_TOLERANCE: f64 = 1e-3;

/// Returns `true` if `segment` is a usable rendering of `width`.
///
/// Far from the origin a tiny width can round away entirely, leaving an empty
/// segment whose two remainder gaps touch. Such a segment must not be
/// committed.
#[inline]
pub(crate) fn resolves(segment: LineInterval, width: LineLength) -> bool {
    !segment.is_empty()
        && (segment.extent() - width).value().abs() <= width.value() * WIDTH_TOLERANCE
}

/// Picks the gap and segment for a request of `width` targeting `near`.
///
/// Returns `None` when no gap is wide enough.
pub(crate) fn choose(
    gaps: &[LineInterval],
    width: LineLength,
    near: LinePosition,
) -> Option<Choice> {
    choose_containing(gaps, width, near).or_else(|| choose_nearest_edge(gaps, width, near))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64) -> LineInterval {
        LineInterval::new(LinePosition::new(start), LinePosition::new(end))
    }

    fn len(v: f64) -> LineLength {
        LineLength::new(v)
    }

    fn pos(v: f64) -> LinePosition {
        LinePosition::new(v)
    }

    fn pick(gaps: &[LineInterval], width: f64, near: f64) -> Option<(usize, (f64, f64))> {
        choose(gaps, len(width), pos(near)).map(|c| {
            (
                c.gap_index,
                (c.segment.start().value(), c.segment.end().value()),
            )
        })
    }

    #[test]
    fn test_centered_when_it_fits() {
        assert_eq!(pick(&[iv(0.0, 10.0)], 4.0, 5.0), Some((0, (3.0, 7.0))));
    }

    #[test]
    fn test_left_overhang_shifts_right() {
        assert_eq!(pick(&[iv(0.0, 10.0)], 4.0, 1.0), Some((0, (0.0, 4.0))));
    }

    #[test]
    fn test_right_overhang_shifts_left() {
        assert_eq!(pick(&[iv(0.0, 10.0)], 4.0, 9.5), Some((0, (6.0, 10.0))));
    }

    #[test]
    fn test_exact_fit_consumes_whole_gap() {
        assert_eq!(pick(&[iv(8.0, 10.0)], 2.0, 9.0), Some((0, (8.0, 10.0))));
    }

    #[test]
    fn test_too_narrow_gaps_are_ignored() {
        assert_eq!(pick(&[iv(0.0, 2.0), iv(8.0, 10.0)], 3.0, 9.0), None);
        assert_eq!(pick(&[], 1.0, 0.0), None);
    }

    #[test]
    fn test_containing_gap_beats_closer_edges_elsewhere() {
        // near = 3.9 sits inside (0, 4) but right next to (4.5, 20).
        let gaps = [iv(4.5, 20.0), iv(0.0, 4.0)];
        assert_eq!(pick(&gaps, 2.0, 3.9), Some((1, (2.0, 4.0))));
    }

    #[test]
    fn test_narrow_containing_gap_is_skipped() {
        // (0, 2) contains near but cannot host width 3.
        let gaps = [iv(0.0, 2.0), iv(8.0, 10.0), iv(4.0, 7.5)];
        assert_eq!(pick(&gaps, 3.0, 1.0), Some((2, (4.0, 7.0))));
    }

    #[test]
    fn test_first_spanning_gap_wins_on_shared_edge() {
        // Only reachable with hand-built touching gaps; the packer never produces them.
        let gaps = [iv(0.0, 5.0), iv(5.0, 10.0)];
        assert_eq!(pick(&gaps, 2.0, 5.0), Some((0, (3.0, 5.0))));
    }

    #[test]
    fn test_nearest_edge_prefers_closest_gap() {
        let gaps = [iv(8.0, 10.0), iv(0.0, 2.0)];
        assert_eq!(pick(&gaps, 2.0, 4.0), Some((1, (0.0, 2.0))));
    }

    #[test]
    fn test_nearest_edge_aligns_to_near_side() {
        // near left of gap: align to gap start.
        assert_eq!(pick(&[iv(6.0, 10.0)], 2.0, 3.0), Some((0, (6.0, 8.0))));
        // near right of gap: align to gap end.
        assert_eq!(pick(&[iv(0.0, 4.0)], 2.0, 7.0), Some((0, (2.0, 4.0))));
    }

    #[test]
    fn test_nearest_edge_tie_goes_to_first() {
        // near = 5 is 2.0 from both (0, 3) and (7, 10).
        let gaps = [iv(7.0, 10.0), iv(0.0, 3.0)];
        assert_eq!(pick(&gaps, 1.0, 5.0), Some((0, (7.0, 8.0))));
    }

    #[test]
    fn test_target_beyond_line_hugs_outer_edge() {
        assert_eq!(pick(&[iv(0.0, 10.0)], 3.0, 25.0), Some((0, (7.0, 10.0))));
        assert_eq!(pick(&[iv(0.0, 10.0)], 3.0, -5.0), Some((0, (0.0, 3.0))));
    }

    #[test]
    fn test_resolves_accepts_exact_segments() {
        assert!(resolves(iv(3.0, 7.0), len(4.0)));
        assert!(resolves(iv(0.0, 0.25), len(0.25)));
    }

    #[test]
    fn test_resolves_rejects_collapsed_segment() {
        // Half of 1e-10 is far below the spacing of doubles around 5e6.
        let choice = choose(&[iv(0.0, 1e7)], len(1e-10), pos(5e6)).unwrap();
        assert!(choice.segment.is_empty());
        assert!(!resolves(choice.segment, len(1e-10)));
    }

    #[test]
    fn test_resolves_rejects_mismatched_extent() {
        assert!(!resolves(iv(0.0, 4.0), len(2.0)));
        assert!(!resolves(iv(0.0, 1.0), len(2.0)));
    }

    #[test]
    fn test_placement_accessors() {
        let placement = Placement::new(iv(0.0, 4.0), pos(1.0));
        assert_eq!(placement.start(), pos(0.0));
        assert_eq!(placement.end(), pos(4.0));
        assert_eq!(placement.distance(), len(1.0));
        assert_eq!(placement.width(), len(4.0));
        assert_eq!(placement.segment(), iv(0.0, 4.0));
        assert_eq!(placement.into_parts(), (0.0, 4.0, 1.0));
        assert_eq!(placement.to_string(), "Placement([0, 4), distance 1)");
    }
}
