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

use quay_alloc_core::prelude::{Depth, QuayLength, QuayPosition, SpaceInterval};
use std::collections::BTreeMap;

/// Mandatory lateral clearance between adjacent vessels and between a
/// vessel and either quay end.
pub const LATERAL_CLEARANCE: QuayLength = QuayLength::new(40);

/// The quay: a fixed length and a piecewise-constant depth profile.
///
/// The profile maps a position to the depth that holds from that position
/// up to the next mapped position; `depth_at(x)` is the depth of the
/// greatest key `<= x`. Positions before the first key have depth zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Berth {
    length: QuayLength,
    depth_profile: BTreeMap<QuayPosition, Depth>,
}

impl Berth {
    #[inline]
    pub fn new<I>(length: QuayLength, depth_profile: I) -> Self
    where
        I: IntoIterator<Item = (QuayPosition, Depth)>,
    {
        Self {
            length,
            depth_profile: depth_profile.into_iter().collect(),
        }
    }

    /// A berth with one uniform depth along its whole length.
    #[inline]
    pub fn with_uniform_depth(length: QuayLength, depth: Depth) -> Self {
        Self::new(length, [(QuayPosition::zero(), depth)])
    }

    #[inline]
    pub fn length(&self) -> QuayLength {
        self.length
    }

    #[inline]
    pub fn extent(&self) -> SpaceInterval {
        SpaceInterval::new(QuayPosition::zero(), QuayPosition::zero() + self.length)
    }

    #[inline]
    pub fn depth_profile(&self) -> &BTreeMap<QuayPosition, Depth> {
        &self.depth_profile
    }

    /// Step lookup: the depth of the greatest profile key `<= position`.
    #[inline]
    pub fn depth_at(&self, position: QuayPosition) -> Depth {
        self.depth_profile
            .range(..=position)
            .next_back()
            .map(|(_, &d)| d)
            .unwrap_or(Depth::zero())
    }

    /// The shallowest depth over the half-open span `[start, start + len)`.
    pub fn min_depth_over(&self, start: QuayPosition, len: QuayLength) -> Depth {
        let end = start + len;
        let mut min = self.depth_at(start);
        for (_, &d) in self.depth_profile.range(start..end) {
            if d < min {
                min = d;
            }
        }
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn qp(v: i64) -> QuayPosition {
        QuayPosition::new(v)
    }

    #[inline]
    fn ql(v: i64) -> QuayLength {
        QuayLength::new(v)
    }

    #[inline]
    fn dm(v: f64) -> Depth {
        Depth::from_metres(v)
    }

    fn stepped() -> Berth {
        Berth::new(ql(2000), [(qp(0), dm(16.0)), (qp(1200), dm(12.0))])
    }

    #[test]
    fn test_depth_at_is_a_step_function() {
        let b = stepped();
        assert_eq!(b.depth_at(qp(0)), dm(16.0));
        assert_eq!(b.depth_at(qp(1199)), dm(16.0));
        assert_eq!(b.depth_at(qp(1200)), dm(12.0));
        assert_eq!(b.depth_at(qp(1999)), dm(12.0));
    }

    #[test]
    fn test_depth_before_first_key_is_zero() {
        let b = Berth::new(ql(100), [(qp(50), dm(10.0))]);
        assert_eq!(b.depth_at(qp(0)), Depth::zero());
        assert_eq!(b.depth_at(qp(49)), Depth::zero());
        assert_eq!(b.depth_at(qp(50)), dm(10.0));
    }

    #[test]
    fn test_min_depth_over_spans_a_step() {
        let b = stepped();
        // Entirely in the deep section.
        assert_eq!(b.min_depth_over(qp(100), ql(300)), dm(16.0));
        // Straddles the step at 1200.
        assert_eq!(b.min_depth_over(qp(1100), ql(200)), dm(12.0));
        // Ends exactly at the step: the shallow section is not touched.
        assert_eq!(b.min_depth_over(qp(900), ql(300)), dm(16.0));
    }

    #[test]
    fn test_uniform_depth() {
        let b = Berth::with_uniform_depth(ql(1000), dm(16.0));
        assert_eq!(b.depth_at(qp(0)), dm(16.0));
        assert_eq!(b.min_depth_over(qp(500), ql(400)), dm(16.0));
    }

    #[test]
    fn test_extent() {
        let b = stepped();
        assert_eq!(b.extent(), SpaceInterval::new(qp(0), qp(2000)));
    }
}
