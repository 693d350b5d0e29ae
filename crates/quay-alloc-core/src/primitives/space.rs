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

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point along the quay, measured in whole metres from the western end.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct QuayPosition(i64);

/// A signed distance along the quay in whole metres.
///
/// Lengths are signed so that `QuayPosition - QuayPosition` is total;
/// vessel lengths and clearances are always non-negative by construction.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct QuayLength(i64);

impl QuayPosition {
    #[inline]
    pub const fn new(metres: i64) -> Self {
        Self(metres)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl QuayLength {
    #[inline]
    pub const fn new(metres: i64) -> Self {
        Self(metres)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Integer half of this length, rounded towards zero.
    #[inline]
    pub const fn half(self) -> Self {
        Self(self.0 / 2)
    }
}

impl std::fmt::Display for QuayPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QuayPosition({}m)", self.0)
    }
}

impl std::fmt::Display for QuayLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QuayLength({}m)", self.0)
    }
}

impl Add<QuayLength> for QuayPosition {
    type Output = QuayPosition;

    #[inline]
    fn add(self, rhs: QuayLength) -> Self::Output {
        QuayPosition(self.0 + rhs.0)
    }
}

impl AddAssign<QuayLength> for QuayPosition {
    #[inline]
    fn add_assign(&mut self, rhs: QuayLength) {
        self.0 += rhs.0;
    }
}

impl Sub<QuayLength> for QuayPosition {
    type Output = QuayPosition;

    #[inline]
    fn sub(self, rhs: QuayLength) -> Self::Output {
        QuayPosition(self.0 - rhs.0)
    }
}

impl SubAssign<QuayLength> for QuayPosition {
    #[inline]
    fn sub_assign(&mut self, rhs: QuayLength) {
        self.0 -= rhs.0;
    }
}

impl Sub<QuayPosition> for QuayPosition {
    type Output = QuayLength;

    #[inline]
    fn sub(self, rhs: QuayPosition) -> Self::Output {
        QuayLength(self.0 - rhs.0)
    }
}

impl Add for QuayLength {
    type Output = QuayLength;

    #[inline]
    fn add(self, rhs: QuayLength) -> Self::Output {
        QuayLength(self.0 + rhs.0)
    }
}

impl AddAssign for QuayLength {
    #[inline]
    fn add_assign(&mut self, rhs: QuayLength) {
        self.0 += rhs.0;
    }
}

impl Sub for QuayLength {
    type Output = QuayLength;

    #[inline]
    fn sub(self, rhs: QuayLength) -> Self::Output {
        QuayLength(self.0 - rhs.0)
    }
}

impl SubAssign for QuayLength {
    #[inline]
    fn sub_assign(&mut self, rhs: QuayLength) {
        self.0 -= rhs.0;
    }
}

impl Neg for QuayLength {
    type Output = QuayLength;

    #[inline]
    fn neg(self) -> Self::Output {
        QuayLength(-self.0)
    }
}

impl Sum for QuayLength {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(QuayLength::zero(), Add::add)
    }
}
