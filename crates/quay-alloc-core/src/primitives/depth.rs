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

/// Water depth in whole centimetres.
///
/// Configuration files carry depths and drafts as fractional metres;
/// converting to centimetres once at the boundary keeps every later
/// comparison exact integer arithmetic.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Depth(i64);

impl Depth {
    #[inline]
    pub const fn from_centimetres(cm: i64) -> Self {
        Self(cm)
    }

    #[inline]
    pub fn from_metres(metres: f64) -> Self {
        Self((metres * 100.0).round() as i64)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn centimetres(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn metres(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Depth({:.2}m)", self.metres())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metre_round_trip() {
        assert_eq!(Depth::from_metres(16.0).centimetres(), 1600);
        assert_eq!(Depth::from_metres(13.75).centimetres(), 1375);
        assert_eq!(Depth::from_metres(13.75).metres(), 13.75);
    }

    #[test]
    fn test_rounding_is_to_nearest() {
        assert_eq!(Depth::from_metres(12.004).centimetres(), 1200);
        assert_eq!(Depth::from_metres(12.006).centimetres(), 1201);
    }

    #[test]
    fn test_ordering() {
        assert!(Depth::from_metres(12.0) < Depth::from_metres(12.5));
        assert_eq!(Depth::zero().centimetres(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Depth::from_metres(14.5).to_string(), "Depth(14.50m)");
    }
}
