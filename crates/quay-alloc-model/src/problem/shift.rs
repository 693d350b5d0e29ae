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

use chrono::{Duration, NaiveDateTime};

/// Hours per work shift. The horizon is sliced into consecutive
/// shifts of this length starting at midnight of the start date.
pub const SHIFT_HOURS: i64 = 6;

/// One operational shift of the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    index: usize,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Shift {
    #[inline]
    pub fn new(index: usize, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { index, start, end }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[inline]
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }

    /// Label used in reports and the solution bundle: `DDMMYYYY-HHMM`.
    #[inline]
    pub fn label(&self) -> String {
        self.start.format("%d%m%Y-%H%M").to_string()
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The ordered sequence of work shifts covering the planning horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCalendar {
    shifts: Vec<Shift>,
}

impl ShiftCalendar {
    /// Generate `num_shifts` consecutive shifts of [`SHIFT_HOURS`] hours,
    /// the first one starting at midnight of `start_date`.
    pub fn generate(start_date: chrono::NaiveDate, num_shifts: usize) -> Self {
        let mut shifts = Vec::with_capacity(num_shifts);
        let mut start = start_date.and_hms_opt(0, 0, 0).expect("midnight is valid");
        for index in 0..num_shifts {
            let end = start + Duration::hours(SHIFT_HOURS);
            shifts.push(Shift::new(index, start, end));
            start = end;
        }
        Self { shifts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shift> {
        self.shifts.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter()
    }

    #[inline]
    pub fn labels(&self) -> Vec<String> {
        self.shifts.iter().map(Shift::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cal(n: usize) -> ShiftCalendar {
        ShiftCalendar::generate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), n)
    }

    #[test]
    fn test_generate_slices_days_into_four_shifts() {
        let c = cal(5);
        assert_eq!(c.len(), 5);
        let s0 = c.get(0).unwrap();
        assert_eq!(s0.duration_hours(), 6);
        assert_eq!(s0.label(), "31122025-0000");
        assert_eq!(c.get(3).unwrap().label(), "31122025-1800");
        // The fifth shift rolls over to the next day.
        assert_eq!(c.get(4).unwrap().label(), "01012026-0000");
    }

    #[test]
    fn test_shifts_are_contiguous() {
        let c = cal(4);
        for w in c.shifts.windows(2) {
            assert_eq!(w[0].end(), w[1].start());
        }
    }

    #[test]
    fn test_labels_match_display() {
        let c = cal(2);
        assert_eq!(c.labels(), vec!["31122025-0000", "31122025-0600"]);
        assert_eq!(c.get(1).unwrap().to_string(), "31122025-0600");
    }
}
