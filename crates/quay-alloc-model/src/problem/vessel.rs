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

use crate::problem::shift::SHIFT_HOURS;
use crate::problem::zone::YardZonePreference;
use quay_alloc_core::prelude::{Depth, QuayLength};
use serde::{Deserialize, Serialize};

/// Which crane productivity figure applies when the crane works this vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductivityPreference {
    #[serde(rename = "MIN")]
    Min,
    #[serde(rename = "INTERMEDIATE")]
    Intermediate,
    #[serde(rename = "MAX")]
    Max,
}

impl std::fmt::Display for ProductivityPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductivityPreference::Min => write!(f, "MIN"),
            ProductivityPreference::Intermediate => write!(f, "INTERMEDIATE"),
            ProductivityPreference::Max => write!(f, "MAX"),
        }
    }
}

/// An arriving vessel and its service demand.
///
/// The raw arrival is kept as `(shift, hour offset into that shift)`
/// exactly as configured; deriving the clamped arrival shift index and
/// the usable fraction of the arrival shift is the preprocessor's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    name: String,
    loa: QuayLength,
    draft: Depth,
    workload: i64,
    max_cranes: usize,
    productivity_preference: ProductivityPreference,
    arrival_shift: usize,
    arrival_hour_offset: i64,
    target_zones: Vec<YardZonePreference>,
}

impl Vessel {
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        name: impl Into<String>,
        loa: QuayLength,
        draft: Depth,
        workload: i64,
        max_cranes: usize,
        productivity_preference: ProductivityPreference,
        arrival_shift: usize,
        arrival_hour_offset: i64,
        target_zones: Vec<YardZonePreference>,
    ) -> Self {
        Self {
            name: name.into(),
            loa,
            draft,
            workload,
            max_cranes,
            productivity_preference,
            arrival_shift,
            arrival_hour_offset,
            target_zones,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length overall in metres.
    #[inline]
    pub fn loa(&self) -> QuayLength {
        self.loa
    }

    #[inline]
    pub fn draft(&self) -> Depth {
        self.draft
    }

    /// Total container moves this call must perform.
    #[inline]
    pub fn workload(&self) -> i64 {
        self.workload
    }

    /// Hard cap on cranes working the vessel in any one shift.
    #[inline]
    pub fn max_cranes(&self) -> usize {
        self.max_cranes
    }

    #[inline]
    pub fn productivity_preference(&self) -> ProductivityPreference {
        self.productivity_preference
    }

    /// The shift in which the vessel is expected, before clamping.
    #[inline]
    pub fn arrival_shift(&self) -> usize {
        self.arrival_shift
    }

    /// Hours past the start of the arrival shift at which the vessel
    /// actually becomes workable. May exceed the shift length, in which
    /// case the arrival rolls into a later shift.
    #[inline]
    pub fn arrival_hour_offset(&self) -> i64 {
        self.arrival_hour_offset
    }

    #[inline]
    pub fn target_zones(&self) -> &[YardZonePreference] {
        &self.target_zones
    }

    /// The declared target zone with the largest volume, if any.
    #[inline]
    pub fn best_target_zone(&self) -> Option<&YardZonePreference> {
        self.target_zones
            .iter()
            .max_by(|a, b| a.volume().total_cmp(&b.volume()))
    }

    /// The effective arrival within a horizon of `num_shifts` shifts:
    /// the clamped arrival shift index and the usable fraction of it.
    ///
    /// An hour offset of a full shift or more rolls the arrival into a
    /// later shift; an arrival past the horizon is clamped to the last
    /// shift with a full fraction.
    pub fn arrival_in_horizon(&self, num_shifts: usize) -> (usize, f64) {
        debug_assert!(num_shifts > 0);
        let offset = self.arrival_hour_offset.max(0);
        let shift = self.arrival_shift + (offset / SHIFT_HOURS) as usize;
        if shift >= num_shifts {
            return (num_shifts - 1, 1.0);
        }
        let remainder = offset % SHIFT_HOURS;
        if remainder == 0 {
            (shift, 1.0)
        } else {
            (shift, 1.0 - remainder as f64 / SHIFT_HOURS as f64)
        }
    }
}
