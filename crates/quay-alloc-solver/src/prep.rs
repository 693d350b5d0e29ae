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

//! Per-vessel preprocessing: feasible berth positions from the depth
//! profile, and the effective arrival within the horizon.

use crate::err::NoBerthPositionError;
use quay_alloc_model::problem::{Crane, LATERAL_CLEARANCE, Problem, Vessel};
use quay_alloc_model::problem::crane::arrival_scaled_limit;
use quay_alloc_core::prelude::QuayPosition;
use rangemap::RangeSet;

/// What the model builder needs to know about one vessel beyond its raw
/// description: the depth-feasible berth positions (as maximal
/// contiguous runs) and the clamped arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedVessel {
    index: usize,
    arrival_shift: usize,
    arrival_fraction: f64,
    position_runs: Vec<(i64, i64)>,
}

impl PreparedVessel {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Arrival shift index, clamped into the horizon.
    #[inline]
    pub fn arrival_shift(&self) -> usize {
        self.arrival_shift
    }

    /// Usable fraction of the arrival shift, in `(0, 1]`.
    #[inline]
    pub fn arrival_fraction(&self) -> f64 {
        self.arrival_fraction
    }

    /// Maximal runs `[lo, hi]` (inclusive) of feasible berth positions,
    /// ascending. Never empty.
    #[inline]
    pub fn position_runs(&self) -> &[(i64, i64)] {
        &self.position_runs
    }

    #[inline]
    pub fn min_position(&self) -> i64 {
        self.position_runs.first().map(|r| r.0).unwrap_or(0)
    }

    #[inline]
    pub fn max_position(&self) -> i64 {
        self.position_runs.last().map(|r| r.1).unwrap_or(0)
    }

    /// The per-shift move limit `crane` delivers for this vessel in
    /// `shift`, scaled down on the arrival shift.
    pub fn move_limit(&self, crane: &Crane, vessel: &Vessel, shift: usize) -> i64 {
        let base = crane.productivity_for(vessel.productivity_preference());
        if shift == self.arrival_shift {
            arrival_scaled_limit(base, self.arrival_fraction)
        } else {
            base
        }
    }
}

/// Enumerate every berth position of `vessel` that keeps the clearance
/// margins and has enough water under the whole hull.
fn feasible_positions(problem: &Problem, vessel: &Vessel) -> Vec<(i64, i64)> {
    let berth = problem.berth();
    let clearance = LATERAL_CLEARANCE.value();
    let first = clearance;
    let last = berth.length().value() - vessel.loa().value() - clearance;

    let mut feasible: RangeSet<i64> = RangeSet::new();
    for p in first..=last {
        let depth = berth.min_depth_over(QuayPosition::new(p), vessel.loa());
        if depth >= vessel.draft() {
            feasible.insert(p..p + 1);
        }
    }

    feasible.iter().map(|r| (r.start, r.end - 1)).collect()
}

/// Run the preprocessor over every vessel, in index order.
///
/// Short-circuits with [`NoBerthPositionError`] as soon as one vessel
/// has nowhere to berth; the caller reports the whole problem as
/// infeasible without invoking the engine.
pub fn prepare(problem: &Problem) -> Result<Vec<PreparedVessel>, NoBerthPositionError> {
    let horizon = problem.num_shifts();
    let mut prepared = Vec::with_capacity(problem.vessels().len());

    for (index, vessel) in problem.vessels().iter().enumerate() {
        let position_runs = feasible_positions(problem, vessel);
        if position_runs.is_empty() {
            return Err(NoBerthPositionError::new(vessel.name()));
        }

        let (arrival_shift, arrival_fraction) = vessel.arrival_in_horizon(horizon);
        prepared.push(PreparedVessel {
            index,
            arrival_shift,
            arrival_fraction,
            position_runs,
        });
    }

    Ok(prepared)
}
