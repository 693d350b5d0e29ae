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

use crate::problem::crane::CraneIdentifier;
use quay_alloc_core::prelude::QuayPosition;
use std::collections::BTreeMap;

/// Outcome of a solve, mirroring the CP-SAT status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    ModelInvalid,
    Unknown,
}

impl SolveStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::ModelInvalid => "MODEL_INVALID",
            SolveStatus::Unknown => "UNKNOWN",
        }
    }

    /// True iff a vessel schedule was extracted.
    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The schedule of a single vessel: where it berths, which shifts it
/// occupies, and which cranes work it in each active shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselSolution {
    vessel_name: String,
    berth_position: QuayPosition,
    start_shift: usize,
    end_shift: usize,
    assigned_cranes: BTreeMap<usize, Vec<CraneIdentifier>>,
}

impl VesselSolution {
    #[inline]
    pub fn new(
        vessel_name: impl Into<String>,
        berth_position: QuayPosition,
        start_shift: usize,
        end_shift: usize,
        assigned_cranes: BTreeMap<usize, Vec<CraneIdentifier>>,
    ) -> Self {
        Self {
            vessel_name: vessel_name.into(),
            berth_position,
            start_shift,
            end_shift,
            assigned_cranes,
        }
    }

    #[inline]
    pub fn vessel_name(&self) -> &str {
        &self.vessel_name
    }

    #[inline]
    pub fn berth_position(&self) -> QuayPosition {
        self.berth_position
    }

    #[inline]
    pub fn start_shift(&self) -> usize {
        self.start_shift
    }

    /// One past the last active shift.
    #[inline]
    pub fn end_shift(&self) -> usize {
        self.end_shift
    }

    #[inline]
    pub fn duration(&self) -> usize {
        self.end_shift.saturating_sub(self.start_shift)
    }

    /// Cranes per active shift, keyed by shift index.
    #[inline]
    pub fn assigned_cranes(&self) -> &BTreeMap<usize, Vec<CraneIdentifier>> {
        &self.assigned_cranes
    }

    #[inline]
    pub fn cranes_in_shift(&self, shift: usize) -> &[CraneIdentifier] {
        self.assigned_cranes
            .get(&shift)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A complete solve result: one [`VesselSolution`] per vessel on
/// success, the objective value and the faithful solver status.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    vessel_solutions: Vec<VesselSolution>,
    objective_value: f64,
    status: SolveStatus,
}

impl Solution {
    #[inline]
    pub fn new(
        vessel_solutions: Vec<VesselSolution>,
        objective_value: f64,
        status: SolveStatus,
    ) -> Self {
        Self {
            vessel_solutions,
            objective_value,
            status,
        }
    }

    /// The empty solution returned for unsuccessful statuses.
    #[inline]
    pub fn empty(status: SolveStatus) -> Self {
        Self::new(Vec::new(), 0.0, status)
    }

    #[inline]
    pub fn vessel_solutions(&self) -> &[VesselSolution] {
        &self.vessel_solutions
    }

    #[inline]
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    #[inline]
    pub fn status(&self) -> SolveStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn cid(s: &str) -> CraneIdentifier {
        CraneIdentifier::new(s.to_string())
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(SolveStatus::Optimal.as_str(), "OPTIMAL");
        assert_eq!(SolveStatus::ModelInvalid.as_str(), "MODEL_INVALID");
        assert!(SolveStatus::Feasible.has_solution());
        assert!(!SolveStatus::Unknown.has_solution());
    }

    #[test]
    fn test_vessel_solution_accessors() {
        let mut cranes = BTreeMap::new();
        cranes.insert(2, vec![cid("STS-01"), cid("STS-02")]);
        let vs = VesselSolution::new("V1", QuayPosition::new(40), 2, 4, cranes);
        assert_eq!(vs.duration(), 2);
        assert_eq!(vs.cranes_in_shift(2).len(), 2);
        assert!(vs.cranes_in_shift(3).is_empty());
    }

    #[test]
    fn test_empty_solution() {
        let s = Solution::empty(SolveStatus::Infeasible);
        assert!(s.vessel_solutions().is_empty());
        assert_eq!(s.objective_value(), 0.0);
        assert_eq!(s.status(), SolveStatus::Infeasible);
    }
}
