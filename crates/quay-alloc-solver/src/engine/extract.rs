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

//! Translation of a CP-SAT response back into a vessel schedule. The
//! extracted [`Solution`] is a pure function of the final variable
//! assignment; the status is propagated exactly as the engine reported
//! it.

use crate::model::vars::DecisionVariables;
use cp_sat::proto::{CpSolverResponse, CpSolverStatus};
use quay_alloc_model::prelude::{SolveStatus, Solution, VesselSolution};
use quay_alloc_model::problem::{CraneIdentifier, Problem};
use quay_alloc_core::prelude::QuayPosition;
use std::collections::BTreeMap;

pub fn status_from_response(status: CpSolverStatus) -> SolveStatus {
    match status {
        CpSolverStatus::Optimal => SolveStatus::Optimal,
        CpSolverStatus::Feasible => SolveStatus::Feasible,
        CpSolverStatus::Infeasible => SolveStatus::Infeasible,
        CpSolverStatus::ModelInvalid => SolveStatus::ModelInvalid,
        CpSolverStatus::Unknown => SolveStatus::Unknown,
    }
}

/// Read the variable assignment out of a successful response and
/// assemble one [`VesselSolution`] per vessel.
pub fn solution_from_response(
    problem: &Problem,
    vars: &DecisionVariables,
    response: &CpSolverResponse,
) -> Solution {
    let status = status_from_response(response.status());
    if !status.has_solution() {
        return Solution::empty(status);
    }

    // shift -> crane ids per vessel, fleet order within a shift. The
    // move map iterates by (shift, crane), so pushing in order is
    // already sorted.
    let mut assignments: Vec<BTreeMap<usize, Vec<CraneIdentifier>>> =
        vec![BTreeMap::new(); problem.vessels().len()];
    for (key, mv) in vars.iter_moves() {
        if mv.solution_value(response) > 0 {
            let crane_id = problem.cranes()[key.crane].id().clone();
            assignments[key.vessel]
                .entry(key.shift)
                .or_default()
                .push(crane_id);
        }
    }

    let mut vessel_solutions = Vec::with_capacity(problem.vessels().len());
    for (i, vessel) in problem.vessels().iter().enumerate() {
        let start = vars.start(i).solution_value(response) as usize;
        let end = vars.end(i).solution_value(response) as usize;
        let pos = vars.pos(i).solution_value(response);

        let assigned: BTreeMap<usize, Vec<CraneIdentifier>> = std::mem::take(&mut assignments[i])
            .into_iter()
            .filter(|(shift, _)| *shift >= start && *shift < end)
            .collect();

        vessel_solutions.push(VesselSolution::new(
            vessel.name(),
            QuayPosition::new(pos),
            start,
            end,
            assigned,
        ));
    }

    Solution::new(vessel_solutions, response.objective_value, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_faithful() {
        assert_eq!(
            status_from_response(CpSolverStatus::Optimal),
            SolveStatus::Optimal
        );
        assert_eq!(
            status_from_response(CpSolverStatus::Feasible),
            SolveStatus::Feasible
        );
        assert_eq!(
            status_from_response(CpSolverStatus::Infeasible),
            SolveStatus::Infeasible
        );
        assert_eq!(
            status_from_response(CpSolverStatus::ModelInvalid),
            SolveStatus::ModelInvalid
        );
        assert_eq!(
            status_from_response(CpSolverStatus::Unknown),
            SolveStatus::Unknown
        );
    }
}
