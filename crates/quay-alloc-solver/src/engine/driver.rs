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

use crate::engine::extract;
use crate::model;
use crate::prep;
use cp_sat::proto::SatParameters;
use quay_alloc_model::prelude::{SolveStatus, Solution};
use quay_alloc_model::problem::Problem;

/// CP-SAT runs a portfolio across this many workers; one solve is in
/// flight per driver call and owns its model exclusively.
const NUM_SEARCH_WORKERS: i32 = 8;

pub const DEFAULT_TIME_LIMIT_SECONDS: u64 = 60;

/// One-shot solver front end: preprocess, build, search, extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverDriver {
    time_limit_seconds: u64,
}

impl Default for SolverDriver {
    fn default() -> Self {
        Self {
            time_limit_seconds: DEFAULT_TIME_LIMIT_SECONDS,
        }
    }
}

impl SolverDriver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_time_limit_seconds(mut self, seconds: u64) -> Self {
        self.time_limit_seconds = seconds;
        self
    }

    #[inline]
    pub fn time_limit_seconds(&self) -> u64 {
        self.time_limit_seconds
    }

    /// Solve the problem and translate the outcome into a [`Solution`].
    ///
    /// A vessel without any depth-feasible berth position decides the
    /// run before the engine starts: the result is `INFEASIBLE` with an
    /// empty schedule. Engine statuses are propagated unchanged.
    #[tracing::instrument(
        level = "info",
        name = "solve",
        skip(self, problem),
        fields(
            vessels = problem.vessels().len(),
            cranes = problem.cranes().len(),
            shifts = problem.num_shifts(),
        )
    )]
    pub fn solve(&self, problem: &Problem) -> Solution {
        let prepared = match prep::prepare(problem) {
            Ok(prepared) => prepared,
            Err(err) => {
                tracing::warn!("{err}; returning INFEASIBLE without searching");
                return Solution::empty(SolveStatus::Infeasible);
            }
        };

        let built = model::build_model(problem, &prepared);
        tracing::info!(
            move_vars = built.variables().num_move_vars(),
            time_limit_s = self.time_limit_seconds,
            "model built, starting CP-SAT search"
        );

        let params = SatParameters {
            max_time_in_seconds: Some(self.time_limit_seconds as f64),
            num_search_workers: Some(NUM_SEARCH_WORKERS),
            log_search_progress: Some(true),
            ..Default::default()
        };

        let response = built.solve_with(&params);
        let solution = extract::solution_from_response(problem, built.variables(), &response);
        tracing::info!(
            status = %solution.status(),
            objective = solution.objective_value(),
            "search finished"
        );
        solution
    }
}
