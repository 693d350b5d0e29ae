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

//! The weighted objective. Start delay dominates, then turnaround,
//! then makespan; the crane-count weight is negative, trading extra
//! gangs for earlier completion, and yard misalignment is the
//! tie-breaker. Weights are fixed for reproducibility.

use crate::model::vars::DecisionVariables;
use crate::model::{sum_bool, sum_int};
use crate::prep::PreparedVessel;
use cp_sat::builder::{CpModelBuilder, IntVar, LinearExpr};
use quay_alloc_model::problem::Problem;

pub const WEIGHT_START_DELAY: i64 = 5000;
pub const WEIGHT_TURNAROUND: i64 = 500;
pub const WEIGHT_MAKESPAN: i64 = 100;
pub const WEIGHT_CRANES_USED: i64 = -100;
pub const WEIGHT_YARD_DISTANCE: i64 = 1;

/// Assemble the five objective terms and set the minimization target.
pub fn apply(
    cp: &mut CpModelBuilder,
    vars: &DecisionVariables,
    problem: &Problem,
    prepared: &[PreparedVessel],
) {
    let n = problem.vessels().len();
    let t_max = problem.num_shifts() as i64;
    let quay_length = problem.berth().length().value();

    let makespan = cp.new_int_var([(0, t_max)]);
    for i in 0..n {
        cp.add_ge(makespan, vars.end(i));
    }

    // Per-vessel delay and turnaround, both measured from the clamped
    // arrival shift: delay = start - arrival, turnaround = end - arrival.
    let mut delay_terms: Vec<IntVar> = Vec::with_capacity(n);
    let mut turnaround_terms: Vec<IntVar> = Vec::with_capacity(n);
    for (i, prep) in prepared.iter().enumerate() {
        let arrival = prep.arrival_shift() as i64;

        let delay = cp.new_int_var([(0, t_max)]);
        cp.add_eq(vars.start(i), delay + arrival);
        delay_terms.push(delay);

        let turnaround = cp.new_int_var([(0, t_max)]);
        cp.add_eq(vars.end(i), turnaround + arrival);
        turnaround_terms.push(turnaround);
    }

    let total_start_delay = cp.new_int_var([(0, t_max * n as i64)]);
    cp.add_eq(total_start_delay, sum_int(delay_terms));

    let total_turnaround = cp.new_int_var([(0, t_max * n as i64)]);
    cp.add_eq(total_turnaround, sum_int(turnaround_terms));

    let total_cranes_used = cp.new_int_var([(0, vars.num_move_vars() as i64)]);
    cp.add_eq(
        total_cranes_used,
        sum_bool(vars.iter_crane_active().map(|(_, v)| v)),
    );

    // Distance between the vessel's midship and the centre of its
    // highest-volume target zone, linearised as dist >= +/-(mid - centre).
    let mut yard_terms: Vec<IntVar> = Vec::with_capacity(n);
    if problem.rules().yard_preferences() {
        for (i, vessel) in problem.vessels().iter().enumerate() {
            let Some(preference) = vessel.best_target_zone() else {
                continue;
            };
            let Some(zone) = problem.yard_zone_by_id(preference.zone_id()) else {
                continue;
            };
            let centre = zone.span().midpoint().value();
            let half_loa = vessel.loa().half().value();

            let dist = cp.new_int_var([(0, quay_length)]);
            cp.add_ge(dist, vars.pos(i) + (half_loa - centre));
            cp.add_ge(LinearExpr::from(dist) + vars.pos(i), centre - half_loa);
            yard_terms.push(dist);
        }
    }

    let total_yard_distance = cp.new_int_var([(0, quay_length * n as i64)]);
    cp.add_eq(total_yard_distance, sum_int(yard_terms));

    cp.minimize(
        total_start_delay * WEIGHT_START_DELAY
            + total_turnaround * WEIGHT_TURNAROUND
            + makespan * WEIGHT_MAKESPAN
            + total_cranes_used * WEIGHT_CRANES_USED
            + total_yard_distance * WEIGHT_YARD_DISTANCE,
    );
}
