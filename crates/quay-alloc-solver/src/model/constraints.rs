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

//! The constraint families. Space-time disjointness is encoded with the
//! pairwise four-literal disjunction (left / right / earlier / later);
//! the toggle-gated families are omitted entirely when disabled and
//! never touch variable domains.

use crate::model::vars::{DecisionVariables, MoveKey};
use crate::model::{sum_bool, sum_int};
use crate::prep::PreparedVessel;
use cp_sat::builder::CpModelBuilder;
use quay_alloc_model::problem::{LATERAL_CLEARANCE, Problem};

/// Post every constraint family that the problem's rules enable.
pub fn apply(
    cp: &mut CpModelBuilder,
    vars: &DecisionVariables,
    problem: &Problem,
    prepared: &[PreparedVessel],
) {
    spatial_bounds(cp, vars, problem);
    no_vessel_overlap(cp, vars, problem);
    workload_fulfillment(cp, vars, problem);

    let rules = problem.rules();
    if rules.forbidden_zones() {
        forbidden_zones(cp, vars, problem);
    }
    if rules.crane_capacity() {
        crane_capacity(cp, vars, problem);
    }
    if rules.max_cranes() {
        max_cranes_per_vessel(cp, vars, problem);
    }
    if rules.min_cranes_on_arrival() {
        min_work_when_active(cp, vars, problem);
    }
    if rules.crane_reach() {
        crane_reach(cp, vars, problem, rules.crane_reach_strict());
    }
    if rules.sts_non_crossing() {
        sts_non_crossing(cp, vars, problem);
    }
    if rules.shifting_gang() {
        shifting_gang(cp, vars, problem, prepared);
    }
}

/// Clearance from both quay ends. Redundant with the position domain,
/// but posted explicitly like the rest of the spatial family.
fn spatial_bounds(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    let clearance = LATERAL_CLEARANCE.value();
    let quay_length = problem.berth().length().value();
    for (i, vessel) in problem.vessels().iter().enumerate() {
        cp.add_ge(vars.pos(i), clearance);
        cp.add_le(vars.pos(i) + vessel.loa().value(), quay_length - clearance);
    }
}

/// Two vessels must be apart in space (with clearance) or apart in
/// time, for every unordered pair.
fn no_vessel_overlap(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    let clearance = LATERAL_CLEARANCE.value();
    let n = problem.vessels().len();
    for i in 0..n {
        let loa_i = problem.vessels()[i].loa().value();
        for j in (i + 1)..n {
            let loa_j = problem.vessels()[j].loa().value();

            let i_left_of_j = cp.new_bool_var();
            let j_left_of_i = cp.new_bool_var();
            let i_before_j = cp.new_bool_var();
            let j_before_i = cp.new_bool_var();

            cp.add_le(vars.pos(i) + (loa_i + clearance), vars.pos(j))
                .only_enforce_if([i_left_of_j]);
            cp.add_le(vars.pos(j) + (loa_j + clearance), vars.pos(i))
                .only_enforce_if([j_left_of_i]);
            cp.add_le(vars.end(i), vars.start(j))
                .only_enforce_if([i_before_j]);
            cp.add_le(vars.end(j), vars.start(i))
                .only_enforce_if([j_before_i]);

            cp.add_or([i_left_of_j, j_left_of_i, i_before_j, j_before_i]);
        }
    }
}

/// The vessel rectangle (clearance included) must avoid each forbidden
/// space-time block.
fn forbidden_zones(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    let clearance = LATERAL_CLEARANCE.value();
    for (i, vessel) in problem.vessels().iter().enumerate() {
        let loa = vessel.loa().value();
        for zone in problem.forbidden_zones() {
            let zone_start = zone.span().start().value();
            let zone_end = zone.span().end().value();
            let shifts = zone.shifts();

            let left_of_zone = cp.new_bool_var();
            let right_of_zone = cp.new_bool_var();
            let before_zone = cp.new_bool_var();
            let after_zone = cp.new_bool_var();

            cp.add_le(vars.pos(i) + (loa + clearance), zone_start)
                .only_enforce_if([left_of_zone]);
            cp.add_ge(vars.pos(i), zone_end).only_enforce_if([right_of_zone]);
            cp.add_le(vars.end(i), shifts.start as i64)
                .only_enforce_if([before_zone]);
            cp.add_ge(vars.start(i), shifts.end as i64)
                .only_enforce_if([after_zone]);

            cp.add_or([left_of_zone, right_of_zone, before_zone, after_zone]);
        }
    }
}

/// The move variables of each vessel must cover its whole workload.
fn workload_fulfillment(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    for (i, vessel) in problem.vessels().iter().enumerate() {
        cp.add_ge(sum_int(vars.vessel_moves(i)), vessel.workload());
    }
}

/// A crane never exceeds its physical maximum within one shift, no
/// matter how its work is split across vessels.
fn crane_capacity(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    for t in 0..problem.num_shifts() {
        for (k, crane) in problem.cranes().iter().enumerate() {
            let moves = vars.crane_shift_moves(k, t);
            if moves.is_empty() {
                continue;
            }
            cp.add_le(sum_int(moves), crane.max_productivity());
        }
    }
}

/// No more concurrent cranes on a vessel than its geometry admits.
fn max_cranes_per_vessel(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    for (i, vessel) in problem.vessels().iter().enumerate() {
        for t in 0..problem.num_shifts() {
            let actives = vars.vessel_shift_crane_actives(i, t);
            if actives.is_empty() {
                continue;
            }
            cp.add_le(sum_bool(actives), vessel.max_cranes() as i64);
        }
    }
}

/// An occupied shift performs at least one move. With no move variables
/// in reach the sum is empty and the shift simply cannot be active.
fn min_work_when_active(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    for i in 0..problem.vessels().len() {
        for t in 0..problem.num_shifts() {
            cp.add_ge(sum_int(vars.vessel_shift_moves(i, t)), 1)
                .only_enforce_if([vars.active(i, t)]);
        }
    }
}

/// An engaged crane must be able to reach the vessel's bow. The stern
/// bound changes historical behaviour and is gated separately.
fn crane_reach(
    cp: &mut CpModelBuilder,
    vars: &DecisionVariables,
    problem: &Problem,
    strict: bool,
) {
    for (key, engaged) in vars.iter_crane_active() {
        let crane = &problem.cranes()[key.crane];
        cp.add_ge(vars.pos(key.vessel), crane.reach().start().value())
            .only_enforce_if([engaged]);
        if strict {
            let loa = problem.vessels()[key.vessel].loa().value();
            cp.add_le(vars.pos(key.vessel) + loa, crane.reach().end().value())
                .only_enforce_if([engaged]);
        }
    }
}

/// Rail-bound STS cranes cannot pass each other: whenever a lower-
/// indexed STS crane and a higher-indexed one are engaged on different
/// vessels in the same shift, the vessels must be ordered accordingly.
fn sts_non_crossing(cp: &mut CpModelBuilder, vars: &DecisionVariables, problem: &Problem) {
    let sts: Vec<usize> = problem.iter_sts_cranes().map(|(k, _)| k).collect();
    let n = problem.vessels().len();

    for (idx1, &k1) in sts.iter().enumerate() {
        for &k2 in sts.iter().skip(idx1 + 1) {
            for t in 0..problem.num_shifts() {
                for a in 0..n {
                    for b in 0..n {
                        if a == b {
                            continue;
                        }
                        let lower = vars.crane_active(MoveKey {
                            shift: t,
                            crane: k1,
                            vessel: a,
                        });
                        let upper = vars.crane_active(MoveKey {
                            shift: t,
                            crane: k2,
                            vessel: b,
                        });
                        if let (Some(lower), Some(upper)) = (lower, upper) {
                            cp.add_le(vars.pos(a), vars.pos(b))
                                .only_enforce_if([lower, upper]);
                        }
                    }
                }
            }
        }
    }
}

/// A gang that keeps working the vessel next shift runs at full
/// throttle this shift; only the final shift may run partial.
fn shifting_gang(
    cp: &mut CpModelBuilder,
    vars: &DecisionVariables,
    problem: &Problem,
    prepared: &[PreparedVessel],
) {
    for (i, vessel) in problem.vessels().iter().enumerate() {
        for t in 0..problem.num_shifts() {
            let move_keys: Vec<MoveKey> = vars
                .iter_moves()
                .filter(|(k, _)| k.vessel == i && k.shift == t)
                .map(|(k, _)| k)
                .collect();
            if move_keys.is_empty() {
                continue;
            }

            // is_intermediate <=> end[i] >= t + 2, i.e. t is not the
            // vessel's final shift.
            let t_i64 = t as i64;
            let is_intermediate = cp.new_bool_var();
            cp.add_ge(vars.end(i), t_i64 + 2)
                .only_enforce_if([is_intermediate]);
            cp.add_le(vars.end(i), t_i64 + 1)
                .only_enforce_if([!is_intermediate]);

            for key in move_keys {
                let mv = vars.moves(key).expect("key taken from the move grid");
                let engaged = vars
                    .crane_active(key)
                    .expect("indicators mirror the move grid");
                let crane = &problem.cranes()[key.crane];
                let limit = prepared[i].move_limit(crane, vessel, t);
                cp.add_eq(mv, limit)
                    .only_enforce_if([engaged, is_intermediate]);
            }
        }
    }
}
