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

use crate::prep::PreparedVessel;
use cp_sat::builder::{BoolVar, CpModelBuilder, IntVar};
use quay_alloc_model::problem::Problem;
use std::collections::BTreeMap;

/// Key of a `moves`/`crane_active` variable. Ordered by shift, then
/// crane fleet index, then vessel index; map iteration therefore
/// matches variable creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveKey {
    pub shift: usize,
    pub crane: usize,
    pub vessel: usize,
}

/// Every decision variable of the formulation.
///
/// Creation order is deterministic: per-vessel interval variables
/// first (vessels by index), then the per-shift activity reification
/// (vessels by index, shifts ascending), then the sparse move grid
/// (shifts ascending, cranes by fleet index, vessels by index).
#[derive(Debug)]
pub struct DecisionVariables {
    pos: Vec<IntVar>,
    start: Vec<IntVar>,
    end: Vec<IntVar>,
    duration: Vec<IntVar>,
    active: Vec<Vec<BoolVar>>,
    is_after_start: Vec<Vec<BoolVar>>,
    is_before_end: Vec<Vec<BoolVar>>,
    moves: BTreeMap<MoveKey, IntVar>,
    crane_active: BTreeMap<MoveKey, BoolVar>,
}

impl DecisionVariables {
    #[inline]
    pub fn pos(&self, vessel: usize) -> IntVar {
        self.pos[vessel]
    }

    #[inline]
    pub fn start(&self, vessel: usize) -> IntVar {
        self.start[vessel]
    }

    #[inline]
    pub fn end(&self, vessel: usize) -> IntVar {
        self.end[vessel]
    }

    #[inline]
    pub fn duration(&self, vessel: usize) -> IntVar {
        self.duration[vessel]
    }

    #[inline]
    pub fn active(&self, vessel: usize, shift: usize) -> BoolVar {
        self.active[vessel][shift]
    }

    #[inline]
    pub fn is_after_start(&self, vessel: usize, shift: usize) -> BoolVar {
        self.is_after_start[vessel][shift]
    }

    #[inline]
    pub fn is_before_end(&self, vessel: usize, shift: usize) -> BoolVar {
        self.is_before_end[vessel][shift]
    }

    #[inline]
    pub fn moves(&self, key: MoveKey) -> Option<IntVar> {
        self.moves.get(&key).copied()
    }

    #[inline]
    pub fn crane_active(&self, key: MoveKey) -> Option<BoolVar> {
        self.crane_active.get(&key).copied()
    }

    #[inline]
    pub fn iter_moves(&self) -> impl Iterator<Item = (MoveKey, IntVar)> + '_ {
        self.moves.iter().map(|(&k, &v)| (k, v))
    }

    #[inline]
    pub fn iter_crane_active(&self) -> impl Iterator<Item = (MoveKey, BoolVar)> + '_ {
        self.crane_active.iter().map(|(&k, &v)| (k, v))
    }

    /// All move variables of one vessel, across shifts and cranes.
    #[inline]
    pub fn vessel_moves(&self, vessel: usize) -> Vec<IntVar> {
        self.moves
            .iter()
            .filter(|(k, _)| k.vessel == vessel)
            .map(|(_, &v)| v)
            .collect()
    }

    /// All move variables of one vessel within one shift.
    #[inline]
    pub fn vessel_shift_moves(&self, vessel: usize, shift: usize) -> Vec<IntVar> {
        self.moves
            .iter()
            .filter(|(k, _)| k.vessel == vessel && k.shift == shift)
            .map(|(_, &v)| v)
            .collect()
    }

    /// All move variables of one crane within one shift.
    #[inline]
    pub fn crane_shift_moves(&self, crane: usize, shift: usize) -> Vec<IntVar> {
        self.moves
            .iter()
            .filter(|(k, _)| k.crane == crane && k.shift == shift)
            .map(|(_, &v)| v)
            .collect()
    }

    /// All crane-activity indicators of one vessel within one shift.
    #[inline]
    pub fn vessel_shift_crane_actives(&self, vessel: usize, shift: usize) -> Vec<BoolVar> {
        self.crane_active
            .iter()
            .filter(|(k, _)| k.vessel == vessel && k.shift == shift)
            .map(|(_, &v)| v)
            .collect()
    }

    #[inline]
    pub fn num_vessels(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn num_move_vars(&self) -> usize {
        self.moves.len()
    }
}

/// Create all decision variables and their defining reifications.
pub fn create(
    cp: &mut CpModelBuilder,
    problem: &Problem,
    prepared: &[PreparedVessel],
) -> DecisionVariables {
    let horizon = problem.num_shifts();
    let t_max = horizon as i64;
    let n = problem.vessels().len();

    // Interval variables per vessel. The berth position domain is the
    // union of the depth-feasible runs, so the depth restriction needs
    // no further constraint.
    let mut pos = Vec::with_capacity(n);
    let mut start = Vec::with_capacity(n);
    let mut end = Vec::with_capacity(n);
    let mut duration = Vec::with_capacity(n);

    for prep in prepared {
        let arrival = prep.arrival_shift() as i64;
        pos.push(cp.new_int_var(prep.position_runs().iter().copied()));
        start.push(cp.new_int_var([(arrival, t_max - 1)]));
        end.push(cp.new_int_var([(arrival + 1, t_max)]));
        duration.push(cp.new_int_var([(1, t_max)]));
    }

    for i in 0..n {
        cp.add_eq(end[i], start[i] + duration[i]);
    }

    // Activity reification: active[i][t] <=> start[i] <= t < end[i],
    // split through the two helper literals and enforced in both
    // directions.
    let mut active = Vec::with_capacity(n);
    let mut is_after_start = Vec::with_capacity(n);
    let mut is_before_end = Vec::with_capacity(n);

    for i in 0..n {
        let mut active_row = Vec::with_capacity(horizon);
        let mut after_row = Vec::with_capacity(horizon);
        let mut before_row = Vec::with_capacity(horizon);

        for t in 0..horizon {
            let t_i64 = t as i64;
            let active_var = cp.new_bool_var();
            let after = cp.new_bool_var();
            let before = cp.new_bool_var();

            // after <=> start[i] <= t
            cp.add_le(start[i], t_i64).only_enforce_if([after]);
            cp.add_ge(start[i], t_i64 + 1).only_enforce_if([!after]);

            // before <=> end[i] >= t + 1
            cp.add_ge(end[i], t_i64 + 1).only_enforce_if([before]);
            cp.add_le(end[i], t_i64).only_enforce_if([!before]);

            // active <=> after AND before, as clauses.
            cp.add_or([!active_var, after]);
            cp.add_or([!active_var, before]);
            cp.add_or([active_var, !after, !before]);

            active_row.push(active_var);
            after_row.push(after);
            before_row.push(before);
        }

        active.push(active_row);
        is_after_start.push(after_row);
        is_before_end.push(before_row);
    }

    // The sparse move grid: a variable exists only where the crane is
    // available, the vessel has arrived, and the limit is positive.
    let mut moves = BTreeMap::new();
    let mut crane_active = BTreeMap::new();

    for t in 0..horizon {
        for (k, crane) in problem.cranes().iter().enumerate() {
            if !problem.availability().is_available(crane.id(), t) {
                continue;
            }
            for (i, vessel) in problem.vessels().iter().enumerate() {
                let prep = &prepared[i];
                if t < prep.arrival_shift() {
                    continue;
                }
                let limit = prep.move_limit(crane, vessel, t);
                if limit <= 0 {
                    continue;
                }

                let key = MoveKey {
                    shift: t,
                    crane: k,
                    vessel: i,
                };
                let mv = cp.new_int_var([(0, limit)]);

                // No work outside the service window.
                cp.add_eq(mv, 0).only_enforce_if([!active[i][t]]);

                // Indicator: the crane is engaged iff it moves boxes.
                let engaged = cp.new_bool_var();
                cp.add_ge(mv, 1).only_enforce_if([engaged]);
                cp.add_eq(mv, 0).only_enforce_if([!engaged]);

                moves.insert(key, mv);
                crane_active.insert(key, engaged);
            }
        }
    }

    DecisionVariables {
        pos,
        start,
        end,
        duration,
        active,
        is_after_start,
        is_before_end,
        moves,
        crane_active,
    }
}
