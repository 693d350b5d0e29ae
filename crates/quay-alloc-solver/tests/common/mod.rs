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

// Each test binary pulls in the subset of helpers it needs.
#![allow(dead_code)]

use chrono::NaiveDate;
use quay_alloc_core::prelude::{Depth, QuayLength, QuayPosition, SpaceInterval};
use quay_alloc_model::problem::availability::CraneAvailability;
use quay_alloc_model::problem::crane::{Crane, CraneIdentifier, CraneType};
use quay_alloc_model::problem::prob::Problem;
use quay_alloc_model::problem::rules::SolverRules;
use quay_alloc_model::problem::shift::ShiftCalendar;
use quay_alloc_model::problem::vessel::{ProductivityPreference, Vessel};
use quay_alloc_model::problem::zone::{ForbiddenZone, YardQuayZone};

pub fn uniform_berth(length: i64, depth: f64) -> quay_alloc_model::problem::Berth {
    quay_alloc_model::problem::Berth::with_uniform_depth(
        QuayLength::new(length),
        Depth::from_metres(depth),
    )
}

pub fn stepped_berth(length: i64, steps: &[(i64, f64)]) -> quay_alloc_model::problem::Berth {
    quay_alloc_model::problem::Berth::new(
        QuayLength::new(length),
        steps
            .iter()
            .map(|&(p, d)| (QuayPosition::new(p), Depth::from_metres(d))),
    )
}

#[allow(clippy::too_many_arguments)]
pub fn vessel(
    name: &str,
    loa: i64,
    draft: f64,
    workload: i64,
    max_cranes: usize,
    preference: ProductivityPreference,
    arrival_shift: usize,
    arrival_hour_offset: i64,
) -> Vessel {
    Vessel::new(
        name,
        QuayLength::new(loa),
        Depth::from_metres(draft),
        workload,
        max_cranes,
        preference,
        arrival_shift,
        arrival_hour_offset,
        vec![],
    )
}

pub fn crane(
    id: &str,
    crane_type: CraneType,
    range: (i64, i64),
    min_productivity: i64,
    max_productivity: i64,
) -> Crane {
    Crane::new(
        CraneIdentifier::new(id.to_string()),
        id,
        crane_type,
        SpaceInterval::new(QuayPosition::new(range.0), QuayPosition::new(range.1)),
        min_productivity,
        max_productivity,
    )
}

pub fn sts(id: &str, range: (i64, i64)) -> Crane {
    crane(id, CraneType::Sts, range, 100, 130)
}

pub fn forbidden(span: (i64, i64), shifts: std::ops::Range<usize>, label: &str) -> ForbiddenZone {
    ForbiddenZone::new(
        SpaceInterval::new(QuayPosition::new(span.0), QuayPosition::new(span.1)),
        shifts,
        label,
    )
}

pub fn problem(
    berth: quay_alloc_model::problem::Berth,
    num_shifts: usize,
    vessels: Vec<Vessel>,
    cranes: Vec<Crane>,
    forbidden_zones: Vec<ForbiddenZone>,
    yard_zones: Vec<YardQuayZone>,
    rules: SolverRules,
) -> Problem {
    let availability = CraneAvailability::full(&cranes, num_shifts);
    Problem::new(
        berth,
        ShiftCalendar::generate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), num_shifts),
        vessels,
        cranes,
        availability,
        forbidden_zones,
        yard_zones,
        rules,
    )
    .expect("test problem must be well-formed")
}

pub fn find_vessel<'s>(
    solution: &'s quay_alloc_model::prelude::Solution,
    name: &str,
) -> &'s quay_alloc_model::prelude::VesselSolution {
    solution
        .vessel_solutions()
        .iter()
        .find(|vs| vs.vessel_name() == name)
        .unwrap_or_else(|| panic!("vessel {name} missing from solution"))
}
