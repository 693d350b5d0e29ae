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

//! The built-in demonstration instance: a 2000 m quay with a shallow
//! eastern stretch, twelve arrivals over three days, six STS cranes and
//! four mobile harbour cranes.

use crate::problem::{
    availability::CraneAvailability,
    berth::Berth,
    crane::{Crane, CraneIdentifier, CraneType},
    err::ProblemError,
    prob::Problem,
    rules::SolverRules,
    shift::ShiftCalendar,
    vessel::{ProductivityPreference, Vessel},
    zone::ForbiddenZone,
};
use chrono::NaiveDate;
use quay_alloc_core::prelude::{Depth, QuayLength, QuayPosition, SpaceInterval};

const NUM_SHIFTS: usize = 12;

fn vessel(
    name: &str,
    workload: i64,
    loa: i64,
    draft: f64,
    arrival_shift: usize,
    arrival_hour_offset: i64,
    max_cranes: usize,
    preference: ProductivityPreference,
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

fn sts(id: &str, name: &str) -> Crane {
    Crane::new(
        CraneIdentifier::new(id.to_string()),
        name,
        CraneType::Sts,
        SpaceInterval::new(QuayPosition::new(0), QuayPosition::new(1400)),
        100,
        130,
    )
}

fn mhc(id: &str, name: &str) -> Crane {
    Crane::new(
        CraneIdentifier::new(id.to_string()),
        name,
        CraneType::Mhc,
        SpaceInterval::new(QuayPosition::new(1000), QuayPosition::new(2000)),
        60,
        90,
    )
}

/// Build the default example problem.
pub fn default_problem() -> Result<Problem, ProblemError> {
    use ProductivityPreference::{Intermediate, Max, Min};

    let berth = Berth::new(
        QuayLength::new(2000),
        [
            (QuayPosition::new(0), Depth::from_metres(16.0)),
            (QuayPosition::new(1200), Depth::from_metres(12.0)),
        ],
    );

    let calendar = ShiftCalendar::generate(
        NaiveDate::from_ymd_opt(2025, 12, 31).expect("static date is valid"),
        NUM_SHIFTS,
    );

    let vessels = vec![
        vessel("V1-MSC", 800, 300, 14.0, 0, 0, 4, Max),
        vessel("V2-MAERSK", 600, 250, 13.0, 0, 2, 3, Intermediate),
        vessel("V3-COSCO", 500, 280, 14.5, 0, 0, 3, Min),
        vessel("V4-CMA", 400, 200, 12.0, 1, 0, 3, Intermediate),
        vessel("V5-HAPAG", 350, 180, 11.0, 1, 0, 2, Max),
        vessel("V6-ONE", 700, 290, 13.5, 2, 0, 3, Intermediate),
        vessel("V7-EVERGREEN", 900, 330, 15.0, 2, 0, 4, Max),
        vessel("V8-HMM", 450, 220, 12.5, 3, 0, 3, Intermediate),
        vessel("V9-YANGMING", 550, 260, 13.8, 3, 0, 3, Min),
        vessel("V10-ZIM", 400, 210, 11.5, 4, 0, 2, Intermediate),
        vessel("V11-WANHAI", 300, 190, 10.5, 4, 0, 2, Intermediate),
        vessel("V12-PIL", 600, 270, 13.2, 5, 0, 3, Intermediate),
    ];

    let cranes = vec![
        sts("STS-01", "STS Crane 1"),
        sts("STS-02", "STS Crane 2"),
        sts("STS-03", "STS Crane 3"),
        sts("STS-04", "STS Crane 4"),
        sts("STS-05", "STS Crane 5"),
        sts("STS-06", "STS Crane 6"),
        mhc("MHC-01", "MHC Crane 1"),
        mhc("MHC-02", "MHC Crane 2"),
        mhc("MHC-03", "MHC Crane 3"),
        mhc("MHC-04", "MHC Crane 4"),
    ];

    let mut availability = CraneAvailability::full(&cranes, NUM_SHIFTS);
    // STS-01 is down for planned maintenance in the first two shifts.
    let sts01 = CraneIdentifier::new("STS-01".to_string());
    availability.remove(&sts01, 0);
    availability.remove(&sts01, 1);

    let forbidden_zones = vec![
        ForbiddenZone::new(
            SpaceInterval::new(QuayPosition::new(400), QuayPosition::new(600)),
            2..4,
            "Quay Wall Maintenance A",
        ),
        ForbiddenZone::new(
            SpaceInterval::new(QuayPosition::new(1500), QuayPosition::new(1600)),
            6..8,
            "Dredging Operations B",
        ),
    ];

    Problem::new(
        berth,
        calendar,
        vessels,
        cranes,
        availability,
        forbidden_zones,
        vec![],
        SolverRules::default(),
    )
}
