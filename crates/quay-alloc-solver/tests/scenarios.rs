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

//! End-to-end solves of small hand-checked instances.

mod common;

use common::*;
use quay_alloc_model::prelude::SolveStatus;
use quay_alloc_model::problem::crane::CraneType;
use quay_alloc_model::problem::rules::SolverRules;
use quay_alloc_model::problem::vessel::ProductivityPreference::Max;
use quay_alloc_model::validation;
use quay_alloc_solver::prelude::SolverDriver;

fn driver() -> SolverDriver {
    SolverDriver::new().with_time_limit_seconds(20)
}

#[test]
fn test_single_vessel_on_deep_quay() {
    let p = problem(
        uniform_berth(1000, 16.0),
        2,
        vec![vessel("V1", 200, 10.0, 100, 2, Max, 0, 0)],
        vec![sts("STS-01", (0, 1000))],
        vec![],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert_eq!(solution.status(), SolveStatus::Optimal);
    validation::validate_solution(&p, &solution).unwrap();

    let vs = find_vessel(&solution, "V1");
    assert_eq!(vs.start_shift(), 0);
    assert_eq!(vs.end_shift(), 1);
    assert!(vs.berth_position().value() >= 40);
    assert!(vs.berth_position().value() <= 760);
    let ids: Vec<&str> = vs
        .cranes_in_shift(0)
        .iter()
        .map(|c| c.value().as_str())
        .collect();
    assert_eq!(ids, vec!["STS-01"]);
}

#[test]
fn test_draft_restricts_position_to_deep_stretch() {
    // Depth drops to 12 m at 500 m; draft 13 keeps the whole hull in
    // the deep stretch.
    let p = problem(
        stepped_berth(1000, &[(0, 16.0), (500, 12.0)]),
        2,
        vec![vessel("V1", 200, 13.0, 100, 2, Max, 0, 0)],
        vec![sts("STS-01", (0, 1000))],
        vec![],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert_eq!(solution.status(), SolveStatus::Optimal);
    validation::validate_solution(&p, &solution).unwrap();

    let vs = find_vessel(&solution, "V1");
    let pos = vs.berth_position().value();
    assert!(pos >= 40);
    assert!(pos + 200 <= 500, "hull may not reach the shallow stretch");
}

#[test]
fn test_forbidden_zone_forces_shift_or_detour() {
    // Depth-feasible positions are [300, 700]; the zone blocks
    // [400, 600) during shifts 1 and 2. A vessel arriving in shift 1
    // must either wait for shift 3 or berth fully east of the zone.
    let p = problem(
        stepped_berth(1040, &[(0, 10.0), (300, 16.0)]),
        4,
        vec![vessel("V1", 300, 12.0, 100, 2, Max, 1, 0)],
        vec![sts("STS-01", (0, 1040))],
        vec![forbidden((400, 600), 1..3, "Quay Wall Maintenance A")],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert!(solution.status().has_solution());
    validation::validate_solution(&p, &solution).unwrap();

    let vs = find_vessel(&solution, "V1");
    assert!(
        vs.start_shift() >= 3 || vs.berth_position().value() >= 600,
        "berthed at {} starting shift {}, which intrudes into the zone",
        vs.berth_position().value(),
        vs.start_shift()
    );
}

#[test]
fn test_sts_cranes_do_not_cross() {
    // Both vessels must be served in the single shift and each needs a
    // crane of its own, so STS-01 and STS-02 are engaged on different
    // vessels simultaneously.
    let p = problem(
        uniform_berth(1200, 16.0),
        1,
        vec![
            vessel("V1", 200, 10.0, 100, 1, Max, 0, 0),
            vessel("V2", 200, 10.0, 100, 1, Max, 0, 0),
        ],
        vec![sts("STS-01", (0, 1200)), sts("STS-02", (0, 1200))],
        vec![],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert!(solution.status().has_solution());
    validation::validate_solution(&p, &solution).unwrap();

    let served_by = |crane: &str| {
        solution
            .vessel_solutions()
            .iter()
            .find(|vs| {
                vs.cranes_in_shift(0)
                    .iter()
                    .any(|c| c.value().as_str() == crane)
            })
            .map(|vs| vs.berth_position().value())
    };
    let (lower, upper) = (served_by("STS-01"), served_by("STS-02"));
    if let (Some(lower), Some(upper)) = (lower, upper) {
        assert!(lower <= upper, "STS-01 at {lower} crossed STS-02 at {upper}");
    }
}

#[test]
fn test_heavy_workload_needs_four_cranes() {
    // 500 moves in one shift at 130 per crane: three cranes deliver at
    // most 390, so exactly four of the five must engage.
    let p = problem(
        uniform_berth(1000, 16.0),
        1,
        vec![vessel("V1", 300, 10.0, 500, 4, Max, 0, 0)],
        vec![
            sts("STS-01", (0, 1000)),
            sts("STS-02", (0, 1000)),
            sts("STS-03", (0, 1000)),
            sts("STS-04", (0, 1000)),
            sts("STS-05", (0, 1000)),
        ],
        vec![],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert!(solution.status().has_solution());
    validation::validate_solution(&p, &solution).unwrap();

    let vs = find_vessel(&solution, "V1");
    assert_eq!(vs.cranes_in_shift(0).len(), 4);
}

#[test]
fn test_impossible_draft_is_infeasible_without_search() {
    let p = problem(
        uniform_berth(1000, 16.0),
        2,
        vec![vessel("V1", 200, 20.0, 100, 2, Max, 0, 0)],
        vec![sts("STS-01", (0, 1000))],
        vec![],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert_eq!(solution.status(), SolveStatus::Infeasible);
    assert!(solution.vessel_solutions().is_empty());
    assert_eq!(solution.objective_value(), 0.0);
}

#[test]
fn test_strict_reach_toggle_changes_feasibility() {
    // The only crane covers [0, 300); a 300 m vessel berthing at 40
    // already sticks out past the range end. The historical rule only
    // checks the bow and accepts this; the strict rule rejects it.
    let lenient = problem(
        uniform_berth(1000, 16.0),
        2,
        vec![vessel("V1", 300, 10.0, 100, 2, Max, 0, 0)],
        vec![crane("STS-01", CraneType::Sts, (0, 300), 100, 130)],
        vec![],
        vec![],
        SolverRules::default(),
    );
    let solution = driver().solve(&lenient);
    assert!(solution.status().has_solution());

    let strict = problem(
        uniform_berth(1000, 16.0),
        2,
        vec![vessel("V1", 300, 10.0, 100, 2, Max, 0, 0)],
        vec![crane("STS-01", CraneType::Sts, (0, 300), 100, 130)],
        vec![],
        vec![],
        SolverRules::default()
            .with("enable_crane_reach_strict", true)
            .unwrap(),
    );
    let solution = driver().solve(&strict);
    assert_eq!(solution.status(), SolveStatus::Infeasible);
}

#[test]
fn test_arrival_fraction_limits_first_shift() {
    // Arriving 3 h into a 6 h shift halves the first-shift limit to 65,
    // so 100 moves cannot finish in the arrival shift alone.
    let p = problem(
        uniform_berth(1000, 16.0),
        3,
        vec![vessel("V1", 200, 10.0, 100, 2, Max, 0, 3)],
        vec![sts("STS-01", (0, 1000))],
        vec![],
        vec![],
        SolverRules::default(),
    );

    let solution = driver().solve(&p);
    assert!(solution.status().has_solution());
    validation::validate_solution(&p, &solution).unwrap();

    let vs = find_vessel(&solution, "V1");
    assert!(
        vs.duration() >= 2 || vs.start_shift() >= 1,
        "100 moves cannot fit into the fractional arrival shift"
    );
}
