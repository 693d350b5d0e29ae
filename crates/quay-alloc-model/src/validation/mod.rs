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

//! Schedule-level checks over a `(Problem, Solution)` pair.
//!
//! Each function verifies one invariant the model is supposed to
//! enforce; `validate_solution` runs the set applicable under the
//! problem's rule toggles. The solver's integration tests use these as
//! oracles, and a hosting application can run them as a safety net
//! before acting on a schedule.

pub mod err;

use crate::problem::crane::arrival_scaled_limit;
use crate::problem::prob::Problem;
use crate::problem::vessel::Vessel;
use crate::problem::{CraneIdentifier, LATERAL_CLEARANCE};
use crate::solution::sol::{Solution, VesselSolution};
use crate::validation::err::{
    CraneAssignmentError, ForbiddenZoneViolationError, InsufficientDepthError,
    MaxCranesExceededError, StsCrossingError, UnknownSolutionVesselError, ValidationError,
    VesselOverlapError, VesselWindowError, WorkloadCoverageError,
};
use quay_alloc_core::prelude::{QuayPosition, SpaceInterval};
use std::collections::BTreeSet;

fn vessel_for<'p>(
    problem: &'p Problem,
    vs: &VesselSolution,
) -> Result<&'p Vessel, UnknownSolutionVesselError> {
    problem
        .vessels()
        .iter()
        .find(|v| v.name() == vs.vessel_name())
        .ok_or_else(|| UnknownSolutionVesselError::new(vs.vessel_name()))
}

/// The space a berthed vessel blocks: its own length plus the lateral
/// clearance trailing it.
fn padded_span(vessel: &Vessel, vs: &VesselSolution) -> SpaceInterval {
    SpaceInterval::new(
        vs.berth_position(),
        vs.berth_position() + vessel.loa() + LATERAL_CLEARANCE,
    )
}

fn shifts_intersect(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// Start at or after arrival, end after start, end within the horizon.
pub fn validate_vessel_windows(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    let horizon = problem.num_shifts();
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        let (arrival, _) = vessel.arrival_in_horizon(horizon);
        if vs.start_shift() < arrival {
            return Err(ValidationError::from(VesselWindowError::new(
                vs.vessel_name(),
                format!(
                    "starts in shift {} before arrival shift {}",
                    vs.start_shift(),
                    arrival
                ),
            )));
        }
        if vs.end_shift() <= vs.start_shift() {
            return Err(ValidationError::from(VesselWindowError::new(
                vs.vessel_name(),
                "service window is empty",
            )));
        }
        if vs.end_shift() > horizon {
            return Err(ValidationError::from(VesselWindowError::new(
                vs.vessel_name(),
                format!("ends in shift {} past the horizon", vs.end_shift()),
            )));
        }
    }
    Ok(())
}

/// Clearance from both quay ends.
pub fn validate_spatial_bounds(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    let quay_end = QuayPosition::zero() + problem.berth().length();
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        let bow = vs.berth_position();
        let stern = bow + vessel.loa();
        if bow < QuayPosition::zero() + LATERAL_CLEARANCE || stern + LATERAL_CLEARANCE > quay_end {
            return Err(ValidationError::from(VesselWindowError::new(
                vs.vessel_name(),
                "berths outside the quay clearance margins",
            )));
        }
    }
    Ok(())
}

/// No two vessels may overlap in space (clearance included) while their
/// service windows overlap in time.
pub fn validate_no_vessel_overlap(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    let vessels = solution.vessel_solutions();
    for (idx, a) in vessels.iter().enumerate() {
        let vessel_a = vessel_for(problem, a)?;
        for b in vessels.iter().skip(idx + 1) {
            let vessel_b = vessel_for(problem, b)?;
            let in_time = shifts_intersect(
                (a.start_shift(), a.end_shift()),
                (b.start_shift(), b.end_shift()),
            );
            let in_space = padded_span(vessel_a, a).intersects(&padded_span(vessel_b, b));
            if in_time && in_space {
                return Err(ValidationError::from(VesselOverlapError::new(
                    a.vessel_name(),
                    b.vessel_name(),
                )));
            }
        }
    }
    Ok(())
}

/// The water under the whole hull must be at least as deep as the draft.
pub fn validate_depths(problem: &Problem, solution: &Solution) -> Result<(), ValidationError> {
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        let min_depth = problem
            .berth()
            .min_depth_over(vs.berth_position(), vessel.loa());
        if min_depth < vessel.draft() {
            return Err(ValidationError::from(InsufficientDepthError::new(
                vs.vessel_name(),
            )));
        }
    }
    Ok(())
}

/// Vessel rectangles (clearance included) must avoid every forbidden
/// space-time block.
pub fn validate_forbidden_zones(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        let span = padded_span(vessel, vs);
        for zone in problem.forbidden_zones() {
            let in_time = shifts_intersect(
                (vs.start_shift(), vs.end_shift()),
                (zone.shifts().start, zone.shifts().end),
            );
            if in_time && span.intersects(&zone.span()) {
                return Err(ValidationError::from(ForbiddenZoneViolationError::new(
                    vs.vessel_name(),
                    zone.description(),
                )));
            }
        }
    }
    Ok(())
}

/// The cranes assigned across the service window must be able to cover
/// the vessel's workload at the applicable per-shift limits.
pub fn validate_workload_coverage(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    let horizon = problem.num_shifts();
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        let (arrival, fraction) = vessel.arrival_in_horizon(horizon);
        let mut deliverable = 0;
        for (&shift, cranes) in vs.assigned_cranes() {
            for id in cranes {
                let Some(crane) = problem.crane_by_id(id) else {
                    continue;
                };
                let mut limit = crane.productivity_for(vessel.productivity_preference());
                if shift == arrival {
                    limit = arrival_scaled_limit(limit, fraction);
                }
                deliverable += limit;
            }
        }
        if deliverable < vessel.workload() {
            return Err(ValidationError::from(WorkloadCoverageError::new(
                vs.vessel_name(),
                vessel.workload(),
                deliverable,
            )));
        }
    }
    Ok(())
}

/// Assigned cranes must exist, be available in the shift, work only
/// inside the service window, and appear at most once per shift.
pub fn validate_crane_assignments(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    for vs in solution.vessel_solutions() {
        for (&shift, cranes) in vs.assigned_cranes() {
            if shift < vs.start_shift() || shift >= vs.end_shift() {
                if let Some(id) = cranes.first() {
                    return Err(ValidationError::from(CraneAssignmentError::new(
                        vs.vessel_name(),
                        id.clone(),
                        shift,
                        "assigned outside the vessel's service window",
                    )));
                }
            }
            let mut seen: BTreeSet<&CraneIdentifier> = BTreeSet::new();
            for id in cranes {
                if problem.crane_by_id(id).is_none() {
                    return Err(ValidationError::from(CraneAssignmentError::new(
                        vs.vessel_name(),
                        id.clone(),
                        shift,
                        "crane is not part of the fleet",
                    )));
                }
                if !problem.availability().is_available(id, shift) {
                    return Err(ValidationError::from(CraneAssignmentError::new(
                        vs.vessel_name(),
                        id.clone(),
                        shift,
                        "crane is not available in this shift",
                    )));
                }
                if !seen.insert(id) {
                    return Err(ValidationError::from(CraneAssignmentError::new(
                        vs.vessel_name(),
                        id.clone(),
                        shift,
                        "crane is assigned twice in one shift",
                    )));
                }
            }
        }
    }
    Ok(())
}

/// No vessel may exceed its concurrent-crane cap in any shift.
pub fn validate_max_cranes(problem: &Problem, solution: &Solution) -> Result<(), ValidationError> {
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        for (&shift, cranes) in vs.assigned_cranes() {
            if cranes.len() > vessel.max_cranes() {
                return Err(ValidationError::from(MaxCranesExceededError::new(
                    vs.vessel_name(),
                    shift,
                    cranes.len(),
                    vessel.max_cranes(),
                )));
            }
        }
    }
    Ok(())
}

/// Every shift inside the service window must see at least one crane.
pub fn validate_active_shifts_worked(
    _problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    for vs in solution.vessel_solutions() {
        for shift in vs.start_shift()..vs.end_shift() {
            if vs.cranes_in_shift(shift).is_empty() {
                return Err(ValidationError::from(VesselWindowError::new(
                    vs.vessel_name(),
                    format!("occupies shift {shift} without performing any work"),
                )));
            }
        }
    }
    Ok(())
}

/// An assigned crane must be able to reach the vessel's bow position;
/// under the strict variant the stern must stay inside the range too.
pub fn validate_crane_reach(
    problem: &Problem,
    solution: &Solution,
    strict: bool,
) -> Result<(), ValidationError> {
    for vs in solution.vessel_solutions() {
        let vessel = vessel_for(problem, vs)?;
        for (&shift, cranes) in vs.assigned_cranes() {
            for id in cranes {
                let Some(crane) = problem.crane_by_id(id) else {
                    continue;
                };
                if vs.berth_position() < crane.reach().start() {
                    return Err(ValidationError::from(CraneAssignmentError::new(
                        vs.vessel_name(),
                        id.clone(),
                        shift,
                        "vessel berths before the crane's range start",
                    )));
                }
                if strict && vs.berth_position() + vessel.loa() > crane.reach().end() {
                    return Err(ValidationError::from(CraneAssignmentError::new(
                        vs.vessel_name(),
                        id.clone(),
                        shift,
                        "vessel extends past the crane's range end",
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Rail-bound STS cranes serve vessels in fleet order along the quay:
/// in any shift, a lower-indexed STS crane's vessel may not berth past
/// a higher-indexed one's.
pub fn validate_sts_ordering(
    problem: &Problem,
    solution: &Solution,
) -> Result<(), ValidationError> {
    for shift in 0..problem.num_shifts() {
        // (fleet index, vessel position) of every STS engagement in the shift.
        let mut engagements: Vec<(usize, QuayPosition, &CraneIdentifier)> = Vec::new();
        for vs in solution.vessel_solutions() {
            for id in vs.cranes_in_shift(shift) {
                if let Some((index, _)) = problem
                    .iter_sts_cranes()
                    .find(|(_, crane)| crane.id() == id)
                {
                    engagements.push((index, vs.berth_position(), id));
                }
            }
        }
        for (i, a) in engagements.iter().enumerate() {
            for b in engagements.iter().skip(i + 1) {
                let (lower, upper) = if a.0 < b.0 { (a, b) } else { (b, a) };
                if lower.0 != upper.0 && lower.1 > upper.1 {
                    return Err(ValidationError::from(StsCrossingError::new(
                        lower.2.clone(),
                        upper.2.clone(),
                        shift,
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Run every check applicable under the problem's rule toggles.
pub fn validate_solution(problem: &Problem, solution: &Solution) -> Result<(), ValidationError> {
    validate_vessel_windows(problem, solution)?;
    validate_spatial_bounds(problem, solution)?;
    validate_no_vessel_overlap(problem, solution)?;
    validate_depths(problem, solution)?;
    validate_workload_coverage(problem, solution)?;
    validate_crane_assignments(problem, solution)?;

    let rules = problem.rules();
    if rules.forbidden_zones() {
        validate_forbidden_zones(problem, solution)?;
    }
    if rules.max_cranes() {
        validate_max_cranes(problem, solution)?;
    }
    if rules.min_cranes_on_arrival() {
        validate_active_shifts_worked(problem, solution)?;
    }
    if rules.crane_reach() {
        validate_crane_reach(problem, solution, rules.crane_reach_strict())?;
    }
    if rules.sts_non_crossing() {
        validate_sts_ordering(problem, solution)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::availability::CraneAvailability;
    use crate::problem::berth::Berth;
    use crate::problem::crane::{Crane, CraneType};
    use crate::problem::rules::SolverRules;
    use crate::problem::shift::ShiftCalendar;
    use crate::problem::vessel::ProductivityPreference;
    use crate::problem::zone::ForbiddenZone;
    use crate::solution::sol::SolveStatus;
    use chrono::NaiveDate;
    use quay_alloc_core::prelude::*;
    use std::collections::BTreeMap;

    #[inline]
    fn cid(s: &str) -> CraneIdentifier {
        CraneIdentifier::new(s.to_string())
    }

    fn crane(id: &str, range: (i64, i64)) -> Crane {
        Crane::new(
            cid(id),
            id,
            if id.starts_with("STS") {
                CraneType::Sts
            } else {
                CraneType::Mhc
            },
            SpaceInterval::new(QuayPosition::new(range.0), QuayPosition::new(range.1)),
            100,
            130,
        )
    }

    fn vessel(name: &str, loa: i64, workload: i64, arrival: usize) -> Vessel {
        Vessel::new(
            name,
            QuayLength::new(loa),
            Depth::from_metres(10.0),
            workload,
            2,
            ProductivityPreference::Max,
            arrival,
            0,
            vec![],
        )
    }

    fn problem(vessels: Vec<Vessel>, forbidden: Vec<ForbiddenZone>) -> Problem {
        let cranes = vec![
            crane("STS-01", (0, 1000)),
            crane("STS-02", (0, 1000)),
            crane("STS-03", (0, 1000)),
        ];
        let availability = CraneAvailability::full(&cranes, 4);
        Problem::new(
            Berth::with_uniform_depth(QuayLength::new(1000), Depth::from_metres(16.0)),
            ShiftCalendar::generate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), 4),
            vessels,
            cranes,
            availability,
            forbidden,
            vec![],
            SolverRules::default(),
        )
        .unwrap()
    }

    fn vessel_solution(
        name: &str,
        pos: i64,
        start: usize,
        end: usize,
        cranes: &[(usize, &[&str])],
    ) -> VesselSolution {
        let mut assigned = BTreeMap::new();
        for (shift, ids) in cranes {
            assigned.insert(*shift, ids.iter().map(|&s| cid(s)).collect());
        }
        VesselSolution::new(name, QuayPosition::new(pos), start, end, assigned)
    }

    fn solution(vessels: Vec<VesselSolution>) -> Solution {
        Solution::new(vessels, 0.0, SolveStatus::Optimal)
    }

    #[test]
    fn test_valid_single_vessel_schedule_passes() {
        let p = problem(vec![vessel("V1", 200, 100, 0)], vec![]);
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        validate_solution(&p, &s).unwrap();
    }

    #[test]
    fn test_start_before_arrival_fails() {
        let p = problem(vec![vessel("V1", 200, 100, 2)], vec![]);
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            1,
            3,
            &[(1, &["STS-01"]), (2, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_vessel_windows(&p, &s).unwrap_err(),
            ValidationError::VesselWindow(_)
        ));
    }

    #[test]
    fn test_overlap_requires_clearance() {
        let p = problem(
            vec![vessel("V1", 200, 100, 0), vessel("V2", 200, 100, 0)],
            vec![],
        );
        // 40..240 and 270..470: only 30 m apart, clearance is 40 m.
        let s = solution(vec![
            vessel_solution("V1", 40, 0, 1, &[(0, &["STS-01"])]),
            vessel_solution("V2", 270, 0, 1, &[(0, &["STS-02"])]),
        ]);
        assert!(matches!(
            validate_no_vessel_overlap(&p, &s).unwrap_err(),
            ValidationError::VesselOverlap(_)
        ));

        // 40..240 and 280..480: exactly 40 m apart is fine.
        let s = solution(vec![
            vessel_solution("V1", 40, 0, 1, &[(0, &["STS-01"])]),
            vessel_solution("V2", 280, 0, 1, &[(0, &["STS-02"])]),
        ]);
        validate_no_vessel_overlap(&p, &s).unwrap();
    }

    #[test]
    fn test_disjoint_in_time_may_share_space() {
        let p = problem(
            vec![vessel("V1", 200, 100, 0), vessel("V2", 200, 100, 0)],
            vec![],
        );
        let s = solution(vec![
            vessel_solution("V1", 40, 0, 1, &[(0, &["STS-01"])]),
            vessel_solution("V2", 40, 1, 2, &[(1, &["STS-02"])]),
        ]);
        validate_no_vessel_overlap(&p, &s).unwrap();
    }

    #[test]
    fn test_depth_violation_detected() {
        let vessels = vec![Vessel::new(
            "V1",
            QuayLength::new(200),
            Depth::from_metres(18.0),
            100,
            2,
            ProductivityPreference::Max,
            0,
            0,
            vec![],
        )];
        let p = problem(vessels, vec![]);
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_depths(&p, &s).unwrap_err(),
            ValidationError::InsufficientDepth(_)
        ));
    }

    #[test]
    fn test_forbidden_zone_violation_detected() {
        let zone = ForbiddenZone::new(
            SpaceInterval::new(QuayPosition::new(400), QuayPosition::new(600)),
            0..2,
            "Maintenance",
        );
        let p = problem(vec![vessel("V1", 200, 100, 0)], vec![zone]);
        let s = solution(vec![vessel_solution(
            "V1",
            300,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_forbidden_zones(&p, &s).unwrap_err(),
            ValidationError::ForbiddenZoneViolation(_)
        ));

        // Same berth after the zone closes is fine.
        let s = solution(vec![vessel_solution(
            "V1",
            300,
            2,
            3,
            &[(2, &["STS-01"])],
        )]);
        validate_forbidden_zones(&p, &s).unwrap();
    }

    #[test]
    fn test_workload_coverage_shortfall_detected() {
        let p = problem(vec![vessel("V1", 200, 500, 0)], vec![]);
        // One crane for one shift delivers at most 130 of 500 moves.
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_workload_coverage(&p, &s).unwrap_err(),
            ValidationError::WorkloadCoverage(_)
        ));
    }

    #[test]
    fn test_max_cranes_exceeded_detected() {
        let p = problem(vec![vessel("V1", 200, 100, 0)], vec![]);
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01", "STS-02", "STS-03"])],
        )]);
        assert!(matches!(
            validate_max_cranes(&p, &s).unwrap_err(),
            ValidationError::MaxCranesExceeded(_)
        ));
    }

    #[test]
    fn test_unavailable_crane_detected() {
        let mut p = problem(vec![vessel("V1", 200, 100, 0)], vec![]);
        // Rebuild with STS-01 struck from shift 0.
        let cranes = p.cranes().to_vec();
        let mut availability = CraneAvailability::full(&cranes, 4);
        availability.remove(&cid("STS-01"), 0);
        p = Problem::new(
            p.berth().clone(),
            p.calendar().clone(),
            p.vessels().to_vec(),
            cranes,
            availability,
            vec![],
            vec![],
            SolverRules::default(),
        )
        .unwrap();
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_crane_assignments(&p, &s).unwrap_err(),
            ValidationError::CraneAssignment(_)
        ));
    }

    #[test]
    fn test_idle_active_shift_detected() {
        let p = problem(vec![vessel("V1", 200, 100, 0)], vec![]);
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            2,
            &[(0, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_active_shifts_worked(&p, &s).unwrap_err(),
            ValidationError::VesselWindow(_)
        ));
    }

    #[test]
    fn test_reach_violation_detected() {
        let cranes = vec![crane("STS-01", (500, 1000))];
        let availability = CraneAvailability::full(&cranes, 4);
        let p = Problem::new(
            Berth::with_uniform_depth(QuayLength::new(1000), Depth::from_metres(16.0)),
            ShiftCalendar::generate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), 4),
            vec![vessel("V1", 200, 100, 0)],
            cranes,
            availability,
            vec![],
            vec![],
            SolverRules::default(),
        )
        .unwrap();
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        assert!(matches!(
            validate_crane_reach(&p, &s, false).unwrap_err(),
            ValidationError::CraneAssignment(_)
        ));
    }

    #[test]
    fn test_strict_reach_checks_stern() {
        let cranes = vec![crane("STS-01", (0, 200))];
        let availability = CraneAvailability::full(&cranes, 4);
        let p = Problem::new(
            Berth::with_uniform_depth(QuayLength::new(1000), Depth::from_metres(16.0)),
            ShiftCalendar::generate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), 4),
            vec![vessel("V1", 200, 100, 0)],
            cranes,
            availability,
            vec![],
            vec![],
            SolverRules::default(),
        )
        .unwrap();
        let s = solution(vec![vessel_solution(
            "V1",
            40,
            0,
            1,
            &[(0, &["STS-01"])],
        )]);
        // Bow is reachable, so the historical check passes.
        validate_crane_reach(&p, &s, false).unwrap();
        // The stern at 240 m lies past the range end of 200 m.
        assert!(validate_crane_reach(&p, &s, true).is_err());
    }

    #[test]
    fn test_sts_crossing_detected() {
        let p = problem(
            vec![vessel("V1", 200, 100, 0), vessel("V2", 200, 100, 0)],
            vec![],
        );
        // STS-01 (index 0) works the vessel berthed at 500 while STS-02
        // (index 1) works the one at 40: the rails would have to cross.
        let s = solution(vec![
            vessel_solution("V1", 500, 0, 1, &[(0, &["STS-01"])]),
            vessel_solution("V2", 40, 0, 1, &[(0, &["STS-02"])]),
        ]);
        assert!(matches!(
            validate_sts_ordering(&p, &s).unwrap_err(),
            ValidationError::StsCrossing(_)
        ));

        // The mirrored assignment is orderly.
        let s = solution(vec![
            vessel_solution("V1", 500, 0, 1, &[(0, &["STS-02"])]),
            vessel_solution("V2", 40, 0, 1, &[(0, &["STS-01"])]),
        ]);
        validate_sts_ordering(&p, &s).unwrap();
    }
}
