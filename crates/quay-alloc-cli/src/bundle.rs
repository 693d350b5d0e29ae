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

//! The camelCase solution bundle consumed by external visualizers.

use quay_alloc_model::prelude::{Solution, VesselSolution};
use quay_alloc_model::problem::Problem;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionBundle {
    status: String,
    objective_value: f64,
    vessels: Vec<VesselBundle>,
    berth: BerthBundle,
    num_shifts: usize,
    shift_labels: Vec<String>,
    forbidden_zones: Vec<ForbiddenZoneBundle>,
    yard_quay_zones: Vec<YardZoneBundle>,
    crane_availability: BTreeMap<usize, Vec<String>>,
    cranes: Vec<CraneBundle>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VesselBundle {
    name: String,
    berth_position: i64,
    start_shift: usize,
    end_shift: usize,
    loa: i64,
    workload: i64,
    arrival_shift_index: usize,
    productivity_preference: String,
    assigned_cranes: BTreeMap<usize, Vec<String>>,
    color_index: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BerthBundle {
    length: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForbiddenZoneBundle {
    start_berth_position: i64,
    end_berth_position: i64,
    start_shift: usize,
    end_shift: usize,
    description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct YardZoneBundle {
    id: u32,
    name: String,
    start_dist: i64,
    end_dist: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CraneBundle {
    id: String,
    name: String,
    crane_type: String,
    min_productivity: i64,
    max_productivity: i64,
}

fn vessel_bundle(problem: &Problem, vs: &VesselSolution, color_index: usize) -> VesselBundle {
    let vessel = problem
        .vessels()
        .iter()
        .find(|v| v.name() == vs.vessel_name());
    let (loa, workload, arrival, preference) = match vessel {
        Some(v) => (
            v.loa().value(),
            v.workload(),
            v.arrival_in_horizon(problem.num_shifts()).0,
            v.productivity_preference().to_string(),
        ),
        None => (0, 0, 0, String::new()),
    };

    let assigned_cranes = vs
        .assigned_cranes()
        .iter()
        .map(|(&shift, cranes)| {
            (
                shift,
                cranes.iter().map(|c| c.value().clone()).collect::<Vec<_>>(),
            )
        })
        .collect();

    VesselBundle {
        name: vs.vessel_name().to_string(),
        berth_position: vs.berth_position().value(),
        start_shift: vs.start_shift(),
        end_shift: vs.end_shift(),
        loa,
        workload,
        arrival_shift_index: arrival,
        productivity_preference: preference,
        assigned_cranes,
        color_index,
    }
}

impl SolutionBundle {
    pub fn assemble(problem: &Problem, solution: &Solution) -> Self {
        let vessels = solution
            .vessel_solutions()
            .iter()
            .enumerate()
            .map(|(idx, vs)| vessel_bundle(problem, vs, idx))
            .collect();

        let crane_availability = (0..problem.num_shifts())
            .map(|t| {
                (
                    t,
                    problem
                        .availability()
                        .available_in(t)
                        .map(|id| id.value().clone())
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        SolutionBundle {
            status: solution.status().as_str().to_string(),
            objective_value: solution.objective_value(),
            vessels,
            berth: BerthBundle {
                length: problem.berth().length().value(),
            },
            num_shifts: problem.num_shifts(),
            shift_labels: problem.calendar().labels(),
            forbidden_zones: problem
                .forbidden_zones()
                .iter()
                .map(|z| ForbiddenZoneBundle {
                    start_berth_position: z.span().start().value(),
                    end_berth_position: z.span().end().value(),
                    start_shift: z.shifts().start,
                    end_shift: z.shifts().end,
                    description: z.description().to_string(),
                })
                .collect(),
            yard_quay_zones: problem
                .yard_zones()
                .iter()
                .map(|z| YardZoneBundle {
                    id: *z.id().value(),
                    name: z.name().to_string(),
                    start_dist: z.span().start().value(),
                    end_dist: z.span().end().value(),
                })
                .collect(),
            crane_availability,
            cranes: problem
                .cranes()
                .iter()
                .map(|c| CraneBundle {
                    id: c.id().value().clone(),
                    name: c.name().to_string(),
                    crane_type: c.crane_type().to_string(),
                    min_productivity: c.min_productivity(),
                    max_productivity: c.max_productivity(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quay_alloc_core::prelude::QuayPosition;
    use quay_alloc_model::example;
    use quay_alloc_model::prelude::SolveStatus;
    use quay_alloc_model::problem::crane::CraneIdentifier;

    #[test]
    fn test_bundle_shape_for_empty_solution() {
        let p = example::default_problem().unwrap();
        let bundle = SolutionBundle::assemble(&p, &Solution::empty(SolveStatus::Infeasible));
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["status"], "INFEASIBLE");
        assert_eq!(json["vessels"].as_array().unwrap().len(), 0);
        assert_eq!(json["numShifts"], 12);
        assert_eq!(json["berth"]["length"], 2000);
        assert_eq!(json["shiftLabels"].as_array().unwrap().len(), 12);
        assert_eq!(json["cranes"].as_array().unwrap().len(), 10);
        // STS-01 is down in shifts 0 and 1.
        assert_eq!(json["craneAvailability"]["0"].as_array().unwrap().len(), 9);
        assert_eq!(json["craneAvailability"]["2"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_bundle_vessel_fields_are_camel_case() {
        let p = example::default_problem().unwrap();
        let mut cranes = std::collections::BTreeMap::new();
        cranes.insert(0, vec![CraneIdentifier::new("STS-02".to_string())]);
        let vs = VesselSolution::new("V1-MSC", QuayPosition::new(40), 0, 1, cranes);
        let solution = Solution::new(vec![vs], 42.0, SolveStatus::Optimal);
        let json = serde_json::to_value(SolutionBundle::assemble(&p, &solution)).unwrap();
        let v = &json["vessels"][0];
        assert_eq!(v["berthPosition"], 40);
        assert_eq!(v["startShift"], 0);
        assert_eq!(v["endShift"], 1);
        assert_eq!(v["loa"], 300);
        assert_eq!(v["workload"], 800);
        assert_eq!(v["productivityPreference"], "MAX");
        assert_eq!(v["colorIndex"], 0);
        assert_eq!(v["assignedCranes"]["0"][0], "STS-02");
    }
}
