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

use crate::problem::prob::Problem;
use crate::solution::sol::Solution;
use std::fmt::Write;

const RULE: &str = "======================================================================";

/// Render the human-readable solve summary the CLI prints after a run.
pub fn render_report(problem: &Problem, solution: &Solution) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Solution Status: {}", solution.status());
    let _ = writeln!(out, "Objective Value: {:.2}", solution.objective_value());
    let _ = writeln!(out, "{RULE}");

    if solution.vessel_solutions().is_empty() {
        let _ = writeln!(out, "No feasible solution found.");
        return out;
    }

    for vs in solution.vessel_solutions() {
        let vessel = problem
            .vessels()
            .iter()
            .find(|v| v.name() == vs.vessel_name());

        let _ = writeln!(out, "\n--- {} ---", vs.vessel_name());
        if let Some(v) = vessel {
            let berth_end = vs.berth_position() + v.loa();
            let _ = writeln!(
                out,
                "  Berth position: {}m - {}m",
                vs.berth_position().value(),
                berth_end.value()
            );
        } else {
            let _ = writeln!(out, "  Berth position: {}m", vs.berth_position().value());
        }
        let _ = writeln!(
            out,
            "  Time: shift {} -> {} (duration: {} shifts)",
            vs.start_shift(),
            vs.end_shift(),
            vs.duration()
        );
        if let Some(v) = vessel {
            let _ = writeln!(out, "  Workload: {} moves", v.workload());
        }
        let _ = writeln!(out, "  Crane assignment per shift:");
        for t in vs.start_shift()..vs.end_shift() {
            let cranes = vs.cranes_in_shift(t);
            if cranes.is_empty() {
                let _ = writeln!(out, "    Shift {t}: idle");
            } else {
                let ids: Vec<&str> = cranes.iter().map(|c| c.value().as_str()).collect();
                let _ = writeln!(out, "    Shift {t}: {}", ids.join(", "));
            }
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "Crane engagements per shift:");
    for t in 0..problem.num_shifts() {
        let total: usize = solution
            .vessel_solutions()
            .iter()
            .map(|vs| vs.cranes_in_shift(t).len())
            .sum();
        let available = problem.availability().available_in(t).count();
        let _ = writeln!(out, "  Shift {t}: {total} engaged / {available} available");
    }

    out
}
