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

//! The CP-SAT formulation. [`vars`] creates the decision variables in a
//! deterministic order, [`constraints`] posts the constraint families
//! under the problem's rule toggles, and [`objective`] assembles the
//! weighted objective. Everything that talks to the engine is in this
//! module tree, so swapping the CP-SAT binding touches nothing else.

pub mod constraints;
pub mod objective;
pub mod vars;

use crate::prep::PreparedVessel;
use cp_sat::builder::{BoolVar, CpModelBuilder, IntVar, LinearExpr};
use cp_sat::proto::{CpSolverResponse, SatParameters};
use quay_alloc_model::problem::Problem;
use vars::DecisionVariables;

/// A fully assembled model, ready to hand to the CP-SAT search.
pub struct BuiltModel {
    cp: CpModelBuilder,
    vars: DecisionVariables,
}

impl BuiltModel {
    #[inline]
    pub fn variables(&self) -> &DecisionVariables {
        &self.vars
    }

    #[inline]
    pub fn solve_with(&self, params: &SatParameters) -> CpSolverResponse {
        self.cp.solve_with_parameters(params)
    }
}

/// Build the complete CP-SAT model for a prepared problem.
pub fn build_model(problem: &Problem, prepared: &[PreparedVessel]) -> BuiltModel {
    let mut cp = CpModelBuilder::default();
    let vars = vars::create(&mut cp, problem, prepared);
    constraints::apply(&mut cp, &vars, problem, prepared);
    objective::apply(&mut cp, &vars, problem, prepared);
    BuiltModel { cp, vars }
}

pub(crate) fn sum_int<I>(vars: I) -> LinearExpr
where
    I: IntoIterator<Item = IntVar>,
{
    vars.into_iter()
        .fold(LinearExpr::from(0), |acc, v| acc + v)
}

pub(crate) fn sum_bool<I>(vars: I) -> LinearExpr
where
    I: IntoIterator<Item = BoolVar>,
{
    vars.into_iter()
        .fold(LinearExpr::from(0), |acc, v| acc + v)
}
