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

use crate::problem::err::UnknownRuleError;

/// Toggles for the optional constraint families of the model.
///
/// Disabling a family removes its constraints entirely; variable domains
/// are never affected. All families default to enabled except the strict
/// crane-reach upper bound, which changes historical semantics and must
/// be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverRules {
    forbidden_zones: bool,
    crane_capacity: bool,
    max_cranes: bool,
    min_cranes_on_arrival: bool,
    crane_reach: bool,
    crane_reach_strict: bool,
    sts_non_crossing: bool,
    shifting_gang: bool,
    yard_preferences: bool,
}

impl Default for SolverRules {
    fn default() -> Self {
        Self {
            forbidden_zones: true,
            crane_capacity: true,
            max_cranes: true,
            min_cranes_on_arrival: true,
            crane_reach: true,
            crane_reach_strict: false,
            sts_non_crossing: true,
            shifting_gang: true,
            yard_preferences: true,
        }
    }
}

impl SolverRules {
    /// Set a rule by its configuration name. Unknown names are an error;
    /// a silently ignored toggle would solve a different problem than the
    /// one the operator asked for.
    pub fn set(&mut self, name: &str, value: bool) -> Result<(), UnknownRuleError> {
        match name {
            "enable_forbidden_zones" => self.forbidden_zones = value,
            "enable_crane_capacity" => self.crane_capacity = value,
            "enable_max_cranes" => self.max_cranes = value,
            "enable_min_cranes_on_arrival" => self.min_cranes_on_arrival = value,
            "enable_crane_reach" => self.crane_reach = value,
            "enable_crane_reach_strict" => self.crane_reach_strict = value,
            "enable_sts_non_crossing" => self.sts_non_crossing = value,
            "enable_shifting_gang" => self.shifting_gang = value,
            "enable_yard_preferences" => self.yard_preferences = value,
            _ => return Err(UnknownRuleError::new(name)),
        }
        Ok(())
    }

    #[inline]
    pub fn with(mut self, name: &str, value: bool) -> Result<Self, UnknownRuleError> {
        self.set(name, value)?;
        Ok(self)
    }

    #[inline]
    pub fn forbidden_zones(&self) -> bool {
        self.forbidden_zones
    }

    #[inline]
    pub fn crane_capacity(&self) -> bool {
        self.crane_capacity
    }

    #[inline]
    pub fn max_cranes(&self) -> bool {
        self.max_cranes
    }

    #[inline]
    pub fn min_cranes_on_arrival(&self) -> bool {
        self.min_cranes_on_arrival
    }

    #[inline]
    pub fn crane_reach(&self) -> bool {
        self.crane_reach
    }

    #[inline]
    pub fn crane_reach_strict(&self) -> bool {
        self.crane_reach_strict
    }

    #[inline]
    pub fn sts_non_crossing(&self) -> bool {
        self.sts_non_crossing
    }

    #[inline]
    pub fn shifting_gang(&self) -> bool {
        self.shifting_gang
    }

    #[inline]
    pub fn yard_preferences(&self) -> bool {
        self.yard_preferences
    }
}
