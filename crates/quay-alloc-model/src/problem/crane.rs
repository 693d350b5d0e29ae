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

use crate::common::{Identifier, IdentifierMarkerName};
use crate::problem::vessel::ProductivityPreference;
use quay_alloc_core::prelude::SpaceInterval;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CraneIdentifierMarker;

impl IdentifierMarkerName for CraneIdentifierMarker {
    const NAME: &'static str = "CraneId";
}

/// Cranes are identified by the string ids the terminal uses
/// (e.g. `"STS-01"`); fleet order assigns the numeric index.
pub type CraneIdentifier = Identifier<String, CraneIdentifierMarker>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CraneType {
    /// Ship-to-shore gantry crane. Runs on rails, cannot cross its peers.
    #[serde(rename = "STS")]
    Sts,
    /// Mobile harbour crane.
    #[serde(rename = "MHC")]
    Mhc,
}

impl std::fmt::Display for CraneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CraneType::Sts => write!(f, "STS"),
            CraneType::Mhc => write!(f, "MHC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crane {
    id: CraneIdentifier,
    name: String,
    crane_type: CraneType,
    reach: SpaceInterval,
    min_productivity: i64,
    max_productivity: i64,
}

impl Crane {
    #[inline]
    pub fn new(
        id: CraneIdentifier,
        name: impl Into<String>,
        crane_type: CraneType,
        reach: SpaceInterval,
        min_productivity: i64,
        max_productivity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            crane_type,
            reach,
            min_productivity,
            max_productivity,
        }
    }

    #[inline]
    pub fn id(&self) -> &CraneIdentifier {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn crane_type(&self) -> CraneType {
        self.crane_type
    }

    #[inline]
    pub fn is_sts(&self) -> bool {
        self.crane_type == CraneType::Sts
    }

    /// Coverage along the quay, half-open `[berth_range_start, berth_range_end)`.
    #[inline]
    pub fn reach(&self) -> SpaceInterval {
        self.reach
    }

    /// Moves per shift at the slowest sustainable gang speed.
    #[inline]
    pub fn min_productivity(&self) -> i64 {
        self.min_productivity
    }

    /// Moves per shift at full throttle.
    #[inline]
    pub fn max_productivity(&self) -> i64 {
        self.max_productivity
    }

    /// The per-shift move limit this crane delivers for a vessel with
    /// the given productivity preference.
    #[inline]
    pub fn productivity_for(&self, preference: ProductivityPreference) -> i64 {
        match preference {
            ProductivityPreference::Min => self.min_productivity,
            ProductivityPreference::Intermediate => {
                (self.min_productivity + self.max_productivity) / 2
            }
            ProductivityPreference::Max => self.max_productivity,
        }
    }
}

/// Scale a per-shift move limit by the usable fraction of the arrival
/// shift, rounding down.
#[inline]
pub fn arrival_scaled_limit(limit: i64, fraction: f64) -> i64 {
    (limit as f64 * fraction).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use quay_alloc_core::prelude::QuayPosition;

    fn crane(id: &str, ty: CraneType) -> Crane {
        Crane::new(
            CraneIdentifier::new(id.to_string()),
            format!("{id} crane"),
            ty,
            SpaceInterval::new(QuayPosition::new(0), QuayPosition::new(1400)),
            100,
            130,
        )
    }

    #[test]
    fn test_accessors() {
        let c = crane("STS-01", CraneType::Sts);
        assert_eq!(c.id().value(), "STS-01");
        assert_eq!(c.name(), "STS-01 crane");
        assert!(c.is_sts());
        assert_eq!(c.min_productivity(), 100);
        assert_eq!(c.max_productivity(), 130);
        assert_eq!(c.reach().end(), QuayPosition::new(1400));
    }

    #[test]
    fn test_mhc_is_not_sts() {
        assert!(!crane("MHC-01", CraneType::Mhc).is_sts());
    }

    #[test]
    fn test_productivity_for_preference() {
        let c = crane("STS-01", CraneType::Sts);
        assert_eq!(c.productivity_for(ProductivityPreference::Min), 100);
        assert_eq!(c.productivity_for(ProductivityPreference::Max), 130);
        assert_eq!(c.productivity_for(ProductivityPreference::Intermediate), 115);
    }

    #[test]
    fn test_arrival_scaled_limit_floors() {
        assert_eq!(arrival_scaled_limit(130, 1.0), 130);
        assert_eq!(arrival_scaled_limit(130, 4.0 / 6.0), 86);
        assert_eq!(arrival_scaled_limit(115, 0.5), 57);
        assert_eq!(arrival_scaled_limit(130, 0.0), 0);
    }

    #[test]
    fn test_crane_type_serde_names() {
        assert_eq!(serde_json::to_string(&CraneType::Sts).unwrap(), "\"STS\"");
        assert_eq!(
            serde_json::from_str::<CraneType>("\"MHC\"").unwrap(),
            CraneType::Mhc
        );
    }
}
