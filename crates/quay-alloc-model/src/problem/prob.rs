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

use crate::problem::{
    availability::CraneAvailability,
    berth::Berth,
    crane::{Crane, CraneIdentifier},
    err::{
        DuplicateCraneError, DuplicateYardZoneError, EmptyHorizonError, InvalidVesselError,
        NoVesselsError, ProblemError, UnknownYardZoneError,
    },
    rules::SolverRules,
    shift::ShiftCalendar,
    vessel::Vessel,
    zone::{ForbiddenZone, YardQuayZone, YardZoneIdentifier},
};
use std::collections::BTreeSet;

/// The immutable description of one planning instance: quay, horizon,
/// vessels, crane fleet, availability, zones and rule toggles.
///
/// All cross-references are checked once at construction; afterwards the
/// value is read-only and can be shared freely with the solver.
#[derive(Debug, Clone)]
pub struct Problem {
    berth: Berth,
    calendar: ShiftCalendar,
    vessels: Vec<Vessel>,
    cranes: Vec<Crane>,
    availability: CraneAvailability,
    forbidden_zones: Vec<ForbiddenZone>,
    yard_zones: Vec<YardQuayZone>,
    rules: SolverRules,
}

impl Problem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        berth: Berth,
        calendar: ShiftCalendar,
        vessels: Vec<Vessel>,
        cranes: Vec<Crane>,
        availability: CraneAvailability,
        forbidden_zones: Vec<ForbiddenZone>,
        yard_zones: Vec<YardQuayZone>,
        rules: SolverRules,
    ) -> Result<Self, ProblemError> {
        if calendar.is_empty() {
            return Err(ProblemError::from(EmptyHorizonError));
        }
        if vessels.is_empty() {
            return Err(ProblemError::from(NoVesselsError));
        }

        let mut crane_ids: BTreeSet<&CraneIdentifier> = BTreeSet::new();
        for c in &cranes {
            if !crane_ids.insert(c.id()) {
                return Err(ProblemError::from(DuplicateCraneError::new(c.id().clone())));
            }
        }

        let mut zone_ids: BTreeSet<YardZoneIdentifier> = BTreeSet::new();
        for z in &yard_zones {
            if !zone_ids.insert(z.id()) {
                return Err(ProblemError::from(DuplicateYardZoneError::new(z.id())));
            }
        }

        for v in &vessels {
            if v.loa().value() <= 0 {
                return Err(ProblemError::from(InvalidVesselError::new(
                    v.name(),
                    "loa must be positive",
                )));
            }
            if v.workload() <= 0 {
                return Err(ProblemError::from(InvalidVesselError::new(
                    v.name(),
                    "workload must be positive",
                )));
            }
            if v.max_cranes() == 0 {
                return Err(ProblemError::from(InvalidVesselError::new(
                    v.name(),
                    "max_cranes must be positive",
                )));
            }
            for pref in v.target_zones() {
                if !zone_ids.contains(&pref.zone_id()) {
                    return Err(ProblemError::from(UnknownYardZoneError::new(
                        v.name(),
                        pref.zone_id(),
                    )));
                }
            }
        }

        Ok(Self {
            berth,
            calendar,
            vessels,
            cranes,
            availability,
            forbidden_zones,
            yard_zones,
            rules,
        })
    }

    #[inline]
    pub fn berth(&self) -> &Berth {
        &self.berth
    }

    #[inline]
    pub fn calendar(&self) -> &ShiftCalendar {
        &self.calendar
    }

    #[inline]
    pub fn num_shifts(&self) -> usize {
        self.calendar.len()
    }

    #[inline]
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// The crane fleet; the slice order is the crane index used by the
    /// STS non-crossing enumeration.
    #[inline]
    pub fn cranes(&self) -> &[Crane] {
        &self.cranes
    }

    #[inline]
    pub fn crane_by_id(&self, id: &CraneIdentifier) -> Option<&Crane> {
        self.cranes.iter().find(|c| c.id() == id)
    }

    #[inline]
    pub fn availability(&self) -> &CraneAvailability {
        &self.availability
    }

    #[inline]
    pub fn forbidden_zones(&self) -> &[ForbiddenZone] {
        &self.forbidden_zones
    }

    #[inline]
    pub fn yard_zones(&self) -> &[YardQuayZone] {
        &self.yard_zones
    }

    #[inline]
    pub fn yard_zone_by_id(&self, id: YardZoneIdentifier) -> Option<&YardQuayZone> {
        self.yard_zones.iter().find(|z| z.id() == id)
    }

    #[inline]
    pub fn rules(&self) -> &SolverRules {
        &self.rules
    }

    #[inline]
    pub fn iter_sts_cranes(&self) -> impl Iterator<Item = (usize, &Crane)> {
        self.cranes.iter().enumerate().filter(|(_, c)| c.is_sts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::crane::CraneType;
    use crate::problem::vessel::ProductivityPreference;
    use crate::problem::zone::YardZonePreference;
    use chrono::NaiveDate;
    use quay_alloc_core::prelude::*;

    fn calendar(n: usize) -> ShiftCalendar {
        ShiftCalendar::generate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), n)
    }

    fn berth() -> Berth {
        Berth::with_uniform_depth(QuayLength::new(1000), Depth::from_metres(16.0))
    }

    fn crane(id: &str) -> Crane {
        Crane::new(
            CraneIdentifier::new(id.to_string()),
            id,
            CraneType::Sts,
            SpaceInterval::new(QuayPosition::new(0), QuayPosition::new(1000)),
            100,
            130,
        )
    }

    fn vessel(name: &str) -> Vessel {
        Vessel::new(
            name,
            QuayLength::new(200),
            Depth::from_metres(10.0),
            100,
            2,
            ProductivityPreference::Max,
            0,
            0,
            vec![],
        )
    }

    fn build(
        vessels: Vec<Vessel>,
        cranes: Vec<Crane>,
        yard_zones: Vec<YardQuayZone>,
    ) -> Result<Problem, ProblemError> {
        let availability = CraneAvailability::full(&cranes, 2);
        Problem::new(
            berth(),
            calendar(2),
            vessels,
            cranes,
            availability,
            vec![],
            yard_zones,
            SolverRules::default(),
        )
    }

    #[test]
    fn test_valid_problem_builds() {
        let p = build(vec![vessel("V1")], vec![crane("STS-01")], vec![]).unwrap();
        assert_eq!(p.num_shifts(), 2);
        assert_eq!(p.vessels().len(), 1);
        assert_eq!(p.iter_sts_cranes().count(), 1);
        assert!(
            p.crane_by_id(&CraneIdentifier::new("STS-01".to_string()))
                .is_some()
        );
    }

    #[test]
    fn test_empty_horizon_rejected() {
        let cranes = vec![crane("STS-01")];
        let availability = CraneAvailability::full(&cranes, 0);
        let err = Problem::new(
            berth(),
            calendar(0),
            vec![vessel("V1")],
            cranes,
            availability,
            vec![],
            vec![],
            SolverRules::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ProblemError::EmptyHorizon(_)));
    }

    #[test]
    fn test_no_vessels_rejected() {
        let err = build(vec![], vec![crane("STS-01")], vec![]).unwrap_err();
        assert!(matches!(err, ProblemError::NoVessels(_)));
    }

    #[test]
    fn test_duplicate_crane_rejected() {
        let err = build(
            vec![vessel("V1")],
            vec![crane("STS-01"), crane("STS-01")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ProblemError::DuplicateCrane(_)));
    }

    #[test]
    fn test_unknown_yard_zone_rejected() {
        let mut v = vessel("V1");
        v = Vessel::new(
            v.name(),
            v.loa(),
            v.draft(),
            v.workload(),
            v.max_cranes(),
            v.productivity_preference(),
            v.arrival_shift(),
            v.arrival_hour_offset(),
            vec![YardZonePreference::new(YardZoneIdentifier::new(9), 100.0)],
        );
        let err = build(vec![v], vec![crane("STS-01")], vec![]).unwrap_err();
        assert!(matches!(err, ProblemError::UnknownYardZone(_)));
    }

    #[test]
    fn test_non_positive_workload_rejected() {
        let v = Vessel::new(
            "V0",
            QuayLength::new(200),
            Depth::from_metres(10.0),
            0,
            2,
            ProductivityPreference::Max,
            0,
            0,
            vec![],
        );
        let err = build(vec![v], vec![crane("STS-01")], vec![]).unwrap_err();
        assert!(matches!(err, ProblemError::InvalidVessel(_)));
    }
}
