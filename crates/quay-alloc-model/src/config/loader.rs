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

use crate::config::err::{ConfigError, InvalidStartDateError};
use crate::config::schema::{ProblemConfig, SolverSettings};
use crate::problem::{
    availability::CraneAvailability,
    berth::Berth,
    crane::{Crane, CraneIdentifier},
    err::{ProblemError, UnknownCraneError},
    prob::Problem,
    rules::SolverRules,
    shift::ShiftCalendar,
    vessel::Vessel,
    zone::{ForbiddenZone, YardQuayZone, YardZoneIdentifier, YardZonePreference},
};
use chrono::NaiveDate;
use quay_alloc_core::prelude::{Depth, QuayLength, QuayPosition, SpaceInterval};
use std::{fs::File, io::Read, path::Path};

/// A decoded configuration: the checked problem plus the solver settings
/// that ride along with it.
#[derive(Debug, Clone)]
pub struct LoadedProblem {
    problem: Problem,
    settings: SolverSettings,
}

impl LoadedProblem {
    #[inline]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    #[inline]
    pub fn settings(&self) -> SolverSettings {
        self.settings
    }

    #[inline]
    pub fn into_parts(self) -> (Problem, SolverSettings) {
        (self.problem, self.settings)
    }
}

/// Decodes the hosting application's JSON configuration into a
/// [`Problem`]. Stateless; the type exists so the conversion has a home
/// and an extension point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemLoader;

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_config(&self, config: &ProblemConfig) -> Result<LoadedProblem, ConfigError> {
        let start_date = NaiveDate::parse_from_str(&config.shifts.start_date, "%d%m%Y")
            .map_err(|_| InvalidStartDateError::new(&config.shifts.start_date))?;
        let calendar = ShiftCalendar::generate(start_date, config.shifts.num_shifts);

        let berth = Berth::new(
            QuayLength::new(config.berth.length),
            config
                .berth
                .depth_map
                .iter()
                .map(|e| (QuayPosition::new(e.position), Depth::from_metres(e.depth))),
        );

        let vessels: Vec<Vessel> = config
            .vessels
            .iter()
            .map(|vc| {
                Vessel::new(
                    vc.name.clone(),
                    QuayLength::new(vc.loa),
                    Depth::from_metres(vc.draft),
                    vc.workload,
                    vc.max_cranes,
                    vc.productivity_preference,
                    vc.arrival_shift,
                    vc.arrival_hour_offset,
                    vc.target_zones
                        .iter()
                        .map(|tz| {
                            YardZonePreference::new(
                                YardZoneIdentifier::new(tz.yard_quay_zone_id),
                                tz.volume,
                            )
                        })
                        .collect(),
                )
            })
            .collect();

        let cranes: Vec<Crane> = config
            .cranes
            .iter()
            .map(|cc| {
                Crane::new(
                    CraneIdentifier::new(cc.id.clone()),
                    cc.name.clone(),
                    cc.crane_type,
                    SpaceInterval::new(
                        QuayPosition::new(cc.berth_range_start),
                        QuayPosition::new(cc.berth_range_end),
                    ),
                    cc.min_productivity,
                    cc.max_productivity,
                )
            })
            .collect();

        let mut availability = CraneAvailability::full(&cranes, config.shifts.num_shifts);
        for entry in &config.crane_unavailability {
            let id = CraneIdentifier::new(entry.crane_id.clone());
            if !cranes.iter().any(|c| *c.id() == id) {
                return Err(ConfigError::from(ProblemError::from(
                    UnknownCraneError::new(id),
                )));
            }
            for &shift in &entry.shifts {
                if shift >= config.shifts.num_shifts {
                    tracing::warn!(
                        crane = %id,
                        shift,
                        "crane_unavailability names a shift past the horizon; ignored"
                    );
                    continue;
                }
                availability.remove(&id, shift);
            }
        }

        let forbidden_zones: Vec<ForbiddenZone> = config
            .forbidden_zones
            .iter()
            .map(|zc| {
                ForbiddenZone::new(
                    SpaceInterval::new(
                        QuayPosition::new(zc.start_berth_position),
                        QuayPosition::new(zc.end_berth_position),
                    ),
                    zc.start_shift..zc.end_shift,
                    zc.description.clone(),
                )
            })
            .collect();

        let yard_zones: Vec<YardQuayZone> = config
            .yard_quay_zones
            .iter()
            .map(|zc| {
                YardQuayZone::new(
                    YardZoneIdentifier::new(zc.id),
                    zc.name.clone(),
                    SpaceInterval::new(
                        QuayPosition::new(zc.start_dist),
                        QuayPosition::new(zc.end_dist),
                    ),
                )
            })
            .collect();

        let mut rules = SolverRules::default();
        for (name, &value) in &config.solver_rules {
            rules.set(name, value).map_err(ProblemError::from)?;
        }

        let problem = Problem::new(
            berth,
            calendar,
            vessels,
            cranes,
            availability,
            forbidden_zones,
            yard_zones,
            rules,
        )?;

        Ok(LoadedProblem {
            problem,
            settings: config.solver_settings,
        })
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<LoadedProblem, ConfigError> {
        let config: ProblemConfig = serde_json::from_str(s)?;
        self.from_config(&config)
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<LoadedProblem, ConfigError> {
        let config: ProblemConfig = serde_json::from_reader(r)?;
        self.from_config(&config)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<LoadedProblem, ConfigError> {
        let file = File::open(path)?;
        self.from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(extra: &str) -> String {
        format!(
            r#"{{
                "berth": {{"length": 1000, "depth_map": [{{"position": 0, "depth": 16.0}}]}},
                "shifts": {{"start_date": "31122025", "num_shifts": 4}},
                "vessels": [{{
                    "name": "V1", "workload": 100, "loa": 200, "draft": 10.0,
                    "arrival_shift": 0, "arrival_hour_offset": 2, "max_cranes": 2,
                    "productivity_preference": "MAX"
                }}],
                "cranes": [{{
                    "id": "STS-01", "name": "STS Crane 1", "crane_type": "STS",
                    "berth_range_start": 0, "berth_range_end": 1000,
                    "min_productivity": 100, "max_productivity": 130
                }}]{extra}
            }}"#
        )
    }

    #[test]
    fn test_minimal_config_loads() {
        let loaded = ProblemLoader::new().from_str(&minimal_json("")).unwrap();
        let p = loaded.problem();
        assert_eq!(p.num_shifts(), 4);
        assert_eq!(p.vessels().len(), 1);
        assert_eq!(p.cranes().len(), 1);
        assert_eq!(loaded.settings().time_limit_seconds, 60);
        assert_eq!(p.vessels()[0].arrival_hour_offset(), 2);
    }

    #[test]
    fn test_unavailability_is_applied() {
        let extra = r#",
            "crane_unavailability": [{"crane_id": "STS-01", "shifts": [0, 1]}]"#;
        let loaded = ProblemLoader::new().from_str(&minimal_json(extra)).unwrap();
        let p = loaded.problem();
        let id = CraneIdentifier::new("STS-01".to_string());
        assert!(!p.availability().is_available(&id, 0));
        assert!(!p.availability().is_available(&id, 1));
        assert!(p.availability().is_available(&id, 2));
    }

    #[test]
    fn test_unavailability_for_unknown_crane_fails() {
        let extra = r#",
            "crane_unavailability": [{"crane_id": "STS-99", "shifts": [0]}]"#;
        let err = ProblemLoader::new()
            .from_str(&minimal_json(extra))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Problem(ProblemError::UnknownCrane(_))
        ));
    }

    #[test]
    fn test_unknown_rule_fails() {
        let extra = r#",
            "solver_rules": {"enable_time_travel": true}"#;
        let err = ProblemLoader::new()
            .from_str(&minimal_json(extra))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Problem(ProblemError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_rules_are_applied() {
        let extra = r#",
            "solver_rules": {"enable_shifting_gang": false, "enable_crane_reach_strict": true}"#;
        let loaded = ProblemLoader::new().from_str(&minimal_json(extra)).unwrap();
        assert!(!loaded.problem().rules().shifting_gang());
        assert!(loaded.problem().rules().crane_reach_strict());
        assert!(loaded.problem().rules().sts_non_crossing());
    }

    #[test]
    fn test_bad_start_date_fails_with_field_name() {
        let json = minimal_json("").replace("31122025", "2025-12-31");
        let err = ProblemLoader::new().from_str(&json).unwrap_err();
        assert!(err.to_string().contains("shifts.start_date"));
    }

    #[test]
    fn test_demo_config_loads() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos/problem_config.json");
        let loaded = ProblemLoader::new().from_path(path).unwrap();
        let p = loaded.problem();
        assert_eq!(p.num_shifts(), 12);
        assert_eq!(p.vessels().len(), 6);
        assert_eq!(p.cranes().len(), 5);
        assert_eq!(p.yard_zones().len(), 2);
        assert_eq!(p.forbidden_zones().len(), 2);
        assert_eq!(p.vessels()[0].target_zones().len(), 2);
    }

    #[test]
    fn test_time_limit_is_read() {
        let extra = r#",
            "solver_settings": {"time_limit_seconds": 5}"#;
        let loaded = ProblemLoader::new().from_str(&minimal_json(extra)).unwrap();
        assert_eq!(loaded.settings().time_limit_seconds, 5);
    }
}
