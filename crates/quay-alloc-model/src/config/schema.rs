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

//! The persisted JSON configuration, field for field.
//!
//! These types mirror what the hosting application stores; they are
//! plain data and carry no invariants. [`crate::config::loader`] turns
//! them into a checked [`crate::problem::prob::Problem`].

use crate::problem::crane::CraneType;
use crate::problem::vessel::ProductivityPreference;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct ProblemConfig {
    pub berth: BerthConfig,
    pub shifts: ShiftsConfig,
    pub vessels: Vec<VesselConfig>,
    pub cranes: Vec<CraneConfig>,
    #[serde(default)]
    pub crane_unavailability: Vec<CraneUnavailabilityConfig>,
    #[serde(default)]
    pub forbidden_zones: Vec<ForbiddenZoneConfig>,
    #[serde(default)]
    pub yard_quay_zones: Vec<YardQuayZoneConfig>,
    #[serde(default)]
    pub solver_settings: SolverSettings,
    #[serde(default)]
    pub solver_rules: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BerthConfig {
    pub length: i64,
    #[serde(default)]
    pub depth_map: Vec<DepthEntryConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DepthEntryConfig {
    pub position: i64,
    pub depth: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsConfig {
    /// `DDMMYYYY`; the first shift starts at midnight of this date.
    pub start_date: String,
    pub num_shifts: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VesselConfig {
    pub name: String,
    pub workload: i64,
    pub loa: i64,
    pub draft: f64,
    pub arrival_shift: usize,
    #[serde(default)]
    pub arrival_hour_offset: i64,
    pub max_cranes: usize,
    pub productivity_preference: ProductivityPreference,
    #[serde(default)]
    pub target_zones: Vec<TargetZoneConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TargetZoneConfig {
    pub yard_quay_zone_id: u32,
    pub volume: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CraneConfig {
    pub id: String,
    pub name: String,
    pub crane_type: CraneType,
    pub berth_range_start: i64,
    pub berth_range_end: i64,
    pub min_productivity: i64,
    pub max_productivity: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CraneUnavailabilityConfig {
    pub crane_id: String,
    #[serde(default)]
    pub shifts: Vec<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForbiddenZoneConfig {
    pub start_berth_position: i64,
    pub end_berth_position: i64,
    pub start_shift: usize,
    pub end_shift: usize,
    #[serde(default = "default_zone_description")]
    pub description: String,
}

fn default_zone_description() -> String {
    "Maintenance".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct YardQuayZoneConfig {
    pub id: u32,
    pub name: String,
    pub start_dist: i64,
    pub end_dist: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SolverSettings {
    #[serde(default = "default_time_limit_seconds")]
    pub time_limit_seconds: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            time_limit_seconds: default_time_limit_seconds(),
        }
    }
}

fn default_time_limit_seconds() -> u64 {
    60
}
