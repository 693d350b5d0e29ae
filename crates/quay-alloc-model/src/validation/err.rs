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

use crate::problem::crane::CraneIdentifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownSolutionVesselError {
    vessel: String,
}

impl UnknownSolutionVesselError {
    pub fn new(vessel: impl Into<String>) -> Self {
        Self {
            vessel: vessel.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }
}

impl std::fmt::Display for UnknownSolutionVesselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Solution schedules vessel {} which the problem does not contain",
            self.vessel
        )
    }
}

impl std::error::Error for UnknownSolutionVesselError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VesselWindowError {
    vessel: String,
    detail: String,
}

impl VesselWindowError {
    pub fn new(vessel: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            vessel: vessel.into(),
            detail: detail.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }
}

impl std::fmt::Display for VesselWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vessel {}: {}", self.vessel, self.detail)
    }
}

impl std::error::Error for VesselWindowError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VesselOverlapError {
    first: String,
    second: String,
}

impl VesselOverlapError {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }
}

impl std::fmt::Display for VesselOverlapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessels {} and {} overlap in space and time (clearance included)",
            self.first, self.second
        )
    }
}

impl std::error::Error for VesselOverlapError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InsufficientDepthError {
    vessel: String,
}

impl InsufficientDepthError {
    pub fn new(vessel: impl Into<String>) -> Self {
        Self {
            vessel: vessel.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }
}

impl std::fmt::Display for InsufficientDepthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} is berthed over water shallower than its draft",
            self.vessel
        )
    }
}

impl std::error::Error for InsufficientDepthError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForbiddenZoneViolationError {
    vessel: String,
    zone: String,
}

impl ForbiddenZoneViolationError {
    pub fn new(vessel: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            vessel: vessel.into(),
            zone: zone.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }
}

impl std::fmt::Display for ForbiddenZoneViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} intrudes into forbidden zone {:?}",
            self.vessel, self.zone
        )
    }
}

impl std::error::Error for ForbiddenZoneViolationError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkloadCoverageError {
    vessel: String,
    workload: i64,
    deliverable: i64,
}

impl WorkloadCoverageError {
    pub fn new(vessel: impl Into<String>, workload: i64, deliverable: i64) -> Self {
        Self {
            vessel: vessel.into(),
            workload,
            deliverable,
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn workload(&self) -> i64 {
        self.workload
    }

    pub fn deliverable(&self) -> i64 {
        self.deliverable
    }
}

impl std::fmt::Display for WorkloadCoverageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {}: assigned cranes can deliver at most {} of {} moves",
            self.vessel, self.deliverable, self.workload
        )
    }
}

impl std::error::Error for WorkloadCoverageError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaxCranesExceededError {
    vessel: String,
    shift: usize,
    assigned: usize,
    allowed: usize,
}

impl MaxCranesExceededError {
    pub fn new(vessel: impl Into<String>, shift: usize, assigned: usize, allowed: usize) -> Self {
        Self {
            vessel: vessel.into(),
            shift,
            assigned,
            allowed,
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn shift(&self) -> usize {
        self.shift
    }
}

impl std::fmt::Display for MaxCranesExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} has {} cranes in shift {} (allowed {})",
            self.vessel, self.assigned, self.shift, self.allowed
        )
    }
}

impl std::error::Error for MaxCranesExceededError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CraneAssignmentError {
    vessel: String,
    crane: CraneIdentifier,
    shift: usize,
    detail: String,
}

impl CraneAssignmentError {
    pub fn new(
        vessel: impl Into<String>,
        crane: CraneIdentifier,
        shift: usize,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            vessel: vessel.into(),
            crane,
            shift,
            detail: detail.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn crane(&self) -> &CraneIdentifier {
        &self.crane
    }

    pub fn shift(&self) -> usize {
        self.shift
    }
}

impl std::fmt::Display for CraneAssignmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {}, shift {}, crane {}: {}",
            self.vessel, self.shift, self.crane, self.detail
        )
    }
}

impl std::error::Error for CraneAssignmentError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StsCrossingError {
    lower_crane: CraneIdentifier,
    upper_crane: CraneIdentifier,
    shift: usize,
}

impl StsCrossingError {
    pub fn new(lower_crane: CraneIdentifier, upper_crane: CraneIdentifier, shift: usize) -> Self {
        Self {
            lower_crane,
            upper_crane,
            shift,
        }
    }

    pub fn shift(&self) -> usize {
        self.shift
    }
}

impl std::fmt::Display for StsCrossingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "STS cranes {} and {} cross in shift {}",
            self.lower_crane, self.upper_crane, self.shift
        )
    }
}

impl std::error::Error for StsCrossingError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationError {
    UnknownSolutionVessel(UnknownSolutionVesselError),
    VesselWindow(VesselWindowError),
    VesselOverlap(VesselOverlapError),
    InsufficientDepth(InsufficientDepthError),
    ForbiddenZoneViolation(ForbiddenZoneViolationError),
    WorkloadCoverage(WorkloadCoverageError),
    MaxCranesExceeded(MaxCranesExceededError),
    CraneAssignment(CraneAssignmentError),
    StsCrossing(StsCrossingError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnknownSolutionVessel(e) => write!(f, "{}", e),
            ValidationError::VesselWindow(e) => write!(f, "{}", e),
            ValidationError::VesselOverlap(e) => write!(f, "{}", e),
            ValidationError::InsufficientDepth(e) => write!(f, "{}", e),
            ValidationError::ForbiddenZoneViolation(e) => write!(f, "{}", e),
            ValidationError::WorkloadCoverage(e) => write!(f, "{}", e),
            ValidationError::MaxCranesExceeded(e) => write!(f, "{}", e),
            ValidationError::CraneAssignment(e) => write!(f, "{}", e),
            ValidationError::StsCrossing(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<UnknownSolutionVesselError> for ValidationError {
    fn from(err: UnknownSolutionVesselError) -> Self {
        ValidationError::UnknownSolutionVessel(err)
    }
}

impl From<VesselWindowError> for ValidationError {
    fn from(err: VesselWindowError) -> Self {
        ValidationError::VesselWindow(err)
    }
}

impl From<VesselOverlapError> for ValidationError {
    fn from(err: VesselOverlapError) -> Self {
        ValidationError::VesselOverlap(err)
    }
}

impl From<InsufficientDepthError> for ValidationError {
    fn from(err: InsufficientDepthError) -> Self {
        ValidationError::InsufficientDepth(err)
    }
}

impl From<ForbiddenZoneViolationError> for ValidationError {
    fn from(err: ForbiddenZoneViolationError) -> Self {
        ValidationError::ForbiddenZoneViolation(err)
    }
}

impl From<WorkloadCoverageError> for ValidationError {
    fn from(err: WorkloadCoverageError) -> Self {
        ValidationError::WorkloadCoverage(err)
    }
}

impl From<MaxCranesExceededError> for ValidationError {
    fn from(err: MaxCranesExceededError) -> Self {
        ValidationError::MaxCranesExceeded(err)
    }
}

impl From<CraneAssignmentError> for ValidationError {
    fn from(err: CraneAssignmentError) -> Self {
        ValidationError::CraneAssignment(err)
    }
}

impl From<StsCrossingError> for ValidationError {
    fn from(err: StsCrossingError) -> Self {
        ValidationError::StsCrossing(err)
    }
}
