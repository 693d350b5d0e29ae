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
use crate::problem::zone::YardZoneIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyHorizonError;

impl std::fmt::Display for EmptyHorizonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The planning horizon contains no shifts.")
    }
}

impl std::error::Error for EmptyHorizonError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoVesselsError;

impl std::fmt::Display for NoVesselsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The problem contains no vessels.")
    }
}

impl std::error::Error for NoVesselsError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateCraneError {
    id: CraneIdentifier,
}

impl DuplicateCraneError {
    pub fn new(id: CraneIdentifier) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &CraneIdentifier {
        &self.id
    }
}

impl std::fmt::Display for DuplicateCraneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Crane {} is declared more than once", self.id)
    }
}

impl std::error::Error for DuplicateCraneError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownCraneError {
    id: CraneIdentifier,
}

impl UnknownCraneError {
    pub fn new(id: CraneIdentifier) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &CraneIdentifier {
        &self.id
    }
}

impl std::fmt::Display for UnknownCraneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Crane {} is not part of the fleet", self.id)
    }
}

impl std::error::Error for UnknownCraneError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateYardZoneError {
    id: YardZoneIdentifier,
}

impl DuplicateYardZoneError {
    pub fn new(id: YardZoneIdentifier) -> Self {
        Self { id }
    }

    pub fn id(&self) -> YardZoneIdentifier {
        self.id
    }
}

impl std::fmt::Display for DuplicateYardZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Yard-quay zone {} is declared more than once", self.id)
    }
}

impl std::error::Error for DuplicateYardZoneError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownYardZoneError {
    vessel: String,
    zone: YardZoneIdentifier,
}

impl UnknownYardZoneError {
    pub fn new(vessel: impl Into<String>, zone: YardZoneIdentifier) -> Self {
        Self {
            vessel: vessel.into(),
            zone,
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn zone(&self) -> YardZoneIdentifier {
        self.zone
    }
}

impl std::fmt::Display for UnknownYardZoneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vessel {} targets {}, which is not declared",
            self.vessel, self.zone
        )
    }
}

impl std::error::Error for UnknownYardZoneError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidVesselError {
    vessel: String,
    detail: String,
}

impl InvalidVesselError {
    pub fn new(vessel: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            vessel: vessel.into(),
            detail: detail.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl std::fmt::Display for InvalidVesselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vessel {}: {}", self.vessel, self.detail)
    }
}

impl std::error::Error for InvalidVesselError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownRuleError {
    name: String,
}

impl UnknownRuleError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for UnknownRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown solver rule {:?}", self.name)
    }
}

impl std::error::Error for UnknownRuleError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError {
    EmptyHorizon(EmptyHorizonError),
    NoVessels(NoVesselsError),
    DuplicateCrane(DuplicateCraneError),
    UnknownCrane(UnknownCraneError),
    DuplicateYardZone(DuplicateYardZoneError),
    UnknownYardZone(UnknownYardZoneError),
    InvalidVessel(InvalidVesselError),
    UnknownRule(UnknownRuleError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::EmptyHorizon(e) => write!(f, "{}", e),
            ProblemError::NoVessels(e) => write!(f, "{}", e),
            ProblemError::DuplicateCrane(e) => write!(f, "{}", e),
            ProblemError::UnknownCrane(e) => write!(f, "{}", e),
            ProblemError::DuplicateYardZone(e) => write!(f, "{}", e),
            ProblemError::UnknownYardZone(e) => write!(f, "{}", e),
            ProblemError::InvalidVessel(e) => write!(f, "{}", e),
            ProblemError::UnknownRule(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<EmptyHorizonError> for ProblemError {
    fn from(err: EmptyHorizonError) -> Self {
        ProblemError::EmptyHorizon(err)
    }
}

impl From<NoVesselsError> for ProblemError {
    fn from(err: NoVesselsError) -> Self {
        ProblemError::NoVessels(err)
    }
}

impl From<DuplicateCraneError> for ProblemError {
    fn from(err: DuplicateCraneError) -> Self {
        ProblemError::DuplicateCrane(err)
    }
}

impl From<UnknownCraneError> for ProblemError {
    fn from(err: UnknownCraneError) -> Self {
        ProblemError::UnknownCrane(err)
    }
}

impl From<DuplicateYardZoneError> for ProblemError {
    fn from(err: DuplicateYardZoneError) -> Self {
        ProblemError::DuplicateYardZone(err)
    }
}

impl From<UnknownYardZoneError> for ProblemError {
    fn from(err: UnknownYardZoneError) -> Self {
        ProblemError::UnknownYardZone(err)
    }
}

impl From<InvalidVesselError> for ProblemError {
    fn from(err: InvalidVesselError) -> Self {
        ProblemError::InvalidVessel(err)
    }
}

impl From<UnknownRuleError> for ProblemError {
    fn from(err: UnknownRuleError) -> Self {
        ProblemError::UnknownRule(err)
    }
}
