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
use quay_alloc_core::prelude::SpaceInterval;
use std::ops::Range;

/// A rectangular space-time block on the quay that vessels must avoid,
/// e.g. quay wall maintenance or dredging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenZone {
    span: SpaceInterval,
    shifts: Range<usize>,
    description: String,
}

impl ForbiddenZone {
    #[inline]
    pub fn new(span: SpaceInterval, shifts: Range<usize>, description: impl Into<String>) -> Self {
        Self {
            span,
            shifts,
            description: description.into(),
        }
    }

    /// Blocked quay span `[start_berth_position, end_berth_position)`.
    #[inline]
    pub fn span(&self) -> SpaceInterval {
        self.span
    }

    /// Blocked shifts `[start_shift, end_shift)`.
    #[inline]
    pub fn shifts(&self) -> Range<usize> {
        self.shifts.clone()
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YardZoneIdentifierMarker;

impl IdentifierMarkerName for YardZoneIdentifierMarker {
    const NAME: &'static str = "YardZoneId";
}

pub type YardZoneIdentifier = Identifier<u32, YardZoneIdentifierMarker>;

/// A named stretch of quay backed by a yard block; vessels with cargo
/// for that block prefer to berth close to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YardQuayZone {
    id: YardZoneIdentifier,
    name: String,
    span: SpaceInterval,
}

impl YardQuayZone {
    #[inline]
    pub fn new(id: YardZoneIdentifier, name: impl Into<String>, span: SpaceInterval) -> Self {
        Self {
            id,
            name: name.into(),
            span,
        }
    }

    #[inline]
    pub fn id(&self) -> YardZoneIdentifier {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quay span `[start_dist, end_dist)`.
    #[inline]
    pub fn span(&self) -> SpaceInterval {
        self.span
    }
}

/// A vessel's declared cargo volume for one yard-quay zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YardZonePreference {
    zone_id: YardZoneIdentifier,
    volume: f64,
}

impl YardZonePreference {
    #[inline]
    pub fn new(zone_id: YardZoneIdentifier, volume: f64) -> Self {
        Self { zone_id, volume }
    }

    #[inline]
    pub fn zone_id(&self) -> YardZoneIdentifier {
        self.zone_id
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }
}
