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

use crate::problem::crane::{Crane, CraneIdentifier};
use std::collections::BTreeSet;

/// Which cranes may work in which shift.
///
/// Built from the fleet and the configured unavailability list: every
/// crane is available in every shift unless explicitly taken out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraneAvailability {
    per_shift: Vec<BTreeSet<CraneIdentifier>>,
}

impl CraneAvailability {
    /// All cranes available in all `num_shifts` shifts.
    pub fn full(cranes: &[Crane], num_shifts: usize) -> Self {
        let all: BTreeSet<CraneIdentifier> = cranes.iter().map(|c| c.id().clone()).collect();
        Self {
            per_shift: vec![all; num_shifts],
        }
    }

    /// Remove `crane` from the given shift. Out-of-horizon shift indices
    /// are ignored; the caller validates crane ids.
    pub fn remove(&mut self, crane: &CraneIdentifier, shift: usize) {
        if let Some(set) = self.per_shift.get_mut(shift) {
            set.remove(crane);
        }
    }

    #[inline]
    pub fn num_shifts(&self) -> usize {
        self.per_shift.len()
    }

    #[inline]
    pub fn is_available(&self, crane: &CraneIdentifier, shift: usize) -> bool {
        self.per_shift
            .get(shift)
            .is_some_and(|set| set.contains(crane))
    }

    /// The cranes usable in `shift`, in id order.
    #[inline]
    pub fn available_in(&self, shift: usize) -> impl Iterator<Item = &CraneIdentifier> {
        self.per_shift.get(shift).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::crane::CraneType;
    use quay_alloc_core::prelude::{QuayPosition, SpaceInterval};

    fn fleet() -> Vec<Crane> {
        ["STS-01", "STS-02", "MHC-01"]
            .into_iter()
            .map(|id| {
                Crane::new(
                    CraneIdentifier::new(id.to_string()),
                    id,
                    if id.starts_with("STS") {
                        CraneType::Sts
                    } else {
                        CraneType::Mhc
                    },
                    SpaceInterval::new(QuayPosition::new(0), QuayPosition::new(2000)),
                    60,
                    90,
                )
            })
            .collect()
    }

    #[inline]
    fn cid(s: &str) -> CraneIdentifier {
        CraneIdentifier::new(s.to_string())
    }

    #[test]
    fn test_full_availability() {
        let a = CraneAvailability::full(&fleet(), 4);
        assert_eq!(a.num_shifts(), 4);
        for t in 0..4 {
            assert!(a.is_available(&cid("STS-01"), t));
            assert_eq!(a.available_in(t).count(), 3);
        }
    }

    #[test]
    fn test_remove_affects_single_shift() {
        let mut a = CraneAvailability::full(&fleet(), 4);
        a.remove(&cid("STS-01"), 1);
        assert!(a.is_available(&cid("STS-01"), 0));
        assert!(!a.is_available(&cid("STS-01"), 1));
        assert!(a.is_available(&cid("STS-01"), 2));
        assert_eq!(a.available_in(1).count(), 2);
    }

    #[test]
    fn test_out_of_horizon_queries() {
        let mut a = CraneAvailability::full(&fleet(), 2);
        // Removing past the horizon is a no-op, not a panic.
        a.remove(&cid("STS-01"), 99);
        assert!(!a.is_available(&cid("STS-01"), 99));
        assert_eq!(a.available_in(99).count(), 0);
    }
}
