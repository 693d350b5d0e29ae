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

/// A vessel that cannot berth anywhere: no position inside the
/// clearance margins has enough water under the whole hull. The solve
/// is decided before the engine ever runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoBerthPositionError {
    vessel: String,
}

impl NoBerthPositionError {
    pub fn new(vessel: impl Into<String>) -> Self {
        Self {
            vessel: vessel.into(),
        }
    }

    pub fn vessel(&self) -> &str {
        &self.vessel
    }
}

impl std::fmt::Display for NoBerthPositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No berth position with sufficient depth for vessel {}",
            self.vessel
        )
    }
}

impl std::error::Error for NoBerthPositionError {}
