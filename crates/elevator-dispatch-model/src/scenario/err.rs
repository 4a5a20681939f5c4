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

use elevator_dispatch_core::floor::FloorRange;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleFloorBuildingError {
    range: FloorRange,
}

impl SingleFloorBuildingError {
    pub fn new(range: FloorRange) -> Self {
        Self { range }
    }
    pub fn range(&self) -> FloorRange {
        self.range
    }
}

impl Display for SingleFloorBuildingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SingleFloorBuildingError: floor range {} has no two distinct floors",
            self.range
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioGenConfigBuildError {
    SingleFloorBuilding(SingleFloorBuildingError),
    NonPositiveArrivalRate(f64),
    MissingFloorRange,
    MissingCallCount,
}

impl Display for ScenarioGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ScenarioGenConfigBuildError::*;
        match self {
            SingleFloorBuilding(e) => write!(f, "{}", e),
            NonPositiveArrivalRate(r) => {
                write!(f, "Arrival rate must be positive and finite, got {r}")
            }
            MissingFloorRange => write!(f, "Missing floor_range"),
            MissingCallCount => write!(f, "Missing call_count"),
        }
    }
}

impl From<SingleFloorBuildingError> for ScenarioGenConfigBuildError {
    fn from(err: SingleFloorBuildingError) -> Self {
        Self::SingleFloorBuilding(err)
    }
}

impl std::error::Error for ScenarioGenConfigBuildError {}
