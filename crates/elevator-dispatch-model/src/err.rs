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

use elevator_dispatch_core::floor::{Floor, FloorRange};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidFloorError {
    floor: Floor,
    range: FloorRange,
}

impl InvalidFloorError {
    #[inline]
    pub fn new(floor: Floor, range: FloorRange) -> Self {
        Self { floor, range }
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn range(&self) -> FloorRange {
        self.range
    }
}

impl Display for InvalidFloorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lies outside the served floor range {}",
            self.floor, self.range
        )
    }
}

impl std::error::Error for InvalidFloorError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegenerateRequestError {
    floor: Floor,
}

impl DegenerateRequestError {
    #[inline]
    pub fn new(floor: Floor) -> Self {
        Self { floor }
    }

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }
}

impl Display for DegenerateRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Request from {} to itself cannot be served",
            self.floor
        )
    }
}

impl std::error::Error for DegenerateRequestError {}

/// Why a pickup/dropoff request was not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestError {
    InvalidFloor(InvalidFloorError),
    DegenerateRequest(DegenerateRequestError),
}

impl Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::InvalidFloor(e) => write!(f, "Invalid floor: {e}"),
            RequestError::DegenerateRequest(e) => write!(f, "Degenerate request: {e}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::InvalidFloor(e) => Some(e),
            RequestError::DegenerateRequest(e) => Some(e),
        }
    }
}

impl From<InvalidFloorError> for RequestError {
    fn from(err: InvalidFloorError) -> Self {
        RequestError::InvalidFloor(err)
    }
}

impl From<DegenerateRequestError> for RequestError {
    fn from(err: DegenerateRequestError) -> Self {
        RequestError::DegenerateRequest(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildingConfigBuildError {
    MissingFloorRange,
    MissingElevatorCount,
    MissingCapacity,
    ZeroCapacity,
    ZeroExchangeBatch,
}

impl Display for BuildingConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BuildingConfigBuildError::*;
        match self {
            MissingFloorRange => write!(f, "Missing floor_range"),
            MissingElevatorCount => write!(f, "Missing elevator_count"),
            MissingCapacity => write!(f, "Missing capacity"),
            ZeroCapacity => write!(f, "Elevator capacity must be at least one passenger"),
            ZeroExchangeBatch => write!(f, "Exchange batch size must be at least one passenger"),
        }
    }
}

impl std::error::Error for BuildingConfigBuildError {}
