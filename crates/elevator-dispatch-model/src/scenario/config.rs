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

use std::fmt::Display;

use elevator_dispatch_core::floor::{Floor, FloorRange};
use rand::Rng;

use super::err::{ScenarioGenConfigBuildError, SingleFloorBuildingError};

/// Configuration for synthetic call streams.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioGenConfig {
    pub(crate) floor_range: FloorRange,
    pub(crate) call_count: usize,
    pub(crate) arrivals_per_tick: f64,
    pub(crate) seed: u64,
}

impl Default for ScenarioGenConfig {
    fn default() -> Self {
        Self {
            floor_range: FloorRange::new(Floor::new(1), Floor::new(10)),
            call_count: 20,
            arrivals_per_tick: 0.5,
            seed: 42,
        }
    }
}

impl ScenarioGenConfig {
    pub fn new(
        floor_range: FloorRange,
        call_count: usize,
        arrivals_per_tick: f64,
        seed: u64,
    ) -> Result<Self, ScenarioGenConfigBuildError> {
        if floor_range.floor_count() < 2 {
            return Err(SingleFloorBuildingError::new(floor_range).into());
        }
        if !(arrivals_per_tick.is_finite() && arrivals_per_tick > 0.0) {
            return Err(ScenarioGenConfigBuildError::NonPositiveArrivalRate(
                arrivals_per_tick,
            ));
        }

        Ok(Self {
            floor_range,
            call_count,
            arrivals_per_tick,
            seed,
        })
    }

    #[inline]
    pub fn floor_range(&self) -> FloorRange {
        self.floor_range
    }
    #[inline]
    pub fn call_count(&self) -> usize {
        self.call_count
    }
    #[inline]
    pub fn arrivals_per_tick(&self) -> f64 {
        self.arrivals_per_tick
    }
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Display for ScenarioGenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ScenarioGenConfig {{ floors: {}, call_count: {}, arrivals_per_tick: {:.4}, seed: {} }}",
            self.floor_range, self.call_count, self.arrivals_per_tick, self.seed
        )
    }
}

/// Builder for `ScenarioGenConfig`.
pub struct ScenarioGenConfigBuilder {
    floor_range: Option<FloorRange>,
    call_count: Option<usize>,

    arrivals_per_tick: f64,
    seed: u64,
}

impl Default for ScenarioGenConfigBuilder {
    fn default() -> Self {
        Self {
            floor_range: None,
            call_count: None,
            arrivals_per_tick: 0.5,
            seed: rand::rng().random(),
        }
    }
}

impl ScenarioGenConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn floors(mut self, min: Floor, max: Floor) -> Self {
        self.floor_range = Some(FloorRange::new(min, max));
        self
    }
    #[inline]
    pub fn floor_range(mut self, v: FloorRange) -> Self {
        self.floor_range = Some(v);
        self
    }
    #[inline]
    pub fn call_count(mut self, v: usize) -> Self {
        self.call_count = Some(v);
        self
    }
    #[inline]
    pub fn arrivals_per_tick(mut self, v: f64) -> Self {
        self.arrivals_per_tick = v;
        self
    }
    pub fn random_seed(mut self) -> Self {
        self.seed = rand::rng().random();
        self
    }
    #[inline]
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    pub fn build(self) -> Result<ScenarioGenConfig, ScenarioGenConfigBuildError> {
        use ScenarioGenConfigBuildError::*;
        let floor_range = self.floor_range.ok_or(MissingFloorRange)?;
        let call_count = self.call_count.ok_or(MissingCallCount)?;

        ScenarioGenConfig::new(floor_range, call_count, self.arrivals_per_tick, self.seed)
    }
}
