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

use crate::err::BuildingConfigBuildError;
use elevator_dispatch_core::floor::{Floor, FloorRange};
use serde::Serialize;
use std::fmt::Display;

/// How passengers are exchanged when a car opens its doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ExchangePolicy {
    /// Unload and then load up to `exchange_batch` passengers per stop,
    /// regardless of which requests actually start or end at the floor.
    #[default]
    FixedBatch,
    /// Unload exactly the riding requests ending at the floor and board the
    /// waiting requests starting there, as far as capacity allows.
    PerRequest,
}

impl Display for ExchangePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangePolicy::FixedBatch => write!(f, "FixedBatch"),
            ExchangePolicy::PerRequest => write!(f, "PerRequest"),
        }
    }
}

/// Static description of a building and its elevator fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingConfig {
    pub(crate) floor_range: FloorRange,
    pub(crate) elevator_count: usize,
    pub(crate) capacity: u32,
    pub(crate) exchange_batch: u32,
    pub(crate) exchange_policy: ExchangePolicy,
    pub(crate) wrong_way_penalty: u32,
    pub(crate) unload_above: Floor,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floor_range: FloorRange::new(Floor::new(1), Floor::new(10)),
            elevator_count: 3,
            capacity: 8,
            exchange_batch: 2,
            exchange_policy: ExchangePolicy::FixedBatch,
            wrong_way_penalty: 10,
            unload_above: Floor::ground(),
        }
    }
}

impl BuildingConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        floor_range: FloorRange,
        elevator_count: usize,
        capacity: u32,
        exchange_batch: u32,
        exchange_policy: ExchangePolicy,
        wrong_way_penalty: u32,
        unload_above: Floor,
    ) -> Result<Self, BuildingConfigBuildError> {
        if capacity == 0 {
            return Err(BuildingConfigBuildError::ZeroCapacity);
        }
        if exchange_batch == 0 {
            return Err(BuildingConfigBuildError::ZeroExchangeBatch);
        }

        Ok(Self {
            floor_range,
            elevator_count,
            capacity,
            exchange_batch,
            exchange_policy,
            wrong_way_penalty,
            unload_above,
        })
    }

    #[inline]
    pub fn floor_range(&self) -> FloorRange {
        self.floor_range
    }
    #[inline]
    pub fn min_floor(&self) -> Floor {
        self.floor_range.min()
    }
    #[inline]
    pub fn max_floor(&self) -> Floor {
        self.floor_range.max()
    }
    #[inline]
    pub fn elevator_count(&self) -> usize {
        self.elevator_count
    }
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
    #[inline]
    pub fn exchange_batch(&self) -> u32 {
        self.exchange_batch
    }
    #[inline]
    pub fn exchange_policy(&self) -> ExchangePolicy {
        self.exchange_policy
    }
    #[inline]
    pub fn wrong_way_penalty(&self) -> u32 {
        self.wrong_way_penalty
    }
    /// Cars only unload at floors strictly above this one.
    #[inline]
    pub fn unload_above(&self) -> Floor {
        self.unload_above
    }
}

impl Display for BuildingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BuildingConfig {{ \
             floors: {}, elevator_count: {}, capacity: {}, \
             exchange_batch: {}, exchange_policy: {}, \
             wrong_way_penalty: {}, unload_above: {} \
             }}",
            self.floor_range,
            self.elevator_count,
            self.capacity,
            self.exchange_batch,
            self.exchange_policy,
            self.wrong_way_penalty,
            self.unload_above.value()
        )
    }
}

/// Builder for `BuildingConfig`.
pub struct BuildingConfigBuilder {
    // Required
    floor_range: Option<FloorRange>,
    elevator_count: Option<usize>,
    capacity: Option<u32>,

    // Optional with defaults
    exchange_batch: u32,
    exchange_policy: ExchangePolicy,
    wrong_way_penalty: u32,
    unload_above: Floor,
}

impl Default for BuildingConfigBuilder {
    fn default() -> Self {
        Self {
            floor_range: None,
            elevator_count: None,
            capacity: None,

            exchange_batch: 2,
            exchange_policy: ExchangePolicy::FixedBatch,
            wrong_way_penalty: 10,
            unload_above: Floor::ground(),
        }
    }
}

impl BuildingConfigBuilder {
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
    pub fn elevator_count(mut self, v: usize) -> Self {
        self.elevator_count = Some(v);
        self
    }
    #[inline]
    pub fn capacity(mut self, v: u32) -> Self {
        self.capacity = Some(v);
        self
    }
    #[inline]
    pub fn exchange_batch(mut self, v: u32) -> Self {
        self.exchange_batch = v;
        self
    }
    #[inline]
    pub fn exchange_policy(mut self, v: ExchangePolicy) -> Self {
        self.exchange_policy = v;
        self
    }
    #[inline]
    pub fn wrong_way_penalty(mut self, v: u32) -> Self {
        self.wrong_way_penalty = v;
        self
    }
    #[inline]
    pub fn unload_above(mut self, v: Floor) -> Self {
        self.unload_above = v;
        self
    }

    pub fn build(self) -> Result<BuildingConfig, BuildingConfigBuildError> {
        use BuildingConfigBuildError::*;
        let floor_range = self.floor_range.ok_or(MissingFloorRange)?;
        let elevator_count = self.elevator_count.ok_or(MissingElevatorCount)?;
        let capacity = self.capacity.ok_or(MissingCapacity)?;

        BuildingConfig::new(
            floor_range,
            elevator_count,
            capacity,
            self.exchange_batch,
            self.exchange_policy,
            self.wrong_way_penalty,
            self.unload_above,
        )
    }
}
