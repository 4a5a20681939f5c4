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

mod config;
mod err;

pub use config::{ScenarioGenConfig, ScenarioGenConfigBuilder};
pub use err::{ScenarioGenConfigBuildError, SingleFloorBuildingError};

use elevator_dispatch_core::{floor::Floor, tick::Tick};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Exp};
use serde::Serialize;
use std::fmt::Display;

/// A pickup/dropoff call that a driver submits once the simulation reaches `tick`.
///
/// Floors are raw and unvalidated; admission is the dispatcher's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduledCall {
    tick: Tick,
    from_floor: Floor,
    to_floor: Floor,
}

impl ScheduledCall {
    #[inline]
    pub fn new(tick: Tick, from_floor: Floor, to_floor: Floor) -> Self {
        Self {
            tick,
            from_floor,
            to_floor,
        }
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn from_floor(&self) -> Floor {
        self.from_floor
    }

    #[inline]
    pub fn to_floor(&self) -> Floor {
        self.to_floor
    }
}

impl Display for ScheduledCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.tick,
            self.from_floor.value(),
            self.to_floor.value()
        )
    }
}

/// A time-ordered stream of calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scenario {
    calls: Vec<ScheduledCall>,
}

impl Scenario {
    /// Creates a scenario; calls are stably sorted by tick so that calls
    /// sharing a tick keep their given order.
    pub fn new(mut calls: Vec<ScheduledCall>) -> Self {
        calls.sort_by_key(|c| c.tick());
        Self { calls }
    }

    /// Three-car, ten-floor reference run: six calls up front, one more after
    /// tick 5 and another after tick 10.
    pub fn demo() -> Self {
        let call = |t: u64, from: i32, to: i32| {
            ScheduledCall::new(Tick::new(t), Floor::new(from), Floor::new(to))
        };
        Self::new(vec![
            call(0, 1, 7),
            call(0, 3, 8),
            call(0, 5, 1),
            call(0, 10, 2),
            call(0, 2, 9),
            call(0, 6, 4),
            call(5, 4, 9),
            call(10, 8, 1),
        ])
    }

    #[inline]
    pub fn calls(&self) -> &[ScheduledCall] {
        &self.calls
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    #[inline]
    pub fn last_tick(&self) -> Option<Tick> {
        self.calls.last().map(ScheduledCall::tick)
    }
}

pub struct ScenarioGenerator {
    config: ScenarioGenConfig,
    rng: SmallRng,
    gap_distribution: Exp<f64>,
}

impl From<ScenarioGenConfig> for ScenarioGenerator {
    fn from(config: ScenarioGenConfig) -> Self {
        Self::new(config)
    }
}

impl ScenarioGenerator {
    pub fn new(config: ScenarioGenConfig) -> Self {
        let seed = config.seed();
        Self {
            gap_distribution: Exp::new(config.arrivals_per_tick())
                .expect("arrival rate validated by ScenarioGenConfig"),
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ScenarioGenConfig {
        &self.config
    }

    /// Draws a pair of distinct floors uniformly from the configured range.
    fn sample_trip(&mut self) -> (Floor, Floor) {
        let range = self.config.floor_range();
        let count = range.floor_count();
        let min = i64::from(range.min().value());

        let from_offset = self.rng.random_range(0..count);
        // Skipping 1..count places ahead (wrapping) never lands on `from`.
        let skip = self.rng.random_range(1..count);
        let to_offset = (from_offset + skip) % count;

        // `min + offset` stays within the range, so narrowing back is exact.
        let floor_at = |offset: u64| Floor::new((min + offset as i64) as i32);
        (floor_at(from_offset), floor_at(to_offset))
    }

    /// Generates `call_count` calls with exponentially distributed gaps.
    pub fn generate(&mut self) -> Scenario {
        let n = self.config.call_count();
        let mut calls = Vec::with_capacity(n);
        let mut clock = 0.0_f64;

        for _ in 0..n {
            let (from, to) = self.sample_trip();
            calls.push(ScheduledCall::new(Tick::new(clock.floor() as u64), from, to));
            clock += self.gap_distribution.sample(&mut self.rng);
        }

        Scenario::new(calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevator_dispatch_core::floor::FloorRange;

    fn config(seed: u64) -> ScenarioGenConfig {
        ScenarioGenConfigBuilder::new()
            .floors(Floor::new(-2), Floor::new(12))
            .call_count(200)
            .arrivals_per_tick(0.8)
            .seed(seed)
            .build()
            .expect("valid config")
    }

    #[test]
    fn test_generated_calls_are_valid_and_ordered() {
        let cfg = config(7);
        let range = cfg.floor_range();
        let scenario = ScenarioGenerator::new(cfg).generate();

        assert_eq!(scenario.len(), 200);
        for call in scenario.calls() {
            assert!(range.contains(call.from_floor()), "{call}");
            assert!(range.contains(call.to_floor()), "{call}");
            assert_ne!(call.from_floor(), call.to_floor(), "{call}");
        }
        assert!(
            scenario
                .calls()
                .windows(2)
                .all(|w| w[0].tick() <= w[1].tick())
        );
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let a = ScenarioGenerator::new(config(11)).generate();
        let b = ScenarioGenerator::new(config(11)).generate();
        let c = ScenarioGenerator::new(config(12)).generate();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_two_floor_building_alternates_floors() {
        let cfg = ScenarioGenConfigBuilder::new()
            .floors(Floor::new(0), Floor::new(1))
            .call_count(30)
            .seed(3)
            .build()
            .unwrap();
        let scenario = ScenarioGenerator::new(cfg).generate();
        for call in scenario.calls() {
            assert_eq!(call.from_floor().distance_to(call.to_floor()).value(), 1);
        }
    }

    #[test]
    fn test_full_i32_building_generates_valid_calls() {
        let cfg = ScenarioGenConfigBuilder::new()
            .floors(Floor::new(i32::MIN), Floor::new(i32::MAX))
            .call_count(50)
            .seed(9)
            .build()
            .expect("full range is a valid building");
        let scenario = ScenarioGenerator::new(cfg).generate();
        assert_eq!(scenario.len(), 50);
        for call in scenario.calls() {
            assert_ne!(call.from_floor(), call.to_floor(), "{call}");
        }
    }

    #[test]
    fn test_builder_validation() {
        let err = ScenarioGenConfigBuilder::new().call_count(3).build().unwrap_err();
        assert_eq!(err, ScenarioGenConfigBuildError::MissingFloorRange);

        let err = ScenarioGenConfigBuilder::new()
            .floors(Floor::new(1), Floor::new(5))
            .build()
            .unwrap_err();
        assert_eq!(err, ScenarioGenConfigBuildError::MissingCallCount);

        let err = ScenarioGenConfigBuilder::new()
            .floors(Floor::new(4), Floor::new(4))
            .call_count(3)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ScenarioGenConfigBuildError::SingleFloorBuilding(e)
                if e.range() == FloorRange::new(Floor::new(4), Floor::new(4))
        ));

        let err = ScenarioGenConfigBuilder::new()
            .floors(Floor::new(1), Floor::new(5))
            .call_count(3)
            .arrivals_per_tick(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ScenarioGenConfigBuildError::NonPositiveArrivalRate(_)
        ));
    }

    #[test]
    fn test_demo_scenario_shape() {
        let demo = Scenario::demo();
        assert_eq!(demo.len(), 8);
        assert_eq!(demo.calls()[0].from_floor(), Floor::new(1));
        assert_eq!(demo.calls()[0].to_floor(), Floor::new(7));
        assert_eq!(demo.last_tick(), Some(Tick::new(10)));
        assert_eq!(demo.calls()[6].tick(), Tick::new(5));
    }

    #[test]
    fn test_scenario_sort_is_stable() {
        let s = Scenario::new(vec![
            ScheduledCall::new(Tick::new(3), Floor::new(1), Floor::new(2)),
            ScheduledCall::new(Tick::new(0), Floor::new(5), Floor::new(4)),
            ScheduledCall::new(Tick::new(3), Floor::new(2), Floor::new(1)),
        ]);
        let froms: Vec<i32> = s.calls().iter().map(|c| c.from_floor().value()).collect();
        assert_eq!(froms, vec![5, 1, 2]);
    }
}
