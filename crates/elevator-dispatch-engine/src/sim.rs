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

use crate::{
    cost::{CostModel, DirectionalCostModel},
    dispatcher::Dispatcher,
    status::FleetStatus,
};
use elevator_dispatch_core::tick::Tick;
use elevator_dispatch_model::{
    config::BuildingConfig,
    scenario::{Scenario, ScheduledCall},
};
use serde::Serialize;
use std::{collections::VecDeque, fmt::Display};
use tracing::{info, instrument};

/// Summary of one [`Simulation::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    steps: usize,
    final_tick: Tick,
    quiescent: bool,
    submitted: usize,
    rejected: usize,
    deferred: usize,
    delivered: u64,
    floors_travelled: u64,
    final_status: FleetStatus,
}

impl RunReport {
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
    #[inline]
    pub fn final_tick(&self) -> Tick {
        self.final_tick
    }
    /// Whether the run settled before the step budget ran out.
    #[inline]
    pub fn quiescent(&self) -> bool {
        self.quiescent
    }
    #[inline]
    pub fn submitted(&self) -> usize {
        self.submitted
    }
    #[inline]
    pub fn rejected(&self) -> usize {
        self.rejected
    }
    #[inline]
    pub fn deferred(&self) -> usize {
        self.deferred
    }
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
    #[inline]
    pub fn floors_travelled(&self) -> u64 {
        self.floors_travelled
    }
    #[inline]
    pub fn final_status(&self) -> &FleetStatus {
        &self.final_status
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RunReport {{ steps: {}, quiescent: {}, submitted: {}, rejected: {}, \
             deferred: {}, delivered: {}, floors_travelled: {} }}",
            self.steps,
            self.quiescent,
            self.submitted,
            self.rejected,
            self.deferred,
            self.delivered,
            self.floors_travelled
        )
    }
}

/// Feeds a scenario into a dispatcher and steps it until it settles.
///
/// Calls scheduled at or before the current tick are submitted before the
/// next step is taken.
pub struct Simulation<M: CostModel = DirectionalCostModel> {
    dispatcher: Dispatcher<M>,
    calls: VecDeque<ScheduledCall>,
    submitted: usize,
    rejected: usize,
    deferred: usize,
}

impl Simulation<DirectionalCostModel> {
    pub fn new(config: &BuildingConfig, scenario: &Scenario) -> Self {
        Self::with_dispatcher(Dispatcher::new(config), scenario)
    }
}

impl<M: CostModel> Simulation<M> {
    pub fn with_dispatcher(dispatcher: Dispatcher<M>, scenario: &Scenario) -> Self {
        Self {
            dispatcher,
            calls: scenario.calls().iter().copied().collect(),
            submitted: 0,
            rejected: 0,
            deferred: 0,
        }
    }

    #[inline]
    pub fn dispatcher(&self) -> &Dispatcher<M> {
        &self.dispatcher
    }

    #[inline]
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<M> {
        &mut self.dispatcher
    }

    #[inline]
    pub fn pending_calls(&self) -> usize {
        self.calls.len()
    }

    /// No calls remain and the fleet is quiescent.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.calls.is_empty() && self.dispatcher.is_quiescent()
    }

    fn submit_due(&mut self) {
        let now = self.dispatcher.tick();
        while let Some(call) = self.calls.front().copied() {
            if call.tick() > now {
                break;
            }
            self.calls.pop_front();
            self.submitted += 1;
            match self
                .dispatcher
                .submit_request(call.from_floor(), call.to_floor())
            {
                Ok(s) if s.is_deferred() => self.deferred += 1,
                Ok(_) => {}
                Err(_) => self.rejected += 1,
            }
        }
    }

    /// Runs for at most `budget` steps.
    pub fn run(&mut self, budget: usize) -> RunReport {
        self.run_with(budget, |_, _| {})
    }

    /// Like [`Simulation::run`], calling `on_step` with the step number and
    /// the dispatcher after every step.
    #[instrument(skip_all, fields(budget = budget, steps))]
    pub fn run_with<F>(&mut self, budget: usize, mut on_step: F) -> RunReport
    where
        F: FnMut(usize, &Dispatcher<M>),
    {
        self.submit_due();

        let mut steps = 0;
        while steps < budget && !self.is_finished() {
            self.dispatcher.step();
            steps += 1;
            self.submit_due();
            on_step(steps, &self.dispatcher);
        }
        tracing::Span::current().record("steps", steps);

        let report = self.report(steps);
        info!(
            steps,
            quiescent = report.quiescent,
            delivered = report.delivered,
            rejected = report.rejected,
            "Simulation finished"
        );
        report
    }

    fn report(&self, steps: usize) -> RunReport {
        let elevators = self.dispatcher.elevators();
        RunReport {
            steps,
            final_tick: self.dispatcher.tick(),
            quiescent: self.is_finished(),
            submitted: self.submitted,
            rejected: self.rejected,
            deferred: self.deferred,
            delivered: elevators.iter().map(|e| e.delivered_count()).sum(),
            floors_travelled: elevators.iter().map(|e| e.floors_travelled()).sum(),
            final_status: self.dispatcher.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevator_dispatch_core::floor::Floor;
    use elevator_dispatch_model::{
        config::{BuildingConfigBuilder, ExchangePolicy},
        scenario::{ScenarioGenConfigBuilder, ScenarioGenerator},
    };

    fn call(t: u64, from: i32, to: i32) -> ScheduledCall {
        ScheduledCall::new(Tick::new(t), Floor::new(from), Floor::new(to))
    }

    #[test]
    fn test_demo_scenario_settles_within_budget() {
        let mut sim = Simulation::new(&BuildingConfig::default(), &Scenario::demo());
        let report = sim.run(50);

        assert!(report.quiescent(), "{report}");
        assert!(report.steps() <= 50);
        assert_eq!(report.submitted(), 8);
        assert_eq!(report.rejected(), 0);
        assert_eq!(report.deferred(), 0);
        assert_eq!(report.delivered(), 8);
        assert_eq!(sim.pending_calls(), 0);
    }

    #[test]
    fn test_calls_are_submitted_on_their_tick() {
        let scenario = Scenario::new(vec![call(0, 1, 3), call(4, 5, 2)]);
        let cfg = BuildingConfigBuilder::new()
            .floors(Floor::new(1), Floor::new(10))
            .elevator_count(1)
            .capacity(4)
            .build()
            .unwrap();
        let mut sim = Simulation::new(&cfg, &scenario);

        let mut seen = Vec::new();
        sim.run_with(100, |step, d| {
            seen.push((step, d.elevators()[0].queue_len(), d.tick()));
        });
        // Tick 4 is reached after the fourth step, and the second call is
        // submitted straight away.
        assert_eq!(seen[3].2, Tick::new(4));
        assert!(seen[3].1 >= 1);
        assert!(seen.iter().take(3).all(|&(_, q, _)| q <= 1));
    }

    #[test]
    fn test_quiet_gap_keeps_running_until_late_call() {
        let scenario = Scenario::new(vec![call(0, 1, 2), call(30, 2, 1)]);
        let mut sim = Simulation::new(&BuildingConfig::default(), &scenario);
        let report = sim.run(200);
        assert!(report.quiescent());
        assert!(report.final_tick() > Tick::new(30));
        assert_eq!(report.delivered(), 2);
    }

    #[test]
    fn test_budget_exhaustion_is_reported() {
        let mut sim = Simulation::new(&BuildingConfig::default(), &Scenario::demo());
        let report = sim.run(3);
        assert_eq!(report.steps(), 3);
        assert!(!report.quiescent());
        assert_eq!(report.final_tick(), Tick::new(3));
    }

    #[test]
    fn test_invalid_calls_are_counted_as_rejected() {
        let scenario = Scenario::new(vec![call(0, 0, 4), call(0, 3, 3), call(1, 2, 4)]);
        let mut sim = Simulation::new(&BuildingConfig::default(), &scenario);
        let report = sim.run(50);
        assert_eq!(report.submitted(), 3);
        assert_eq!(report.rejected(), 2);
        assert_eq!(report.delivered(), 1);
        assert!(report.quiescent());
    }

    #[test]
    fn test_generated_scenarios_settle_under_both_policies() {
        for policy in [ExchangePolicy::FixedBatch, ExchangePolicy::PerRequest] {
            for seed in 0..8 {
                let cfg = BuildingConfigBuilder::new()
                    .floors(Floor::new(1), Floor::new(12))
                    .elevator_count(3)
                    .capacity(4)
                    .exchange_policy(policy)
                    .build()
                    .unwrap();
                let scenario = ScenarioGenerator::new(
                    ScenarioGenConfigBuilder::new()
                        .floor_range(cfg.floor_range())
                        .call_count(40)
                        .arrivals_per_tick(1.0)
                        .seed(seed)
                        .build()
                        .unwrap(),
                )
                .generate();

                let report = Simulation::new(&cfg, &scenario).run(2_000);
                assert!(report.quiescent(), "{policy} seed {seed}: {report}");
                assert_eq!(report.rejected(), 0);
                assert_eq!(report.delivered(), 40, "{policy} seed {seed}");
                assert!(
                    report
                        .final_status()
                        .elevators()
                        .iter()
                        .all(|e| e.load() <= e.capacity())
                );
            }
        }
    }
}
