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

use elevator_dispatch_core::floor::Floor;
use elevator_dispatch_engine::prelude::*;
use elevator_dispatch_model::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const DEMO_BUDGET: usize = 50;
const STATUS_EVERY: usize = 5;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    floors: i32,
    elevators: usize,
    capacity: u32,
    calls: usize,
    arrivals_per_tick: f64,
    exchange_policy: String,
}

#[derive(Debug, Clone, Serialize)]
struct BatchResult {
    instance: InstanceInfo,
    elapsed_us: u128,
    report: RunReport,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationReport {
    description: String,
    demo: RunReport,
    batch: Vec<BatchResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    let num = (val1 as isize - val0 as isize) * step as isize;
    (val0 as isize + num / (steps as isize - 1)).max(0) as usize
}

fn run_demo() -> RunReport {
    let config = BuildingConfig::default();
    println!("{config}");
    let mut sim = Simulation::new(&config, &Scenario::demo());

    println!("{}", sim.dispatcher().status());
    let report = sim.run_with(DEMO_BUDGET, |step, dispatcher| {
        if step % STATUS_EVERY == 0 {
            println!("After step {step}:");
            println!("{}", dispatcher.status());
        }
    });

    println!("Final state:");
    println!("{}", report.final_status());
    if report.quiescent() {
        println!("All elevators idle after {} steps.", report.steps());
    } else {
        println!("Step budget of {DEMO_BUDGET} exhausted before the fleet settled.");
    }
    report
}

/// One instance of the ramp: a building of `idx`-dependent size fed with a
/// seeded random call stream.
fn run_instance(idx: usize, n_instances: usize) -> BatchResult {
    let floors = interpolate_u(10, 60, idx, n_instances) as i32;
    let elevators = interpolate_u(2, 12, idx, n_instances);
    let calls = interpolate_u(50, 2_000, idx, n_instances);
    let seed = 42 + idx as u64;
    let policy = if idx % 2 == 0 {
        ExchangePolicy::FixedBatch
    } else {
        ExchangePolicy::PerRequest
    };
    let arrivals_per_tick = 0.25 * elevators as f64;

    let config = BuildingConfigBuilder::new()
        .floors(Floor::new(1), Floor::new(floors))
        .elevator_count(elevators)
        .capacity(8)
        .exchange_policy(policy)
        .build()
        .expect("valid building config");
    let scenario_cfg = ScenarioGenConfigBuilder::new()
        .floor_range(config.floor_range())
        .call_count(calls)
        .arrivals_per_tick(arrivals_per_tick)
        .seed(seed)
        .build()
        .expect("valid scenario config");
    let mut generator: ScenarioGenerator = scenario_cfg.into();
    let scenario = generator.generate();

    // Generous budget: the last arrival plus time to sweep the shaft a few times.
    let budget = scenario
        .last_tick()
        .map_or(0, |t| t.value() as usize)
        + 20 * floors as usize;

    let t0 = Instant::now();
    let report = Simulation::new(&config, &scenario).run(budget);
    let elapsed = t0.elapsed();

    info!(idx, seed, steps = report.steps(), quiescent = report.quiescent(), "Instance done");

    BatchResult {
        instance: InstanceInfo {
            idx,
            seed,
            floors,
            elevators,
            capacity: config.capacity(),
            calls,
            arrivals_per_tick,
            exchange_policy: format!("{policy}"),
        },
        elapsed_us: elapsed.as_micros(),
        report,
    }
}

fn main() {
    enable_tracing();

    let demo = run_demo();

    let n_instances = 10usize;
    let batch: Vec<BatchResult> = (0..n_instances)
        .into_par_iter()
        .map(|idx| run_instance(idx, n_instances))
        .collect();

    for r in &batch {
        println!(
            "#{:<2} floors {:>2}, cars {:>2}, calls {:>4}, {:<10} -> {} ({} us)",
            r.instance.idx,
            r.instance.floors,
            r.instance.elevators,
            r.instance.calls,
            r.instance.exchange_policy,
            r.report,
            r.elapsed_us
        );
    }

    let report = SimulationReport {
        description: "Elevator dispatch: fixed demo scenario plus 10 seeded scenarios from small to big buildings.".into(),
        demo,
        batch,
    };

    let file = File::create("sim_results.json").expect("create sim_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!();
    println!("Wrote: sim_results.json");
}
