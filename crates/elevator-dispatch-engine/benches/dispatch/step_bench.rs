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

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use elevator_dispatch_core::floor::Floor;
use elevator_dispatch_engine::{
    cost::{CostModel, DirectionalCostModel, DistanceCostModel},
    dispatcher::Dispatcher,
};
use elevator_dispatch_model::config::{BuildingConfig, BuildingConfigBuilder, ExchangePolicy};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const FLOORS: i32 = 40;

fn building(cars: usize, policy: ExchangePolicy) -> BuildingConfig {
    BuildingConfigBuilder::new()
        .floors(Floor::new(1), Floor::new(FLOORS))
        .elevator_count(cars)
        .capacity(12)
        .exchange_policy(policy)
        .build()
        .expect("valid building")
}

fn gen_trips(n: usize, rng: &mut impl Rng) -> Vec<(Floor, Floor)> {
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let from = rng.random_range(1..=FLOORS);
        let to = rng.random_range(1..=FLOORS);
        if from != to {
            out.push((Floor::new(from), Floor::new(to)));
        }
    }
    out
}

/// A dispatcher that already carries `load` trips, with a few steps taken so
/// that cars are spread over the shaft.
fn warmed<M: CostModel + Clone>(
    cfg: &BuildingConfig,
    model: M,
    load: &[(Floor, Floor)],
) -> Dispatcher<M> {
    let mut d = Dispatcher::with_cost_model(cfg, model);
    for &(from, to) in load {
        d.submit_request(from, to).expect("valid trip");
    }
    for _ in 0..10 {
        d.step();
    }
    d.drain_events();
    d
}

fn register_submit(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_submit");
    let mut rng = ChaCha8Rng::seed_from_u64(0xD15_7A7C);
    let load = gen_trips(200, &mut rng);
    let trips = gen_trips(1_000, &mut rng);
    group.throughput(Throughput::Elements(trips.len() as u64));

    for cars in [2usize, 8, 32] {
        let cfg = building(cars, ExchangePolicy::FixedBatch);
        let directional = warmed(&cfg, DirectionalCostModel::new(10), &load);
        let distance = warmed(&cfg, DistanceCostModel, &load);

        group.bench_function(BenchmarkId::new("directional", cars), |b| {
            b.iter_batched(
                || directional.clone(),
                |mut d| {
                    for &(from, to) in &trips {
                        black_box(d.submit_request(from, to).ok());
                    }
                    black_box(d);
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(BenchmarkId::new("distance", cars), |b| {
            b.iter_batched(
                || distance.clone(),
                |mut d| {
                    for &(from, to) in &trips {
                        black_box(d.submit_request(from, to).ok());
                    }
                    black_box(d);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn register_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_step");
    let steps = 200usize;
    group.throughput(Throughput::Elements(steps as u64));
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let load = gen_trips(500, &mut rng);

    for policy in [ExchangePolicy::FixedBatch, ExchangePolicy::PerRequest] {
        for cars in [4usize, 16] {
            let cfg = building(cars, policy);
            let start = warmed(&cfg, DirectionalCostModel::new(10), &load);
            group.bench_function(BenchmarkId::new(format!("{policy}"), cars), |b| {
                b.iter_batched(
                    || start.clone(),
                    |mut d| {
                        for _ in 0..steps {
                            d.step();
                        }
                        black_box(d.drain_events().len())
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, register_submit, register_step);
criterion_main!(benches);
