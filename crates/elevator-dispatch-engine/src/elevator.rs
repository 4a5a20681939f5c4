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

use crate::cost::{CostModel, DirectionalCostModel};
use elevator_dispatch_core::{cost::Cost, direction::Direction, floor::Floor};
use elevator_dispatch_model::{
    config::{BuildingConfig, ExchangePolicy},
    id::{ElevatorId, RequestId},
    req::Request,
};
use std::collections::{BTreeSet, VecDeque};

/// Where a queued request is in its life on board a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestPhase {
    Waiting,
    Riding,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedRequest {
    request: Request,
    phase: RequestPhase,
}

impl QueuedRequest {
    #[inline]
    pub fn request(&self) -> &Request {
        &self.request
    }

    #[inline]
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }
}

/// What happened while the doors were open at `floor`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    floor: Floor,
    unloaded: u32,
    loaded: u32,
    delivered: Vec<RequestId>,
    boarded: Vec<RequestId>,
    left_behind: Vec<Request>,
}

impl Exchange {
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn unloaded(&self) -> u32 {
        self.unloaded
    }

    #[inline]
    pub fn loaded(&self) -> u32 {
        self.loaded
    }

    #[inline]
    pub fn delivered(&self) -> &[RequestId] {
        &self.delivered
    }

    #[inline]
    pub fn boarded(&self) -> &[RequestId] {
        &self.boarded
    }

    /// Waiting requests that could not board for lack of room. They are no
    /// longer queued on this car.
    #[inline]
    pub fn left_behind(&self) -> &[Request] {
        &self.left_behind
    }

    #[inline]
    pub fn into_left_behind(self) -> Vec<Request> {
        self.left_behind
    }
}

/// A single car and its local scheduling state.
///
/// The car keeps an ascending set of floors it still has to visit and a FIFO
/// of the requests it has accepted. Its direction is only recomputed through
/// [`Elevator::update_direction`], after which it is `Idle` whenever no
/// destinations are left.
#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    current_floor: Floor,
    direction: Direction,
    capacity: u32,
    load: u32,
    destinations: BTreeSet<Floor>,
    queue: VecDeque<QueuedRequest>,
    doors_open: bool,

    exchange_batch: u32,
    exchange_policy: ExchangePolicy,
    unload_above: Floor,
    wrong_way_penalty: u32,

    floors_travelled: u64,
    delivered: u64,
}

impl Elevator {
    /// Creates an idle, empty car parked at the lowest served floor.
    pub fn new(id: ElevatorId, config: &BuildingConfig) -> Self {
        Self {
            id,
            current_floor: config.min_floor(),
            direction: Direction::Idle,
            capacity: config.capacity(),
            load: 0,
            destinations: BTreeSet::new(),
            queue: VecDeque::new(),
            doors_open: false,
            exchange_batch: config.exchange_batch(),
            exchange_policy: config.exchange_policy(),
            unload_above: config.unload_above(),
            wrong_way_penalty: config.wrong_way_penalty(),
            floors_travelled: 0,
            delivered: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }

    #[inline]
    pub fn doors_open(&self) -> bool {
        self.doors_open
    }

    #[inline]
    pub fn destinations(&self) -> impl Iterator<Item = Floor> + '_ {
        self.destinations.iter().copied()
    }

    #[inline]
    pub fn queued_requests(&self) -> impl Iterator<Item = &QueuedRequest> + '_ {
        self.queue.iter()
    }

    #[inline]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn floors_travelled(&self) -> u64 {
        self.floors_travelled
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered
    }

    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.load < self.capacity
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.direction.is_idle() && self.destinations.is_empty()
    }

    #[inline]
    pub fn has_destination(&self, floor: Floor) -> bool {
        self.destinations.contains(&floor)
    }

    #[inline]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// Adds `floor` to the destination set. Adding a floor twice is a no-op.
    #[inline]
    pub fn add_destination(&mut self, floor: Floor) {
        self.destinations.insert(floor);
    }

    /// Queues `request` and registers both its floors as destinations.
    pub fn add_request(&mut self, request: Request) {
        self.add_destination(request.from_floor());
        self.add_destination(request.to_floor());
        self.queue.push_back(QueuedRequest {
            request,
            phase: RequestPhase::Waiting,
        });
    }

    #[inline]
    pub fn should_stop_current_floor(&self) -> bool {
        self.has_destination(self.current_floor)
    }

    /// Opens the doors at the current floor and exchanges passengers.
    ///
    /// The current floor is struck from the destination set and riding
    /// requests that end here leave the queue before anyone boards.
    pub fn open_doors(&mut self) -> Exchange {
        self.doors_open = true;
        let floor = self.current_floor;
        self.destinations.remove(&floor);

        let mut exchange = Exchange {
            floor,
            ..Exchange::default()
        };

        for entry in self.queue.iter_mut() {
            if entry.phase == RequestPhase::Riding && entry.request.to_floor() == floor {
                entry.phase = RequestPhase::Delivered;
                exchange.delivered.push(entry.request.id());
            }
        }
        self.queue.retain(|e| e.phase != RequestPhase::Delivered);
        self.delivered += exchange.delivered.len() as u64;

        match self.exchange_policy {
            ExchangePolicy::FixedBatch => self.exchange_fixed_batch(&mut exchange),
            ExchangePolicy::PerRequest => self.exchange_per_request(&mut exchange),
        }

        exchange
    }

    fn exchange_fixed_batch(&mut self, exchange: &mut Exchange) {
        let floor = exchange.floor;
        if floor > self.unload_above {
            exchange.unloaded = self.load.min(self.exchange_batch);
            self.load -= exchange.unloaded;
        }
        if self.load < self.capacity && !self.queue.is_empty() {
            exchange.loaded = (self.capacity - self.load).min(self.exchange_batch);
            self.load += exchange.loaded;
        }

        // Counts above are batch-based; lifecycles still follow the floors.
        let mut boarded = Vec::new();
        for entry in self.queue.iter_mut() {
            if entry.phase == RequestPhase::Waiting && entry.request.from_floor() == floor {
                entry.phase = RequestPhase::Riding;
                boarded.push(entry.request.to_floor());
                exchange.boarded.push(entry.request.id());
            }
        }
        self.destinations.extend(boarded);
    }

    fn exchange_per_request(&mut self, exchange: &mut Exchange) {
        let floor = exchange.floor;
        let delivered = u32::try_from(exchange.delivered.len()).unwrap_or(u32::MAX);
        exchange.unloaded = self.load.min(delivered);
        self.load -= exchange.unloaded;

        let mut kept = VecDeque::with_capacity(self.queue.len());
        for mut entry in self.queue.drain(..) {
            if entry.phase != RequestPhase::Waiting || entry.request.from_floor() != floor {
                kept.push_back(entry);
                continue;
            }
            if self.load < self.capacity {
                self.load += 1;
                exchange.loaded += 1;
                exchange.boarded.push(entry.request.id());
                self.destinations.insert(entry.request.to_floor());
                entry.phase = RequestPhase::Riding;
                kept.push_back(entry);
            } else {
                exchange.left_behind.push(entry.request);
            }
        }
        self.queue = kept;
    }

    #[inline]
    pub fn close_doors(&mut self) {
        self.doors_open = false;
    }

    /// Picks the next floor to head for, if any.
    ///
    /// Going up (or idle), the closest destination at or above the current
    /// floor wins. Otherwise the closest one below is taken, and when the only
    /// candidate below is the current floor itself the lowest destination is
    /// used.
    pub fn next_destination(&self) -> Option<Floor> {
        let current = self.current_floor;
        if matches!(self.direction, Direction::Up | Direction::Idle) {
            if let Some(&floor) = self.destinations.range(current..).next() {
                return Some(floor);
            }
        }
        match self.destinations.range(..=current).next_back() {
            Some(&floor) if floor != current => Some(floor),
            _ => self.destinations.first().copied(),
        }
    }

    pub fn update_direction(&mut self) {
        self.direction = match self.next_destination() {
            Some(target) => self.current_floor.direction_to(target),
            None => Direction::Idle,
        };
    }

    /// Moves one floor in the current direction. Returns whether the car moved.
    pub fn move_one_floor(&mut self) -> bool {
        if self.direction.is_idle() {
            return false;
        }
        self.current_floor = self.current_floor.step(self.direction);
        self.floors_travelled += 1;
        true
    }

    /// Scores `request` for this car with the directional cost model.
    #[inline]
    pub fn calculate_cost(&self, request: &Request) -> Cost<u32> {
        DirectionalCostModel::new(self.wrong_way_penalty).cost(self, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elevator_dispatch_core::tick::Tick;
    use elevator_dispatch_model::config::BuildingConfigBuilder;
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    fn config(policy: ExchangePolicy, capacity: u32) -> BuildingConfig {
        BuildingConfigBuilder::new()
            .floors(Floor::new(1), Floor::new(10))
            .elevator_count(1)
            .capacity(capacity)
            .exchange_policy(policy)
            .build()
            .expect("valid config")
    }

    fn car(capacity: u32) -> Elevator {
        Elevator::new(
            ElevatorId::new(1),
            &config(ExchangePolicy::FixedBatch, capacity),
        )
    }

    fn req(id: u64, from: i32, to: i32) -> Request {
        Request::new(RequestId::new(id), Floor::new(from), Floor::new(to), Tick::zero())
            .expect("valid request")
    }

    /// Drives the car to `floor`, serving any stop passed on the way.
    fn run_to(e: &mut Elevator, floor: i32) {
        for _ in 0..32 {
            if e.current_floor() == Floor::new(floor) {
                return;
            }
            if e.should_stop_current_floor() {
                e.open_doors();
                e.close_doors();
            }
            e.update_direction();
            e.move_one_floor();
        }
        panic!("car never reached floor {floor}");
    }

    #[test]
    fn test_new_car_is_idle_at_lowest_floor() {
        let e = car(8);
        assert_eq!(e.current_floor(), Floor::new(1));
        assert!(e.is_idle());
        assert!(e.has_capacity());
        assert!(!e.doors_open());
        assert_eq!(e.next_destination(), None);
    }

    #[test]
    fn test_add_destination_is_idempotent() {
        let mut e = car(8);
        e.add_destination(Floor::new(4));
        e.add_destination(Floor::new(4));
        assert_eq!(e.destination_count(), 1);
        assert!(e.has_destination(Floor::new(4)));
    }

    #[test]
    fn test_add_request_registers_both_floors() {
        let mut e = car(8);
        e.add_request(req(1, 3, 8));
        let dests: Vec<i32> = e.destinations().map(Floor::value).collect();
        assert_eq!(dests, vec![3, 8]);
        assert_eq!(e.queue_len(), 1);
        assert_eq!(
            e.queued_requests().next().map(QueuedRequest::phase),
            Some(RequestPhase::Waiting)
        );
    }

    #[test]
    fn test_fixed_batch_exchange() {
        let mut e = car(3);
        e.add_request(req(1, 1, 5));
        e.add_request(req(2, 1, 6));
        e.add_request(req(3, 1, 7));

        let x = e.open_doors();
        assert!(e.doors_open());
        assert!(!e.has_destination(Floor::new(1)));
        assert_eq!(x.unloaded(), 0);
        assert_eq!(x.loaded(), 2);
        assert_eq!(x.boarded().len(), 3);
        assert_eq!(e.load(), 2);
        e.close_doors();

        run_to(&mut e, 5);
        let x = e.open_doors();
        assert_eq!(x.delivered(), &[RequestId::new(1)]);
        assert_eq!(x.unloaded(), 2);
        // Two requests are still queued, so the car takes on another batch.
        assert_eq!(x.loaded(), 2);
        assert_eq!(e.load(), 2);
        assert_eq!(e.queue_len(), 2);
        assert_eq!(e.delivered_count(), 1);
    }

    #[test]
    fn test_fixed_batch_does_not_unload_at_or_below_sentinel() {
        let cfg = BuildingConfigBuilder::new()
            .floors(Floor::new(-1), Floor::new(5))
            .elevator_count(1)
            .capacity(4)
            .build()
            .unwrap();
        let mut e = Elevator::new(ElevatorId::new(1), &cfg);
        e.add_request(req(1, -1, 0));
        let x = e.open_doors();
        assert_eq!(x.loaded(), 2);
        e.close_doors();

        run_to(&mut e, 0);
        let x = e.open_doors();
        assert_eq!(x.unloaded(), 0);
        assert_eq!(x.delivered(), &[RequestId::new(1)]);
        // Queue is empty after delivery, so nothing is loaded either.
        assert_eq!(x.loaded(), 0);
        assert_eq!(e.load(), 2);
    }

    #[test]
    fn test_per_request_exchange_follows_requests() {
        let mut e = Elevator::new(ElevatorId::new(1), &config(ExchangePolicy::PerRequest, 2));
        e.add_request(req(1, 1, 4));
        e.add_request(req(2, 1, 6));
        e.add_request(req(3, 1, 9));

        let x = e.open_doors();
        assert_eq!(x.loaded(), 2);
        assert_eq!(x.boarded(), &[RequestId::new(1), RequestId::new(2)]);
        assert_eq!(x.left_behind().len(), 1);
        assert_eq!(x.left_behind()[0].id(), RequestId::new(3));
        assert_eq!(e.queue_len(), 2);
        assert_eq!(e.load(), 2);
        assert!(!e.has_capacity());
        e.close_doors();

        run_to(&mut e, 4);
        let x = e.open_doors();
        assert_eq!(x.unloaded(), 1);
        assert_eq!(x.loaded(), 0);
        assert_eq!(e.load(), 1);
    }

    #[test]
    fn test_boarding_re_registers_destination_passed_while_waiting() {
        let mut e = car(8);
        e.add_destination(Floor::new(6));
        e.update_direction();
        e.add_request(req(1, 5, 3));

        run_to(&mut e, 3);
        assert!(e.should_stop_current_floor());
        let x = e.open_doors();
        assert!(x.delivered().is_empty());
        e.close_doors();

        run_to(&mut e, 5);
        e.open_doors();
        e.close_doors();
        assert!(e.has_destination(Floor::new(3)));
    }

    #[test]
    fn test_next_destination_rules() {
        let mut e = car(8);
        for f in [2, 4, 9] {
            e.add_destination(Floor::new(f));
        }
        run_to(&mut e, 5);
        assert_eq!(e.direction(), Direction::Up);
        assert_eq!(e.destination_count(), 1);
        // Going up, floor 9 ahead beats the nearer floor 3 behind.
        e.add_destination(Floor::new(3));
        assert_eq!(e.next_destination(), Some(Floor::new(9)));

        let mut e = car(8);
        e.add_destination(Floor::new(7));
        e.update_direction();
        run_to(&mut e, 7);
        e.open_doors();
        e.close_doors();
        e.add_destination(Floor::new(2));
        e.add_destination(Floor::new(5));
        e.update_direction();
        assert_eq!(e.direction(), Direction::Down);
        assert_eq!(e.next_destination(), Some(Floor::new(5)));
    }

    #[test]
    fn test_update_direction_to_current_floor_is_idle() {
        let mut e = car(8);
        e.add_destination(Floor::new(1));
        e.update_direction();
        assert_eq!(e.direction(), Direction::Idle);
        assert!(!e.is_idle());
        assert!(!e.move_one_floor());
    }

    #[test]
    fn test_move_one_floor_tracks_distance() {
        let mut e = car(8);
        e.add_destination(Floor::new(4));
        e.update_direction();
        assert!(e.move_one_floor());
        assert!(e.move_one_floor());
        assert_eq!(e.current_floor(), Floor::new(3));
        assert_eq!(e.floors_travelled(), 2);
    }

    #[test]
    fn test_load_never_exceeds_capacity() {
        let mut rng = SmallRng::seed_from_u64(0xE1E7);
        for policy in [ExchangePolicy::FixedBatch, ExchangePolicy::PerRequest] {
            for capacity in 1..=5 {
                let mut e = Elevator::new(ElevatorId::new(1), &config(policy, capacity));
                let mut next_id = 0;
                for _ in 0..500 {
                    match rng.random_range(0..4) {
                        0 => {
                            let from = rng.random_range(1..=10);
                            let mut to = rng.random_range(1..=10);
                            if to == from {
                                to = if from == 10 { 1 } else { from + 1 };
                            }
                            next_id += 1;
                            e.add_request(req(next_id, from, to));
                        }
                        1 => {
                            e.open_doors();
                            e.close_doors();
                        }
                        _ => {
                            e.update_direction();
                            e.move_one_floor();
                        }
                    }
                    assert!(e.load() <= e.capacity(), "load {} > {}", e.load(), capacity);
                }
            }
        }
    }

    #[test]
    fn test_update_direction_is_idempotent() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..200 {
            let mut e = car(8);
            for _ in 0..rng.random_range(0..6) {
                e.add_destination(Floor::new(rng.random_range(1..=10)));
            }
            for _ in 0..rng.random_range(0..5) {
                e.update_direction();
                e.move_one_floor();
            }
            e.update_direction();
            let once = (e.direction(), e.next_destination());
            e.update_direction();
            assert_eq!(once, (e.direction(), e.next_destination()));
            if e.destination_count() == 0 {
                assert!(e.direction().is_idle());
            }
            if e.direction().is_idle() {
                assert!(e.destination_count() == 0 || e.should_stop_current_floor());
            }
        }
    }
}
