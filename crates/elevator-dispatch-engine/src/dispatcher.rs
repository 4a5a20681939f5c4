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
    elevator::Elevator,
    event::DispatchEvent,
    status::{ElevatorStatus, FleetStatus},
};
use elevator_dispatch_core::{cost::Cost, floor::Floor, tick::Tick};
use elevator_dispatch_model::{
    config::BuildingConfig,
    err::RequestError,
    id::{ElevatorId, RequestId},
    req::Request,
};
use std::{collections::VecDeque, fmt::Display};
use tracing::{debug, instrument, trace, warn};

/// Outcome of an accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submission {
    Assigned {
        request: RequestId,
        elevator: ElevatorId,
    },
    /// No car had spare capacity; the request waits in the backlog.
    Deferred { request: RequestId },
}

impl Submission {
    #[inline]
    pub fn request_id(&self) -> RequestId {
        match self {
            Submission::Assigned { request, .. } | Submission::Deferred { request } => *request,
        }
    }

    #[inline]
    pub fn elevator(&self) -> Option<ElevatorId> {
        match self {
            Submission::Assigned { elevator, .. } => Some(*elevator),
            Submission::Deferred { .. } => None,
        }
    }

    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Submission::Deferred { .. })
    }
}

impl Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Submission::Assigned { request, elevator } => {
                write!(f, "{request} assigned to {elevator}")
            }
            Submission::Deferred { request } => write!(f, "{request} deferred"),
        }
    }
}

/// Central coordinator of the fleet.
///
/// The dispatcher admits requests, hands each to the cheapest car with spare
/// capacity and parks the rest in a FIFO backlog. Every [`Dispatcher::step`]
/// retries that backlog first and then advances each car by one tick, in
/// fleet order.
#[derive(Debug, Clone)]
pub struct Dispatcher<M: CostModel = DirectionalCostModel> {
    config: BuildingConfig,
    elevators: Vec<Elevator>,
    backlog: VecDeque<Request>,
    tick: Tick,
    next_request_id: u64,
    cost_model: M,
    events: Vec<DispatchEvent>,
}

impl Dispatcher<DirectionalCostModel> {
    /// Creates a dispatcher scoring cars with the configured wrong-way penalty.
    pub fn new(config: &BuildingConfig) -> Self {
        Self::with_cost_model(
            config,
            DirectionalCostModel::new(config.wrong_way_penalty()),
        )
    }
}

impl<M: CostModel> Dispatcher<M> {
    pub fn with_cost_model(config: &BuildingConfig, cost_model: M) -> Self {
        let elevators = (0..config.elevator_count())
            .map(|slot| Elevator::new(ElevatorId::from_slot(slot), config))
            .collect();

        Self {
            config: config.clone(),
            elevators,
            backlog: VecDeque::new(),
            tick: Tick::zero(),
            next_request_id: 0,
            cost_model,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    #[inline]
    pub fn cost_model(&self) -> &M {
        &self.cost_model
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    #[inline]
    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id() == id)
    }

    #[inline]
    pub fn backlog(&self) -> impl Iterator<Item = &Request> + '_ {
        self.backlog.iter()
    }

    #[inline]
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    /// Validates and routes a new request.
    ///
    /// The floors are checked against the building range (origin first) and
    /// then for being distinct. Rejections are reported and logged; they never
    /// change any state.
    #[instrument(level = "debug", skip_all, fields(tick = self.tick.value(), from = from.value(), to = to.value()))]
    pub fn submit_request(&mut self, from: Floor, to: Floor) -> Result<Submission, RequestError> {
        let id = RequestId::new(self.next_request_id);
        let request = match Request::admit(id, from, to, self.config.floor_range(), self.tick) {
            Ok(r) => r,
            Err(error) => {
                warn!(%error, "Rejected request");
                self.events.push(DispatchEvent::Rejected {
                    at: self.tick,
                    from_floor: from,
                    to_floor: to,
                    error,
                });
                return Err(error);
            }
        };
        self.next_request_id += 1;

        match self.best_slot(&request) {
            Some(slot) => {
                let elevator = self.assign(slot, request);
                debug!(request = %id, %elevator, "Assigned request");
                self.events.push(DispatchEvent::Assigned {
                    at: self.tick,
                    request: id,
                    elevator,
                });
                Ok(Submission::Assigned {
                    request: id,
                    elevator,
                })
            }
            None => {
                debug!(request = %id, "No car has spare capacity; deferring");
                self.backlog.push_back(request);
                self.events.push(DispatchEvent::Deferred {
                    at: self.tick,
                    request: id,
                });
                Ok(Submission::Deferred { request: id })
            }
        }
    }

    /// The car that should serve `request`, if any has spare capacity.
    ///
    /// The lowest cost wins. On an exact tie the car with fewer destinations
    /// wins, and after that the one earlier in the fleet.
    #[inline]
    pub fn find_best_elevator(&self, request: &Request) -> Option<&Elevator> {
        self.best_slot(request).map(|slot| &self.elevators[slot])
    }

    fn best_slot(&self, request: &Request) -> Option<usize> {
        let mut best: Option<(usize, Cost<M::Scalar>, usize)> = None;
        for (slot, car) in self.elevators.iter().enumerate() {
            if !car.has_capacity() {
                continue;
            }
            let cost = self.cost_model.cost(car, request);
            let dests = car.destination_count();
            let better = match best {
                None => true,
                Some((_, best_cost, best_dests)) => {
                    cost < best_cost || (cost == best_cost && dests < best_dests)
                }
            };
            if better {
                trace!(elevator = %car.id(), %cost, "New best candidate");
                best = Some((slot, cost, dests));
            }
        }
        best.map(|(slot, _, _)| slot)
    }

    fn assign(&mut self, slot: usize, request: Request) -> ElevatorId {
        let car = &mut self.elevators[slot];
        car.add_request(request);
        car.id()
    }

    /// Advances the simulation by one tick and returns the new tick.
    #[instrument(level = "debug", skip_all, fields(tick = self.tick.value(), backlog = self.backlog.len()))]
    pub fn step(&mut self) -> Tick {
        self.retry_backlog();
        for slot in 0..self.elevators.len() {
            self.advance(slot);
        }
        self.tick = self.tick.next();
        self.tick
    }

    fn retry_backlog(&mut self) {
        if self.backlog.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.backlog);
        for request in pending {
            match self.best_slot(&request) {
                Some(slot) => {
                    let id = request.id();
                    let elevator = self.assign(slot, request);
                    debug!(request = %id, %elevator, "Assigned request from backlog");
                    self.events.push(DispatchEvent::BacklogAssigned {
                        at: self.tick,
                        request: id,
                        elevator,
                    });
                }
                None => self.backlog.push_back(request),
            }
        }
    }

    fn advance(&mut self, slot: usize) {
        let at = self.tick;
        let car = &mut self.elevators[slot];
        let elevator = car.id();

        if car.should_stop_current_floor() {
            let floor = car.current_floor();
            trace!(%elevator, floor = floor.value(), "Doors opening");
            self.events.push(DispatchEvent::DoorsOpened {
                at,
                elevator,
                floor,
            });

            let exchange = car.open_doors();
            self.events.push(DispatchEvent::Exchanged {
                at,
                elevator,
                floor,
                unloaded: exchange.unloaded(),
                loaded: exchange.loaded(),
                delivered: exchange.delivered().to_vec(),
            });

            car.close_doors();
            trace!(%elevator, floor = floor.value(), "Doors closed");
            self.events.push(DispatchEvent::DoorsClosed {
                at,
                elevator,
                floor,
            });

            // Ids grow with arrival, so sorting on them restores arrival order.
            for request in exchange.into_left_behind() {
                debug!(request = %request.id(), %elevator, "Car full; request returned to backlog");
                self.events.push(DispatchEvent::LeftBehind {
                    at,
                    request: request.id(),
                    elevator,
                    floor,
                });
                let pos = self.backlog.partition_point(|r| r.id() < request.id());
                self.backlog.insert(pos, request);
            }
        }

        car.update_direction();
        let from = car.current_floor();
        if car.move_one_floor() {
            let to = car.current_floor();
            trace!(%elevator, from = from.value(), to = to.value(), "Moved");
            self.events.push(DispatchEvent::Moved {
                at,
                elevator,
                from,
                to,
            });
        }
    }

    /// Every car is idle and nothing waits in the backlog.
    #[inline]
    pub fn is_quiescent(&self) -> bool {
        self.backlog.is_empty() && self.elevators.iter().all(Elevator::is_idle)
    }

    #[inline]
    pub fn all_elevators_idle(&self) -> bool {
        self.is_quiescent()
    }

    pub fn status(&self) -> FleetStatus {
        FleetStatus::new(
            self.tick,
            self.backlog.len(),
            self.elevators.iter().map(ElevatorStatus::from).collect(),
        )
    }

    /// Hands out every event recorded since the previous call.
    #[inline]
    pub fn drain_events(&mut self) -> Vec<DispatchEvent> {
        std::mem::take(&mut self.events)
    }
}
