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

use crate::elevator::Elevator;
use elevator_dispatch_core::{direction::Direction, floor::Floor, tick::Tick};
use elevator_dispatch_model::id::ElevatorId;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElevatorStatus {
    id: ElevatorId,
    floor: Floor,
    direction: Direction,
    load: u32,
    capacity: u32,
    destinations: Vec<Floor>,
    queued: usize,
    floors_travelled: u64,
    delivered: u64,
}

impl ElevatorStatus {
    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }
    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
    #[inline]
    pub fn load(&self) -> u32 {
        self.load
    }
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
    #[inline]
    pub fn destinations(&self) -> &[Floor] {
        &self.destinations
    }
    #[inline]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }
    #[inline]
    pub fn queued(&self) -> usize {
        self.queued
    }
    #[inline]
    pub fn floors_travelled(&self) -> u64 {
        self.floors_travelled
    }
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

impl From<&Elevator> for ElevatorStatus {
    fn from(e: &Elevator) -> Self {
        Self {
            id: e.id(),
            floor: e.current_floor(),
            direction: e.direction(),
            load: e.load(),
            capacity: e.capacity(),
            destinations: e.destinations().collect(),
            queued: e.queue_len(),
            floors_travelled: e.floors_travelled(),
            delivered: e.delivered_count(),
        }
    }
}

impl Display for ElevatorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: floor {:>3}, {:<4}, load {}/{}, destinations [",
            self.id,
            self.floor.value(),
            self.direction,
            self.load,
            self.capacity
        )?;
        for (i, d) in self.destinations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d.value())?;
        }
        write!(f, "]")
    }
}

/// Point-in-time view of the whole fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetStatus {
    tick: Tick,
    backlog: usize,
    elevators: Vec<ElevatorStatus>,
}

impl FleetStatus {
    pub fn new(tick: Tick, backlog: usize, elevators: Vec<ElevatorStatus>) -> Self {
        Self {
            tick,
            backlog,
            elevators,
        }
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }
    #[inline]
    pub fn backlog(&self) -> usize {
        self.backlog
    }
    #[inline]
    pub fn elevators(&self) -> &[ElevatorStatus] {
        &self.elevators
    }
}

impl Display for FleetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== {} | backlog: {} ===", self.tick, self.backlog)?;
        for e in &self.elevators {
            writeln!(f, "  {e}")?;
        }
        Ok(())
    }
}
