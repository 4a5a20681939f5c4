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

use elevator_dispatch_core::{floor::Floor, tick::Tick};
use elevator_dispatch_model::{
    err::RequestError,
    id::{ElevatorId, RequestId},
};
use std::fmt::Display;

/// Something observable the dispatcher did. Collected in order and handed
/// out by `Dispatcher::drain_events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Rejected {
        at: Tick,
        from_floor: Floor,
        to_floor: Floor,
        error: RequestError,
    },
    Assigned {
        at: Tick,
        request: RequestId,
        elevator: ElevatorId,
    },
    Deferred {
        at: Tick,
        request: RequestId,
    },
    BacklogAssigned {
        at: Tick,
        request: RequestId,
        elevator: ElevatorId,
    },
    DoorsOpened {
        at: Tick,
        elevator: ElevatorId,
        floor: Floor,
    },
    Exchanged {
        at: Tick,
        elevator: ElevatorId,
        floor: Floor,
        unloaded: u32,
        loaded: u32,
        delivered: Vec<RequestId>,
    },
    LeftBehind {
        at: Tick,
        request: RequestId,
        elevator: ElevatorId,
        floor: Floor,
    },
    DoorsClosed {
        at: Tick,
        elevator: ElevatorId,
        floor: Floor,
    },
    Moved {
        at: Tick,
        elevator: ElevatorId,
        from: Floor,
        to: Floor,
    },
}

impl DispatchEvent {
    pub fn at(&self) -> Tick {
        use DispatchEvent::*;
        match self {
            Rejected { at, .. }
            | Assigned { at, .. }
            | Deferred { at, .. }
            | BacklogAssigned { at, .. }
            | DoorsOpened { at, .. }
            | Exchanged { at, .. }
            | LeftBehind { at, .. }
            | DoorsClosed { at, .. }
            | Moved { at, .. } => *at,
        }
    }
}

impl Display for DispatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use DispatchEvent::*;
        match self {
            Rejected {
                at,
                from_floor,
                to_floor,
                error,
            } => write!(
                f,
                "[{at}] rejected {} -> {}: {error}",
                from_floor.value(),
                to_floor.value()
            ),
            Assigned {
                at,
                request,
                elevator,
            } => write!(f, "[{at}] {request} assigned to {elevator}"),
            Deferred { at, request } => write!(f, "[{at}] {request} deferred to backlog"),
            BacklogAssigned {
                at,
                request,
                elevator,
            } => write!(f, "[{at}] {request} assigned to {elevator} from backlog"),
            DoorsOpened {
                at,
                elevator,
                floor,
            } => write!(f, "[{at}] {elevator} doors open at {}", floor.value()),
            Exchanged {
                at,
                elevator,
                floor,
                unloaded,
                loaded,
                delivered,
            } => write!(
                f,
                "[{at}] {elevator} at {}: unloaded {unloaded}, loaded {loaded}, delivered {}",
                floor.value(),
                delivered.len()
            ),
            LeftBehind {
                at,
                request,
                elevator,
                floor,
            } => write!(
                f,
                "[{at}] {request} left behind by {elevator} at {}",
                floor.value()
            ),
            DoorsClosed {
                at,
                elevator,
                floor,
            } => write!(f, "[{at}] {elevator} doors closed at {}", floor.value()),
            Moved {
                at,
                elevator,
                from,
                to,
            } => write!(
                f,
                "[{at}] {elevator} moved {} -> {}",
                from.value(),
                to.value()
            ),
        }
    }
}
