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

//! # Elevator Dispatch Engine (`elevator-dispatch-engine`)
//!
//! The moving parts of the system: the per-car state machine, the cost models
//! that rank cars for a request, the dispatcher that owns the fleet and the
//! backlog, and a driver that replays a [`Scenario`] tick by tick.
//!
//! The engine never prints. Everything observable is either returned, exposed
//! through [`status::FleetStatus`] snapshots, recorded as a
//! [`event::DispatchEvent`] or emitted through `tracing`.
//!
//! [`Scenario`]: elevator_dispatch_model::scenario::Scenario

pub mod cost;
pub mod dispatcher;
pub mod elevator;
pub mod event;
pub mod sim;
pub mod status;

pub mod prelude {
    pub use crate::cost::{CostModel, DirectionalCostModel, DistanceCostModel};
    pub use crate::dispatcher::{Dispatcher, Submission};
    pub use crate::elevator::{Elevator, Exchange, QueuedRequest, RequestPhase};
    pub use crate::event::DispatchEvent;
    pub use crate::sim::{RunReport, Simulation};
    pub use crate::status::{ElevatorStatus, FleetStatus};
}
