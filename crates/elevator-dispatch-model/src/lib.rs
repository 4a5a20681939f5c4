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

//! # Elevator Dispatch Model (`elevator-dispatch-model`)
//!
//! The passive data layer of the dispatch system. Everything here is plain
//! data plus validation; nothing in this crate moves a car.
//!
//! ## Key Data Structures
//!
//! - **`RequestId`** / **`ElevatorId`**: Opaque identifiers. Elevator ids are
//!   1-based and follow the car's slot in the fleet.
//!
//! - **`Request`**: A passenger trip between two distinct floors. Its
//!   direction is derived from the floors, and `Request::admit` validates the
//!   floors against a building's range.
//!
//! - **`BuildingConfig`**: The floor range, fleet size, per-car capacity and
//!   the tuning knobs of the dispatcher (exchange policy, wrong-way penalty).
//!
//! - **`Scenario`**: A time-ordered stream of `ScheduledCall`s, either the
//!   fixed demo stream or one drawn by the seeded `ScenarioGenerator`.

pub mod config;
pub mod err;
pub mod id;
pub mod req;
pub mod scenario;

pub mod prelude {
    pub use crate::config::{BuildingConfig, BuildingConfigBuilder, ExchangePolicy};
    pub use crate::err::{
        BuildingConfigBuildError, DegenerateRequestError, InvalidFloorError, RequestError,
    };
    pub use crate::id::{ElevatorId, RequestId};
    pub use crate::req::Request;
    pub use crate::scenario::{
        Scenario, ScenarioGenConfig, ScenarioGenConfigBuildError, ScenarioGenConfigBuilder,
        ScenarioGenerator, ScheduledCall,
    };
}
