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

//! # Elevator Dispatch Core (`elevator-dispatch-core`)
//!
//! Typed primitives shared by the model and the dispatch engine.
//!
//! ## Key Concepts
//!
//! - **Floors**:
//!   - `Floor`: A discrete, signed floor number (basements are negative).
//!   - `FloorDistance`: The unsigned number of floors between two `Floor`s.
//!   - `FloorRange`: The closed range `[min, max]` of floors served by a building.
//!
//! - **Time**:
//!   - `Tick`: One discrete simulation step. There is no physical timing model.
//!
//! - **Motion**:
//!   - `Direction`: `Up`, `Down` or `Idle`.
//!
//! - **Cost**:
//!   - `Cost<T>`: The score a cost model assigns to serving a request with a given elevator.
//!
//! Distinct newtypes keep floors, distances and costs from being mixed up;
//! arithmetic is checked and panics on overflow instead of wrapping.

use num_traits::{PrimInt, Unsigned, Zero};
use std::fmt::{Debug, Display};

pub mod cost;
pub mod direction;
pub mod floor;
pub mod tick;

pub trait CostVariable: PrimInt + Unsigned + Zero + Send + Sync + Debug + Display {}
impl<T> CostVariable for T where T: PrimInt + Unsigned + Zero + Send + Sync + Debug + Display {}

pub mod prelude {
    pub use crate::CostVariable;
    pub use crate::cost::Cost;
    pub use crate::direction::Direction;
    pub use crate::floor::{Floor, FloorDistance, FloorRange};
    pub use crate::tick::Tick;
}
