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
use elevator_dispatch_core::{CostVariable, cost::Cost, direction::Direction};
use elevator_dispatch_model::req::Request;

/// Scores how well a car fits a request. Lower is better.
pub trait CostModel {
    type Scalar: CostVariable;

    fn cost(&self, elevator: &Elevator, request: &Request) -> Cost<Self::Scalar>;
}

/// Distance from the car to the request's origin, plus a flat penalty unless
/// the car is idle or already heading towards the origin in the request's
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionalCostModel {
    wrong_way_penalty: u32,
}

impl Default for DirectionalCostModel {
    fn default() -> Self {
        Self::new(10)
    }
}

impl DirectionalCostModel {
    #[inline]
    pub const fn new(wrong_way_penalty: u32) -> Self {
        Self { wrong_way_penalty }
    }

    #[inline]
    pub const fn wrong_way_penalty(&self) -> u32 {
        self.wrong_way_penalty
    }
}

impl CostModel for DirectionalCostModel {
    type Scalar = u32;

    fn cost(&self, elevator: &Elevator, request: &Request) -> Cost<u32> {
        let here = elevator.current_floor();
        let distance = Cost::from_distance(here.distance_to(request.from_floor()));

        let on_the_way = match elevator.direction() {
            Direction::Idle => true,
            heading => {
                heading == request.direction() && here.is_ahead(request.from_floor(), heading)
            }
        };

        if on_the_way {
            distance
        } else {
            distance.saturating_add(Cost::new(self.wrong_way_penalty))
        }
    }
}

/// Pure nearest-car scoring: the distance to the origin and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DistanceCostModel;

impl CostModel for DistanceCostModel {
    type Scalar = u32;

    #[inline]
    fn cost(&self, elevator: &Elevator, request: &Request) -> Cost<u32> {
        Cost::from_distance(elevator.current_floor().distance_to(request.from_floor()))
    }
}
