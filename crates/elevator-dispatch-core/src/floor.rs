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

use crate::direction::Direction;
use serde::Serialize;

/// A floor number. Signed, so buildings with basements can be modelled.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Floor(i32);

impl std::fmt::Display for Floor {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor({})", self.0)
    }
}

impl From<i32> for Floor {
    #[inline]
    fn from(v: i32) -> Self {
        Floor(v)
    }
}

impl Floor {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Floor(v)
    }

    #[inline]
    pub const fn ground() -> Self {
        Floor(0)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn distance_to(self, other: Floor) -> FloorDistance {
        FloorDistance(self.0.abs_diff(other.0))
    }

    /// The direction one would travel to get from `self` to `target`.
    #[inline]
    pub fn direction_to(self, target: Floor) -> Direction {
        match target.cmp(&self) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    /// Whether `other` lies at or beyond `self` when travelling in `direction`.
    ///
    /// `Idle` has no heading, so nothing is ahead of an idle car.
    #[inline]
    pub fn is_ahead(self, other: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => other >= self,
            Direction::Down => other <= self,
            Direction::Idle => false,
        }
    }

    /// The adjacent floor in `direction`; `Idle` stays put.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let delta = direction.delta();
        Floor(
            self.0
                .checked_add(delta)
                .expect("overflow in Floor::step"),
        )
    }
}

/// The number of floors between two floors.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct FloorDistance(u32);

impl std::fmt::Display for FloorDistance {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FloorDistance({})", self.0)
    }
}

impl From<u32> for FloorDistance {
    #[inline]
    fn from(v: u32) -> Self {
        FloorDistance(v)
    }
}

impl FloorDistance {
    #[inline]
    pub const fn new(v: u32) -> Self {
        FloorDistance(v)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// The closed range `[min, max]` of floors a building serves.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct FloorRange {
    min: Floor,
    max: Floor,
}

impl FloorRange {
    /// Creates a new closed range. Bounds given in the wrong order are swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use elevator_dispatch_core::floor::{Floor, FloorRange};
    ///
    /// let range = FloorRange::new(Floor::new(10), Floor::new(1));
    /// assert_eq!(range.min(), Floor::new(1));
    /// assert_eq!(range.max(), Floor::new(10));
    /// ```
    #[inline]
    pub fn new(a: Floor, b: Floor) -> Self {
        let (min, max) = if a > b { (b, a) } else { (a, b) };
        Self { min, max }
    }

    #[inline]
    pub const fn min(&self) -> Floor {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> Floor {
        self.max
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor >= self.min && floor <= self.max
    }

    /// Number of floors in the range, both ends included.
    ///
    /// Widened to `u64` because the full `i32` range holds `u32::MAX + 1` floors.
    #[inline]
    pub fn floor_count(&self) -> u64 {
        u64::from(self.max.distance_to(self.min).value()) + 1
    }
}

impl std::fmt::Display for FloorRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min.value(), self.max.value())
    }
}
