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
    err::{DegenerateRequestError, InvalidFloorError, RequestError},
    id::RequestId,
};
use elevator_dispatch_core::{
    direction::Direction,
    floor::{Floor, FloorRange},
    tick::Tick,
};
use serde::Serialize;
use std::fmt::Display;

/// One passenger's wish to travel from `from_floor` to `to_floor`.
///
/// A request is immutable once created. Its direction is derived from the two
/// floors and is never `Idle`, because origin and destination always differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Request {
    id: RequestId,
    from_floor: Floor,
    to_floor: Floor,
    direction: Direction,
    created_at: Tick,
}

impl Request {
    /// Creates a request between two distinct floors.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateRequestError`] if both floors are equal.
    #[inline]
    pub fn new(
        id: RequestId,
        from_floor: Floor,
        to_floor: Floor,
        created_at: Tick,
    ) -> Result<Self, DegenerateRequestError> {
        if from_floor == to_floor {
            return Err(DegenerateRequestError::new(from_floor));
        }

        let direction = if to_floor > from_floor {
            Direction::Up
        } else {
            Direction::Down
        };

        Ok(Self {
            id,
            from_floor,
            to_floor,
            direction,
            created_at,
        })
    }

    /// Validates both floors against `range` before creating the request.
    ///
    /// Floors are checked for range membership first, origin before destination,
    /// and only then for being distinct.
    pub fn admit(
        id: RequestId,
        from_floor: Floor,
        to_floor: Floor,
        range: FloorRange,
        created_at: Tick,
    ) -> Result<Self, RequestError> {
        for floor in [from_floor, to_floor] {
            if !range.contains(floor) {
                return Err(InvalidFloorError::new(floor, range).into());
            }
        }
        Ok(Self::new(id, from_floor, to_floor, created_at)?)
    }

    #[inline]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[inline]
    pub fn from_floor(&self) -> Floor {
        self.from_floor
    }

    #[inline]
    pub fn to_floor(&self) -> Floor {
        self.to_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Tick at which the request was submitted. Informational only.
    #[inline]
    pub fn created_at(&self) -> Tick {
        self.created_at
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Request {{ id: {}, from: {}, to: {}, direction: {} }}",
            self.id.value(),
            self.from_floor.value(),
            self.to_floor.value(),
            self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> FloorRange {
        FloorRange::new(Floor::new(1), Floor::new(10))
    }

    #[test]
    fn test_request_direction_is_derived() {
        let up = Request::new(RequestId::new(1), Floor::new(1), Floor::new(7), Tick::zero())
            .expect("valid request");
        assert_eq!(up.direction(), Direction::Up);

        let down = Request::new(RequestId::new(2), Floor::new(5), Floor::new(1), Tick::zero())
            .expect("valid request");
        assert_eq!(down.direction(), Direction::Down);
    }

    #[test]
    fn test_request_same_floor_is_degenerate() {
        let err = Request::new(RequestId::new(1), Floor::new(3), Floor::new(3), Tick::zero())
            .unwrap_err();
        assert_eq!(err.floor(), Floor::new(3));
    }

    #[test]
    fn test_admit_rejects_out_of_range_origin_and_destination() {
        let err = Request::admit(
            RequestId::new(1),
            Floor::new(0),
            Floor::new(5),
            range(),
            Tick::zero(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::InvalidFloor(e) if e.floor() == Floor::new(0)));

        let err = Request::admit(
            RequestId::new(2),
            Floor::new(5),
            Floor::new(11),
            range(),
            Tick::zero(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::InvalidFloor(e) if e.floor() == Floor::new(11)));
    }

    #[test]
    fn test_admit_checks_range_before_distinctness() {
        let err = Request::admit(
            RequestId::new(1),
            Floor::new(12),
            Floor::new(12),
            range(),
            Tick::zero(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::InvalidFloor(_)));

        let err = Request::admit(
            RequestId::new(2),
            Floor::new(4),
            Floor::new(4),
            range(),
            Tick::zero(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::DegenerateRequest(_)));
    }

    #[test]
    fn test_admit_accepts_boundary_floors() {
        let req = Request::admit(
            RequestId::new(9),
            Floor::new(10),
            Floor::new(1),
            range(),
            Tick::new(4),
        )
        .expect("boundary floors are valid");
        assert_eq!(req.created_at(), Tick::new(4));
        assert_eq!(
            format!("{req}"),
            "Request { id: 9, from: 10, to: 1, direction: DOWN }"
        );
    }
}
