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

use serde::Serialize;
use std::fmt::Display;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        RequestId(id)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RequestId({})", self.0)
    }
}

impl From<u64> for RequestId {
    fn from(value: u64) -> Self {
        RequestId(value)
    }
}

/// Fleet slot of an elevator car. Cars are numbered from 1 in fleet order.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ElevatorId(u32);

impl ElevatorId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ElevatorId(id)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The id of the car occupying zero-based fleet slot `index`.
    #[inline]
    pub fn from_slot(index: usize) -> Self {
        let id = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .expect("fleet slot does not fit in ElevatorId");
        ElevatorId(id)
    }
}

impl Display for ElevatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Elevator({})", self.0)
    }
}

impl From<u32> for ElevatorId {
    fn from(value: u32) -> Self {
        ElevatorId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_display_and_value() {
        let id = RequestId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(format!("{id}"), "RequestId(7)");
    }

    #[test]
    fn test_elevator_id_from_slot_is_one_based() {
        assert_eq!(ElevatorId::from_slot(0), ElevatorId::new(1));
        assert_eq!(ElevatorId::from_slot(2).value(), 3);
        assert_eq!(format!("{}", ElevatorId::new(2)), "Elevator(2)");
    }
}
