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

/// A discrete simulation step. Tick `0` is the state before the first step.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Tick(u64);

impl Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}

impl From<u64> for Tick {
    #[inline]
    fn from(v: u64) -> Self {
        Tick(v)
    }
}

impl Tick {
    #[inline]
    pub const fn new(v: u64) -> Self {
        Tick(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Tick(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn next(self) -> Self {
        Tick(self.0.checked_add(1).expect("overflow in Tick::next"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_next() {
        let t = Tick::zero();
        assert_eq!(t.next(), Tick::new(1));
        assert_eq!(t.next().next().value(), 2);
    }

    #[test]
    #[should_panic]
    fn test_tick_next_overflow_panics() {
        let _ = Tick::new(u64::MAX).next();
    }

    #[test]
    fn test_tick_display() {
        assert_eq!(format!("{}", Tick::new(12)), "Tick(12)");
    }
}
