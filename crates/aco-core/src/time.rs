//! Logical simulation time.
//!
//! # Design
//!
//! Time is a non-negative `f64` that only moves when the simulator pops the
//! next event from its queue.  Event delays are drawn from continuous
//! distributions, so unlike a tick counter the clock has no fixed
//! resolution.  Ordering inside the event queue is handled there (with a
//! total order on the raw `f64`); `SimTime` itself is only `PartialOrd`.

use std::fmt;

/// A point on the logical clock.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Return the time `delay` units after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::AddAssign<f64> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
