//! Random delay policies.
//!
//! A [`RandomInterval`] draws positive delays from one fixed distribution.
//! Because the mean of the next Move delay depends on the edge just walked,
//! the simulator does not hold a single interval but an [`IntervalFamily`]:
//! a factory that builds an interval for any requested mean.

use rand::Rng;

use crate::{ScheduleError, ScheduleResult};

// ── Traits ────────────────────────────────────────────────────────────────────

/// A distribution of non-negative delays.
pub trait RandomInterval {
    fn mean(&self) -> f64;

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;
}

/// Builds intervals parameterised by their mean.
pub trait IntervalFamily {
    type Interval: RandomInterval;

    fn with_mean(&self, mean: f64) -> ScheduleResult<Self::Interval>;

    /// Shorthand for `with_mean(mean)?.draw(rng)`.
    fn draw_with_mean<R: Rng + ?Sized>(&self, mean: f64, rng: &mut R) -> ScheduleResult<f64> {
        Ok(self.with_mean(mean)?.draw(rng))
    }
}

// ── Exponential ───────────────────────────────────────────────────────────────

/// Exponential distribution given by its mean (not its rate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponential {
    mean: f64,
}

impl Exponential {
    pub fn new(mean: f64) -> ScheduleResult<Self> {
        if mean.is_finite() && mean > 0.0 {
            Ok(Self { mean })
        } else {
            Err(ScheduleError::InvalidMean(mean))
        }
    }
}

impl RandomInterval for Exponential {
    fn mean(&self) -> f64 {
        self.mean
    }

    /// Inverse-CDF sampling: `-ln(1 - u) * mean` for `u` uniform in `[0, 1)`.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.r#gen();
        -(1.0 - u).ln() * self.mean
    }
}

/// Family of [`Exponential`] intervals.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExponentialFamily;

impl IntervalFamily for ExponentialFamily {
    type Interval = Exponential;

    fn with_mean(&self, mean: f64) -> ScheduleResult<Exponential> {
        Exponential::new(mean)
    }
}
