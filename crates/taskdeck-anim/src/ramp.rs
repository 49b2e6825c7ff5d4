#![forbid(unsafe_code)]

//! Scalar ramps: a delayed, eased interpolation between two values.
//!
//! A [`Ramp`] holds `from` until its start delay elapses, then interpolates
//! to `to` over its duration, and pins at `to` afterwards. Elapsed time is
//! tracked as [`Duration`] for precise accumulation across many small ticks.
//!
//! # Invariants
//!
//! 1. `value()` equals `from` for every sample taken before the delay has
//!    elapsed.
//! 2. `value()` equals `to` exactly for every sample taken at or after
//!    completion.
//! 3. `tick()` after completion is safe and changes nothing observable.
//!
//! # Failure Modes
//!
//! - Zero duration: clamped to 1 ns so the ramp completes on the first tick
//!   instead of dividing by zero.

use std::time::Duration;

use crate::easing::{EasingFn, linear};

/// A delayed, eased interpolation from one scalar value to another.
#[derive(Debug, Clone, Copy)]
pub struct Ramp {
    from: f32,
    to: f32,
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Ramp {
    /// Create a ramp from `from` to `to` over `duration`, with no delay and
    /// linear easing.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            delay: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            elapsed: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set a start delay (builder).
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the easing function (builder).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the ramp by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Whether the delay has elapsed and interpolation has begun.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.elapsed > self.delay
    }

    /// Whether the ramp has reached its end value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay.saturating_add(self.duration)
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        let active = self.elapsed.saturating_sub(self.delay);
        if active.is_zero() {
            return self.from;
        }
        if active >= self.duration {
            return self.to;
        }
        let t = (active.as_secs_f64() / self.duration.as_secs_f64()) as f32;
        self.from + (self.to - self.from) * (self.easing)(t.clamp(0.0, 1.0))
    }

    /// The ramp's end value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Rewind to the initial state.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
