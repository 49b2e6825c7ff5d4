#![forbid(unsafe_code)]

//! Staggered fade-in cascade for an ordered set of keyed targets.
//!
//! [`FadeCascade`] fades each member from 0.0 to 1.0 over a fixed duration,
//! with member *i* starting at `i × step`. The cascade records its membership
//! so the owner can detect targets that arrived after the cascade started
//! (and restart it), and it keeps a running marker that clears when every
//! member has finished.
//!
//! # Invariants
//!
//! 1. `start()` cancels any cascade already in flight before building the
//!    new one; two cascades never run at once.
//! 2. A member's sampled value is exactly 1.0 from its own completion
//!    onwards, even while later members are still fading.
//! 3. `is_running()` is false once every member completes; membership from
//!    the finished cascade no longer participates in restart decisions.
//!
//! # Failure Modes
//!
//! - Starting with zero keys: the cascade never enters the running state.

use std::time::Duration;

use crate::ramp::Ramp;

/// Linear stagger offsets: `offset[i] = i × step`.
#[must_use]
pub fn stagger_offsets(count: usize, step: Duration) -> Vec<Duration> {
    (0..count).map(|i| step.saturating_mul(i as u32)).collect()
}

/// An ordered, keyed fade-in group with cancel-on-start semantics.
#[derive(Debug, Clone)]
pub struct FadeCascade<K> {
    members: Vec<(K, Ramp)>,
    running: bool,
}

impl<K: Copy + PartialEq> FadeCascade<K> {
    /// Create an idle cascade.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            running: false,
        }
    }

    /// Start fading in `keys`, in order, each delayed by its stagger offset.
    ///
    /// Any cascade already in flight is canceled first.
    pub fn start(&mut self, keys: impl IntoIterator<Item = K>, step: Duration, duration: Duration) {
        self.cancel();
        for (i, key) in keys.into_iter().enumerate() {
            let offset = step.saturating_mul(i as u32);
            self.members
                .push((key, Ramp::new(0.0, 1.0, duration).delayed(offset)));
        }
        self.running = !self.members.is_empty();
    }

    /// Drop all members and clear the running marker.
    pub fn cancel(&mut self) {
        self.members.clear();
        self.running = false;
    }

    /// Whether a cascade is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether `key` is a member of the cascade in flight.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.running && self.members.iter().any(|(k, _)| *k == key)
    }

    /// Number of members in the current cascade.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cascade has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Advance every unfinished member; clears the running marker once the
    /// whole group has completed.
    pub fn tick(&mut self, dt: Duration) {
        if !self.running {
            return;
        }
        for (_, ramp) in &mut self.members {
            if !ramp.is_complete() {
                ramp.tick(dt);
            }
        }
        if self.members.iter().all(|(_, r)| r.is_complete()) {
            self.running = false;
        }
    }

    /// Sample `(key, value)` for every member.
    pub fn values(&self) -> impl Iterator<Item = (K, f32)> + '_ {
        self.members.iter().map(|(k, r)| (*k, r.value()))
    }
}

impl<K: Copy + PartialEq> Default for FadeCascade<K> {
    fn default() -> Self {
        Self::new()
    }
}
