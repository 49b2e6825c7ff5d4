#![forbid(unsafe_code)]

//! Animation primitives for the taskdeck recents panel.
//!
//! Time-based scalar ramps and a staggered fade-in cascade, driven by
//! `tick(dt)` from the host event loop. Values are sampled, never pushed:
//! the caller reads [`Ramp::value`] / [`FadeCascade::values`] each tick and
//! writes them onto whatever visual property it owns. Nothing in this crate
//! knows about tasks, adapters, or screens.

pub mod cascade;
pub mod easing;
pub mod ramp;

pub use cascade::{FadeCascade, stagger_offsets};
pub use easing::{EasingFn, ease_in_out, ease_out, linear};
pub use ramp::Ramp;
