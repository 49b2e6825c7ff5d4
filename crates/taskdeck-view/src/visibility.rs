#![forbid(unsafe_code)]

//! The loading / empty / content visibility state machine.
//!
//! Driven by adapter structural notifications: a count of zero flips the
//! panel to the empty surface, a positive count flips it to the content
//! surface, each flip running a crossfade between the two. The empty flip
//! also leaves the screen immediately; it is not gated on the animation.
//!
//! # Invariants
//!
//! 1. Steady states are exactly `Empty` and `Content`; `Loading` exists only
//!    before the first notification.
//! 2. At most one crossfade is in flight; starting a flip replaces any
//!    crossfade already running.
//! 3. The surface fading in is made visible (at alpha 0) before its ramp
//!    starts; the surface fading out becomes hidden only when its ramp
//!    completes, never mid-fade.

use std::time::Duration;

use taskdeck_anim::Ramp;
use tracing::debug;

use crate::control::ScreenHost;
use crate::targets::{SurfaceVisibility, Surfaces};

/// Which of the panel's representations is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    /// Before the first adapter notification.
    Loading,
    Empty,
    Content,
}

#[derive(Debug)]
struct Crossfade {
    /// The state whose surface is fading in.
    toward: VisibilityState,
    fade_in: Ramp,
    fade_out: Ramp,
}

/// Reconciles the visibility state with the adapter item count and runs the
/// crossfade between the content and empty surfaces.
#[derive(Debug)]
pub struct ContentVisibility {
    state: VisibilityState,
    crossfade: Option<Crossfade>,
}

impl ContentVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: VisibilityState::Loading,
            crossfade: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    #[must_use]
    pub fn is_crossfading(&self) -> bool {
        self.crossfade.is_some()
    }

    /// Drop any in-flight crossfade, freezing the surfaces where they are.
    pub fn cancel(&mut self) {
        self.crossfade = None;
    }

    /// React to the adapter's current item count.
    ///
    /// No-op when the count matches the current state.
    pub fn reconcile<H: ScreenHost>(
        &mut self,
        item_count: usize,
        surfaces: &mut Surfaces,
        host: &mut H,
        duration: Duration,
    ) {
        if item_count == 0 && self.state != VisibilityState::Empty {
            debug!(from = ?self.state, "showing empty state");
            self.state = VisibilityState::Empty;
            self.start(VisibilityState::Empty, surfaces, duration);
            host.leave_screen();
        } else if item_count > 0 && self.state != VisibilityState::Content {
            debug!(from = ?self.state, item_count, "showing content");
            self.state = VisibilityState::Content;
            self.start(VisibilityState::Content, surfaces, duration);
        }
    }

    fn start(&mut self, toward: VisibilityState, surfaces: &mut Surfaces, duration: Duration) {
        let (fade_in_surface, fade_out_surface) = match toward {
            VisibilityState::Content => (&mut surfaces.content, &mut surfaces.empty),
            _ => (&mut surfaces.empty, &mut surfaces.content),
        };
        fade_in_surface.visibility = SurfaceVisibility::Visible;
        fade_in_surface.alpha = 0.0;
        self.crossfade = Some(Crossfade {
            toward,
            fade_in: Ramp::new(0.0, 1.0, duration),
            fade_out: Ramp::new(fade_out_surface.alpha, 0.0, duration),
        });
    }

    /// Advance the crossfade and write sampled alphas onto the surfaces.
    pub fn tick(&mut self, dt: Duration, surfaces: &mut Surfaces) {
        let Some(crossfade) = &mut self.crossfade else {
            return;
        };
        crossfade.fade_in.tick(dt);
        crossfade.fade_out.tick(dt);
        let (fade_in_surface, fade_out_surface) = match crossfade.toward {
            VisibilityState::Content => (&mut surfaces.content, &mut surfaces.empty),
            _ => (&mut surfaces.empty, &mut surfaces.content),
        };
        fade_in_surface.alpha = crossfade.fade_in.value();
        fade_out_surface.alpha = crossfade.fade_out.value();
        if crossfade.fade_out.is_complete() {
            fade_out_surface.visibility = SurfaceVisibility::Hidden;
        }
        if crossfade.fade_in.is_complete() && crossfade.fade_out.is_complete() {
            self.crossfade = None;
        }
    }
}

impl Default for ContentVisibility {
    fn default() -> Self {
        Self::new()
    }
}
