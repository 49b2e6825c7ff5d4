#![forbid(unsafe_code)]

//! The clear-all teardown choreography.
//!
//! One composite run: every attached task row slides right and fades out on
//! a linear stagger, while the content surface ramps to transparent after a
//! fixed delay. The screen is left the first time the content alpha drops
//! below one half; the data-clearing action runs only after the whole group
//! completes, so teardown visuals never race the resulting reconciliation.
//!
//! The facade owns the interaction guard and the post-completion effects
//! (re-enable, hide, clear); this module owns the snapshot and the ramps.

use std::time::Duration;

use taskdeck_anim::{Ramp, ease_out, stagger_offsets};
use tracing::debug;

use crate::control::ScreenHost;
use crate::targets::{Attached, Surface, TargetId};
use crate::view::Timings;

/// Outcome of advancing the teardown by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearAllStatus {
    /// No teardown in flight.
    Idle,
    Running,
    /// The group just completed; snapshotted rows are back at identity.
    Finished,
}

#[derive(Debug)]
struct ItemExit {
    id: TargetId,
    translation: Ramp,
    alpha: Ramp,
}

#[derive(Debug)]
struct ClearRun {
    items: Vec<ItemExit>,
    content: Ramp,
    left_screen: bool,
}

/// Builds and advances the composite clear-all animation.
#[derive(Debug, Default)]
pub struct ClearAll {
    run: Option<ClearRun>,
}

impl ClearAll {
    #[must_use]
    pub fn new() -> Self {
        Self { run: None }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Snapshot the attached task rows and start the teardown.
    pub fn start(&mut self, attached: &Attached, timings: &Timings) {
        let count = attached.task_items().count();
        let offsets = stagger_offsets(count, timings.item_exit_stagger);
        let items = attached
            .task_items()
            .zip(offsets)
            .map(|(target, offset)| ItemExit {
                id: target.id,
                translation: Ramp::new(
                    0.0,
                    target.width * timings.item_exit_translation_ratio,
                    timings.item_exit,
                )
                .delayed(offset)
                .easing(ease_out),
                alpha: Ramp::new(1.0, 0.0, timings.item_exit).delayed(offset),
            })
            .collect();
        debug!(count, "clearing all tasks");
        self.run = Some(ClearRun {
            items,
            content: Ramp::new(1.0, 0.0, timings.crossfade).delayed(timings.clear_all_fade_delay),
            left_screen: false,
        });
    }

    /// Advance the run, writing sampled values onto whatever snapshotted
    /// rows are still attached and onto the content surface.
    pub fn tick<H: ScreenHost>(
        &mut self,
        dt: Duration,
        attached: &mut Attached,
        content: &mut Surface,
        host: &mut H,
    ) -> ClearAllStatus {
        let Some(run) = &mut self.run else {
            return ClearAllStatus::Idle;
        };

        for item in &mut run.items {
            item.translation.tick(dt);
            item.alpha.tick(dt);
        }
        run.content.tick(dt);

        for item in &run.items {
            if let Some(target) = attached.get_mut(item.id) {
                target.translation_x = item.translation.value();
                target.alpha = item.alpha.value();
            }
        }
        content.alpha = run.content.value();
        if !run.left_screen && run.content.value() < 0.5 {
            run.left_screen = true;
            host.leave_screen();
        }

        let done = run.content.is_complete()
            && run
                .items
                .iter()
                .all(|i| i.translation.is_complete() && i.alpha.is_complete());
        if !done {
            return ClearAllStatus::Running;
        }
        for item in &run.items {
            if let Some(target) = attached.get_mut(item.id) {
                target.translation_x = 0.0;
                target.alpha = 1.0;
            }
        }
        self.run = None;
        ClearAllStatus::Finished
    }
}
