#![forbid(unsafe_code)]

//! The recents panel facade.
//!
//! [`RecentsView`] wires the visibility state machine, the reload flow, the
//! clear-all teardown, the fade-in cascade, and the thumbnail patch path to
//! the host's collaborators. The host feeds it discrete events and calls
//! [`RecentsView::tick`] from its event loop; the view writes sampled
//! animation values onto the attached targets and chrome surfaces, which
//! the host reads back when rendering.

use std::time::Duration;

use taskdeck_anim::FadeCascade;
use tracing::debug;

use crate::adapter::{AdapterChange, TaskAdapter};
use crate::clear_all::{ClearAll, ClearAllStatus};
use crate::control::{ActionController, ScreenHost};
use crate::dispatch::overview_launch_target;
use crate::loading::{LoadFlow, LoadPhase};
use crate::targets::{Attached, Surface, SurfaceVisibility, Surfaces, TargetId, TargetView};
use crate::task::{TaskId, TaskListSource, Thumbnail};
use crate::thumbnails::apply_thumbnail;
use crate::visibility::{ContentVisibility, VisibilityState};

/// Animation timing knobs. The defaults are the production values.
#[derive(Debug, Clone)]
pub struct Timings {
    /// Content/empty crossfade, also the clear-all content ramp.
    pub crossfade: Duration,
    /// Per-row fade-in on entering the screen.
    pub item_fade_in: Duration,
    pub item_fade_in_stagger: Duration,
    /// Per-row slide+fade during clear-all.
    pub item_exit: Duration,
    pub item_exit_stagger: Duration,
    /// Exit slide distance as a fraction of the row width.
    pub item_exit_translation_ratio: f32,
    /// Delay before the clear-all content ramp begins.
    pub clear_all_fade_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            crossfade: Duration::from_millis(300),
            item_fade_in: Duration::from_millis(150),
            item_fade_in_stagger: Duration::from_millis(40),
            item_exit: Duration::from_millis(150),
            item_exit_stagger: Duration::from_millis(40),
            item_exit_translation_ratio: 0.25,
            clear_all_fade_delay: Duration::from_millis(120),
        }
    }
}

impl Timings {
    #[must_use]
    pub fn with_crossfade(mut self, duration: Duration) -> Self {
        self.crossfade = duration;
        self
    }

    #[must_use]
    pub fn with_item_fade_in(mut self, duration: Duration, stagger: Duration) -> Self {
        self.item_fade_in = duration;
        self.item_fade_in_stagger = stagger;
        self
    }

    #[must_use]
    pub fn with_item_exit(mut self, duration: Duration, stagger: Duration) -> Self {
        self.item_exit = duration;
        self.item_exit_stagger = stagger;
        self
    }

    #[must_use]
    pub fn with_clear_all_fade_delay(mut self, delay: Duration) -> Self {
        self.clear_all_fade_delay = delay;
        self
    }
}

/// Root coordinator for the recents panel.
pub struct RecentsView<S, A, C, H> {
    source: S,
    adapter: A,
    actions: C,
    host: H,
    timings: Timings,
    attached: Attached,
    surfaces: Surfaces,
    panel: Surface,
    visibility: ContentVisibility,
    load: LoadFlow,
    clear: ClearAll,
    cascade: FadeCascade<TargetId>,
    fade_in_armed: bool,
    arrived_from_app: bool,
    enabled: bool,
}

impl<S, A, C, H> RecentsView<S, A, C, H>
where
    S: TaskListSource,
    A: TaskAdapter,
    C: ActionController,
    H: ScreenHost,
{
    pub fn new(source: S, adapter: A, actions: C, host: H) -> Self {
        Self {
            source,
            adapter,
            actions,
            host,
            timings: Timings::default(),
            attached: Attached::new(),
            surfaces: Surfaces::new(),
            panel: Surface::visible(),
            visibility: ContentVisibility::new(),
            load: LoadFlow::new(),
            clear: ClearAll::new(),
            cascade: FadeCascade::new(),
            fade_in_armed: false,
            arrived_from_app: false,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    // ---- read access for the host ----

    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.visibility.state()
    }

    #[must_use]
    pub fn load_phase(&self) -> LoadPhase {
        self.load.phase()
    }

    #[must_use]
    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    #[must_use]
    pub fn panel(&self) -> &Surface {
        &self.panel
    }

    #[must_use]
    pub fn attached(&self) -> &Attached {
        &self.attached
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Bottom-most task row, for cross-screen transition handoff.
    #[must_use]
    pub fn bottom_task_target(&self) -> Option<TargetId> {
        self.attached.task_items().next().map(|t| t.id)
    }

    // ---- screen lifecycle ----

    /// The panel is about to come up: arm the entrance fade-in and reload
    /// the task list if it has gone stale.
    pub fn on_enter_screen(&mut self) {
        self.fade_in_armed = true;
        if let Some(change) = self.load.begin(&mut self.source, &mut self.adapter) {
            self.process_change(change);
        }
    }

    /// An overview command arrived while the panel is up: launch the most
    /// recent task, or the one before it when we came straight from an app.
    pub fn on_exit_command(&mut self) {
        if let Some(task) = overview_launch_target(&self.attached, self.arrived_from_app) {
            debug!(?task, "overview command launch");
            self.actions.launch(task);
        }
    }

    pub fn set_arrived_from_app(&mut self, arrived: bool) {
        self.arrived_from_app = arrived;
    }

    /// Enable or disable interaction, propagating to every attached target.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        for target in self.attached.iter_mut() {
            target.enabled = enabled;
        }
    }

    /// Overall panel alpha for outer cross-screen transitions. The panel
    /// renders only while its alpha is above zero.
    pub fn set_panel_alpha(&mut self, alpha: f32) {
        self.panel.alpha = alpha.clamp(0.0, 1.0);
        self.panel.visibility = if self.panel.alpha > 0.0 {
            SurfaceVisibility::Visible
        } else {
            SurfaceVisibility::Hidden
        };
    }

    // ---- data events ----

    /// The source finished its asynchronous reload (the host has already
    /// stored the resolved tasks behind the source and adapter).
    pub fn on_reload_complete(&mut self) {
        for change in self.load.complete(&mut self.adapter) {
            self.process_change(change);
        }
    }

    /// The content-fill item animation finished.
    pub fn on_content_fill_complete(&mut self) {
        self.load.content_fill_complete(&mut self.adapter);
    }

    /// A structural change originated outside the coordinator (for example
    /// a swipe dismissal).
    pub fn on_adapter_changed(&mut self, change: AdapterChange) {
        self.process_change(change);
    }

    fn process_change(&mut self, change: AdapterChange) {
        match change {
            AdapterChange::Reset | AdapterChange::RangeRemoved { .. } => {
                self.visibility.reconcile(
                    self.adapter.item_count(),
                    &mut self.surfaces,
                    &mut self.host,
                    self.timings.crossfade,
                );
            }
            AdapterChange::RangeChanged { .. } => {}
        }
    }

    /// A thumbnail resolved out of band.
    pub fn thumbnail_updated(&mut self, task: TaskId, thumbnail: Thumbnail) {
        apply_thumbnail(&mut self.attached, &mut self.source, task, thumbnail);
    }

    // ---- attachment events ----

    /// The recycling machinery attached a target.
    pub fn target_attached(&mut self, target: TargetView) {
        let id = target.id;
        self.attached.attach(target);
        // Content that arrives after the entrance animation started must
        // not pop in unanimated.
        if self.cascade.is_running() && !self.cascade.contains(id) {
            debug!(?id, "late attach, restarting fade-in");
            self.restart_fade_in();
        }
    }

    /// The recycling machinery detached a target.
    pub fn target_detached(&mut self, id: TargetId) {
        self.attached.detach(id);
    }

    /// The layout pass after entering the screen completed; start the armed
    /// entrance fade-in.
    pub fn on_layout_complete(&mut self) {
        if std::mem::take(&mut self.fade_in_armed) {
            self.restart_fade_in();
        }
    }

    fn restart_fade_in(&mut self) {
        if self.clear.is_running() {
            return;
        }
        let ids = self.attached.task_item_ids();
        self.cascade.start(
            ids,
            self.timings.item_fade_in_stagger,
            self.timings.item_fade_in,
        );
        for (id, value) in self.cascade.values() {
            if let Some(target) = self.attached.get_mut(id) {
                target.alpha = value;
            }
        }
    }

    // ---- clear all ----

    /// Tear the whole list down and clear it. No-op while interaction is
    /// disabled, which also guards against double invocation.
    pub fn clear_all(&mut self) {
        if !self.enabled {
            return;
        }
        self.set_enabled(false);
        // The teardown owns the item alphas and the content surface now.
        self.cascade.cancel();
        self.visibility.cancel();
        self.clear.start(&self.attached, &self.timings);
    }

    // ---- the clock ----

    /// Advance every in-flight animation and apply its sampled values.
    pub fn tick(&mut self, dt: Duration) {
        if self.cascade.is_running() {
            self.cascade.tick(dt);
            for (id, value) in self.cascade.values() {
                if let Some(target) = self.attached.get_mut(id) {
                    target.alpha = value;
                }
            }
        }

        self.visibility.tick(dt, &mut self.surfaces);

        let status = self.clear.tick(
            dt,
            &mut self.attached,
            &mut self.surfaces.content,
            &mut self.host,
        );
        if status == ClearAllStatus::Finished {
            self.set_enabled(true);
            self.surfaces.content.visibility = SurfaceVisibility::Hidden;
            self.actions.clear_all_tasks();
        }
    }
}
