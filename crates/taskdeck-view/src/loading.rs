#![forbid(unsafe_code)]

//! The asynchronous-reload reconciliation flow.
//!
//! An explicit state machine (`Idle → Loading → Filling → Steady`) driven by
//! discrete events: the reload kick-off, its completion, and the end of the
//! content-fill animation. Keeping the phases central avoids scattering
//! "is a load in flight" checks across call sites.
//!
//! # Invariants
//!
//! 1. At reload completion the placeholder population is at least as large
//!    as the resolved task population. Placeholder rows are positionally
//!    reused as content slots, so a violation indicates adapter bookkeeping
//!    corruption upstream and is fatal.
//! 2. Completion emits exactly one range-removed for the surplus
//!    placeholder slots followed by one range-changed for the content
//!    slots, in that order.

use tracing::{debug, warn};

use crate::adapter::{AdapterChange, ChangeReason, ItemAnimatorKind, TaskAdapter};
use crate::task::TaskListSource;

/// Where the reload flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No reload has been requested.
    Idle,
    /// A reload is in flight; the adapter is showing placeholders.
    Loading,
    /// The reload resolved and the content-fill animation is running.
    Filling,
    /// The list reflects the loaded data.
    Steady,
}

/// Drives the reload path and reconciles placeholders against loaded tasks.
#[derive(Debug)]
pub struct LoadFlow {
    phase: LoadPhase,
}

impl LoadFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Start a reload if the source considers its data stale.
    ///
    /// Flips the adapter into placeholder mode and emits a full reset before
    /// kicking off the asynchronous load. Returns the emitted change for
    /// observer routing, or `None` when the data is fresh.
    pub fn begin<S: TaskListSource, A: TaskAdapter>(
        &mut self,
        source: &mut S,
        adapter: &mut A,
    ) -> Option<AdapterChange> {
        if !source.needs_reload() {
            return None;
        }
        debug!("task list stale, reloading");
        adapter.set_loading_mode(true);
        adapter.notify_reset();
        source.begin_reload();
        self.phase = LoadPhase::Loading;
        Some(AdapterChange::Reset)
    }

    /// Reconcile the placeholder population against the loaded one.
    ///
    /// Returns the emitted changes for observer routing.
    ///
    /// # Panics
    ///
    /// Panics if fewer placeholder rows exist than resolved tasks.
    pub fn complete<A: TaskAdapter>(&mut self, adapter: &mut A) -> Vec<AdapterChange> {
        if self.phase != LoadPhase::Loading {
            warn!(phase = ?self.phase, "reload completion with no reload in flight");
            return Vec::new();
        }
        let num_empty = adapter.item_count();
        adapter.set_loading_mode(false);
        let num_actual = adapter.item_count();
        assert!(
            num_empty >= num_actual,
            "fewer placeholder rows ({num_empty}) than resolved tasks ({num_actual})"
        );
        debug!(num_empty, num_actual, "reload resolved");

        // A pending structural change means the default item animator will
        // run for these mutations anyway, so content-fill would never fire.
        if !adapter.has_pending_structural_changes() {
            adapter.set_item_animator(ItemAnimatorKind::ContentFill);
            self.phase = LoadPhase::Filling;
        } else {
            self.phase = LoadPhase::Steady;
        }

        adapter.notify_range_removed(num_actual, num_empty - num_actual);
        adapter.notify_range_changed(0, num_actual, ChangeReason::EmptyToContent);
        vec![
            AdapterChange::RangeRemoved {
                start: num_actual,
                count: num_empty - num_actual,
            },
            AdapterChange::RangeChanged {
                start: 0,
                count: num_actual,
                reason: ChangeReason::EmptyToContent,
            },
        ]
    }

    /// The content-fill animation finished; restore the default animator.
    pub fn content_fill_complete<A: TaskAdapter>(&mut self, adapter: &mut A) {
        if self.phase == LoadPhase::Filling {
            adapter.set_item_animator(ItemAnimatorKind::Default);
            self.phase = LoadPhase::Steady;
        }
    }
}

impl Default for LoadFlow {
    fn default() -> Self {
        Self::new()
    }
}
