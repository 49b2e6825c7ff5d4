#![forbid(unsafe_code)]

//! The collection-adapter boundary.
//!
//! The adapter belongs to the external list/recycling machinery; the
//! coordinator drives it through this trait and mirrors every structural
//! notification it emits as an [`AdapterChange`] so the visibility state
//! machine can observe the same stream.

/// Payload tag for a range-changed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// Placeholder rows are being rebound to real content in place.
    EmptyToContent,
}

/// Which item-animation strategy the list machinery should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAnimatorKind {
    /// The everyday add/remove/move animator.
    Default,
    /// One-shot placeholder-to-content fill animation; reverts to
    /// [`ItemAnimatorKind::Default`] once it finishes.
    ContentFill,
}

/// A structural change in the adapter's item population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterChange {
    /// The whole data set changed.
    Reset,
    /// `count` items were removed starting at `start`.
    RangeRemoved { start: usize, count: usize },
    /// `count` items starting at `start` changed in place.
    RangeChanged {
        start: usize,
        count: usize,
        reason: ChangeReason,
    },
}

/// Adapter operations consumed by the coordinator.
pub trait TaskAdapter {
    /// Number of items the adapter currently exposes. While loading mode is
    /// on, this is the placeholder population.
    fn item_count(&self) -> usize;

    /// Switch the adapter between placeholder rows and real content.
    fn set_loading_mode(&mut self, loading: bool);

    /// Emit a full-reset notification.
    fn notify_reset(&mut self);

    /// Emit a range-removed notification.
    fn notify_range_removed(&mut self, start: usize, count: usize);

    /// Emit a range-changed notification with a reason tag.
    fn notify_range_changed(&mut self, start: usize, count: usize, reason: ChangeReason);

    /// Whether previously emitted structural changes have not yet been
    /// applied by the layout machinery.
    fn has_pending_structural_changes(&self) -> bool;

    /// Select the item-animation strategy for upcoming mutations.
    fn set_item_animator(&mut self, kind: ItemAnimatorKind);
}
