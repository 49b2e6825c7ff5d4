#![forbid(unsafe_code)]

//! Attached visual targets and the panel's two chrome surfaces.
//!
//! Targets are the currently-attached item representations. Their lifecycle
//! belongs to the external recycling machinery: the coordinator is told
//! about attach/detach, reads the set as a snapshot per use, and mutates
//! only the animated leaf properties (alpha, translation, thumbnail,
//! enabled).

use crate::task::{TaskId, Thumbnail};

/// Identity of an attached visual target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);

/// What an attached target is, resolved once at attach time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A task row. `task` is `None` while the row is a loading placeholder.
    TaskItem { task: Option<TaskId> },
    /// The clear-all control row.
    ClearAllControl,
}

/// One attached visual representation.
#[derive(Debug, Clone)]
pub struct TargetView {
    pub id: TargetId,
    pub kind: TargetKind,
    pub alpha: f32,
    pub translation_x: f32,
    pub width: f32,
    pub enabled: bool,
    pub thumbnail: Option<Thumbnail>,
}

impl TargetView {
    /// A task row, bound to `task` (or a placeholder when `None`).
    pub fn task_item(id: TargetId, task: Option<TaskId>, width: f32) -> Self {
        Self {
            id,
            kind: TargetKind::TaskItem { task },
            alpha: 1.0,
            translation_x: 0.0,
            width,
            enabled: true,
            thumbnail: None,
        }
    }

    /// The clear-all control row.
    pub fn clear_all_control(id: TargetId, width: f32) -> Self {
        Self {
            id,
            kind: TargetKind::ClearAllControl,
            alpha: 1.0,
            translation_x: 0.0,
            width,
            enabled: true,
            thumbnail: None,
        }
    }

    /// The bound task, if this is a non-placeholder task row.
    #[must_use]
    pub fn task(&self) -> Option<TaskId> {
        match self.kind {
            TargetKind::TaskItem { task } => task,
            TargetKind::ClearAllControl => None,
        }
    }

    #[must_use]
    pub fn is_task_item(&self) -> bool {
        matches!(self.kind, TargetKind::TaskItem { .. })
    }
}

/// The attached-target registry, ordered most-recent-first.
#[derive(Debug, Default)]
pub struct Attached {
    targets: Vec<TargetView>,
}

impl Attached {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, target: TargetView) {
        self.targets.push(target);
    }

    pub fn detach(&mut self, id: TargetId) -> Option<TargetView> {
        let index = self.targets.iter().position(|t| t.id == id)?;
        Some(self.targets.remove(index))
    }

    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&TargetView> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut TargetView> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetView> {
        self.targets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TargetView> {
        self.targets.iter_mut()
    }

    /// Task rows in attachment order, the clear-all control excluded.
    pub fn task_items(&self) -> impl Iterator<Item = &TargetView> {
        self.targets.iter().filter(|t| t.is_task_item())
    }

    /// Snapshot of task-row ids in attachment order.
    #[must_use]
    pub fn task_item_ids(&self) -> Vec<TargetId> {
        self.task_items().map(|t| t.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Render state of a chrome surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceVisibility {
    Visible,
    /// Not rendered at all (distinct from alpha 0.0 while fading).
    Hidden,
}

/// One of the panel's chrome surfaces (the content list or the empty
/// message).
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub alpha: f32,
    pub visibility: SurfaceVisibility,
}

impl Surface {
    #[must_use]
    pub fn visible() -> Self {
        Self {
            alpha: 1.0,
            visibility: SurfaceVisibility::Visible,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            alpha: 0.0,
            visibility: SurfaceVisibility::Hidden,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == SurfaceVisibility::Visible
    }
}

/// The content surface and the empty surface, exactly one of which is
/// visible at steady state.
#[derive(Debug, Clone, Copy)]
pub struct Surfaces {
    pub content: Surface,
    pub empty: Surface,
}

impl Surfaces {
    /// Initial chrome: the content surface up, the empty surface down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: Surface::visible(),
            empty: Surface::hidden(),
        }
    }
}

impl Default for Surfaces {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, task: Option<u32>) -> TargetView {
        TargetView::task_item(TargetId(id), task.map(TaskId), 100.0)
    }

    #[test]
    fn attach_preserves_order() {
        let mut attached = Attached::new();
        attached.attach(item(1, Some(10)));
        attached.attach(item(2, Some(20)));
        let ids: Vec<TargetId> = attached.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TargetId(1), TargetId(2)]);
    }

    #[test]
    fn detach_removes_and_returns() {
        let mut attached = Attached::new();
        attached.attach(item(1, None));
        let removed = attached.detach(TargetId(1));
        assert!(removed.is_some());
        assert!(attached.is_empty());
        assert!(attached.detach(TargetId(1)).is_none());
    }

    #[test]
    fn task_items_skip_the_clear_all_control() {
        let mut attached = Attached::new();
        attached.attach(item(1, Some(10)));
        attached.attach(TargetView::clear_all_control(TargetId(99), 100.0));
        attached.attach(item(2, Some(20)));
        let ids = attached.task_item_ids();
        assert_eq!(ids, vec![TargetId(1), TargetId(2)]);
    }

    #[test]
    fn placeholder_rows_have_no_task() {
        let target = item(1, None);
        assert!(target.is_task_item());
        assert_eq!(target.task(), None);
    }

    #[test]
    fn surfaces_start_content_up() {
        let surfaces = Surfaces::new();
        assert!(surfaces.content.is_visible());
        assert!(!surfaces.empty.is_visible());
    }
}
