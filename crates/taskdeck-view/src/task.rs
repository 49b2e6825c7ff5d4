#![forbid(unsafe_code)]

//! Task model and the asynchronous task-list source boundary.

use std::sync::Arc;

/// Identity of a recent task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u32);

/// Opaque snapshot image handle. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail(pub Arc<[u8]>);

impl Thumbnail {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Arc::from(bytes.into()))
    }
}

/// One recent task. Owned by the task-list source; the coordinator only
/// patches `thumbnail` in place through [`TaskListSource::task_mut`].
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub thumbnail: Option<Thumbnail>,
}

impl Task {
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            thumbnail: None,
        }
    }
}

/// The asynchronously reloadable task list.
///
/// `begin_reload` only kicks the load off; the host delivers completion by
/// storing the resolved tasks behind this trait and then calling
/// [`RecentsView::on_reload_complete`](crate::view::RecentsView::on_reload_complete)
/// on the same event loop.
pub trait TaskListSource {
    /// Whether the current data is stale and a reload is warranted.
    fn needs_reload(&self) -> bool;

    /// Start an asynchronous reload.
    fn begin_reload(&mut self);

    /// Backing-store access to a loaded task, for in-place mutation.
    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task>;
}
