#![forbid(unsafe_code)]

//! Out-of-band thumbnail hot-patching.
//!
//! A thumbnail arriving for a visible task patches the task in the backing
//! store and pushes the image straight onto the attached target, since only a
//! leaf visual property changes, so the structural notification path is
//! bypassed. Updates for tasks with no attached representation are dropped;
//! off-screen rows pick the image up on the next full reload.

use tracing::trace;

use crate::targets::Attached;
use crate::task::{TaskId, TaskListSource, Thumbnail};

/// Apply a thumbnail-ready event. Returns whether a visible row was patched.
pub fn apply_thumbnail<S: TaskListSource>(
    attached: &mut Attached,
    source: &mut S,
    task_id: TaskId,
    thumbnail: Thumbnail,
) -> bool {
    let Some(target) = attached.iter_mut().find(|t| t.task() == Some(task_id)) else {
        trace!(?task_id, "thumbnail for unattached task dropped");
        return false;
    };
    if let Some(task) = source.task_mut(task_id) {
        task.thumbnail = Some(thumbnail.clone());
    }
    target.thumbnail = Some(thumbnail);
    trace!(?task_id, "thumbnail patched in place");
    true
}
