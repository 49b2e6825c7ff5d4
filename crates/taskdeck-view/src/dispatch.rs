#![forbid(unsafe_code)]

//! Overview-command target selection.

use crate::targets::Attached;
use crate::task::TaskId;

/// Pick the task an overview command should launch.
///
/// Most recent by default; second most recent when the screen was entered
/// straight from an app (so the command flips back to the previous one).
/// Returns `None` when nothing is attached or the chosen row is a
/// placeholder.
#[must_use]
pub fn overview_launch_target(attached: &Attached, arrived_from_app: bool) -> Option<TaskId> {
    let index = if arrived_from_app && attached.task_items().nth(1).is_some() {
        1
    } else {
        0
    };
    attached.task_items().nth(index)?.task()
}
