#![forbid(unsafe_code)]

//! Outbound collaborator seams: task actions and the screen host.

use crate::task::TaskId;

/// Executes task-level actions on behalf of the panel.
pub trait ActionController {
    /// Launch the given task, leaving the panel.
    fn launch(&mut self, task: TaskId);

    /// Remove every task from the backing list.
    fn clear_all_tasks(&mut self);
}

/// The screen that hosts the panel.
pub trait ScreenHost {
    /// Leave the recents screen.
    fn leave_screen(&mut self);
}
