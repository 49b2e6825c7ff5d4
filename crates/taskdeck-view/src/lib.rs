#![forbid(unsafe_code)]

//! Recents-list state coordination for the taskdeck panel.
//!
//! The panel shows one of three things: loading placeholders, the list of
//! recent tasks, or an empty message. This crate owns the decision of which,
//! reconciles it with an asynchronously reloaded task list, and choreographs
//! the crossfades, staggered fade-ins, and the clear-all teardown that
//! accompany every change. Rendering, list recycling, gestures, and task
//! storage are external collaborators reached through the traits in
//! [`task`], [`adapter`], and [`control`].
//!
//! The entry point is [`view::RecentsView`]: the host feeds it discrete
//! events (enter, layout, reload completion, adapter changes, attach/detach,
//! thumbnails) and advances it with `tick(dt)` from its event loop.

pub mod adapter;
pub mod clear_all;
pub mod control;
pub mod dispatch;
pub mod loading;
pub mod targets;
pub mod task;
pub mod thumbnails;
pub mod view;
pub mod visibility;

pub use adapter::{AdapterChange, ChangeReason, ItemAnimatorKind, TaskAdapter};
pub use control::{ActionController, ScreenHost};
pub use loading::LoadPhase;
pub use targets::{Surface, SurfaceVisibility, Surfaces, TargetId, TargetKind, TargetView};
pub use task::{Task, TaskId, TaskListSource, Thumbnail};
pub use view::{RecentsView, Timings};
pub use visibility::VisibilityState;
