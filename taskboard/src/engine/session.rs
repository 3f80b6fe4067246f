//! Per-gesture bookkeeping between drag start and drag end.

use std::sync::Arc;

use taskboard_model::{Board, Delta, DragEvent, DropTarget, Rect, Task, TaskId};

/// One in-flight drag gesture.
///
/// Created at drag start with the element measurement taken at that
/// moment, and consumed by [`finish`](Self::finish) at drag end. A value
/// never outlives its gesture.
#[derive(Debug)]
pub struct DragSession {
    task: Arc<Task>,
    dragged_box: Option<Rect>,
}

impl DragSession {
    /// Starts a session for `task_id`.
    ///
    /// Returns `None` if the board has no such task.
    #[must_use]
    pub fn start(board: &Board, task_id: &TaskId, dragged_box: Option<Rect>) -> Option<Self> {
        let task = Arc::clone(board.task(task_id)?);
        tracing::trace!(task = %task.id, measured = dragged_box.is_some(), "drag session started");
        Some(Self { task, dragged_box })
    }

    /// The task as it was when the drag started, for drawing a drag overlay.
    #[must_use]
    pub const fn active_task(&self) -> &Arc<Task> {
        &self.task
    }

    /// The element measurement captured at drag start.
    #[must_use]
    pub const fn dragged_box(&self) -> Option<Rect> {
        self.dragged_box
    }

    /// Ends the session, producing the event the engine resolves.
    #[must_use]
    pub fn finish(
        self,
        delta: Option<Delta>,
        drop_target: Option<DropTarget>,
        container_box: Option<Rect>,
    ) -> DragEvent {
        tracing::trace!(task = %self.task.id, "drag session finished");
        DragEvent {
            task_id: self.task.id.clone(),
            delta,
            drop_target,
            dragged_box: self.dragged_box,
            container_box,
        }
    }
}
