//! Drag gesture descriptors handed from the host to the engine.

use serde::{Deserialize, Serialize};

use crate::geometry::{Delta, Rect};
use crate::list::ListId;
use crate::task::TaskId;

/// What the pointer was over when the gesture ended.
///
/// Produced by the host's collision detection and consumed as an
/// already-resolved answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum DropTarget {
    /// Empty space inside a list container.
    List(ListId),
    /// A specific task row or card; the owning list is derived from it.
    Task(TaskId),
}

impl std::fmt::Display for DropTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(id) => write!(f, "list:{id}"),
            Self::Task(id) => write!(f, "task:{id}"),
        }
    }
}

/// Everything the engine needs to resolve one finished drag gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    /// The task being dragged.
    pub task_id: TaskId,
    /// Displacement over the whole gesture. `None` means no movement.
    #[serde(default)]
    pub delta: Option<Delta>,
    /// Drop target, or `None` when released outside every target.
    #[serde(default)]
    pub drop_target: Option<DropTarget>,
    /// Bounding box of the dragged element, measured at drag start.
    #[serde(default)]
    pub dragged_box: Option<Rect>,
    /// Bounding box of the destination container, measured at drag end.
    #[serde(default)]
    pub container_box: Option<Rect>,
}

impl DragEvent {
    /// Creates an event for `task_id` with no movement and no target.
    #[must_use]
    pub fn new(task_id: impl Into<TaskId>) -> Self {
        Self {
            task_id: task_id.into(),
            delta: None,
            drop_target: None,
            dragged_box: None,
            container_box: None,
        }
    }

    /// Sets the gesture displacement.
    #[must_use]
    pub fn with_delta(mut self, dx: f64, dy: f64) -> Self {
        self.delta = Some(Delta::new(dx, dy));
        self
    }

    /// Sets the drop target to empty space in `list_id`.
    #[must_use]
    pub fn onto_list(mut self, list_id: impl Into<ListId>) -> Self {
        self.drop_target = Some(DropTarget::List(list_id.into()));
        self
    }

    /// Sets the drop target to the task `task_id`.
    #[must_use]
    pub fn onto_task(mut self, task_id: impl Into<TaskId>) -> Self {
        self.drop_target = Some(DropTarget::Task(task_id.into()));
        self
    }

    /// Sets the pre-drag bounding box of the dragged element.
    #[must_use]
    pub fn with_dragged_box(mut self, rect: Rect) -> Self {
        self.dragged_box = Some(rect);
        self
    }

    /// Sets the destination container's bounding box.
    #[must_use]
    pub fn with_container_box(mut self, rect: Rect) -> Self {
        self.container_box = Some(rect);
        self
    }
}
