//! Task entity types.
//!
//! A task always belongs to exactly one list. Its `position` is only
//! meaningful while that list is the board's free-position list; for
//! ordered lists the value is stale and must not be read for layout.

use serde::{Deserialize, Serialize};

use crate::list::ListId;

/// Unique, stable identifier for a task.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point inside a list container, in percent of the container's
/// width (`x`) and height (`y`). Both components live in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the container's left edge, in percent.
    pub x: f64,
    /// Vertical offset from the container's top edge, in percent.
    pub y: f64,
}

impl Position {
    /// Creates a position from percentage components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A work item on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Display text. Opaque to the drag engine.
    pub title: String,
    /// Completion flag. Opaque to the drag engine.
    pub checked: bool,
    /// The list whose order sequence contains this task.
    pub list_id: ListId,
    /// Location inside the free-position list, in percent.
    pub position: Position,
}

impl Task {
    /// Creates an unchecked task at the top-left corner of `list_id`.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        list_id: impl Into<ListId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            checked: false,
            list_id: list_id.into(),
            position: Position::default(),
        }
    }

    /// Returns the task with its completion flag set to `checked`.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Returns the task placed at `position`.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}
