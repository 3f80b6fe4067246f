//! List entity types.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Unique, stable identifier for a list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(String);

impl ListId {
    /// Creates a list identifier from any string-like value.
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

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ListId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named collection of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    /// Unique list identifier.
    pub id: ListId,
    /// Display title.
    pub title: String,
    /// Display color (CSS-style string such as `#ff6b6b`).
    pub color: String,
    /// Last measured container geometry, in pixels.
    ///
    /// Derived from live layout rather than owned as board truth; `None`
    /// until the host has measured the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Rect>,
}

impl TaskList {
    /// Creates an unmeasured list.
    #[must_use]
    pub fn new(id: impl Into<ListId>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            bounds: None,
        }
    }

    /// Returns the list with its container geometry set.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }
}
