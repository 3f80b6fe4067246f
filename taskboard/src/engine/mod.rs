//! Drag resolution for task boards.
//!
//! Turns a finished drag gesture into the next board value. Drops on the
//! free-position list become clamped percentage coordinates; drops on
//! ordered lists become splices of the order sequences. Gestures that
//! cannot be resolved leave the board untouched.

pub mod controller;
pub mod geometry;
pub mod resolve;
pub mod session;

pub use controller::BoardController;
pub use geometry::{FreePlacement, clamp_percent, resolve_free_position, to_container_percent};
pub use resolve::{resolve_drag, try_resolve_drag};
pub use session::DragSession;

use taskboard_model::{ListId, TaskId};
use thiserror::Error;

/// Why a gesture left the board unchanged.
///
/// These never reach the host as failures; [`resolve_drag`] absorbs them
/// and returns the previous board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DragSkip {
    /// The dragged or targeted task does not exist.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),
    /// The targeted list does not exist.
    #[error("unknown list: {0}")]
    UnknownList(ListId),
    /// A task is missing from its own list's order sequence.
    #[error("task {0} is not in its list's order")]
    NotInOrder(TaskId),
    /// The free-position container has no usable measurement.
    #[error("container of list {0} is not measured")]
    UnmeasuredContainer(ListId),
    /// The gesture had no displacement.
    #[error("no movement")]
    NoMovement,
    /// The gesture ended outside every drop target.
    #[error("no drop target")]
    NoDropTarget,
    /// A row was dropped onto itself in an ordered list.
    #[error("dropped onto itself")]
    SelfDrop,
    /// The task would land at the rank it already has.
    #[error("rank unchanged")]
    UnchangedIndex,
    /// The task would land at the coordinates it already has.
    #[error("position unchanged")]
    UnchangedPosition,
}
