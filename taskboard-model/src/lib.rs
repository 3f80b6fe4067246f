//! Data model for the `taskboard` drag engine.
//!
//! Plain values exchanged between a host UI and the engine: the board and
//! its entities, pixel geometry, and drag gesture descriptors.

pub mod board;
pub mod drag;
pub mod geometry;
pub mod list;
pub mod task;

pub use board::{Board, BoardBuilder, BoardError};
pub use drag::{DragEvent, DropTarget};
pub use geometry::{Delta, Rect};
pub use list::{ListId, TaskList};
pub use task::{Position, Task, TaskId};
