//! The sample board the demo host starts from.

use taskboard_model::{Board, BoardError, Position, Rect, Task, TaskList};

use crate::config::BoardConfig;

/// `(id, title, color)` of the three sample lists, left to right.
const LISTS: [(&str, &str, &str); 3] = [
    ("list-1", "To Do", "#ff6b6b"),
    ("list-2", "In Progress", "#4ecdc4"),
    ("list-3", "Done", "#45b7d1"),
];

/// Left margin before the first list container, in pixels.
const BOARD_MARGIN: f64 = 20.0;

/// Builds the sample board: three lists laid out side by side and five
/// tasks, with the configured list acting as the free-position list.
///
/// # Errors
///
/// Returns [`BoardError::UnknownFreeList`] if the configured free-position
/// list is not one of the sample lists.
pub fn sample_board(config: &BoardConfig) -> Result<Board, BoardError> {
    let mut builder = Board::builder();
    let mut left = BOARD_MARGIN;
    for (id, title, color) in LISTS {
        let bounds = Rect::new(left, 0.0, config.container_width, config.container_height);
        builder = builder.list(TaskList::new(id, title, color).with_bounds(bounds));
        left += config.container_width + config.list_gap;
    }
    if let Some(free) = &config.free_list {
        builder = builder.free_list_id(free.clone());
    }

    builder
        .task(
            Task::new("task-1", "Buy groceries", "list-1")
                .with_position(Position::new(8.0, 20.0)),
        )
        .task(
            Task::new("task-3", "Call dentist", "list-1")
                .with_position(Position::new(8.0, 40.0)),
        )
        .task(
            Task::new("task-2", "Review code", "list-2")
                .with_position(Position::new(8.0, 20.0)),
        )
        .task(
            Task::new("task-4", "Submit report", "list-3")
                .with_checked(true)
                .with_position(Position::new(8.0, 20.0)),
        )
        .task(
            Task::new("task-5", "Update resume", "list-3")
                .with_checked(true)
                .with_position(Position::new(8.0, 40.0)),
        )
        .build()
}
