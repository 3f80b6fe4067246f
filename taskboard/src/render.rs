//! Plain-text rendering of a board for the demo host.

use std::fmt::Write as _;

use taskboard_model::Board;

/// Renders every list with its tasks in display order.
///
/// Ordered lists show each task's rank; the free-position list shows each
/// task's coordinates instead. Checked tasks are marked `[x]`.
#[must_use]
pub fn board_to_text(board: &Board) -> String {
    let mut out = String::new();
    for (id, list) in board.lists() {
        let free = board.is_free_list(id);
        let kind = if free { " (free-position)" } else { "" };
        let _ = writeln!(out, "{} [{id}]{kind}", list.title);

        let tasks = board.tasks_in(id);
        if tasks.is_empty() {
            out.push_str("  (empty)\n");
        }
        for (rank, task) in tasks.iter().enumerate() {
            let mark = if task.checked { "[x]" } else { "[ ]" };
            if free {
                let _ = writeln!(
                    out,
                    "  {mark} {} {} @ ({:.1}%, {:.1}%)",
                    task.id, task.title, task.position.x, task.position.y
                );
            } else {
                let _ = writeln!(out, "  {}. {mark} {} {}", rank + 1, task.id, task.title);
            }
        }
    }
    out
}
