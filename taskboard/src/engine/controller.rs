//! Host-side owner of the authoritative board.
//!
//! `BoardController` wires drag-start and drag-end callbacks from a UI
//! toolkit to the pure engine: it keeps at most one [`DragSession`] and
//! swaps the board atomically when a gesture resolves.

use std::sync::Arc;

use taskboard_model::{Board, Delta, DropTarget, ListId, Rect, Task, TaskId};

use super::DragSkip;
use super::resolve::try_resolve_drag;
use super::session::DragSession;

/// Owns the current board and the in-flight drag gesture, if any.
#[derive(Debug)]
pub struct BoardController {
    board: Board,
    session: Option<DragSession>,
    last_skip: Option<DragSkip>,
}

impl BoardController {
    /// Creates a controller around an existing board.
    ///
    /// The board is expected to satisfy its invariants; a violation is
    /// logged because every later gesture touching the broken part will be
    /// skipped.
    #[must_use]
    pub fn new(board: Board) -> Self {
        if let Err(e) = board.check_invariants() {
            tracing::warn!(error = %e, "board handed to controller is inconsistent");
        }
        Self {
            board,
            session: None,
            last_skip: None,
        }
    }

    /// The current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the controller, returning the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns `true` while a gesture is in flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The task being dragged, as it was at drag start.
    #[must_use]
    pub fn active_task(&self) -> Option<&Arc<Task>> {
        self.session.as_ref().map(DragSession::active_task)
    }

    /// Why the most recent drag end left the board unchanged, if it did.
    #[must_use]
    pub const fn last_skip(&self) -> Option<&DragSkip> {
        self.last_skip.as_ref()
    }

    /// Records fresh container geometry for a list after a layout pass.
    ///
    /// Returns `false` if the list does not exist.
    pub fn measure_list(&mut self, list: &ListId, bounds: Rect) -> bool {
        self.board.set_list_bounds(list, bounds)
    }

    /// Begins a gesture.
    ///
    /// Any previous session is discarded. Returns the active task, or
    /// `None` (and no session) if the task is unknown.
    pub fn on_drag_start(
        &mut self,
        task_id: &TaskId,
        dragged_box: Option<Rect>,
    ) -> Option<&Arc<Task>> {
        if self.session.is_some() {
            tracing::trace!("replacing unfinished drag session");
        }
        self.session = DragSession::start(&self.board, task_id, dragged_box);
        self.active_task()
    }

    /// Abandons the in-flight gesture without touching the board.
    pub fn on_drag_cancel(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::trace!(task = %session.active_task().id, "drag cancelled");
        }
    }

    /// Ends the in-flight gesture and resolves it.
    ///
    /// Without a session this is a no-op. Either the whole board is
    /// replaced or nothing changes.
    pub fn on_drag_end(
        &mut self,
        delta: Option<Delta>,
        drop_target: Option<DropTarget>,
        container_box: Option<Rect>,
    ) -> &Board {
        let Some(session) = self.session.take() else {
            tracing::trace!("drag end without a session");
            return &self.board;
        };
        let event = session.finish(delta, drop_target, container_box);
        match try_resolve_drag(&self.board, &event) {
            Ok(next) => {
                self.board = next;
                self.last_skip = None;
            }
            Err(skip) => {
                tracing::debug!(task = %event.task_id, reason = %skip, "drag left board unchanged");
                self.last_skip = Some(skip);
            }
        }
        &self.board
    }
}
