//! The board state transition for one finished drag gesture.
//!
//! [`resolve_drag`] is pure: it reads a board and an event and returns the
//! next board. Gestures that cannot or should not change anything come
//! back as the input board, with every entity still shared. The reason is
//! available through [`try_resolve_drag`].

use std::sync::Arc;

use taskboard_model::{Board, Delta, DragEvent, DropTarget, ListId, Position, Rect, Task, TaskId};

use super::DragSkip;
use super::geometry::{FreePlacement, position_to_px, resolve_free_position};

/// Resolves a drag gesture into the next board value.
///
/// Never fails: every unresolvable, degenerate or redundant gesture yields
/// a clone of `board` whose entities are all `Arc::ptr_eq` to the input's.
#[must_use]
pub fn resolve_drag(board: &Board, event: &DragEvent) -> Board {
    match try_resolve_drag(board, event) {
        Ok(next) => next,
        Err(skip) => {
            tracing::debug!(task = %event.task_id, reason = %skip, "drag left board unchanged");
            board.clone()
        }
    }
}

/// Resolves a drag gesture, reporting why it was absorbed as a no-op.
///
/// # Errors
///
/// Returns a [`DragSkip`] when the gesture leaves the board unchanged.
pub fn try_resolve_drag(board: &Board, event: &DragEvent) -> Result<Board, DragSkip> {
    let delta = event
        .delta
        .filter(|d| !d.is_zero())
        .ok_or(DragSkip::NoMovement)?;
    let target = event.drop_target.as_ref().ok_or(DragSkip::NoDropTarget)?;
    let task = board
        .task(&event.task_id)
        .ok_or_else(|| DragSkip::UnknownTask(event.task_id.clone()))?;

    let dest = destination_list(board, target)?;
    if board.is_free_list(&dest) {
        place_freely(board, task, &dest, delta, event)
    } else {
        if matches!(target, DropTarget::Task(id) if *id == task.id) {
            return Err(DragSkip::SelfDrop);
        }
        place_in_order(board, task, &dest, target)
    }
}

/// Works out which list the gesture ends in.
fn destination_list(board: &Board, target: &DropTarget) -> Result<ListId, DragSkip> {
    match target {
        DropTarget::List(id) => {
            if board.list(id).is_none() {
                return Err(DragSkip::UnknownList(id.clone()));
            }
            Ok(id.clone())
        }
        DropTarget::Task(id) => board
            .task(id)
            .map(|t| t.list_id.clone())
            .ok_or_else(|| DragSkip::UnknownTask(id.clone())),
    }
}

/// Drop into the free-position list: compute coordinates, append on entry.
fn place_freely(
    board: &Board,
    task: &Arc<Task>,
    dest: &ListId,
    delta: Delta,
    event: &DragEvent,
) -> Result<Board, DragSkip> {
    let container = event
        .container_box
        .or_else(|| board.list(dest).and_then(|l| l.bounds))
        .filter(Rect::is_measured)
        .ok_or_else(|| DragSkip::UnmeasuredContainer(dest.clone()))?;

    // Without a drag-start measurement, start from where the card was drawn.
    let element = event.dragged_box.unwrap_or_else(|| {
        if task.list_id == *dest {
            position_to_px(task.position, container)
        } else {
            Rect::point(container.left, container.top)
        }
    });

    let position = resolve_free_position(&FreePlacement {
        element,
        delta,
        container,
    })
    .ok_or_else(|| DragSkip::UnmeasuredContainer(dest.clone()))?;

    let source = &task.list_id;
    if source == dest && same_position(task.position, position) {
        return Err(DragSkip::UnchangedPosition);
    }

    let mut source_seq = sequence(board, source)?;
    let old_index = index_in(&source_seq, &task.id)?;
    let mut next = board.clone();

    if source == dest {
        next.put_order(dest.clone(), source_seq);
    } else {
        source_seq.remove(old_index);
        let mut dest_seq = sequence(board, dest)?;
        dest_seq.push(task.id.clone());
        next.put_order(source.clone(), source_seq);
        next.put_order(dest.clone(), dest_seq);
    }

    let moved = Task {
        list_id: dest.clone(),
        position,
        ..Task::clone(task)
    };
    next.put_task(Arc::new(moved));

    tracing::debug!(
        task = %task.id,
        from = %source,
        to = %dest,
        x = position.x,
        y = position.y,
        "task placed in free-position list"
    );
    Ok(next)
}

/// Drop into an ordered list: array-move within a list, splice across lists.
fn place_in_order(
    board: &Board,
    task: &Arc<Task>,
    dest: &ListId,
    target: &DropTarget,
) -> Result<Board, DragSkip> {
    let source = &task.list_id;
    let mut source_seq = sequence(board, source)?;
    let old_index = index_in(&source_seq, &task.id)?;

    // The target index is read from the sequence as it was at drop time.
    let new_index = match target {
        DropTarget::List(_) if source == dest => source_seq.len() - 1,
        DropTarget::List(_) => sequence(board, dest)?.len(),
        DropTarget::Task(over) => {
            let dest_seq = board
                .order_of(dest)
                .ok_or_else(|| DragSkip::UnknownList(dest.clone()))?;
            index_in(dest_seq, over)?
        }
    };

    if source == dest && new_index == old_index {
        return Err(DragSkip::UnchangedIndex);
    }

    let mut next = board.clone();
    source_seq.remove(old_index);

    if source == dest {
        let at = new_index.min(source_seq.len());
        source_seq.insert(at, task.id.clone());
        next.put_order(dest.clone(), source_seq);
    } else {
        let mut dest_seq = sequence(board, dest)?;
        let at = new_index.min(dest_seq.len());
        dest_seq.insert(at, task.id.clone());
        next.put_order(source.clone(), source_seq);
        next.put_order(dest.clone(), dest_seq);

        let moved = Task {
            list_id: dest.clone(),
            ..Task::clone(task)
        };
        next.put_task(Arc::new(moved));
    }

    tracing::debug!(
        task = %task.id,
        from = %source,
        to = %dest,
        index = new_index,
        "task placed in ordered list"
    );
    Ok(next)
}

/// An owned copy of a list's order sequence.
fn sequence(board: &Board, list: &ListId) -> Result<Vec<TaskId>, DragSkip> {
    board
        .order_of(list)
        .map(|seq| seq.as_ref().clone())
        .ok_or_else(|| DragSkip::UnknownList(list.clone()))
}

fn index_in(sequence: &[TaskId], task: &TaskId) -> Result<usize, DragSkip> {
    sequence
        .iter()
        .position(|id| id == task)
        .ok_or_else(|| DragSkip::NotInOrder(task.clone()))
}

#[allow(clippy::float_cmp)]
fn same_position(a: Position, b: Position) -> bool {
    a.x == b.x && a.y == b.y
}
