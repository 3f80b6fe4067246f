//! Integration tests for drag resolution on ordered and free-position lists.
//!
//! Exercises `resolve_drag` through the public API only: membership
//! transfer, reordering, free-position clamping, and the no-op laws.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::missing_const_for_fn
)]

use std::sync::Arc;

use taskboard::engine::{DragSkip, resolve_drag, try_resolve_drag};
use taskboard_model::{Board, DragEvent, ListId, Rect, Task, TaskId, TaskList};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Order sequence of `list` as plain strings.
fn order(board: &Board, list: &str) -> Vec<String> {
    board
        .order_of(&ListId::from(list))
        .expect("list should exist")
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn task<'a>(board: &'a Board, id: &str) -> &'a Arc<Task> {
    board.task(&TaskId::from(id)).expect("task should exist")
}

/// `free` (free-position, unmeasured) and `done` holding `[t1, t2]`.
fn free_and_done() -> Board {
    Board::builder()
        .free_list(TaskList::new("free", "Canvas", "#ff6b6b"))
        .list(TaskList::new("done", "Done", "#45b7d1"))
        .task(Task::new("t1", "Submit report", "done"))
        .task(Task::new("t2", "Update resume", "done"))
        .build()
        .expect("valid board")
}

/// Three ordered lists: `A = [x, y]`, `B = [z]` and `L = [a, b, c]`.
fn ordered_lists() -> Board {
    Board::builder()
        .list(TaskList::new("A", "Backlog", "#111"))
        .list(TaskList::new("B", "Doing", "#222"))
        .list(TaskList::new("L", "Later", "#333"))
        .task(Task::new("x", "X", "A"))
        .task(Task::new("y", "Y", "A"))
        .task(Task::new("z", "Z", "B"))
        .task(Task::new("a", "a", "L"))
        .task(Task::new("b", "b", "L"))
        .task(Task::new("c", "c", "L"))
        .build()
        .expect("valid board")
}

// ===========================================================================
// End-to-end scenario
// ===========================================================================

#[test]
fn drag_from_done_onto_free_list() {
    let board = free_and_done();
    let event = DragEvent::new("t2")
        .with_delta(10.0, 10.0)
        .onto_list("free")
        .with_dragged_box(Rect::new(100.0, 50.0, 40.0, 20.0))
        .with_container_box(Rect::new(0.0, 0.0, 200.0, 200.0));

    let next = resolve_drag(&board, &event);

    let t2 = task(&next, "t2");
    assert_eq!(t2.list_id, ListId::from("free"));
    assert_close(t2.position.x, 55.0);
    assert_close(t2.position.y, 30.0);
    assert_eq!(order(&next, "done"), vec!["t1"]);
    assert!(order(&next, "free").contains(&"t2".to_string()));
    next.check_invariants().unwrap();
}

#[test]
fn free_position_clamps_to_footprint() {
    // 40px element in a 200px container may not be anchored right of 80%.
    let board = free_and_done();
    let event = DragEvent::new("t1")
        .with_delta(150.0, 0.0)
        .onto_list("free")
        .with_dragged_box(Rect::new(40.0, 0.0, 40.0, 20.0))
        .with_container_box(Rect::new(0.0, 0.0, 200.0, 200.0));

    let next = resolve_drag(&board, &event);
    let t1 = task(&next, "t1");
    assert_close(t1.position.x, 80.0);
    assert!(t1.position.x <= 80.0);
}

#[test]
fn repositioning_inside_free_list_keeps_rank() {
    let board = resolve_drag(
        &free_and_done(),
        &DragEvent::new("t1")
            .with_delta(10.0, 10.0)
            .onto_list("free")
            .with_dragged_box(Rect::new(0.0, 0.0, 20.0, 20.0))
            .with_container_box(Rect::new(0.0, 0.0, 200.0, 200.0)),
    );
    let board = resolve_drag(
        &board,
        &DragEvent::new("t2")
            .with_delta(20.0, 0.0)
            .onto_list("free")
            .with_dragged_box(Rect::new(0.0, 0.0, 20.0, 20.0))
            .with_container_box(Rect::new(0.0, 0.0, 200.0, 200.0)),
    );
    let next = resolve_drag(
        &board,
        &DragEvent::new("t1")
            .with_delta(100.0, 100.0)
            .onto_task("t1")
            .with_dragged_box(Rect::new(10.0, 10.0, 20.0, 20.0))
            .with_container_box(Rect::new(0.0, 0.0, 200.0, 200.0)),
    );

    assert_eq!(order(&next, "free"), vec!["t1", "t2"]);
    assert_close(task(&next, "t1").position.x, 55.0);
    assert_close(task(&next, "t1").position.y, 55.0);
}

// ===========================================================================
// Ordered lists
// ===========================================================================

#[test]
fn membership_transfer_appends() {
    let board = ordered_lists();
    let next = resolve_drag(
        &board,
        &DragEvent::new("x").with_delta(300.0, 0.0).onto_list("B"),
    );

    assert_eq!(order(&next, "A"), vec!["y"]);
    assert_eq!(order(&next, "B"), vec!["z", "x"]);
    assert_eq!(task(&next, "x").list_id, ListId::from("B"));
    next.check_invariants().unwrap();
}

#[test]
fn membership_transfer_onto_task_takes_its_rank() {
    let board = ordered_lists();
    let next = resolve_drag(
        &board,
        &DragEvent::new("z").with_delta(600.0, 0.0).onto_task("b"),
    );

    assert_eq!(order(&next, "L"), vec!["a", "z", "b", "c"]);
    assert!(order(&next, "B").is_empty());
    assert_eq!(task(&next, "z").list_id, ListId::from("L"));
}

#[test]
fn reorder_first_onto_last() {
    let next = resolve_drag(
        &ordered_lists(),
        &DragEvent::new("a").with_delta(0.0, 90.0).onto_task("c"),
    );
    assert_eq!(order(&next, "L"), vec!["b", "c", "a"]);
}

#[test]
fn reorder_last_onto_first() {
    let next = resolve_drag(
        &ordered_lists(),
        &DragEvent::new("c").with_delta(0.0, -90.0).onto_task("a"),
    );
    assert_eq!(order(&next, "L"), vec!["c", "a", "b"]);
}

#[test]
fn transfer_into_empty_list() {
    let board = resolve_drag(
        &ordered_lists(),
        &DragEvent::new("z").with_delta(-300.0, 0.0).onto_list("A"),
    );
    assert!(order(&board, "B").is_empty());

    let next = resolve_drag(
        &board,
        &DragEvent::new("a").with_delta(-300.0, 0.0).onto_list("B"),
    );
    assert_eq!(order(&next, "B"), vec!["a"]);
    next.check_invariants().unwrap();
}

// ===========================================================================
// No-op laws
// ===========================================================================

#[test]
fn zero_delta_is_identity() {
    let board = ordered_lists();
    let event = DragEvent::new("a").with_delta(0.0, 0.0).onto_task("c");
    assert_eq!(resolve_drag(&board, &event), board);
}

#[test]
fn zero_delta_is_fixed_point_after_moves() {
    let moved = resolve_drag(
        &ordered_lists(),
        &DragEvent::new("x").with_delta(300.0, 0.0).onto_list("B"),
    );
    let event = DragEvent::new("x").with_delta(0.0, 0.0).onto_list("A");
    let again = resolve_drag(&moved, &event);
    assert_eq!(again, moved);
    assert_eq!(resolve_drag(&again, &event), moved);
}

#[test]
fn self_drop_is_noop() {
    let board = ordered_lists();
    let event = DragEvent::new("b").with_delta(0.0, 4.0).onto_task("b");
    assert_eq!(try_resolve_drag(&board, &event), Err(DragSkip::SelfDrop));
    assert_eq!(resolve_drag(&board, &event), board);
}

#[test]
fn cancelled_drag_is_noop() {
    let board = ordered_lists();
    let event = DragEvent::new("a").with_delta(40.0, 40.0);
    assert_eq!(try_resolve_drag(&board, &event), Err(DragSkip::NoDropTarget));
}

#[test]
fn unmeasured_free_container_is_noop() {
    let board = free_and_done();
    let event = DragEvent::new("t1")
        .with_delta(10.0, 10.0)
        .onto_list("free")
        .with_dragged_box(Rect::new(0.0, 0.0, 20.0, 20.0));
    assert_eq!(
        try_resolve_drag(&board, &event),
        Err(DragSkip::UnmeasuredContainer(ListId::from("free")))
    );
    assert_eq!(resolve_drag(&board, &event), board);
}

// ===========================================================================
// Structural sharing
// ===========================================================================

#[test]
fn untouched_entities_keep_identity() {
    let board = ordered_lists();
    let next = resolve_drag(
        &board,
        &DragEvent::new("x").with_delta(300.0, 0.0).onto_list("B"),
    );

    // The moved task and both affected sequences are fresh.
    assert!(!Arc::ptr_eq(
        board.task(&TaskId::from("x")).unwrap(),
        next.task(&TaskId::from("x")).unwrap()
    ));
    for list in ["A", "B"] {
        let id = ListId::from(list);
        assert!(!Arc::ptr_eq(board.order_of(&id).unwrap(), next.order_of(&id).unwrap()));
    }

    // Everything else is shared.
    let l = ListId::from("L");
    assert!(Arc::ptr_eq(board.order_of(&l).unwrap(), next.order_of(&l).unwrap()));
    for id in ["y", "z", "a", "b", "c"] {
        let id = TaskId::from(id);
        assert!(Arc::ptr_eq(board.task(&id).unwrap(), next.task(&id).unwrap()));
    }
    for (id, list) in board.lists() {
        assert!(Arc::ptr_eq(list, next.list(id).unwrap()));
    }
}
