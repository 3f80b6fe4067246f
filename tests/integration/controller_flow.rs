//! Integration tests for the host-side drag lifecycle.
//!
//! Drives `BoardController` through drag start / cancel / end on the
//! sample board the demo host seeds, the way a UI toolkit would.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use taskboard::config::BoardConfig;
use taskboard::engine::{BoardController, DragSkip};
use taskboard::seed;
use taskboard_model::{Delta, DropTarget, ListId, Rect, TaskId};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn sample_controller() -> BoardController {
    let board = seed::sample_board(&BoardConfig::default()).expect("sample board builds");
    BoardController::new(board)
}

fn order(controller: &BoardController, list: &str) -> Vec<String> {
    controller
        .board()
        .order_of(&ListId::from(list))
        .expect("list should exist")
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn onto_list(id: &str) -> Option<DropTarget> {
    Some(DropTarget::List(ListId::from(id)))
}

fn onto_task(id: &str) -> Option<DropTarget> {
    Some(DropTarget::Task(TaskId::from(id)))
}

// ===========================================================================
// Lifecycle
// ===========================================================================

#[test]
fn active_task_is_exposed_while_dragging() {
    let mut c = sample_controller();
    let active = c
        .on_drag_start(&TaskId::from("task-2"), None)
        .expect("task-2 exists")
        .clone();
    assert_eq!(active.title, "Review code");
    assert!(c.is_dragging());
    assert!(Arc::ptr_eq(
        c.active_task().unwrap(),
        c.board().task(&TaskId::from("task-2")).unwrap()
    ));

    c.on_drag_end(Some(Delta::new(300.0, 0.0)), onto_list("list-3"), None);
    assert!(!c.is_dragging());
    assert!(c.active_task().is_none());
}

#[test]
fn transfer_between_ordered_lists() {
    let mut c = sample_controller();
    c.on_drag_start(&TaskId::from("task-2"), None);
    c.on_drag_end(Some(Delta::new(300.0, 0.0)), onto_list("list-3"), None);

    assert!(order(&c, "list-2").is_empty());
    assert_eq!(order(&c, "list-3"), vec!["task-4", "task-5", "task-2"]);
    assert_eq!(
        c.board().task(&TaskId::from("task-2")).unwrap().list_id,
        ListId::from("list-3")
    );
    c.board().check_invariants().unwrap();
}

#[test]
fn reorder_inside_done_list() {
    let mut c = sample_controller();
    c.on_drag_start(&TaskId::from("task-5"), None);
    c.on_drag_end(Some(Delta::new(0.0, -40.0)), onto_task("task-4"), None);
    assert_eq!(order(&c, "list-3"), vec!["task-5", "task-4"]);
}

#[test]
fn drop_onto_free_list_uses_measured_bounds() {
    // list-1 spans x 20..270, y 0..300 in the sample layout.
    let mut c = sample_controller();
    c.on_drag_start(&TaskId::from("task-4"), Some(Rect::new(640.0, 60.0, 160.0, 40.0)));
    c.on_drag_end(Some(Delta::new(-560.0, 10.0)), onto_list("list-1"), None);

    let moved = c.board().task(&TaskId::from("task-4")).unwrap();
    assert_eq!(moved.list_id, ListId::from("list-1"));
    assert!((moved.position.x - 24.0).abs() < 1e-9);
    assert!((moved.position.y - 70.0 / 3.0).abs() < 1e-9);
    assert!(moved.checked);
    assert_eq!(order(&c, "list-1"), vec!["task-1", "task-3", "task-4"]);
    assert_eq!(order(&c, "list-3"), vec!["task-5"]);
}

#[test]
fn remeasured_container_changes_placement() {
    let mut c = sample_controller();
    assert!(c.measure_list(&ListId::from("list-1"), Rect::new(0.0, 0.0, 500.0, 500.0)));
    assert!(!c.measure_list(&ListId::from("list-9"), Rect::new(0.0, 0.0, 1.0, 1.0)));

    c.on_drag_start(&TaskId::from("task-2"), Some(Rect::new(300.0, 100.0, 50.0, 50.0)));
    c.on_drag_end(Some(Delta::new(-200.0, 0.0)), onto_list("list-1"), None);

    let moved = c.board().task(&TaskId::from("task-2")).unwrap();
    assert!((moved.position.x - 20.0).abs() < 1e-9);
    assert!((moved.position.y - 20.0).abs() < 1e-9);
}

// ===========================================================================
// No-op gestures
// ===========================================================================

#[test]
fn cancel_leaves_board_untouched() {
    let mut c = sample_controller();
    let before = c.board().clone();
    c.on_drag_start(&TaskId::from("task-1"), None);
    c.on_drag_cancel();
    c.on_drag_end(Some(Delta::new(300.0, 0.0)), onto_list("list-2"), None);
    assert_eq!(c.board(), &before);
}

#[test]
fn release_outside_any_target_records_reason() {
    let mut c = sample_controller();
    let before = c.board().clone();
    c.on_drag_start(&TaskId::from("task-3"), None);
    c.on_drag_end(Some(Delta::new(900.0, 900.0)), None, None);
    assert_eq!(c.last_skip(), Some(&DragSkip::NoDropTarget));
    assert_eq!(c.board(), &before);
}

#[test]
fn successful_drag_clears_previous_reason() {
    let mut c = sample_controller();
    c.on_drag_start(&TaskId::from("task-3"), None);
    c.on_drag_end(Some(Delta::new(0.0, 0.0)), onto_list("list-2"), None);
    assert_eq!(c.last_skip(), Some(&DragSkip::NoMovement));

    c.on_drag_start(&TaskId::from("task-3"), None);
    c.on_drag_end(Some(Delta::new(300.0, 0.0)), onto_list("list-2"), None);
    assert!(c.last_skip().is_none());
    assert_eq!(order(&c, "list-2"), vec!["task-2", "task-3"]);
}

#[test]
fn noop_keeps_every_entity_shared() {
    let mut c = sample_controller();
    let before = c.board().clone();
    c.on_drag_start(&TaskId::from("task-4"), None);
    c.on_drag_end(Some(Delta::new(0.0, 5.0)), onto_task("task-4"), None);

    assert_eq!(c.last_skip(), Some(&DragSkip::SelfDrop));
    for (id, task) in before.tasks() {
        assert!(Arc::ptr_eq(task, c.board().task(id).unwrap()));
    }
    for (id, seq) in before.order() {
        assert!(Arc::ptr_eq(seq, c.board().order_of(id).unwrap()));
    }
}

#[test]
fn into_board_returns_latest_state() {
    let mut c = sample_controller();
    c.on_drag_start(&TaskId::from("task-1"), None);
    c.on_drag_end(Some(Delta::new(600.0, 0.0)), onto_task("task-5"), None);
    let board = c.into_board();
    assert_eq!(board.index_of(&ListId::from("list-3"), &TaskId::from("task-1")), Some(1));
}
