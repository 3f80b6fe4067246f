//! The board: lists, tasks and the per-list order of task ids.
//!
//! Entities are held behind [`Arc`] so successive board values share
//! everything a drag did not touch. Hosts can compare entities with
//! [`Arc::ptr_eq`] to skip re-rendering unchanged lists and cards.
//!
//! ## Invariants
//!
//! 1. Every id in `order[L]` maps to a task whose `list_id == L`.
//! 2. Every task id appears in exactly one order sequence, exactly once.
//! 3. Order sequences contain no duplicates.
//! 4. Every list has an order entry and every order entry names a list.
//! 5. The free-position list, when set, is one of the board's lists.
//!
//! [`Board::check_invariants`] verifies all of them. Values built through
//! [`BoardBuilder`] are checked on construction; deserialized values are
//! not, so hosts loading foreign data should call it themselves.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Rect;
use crate::list::{ListId, TaskList};
use crate::task::{Task, TaskId};

/// Ways a board can violate its structural invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Two lists share an identifier.
    #[error("duplicate list: {0}")]
    DuplicateList(ListId),
    /// Two tasks share an identifier.
    #[error("duplicate task: {0}")]
    DuplicateTask(TaskId),
    /// A task refers to a list that does not exist.
    #[error("task {task} refers to unknown list {list}")]
    UnknownList {
        /// The offending task.
        task: TaskId,
        /// The list it names.
        list: ListId,
    },
    /// A list has no order sequence.
    #[error("list {0} has no order entry")]
    MissingOrder(ListId),
    /// An order sequence exists for a list that does not.
    #[error("order entry for unknown list {0}")]
    OrphanOrder(ListId),
    /// An order sequence names a task that does not exist.
    #[error("list {list} orders unknown task {task}")]
    UnknownTaskInOrder {
        /// The list whose sequence is broken.
        list: ListId,
        /// The missing task.
        task: TaskId,
    },
    /// A task is ordered in one list but claims another.
    #[error("task {task} is ordered in {ordered_in} but belongs to {list_id}")]
    ListMismatch {
        /// The offending task.
        task: TaskId,
        /// The list whose sequence contains it.
        ordered_in: ListId,
        /// The list the task itself names.
        list_id: ListId,
    },
    /// A task id appears more than once across all sequences.
    #[error("task {task} appears more than once (again in {list})")]
    DuplicateInOrder {
        /// The repeated task.
        task: TaskId,
        /// The list where the repeat was found.
        list: ListId,
    },
    /// A task appears in no order sequence.
    #[error("task {0} is not ordered in any list")]
    Unordered(TaskId),
    /// The designated free-position list does not exist.
    #[error("free-position list {0} does not exist")]
    UnknownFreeList(ListId),
}

/// Canonical drag-and-drop state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    lists: BTreeMap<ListId, Arc<TaskList>>,
    tasks: BTreeMap<TaskId, Arc<Task>>,
    order: BTreeMap<ListId, Arc<Vec<TaskId>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    free_list: Option<ListId>,
}

impl Board {
    /// Starts building a board.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// All lists, keyed by id.
    #[must_use]
    pub const fn lists(&self) -> &BTreeMap<ListId, Arc<TaskList>> {
        &self.lists
    }

    /// All tasks, keyed by id.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Arc<Task>> {
        &self.tasks
    }

    /// All order sequences, keyed by list id.
    #[must_use]
    pub const fn order(&self) -> &BTreeMap<ListId, Arc<Vec<TaskId>>> {
        &self.order
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Arc<Task>> {
        self.tasks.get(id)
    }

    /// Looks up a list.
    #[must_use]
    pub fn list(&self, id: &ListId) -> Option<&Arc<TaskList>> {
        self.lists.get(id)
    }

    /// The order sequence of a list.
    #[must_use]
    pub fn order_of(&self, id: &ListId) -> Option<&Arc<Vec<TaskId>>> {
        self.order.get(id)
    }

    /// Rank of `task` within `list`'s sequence.
    #[must_use]
    pub fn index_of(&self, list: &ListId, task: &TaskId) -> Option<usize> {
        self.order.get(list)?.iter().position(|id| id == task)
    }

    /// The tasks of a list in display order.
    ///
    /// Returns an empty vec for unknown lists.
    #[must_use]
    pub fn tasks_in(&self, list: &ListId) -> Vec<&Arc<Task>> {
        self.order
            .get(list)
            .map(|ids| ids.iter().filter_map(|id| self.tasks.get(id)).collect())
            .unwrap_or_default()
    }

    /// The free-position list, if the board has one.
    #[must_use]
    pub const fn free_list(&self) -> Option<&ListId> {
        self.free_list.as_ref()
    }

    /// Returns `true` if `list` is the free-position list.
    #[must_use]
    pub fn is_free_list(&self, list: &ListId) -> bool {
        self.free_list.as_ref() == Some(list)
    }

    /// Replaces a task entity, keyed by its id.
    ///
    /// Does not validate; callers producing a new board from several
    /// replacements should finish with [`check_invariants`](Self::check_invariants)
    /// in debug builds or tests.
    pub fn put_task(&mut self, task: Arc<Task>) {
        self.tasks.insert(task.id.clone(), task);
    }

    /// Replaces the order sequence of `list`. Does not validate.
    pub fn put_order(&mut self, list: ListId, sequence: Vec<TaskId>) {
        self.order.insert(list, Arc::new(sequence));
    }

    /// Records freshly measured container geometry for a list.
    ///
    /// Returns `false` if the list does not exist. Measurements that did not
    /// change leave the list entity shared.
    pub fn set_list_bounds(&mut self, id: &ListId, bounds: Rect) -> bool {
        let Some(list) = self.lists.get_mut(id) else {
            return false;
        };
        if list.bounds != Some(bounds) {
            Arc::make_mut(list).bounds = Some(bounds);
        }
        true
    }

    /// Verifies every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardError`] found.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        if let Some(free) = &self.free_list {
            if !self.lists.contains_key(free) {
                return Err(BoardError::UnknownFreeList(free.clone()));
            }
        }
        if let Some(id) = self.lists.keys().find(|id| !self.order.contains_key(*id)) {
            return Err(BoardError::MissingOrder(id.clone()));
        }

        let mut seen: HashMap<&TaskId, &ListId> = HashMap::with_capacity(self.tasks.len());
        for (list_id, sequence) in &self.order {
            if !self.lists.contains_key(list_id) {
                return Err(BoardError::OrphanOrder(list_id.clone()));
            }
            for task_id in sequence.iter() {
                let Some(task) = self.tasks.get(task_id) else {
                    return Err(BoardError::UnknownTaskInOrder {
                        list: list_id.clone(),
                        task: task_id.clone(),
                    });
                };
                if &task.list_id != list_id {
                    return Err(BoardError::ListMismatch {
                        task: task_id.clone(),
                        ordered_in: list_id.clone(),
                        list_id: task.list_id.clone(),
                    });
                }
                if seen.insert(task_id, list_id).is_some() {
                    return Err(BoardError::DuplicateInOrder {
                        task: task_id.clone(),
                        list: list_id.clone(),
                    });
                }
            }
        }

        match self.tasks.keys().find(|id| !seen.contains_key(id)) {
            Some(id) => Err(BoardError::Unordered(id.clone())),
            None => Ok(()),
        }
    }
}

/// Assembles a [`Board`] from lists and tasks.
///
/// Tasks are appended to their list's order in the sequence they are
/// added.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    lists: Vec<TaskList>,
    tasks: Vec<Task>,
    free_list: Option<ListId>,
}

impl BoardBuilder {
    /// Adds an ordered list.
    #[must_use]
    pub fn list(mut self, list: TaskList) -> Self {
        self.lists.push(list);
        self
    }

    /// Adds a list and designates it as the free-position list.
    #[must_use]
    pub fn free_list(mut self, list: TaskList) -> Self {
        self.free_list = Some(list.id.clone());
        self.lists.push(list);
        self
    }

    /// Designates an already added (or yet to be added) list as the
    /// free-position list.
    #[must_use]
    pub fn free_list_id(mut self, id: impl Into<ListId>) -> Self {
        self.free_list = Some(id.into());
        self
    }

    /// Adds a task to the end of its list.
    #[must_use]
    pub fn task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Builds and validates the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateList`], [`BoardError::DuplicateTask`]
    /// or [`BoardError::UnknownList`] for malformed input, or any error
    /// from [`Board::check_invariants`].
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board {
            free_list: self.free_list,
            ..Board::default()
        };

        for list in self.lists {
            if board.lists.contains_key(&list.id) {
                return Err(BoardError::DuplicateList(list.id));
            }
            board.order.insert(list.id.clone(), Arc::new(Vec::new()));
            board.lists.insert(list.id.clone(), Arc::new(list));
        }

        let mut sequences: HashMap<ListId, Vec<TaskId>> = HashMap::new();
        for task in self.tasks {
            if board.tasks.contains_key(&task.id) {
                return Err(BoardError::DuplicateTask(task.id));
            }
            if !board.lists.contains_key(&task.list_id) {
                return Err(BoardError::UnknownList {
                    task: task.id,
                    list: task.list_id,
                });
            }
            sequences
                .entry(task.list_id.clone())
                .or_default()
                .push(task.id.clone());
            board.tasks.insert(task.id.clone(), Arc::new(task));
        }
        for (list, sequence) in sequences {
            board.order.insert(list, Arc::new(sequence));
        }

        board.check_invariants()?;
        Ok(board)
    }
}
