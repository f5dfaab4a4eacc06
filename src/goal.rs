//! Goal and mission tracking for questlog
//!
//! The tracker state is a single [`Document`]: one optional free-text goal, a
//! map of named tasks ("missions"), and an append-only history of
//! completions. Completed tasks accumulate weighted points (hardcore = 5,
//! normal = 1) toward a fixed target of 50; progress is always recomputed
//! from `tasks`, never stored.
//!
//! [`Engine`] wraps a [`Store`] and performs each operation as one
//! load-mutate-save unit. A failed save is not an error: the in-memory change
//! is kept and the failure is carried on the returned [`Mutation`] as a
//! warning for the caller to surface.

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Error;
use crate::storage::Store;

/// Accumulated points at which the goal counts as reached
pub const GOAL_TARGET: u32 = 50;

/// Points for completing a hardcore task
pub const HARDCORE_POINTS: u32 = 5;

/// Points for completing a normal task
pub const NORMAL_POINTS: u32 = 1;

/// Wall-clock format for completion timestamps
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Points awarded for completing a task of the given weight
pub fn task_points(hardcore: bool) -> u32 {
    if hardcore {
        HARDCORE_POINTS
    } else {
        NORMAL_POINTS
    }
}

/// The persisted aggregate: goal, tasks, and completion history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Currently active goal, `None` when unset
    #[serde(default)]
    pub goal: Option<String>,

    /// Tasks by unique name
    #[serde(default)]
    pub tasks: BTreeMap<String, TaskRecord>,

    /// Chronological completion history, append-only
    #[serde(default)]
    pub completed_tasks: Vec<CompletionRecord>,
}

/// A named unit of work, normal or hardcore, completable once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub completed: bool,
    /// Fixed at creation time; determines the scoring weight
    pub hardcore: bool,
}

/// One entry in the completion history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Task name at the time of completion; no live link to `tasks`
    pub name: String,
    /// Wall-clock completion time, `YYYY-MM-DD HH:MM:SS`
    pub time: String,
    /// Weight snapshotted at completion time, so history stays accurate even
    /// if the task name is later re-added with a different weight. Absent in
    /// older documents; treated as normal.
    #[serde(default)]
    pub hardcore: bool,
}

impl Document {
    /// Insert or overwrite a task. Re-adding an existing name discards its
    /// prior record, completion state included (last-write-wins).
    pub fn add_task(&mut self, name: &str, hardcore: bool) {
        self.tasks.insert(
            name.to_string(),
            TaskRecord {
                completed: false,
                hardcore,
            },
        );
    }

    /// Accumulated weighted points over completed tasks
    pub fn score(&self) -> u32 {
        self.tasks
            .values()
            .filter(|task| task.completed)
            .map(|task| task_points(task.hardcore))
            .sum()
    }

    /// Progress toward the goal as a fraction in `[0, 1]`
    pub fn progress(&self) -> f64 {
        (f64::from(self.score()) / f64::from(GOAL_TARGET)).min(1.0)
    }

    /// Whether the accumulated score has reached the target
    pub fn goal_reached(&self) -> bool {
        self.progress() * 100.0 >= 100.0
    }

    /// Names of tasks not yet completed, in map order
    pub fn pending(&self) -> impl Iterator<Item = (&String, &TaskRecord)> {
        self.tasks.iter().filter(|(_, task)| !task.completed)
    }
}

/// Outcome of [`Engine::complete_task`]
///
/// Unknown and already-completed tasks are expected outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum CompleteOutcome {
    /// The task transitioned to completed
    Completed {
        hardcore: bool,
        /// True when this completion pushed the score to the target
        goal_reached: bool,
    },
    /// The task was already completed; nothing changed
    AlreadyCompleted,
    /// No task with that name exists; nothing changed
    NotFound,
}

/// Result of a mutating operation
///
/// `changed` tells the caller whether its rendered state is stale.
/// `save_error` is set when the store write failed; the in-memory effect in
/// `value` still happened but is not durable.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub changed: bool,
    pub save_error: Option<Error>,
}

impl<T> Mutation<T> {
    fn unchanged(value: T) -> Self {
        Self {
            value,
            changed: false,
            save_error: None,
        }
    }

    /// Warning text for a non-durable change, if any
    pub fn warning(&self) -> Option<String> {
        self.save_error
            .as_ref()
            .map(|err| format!("change not saved: {err}"))
    }
}

/// The goal engine: load-mutate-save operations over one [`Store`]
#[derive(Debug, Clone)]
pub struct Engine {
    store: Store,
}

impl Engine {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The backing store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Load the document for read-only display
    pub fn load(&self) -> Document {
        self.store.load()
    }

    /// Unconditionally overwrite the goal. An empty string is allowed.
    pub fn set_goal(&self, text: &str) -> Mutation<()> {
        let mut doc = self.store.load();
        doc.goal = Some(text.to_string());
        debug!(goal = text, "goal set");
        Mutation {
            value: (),
            changed: true,
            save_error: self.persist(&doc),
        }
    }

    /// Insert or overwrite a task (last-write-wins, see
    /// [`Document::add_task`]).
    pub fn add_task(&self, name: &str, hardcore: bool) -> Mutation<()> {
        let mut doc = self.store.load();
        doc.add_task(name, hardcore);
        debug!(task = name, hardcore, "task added");
        Mutation {
            value: (),
            changed: true,
            save_error: self.persist(&doc),
        }
    }

    /// Mark a task completed, at most once, appending to the completion
    /// history and reporting whether this completion reached the goal.
    pub fn complete_task(&self, name: &str) -> Mutation<CompleteOutcome> {
        let mut doc = self.store.load();

        let task = match doc.tasks.get_mut(name) {
            None => return Mutation::unchanged(CompleteOutcome::NotFound),
            Some(task) => task,
        };
        if task.completed {
            return Mutation::unchanged(CompleteOutcome::AlreadyCompleted);
        }

        task.completed = true;
        let hardcore = task.hardcore;
        doc.completed_tasks.push(CompletionRecord {
            name: name.to_string(),
            time: Local::now().format(TIME_FORMAT).to_string(),
            hardcore,
        });

        let save_error = self.persist(&doc);
        let goal_reached = doc.goal_reached();
        debug!(task = name, hardcore, goal_reached, "task completed");

        Mutation {
            value: CompleteOutcome::Completed {
                hardcore,
                goal_reached,
            },
            changed: true,
            save_error,
        }
    }

    /// Replace the document wholesale with the default empty document
    pub fn reset(&self) -> Mutation<()> {
        debug!("resetting store");
        Mutation {
            value: (),
            changed: true,
            save_error: self.persist(&Document::default()),
        }
    }

    fn persist(&self, doc: &Document) -> Option<Error> {
        match self.store.save(doc) {
            Ok(()) => None,
            Err(err) => {
                warn!(path = %self.store.path().display(), %err, "save failed, in-memory change not durable");
                Some(err)
            }
        }
    }
}
