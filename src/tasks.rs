use chrono::Local;
use tracing::info;

use crate::error::{Error, Result};
use crate::groups::GroupStore;
use crate::ident;
use crate::models::{Task, TaskDraft};
use crate::query::{self, TaskFilter, TaskSort};

/// Result of a status toggle: either the task changed, or it was already in
/// the requested state and is returned as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Changed(Task),
    AlreadySet(Task),
}

/// Owns the task collection.
///
/// Task identity is content-addressed (see [`crate::ident`]); the store
/// enforces that no two tasks share a derived id and that every task points
/// at a group that existed when the task was created.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists tasks passing `filter`, ordered by `sort`, truncated to `limit`.
    pub fn list(&self, filter: TaskFilter, sort: TaskSort, limit: Option<usize>) -> Vec<Task> {
        let mut out = query::filter_tasks(&self.tasks, filter);
        query::sort_tasks(&mut out, sort);
        query::apply_limit(out, limit)
    }

    /// Tasks attached to `group_id`, passing `filter`, in insertion order.
    /// The group itself is not required to exist.
    pub fn by_group(&self, group_id: i64, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.group == group_id && filter.keeps(t))
            .cloned()
            .collect()
    }

    /// True when any task still points at the group with `id`. Backs the
    /// group-delete referential guard.
    pub fn references_group(&self, id: i64) -> bool {
        self.tasks.iter().any(|t| t.group == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Creates a task from a draft. The referenced group must exist, and the
    /// derived id must be new; both checks run before anything is stored.
    pub fn create(&mut self, draft: TaskDraft, groups: &GroupStore) -> Result<Task> {
        if draft.task.is_empty() {
            return Err(Error::Validation("task"));
        }
        if draft.group == 0 {
            return Err(Error::Validation("group_id"));
        }
        if !groups.contains(draft.group) {
            return Err(Error::NotFound(format!(
                "group {} does not exist",
                draft.group
            )));
        }
        let id = ident::derive(&draft.task, draft.group);
        if self.contains(&id) {
            return Err(Error::Conflict(format!("task {id} already exists")));
        }
        let task = Task {
            id,
            group: draft.group,
            task: draft.task,
            completed: false,
            created_at: Local::now().to_rfc3339(),
            completed_at: String::new(),
        };
        info!(id = %task.id, group = task.group, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Rewrites the text and group of the task addressed by `path_id`,
    /// re-deriving its id. Completion state and both timestamps survive.
    ///
    /// The new id must not collide with any stored task's id, the target
    /// included: an update that changes nothing is rejected as a duplicate,
    /// exactly like a redundant create.
    pub fn update(&mut self, path_id: &str, draft: TaskDraft) -> Result<Task> {
        if draft.task.is_empty() {
            return Err(Error::Validation("task"));
        }
        if draft.group == 0 {
            return Err(Error::Validation("group_id"));
        }
        let new_id = ident::derive(&draft.task, draft.group);
        if self.contains(&new_id) {
            return Err(Error::Conflict(format!("task {new_id} already exists")));
        }
        match self.tasks.iter_mut().find(|t| t.id == path_id) {
            Some(stored) => {
                stored.id = new_id;
                stored.task = draft.task;
                stored.group = draft.group;
                info!(id = %stored.id, "task updated");
                Ok(stored.clone())
            }
            None => Err(Error::NotFound(format!("task {path_id} does not exist"))),
        }
    }

    /// Moves the task to the requested completion state, stamping or
    /// clearing `completed_at` on an actual transition. Asking for the state
    /// the task is already in is reported, not treated as an error.
    pub fn set_status(&mut self, id: &str, finished: bool) -> Result<ToggleOutcome> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("task {id} does not exist")))?;
        if task.completed == finished {
            return Ok(ToggleOutcome::AlreadySet(task.clone()));
        }
        task.completed = finished;
        task.completed_at = if finished {
            Local::now().to_rfc3339()
        } else {
            String::new()
        };
        info!(id = %task.id, finished, "task status changed");
        Ok(ToggleOutcome::Changed(task.clone()))
    }
}
