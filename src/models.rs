use serde::{Deserialize, Serialize};

/// A named container for tasks, forming a shallow (one-level) hierarchy.
///
/// Field names are fixed by the wire format and must not change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Group {
    /// Display name of the group. Required, never empty once stored.
    #[serde(rename = "group_name", default)]
    pub name: String,
    /// Free-form description.
    #[serde(rename = "group_description", default)]
    pub description: String,
    /// Unique identifier. `0` in a create request means "assign one".
    #[serde(rename = "group_id", default)]
    pub id: i64,
    /// Id of the parent group, or `0` for a top-level group. The referenced
    /// group is not required to exist.
    #[serde(rename = "parent_id", default)]
    pub parent: i64,
}

impl Group {
    /// True when the group sits at the top of the hierarchy.
    pub fn is_top_level(&self) -> bool {
        self.parent == 0
    }
}

/// A unit of work attached to exactly one group.
///
/// The id is content-addressed: derived from the task text and group id, so
/// identical text in the identical group always maps to the same task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Derived identifier, never caller-supplied.
    #[serde(rename = "task_id", default)]
    pub id: String,
    /// Id of the owning group.
    #[serde(rename = "group_id")]
    pub group: i64,
    /// The task text. Required, never empty once stored.
    pub task: String,
    /// Completion state, false at creation.
    #[serde(default)]
    pub completed: bool,
    /// RFC 3339 timestamp set once at creation.
    #[serde(rename = "Created At", default)]
    pub created_at: String,
    /// RFC 3339 timestamp of completion; empty while the task is open.
    #[serde(rename = "Completed At", default)]
    pub completed_at: String,
}

/// Caller-supplied fields for creating or updating a task. Everything else
/// (id, status, timestamps) is managed by the store.
#[derive(Deserialize, Debug, Clone)]
pub struct TaskDraft {
    #[serde(rename = "group_id", default)]
    pub group: i64,
    #[serde(default)]
    pub task: String,
}
