//! Stateless filter/sort/limit building blocks shared by the listing
//! operations of both stores. Everything here works on borrowed slices and
//! returns fresh vectors; nothing mutates store state.

use crate::error::{Error, Result};
use crate::models::{Group, Task};

/// Ordering modes for the group listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSort {
    /// No sort parameter given: insertion order.
    Unsorted,
    /// Ascending by group name.
    Name,
    /// Top-level groups first (ascending id), then the rest (ascending id).
    ParentsFirst,
    /// Each group in insertion order, immediately followed by its children.
    ParentWithChilds,
}

impl GroupSort {
    /// Parses the `sort` query parameter. Absent or empty means unsorted;
    /// anything outside the known modes is a caller error.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw.unwrap_or("") {
            "" => Ok(GroupSort::Unsorted),
            "name" => Ok(GroupSort::Name),
            "parents_first" => Ok(GroupSort::ParentsFirst),
            "parent_with_childs" => Ok(GroupSort::ParentWithChilds),
            _ => Err(Error::BadRequest("sort")),
        }
    }
}

/// Three-way completion filter for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Completed,
    Working,
}

impl TaskFilter {
    /// Parses the `type` query parameter. There is no default: the filter is
    /// mandatory wherever it appears.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some("all") => Ok(TaskFilter::All),
            Some("completed") => Ok(TaskFilter::Completed),
            Some("working") => Ok(TaskFilter::Working),
            _ => Err(Error::BadRequest("type")),
        }
    }

    /// Whether a task passes this filter.
    pub fn keeps(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Working => !task.completed,
        }
    }
}

/// Ordering modes for the task listing. Mandatory, like the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    /// Ascending by task text.
    Name,
    /// Ascending by group id.
    Group,
}

impl TaskSort {
    /// Parses the `sort` query parameter for task listings.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some("name") => Ok(TaskSort::Name),
            Some("group") => Ok(TaskSort::Group),
            _ => Err(Error::BadRequest("sort")),
        }
    }
}

/// Parses the `limit` query parameter. `None` means unlimited; so do zero,
/// negative, and unparsable values.
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let n: i64 = raw?.parse().ok()?;
    usize::try_from(n).ok().filter(|&n| n > 0)
}

/// Truncates `items` to the first `limit` entries. A limit beyond the
/// available length is clamped, never an error.
pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(n) = limit {
        items.truncate(n);
    }
    items
}

/// Arranges a snapshot of the group collection according to `sort`.
pub fn arrange_groups(groups: &[Group], sort: GroupSort) -> Vec<Group> {
    match sort {
        GroupSort::Unsorted => groups.to_vec(),
        GroupSort::Name => {
            let mut out = groups.to_vec();
            out.sort_by(|a, b| a.name.cmp(&b.name));
            out
        }
        GroupSort::ParentsFirst => {
            let mut parents: Vec<Group> = Vec::new();
            let mut children: Vec<Group> = Vec::new();
            for g in groups {
                if g.is_top_level() {
                    parents.push(g.clone());
                } else {
                    children.push(g.clone());
                }
            }
            parents.sort_by_key(|g| g.id);
            children.sort_by_key(|g| g.id);
            parents.extend(children);
            parents
        }
        GroupSort::ParentWithChilds => {
            // Children are emitted once per matching parent, so shared
            // structure repeats them. Cycles are the caller's problem.
            let mut out = Vec::with_capacity(groups.len());
            for parent in groups {
                out.push(parent.clone());
                for child in groups {
                    if child.parent == parent.id {
                        out.push(child.clone());
                    }
                }
            }
            out
        }
    }
}

/// Selects the tasks passing `filter`, preserving insertion order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.keeps(t)).cloned().collect()
}

/// Orders an already-filtered task list in place.
pub fn sort_tasks(tasks: &mut [Task], sort: TaskSort) {
    match sort {
        TaskSort::Name => tasks.sort_by(|a, b| a.task.cmp(&b.task)),
        TaskSort::Group => tasks.sort_by_key(|t| t.group),
    }
}
