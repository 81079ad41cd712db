use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::Group;
use crate::query::{self, GroupSort};
use crate::tasks::TaskStore;

/// Owns the group collection and answers hierarchy queries over it.
///
/// Groups live in insertion order; every query hands out copies.
#[derive(Debug, Default)]
pub struct GroupStore {
    groups: Vec<Group>,
}

impl From<Vec<Group>> for GroupStore {
    fn from(groups: Vec<Group>) -> Self {
        Self { groups }
    }
}

impl GroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists groups arranged by `sort` and truncated to `limit`.
    pub fn list(&self, sort: GroupSort, limit: Option<usize>) -> Vec<Group> {
        query::apply_limit(query::arrange_groups(&self.groups, sort), limit)
    }

    /// All groups without a parent, in insertion order.
    pub fn top_level(&self) -> Vec<Group> {
        self.groups
            .iter()
            .filter(|g| g.is_top_level())
            .cloned()
            .collect()
    }

    pub fn by_id(&self, id: i64) -> Option<Group> {
        self.groups.iter().find(|g| g.id == id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.groups.iter().any(|g| g.id == id)
    }

    /// Children of the group with `id`, or `None` when no such group exists.
    ///
    /// A childless group yields `Some(empty)`; callers rely on the
    /// distinction to report unknown ids.
    pub fn children_of(&self, id: i64) -> Option<Vec<Group>> {
        if !self.contains(id) {
            return None;
        }
        Some(self.groups.iter().filter(|g| g.parent == id).cloned().collect())
    }

    /// Adds a group, assigning `current count + 1` as the id when the caller
    /// supplied 0. Ids of explicit-id groups are not checked for collisions.
    pub fn create(&mut self, mut group: Group) -> Result<Group> {
        if group.name.is_empty() {
            return Err(Error::Validation("group_name"));
        }
        if group.id == 0 {
            group.id = self.groups.len() as i64 + 1;
        }
        info!(id = group.id, name = %group.name, "group created");
        self.groups.push(group.clone());
        Ok(group)
    }

    /// Replaces the group with `id` wholesale. The path id always wins over
    /// whatever id the body carried.
    pub fn update(&mut self, id: i64, mut group: Group) -> Result<Group> {
        if group.name.is_empty() {
            return Err(Error::Validation("group_name"));
        }
        group.id = id;
        match self.groups.iter_mut().find(|g| g.id == id) {
            Some(stored) => {
                *stored = group.clone();
                info!(id, "group updated");
                Ok(group)
            }
            None => Err(Error::NotFound(format!("group {id} does not exist"))),
        }
    }

    /// Removes the group with `id` unless anything still references it:
    /// other groups through `parent`, or tasks through `group`.
    pub fn delete(&mut self, id: i64, tasks: &TaskStore) -> Result<()> {
        if !self.contains(id) {
            return Err(Error::NotFound(format!("group {id} does not exist")));
        }
        if self.groups.iter().any(|g| g.parent == id) {
            warn!(id, "delete blocked: group has child groups");
            return Err(Error::Conflict(format!("group {id} has child groups")));
        }
        if tasks.references_group(id) {
            warn!(id, "delete blocked: group still has tasks");
            return Err(Error::Conflict(format!("group {id} still has tasks")));
        }
        self.groups.retain(|g| g.id != id);
        info!(id, "group deleted");
        Ok(())
    }
}
