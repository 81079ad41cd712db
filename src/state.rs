use tokio::sync::RwLock;

use crate::groups::GroupStore;
use crate::models::Group;
use crate::tasks::TaskStore;

/// Shared application state: both stores behind their own reader/writer
/// locks.
///
/// Lock order is `groups` before `tasks` on every path that needs both
/// (group delete, task create), so the two-lock paths cannot deadlock.
#[derive(Default)]
pub struct AppState {
    pub groups: RwLock<GroupStore>,
    pub tasks: RwLock<TaskStore>,
}

impl AppState {
    /// Empty state, no groups and no tasks.
    pub fn new() -> Self {
        Self::default()
    }

    /// State preloaded with the four groups the service has always started
    /// with. The cross-linked parent graph (1 and 3 under 2, 4 under 1) is
    /// part of the observable default behavior.
    pub fn seeded() -> Self {
        let seed: Vec<Group> = [("One", 1, 2), ("Two", 2, 0), ("Three", 3, 2), ("Four", 4, 1)]
            .into_iter()
            .map(|(name, id, parent)| Group {
                name: name.to_string(),
                description: String::new(),
                id,
                parent,
            })
            .collect();
        Self {
            groups: RwLock::new(GroupStore::from(seed)),
            tasks: RwLock::new(TaskStore::new()),
        }
    }
}
