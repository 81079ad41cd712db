//! # taskhub
//!
//! An in-memory task and group manager served over HTTP.
//!
//! Groups form a shallow hierarchy (a group has at most one parent, and the
//! tree is never resolved past one level); tasks attach to exactly one group
//! and are identified by a content-addressed id derived from their text and
//! group, which doubles as the duplicate check. Groups can only be deleted
//! once nothing references them: no child groups, no tasks.
//!
//! ## Running
//!
//! ```bash
//! taskhub                 # listen on 127.0.0.1:1323
//! taskhub --port 8080     # or TASKHUB_PORT=8080
//! taskhub completions zsh # shell completions
//! ```
//!
//! The process starts with four seeded groups and no tasks. State lives in
//! memory only; a restart starts fresh.
//!
//! ## Endpoints
//!
//! ```text
//! GET    /groups?sort=&limit=        list groups (name, parents_first, parent_with_childs)
//! GET    /group/top_parents          groups without a parent
//! GET    /group/{id}                 single group
//! GET    /group/childs/{id}          children of a group
//! POST   /group/new                  create group
//! PUT    /group/{id}                 update group
//! DELETE /group/{id}                 delete group (guarded)
//! GET    /tasks?type=&sort=&limit=   list tasks (type and sort are mandatory)
//! POST   /tasks/new                  create task
//! PUT    /tasks/{id}                 update task text/group
//! GET    /tasks/group/{id}?type=     tasks of one group
//! POST   /tasks/{id}?finished=       complete / uncomplete a task
//! ```

pub mod error;
pub mod groups;
pub mod ident;
pub mod models;
pub mod query;
pub mod rest;
pub mod state;
pub mod tasks;
