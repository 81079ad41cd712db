use taskhub::error::Error;
use taskhub::groups::GroupStore;
use taskhub::ident;
use taskhub::models::{Group, TaskDraft};
use taskhub::query::{TaskFilter, TaskSort};
use taskhub::tasks::{TaskStore, ToggleOutcome};

fn groups() -> GroupStore {
    let mut store = GroupStore::new();
    for (id, name) in [(1, "One"), (2, "Two"), (3, "Three")] {
        store
            .create(Group {
                name: name.into(),
                description: String::new(),
                id,
                parent: 0,
            })
            .unwrap();
    }
    store
}

fn draft(text: &str, group: i64) -> TaskDraft {
    TaskDraft {
        group,
        task: text.into(),
    }
}

#[test]
fn create_derives_the_id_and_stamps_creation() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    let task = tasks.create(draft("buy milk", 2), &groups).unwrap();

    assert_eq!(task.id, ident::derive("buy milk", 2));
    assert_eq!(task.id.len(), 10);
    assert!(!task.completed);
    assert!(!task.created_at.is_empty());
    assert!(task.completed_at.is_empty());
}

#[test]
fn creating_the_same_task_twice_is_a_conflict() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    tasks.create(draft("buy milk", 2), &groups).unwrap();
    let err = tasks.create(draft("buy milk", 2), &groups).unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // Same text in another group is a different task.
    tasks.create(draft("buy milk", 3), &groups).unwrap();
}

#[test]
fn create_validates_its_fields() {
    let groups = groups();
    let mut tasks = TaskStore::new();

    assert_eq!(
        tasks.create(draft("", 2), &groups).unwrap_err(),
        Error::Validation("task")
    );
    assert_eq!(
        tasks.create(draft("buy milk", 0), &groups).unwrap_err(),
        Error::Validation("group_id")
    );
    assert!(matches!(
        tasks.create(draft("buy milk", 42), &groups).unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn toggle_sets_and_clears_the_completion_stamp() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    let task = tasks.create(draft("buy milk", 2), &groups).unwrap();

    let done = match tasks.set_status(&task.id, true).unwrap() {
        ToggleOutcome::Changed(t) => t,
        other => panic!("expected a transition, got {other:?}"),
    };
    assert!(done.completed);
    assert!(!done.completed_at.is_empty());

    // Asking again for the same state changes nothing, including the stamp.
    let again = match tasks.set_status(&task.id, true).unwrap() {
        ToggleOutcome::AlreadySet(t) => t,
        other => panic!("expected already-set, got {other:?}"),
    };
    assert_eq!(again.completed_at, done.completed_at);

    let reopened = match tasks.set_status(&task.id, false).unwrap() {
        ToggleOutcome::Changed(t) => t,
        other => panic!("expected a transition, got {other:?}"),
    };
    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_empty());
}

#[test]
fn toggle_of_a_missing_task_is_not_found() {
    let mut tasks = TaskStore::new();
    assert!(matches!(
        tasks.set_status("deadbeef00", true).unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn update_rewrites_identity_but_keeps_status() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    let task = tasks.create(draft("buy milk", 2), &groups).unwrap();
    tasks.set_status(&task.id, true).unwrap();

    let updated = tasks.update(&task.id, draft("buy bread", 3)).unwrap();
    assert_eq!(updated.id, ident::derive("buy bread", 3));
    assert_eq!(updated.group, 3);
    assert!(updated.completed);
    assert!(!updated.completed_at.is_empty());
    assert_eq!(updated.created_at, task.created_at);
}

#[test]
fn update_rejects_colliding_identities() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    let a = tasks.create(draft("buy milk", 2), &groups).unwrap();
    tasks.create(draft("buy bread", 2), &groups).unwrap();

    // Rewriting a into b's identity collides.
    assert!(matches!(
        tasks.update(&a.id, draft("buy bread", 2)).unwrap_err(),
        Error::Conflict(_)
    ));
    // So does rewriting a into its own current identity.
    assert!(matches!(
        tasks.update(&a.id, draft("buy milk", 2)).unwrap_err(),
        Error::Conflict(_)
    ));
}

#[test]
fn update_of_a_missing_task_is_not_found() {
    let mut tasks = TaskStore::new();
    assert!(matches!(
        tasks.update("deadbeef00", draft("buy milk", 2)).unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn list_sorts_by_group_and_honors_the_limit() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    tasks.create(draft("third", 3), &groups).unwrap();
    tasks.create(draft("first", 1), &groups).unwrap();

    let head = tasks.list(TaskFilter::All, TaskSort::Group, Some(1));
    assert_eq!(head.len(), 1);
    assert_eq!(head[0].group, 1);
}

#[test]
fn list_sorts_by_name() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    tasks.create(draft("wash car", 1), &groups).unwrap();
    tasks.create(draft("buy milk", 1), &groups).unwrap();

    let texts: Vec<String> = tasks
        .list(TaskFilter::All, TaskSort::Name, None)
        .iter()
        .map(|t| t.task.clone())
        .collect();
    assert_eq!(texts, vec!["buy milk", "wash car"]);
}

#[test]
fn completed_and_working_partition_all() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    let a = tasks.create(draft("a", 1), &groups).unwrap();
    tasks.create(draft("b", 2), &groups).unwrap();
    tasks.create(draft("c", 3), &groups).unwrap();
    tasks.set_status(&a.id, true).unwrap();

    let all = tasks.list(TaskFilter::All, TaskSort::Name, None);
    let completed = tasks.list(TaskFilter::Completed, TaskSort::Name, None);
    let working = tasks.list(TaskFilter::Working, TaskSort::Name, None);

    assert_eq!(completed.len() + working.len(), all.len());
    let mut union: Vec<String> = completed
        .iter()
        .chain(working.iter())
        .map(|t| t.id.clone())
        .collect();
    union.sort();
    let mut all_ids: Vec<String> = all.iter().map(|t| t.id.clone()).collect();
    all_ids.sort();
    assert_eq!(union, all_ids);
}

#[test]
fn by_group_filters_within_one_group() {
    let groups = groups();
    let mut tasks = TaskStore::new();
    let a = tasks.create(draft("a", 1), &groups).unwrap();
    tasks.create(draft("b", 1), &groups).unwrap();
    tasks.create(draft("c", 2), &groups).unwrap();
    tasks.set_status(&a.id, true).unwrap();

    assert_eq!(tasks.by_group(1, TaskFilter::All).len(), 2);
    assert_eq!(tasks.by_group(1, TaskFilter::Completed).len(), 1);
    assert_eq!(tasks.by_group(1, TaskFilter::Working).len(), 1);
    // No existence check: an unknown group simply has no tasks.
    assert!(tasks.by_group(42, TaskFilter::All).is_empty());
}
