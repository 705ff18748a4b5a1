//! Round-trip and lifecycle tests for the task store: what goes through
//! `save_tasks`/`load_tasks` and the mutation ops must come back in content
//! and order.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use tudu::io::store_io::{load_tasks, save_tasks};
use tudu::model::task::{NO_DEADLINE, Task, TaskList};
use tudu::ops::task_ops;

fn sample_list() -> TaskList {
    let mut list = TaskList::new();
    for i in 0..5 {
        let mut task = Task::new(format!("task {}", i), NO_DEADLINE.into());
        if i % 2 == 0 {
            task.completed = true;
        }
        if i == 3 {
            task.deadline = "24-10-2099".to_string();
        }
        list.push(task);
    }
    list
}

#[test]
fn round_trip_preserves_content_and_order() {
    let dir = TempDir::new().unwrap();
    let list = sample_list();

    save_tasks(dir.path(), &list).unwrap();
    let loaded = load_tasks(dir.path());

    assert_eq!(loaded.tasks(), list.tasks());
}

#[test]
fn round_trip_after_each_mutation() {
    let dir = TempDir::new().unwrap();
    let mut list = sample_list();

    let id = list.id_at(1).unwrap();
    task_ops::toggle_task(&mut list, id).unwrap();
    save_tasks(dir.path(), &list).unwrap();
    assert_eq!(load_tasks(dir.path()).tasks(), list.tasks());

    task_ops::commit_edit(&mut list, id, "rewritten").unwrap();
    save_tasks(dir.path(), &list).unwrap();
    assert_eq!(load_tasks(dir.path()).tasks(), list.tasks());

    task_ops::delete_task(&mut list, id);
    save_tasks(dir.path(), &list).unwrap();
    assert_eq!(load_tasks(dir.path()).tasks(), list.tasks());
    assert_eq!(load_tasks(dir.path()).len(), 4);
}

#[test]
fn double_save_is_idempotent() {
    // the teardown hook may save right after a mutation's write-through
    let dir = TempDir::new().unwrap();
    let list = sample_list();

    save_tasks(dir.path(), &list).unwrap();
    save_tasks(dir.path(), &list).unwrap();

    assert_eq!(load_tasks(dir.path()).tasks(), list.tasks());
}

#[test]
fn unknown_fields_in_store_are_tolerated() {
    // hand-edited or older stores may carry extras; load keeps the list
    // rather than degrading to empty
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tasks.json"),
        r#"[{"text":"a","completed":false,"deadline":"add deadline","color":"red"}]"#,
    )
    .unwrap();

    let loaded = load_tasks(dir.path());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.iter().next().unwrap().text, "a");
}

#[test]
fn full_lifecycle_scenario() {
    // start empty → create → toggle → edit (un-completes) → delete
    let dir = TempDir::new().unwrap();
    let mut list = load_tasks(dir.path());
    assert!(list.is_empty());

    let id = task_ops::add_task(&mut list, "Buy milk", NO_DEADLINE.into()).unwrap();
    save_tasks(dir.path(), &list).unwrap();
    {
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.deadline, NO_DEADLINE);
    }

    task_ops::toggle_task(&mut list, id).unwrap();
    assert!(list.get(id).unwrap().completed);

    task_ops::commit_edit(&mut list, id, "Buy oat milk").unwrap();
    {
        let task = list.get(id).unwrap();
        assert_eq!(task.text, "Buy oat milk");
        assert!(!task.completed);
        assert_eq!(task.deadline, NO_DEADLINE);
    }

    task_ops::delete_task(&mut list, id);
    assert!(list.is_empty());
    save_tasks(dir.path(), &list).unwrap();
    assert!(load_tasks(dir.path()).is_empty());
}
