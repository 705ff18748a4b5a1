use serde::{Deserialize, Serialize};

/// Deadline label shown (and stored) for tasks without a real deadline.
pub const NO_DEADLINE: &str = "add deadline";

/// Task text rejected on both the create and edit paths. Kept identical to
/// the value existing stores were written against.
pub const RESERVED_TEXT: &str = "AMCbridge";

/// Session-stable handle for a task. Assigned by the list at insert/load
/// time and never persisted; two tasks with identical fields still get
/// distinct ids.
pub type TaskId = u64;

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// List-assigned handle, valid for this process only
    #[serde(skip)]
    pub id: TaskId,
    /// Display text (trimmed, never empty)
    pub text: String,
    /// Checked off or not
    pub completed: bool,
    /// Either [`NO_DEADLINE`] or a `dd-mm-yyyy` date string
    pub deadline: String,
}

/// Equality is over the persisted fields; `id` is an identity handle,
/// not a value, and two value-equal tasks are still distinct entities.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.completed == other.completed
            && self.deadline == other.deadline
    }
}

impl Eq for Task {}

impl Task {
    /// Create an unsaved task with id 0 (the list assigns the real id)
    pub fn new(text: String, deadline: String) -> Self {
        Task {
            id: 0,
            text,
            completed: false,
            deadline,
        }
    }

    /// Whether the deadline field holds a real date rather than the label
    pub fn has_deadline(&self) -> bool {
        self.deadline != NO_DEADLINE
    }
}

/// Ordered task collection, the single source of truth.
///
/// New tasks append at the end; order is stable under toggle/edit/deadline
/// changes and only changes on deletion.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Build a list from loaded records, assigning fresh ids in order
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut list = TaskList::new();
        for task in tasks {
            list.push(task);
        }
        list
    }

    /// Append a task, assigning its id. Returns the assigned id.
    pub fn push(&mut self, mut task: Task) -> TaskId {
        self.next_id += 1;
        task.id = self.next_id;
        let id = task.id;
        self.tasks.push(task);
        id
    }

    /// Remove the task with this id. Unknown ids leave the list unchanged.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Task id at a 0-based list position
    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.tasks.get(index).map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The ordered records, for serialization
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_distinct_ids() {
        let mut list = TaskList::new();
        let a = list.push(Task::new("one".into(), NO_DEADLINE.into()));
        let b = list.push(Task::new("one".into(), NO_DEADLINE.into()));
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut list = TaskList::new();
        let _a = list.push(Task::new("a".into(), NO_DEADLINE.into()));
        let b = list.push(Task::new("b".into(), NO_DEADLINE.into()));
        let _c = list.push(Task::new("c".into(), NO_DEADLINE.into()));

        assert!(list.remove(b).is_some());
        let texts: Vec<&str> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = TaskList::new();
        list.push(Task::new("a".into(), NO_DEADLINE.into()));
        assert!(list.remove(999).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn from_tasks_reassigns_ids() {
        let loaded = vec![
            Task::new("a".into(), NO_DEADLINE.into()),
            Task::new("b".into(), "01-02-2099".into()),
        ];
        let list = TaskList::from_tasks(loaded);
        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn serde_skips_id() {
        let mut list = TaskList::new();
        list.push(Task::new("a".into(), NO_DEADLINE.into()));
        let json = serde_json::to_string(list.tasks()).unwrap();
        assert!(!json.contains("\"id\""));

        let back: Vec<Task> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].id, 0);
        assert_eq!(back[0].text, "a");
    }
}
