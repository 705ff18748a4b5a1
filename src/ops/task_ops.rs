use crate::model::task::{RESERVED_TEXT, Task, TaskId, TaskList};

/// Error type for task mutations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("task text is empty")]
    EmptyText,
    #[error("task text is not allowed")]
    ReservedText,
    #[error("task not found")]
    NotFound(TaskId),
}

/// Trim and validate task text for both the create and edit paths.
/// The reserved-literal check runs against the trimmed value.
fn validate_text(text: &str) -> Result<&str, TaskError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    if trimmed == RESERVED_TEXT {
        return Err(TaskError::ReservedText);
    }
    Ok(trimmed)
}

/// Append a new uncompleted task. Returns the assigned id.
pub fn add_task(
    list: &mut TaskList,
    text: &str,
    deadline_label: String,
) -> Result<TaskId, TaskError> {
    let trimmed = validate_text(text)?;
    Ok(list.push(Task::new(trimmed.to_string(), deadline_label)))
}

/// Flip a task's completed flag in place
pub fn toggle_task(list: &mut TaskList, id: TaskId) -> Result<(), TaskError> {
    let task = list.get_mut(id).ok_or(TaskError::NotFound(id))?;
    task.completed = !task.completed;
    Ok(())
}

/// Remove a task. Unknown ids are a no-op (the store is left unchanged).
pub fn delete_task(list: &mut TaskList, id: TaskId) -> Option<Task> {
    list.remove(id)
}

/// Replace a task's text with the trimmed value.
///
/// Committing an edit always resets `completed` to false, whatever it was
/// before. Kept for compatibility with the stored data this behavior was
/// shipped with; see DESIGN.md.
pub fn commit_edit(list: &mut TaskList, id: TaskId, new_text: &str) -> Result<(), TaskError> {
    let trimmed = validate_text(new_text)?;
    let task = list.get_mut(id).ok_or(TaskError::NotFound(id))?;
    task.text = trimmed.to_string();
    task.completed = false;
    Ok(())
}
