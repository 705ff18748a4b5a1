use serde::Serialize;

use crate::model::task::{Task, TaskList};

/// One task as emitted by `--json`
#[derive(Serialize)]
pub struct TaskJson {
    pub position: usize,
    pub text: String,
    pub completed: bool,
    pub deadline: String,
}

impl TaskJson {
    fn from_task(position: usize, task: &Task) -> Self {
        TaskJson {
            position,
            text: task.text.clone(),
            completed: task.completed,
            deadline: task.deadline.clone(),
        }
    }
}

/// Print the full list, human table or JSON
pub fn print_tasks(list: &TaskList, json: bool) {
    if json {
        let tasks: Vec<TaskJson> = list
            .iter()
            .enumerate()
            .map(|(i, t)| TaskJson::from_task(i + 1, t))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&tasks).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }

    if list.is_empty() {
        println!("nothing to do");
        return;
    }
    for (i, task) in list.iter().enumerate() {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        println!("{:>3} {} {}  ({})", i + 1, checkbox, task.text, task.deadline);
    }
}
