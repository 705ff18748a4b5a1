use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::{Task, TaskList};

/// File name of the task store slot inside the data directory
pub const TASKS_FILE: &str = "tasks.json";

/// Error type for store writes. Reads never error: absent or malformed
/// content degrades to an empty list.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolve the data directory: `--dir` flag, then `TUDU_DIR`, then
/// `~/.tudu`.
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    if let Some(dir) = std::env::var_os("TUDU_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tudu")
}

/// Load the task store. Missing file or content that fails to parse both
/// yield an empty list; the user never sees a load error.
pub fn load_tasks(data_dir: &Path) -> TaskList {
    let path = data_dir.join(TASKS_FILE);
    let tasks = fs::read_to_string(&path)
        .ok()
        .and_then(|content| serde_json::from_str::<Vec<Task>>(&content).ok())
        .unwrap_or_default();
    TaskList::from_tasks(tasks)
}

/// Write the full ordered task sequence to the slot, replacing prior
/// content. Writes go through a temp file in the same directory so a
/// crashed save never leaves a half-written store. Safe to call twice.
pub fn save_tasks(data_dir: &Path, list: &TaskList) -> Result<(), StoreError> {
    fs::create_dir_all(data_dir).map_err(|e| StoreError::CreateDir {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let path = data_dir.join(TASKS_FILE);
    let content = serde_json::to_string_pretty(list.tasks())?;

    let tmp = NamedTempFile::new_in(data_dir).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    fs::write(tmp.path(), content).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    tmp.persist(&path).map_err(|e| StoreError::Write {
        path,
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::NO_DEADLINE;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut list = TaskList::new();
        list.push(Task::new("first".into(), NO_DEADLINE.into()));
        let mut done = Task::new("second".into(), "24-10-2099".into());
        done.completed = true;
        list.push(done);

        save_tasks(dir.path(), &list).unwrap();
        let loaded = load_tasks(dir.path());

        assert_eq!(loaded.tasks(), list.tasks());
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn load_malformed_json_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASKS_FILE), "not json {{{").unwrap();
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASKS_FILE), r#"{"tasks": 3}"#).unwrap();
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn save_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("tudu");
        save_tasks(&nested, &TaskList::new()).unwrap();
        assert!(nested.join(TASKS_FILE).exists());
    }

    #[test]
    fn save_overwrites_prior_content() {
        let dir = TempDir::new().unwrap();
        let mut list = TaskList::new();
        list.push(Task::new("old".into(), NO_DEADLINE.into()));
        save_tasks(dir.path(), &list).unwrap();

        let mut list2 = TaskList::new();
        list2.push(Task::new("new".into(), NO_DEADLINE.into()));
        save_tasks(dir.path(), &list2).unwrap();

        let loaded = load_tasks(dir.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.iter().next().unwrap().text, "new");
    }

    #[test]
    fn data_dir_precedence() {
        let explicit = Path::new("/tmp/somewhere");
        assert_eq!(data_dir(Some(explicit)), PathBuf::from("/tmp/somewhere"));
    }
}
