use chrono::{Local, NaiveDate};

use crate::model::task::{TaskId, TaskList};
use crate::ops::task_ops::TaskError;

/// Storage/display format for deadlines: `31-12-2026`
pub const DEADLINE_FORMAT: &str = "%d-%m-%Y";

/// Error type for deadline operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeadlineError {
    #[error("not a valid dd-mm-yyyy date: {0}")]
    Unparseable(String),
    #[error("deadline must be after today")]
    NotInFuture,
    #[error("deadline must be before the year 2100")]
    BeyondHorizon,
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// Parse user input in `dd-mm-yyyy` form
pub fn parse_deadline(input: &str) -> Result<NaiveDate, DeadlineError> {
    NaiveDate::parse_from_str(input.trim(), DEADLINE_FORMAT)
        .map_err(|_| DeadlineError::Unparseable(input.trim().to_string()))
}

/// Format a date into the fixed storage form
pub fn format_deadline(date: NaiveDate) -> String {
    date.format(DEADLINE_FORMAT).to_string()
}

/// Accept dates strictly after `today` and strictly before 1 Jan 2100
fn validate(date: NaiveDate, today: NaiveDate) -> Result<(), DeadlineError> {
    if date <= today {
        return Err(DeadlineError::NotInFuture);
    }
    // matches the picker bounds: nothing on or after the 2100 cutoff
    let cutoff = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    if date >= cutoff {
        return Err(DeadlineError::BeyondHorizon);
    }
    Ok(())
}

/// Validate against the current day. Split from [`set_deadline`] so the
/// new-task picker can vet a date before any task exists.
pub fn validate_deadline(date: NaiveDate) -> Result<(), DeadlineError> {
    validate(date, Local::now().date_naive())
}

/// Set a task's deadline to the formatted form of `date`.
/// Rejected dates leave the task untouched.
pub fn set_deadline(list: &mut TaskList, id: TaskId, date: NaiveDate) -> Result<(), DeadlineError> {
    validate_deadline(date)?;
    let task = list.get_mut(id).ok_or(TaskError::NotFound(id))?;
    task.deadline = format_deadline(date);
    Ok(())
}
