use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::NO_DEADLINE;
use crate::ops::task_ops;
use crate::tui::app::{App, DeadlineTarget, Mode};

use super::common;

/// Keys for the new-task input row.
///
/// Submission and rejection are both silent: a valid buffer becomes a task
/// and the row resets, an invalid one (empty, whitespace, reserved text)
/// leaves everything as it was.
pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            submit_new_task(app);
        }
        // checkbox-like affordance: opens the date picker for the
        // not-yet-created task
        KeyCode::Tab => {
            app.picker = Some(DeadlineTarget::NewTask);
            app.picker_input.clear();
            app.mode = Mode::Deadline;
        }
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }

        KeyCode::Char(c) => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::insert_char(buffer, cursor, c);
        }
        KeyCode::Backspace => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::backspace(buffer, cursor);
        }
        KeyCode::Delete => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::delete_forward(buffer, cursor);
        }
        KeyCode::Left => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::move_left(buffer, cursor);
        }
        KeyCode::Right => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::move_right(buffer, cursor);
        }
        KeyCode::Home => {
            let (_, cursor) = app.active_buffer_mut();
            common::move_home(cursor);
        }
        KeyCode::End => {
            let (buffer, cursor) = app.active_buffer_mut();
            common::move_end(buffer, cursor);
        }
        _ => {}
    }
}

/// Create a task from the input buffer and the pending deadline label,
/// then reset both. Rejected input leaves the buffer for the user to fix.
fn submit_new_task(app: &mut App) {
    let text = app.input.clone();
    let deadline = app.pending_deadline.clone();
    if task_ops::add_task(&mut app.tasks, &text, deadline).is_ok() {
        app.input.clear();
        app.input_cursor = 0;
        app.pending_deadline = NO_DEADLINE.to_string();
        app.save();
    }
}
